use logos::Logos;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
pub(super) enum Token<'src> {
    #[token("int")]
    Int,

    #[token("int[]")]
    IntArray,

    #[token("{")]
    LBrace,

    #[token("}")]
    RBrace,

    #[token(",")]
    Comma,

    #[regex(r"0[xX][0-9a-fA-F]+", |lex| lex.slice())]
    Hex(&'src str),

    #[regex(r"-?[0-9]+", |lex| lex.slice())]
    Decimal(&'src str),

    // Any name is accepted here; emission validates it as a Java identifier.
    #[regex(r"[A-Za-z_$][^ \t\r\n{},]*", |lex| lex.slice())]
    Name(&'src str),
}
