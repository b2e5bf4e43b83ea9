//! Java member name rules.
//!
//! Generated fields are read by javac as ordinary members, so a name that is
//! legal in the class file format but not in Java source (a keyword, a name
//! starting with a digit) would still break every consumer of `R`.

/// Reserved words and literals that can never name a member.
const RESERVED: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("identifier is empty")]
    Empty,

    #[error("`{0}` is a reserved Java keyword")]
    Reserved(String),

    #[error("`{name}` cannot start with {ch:?}")]
    InvalidStart { name: String, ch: char },

    #[error("`{name}` contains illegal character {ch:?} at position {index}")]
    InvalidChar {
        name: String,
        ch: char,
        index: usize,
    },
}

/// Check that `name` is usable as a Java field name.
pub fn validate_member_name(name: &str) -> Result<(), IdentifierError> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err(IdentifierError::Empty);
    };

    if !is_identifier_start(first) {
        return Err(IdentifierError::InvalidStart {
            name: name.to_string(),
            ch: first,
        });
    }

    for (index, ch) in name.chars().enumerate().skip(1) {
        if !is_identifier_part(ch) {
            return Err(IdentifierError::InvalidChar {
                name: name.to_string(),
                ch,
                index,
            });
        }
    }

    if RESERVED.contains(&name) {
        return Err(IdentifierError::Reserved(name.to_string()));
    }

    Ok(())
}

pub fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_' || ch == '$'
}

pub fn is_identifier_part(ch: char) -> bool {
    is_identifier_start(ch) || ch.is_numeric()
}
