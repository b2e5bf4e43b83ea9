use std::ops::Range;
use std::sync::Arc;

use logos::Logos;
use rclass_core::ResourceType;

use crate::fields::{FieldInitializers, IntArrayFieldInitializer, IntFieldInitializer};

use super::SymbolsError;
use super::lexer::Token;

/// Parse an `R.txt` file into initializers, in file order.
///
/// With `dependency`, every symbol is recorded as coming from that label.
pub fn parse_symbols(
    source: &str,
    dependency: Option<&str>,
) -> Result<FieldInitializers, SymbolsError> {
    let mut parser = Parser::new(source)?;
    let mut fields = FieldInitializers::new();

    while !parser.at_end() {
        let line = parser.line();
        let entry = parser.parse_entry()?;
        if fields.contains(entry.ty, entry.name) {
            return Err(SymbolsError::Duplicate {
                line,
                ty: entry.ty,
                name: entry.name.to_string(),
            });
        }

        match entry.value {
            Value::Int(value) => {
                let mut field = IntFieldInitializer::new(entry.name, value);
                if let Some(label) = dependency {
                    field = field.from_dependency(label);
                }
                fields.push(entry.ty, Arc::new(field));
            }
            Value::Array(values) => {
                let mut field = IntArrayFieldInitializer::new(entry.name, values);
                if let Some(label) = dependency {
                    field = field.from_dependency(label);
                }
                fields.push(entry.ty, Arc::new(field));
            }
        }
    }

    tracing::debug!(symbols = fields.len(), "parsed symbol file");
    Ok(fields)
}

struct Entry<'src> {
    ty: ResourceType,
    name: &'src str,
    value: Value,
}

enum Value {
    Int(i32),
    Array(Vec<i32>),
}

struct Parser<'src> {
    tokens: Vec<(Token<'src>, Range<usize>)>,
    pos: usize,
    input: &'src str,
}

impl<'src> Parser<'src> {
    fn new(input: &'src str) -> Result<Self, SymbolsError> {
        let mut tokens = Vec::new();
        for (result, span) in Token::lexer(input).spanned() {
            match result {
                Ok(token) => tokens.push((token, span)),
                Err(_) => {
                    return Err(SymbolsError::UnexpectedChar {
                        line: line_of(input, span.start),
                        text: input[span].to_string(),
                    });
                }
            }
        }
        Ok(Self {
            tokens,
            pos: 0,
            input,
        })
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> Option<&Token<'src>> {
        self.tokens.get(self.pos).map(|(t, _)| t)
    }

    fn advance(&mut self) -> Option<Token<'src>> {
        let token = self.tokens.get(self.pos).map(|(t, _)| t.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Line of the current token, or of the end of input.
    fn line(&self) -> usize {
        let offset = self
            .tokens
            .get(self.pos)
            .map(|(_, s)| s.start)
            .unwrap_or(self.input.len());
        line_of(self.input, offset)
    }

    fn unexpected(&self, expected: &'static str) -> SymbolsError {
        let found = match self.tokens.get(self.pos) {
            Some((_, span)) => format!("`{}`", &self.input[span.clone()]),
            None => "end of input".to_string(),
        };
        SymbolsError::Unexpected {
            line: self.line(),
            expected,
            found,
        }
    }

    fn expect(&mut self, expected: Token<'src>, what: &'static str) -> Result<(), SymbolsError> {
        match self.peek() {
            Some(t) if *t == expected => {
                self.pos += 1;
                Ok(())
            }
            _ => Err(self.unexpected(what)),
        }
    }

    fn parse_entry(&mut self) -> Result<Entry<'src>, SymbolsError> {
        let is_array = match self.peek() {
            Some(Token::Int) => false,
            Some(Token::IntArray) => true,
            _ => return Err(self.unexpected("`int` or `int[]`")),
        };
        self.pos += 1;

        let ty = self.parse_type()?;
        let name = self.parse_name()?;
        let value = if is_array {
            Value::Array(self.parse_array()?)
        } else {
            Value::Int(self.parse_value()?)
        };
        Ok(Entry { ty, name, value })
    }

    fn parse_type(&mut self) -> Result<ResourceType, SymbolsError> {
        let line = self.line();
        let name = self.parse_name_expecting("a resource type")?;
        name.parse::<ResourceType>()
            .map_err(|source| SymbolsError::UnknownType { line, source })
    }

    fn parse_name(&mut self) -> Result<&'src str, SymbolsError> {
        self.parse_name_expecting("a symbol name")
    }

    fn parse_name_expecting(&mut self, what: &'static str) -> Result<&'src str, SymbolsError> {
        match self.peek() {
            Some(Token::Name(name)) => {
                let name = *name;
                self.pos += 1;
                Ok(name)
            }
            _ => Err(self.unexpected(what)),
        }
    }

    fn parse_value(&mut self) -> Result<i32, SymbolsError> {
        let line = self.line();
        let invalid = |text: &str| SymbolsError::InvalidValue {
            line,
            text: text.to_string(),
        };
        match self.peek().cloned() {
            Some(Token::Hex(text)) => {
                self.advance();
                u32::from_str_radix(&text[2..], 16)
                    .map(|v| v as i32)
                    .map_err(|_| invalid(text))
            }
            Some(Token::Decimal(text)) => {
                self.advance();
                text.parse::<i64>()
                    .ok()
                    .and_then(|v| i32::try_from(v).ok())
                    .ok_or_else(|| invalid(text))
            }
            _ => Err(self.unexpected("a value")),
        }
    }

    fn parse_array(&mut self) -> Result<Vec<i32>, SymbolsError> {
        self.expect(Token::LBrace, "`{`")?;
        let mut values = Vec::new();
        if self.peek() == Some(&Token::RBrace) {
            self.advance();
            return Ok(values);
        }
        loop {
            values.push(self.parse_value()?);
            match self.peek() {
                Some(Token::Comma) => {
                    self.advance();
                }
                Some(Token::RBrace) => {
                    self.advance();
                    return Ok(values);
                }
                _ => return Err(self.unexpected("`,` or `}`")),
            }
        }
    }
}

fn line_of(input: &str, offset: usize) -> usize {
    input[..offset].matches('\n').count() + 1
}
