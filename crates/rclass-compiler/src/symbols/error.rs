use rclass_core::{ResourceType, UnknownResourceType};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SymbolsError {
    #[error("line {line}: unexpected character {text:?}")]
    UnexpectedChar { line: usize, text: String },

    #[error("line {line}: expected {expected}, found {found}")]
    Unexpected {
        line: usize,
        expected: &'static str,
        found: String,
    },

    #[error("line {line}: {source}")]
    UnknownType {
        line: usize,
        #[source]
        source: UnknownResourceType,
    },

    #[error("line {line}: value {text} does not fit in 32 bits")]
    InvalidValue { line: usize, text: String },

    #[error("line {line}: duplicate symbol {ty}/{name}")]
    Duplicate {
        line: usize,
        ty: ResourceType,
        name: String,
    },
}
