use std::io;
use std::path::PathBuf;

use rclass_bytecode::ClassFormatError;
use rclass_compiler::{GenerateError, SymbolsError};

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}: {source}", path.display())]
    Symbols {
        path: PathBuf,
        #[source]
        source: SymbolsError,
    },

    #[error("{}: {source}", path.display())]
    Class {
        path: PathBuf,
        #[source]
        source: ClassFormatError,
    },

    #[error(transparent)]
    Generate(#[from] GenerateError),
}
