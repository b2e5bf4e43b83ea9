use std::io;
use std::path::PathBuf;

use rclass_bytecode::ClassFormatError;
use rclass_core::IdentifierError;

/// Errors raised while generating classes. Nothing is retried; the first
/// error aborts the pass and files already written stay on disk.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("invalid field name `{field}` in class {class} and package {}: {reason}", dir.display())]
    InvalidIdentifier {
        field: String,
        class: String,
        dir: PathBuf,
        #[source]
        reason: IdentifierError,
    },

    #[error("field {class}.{field} is too big to initialize")]
    OversizedInitializer { class: String, field: String },

    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Assembler(#[from] ClassFormatError),

    #[error("provenance annotations require a label")]
    MissingProvenanceLabel,
}
