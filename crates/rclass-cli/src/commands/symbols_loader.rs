use std::fs;
use std::path::{Path, PathBuf};

use rclass_compiler::{FieldInitializers, parse_symbols};

use super::CommandError;

/// One `--symbols` value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolsInput {
    /// Dependency that owns the file; `None` for the package's own symbols.
    pub label: Option<String>,
    pub path: PathBuf,
}

/// Parse every input and merge them in order. The first file to declare a
/// `(type, name)` decides its value.
pub fn load_symbols(inputs: &[SymbolsInput]) -> Result<FieldInitializers, CommandError> {
    let mut merged = FieldInitializers::new();
    for input in inputs {
        let fields = load_symbols_file(&input.path, input.label.as_deref())?;
        tracing::debug!(
            path = %input.path.display(),
            label = input.label.as_deref().unwrap_or(""),
            symbols = fields.len(),
            "loaded symbols"
        );
        merged.merge(&fields);
    }
    Ok(merged)
}

pub fn load_symbols_file(
    path: &Path,
    label: Option<&str>,
) -> Result<FieldInitializers, CommandError> {
    let source = fs::read_to_string(path).map_err(|source| CommandError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_symbols(&source, label).map_err(|source| CommandError::Symbols {
        path: path.to_path_buf(),
        source,
    })
}
