//! R class generator.
//!
//! Writes the compiled `R` class of an Android package, and one `R$<type>`
//! class per resource type, straight to class files:
//! - `fields` - field initializers, one per resource symbol
//! - `emit` - class builder, inner class emitter and method splitter
//! - `symbols` - `R.txt` symbol file parser
//! - `config` - generation flags shared by every request of a builder

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod emit;
pub mod fields;
pub mod symbols;

#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use emit::{ClassBuilder, GenerateError, GenerationRequest, InitializerMethod};
pub use fields::{
    FieldInitializer, FieldInitializers, IntArrayFieldInitializer, IntFieldInitializer,
    SharedIdDescriptor,
};
pub use symbols::{SymbolsError, parse_symbols};

/// Result type for generation.
pub type Result<T> = std::result::Result<T, GenerateError>;
