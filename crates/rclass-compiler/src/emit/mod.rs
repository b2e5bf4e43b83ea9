//! Class file emission.
//!
//! `ClassBuilder` drives one package at a time: the outer `R`, one inner class
//! per resource type, and the shared id class once per builder. Inner classes
//! whose deferred fields do not fit one method get a chain of initializers
//! planned by the splitter.

mod class_builder;
mod error;
mod files;
mod inner_class;
mod satellite;
mod shell;
pub mod splitter;

#[cfg(test)]
mod splitter_tests;

pub use class_builder::{ClassBuilder, GenerationRequest};
pub use error::GenerateError;
pub use inner_class::emit_inner_class;
pub use satellite::shared_id_class;
pub use splitter::{InitializerMethod, split};
