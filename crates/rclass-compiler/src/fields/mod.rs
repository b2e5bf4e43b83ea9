//! Field initializers: one per resource symbol.
//!
//! An initializer knows how to declare its static field on an inner class and,
//! when the value cannot be a compile-time constant, how to assign it from a
//! static initializer method.

mod initializer;
mod initializers;
mod int_array;
mod int_field;
mod shared_id;

#[cfg(test)]
mod initializers_tests;
#[cfg(test)]
mod int_array_tests;

pub use initializer::{
    FieldInitializer, PROVENANCE_DESCRIPTOR, PROVENANCE_LABEL_KEY, provenance_annotation,
};
pub use initializers::FieldInitializers;
pub use int_array::IntArrayFieldInitializer;
pub use int_field::IntFieldInitializer;
pub use shared_id::SharedIdDescriptor;
