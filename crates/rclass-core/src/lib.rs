#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for rclass.
//!
//! - `resource_type` - Android resource types, one inner class each
//! - `identifier` - Java member name rules
//! - `names` - package and binary class name helpers

pub mod identifier;
pub mod names;
pub mod resource_type;

#[cfg(test)]
mod names_tests;

pub use identifier::{IdentifierError, validate_member_name};
pub use names::{
    JAVA_LANG_OBJECT, OUTER_CLASS_SIMPLE_NAME, SOURCE_FILE_NAME, binary_name, inner_class_name,
    outer_class_name, package_dir,
};
pub use resource_type::{ResourceType, UnknownResourceType};
