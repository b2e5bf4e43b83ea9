//! Class file format for rclass.
//!
//! This crate contains:
//! - Format constants (magic, version, access flags, opcodes)
//! - A writer: constant pool, symbolic code, fields, methods, class attributes
//! - A reader for the same subset, and a human-readable dump

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod annotation;
pub mod code;
pub mod constant_pool;
pub mod constants;
pub mod descriptor;
pub mod dump;
pub mod error;
pub mod insn;
pub mod reader;
pub mod writer;

#[cfg(test)]
mod constant_pool_tests;

pub use annotation::{Annotation, ElementValue};
pub use code::{Code, EncodedCode};
pub use constant_pool::{Constant, ConstantPool};
pub use constants::{MAGIC, MAJOR_VERSION, MAX_CODE_SIZE, MINOR_VERSION, access};
pub use dump::dump;
pub use error::ClassFormatError;
pub use insn::{ArrayType, Insn, MemberRef};
pub use reader::{Attribute, ClassFile, CodeInfo, FieldInfo, Instruction, MethodInfo};
pub use writer::{ClassWriter, ConstantValue, FieldWriter, InnerClass, MethodWriter};
