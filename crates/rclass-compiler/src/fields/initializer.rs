use std::fmt;

use rclass_bytecode::{Annotation, ClassWriter, Code, ElementValue};

use super::SharedIdDescriptor;

/// Annotation type recording which build label a class or field came from.
pub const PROVENANCE_DESCRIPTOR: &str = "Lcom/google/devtools/build/android/resources/Provenance;";
pub const PROVENANCE_LABEL_KEY: &str = "label";

/// One static field of an `R$<type>` class.
pub trait FieldInitializer: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;

    /// Upper bound on the bytes [`FieldInitializer::emit_initializer`] appends.
    fn max_code_size(&self, has_shared_id: bool) -> usize;

    /// Declare the field on `class`.
    ///
    /// Returns `true` when the value must be assigned from a static
    /// initializer, `false` when the declaration carries it as a constant.
    fn declare_field(
        &self,
        class: &mut ClassWriter,
        final_fields: bool,
        annotate_transitive: bool,
        shared_id: Option<&SharedIdDescriptor>,
    ) -> bool;

    /// Append the assignment of this field to `code`. With a shared id, local
    /// slot 1 already holds the runtime package id.
    fn emit_initializer(
        &self,
        code: &mut Code,
        class_name: &str,
        shared_id: Option<&SharedIdDescriptor>,
    );
}

/// `@Provenance(label = ...)`.
pub fn provenance_annotation(label: &str) -> Annotation {
    Annotation::new(PROVENANCE_DESCRIPTOR)
        .with(PROVENANCE_LABEL_KEY, ElementValue::String(label.to_string()))
}

/// Push `value`, rebased on the runtime package id when the shared class
/// owns it.
pub(crate) fn push_value(code: &mut Code, value: i32, shared_id: Option<&SharedIdDescriptor>) {
    match shared_id {
        Some(shared) if shared.owns(value) => {
            code.iload(1).push_int(shared.offset_of(value)).iadd();
        }
        _ => {
            code.push_int(value);
        }
    }
}
