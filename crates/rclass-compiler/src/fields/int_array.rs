use rclass_bytecode::{ClassWriter, Code, MemberRef, access};

use super::initializer::{provenance_annotation, push_value};
use super::{FieldInitializer, SharedIdDescriptor};

const DESCRIPTOR: &str = "[I";

/// `public static [final] int[] <name>`, used for styleables.
///
/// Arrays have no constant form, so the field is always initialized in code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntArrayFieldInitializer {
    name: String,
    values: Vec<i32>,
    dependency: Option<String>,
}

impl IntArrayFieldInitializer {
    pub fn new(name: impl Into<String>, values: Vec<i32>) -> Self {
        Self {
            name: name.into(),
            values,
            dependency: None,
        }
    }

    pub fn from_dependency(mut self, label: impl Into<String>) -> Self {
        self.dependency = Some(label.into());
        self
    }
}

impl FieldInitializer for IntArrayFieldInitializer {
    fn name(&self) -> &str {
        &self.name
    }

    fn max_code_size(&self, has_shared_id: bool) -> usize {
        // ldc_w len, newarray int, ..., putstatic
        let fixed = 3 + 2 + 3;
        // dup, ldc_w index, ldc_w value, iastore
        let per_element = if has_shared_id {
            // plus iload_1, iadd
            1 + 3 + 3 + 1 + 2
        } else {
            1 + 3 + 3 + 1
        };
        fixed + per_element * self.values.len()
    }

    fn declare_field(
        &self,
        class: &mut ClassWriter,
        final_fields: bool,
        annotate_transitive: bool,
        _shared_id: Option<&SharedIdDescriptor>,
    ) -> bool {
        let mut flags = access::PUBLIC | access::STATIC;
        if final_fields {
            flags |= access::FINAL;
        }
        let field = class.field(flags, &self.name, DESCRIPTOR);
        if annotate_transitive && let Some(label) = &self.dependency {
            field.annotation(provenance_annotation(label));
        }
        true
    }

    fn emit_initializer(
        &self,
        code: &mut Code,
        class_name: &str,
        shared_id: Option<&SharedIdDescriptor>,
    ) {
        code.push_int(self.values.len() as i32).new_int_array();
        for (index, &value) in self.values.iter().enumerate() {
            code.dup().push_int(index as i32);
            push_value(code, value, shared_id);
            code.iastore();
        }
        code.put_static(MemberRef::new(class_name, &self.name, DESCRIPTOR));
    }
}
