use rclass_bytecode::{ClassWriter, Code, ConstantValue, MemberRef, access};

use super::initializer::{provenance_annotation, push_value};
use super::{FieldInitializer, SharedIdDescriptor};

const DESCRIPTOR: &str = "I";

/// `public static [final] int <name>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntFieldInitializer {
    name: String,
    value: i32,
    /// Label of the dependency this symbol came from, when transitive.
    dependency: Option<String>,
}

impl IntFieldInitializer {
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self {
            name: name.into(),
            value,
            dependency: None,
        }
    }

    /// Mark the symbol as coming from a transitive dependency.
    pub fn from_dependency(mut self, label: impl Into<String>) -> Self {
        self.dependency = Some(label.into());
        self
    }
}

impl FieldInitializer for IntFieldInitializer {
    fn name(&self) -> &str {
        &self.name
    }

    fn max_code_size(&self, has_shared_id: bool) -> usize {
        if has_shared_id {
            // iload_1, ldc_w, iadd, putstatic
            1 + 3 + 1 + 3
        } else {
            // ldc_w, putstatic
            3 + 3
        }
    }

    fn declare_field(
        &self,
        class: &mut ClassWriter,
        final_fields: bool,
        annotate_transitive: bool,
        shared_id: Option<&SharedIdDescriptor>,
    ) -> bool {
        let mut flags = access::PUBLIC | access::STATIC;
        if final_fields {
            flags |= access::FINAL;
        }
        let constant = final_fields && shared_id.is_none();

        let field = class.field(flags, &self.name, DESCRIPTOR);
        if constant {
            field.constant_value(ConstantValue::Int(self.value));
        }
        if annotate_transitive && let Some(label) = &self.dependency {
            field.annotation(provenance_annotation(label));
        }
        !constant
    }

    fn emit_initializer(
        &self,
        code: &mut Code,
        class_name: &str,
        shared_id: Option<&SharedIdDescriptor>,
    ) {
        push_value(code, self.value, shared_id);
        code.put_static(MemberRef::new(class_name, &self.name, DESCRIPTOR));
    }
}
