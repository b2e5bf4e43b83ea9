//! Method splitting for static initializers.
//!
//! A method body is capped at 65535 bytes, and a big `R$styleable` easily
//! needs more. Deferred fields are packed greedily, in order, into
//! `<clinit>`, `staticInit0`, `staticInit1`, ... Each method ends by calling
//! the next one, so class initialization still runs every assignment.

use std::ops::Range;
use std::sync::Arc;

use rclass_bytecode::{ClassWriter, MAX_CODE_SIZE, MemberRef, access};

use crate::fields::{FieldInitializer, SharedIdDescriptor};

use super::GenerateError;

/// `invokestatic` (3) and `return` (1), reserved in every method.
pub const TAIL_SIZE: usize = 3 + 1;

/// `getstatic` (3) and `istore_1` (1), loading the shared package id.
pub const SHARED_ID_PROLOGUE_SIZE: usize = 3 + 1;

/// Bytes available for the prologue and field initializers.
pub const METHOD_BUDGET: usize = MAX_CODE_SIZE - TAIL_SIZE;

const METHOD_DESCRIPTOR: &str = "()V";

/// One method of an initializer chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitializerMethod {
    /// 0 is `<clinit>`, n is `staticInit{n-1}`.
    pub ordinal: usize,
    /// Worst-case bytes of prologue and initializers, excluding the tail.
    pub code_size: usize,
    /// Indices into the deferred field list.
    pub fields: Range<usize>,
    /// Index of the method this one calls before returning.
    pub next: Option<usize>,
}

impl InitializerMethod {
    pub fn name(&self) -> String {
        match self.ordinal {
            0 => "<clinit>".to_string(),
            n => format!("staticInit{}", n - 1),
        }
    }

    pub fn access(&self) -> u16 {
        match self.ordinal {
            0 => access::STATIC,
            _ => access::STATIC | access::PRIVATE | access::SYNTHETIC,
        }
    }
}

/// Plan the initializer chain for `fields` of `class_name`.
///
/// A method takes fields while they fit; a field that does not fit even in an
/// empty method is an error.
pub fn split(
    class_name: &str,
    fields: &[Arc<dyn FieldInitializer>],
    has_shared_id: bool,
) -> Result<Vec<InitializerMethod>, GenerateError> {
    let prologue = if has_shared_id {
        SHARED_ID_PROLOGUE_SIZE
    } else {
        0
    };

    let mut methods: Vec<InitializerMethod> = Vec::new();
    let mut start = 0;
    while start < fields.len() {
        let mut size = prologue;
        let mut end = start;
        while let Some(field) = fields.get(end) {
            let field_size = field.max_code_size(has_shared_id);
            if size + field_size > METHOD_BUDGET {
                break;
            }
            size += field_size;
            end += 1;
        }

        if end == start {
            return Err(GenerateError::OversizedInitializer {
                class: class_name.to_string(),
                field: fields[start].name().to_string(),
            });
        }

        let ordinal = methods.len();
        if let Some(previous) = methods.last_mut() {
            previous.next = Some(ordinal);
        }
        methods.push(InitializerMethod {
            ordinal,
            code_size: size,
            fields: start..end,
            next: None,
        });
        start = end;
    }

    tracing::trace!(
        class = class_name,
        fields = fields.len(),
        methods = methods.len(),
        "split static initializer"
    );
    Ok(methods)
}

/// Emit the planned chain into `class`.
pub fn write_chain(
    class: &mut ClassWriter,
    class_name: &str,
    fields: &[Arc<dyn FieldInitializer>],
    methods: &[InitializerMethod],
    shared_id: Option<&SharedIdDescriptor>,
) {
    for method in methods {
        let code = class
            .method(method.access(), method.name(), METHOD_DESCRIPTOR)
            .code();

        if let Some(shared) = shared_id {
            code.get_static(MemberRef::new(
                shared.internal_name(),
                SharedIdDescriptor::FIELD_NAME,
                SharedIdDescriptor::FIELD_DESCRIPTOR,
            ))
            .istore(1);
        }

        for field in &fields[method.fields.clone()] {
            field.emit_initializer(code, class_name, shared_id);
        }

        if let Some(next) = method.next {
            code.invoke_static(MemberRef::new(
                class_name,
                methods[next].name(),
                METHOD_DESCRIPTOR,
            ));
        }
        code.return_void();
    }
}
