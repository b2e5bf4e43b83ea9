use std::path::Path;
use std::sync::Arc;

use rclass_bytecode::{ClassWriter, InnerClass};
use rclass_core::{ResourceType, inner_class_name, validate_member_name};

use crate::config::Config;
use crate::fields::FieldInitializer;

use super::GenerateError;
use super::shell::{INNER_ACCESS, class_shell};
use super::splitter::{split, write_chain};

/// Build `R$<ty>` for `fields`, in their given order.
///
/// `package_dir` only feeds error context.
pub fn emit_inner_class(
    outer: &str,
    ty: ResourceType,
    fields: &[Arc<dyn FieldInitializer>],
    package_dir: &Path,
    config: &Config,
) -> Result<ClassWriter, GenerateError> {
    let name = inner_class_name(outer, ty);
    let mut class = class_shell(&name);
    class.inner_class(InnerClass::member(&name, outer, ty.name(), INNER_ACCESS));

    let shared_id = config.shared_id_descriptor();
    let mut deferred = Vec::new();
    for field in fields {
        validate_member_name(field.name()).map_err(|reason| GenerateError::InvalidIdentifier {
            field: field.name().to_string(),
            class: name.clone(),
            dir: package_dir.to_path_buf(),
            reason,
        })?;
        if field.declare_field(
            &mut class,
            config.is_final_fields(),
            config.is_annotate_transitive(),
            shared_id,
        ) {
            deferred.push(Arc::clone(field));
        }
    }

    if !deferred.is_empty() {
        let methods = split(&name, &deferred, shared_id.is_some())?;
        write_chain(&mut class, &name, &deferred, &methods, shared_id);
    }

    tracing::debug!(
        class = %name,
        fields = fields.len(),
        deferred = deferred.len(),
        "emitted inner class"
    );
    Ok(class)
}
