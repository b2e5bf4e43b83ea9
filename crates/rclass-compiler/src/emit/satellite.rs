use std::path::{Path, PathBuf};

use rclass_bytecode::{ClassWriter, ConstantValue, access};
use rclass_core::JAVA_LANG_OBJECT;

use crate::fields::SharedIdDescriptor;

use super::GenerateError;
use super::files::{create_dirs, write_new};
use super::shell::CLASS_ACCESS;

/// The shared id class: a single `public static int packageId`, not final so
/// it can be reassigned at runtime.
pub fn shared_id_class(descriptor: &SharedIdDescriptor) -> ClassWriter {
    let mut class = ClassWriter::new(CLASS_ACCESS, descriptor.internal_name(), JAVA_LANG_OBJECT);
    class
        .field(
            access::PUBLIC | access::STATIC,
            SharedIdDescriptor::FIELD_NAME,
            SharedIdDescriptor::FIELD_DESCRIPTOR,
        )
        .constant_value(ConstantValue::Int(descriptor.package_id()));
    class
}

/// Write the shared id class under `out_dir`, creating its package folders.
pub(crate) fn write_shared_id_class(
    out_dir: &Path,
    descriptor: &SharedIdDescriptor,
) -> Result<PathBuf, GenerateError> {
    let path = out_dir.join(format!("{}.class", descriptor.internal_name()));
    if let Some(parent) = path.parent() {
        create_dirs(parent)?;
    }
    let bytes = shared_id_class(descriptor).to_bytes()?;
    write_new(&path, &bytes)?;
    Ok(path)
}
