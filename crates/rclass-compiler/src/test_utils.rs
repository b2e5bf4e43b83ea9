//! Test fixtures shared across modules.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use rclass_bytecode::{ClassFile, ClassWriter, Code, MemberRef, access, dump};

use crate::fields::{FieldInitializer, SharedIdDescriptor};

/// A deferred `int` field that claims an arbitrary worst-case size.
#[derive(Debug)]
pub struct SizedField {
    name: String,
    size: usize,
}

impl SizedField {
    pub fn new(name: &str, size: usize) -> Self {
        Self {
            name: name.to_string(),
            size,
        }
    }

    pub fn arc(name: &str, size: usize) -> Arc<dyn FieldInitializer> {
        Arc::new(Self::new(name, size))
    }
}

impl FieldInitializer for SizedField {
    fn name(&self) -> &str {
        &self.name
    }

    fn max_code_size(&self, _has_shared_id: bool) -> usize {
        self.size
    }

    fn declare_field(
        &self,
        class: &mut ClassWriter,
        _final_fields: bool,
        _annotate_transitive: bool,
        _shared_id: Option<&SharedIdDescriptor>,
    ) -> bool {
        class.field(access::PUBLIC | access::STATIC, &self.name, "I");
        true
    }

    fn emit_initializer(
        &self,
        code: &mut Code,
        class_name: &str,
        _shared_id: Option<&SharedIdDescriptor>,
    ) {
        code.push_int(0)
            .put_static(MemberRef::new(class_name, &self.name, "I"));
    }
}

pub fn read_class(path: &Path) -> ClassFile {
    let bytes = fs::read(path).unwrap_or_else(|e| panic!("{}: {e}", path.display()));
    ClassFile::parse(&bytes).unwrap()
}

pub fn dump_file(path: &Path) -> String {
    dump(&read_class(path))
}

/// Relative paths of every file under `root`, sorted, with `/` separators.
pub fn list_files(root: &Path) -> Vec<String> {
    fn walk(root: &Path, dir: &Path, out: &mut Vec<String>) {
        for entry in fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(root, &path, out);
            } else {
                let rel = path.strip_prefix(root).unwrap();
                let parts: Vec<_> = rel.components().map(|c| c.as_os_str().to_string_lossy()).collect();
                out.push(parts.join("/"));
            }
        }
    }
    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}
