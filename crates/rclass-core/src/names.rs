//! Package and binary class names.
//!
//! Packages arrive dotted (`com.example`); class files and the file system
//! want slashes (`com/example/R`).

use std::path::{Path, PathBuf};

use crate::ResourceType;

pub const JAVA_LANG_OBJECT: &str = "java/lang/Object";

/// Simple name of the outer symbol class.
pub const OUTER_CLASS_SIMPLE_NAME: &str = "R";

/// Recorded in the `SourceFile` attribute of generated `R` classes.
pub const SOURCE_FILE_NAME: &str = "R.java";

/// Convert a dotted name to its internal (slash separated) form.
///
/// # Examples
/// ```
/// use rclass_core::binary_name;
/// assert_eq!(binary_name("com.example.RPackage"), "com/example/RPackage");
/// ```
pub fn binary_name(dotted: &str) -> String {
    dotted.replace('.', "/")
}

/// Binary name of the outer `R` class. The empty package maps to bare `R`.
pub fn outer_class_name(package: &str) -> String {
    if package.is_empty() {
        OUTER_CLASS_SIMPLE_NAME.to_string()
    } else {
        format!("{}/{OUTER_CLASS_SIMPLE_NAME}", binary_name(package))
    }
}

/// Binary name of the inner class holding fields of `ty`.
pub fn inner_class_name(outer: &str, ty: ResourceType) -> String {
    format!("{outer}${ty}")
}

/// Directory for a package's class files under `root`, one segment per
/// package component.
pub fn package_dir(root: &Path, package: &str) -> PathBuf {
    let mut dir = root.to_path_buf();
    for segment in package.split('.').filter(|s| !s.is_empty()) {
        dir.push(segment);
    }
    dir
}
