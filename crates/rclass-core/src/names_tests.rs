use std::path::Path;

use crate::{ResourceType, binary_name, inner_class_name, outer_class_name, package_dir};

#[test]
fn outer_class_from_package() {
    assert_eq!(outer_class_name("com.example"), "com/example/R");
    assert_eq!(outer_class_name("a"), "a/R");
}

#[test]
fn outer_class_for_default_package() {
    assert_eq!(outer_class_name(""), "R");
}

#[test]
fn inner_class_uses_type_name() {
    let outer = outer_class_name("com.example");
    assert_eq!(inner_class_name(&outer, ResourceType::Id), "com/example/R$id");
    assert_eq!(
        inner_class_name(&outer, ResourceType::Styleable),
        "com/example/R$styleable"
    );
}

#[test]
fn package_dir_nests_segments() {
    let root = Path::new("out");
    assert_eq!(
        package_dir(root, "com.example.app"),
        Path::new("out").join("com").join("example").join("app")
    );
    assert_eq!(package_dir(root, ""), Path::new("out"));
}

#[test]
fn binary_name_replaces_dots() {
    assert_eq!(binary_name("com.example.RPackage"), "com/example/RPackage");
    assert_eq!(binary_name("Top"), "Top");
}
