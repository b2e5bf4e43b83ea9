use rclass_core::binary_name;

/// The satellite class holding a mutable package id.
///
/// Libraries compiled against it read `packageId` at class initialization,
/// so an application can renumber their resources without recompiling them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedIdDescriptor {
    class_name: String,
    package_id: i32,
}

impl SharedIdDescriptor {
    pub const FIELD_NAME: &'static str = "packageId";
    pub const FIELD_DESCRIPTOR: &'static str = "I";

    /// `class_name` is dotted (`com.example.RPackage`).
    pub fn new(class_name: impl Into<String>, package_id: i32) -> Self {
        Self {
            class_name: class_name.into(),
            package_id,
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn internal_name(&self) -> String {
        binary_name(&self.class_name)
    }

    pub fn package_id(&self) -> i32 {
        self.package_id
    }

    /// Whether `value` belongs to this package: same top byte as the id.
    pub fn owns(&self, value: i32) -> bool {
        (value as u32) >> 24 == (self.package_id as u32) >> 24
    }

    pub(crate) fn offset_of(&self, value: i32) -> i32 {
        value.wrapping_sub(self.package_id)
    }
}
