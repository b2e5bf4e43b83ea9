//! Generation flags.

use crate::fields::SharedIdDescriptor;

/// Configuration shared by every request a [`crate::ClassBuilder`] handles.
#[derive(Clone, Debug, Default)]
pub struct Config {
    /// Mark generated fields `final`
    final_fields: bool,
    /// Annotate `R` and transitive-dependency fields with their provenance
    annotate_transitive: bool,
    /// Build label that owns the generated classes
    label: Option<String>,
    /// Route owned values through a runtime package id
    shared_id: Option<SharedIdDescriptor>,
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether fields are declared `final`.
    pub fn final_fields(mut self, value: bool) -> Self {
        self.final_fields = value;
        self
    }

    /// Set whether to emit provenance annotations.
    pub fn annotate_transitive(mut self, value: bool) -> Self {
        self.annotate_transitive = value;
        self
    }

    /// Set the owning label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the shared identifier class.
    pub fn shared_id(mut self, descriptor: SharedIdDescriptor) -> Self {
        self.shared_id = Some(descriptor);
        self
    }

    pub fn is_final_fields(&self) -> bool {
        self.final_fields
    }

    pub fn is_annotate_transitive(&self) -> bool {
        self.annotate_transitive
    }

    pub fn label_value(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn shared_id_descriptor(&self) -> Option<&SharedIdDescriptor> {
        self.shared_id.as_ref()
    }
}
