use std::collections::HashSet;
use std::sync::Arc;

use indexmap::IndexMap;
use rclass_core::ResourceType;

use super::FieldInitializer;

/// Field initializers grouped by resource type.
///
/// Types keep first-insertion order and fields keep push order; both orders
/// carry through to the generated classes.
#[derive(Clone, Debug, Default)]
pub struct FieldInitializers {
    by_type: IndexMap<ResourceType, TypeFields>,
}

#[derive(Clone, Debug, Default)]
struct TypeFields {
    fields: Vec<Arc<dyn FieldInitializer>>,
    /// Names in `fields`, for constant-time membership.
    names: HashSet<String>,
}

impl FieldInitializers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ty: ResourceType, field: Arc<dyn FieldInitializer>) {
        let entry = self.by_type.entry(ty).or_default();
        entry.names.insert(field.name().to_string());
        entry.fields.push(field);
    }

    /// Builder-style [`FieldInitializers::push`].
    pub fn with(mut self, ty: ResourceType, field: impl FieldInitializer + 'static) -> Self {
        self.push(ty, Arc::new(field));
        self
    }

    pub fn get(&self, ty: ResourceType) -> Option<&[Arc<dyn FieldInitializer>]> {
        self.by_type.get(&ty).map(|entry| entry.fields.as_slice())
    }

    pub fn contains(&self, ty: ResourceType, name: &str) -> bool {
        self.by_type
            .get(&ty)
            .is_some_and(|entry| entry.names.contains(name))
    }

    /// Types with at least one field, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (ResourceType, &[Arc<dyn FieldInitializer>])> {
        self.by_type
            .iter()
            .filter(|(_, entry)| !entry.fields.is_empty())
            .map(|(ty, entry)| (*ty, entry.fields.as_slice()))
    }

    /// True when there is no field at all, even if some types were registered.
    pub fn is_empty(&self) -> bool {
        self.by_type.values().all(|entry| entry.fields.is_empty())
    }

    /// Total number of fields.
    pub fn len(&self) -> usize {
        self.by_type.values().map(|entry| entry.fields.len()).sum()
    }

    /// Keep only the fields whose `(type, name)` also appear in `keep`.
    /// Order and values come from `self`.
    pub fn filter(&self, keep: &FieldInitializers) -> FieldInitializers {
        let mut filtered = FieldInitializers::new();
        for (ty, fields) in self.iter() {
            for field in fields {
                if keep.contains(ty, field.name()) {
                    filtered.push(ty, Arc::clone(field));
                }
            }
        }
        filtered
    }

    /// Append the fields of `other` that `self` does not already declare.
    pub fn merge(&mut self, other: &FieldInitializers) {
        for (ty, fields) in other.iter() {
            for field in fields {
                if !self.contains(ty, field.name()) {
                    self.push(ty, Arc::clone(field));
                }
            }
        }
    }
}
