use rclass_core::ResourceType;

use super::{FieldInitializers, IntArrayFieldInitializer, IntFieldInitializer};

fn names(fields: &FieldInitializers, ty: ResourceType) -> Vec<String> {
    fields
        .get(ty)
        .unwrap_or_default()
        .iter()
        .map(|f| f.name().to_string())
        .collect()
}

fn sample() -> FieldInitializers {
    FieldInitializers::new()
        .with(ResourceType::String, IntFieldInitializer::new("title", 3))
        .with(ResourceType::Id, IntFieldInitializer::new("b", 2))
        .with(ResourceType::Id, IntFieldInitializer::new("a", 1))
        .with(ResourceType::Styleable, IntArrayFieldInitializer::new("W", vec![1]))
}

#[test]
fn keeps_insertion_order() {
    let fields = sample();
    let types: Vec<_> = fields.iter().map(|(ty, _)| ty).collect();
    assert_eq!(
        types,
        [ResourceType::String, ResourceType::Id, ResourceType::Styleable]
    );
    assert_eq!(names(&fields, ResourceType::Id), ["b", "a"]);
    assert_eq!(fields.len(), 4);
    assert!(!fields.is_empty());
}

#[test]
fn empty_types_are_hidden() {
    let fields = FieldInitializers::new().filter(&sample());
    assert!(fields.is_empty());
    assert_eq!(fields.iter().count(), 0);
}

#[test]
fn filter_keeps_own_order_and_values() {
    let keep = FieldInitializers::new()
        .with(ResourceType::Id, IntFieldInitializer::new("a", 99))
        .with(ResourceType::Id, IntFieldInitializer::new("b", 98))
        .with(ResourceType::String, IntFieldInitializer::new("other", 0));

    let filtered = sample().filter(&keep);
    let types: Vec<_> = filtered.iter().map(|(ty, _)| ty).collect();
    assert_eq!(types, [ResourceType::Id]);
    assert_eq!(names(&filtered, ResourceType::Id), ["b", "a"]);
}

#[test]
fn merge_skips_existing_symbols() {
    let mut fields = sample();
    let other = FieldInitializers::new()
        .with(ResourceType::Id, IntFieldInitializer::new("a", 7))
        .with(ResourceType::Id, IntFieldInitializer::new("c", 8))
        .with(ResourceType::Layout, IntFieldInitializer::new("main", 9));
    fields.merge(&other);

    assert_eq!(names(&fields, ResourceType::Id), ["b", "a", "c"]);
    assert_eq!(names(&fields, ResourceType::Layout), ["main"]);
    assert!(fields.contains(ResourceType::Layout, "main"));
    assert!(!fields.contains(ResourceType::Layout, "a"));
}

#[test]
fn large_filter_and_merge() {
    let mut all = FieldInitializers::new();
    let mut even = FieldInitializers::new();
    for i in 0..50_000 {
        let name = format!("name_{i}");
        all = all.with(ResourceType::Id, IntFieldInitializer::new(&name, i));
        if i % 2 == 0 {
            even = even.with(ResourceType::Id, IntFieldInitializer::new(&name, -i));
        }
    }

    let filtered = all.filter(&even);
    assert_eq!(filtered.len(), 25_000);
    assert_eq!(names(&filtered, ResourceType::Id)[1], "name_2");

    let mut merged = even.clone();
    merged.merge(&all);
    assert_eq!(merged.len(), 50_000);
    assert_eq!(names(&merged, ResourceType::Id)[25_000], "name_1");
    assert!(merged.contains(ResourceType::Id, "name_49999"));
}
