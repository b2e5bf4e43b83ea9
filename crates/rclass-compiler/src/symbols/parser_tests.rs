use indoc::indoc;
use rclass_core::ResourceType;

use super::{SymbolsError, parse_symbols};

fn names(source: &str) -> Vec<(ResourceType, String)> {
    parse_symbols(source, None)
        .unwrap()
        .iter()
        .flat_map(|(ty, fields)| fields.iter().map(move |f| (ty, f.name().to_string())))
        .collect()
}

#[test]
fn parses_ints_and_arrays_in_order() {
    let source = indoc! {"
        int string app_name 0x7f030000
        int id button 0x7f010000
        int[] styleable Widget { 0x0101014f, 0x7f020000 }
        int styleable Widget_android_text 0
        int id text 0x7f010001
    "};
    assert_eq!(
        names(source),
        vec![
            (ResourceType::String, "app_name".to_string()),
            (ResourceType::Id, "button".to_string()),
            (ResourceType::Id, "text".to_string()),
            (ResourceType::Styleable, "Widget".to_string()),
            (ResourceType::Styleable, "Widget_android_text".to_string()),
        ]
    );
}

#[test]
fn values_and_dependency_label() {
    let source = indoc! {"
        int integer max -1
        int integer big 0xffffffff
        int[] styleable Empty {  }
    "};
    let fields = parse_symbols(source, Some("//lib:dep")).unwrap();
    assert_eq!(fields.get(ResourceType::Integer).map(<[_]>::len), Some(2));
    assert_eq!(fields.len(), 3);

    let debug = format!("{fields:?}");
    assert!(debug.contains("value: -1"), "{debug}");
    assert!(debug.contains("//lib:dep"), "{debug}");
    assert!(debug.contains("values: []"), "{debug}");
}

#[test]
fn empty_input() {
    assert!(parse_symbols("", None).unwrap().is_empty());
    assert!(parse_symbols("\n\n  \n", None).unwrap().is_empty());
}

#[test]
fn invalid_names_are_left_for_emission() {
    let fields = parse_symbols("int id bad-name 1", None).unwrap();
    assert!(fields.contains(ResourceType::Id, "bad-name"));
}

#[test]
fn unknown_type() {
    let err = parse_symbols("int id a 1\nint gizmo b 2", None).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"line 2: unknown resource type `gizmo`");
}

#[test]
fn duplicate_symbol() {
    let source = indoc! {"
        int id a 1
        int id b 2
        int id a 3
    "};
    let err = parse_symbols(source, None).unwrap_err();
    assert_eq!(
        err,
        SymbolsError::Duplicate {
            line: 3,
            ty: ResourceType::Id,
            name: "a".to_string(),
        }
    );
}

#[test]
fn same_name_in_different_types_is_fine() {
    let fields = parse_symbols("int id a 1\nint string a 2", None).unwrap();
    assert_eq!(fields.len(), 2);
}

#[test]
fn syntax_errors() {
    let cases = [
        ("int id a", "line 1: expected a value, found end of input"),
        ("id a 1", "line 1: expected `int` or `int[]`, found `id`"),
        ("int id 1 2", "line 1: expected a symbol name, found `1`"),
        ("int[] styleable W { 1 2 }", "line 1: expected `,` or `}`, found `2`"),
        ("int[] styleable W 1", "line 1: expected `{`, found `1`"),
        ("int id a 0x1ffffffff", "line 1: value 0x1ffffffff does not fit in 32 bits"),
        ("int id a 4294967296", "line 1: value 4294967296 does not fit in 32 bits"),
        ("int id a 1\n#", "line 2: unexpected character \"#\""),
    ];
    for (source, expected) in cases {
        let err = parse_symbols(source, None).unwrap_err();
        assert_eq!(err.to_string(), expected, "{source:?}");
    }
}

#[test]
fn large_symbol_file() {
    let mut source = String::new();
    for i in 0..50_000 {
        source.push_str(&format!("int id name_{i} {:#x}\n", 0x7f01_0000 + i));
    }

    let fields = parse_symbols(&source, None).unwrap();
    assert_eq!(fields.len(), 50_000);
    assert!(fields.contains(ResourceType::Id, "name_49999"));

    source.push_str("int id name_0 0x7f000000\n");
    let err = parse_symbols(&source, None).unwrap_err();
    assert!(
        matches!(err, SymbolsError::Duplicate { line: 50_001, .. }),
        "{err}"
    );
}
