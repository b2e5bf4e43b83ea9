use std::fs;
use std::path::PathBuf;

use indoc::indoc;
use rclass_core::ResourceType;

use super::CommandError;
use super::symbols_loader::{SymbolsInput, load_symbols, load_symbols_file};

fn input(label: Option<&str>, path: PathBuf) -> SymbolsInput {
    SymbolsInput {
        label: label.map(str::to_string),
        path,
    }
}

#[test]
fn merges_files_first_declaration_wins() {
    let dir = tempfile::tempdir().unwrap();
    let app = dir.path().join("app.txt");
    let lib = dir.path().join("lib.txt");
    fs::write(
        &app,
        indoc! {"
            int id button 0x7f010000
            int string app_name 0x7f030000
        "},
    )
    .unwrap();
    fs::write(
        &lib,
        indoc! {"
            int id button 0x7f01ffff
            int id lib_only 0x7f010005
            int color accent 0x7f040000
        "},
    )
    .unwrap();

    let merged = load_symbols(&[input(None, app), input(Some("//lib"), lib)]).unwrap();

    let ids: Vec<_> = merged
        .get(ResourceType::Id)
        .unwrap()
        .iter()
        .map(|f| f.name().to_string())
        .collect();
    assert_eq!(ids, ["button", "lib_only"]);
    assert_eq!(merged.len(), 4);

    let types: Vec<_> = merged.iter().map(|(ty, _)| ty).collect();
    assert_eq!(
        types,
        [ResourceType::Id, ResourceType::String, ResourceType::Color]
    );
}

#[test]
fn missing_file_names_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");

    let err = load_symbols_file(&path, None).unwrap_err();
    assert!(matches!(err, CommandError::Read { .. }));
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn parse_error_names_path_and_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(
        &path,
        indoc! {"
            int id ok 0x7f010000
            int gadget nope 1
        "},
    )
    .unwrap();

    let err = load_symbols_file(&path, None).unwrap_err();
    assert!(matches!(err, CommandError::Symbols { .. }));
    let message = err.to_string();
    assert!(message.contains("bad.txt"), "{message}");
    assert!(message.contains("line 2"), "{message}");
}
