use std::fs;

use super::CommandError;
use super::dump::{DumpArgs, execute};
use super::generate::{self, GenerateArgs};
use super::symbols_loader::SymbolsInput;

#[test]
fn dumps_generated_class() {
    let dir = tempfile::tempdir().unwrap();
    let symbols = dir.path().join("R.txt");
    fs::write(&symbols, "int id button 0x7f010000\n").unwrap();
    let out = dir.path().join("classes");
    generate::execute(&GenerateArgs {
        symbols: vec![SymbolsInput {
            label: None,
            path: symbols,
        }],
        package: "com.example".to_string(),
        out_dir: out.clone(),
        final_fields: true,
        annotate: false,
        label: None,
        shared_id: None,
        only: None,
    })
    .unwrap();

    let text = execute(&DumpArgs {
        class_path: out.join("com/example/R$id.class"),
    })
    .unwrap();

    insta::assert_snapshot!(text, @r"
    class com/example/R$id extends java/lang/Object
      version: 51.0
      flags: 0x0031 public final super
      source: R.java
      inner: com/example/R$id in com/example/R as id (0x0019 public static final)

    field button I
      flags: 0x0019 public static final
      constant: int 0x7f010000

    method <init> ()V
      flags: 0x0001 public
      code: 5 bytes, stack=1, locals=1
        0: aload_0
        1: invokespecial java/lang/Object.<init>:()V
        4: return
    ");
}

#[test]
fn rejects_non_class_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("R.txt");
    fs::write(&path, "int id button 0x7f010000\n").unwrap();

    let err = execute(&DumpArgs { class_path: path }).unwrap_err();
    assert!(matches!(err, CommandError::Class { .. }));
    assert!(err.to_string().contains("R.txt"));
}

#[test]
fn missing_class_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = execute(&DumpArgs {
        class_path: dir.path().join("R.class"),
    })
    .unwrap_err();
    assert!(matches!(err, CommandError::Read { .. }));
}
