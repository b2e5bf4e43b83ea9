//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use clap::error::ErrorKind;

use super::*;
use crate::cli::commands::{dump_command, generate_command};
use crate::commands::dump::DumpArgs;
use crate::commands::generate::GenerateArgs;
use crate::commands::symbols_loader::SymbolsInput;

fn generate_args(argv: &[&str]) -> GenerateArgs {
    let mut full = vec!["generate"];
    full.extend_from_slice(argv);
    let m = generate_command().try_get_matches_from(full).unwrap();
    GenerateParams::from_matches(&m).into()
}

#[test]
fn generate_minimal() {
    let args = generate_args(&["--symbols", "R.txt", "--out", "classes"]);

    assert_eq!(
        args.symbols,
        [SymbolsInput {
            label: None,
            path: PathBuf::from("R.txt"),
        }]
    );
    assert_eq!(args.package, "");
    assert_eq!(args.out_dir, PathBuf::from("classes"));
    assert!(!args.final_fields);
    assert!(!args.annotate);
    assert!(args.label.is_none());
    assert!(args.shared_id.is_none());
    assert!(args.only.is_none());
}

#[test]
fn generate_symbols_repeat_in_order() {
    let args = generate_args(&[
        "-s",
        "R.txt",
        "-s",
        "//lib:res=lib/R.txt",
        "-o",
        "out",
        "-p",
        "com.example",
    ]);

    assert_eq!(
        args.symbols,
        [
            SymbolsInput {
                label: None,
                path: PathBuf::from("R.txt"),
            },
            SymbolsInput {
                label: Some("//lib:res".to_string()),
                path: PathBuf::from("lib/R.txt"),
            },
        ]
    );
    assert_eq!(args.package, "com.example");
}

#[test]
fn generate_rejects_empty_label() {
    let result = generate_command().try_get_matches_from([
        "generate",
        "--symbols",
        "=R.txt",
        "--out",
        "out",
    ]);
    assert_eq!(result.unwrap_err().kind(), ErrorKind::ValueValidation);
}

#[test]
fn generate_requires_symbols_and_out() {
    let missing_symbols = generate_command().try_get_matches_from(["generate", "--out", "out"]);
    assert_eq!(
        missing_symbols.unwrap_err().kind(),
        ErrorKind::MissingRequiredArgument
    );

    let missing_out = generate_command().try_get_matches_from(["generate", "-s", "R.txt"]);
    assert_eq!(
        missing_out.unwrap_err().kind(),
        ErrorKind::MissingRequiredArgument
    );
}

#[test]
fn generate_annotate_requires_label() {
    let result = generate_command().try_get_matches_from([
        "generate", "-s", "R.txt", "-o", "out", "--annotate",
    ]);
    assert_eq!(
        result.unwrap_err().kind(),
        ErrorKind::MissingRequiredArgument
    );

    let args = generate_args(&["-s", "R.txt", "-o", "out", "--annotate", "--label", "//app"]);
    assert!(args.annotate);
    assert_eq!(args.label.as_deref(), Some("//app"));
}

#[test]
fn generate_shared_id_hex_and_decimal() {
    let hex = generate_args(&[
        "-s",
        "R.txt",
        "-o",
        "out",
        "--shared-id-class",
        "com.lib.RPackage",
        "--package-id",
        "0x7f000000",
    ]);
    let shared = hex.shared_id.unwrap();
    assert_eq!(shared.class_name, "com.lib.RPackage");
    assert_eq!(shared.package_id, 0x7f00_0000);

    let decimal = generate_args(&[
        "-s",
        "R.txt",
        "-o",
        "out",
        "--shared-id-class",
        "com.lib.RPackage",
        "--package-id",
        "2130706432",
    ]);
    assert_eq!(decimal.shared_id.unwrap().package_id, 0x7f00_0000);
}

#[test]
fn generate_package_id_above_i32_max_wraps() {
    let args = generate_args(&[
        "-s",
        "R.txt",
        "-o",
        "out",
        "--shared-id-class",
        "p.Ids",
        "--package-id",
        "0x80000000",
    ]);
    assert_eq!(args.shared_id.unwrap().package_id, i32::MIN);
}

#[test]
fn generate_shared_id_flags_go_together() {
    let class_only = generate_command().try_get_matches_from([
        "generate",
        "-s",
        "R.txt",
        "-o",
        "out",
        "--shared-id-class",
        "p.Ids",
    ]);
    assert_eq!(
        class_only.unwrap_err().kind(),
        ErrorKind::MissingRequiredArgument
    );

    let id_only = generate_command().try_get_matches_from([
        "generate",
        "-s",
        "R.txt",
        "-o",
        "out",
        "--package-id",
        "0x7f000000",
    ]);
    assert_eq!(
        id_only.unwrap_err().kind(),
        ErrorKind::MissingRequiredArgument
    );
}

#[test]
fn generate_rejects_bad_package_id() {
    let result = generate_command().try_get_matches_from([
        "generate",
        "-s",
        "R.txt",
        "-o",
        "out",
        "--shared-id-class",
        "p.Ids",
        "--package-id",
        "0xZZ",
    ]);
    assert_eq!(result.unwrap_err().kind(), ErrorKind::ValueValidation);
}

#[test]
fn generate_only_and_verbosity() {
    let m = generate_command()
        .try_get_matches_from([
            "generate",
            "-s",
            "R.txt",
            "-o",
            "out",
            "--only",
            "keep.txt",
            "-vv",
        ])
        .unwrap();
    let params = GenerateParams::from_matches(&m);
    assert_eq!(params.verbose, 2);

    let args: GenerateArgs = params.into();
    assert_eq!(args.only, Some(PathBuf::from("keep.txt")));
}

#[test]
fn dump_extracts_path() {
    let m = dump_command()
        .try_get_matches_from(["dump", "out/com/example/R.class", "-v"])
        .unwrap();
    let params = DumpParams::from_matches(&m);
    assert_eq!(params.verbose, 1);

    let args: DumpArgs = params.into();
    assert_eq!(args.class_path, PathBuf::from("out/com/example/R.class"));
}

#[test]
fn dump_requires_path() {
    let result = dump_command().try_get_matches_from(["dump"]);
    assert_eq!(
        result.unwrap_err().kind(),
        ErrorKind::MissingRequiredArgument
    );
}

#[test]
fn cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["rclass"]);
    assert!(result.is_err());
}

#[test]
fn cli_debug_assert() {
    build_cli().debug_assert();
}
