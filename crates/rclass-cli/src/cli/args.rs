//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

use crate::commands::symbols_loader::SymbolsInput;

/// Symbol file, optionally owned by a dependency (--symbols [LABEL=]R.txt).
pub fn symbols_arg() -> Arg {
    Arg::new("symbols")
        .short('s')
        .long("symbols")
        .value_name("[LABEL=]R.TXT")
        .required(true)
        .action(ArgAction::Append)
        .value_parser(parse_symbols_input)
        .help("Symbol file to compile; repeat to merge, LABEL= marks a dependency")
}

/// Java package of the generated classes (-p/--package).
pub fn package_arg() -> Arg {
    Arg::new("package")
        .short('p')
        .long("package")
        .value_name("PACKAGE")
        .default_value("")
        .help("Dotted package name (default package if empty)")
}

/// Output root (-o/--out).
pub fn out_arg() -> Arg {
    Arg::new("out")
        .short('o')
        .long("out")
        .value_name("DIR")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Directory the package tree is written under")
}

/// Declare fields final (--final-fields).
pub fn final_fields_arg() -> Arg {
    Arg::new("final_fields")
        .long("final-fields")
        .action(ArgAction::SetTrue)
        .help("Declare fields final (int fields become compile-time constants)")
}

/// Provenance annotations (--annotate).
pub fn annotate_arg() -> Arg {
    Arg::new("annotate")
        .long("annotate")
        .action(ArgAction::SetTrue)
        .requires("label")
        .help("Annotate R and dependency fields with their provenance")
}

/// Owning build label (--label).
pub fn label_arg() -> Arg {
    Arg::new("label")
        .long("label")
        .value_name("LABEL")
        .help("Build label that owns the generated classes")
}

/// Satellite class holding the runtime package id (--shared-id-class).
pub fn shared_id_class_arg() -> Arg {
    Arg::new("shared_id_class")
        .long("shared-id-class")
        .value_name("CLASS")
        .requires("package_id")
        .help("Dotted name of the class holding the runtime package id")
}

/// Default package id (--package-id).
pub fn package_id_arg() -> Arg {
    Arg::new("package_id")
        .long("package-id")
        .value_name("ID")
        .requires("shared_id_class")
        .value_parser(parse_package_id)
        .help("Package id the symbols were numbered with (decimal or 0x hex)")
}

/// Restrict output to the symbols of another file (--only).
pub fn only_arg() -> Arg {
    Arg::new("only")
        .long("only")
        .value_name("R.TXT")
        .value_parser(value_parser!(PathBuf))
        .help("Only write the symbols also declared in this file")
}

/// Compiled class file (positional).
pub fn class_path_arg() -> Arg {
    Arg::new("class_path")
        .value_name("CLASS")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Class file to dump")
}

/// Verbose logging (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug, -vv for trace)")
}

fn parse_symbols_input(value: &str) -> Result<SymbolsInput, String> {
    let (label, path) = match value.split_once('=') {
        Some((label, path)) => {
            if label.is_empty() {
                return Err("label before '=' is empty".to_string());
            }
            (Some(label.to_string()), path)
        }
        None => (None, value),
    };
    if path.is_empty() {
        return Err("symbol file path is empty".to_string());
    }
    Ok(SymbolsInput {
        label,
        path: PathBuf::from(path),
    })
}

fn parse_package_id(value: &str) -> Result<i32, String> {
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16).map(|v| v as i32),
        None => value.parse::<i32>(),
    };
    parsed.map_err(|e| format!("invalid package id `{}`: {}", value, e))
}
