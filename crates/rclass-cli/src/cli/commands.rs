//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("rclass")
        .about("Write Android R classes straight to class files")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(dump_command())
}

/// Compile symbol files into `R.class` and `R$<type>.class`.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Compile R.txt symbols into R classes")
        .override_usage(
            "\
  rclass generate --symbols <R.TXT>... --out <DIR> [--package <PACKAGE>]",
        )
        .after_help(
            r#"EXAMPLES:
  rclass generate -s R.txt -p com.example -o classes
  rclass generate -s R.txt -s //lib:res=lib/R.txt -p com.example -o classes
  rclass generate -s R.txt -p com.example -o classes --final-fields
  rclass generate -s R.txt -p com.example -o classes --annotate --label //app:res
  rclass generate -s R.txt -p com.lib -o classes \
      --shared-id-class com.lib.RPackage --package-id 0x7f000000"#,
        )
        .arg(symbols_arg())
        .arg(package_arg())
        .arg(out_arg())
        .arg(final_fields_arg())
        .arg(annotate_arg())
        .arg(label_arg())
        .arg(shared_id_class_arg())
        .arg(package_id_arg())
        .arg(only_arg())
        .arg(verbose_arg())
}

/// Print a human-readable view of a class file.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show the structure and bytecode of a class file")
        .after_help(
            r#"EXAMPLES:
  rclass dump classes/com/example/R.class
  rclass dump 'classes/com/example/R$id.class'"#,
        )
        .arg(class_path_arg())
        .arg(verbose_arg())
}
