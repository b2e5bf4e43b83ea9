//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::dump::DumpArgs;
use crate::commands::generate::{GenerateArgs, SharedId};
use crate::commands::symbols_loader::SymbolsInput;

pub struct GenerateParams {
    pub symbols: Vec<SymbolsInput>,
    pub package: String,
    pub out_dir: PathBuf,
    pub final_fields: bool,
    pub annotate: bool,
    pub label: Option<String>,
    pub shared_id_class: Option<String>,
    pub package_id: Option<i32>,
    pub only: Option<PathBuf>,
    pub verbose: u8,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            symbols: m
                .get_many::<SymbolsInput>("symbols")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            package: m.get_one::<String>("package").cloned().unwrap_or_default(),
            out_dir: m.get_one::<PathBuf>("out").cloned().unwrap_or_default(),
            final_fields: m.get_flag("final_fields"),
            annotate: m.get_flag("annotate"),
            label: m.get_one::<String>("label").cloned(),
            shared_id_class: m.get_one::<String>("shared_id_class").cloned(),
            package_id: m.get_one::<i32>("package_id").copied(),
            only: m.get_one::<PathBuf>("only").cloned(),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        // clap ties the two flags together, so both or neither are set.
        let shared_id = match (p.shared_id_class, p.package_id) {
            (Some(class_name), Some(package_id)) => Some(SharedId {
                class_name,
                package_id,
            }),
            _ => None,
        };
        Self {
            symbols: p.symbols,
            package: p.package,
            out_dir: p.out_dir,
            final_fields: p.final_fields,
            annotate: p.annotate,
            label: p.label,
            shared_id,
            only: p.only,
        }
    }
}

pub struct DumpParams {
    pub class_path: PathBuf,
    pub verbose: u8,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            class_path: m.get_one::<PathBuf>("class_path").cloned().unwrap_or_default(),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            class_path: p.class_path,
        }
    }
}
