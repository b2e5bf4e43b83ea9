use std::path::PathBuf;

use rclass_compiler::{ClassBuilder, Config, GenerationRequest, SharedIdDescriptor};

use super::CommandError;
use super::symbols_loader::{SymbolsInput, load_symbols, load_symbols_file};

/// Satellite class name and the package id the symbols were numbered with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedId {
    pub class_name: String,
    pub package_id: i32,
}

pub struct GenerateArgs {
    pub symbols: Vec<SymbolsInput>,
    pub package: String,
    pub out_dir: PathBuf,
    pub final_fields: bool,
    pub annotate: bool,
    pub label: Option<String>,
    pub shared_id: Option<SharedId>,
    pub only: Option<PathBuf>,
}

pub fn run(args: GenerateArgs) {
    if let Err(e) = execute(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Returns the number of symbols written.
pub fn execute(args: &GenerateArgs) -> Result<usize, CommandError> {
    let fields = load_symbols(&args.symbols)?;
    let request = GenerationRequest::new(&args.package, fields);
    let mut builder = ClassBuilder::new(args.out_dir.clone(), config(args))?;

    let emitted = match &args.only {
        Some(path) => {
            let keep = load_symbols_file(path, None)?;
            builder.generate_filtered(&request, &keep)?
        }
        None => builder.generate(&request)?,
    };

    tracing::info!(
        package = %args.package,
        out = %builder.out_dir().display(),
        symbols = emitted,
        shared_id = builder.shared_id_written(),
        "generated R classes"
    );
    Ok(emitted)
}

fn config(args: &GenerateArgs) -> Config {
    let mut config = Config::new()
        .final_fields(args.final_fields)
        .annotate_transitive(args.annotate);
    if let Some(label) = &args.label {
        config = config.label(label);
    }
    if let Some(shared) = &args.shared_id {
        config = config.shared_id(SharedIdDescriptor::new(
            &shared.class_name,
            shared.package_id,
        ));
    }
    config
}
