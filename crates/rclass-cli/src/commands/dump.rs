use std::fs;
use std::path::PathBuf;

use rclass_bytecode::{ClassFile, dump};

use super::CommandError;

pub struct DumpArgs {
    pub class_path: PathBuf,
}

pub fn run(args: DumpArgs) {
    match execute(&args) {
        Ok(text) => print!("{}", text),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

pub fn execute(args: &DumpArgs) -> Result<String, CommandError> {
    let path = &args.class_path;
    let bytes = fs::read(path).map_err(|source| CommandError::Read {
        path: path.clone(),
        source,
    })?;
    let class = ClassFile::parse(&bytes).map_err(|source| CommandError::Class {
        path: path.clone(),
        source,
    })?;
    Ok(dump(&class))
}
