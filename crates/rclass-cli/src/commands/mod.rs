pub mod dump;
pub mod error;
pub mod generate;
pub mod symbols_loader;

#[cfg(test)]
mod dump_tests;
#[cfg(test)]
mod symbols_loader_tests;

pub use error::CommandError;
