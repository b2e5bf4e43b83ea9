//! `R.txt` symbol files.
//!
//! One symbol per entry, as aapt writes them:
//!
//! ```text
//! int id button 0x7f010000
//! int[] styleable Widget { 0x0101014f, 0x7f020000 }
//! int styleable Widget_android_text 0
//! ```

mod error;
mod lexer;
mod parser;

#[cfg(test)]
mod parser_tests;

pub use error::SymbolsError;
pub use parser::parse_symbols;
