//! External scanner for the Technique tree-sitter grammar

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::error::LoadingError;

mod boundary;
mod cursor;
mod driver;
mod lexer;
mod scanner;

pub use boundary::is_procedure_declaration;
pub use cursor::{SourceCursor, Span};
pub use driver::{find_boundaries, Boundary};
pub use lexer::Lexer;
pub use scanner::{Scanner, TokenType, ValidSymbols};

/// Read a file and return an owned String. A filename of "-" reads from
/// standard input instead.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.to_str() == Some("-") {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => {
                debug!(?error);
                Err(LoadingError {
                    problem: "Failed reading standard input".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                })
            }
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}
