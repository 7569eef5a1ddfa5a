use std::path::PathBuf;

use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while turning a sample file into declaration text.
///
/// Each one is fatal to the run.
#[derive(Debug, Error)]
pub enum Error {
    /// Input path does not exist.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// Absolute form of the requested path.
        path: PathBuf,
    },
    /// Path exists but could not be read.
    #[error("Failed to read source file ({})", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Contents are not well-formed JSON.
    #[error("Failed to parse JSON source file ({}): {message}", path.display())]
    Parse {
        path: PathBuf,
        message: String,
    },
}
