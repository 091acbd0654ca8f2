use miette::Diagnostic;
use thiserror::Error;

/// Main error type for treson operations
#[derive(Error, Diagnostic, Debug)]
pub enum TresonError {
    #[error("IO error: {0}")]
    #[diagnostic(code(treson::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(treson::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Manifest error: {message}")]
    #[diagnostic(code(treson::manifest))]
    Manifest {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Convert error: {message}")]
    #[diagnostic(code(treson::convert))]
    Convert {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, TresonError>;
