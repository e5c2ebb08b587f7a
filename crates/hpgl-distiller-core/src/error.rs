//! Error handling for HPGL Distiller
//!
//! Everything here is fatal to a run. Routine outcomes such as a rejected
//! mnemonic or an unreadable coordinate pair are not errors and never
//! surface through these types.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for a distillation run.
#[derive(Error, Debug)]
pub enum DistillerError {
    /// No input document was named.
    #[error("Input filename is missing")]
    MissingInput,

    /// No output destination was named.
    #[error("Output filename is missing")]
    MissingOutput,

    /// The input document could not be opened or inspected.
    #[error("Cannot open input file '{}' for reading: {source}", path.display())]
    OpenInput {
        /// Path of the input document.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The output destination could not be opened for writing.
    #[error("Cannot open output file '{}' for writing: {source}", path.display())]
    OpenOutput {
        /// Path of the output destination.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Fewer bytes were read than the input declared.
    #[error("The file size ({expected} bytes) and the size of the data read ({actual} bytes) do not match")]
    ShortRead {
        /// Declared size in bytes.
        expected: u64,
        /// Bytes actually read.
        actual: u64,
    },

    /// The buffer for the input document could not be reserved.
    #[error("Cannot allocate enough memory to read input HPGL of size {size} bytes")]
    Allocation {
        /// Requested size in bytes.
        size: u64,
    },

    /// Settings or command line values are unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Standard I/O error while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DistillerError {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingInput | Self::MissingOutput | Self::InvalidConfig(_) => 1,
            Self::Allocation { .. } => 2,
            Self::OpenInput { .. } => 3,
            Self::OpenOutput { .. } => 4,
            Self::ShortRead { .. } => 5,
            Self::Io(_) => 6,
        }
    }
}

/// Result type using [`DistillerError`].
pub type Result<T> = std::result::Result<T, DistillerError>;
