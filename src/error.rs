use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while converting between binary images and ROM text.
#[derive(Error, Debug)]
pub enum Error {
    /// The source binary does not exist.
    #[error("Binary file {} not found", .0.display())]
    NotFound(PathBuf),

    /// The source binary exists but could not be read.
    #[error("Error reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image does not fit in the configured ROM.
    #[error("Binary ({size} bytes) too large for ROM ({capacity} bytes)")]
    TooLarge { size: usize, capacity: usize },

    /// A memory module must hold a whole number of words.
    #[error("ROM size ({0} bytes) must be a non-zero multiple of 4 for a Verilog module")]
    UnalignedCapacity(usize),

    /// The destination could not be written.
    #[error("Error writing output file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Usage(String),

    /// ROM text could not be parsed back into words.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A word listing skips an index.
    #[error("no word assigned to rom_data[{0}]")]
    MissingWord(usize),

    /// A word assignment falls outside the declared memory.
    #[error("rom_data[{index}] is outside a {words}-word ROM")]
    OutOfRange { index: usize, words: usize },

    /// A declared ROM size too large to read back.
    #[error("ROM size ({size} bytes) exceeds the read-back limit of {limit} bytes")]
    SizeLimit { size: usize, limit: usize },
}

impl Error {
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path),
            _ => Self::Read { path, source },
        }
    }
}
