use crate::{conv, Error};
use log::info;
use std::path::{Path, PathBuf};

/// Default ROM capacity in bytes.
pub const DEFAULT_CAPACITY: usize = 16 * 1024;

/// Address the ROM is mapped at in the processor's address space.
pub const DEFAULT_BASE_ADDRESS: u32 = 0x8000_0000;

/// `addi x0, x0, 0`.
pub const NOP: u32 = 0x0000_0013;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RomConfig {
    /// Capacity of the ROM in bytes.
    pub capacity: usize,
    /// Base address used for the module parameter and address comments.
    pub base_address: u32,
}

impl Default for RomConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            base_address: DEFAULT_BASE_ADDRESS,
        }
    }
}

impl RomConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    /// Number of word entries in the ROM.
    #[inline]
    pub fn words(&self) -> usize {
        self.capacity / conv::WORD_LEN
    }
}

/// A binary image decoded into words, ready to be embedded in a ROM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RomImage {
    source: PathBuf,
    len: usize,
    words: Vec<u32>,
}

impl RomImage {
    /// Reads the binary at `path` and checks it fits in `capacity` bytes.
    pub fn load(path: impl AsRef<Path>, capacity: usize) -> Result<Self, Error> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|error| Error::read(path, error))?;
        info!("Binary file size: {} bytes", bytes.len());
        Self::from_bytes(path, &bytes, capacity)
    }

    /// Decodes an in-memory image. `source` is only used for annotation.
    pub fn from_bytes(
        source: impl Into<PathBuf>,
        bytes: &[u8],
        capacity: usize,
    ) -> Result<Self, Error> {
        if bytes.len() > capacity {
            return Err(Error::TooLarge {
                size: bytes.len(),
                capacity,
            });
        }

        let words = conv::bytes_to_words(bytes);
        info!("Generated {} words", words.len());

        Ok(Self {
            source: source.into(),
            len: bytes.len(),
            words,
        })
    }

    /// Path the image was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Length of the image in bytes, before padding.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exactly_full() {
        let image = RomImage::from_bytes("full.bin", &[0xaa; 16], 16).unwrap();
        assert_eq!(image.len(), 16);
        assert_eq!(image.words(), &[0xaaaaaaaa; 4]);
    }

    #[test]
    fn one_byte_over() {
        let error = RomImage::from_bytes("big.bin", &[0; 17], 16).unwrap_err();
        assert!(matches!(
            error,
            Error::TooLarge {
                size: 17,
                capacity: 16
            }
        ));
    }

    #[test]
    fn oversized_message_names_both_sizes() {
        let error = RomImage::from_bytes("big.bin", &[0; 20], 16).unwrap_err();
        let message = error.to_string();
        assert!(message.contains("20"), "{message}");
        assert!(message.contains("16"), "{message}");
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let error = RomImage::load(dir.path().join("absent.bin"), DEFAULT_CAPACITY).unwrap_err();
        assert!(matches!(error, Error::NotFound(_)));
    }

    #[test]
    fn default_config() {
        let config = RomConfig::default();
        assert_eq!(config.capacity, 16384);
        assert_eq!(config.base_address, 0x80000000);
        assert_eq!(config.words(), 4096);
    }
}
