pub mod args;
pub mod conv;
mod error;
mod image;
pub mod listing;
#[cfg(feature = "readback")]
pub mod readback;
pub mod verilog;

pub use error::Error;
pub use image::{RomConfig, RomImage, DEFAULT_BASE_ADDRESS, DEFAULT_CAPACITY, NOP};

use log::{debug, info};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Converts the binary at `binary` into a word listing at `output`.
///
/// Nothing is written unless the image fits in `config.capacity` bytes.
pub fn binary_to_rom(binary: &Path, output: &Path, config: &RomConfig) -> Result<(), Error> {
    let image = RomImage::load(binary, config.capacity)?;

    write_output(output, |out| listing::write_listing(&image, out))?;
    info!("ROM initialization written to {}", output.display());
    Ok(())
}

/// Converts the binary at `binary` into a complete `rom_memory` module at
/// `output`.
pub fn generate_verilog_rom(
    binary: &Path,
    output: &Path,
    config: &RomConfig,
) -> Result<(), Error> {
    let image = RomImage::load(binary, config.capacity)?;
    if config.capacity == 0 || config.capacity % conv::WORD_LEN != 0 {
        return Err(Error::UnalignedCapacity(config.capacity));
    }

    write_output(output, |out| verilog::write_module(&image, config, out))?;
    info!("Verilog ROM module written to {}", output.display());
    Ok(())
}

fn write_output<F>(path: &Path, render: F) -> Result<(), Error>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    debug!("writing {}", path.display());
    let result = File::create(path).and_then(|file| {
        let mut out = BufWriter::new(file);
        render(&mut out)?;
        out.flush()
    });

    result.map_err(|source| Error::Write {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(bytes: &[u8]) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prog.bin");
        std::fs::write(&path, bytes).unwrap();
        (dir, path)
    }

    #[test]
    fn listing_written() {
        let (dir, binary) = scratch(&[0x13, 0, 0, 0]);
        let output = dir.path().join("rom.txt");

        binary_to_rom(&binary, &output, &RomConfig::default()).unwrap();

        let text = std::fs::read_to_string(&output).unwrap();
        assert!(text.contains("rom_data[   0] = 32'h00000013;  // 0x0000: 00000013"));
    }

    #[test]
    fn oversized_leaves_no_output() {
        let (dir, binary) = scratch(&[0; 20]);
        let output = dir.path().join("rom.txt");

        let error = binary_to_rom(&binary, &output, &RomConfig::with_capacity(16)).unwrap_err();
        assert!(matches!(
            error,
            Error::TooLarge {
                size: 20,
                capacity: 16
            }
        ));
        assert!(!output.exists());

        let output = dir.path().join("rom.v");
        let error = generate_verilog_rom(&binary, &output, &RomConfig::with_capacity(16));
        assert!(matches!(error, Err(Error::TooLarge { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn exact_capacity_succeeds() {
        let (dir, binary) = scratch(&[0; 16]);
        let output = dir.path().join("rom.v");
        generate_verilog_rom(&binary, &output, &RomConfig::with_capacity(16)).unwrap();
        assert!(output.exists());
    }

    #[test]
    fn module_needs_whole_words() {
        let (dir, binary) = scratch(&[0; 4]);
        let output = dir.path().join("rom.v");

        let error = generate_verilog_rom(&binary, &output, &RomConfig::with_capacity(18));
        assert!(matches!(error, Err(Error::UnalignedCapacity(18))));
        assert!(!output.exists());

        // The listing does not care.
        let output = dir.path().join("rom.txt");
        binary_to_rom(&binary, &output, &RomConfig::with_capacity(18)).unwrap();
    }

    #[test]
    fn module_rejects_empty_rom() {
        let (dir, binary) = scratch(&[]);
        let output = dir.path().join("rom.v");

        let error = generate_verilog_rom(&binary, &output, &RomConfig::with_capacity(0));
        let error = error.unwrap_err();
        assert!(matches!(error, Error::UnalignedCapacity(0)));
        assert!(error.to_string().contains("non-zero multiple of 4"));
        assert!(!output.exists());
    }

    #[test]
    fn missing_binary() {
        let dir = tempfile::tempdir().unwrap();
        let error = binary_to_rom(
            &dir.path().join("absent.bin"),
            &dir.path().join("rom.txt"),
            &RomConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(error, Error::NotFound(_)));
        assert!(error.to_string().contains("absent.bin"));
    }

    #[test]
    fn unwritable_output() {
        let (dir, binary) = scratch(&[0; 4]);
        let output = dir.path().join("missing").join("rom.txt");
        let error = binary_to_rom(&binary, &output, &RomConfig::default()).unwrap_err();
        assert!(matches!(error, Error::Write { .. }));
    }
}
