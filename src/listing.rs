use crate::{conv::WORD_LEN, RomImage};
use std::io::Write;

/// Writes the image as `rom_data[i] = 32'h...;` initializer lines.
pub fn write_listing(image: &RomImage, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "// ROM initialization data")?;
    writeln!(out, "// Generated from: {}", image.source().display())?;
    writeln!(out, "// Size: {} words", image.words().len())?;
    writeln!(out)?;

    for (index, word) in image.words().iter().enumerate() {
        writeln!(
            out,
            "        rom_data[{index:4}] = 32'h{word:08x};  // 0x{:04x}: {word:08x}",
            index * WORD_LEN
        )?;
    }

    Ok(())
}
