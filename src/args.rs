use crate::{Error, DEFAULT_CAPACITY};
use std::{ffi::OsString, path::PathBuf};

pub const USAGE: &str = "\
Usage: bin2rom <binary_file> <output_file> [rom_size]
       bin2rom <binary_file> <output.v> --verilog [rom_size]";

/// Parsed `bin2rom` command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Args {
    pub binary: PathBuf,
    pub output: PathBuf,
    pub rom_size: usize,
    pub verilog: bool,
}

/// Parses a full argument vector, program name included.
///
/// The two operands are positional. `--verilog` may appear anywhere. The
/// first argument consisting solely of ASCII digits, scanning from the program
/// name onwards, sets the ROM size; this includes the operands themselves.
/// Paths need not be valid UTF-8.
pub fn parse<I, S>(args: I) -> Result<Args, Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() < 3 {
        return Err(Error::Usage(USAGE.to_owned()));
    }

    let verilog = args.iter().any(|arg| arg == "--verilog");

    let numeric = args.iter().filter_map(|arg| arg.to_str()).find(|arg| is_numeric(arg));
    let rom_size = match numeric {
        Some(arg) => arg
            .parse()
            .map_err(|_| Error::Usage(format!("ROM size {arg} is out of range")))?,
        None => DEFAULT_CAPACITY,
    };

    Ok(Args {
        binary: PathBuf::from(&args[1]),
        output: PathBuf::from(&args[2]),
        rom_size,
        verilog,
    })
}

fn is_numeric(arg: &str) -> bool {
    !arg.is_empty() && arg.bytes().all(|b| b.is_ascii_digit())
}
