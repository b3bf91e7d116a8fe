// Copyright (C) 2025 Thom Hayward.
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
// details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
use bin2rom::{conv, readback, Error};
use env_logger::Env;
use log::info;
use std::path::PathBuf;

const USAGE: &str = "Usage: rom2bin <rom_file> <binary_file> [-n|--length <bytes>] [--full]";

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let mut paths = Vec::new();
    let mut length = None;
    let mut full = false;

    let mut args = std::env::args_os().skip(1);
    while let Some(arg) = args.next() {
        match arg.to_str() {
            Some(flag @ ("-n" | "--length")) => {
                let value = args
                    .next()
                    .ok_or_else(|| Error::Usage(format!("{flag} expects a byte count")))?;
                let bytes = value.to_str().and_then(|v| v.parse::<usize>().ok());
                length = Some(bytes.ok_or_else(|| {
                    Error::Usage(format!("invalid length {}", value.to_string_lossy()))
                })?);
            }
            Some("--full") => full = true,
            _ => paths.push(PathBuf::from(&arg)),
        }
    }

    let [input, output] = <[PathBuf; 2]>::try_from(paths)
        .map_err(|_| Error::Usage(USAGE.to_owned()))?;

    let source = std::fs::read_to_string(&input).map_err(|source| Error::Read {
        path: input.clone(),
        source,
    })?;
    let rom = readback::parse(&source)?;
    let words = if full { rom.memory()? } else { rom.program()? };
    info!("Recovered {} words", words.len());

    let mut bytes = conv::words_to_bytes(&words);
    if let Some(length) = length {
        bytes.truncate(length);
    }

    std::fs::write(&output, &bytes).map_err(|source| Error::Write {
        path: output.clone(),
        source,
    })?;
    info!("{} bytes written to {}", bytes.len(), output.display());
    Ok(())
}
