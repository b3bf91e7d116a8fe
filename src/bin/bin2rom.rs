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
use bin2rom::{args, RomConfig};
use env_logger::Env;
use log::debug;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = match args::parse(std::env::args_os()) {
        Ok(args) => args,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };
    debug!("{args:?}");

    let config = RomConfig::with_capacity(args.rom_size);
    let result = if args.verilog {
        bin2rom::generate_verilog_rom(&args.binary, &args.output, &config)
    } else {
        bin2rom::binary_to_rom(&args.binary, &args.output, &config)
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
