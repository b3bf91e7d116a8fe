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
mod lexer;

use crate::{conv::WORD_LEN, Error};
use lexer::{Literal, Token};
use log::debug;
use logos::Logos;

/// The ROM contents recovered from a word listing or a `rom_memory` module.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RomSource {
    /// `parameter SIZE_BYTES = ...`, when present.
    pub size_bytes: Option<usize>,
    /// Value assigned to every entry before the program is loaded.
    pub fill: Option<u32>,
    /// Explicit `rom_data[index] = value;` assignments in source order.
    pub words: Vec<(usize, u32)>,
}

/// Largest `SIZE_BYTES` read back into memory.
pub const MAX_SIZE_BYTES: usize = 16 * 1024 * 1024;

impl RomSource {
    /// The explicitly assigned words, which must cover `0..n` without gaps.
    /// Later assignments to an index replace earlier ones.
    pub fn program(&self) -> Result<Vec<u32>, Error> {
        let Some(highest) = self.words.iter().map(|&(index, _)| index).max() else {
            return Ok(Vec::new());
        };

        // A gap-free program has no index beyond its assignment count.
        let mut program = vec![None; self.words.len()];
        for &(index, word) in &self.words {
            if let Some(slot) = program.get_mut(index) {
                *slot = Some(word);
            }
        }
        program.truncate(highest.saturating_add(1));

        program
            .into_iter()
            .enumerate()
            .map(|(index, word)| word.ok_or(Error::MissingWord(index)))
            .collect()
    }

    /// The full memory as the module initialises it: every entry set to the
    /// fill word, then overwritten by the assignments.
    ///
    /// Falls back to [`RomSource::program`] when the text does not declare a
    /// size and fill word.
    pub fn memory(&self) -> Result<Vec<u32>, Error> {
        let (Some(size_bytes), Some(fill)) = (self.size_bytes, self.fill) else {
            return self.program();
        };
        if size_bytes > MAX_SIZE_BYTES {
            return Err(Error::SizeLimit {
                size: size_bytes,
                limit: MAX_SIZE_BYTES,
            });
        }

        let words = size_bytes / WORD_LEN;
        let mut memory = vec![fill; words];
        for &(index, word) in &self.words {
            *memory
                .get_mut(index)
                .ok_or(Error::OutOfRange { index, words })? = word;
        }

        Ok(memory)
    }
}

/// Parses the text of a word listing or a generated ROM module.
pub fn parse(source: &str) -> Result<RomSource, Error> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let line = lexer.extras.line + 1;
        match result {
            Ok(Token::Newline | Token::Comment(_)) => {}
            Ok(token) => tokens.push(Some((token, line))),
            // Anything the lexer does not know breaks up a statement.
            Err(()) => tokens.push(None),
        }
    }

    let mut rom = RomSource::default();
    let mut position = 0;
    while position < tokens.len() {
        match &tokens[position..] {
            [
                Some((Token::Ident("rom_data"), line)),
                Some((Token::IndexOpen, _)),
                Some((index, _)),
                Some((Token::IndexClose, _)),
                Some((Token::Assign, _)),
                Some((Token::Literal(literal), _)),
                Some((Token::Semicolon, _)),
                ..,
            ] => {
                match index {
                    Token::Number(digits) => {
                        let index = decimal(digits, *line)?;
                        rom.words.push((index, word(literal, *line)?));
                    }
                    Token::Ident(_) => rom.fill = Some(word(literal, *line)?),
                    _ => {
                        position += 1;
                        continue;
                    }
                }
                position += 7;
            }
            [
                Some((Token::Ident("parameter"), _)),
                Some((Token::Ident("SIZE_BYTES"), _)),
                Some((Token::Assign, _)),
                Some((Token::Number(digits), line)),
                ..,
            ] => {
                rom.size_bytes = Some(decimal(digits, *line)?);
                position += 4;
            }
            _ => position += 1,
        }
    }

    debug!(
        "parsed {} words, size {:?}, fill {:?}",
        rom.words.len(),
        rom.size_bytes,
        rom.fill
    );
    Ok(rom)
}

fn decimal(digits: &str, line: usize) -> Result<usize, Error> {
    digits.parse().map_err(|_| Error::Parse {
        line,
        message: format!("number {digits} is out of range"),
    })
}

fn word(literal: &Literal, line: usize) -> Result<u32, Error> {
    let error = |message: String| Error::Parse { line, message };

    let width: u32 = literal
        .width
        .parse()
        .map_err(|_| error(format!("invalid literal width {}", literal.width)))?;
    if width > u32::BITS {
        return Err(error(format!("{width}-bit literal does not fit in a word")));
    }

    let digits = literal.digits.replace('_', "");
    u32::from_str_radix(&digits, 16)
        .ok()
        .filter(|value| width == u32::BITS || value >> width == 0)
        .ok_or_else(|| {
            error(format!(
                "{}'h{} overflows {width} bits",
                literal.width, literal.digits
            ))
        })
}
