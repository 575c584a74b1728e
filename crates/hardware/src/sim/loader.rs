//! Program Loader.
//!
//! LS-8 programs are text, one binary literal per line:
//!
//! ```text
//! # print8.ls8
//! 10011001 # LDI R0,8
//! 00000000
//! 00001000
//! 01000011 # PRN R0
//! 00000000
//! 00000001 # HLT
//! ```
//!
//! After leading whitespace, the longest run of `0`/`1` digits on a line is read as
//! base 2 and wrapped to 8 bits; whatever follows it (a `#` comment, `//`, a comma) is
//! ignored. Lines that do not start with a binary digit (blank lines, comments,
//! garbage) are skipped silently.
//! The resulting bytes are written to RAM from address 0.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::common::Fault;
use crate::soc::Ram;

/// Errors raised while loading a program.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The program file could not be read.
    #[error("could not read program '{}': {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The program is larger than RAM.
    #[error("program does not fit in memory: {0}")]
    Memory(#[from] Fault),
}

/// Parses one program line, returning `None` if the line carries no byte.
///
/// ```
/// use ls8_core::sim::loader::parse_line;
///
/// assert_eq!(parse_line("10011001 # LDI R0,8"), Some(0b1001_1001));
/// assert_eq!(parse_line("10011001// LDI"), Some(0b1001_1001));
/// assert_eq!(parse_line("   "), None);
/// assert_eq!(parse_line("LDI R0,8"), None);
/// ```
pub fn parse_line(line: &str) -> Option<u8> {
    let code = line.trim_start();
    let end = code.find(|c| c != '0' && c != '1').unwrap_or(code.len());
    let digits = &code[..end];
    if digits.is_empty() {
        return None;
    }
    Some(digits.bytes().fold(0u8, |acc, b| (acc << 1) | (b - b'0')))
}

/// Parses program text into bytes, skipping lines that do not parse.
pub fn parse_program(text: &str) -> Vec<u8> {
    let mut skipped = 0usize;
    let bytes: Vec<u8> = text
        .lines()
        .filter_map(|line| {
            let parsed = parse_line(line);
            if parsed.is_none() {
                skipped += 1;
            }
            parsed
        })
        .collect();
    debug!(bytes = bytes.len(), skipped, "parsed program");
    bytes
}

/// Reads and parses a program file.
///
/// # Errors
///
/// [`LoadError::Io`] if the file cannot be read.
pub fn read_program(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_program(&text))
}

/// Writes `program` into RAM at increasing addresses from 0, returning the byte count.
///
/// # Errors
///
/// [`LoadError::Memory`] at the first byte that falls outside RAM. Bytes before it
/// have been written.
pub fn load_into(ram: &mut Ram, program: &[u8]) -> Result<usize, LoadError> {
    for (addr, &byte) in program.iter().enumerate() {
        ram.write(addr, byte)?;
    }
    Ok(program.len())
}

/// Reads a program file and writes it into RAM from address 0.
///
/// # Errors
///
/// As [`read_program`] and [`load_into`].
pub fn load_file(ram: &mut Ram, path: impl AsRef<Path>) -> Result<usize, LoadError> {
    let program = read_program(path)?;
    load_into(ram, &program)
}
