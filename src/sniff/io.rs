//! Bounded I/O utilities for probes.
//!
//! Every probe reads a short, capped prefix (or tail) of the file so
//! per-probe cost stays constant relative to file size.

use crate::error::Result;
use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// Byte budget for line-oriented text probes.
pub const MAX_TEXT_PREFIX: usize = 8 * 1024;

/// Byte budget for whole-document structural probes (json, phyloxml).
pub const MAX_DOCUMENT_PREFIX: usize = 512 * 1024;

/// Read at most `cap` bytes from the start of the file.
pub fn read_prefix(path: &Path, cap: usize) -> Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut buf = Vec::with_capacity(cap.min(MAX_TEXT_PREFIX));
    file.take(cap as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

/// Read at most `cap` bytes from the end of the file.
pub fn read_tail(path: &Path, cap: usize) -> Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let len = file.metadata()?.len();
    file.seek(SeekFrom::Start(len.saturating_sub(cap as u64)))?;
    let mut buf = Vec::new();
    file.take(cap as u64).read_to_end(&mut buf)?;
    Ok(buf)
}

/// Split a byte prefix into at most `max_lines` lossy-decoded lines.
///
/// A trailing partial line (no newline before the cap) is included.
pub fn split_lines(data: &[u8], max_lines: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut start = 0;
    for nl in memchr::memchr_iter(b'\n', data) {
        if lines.len() == max_lines {
            return lines;
        }
        let line = &data[start..nl];
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        lines.push(String::from_utf8_lossy(line).into_owned());
        start = nl + 1;
    }
    if lines.len() < max_lines && start < data.len() {
        lines.push(String::from_utf8_lossy(&data[start..]).into_owned());
    }
    lines
}

/// First `max_lines` lines of the file, bounded by `cap` bytes.
pub fn read_lines(path: &Path, max_lines: usize, cap: usize) -> Result<Vec<String>> {
    let data = read_prefix(path, cap)?;
    Ok(split_lines(&data, max_lines))
}
