//! Shared helpers for sniffer integration tests.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write a sample file with a controlled name into `dir`.
pub fn write_sample(dir: &TempDir, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

/// A gzip member holding `payload` in a single stored deflate block.
/// The trailer checksum is bogus, but no probe reads that far.
pub fn gzip_stored(payload: &[u8]) -> Vec<u8> {
    let mut data = vec![0x1F, 0x8B, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF];
    let len = payload.len() as u16;
    data.push(0x01);
    data.extend_from_slice(&len.to_le_bytes());
    data.extend_from_slice(&(!len).to_le_bytes());
    data.extend_from_slice(payload);
    data.extend_from_slice(&[0u8; 8]);
    data
}
