//! Delegated classification for alignment and variant containers.
//!
//! BAM/BCF/SAM/VCF need a codec-level look rather than a fixed prefix,
//! so their probes hand the question to a [`FormatClassifier`]. The
//! built-in implementation peeks at BGZF payload magic and text
//! headers; callers with a full htslib-grade codec can inject their
//! own.

use crate::catalog::FormatId;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::trace;

use super::io::{self, MAX_TEXT_PREFIX};

/// External codec capability consumed by delegated probes.
///
/// Implementations answer "does this file parse as `format`?" and must
/// report `false`, never panic, on any parse failure.
pub trait FormatClassifier: Send + Sync {
    fn classifies(&self, path: &Path, format: FormatId) -> bool;
}

/// Built-in classifier for the htslib format family.
///
/// BAM and BCF are BGZF (gzip) containers; decompressing the first
/// block is enough to see the payload magic. SAM and VCF are text with
/// recognizable headers.
#[derive(Debug, Default)]
pub struct HtsClassifier;

impl HtsClassifier {
    fn bgzf_payload_magic(path: &Path, magic: &[u8]) -> bool {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(_) => return false,
        };
        let mut decoder = MultiGzDecoder::new(BufReader::new(file));
        let mut payload = vec![0u8; magic.len()];
        match decoder.read_exact(&mut payload) {
            Ok(()) => payload == magic,
            Err(_) => false,
        }
    }

    fn is_sam(path: &Path) -> bool {
        let Ok(lines) = io::read_lines(path, 1, MAX_TEXT_PREFIX) else {
            return false;
        };
        let Some(first) = lines.first() else {
            return false;
        };
        if first.starts_with('@') && first.contains('\t') {
            return true;
        }
        // Headerless SAM: an alignment line has eleven mandatory
        // tab-separated fields.
        first.split('\t').count() >= 11
    }

    fn is_vcf(path: &Path) -> bool {
        let Ok(lines) = io::read_lines(path, 1, MAX_TEXT_PREFIX) else {
            return false;
        };
        lines
            .first()
            .is_some_and(|l| l.starts_with("##fileformat=VCF"))
    }
}

impl FormatClassifier for HtsClassifier {
    fn classifies(&self, path: &Path, format: FormatId) -> bool {
        let matched = match format {
            FormatId::Bam => Self::bgzf_payload_magic(path, b"BAM\x01"),
            FormatId::Bcf => Self::bgzf_payload_magic(path, b"BCF"),
            FormatId::Sam => Self::is_sam(path),
            FormatId::Vcf => Self::is_vcf(path),
            _ => false,
        };
        trace!(format = %format, matched, "delegated classification");
        matched
    }
}
