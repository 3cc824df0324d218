//! Static probe registry.
//!
//! One probe per format, enumerated explicitly so the supported set is
//! checkable rather than inferred from naming accidents. Sweep order is
//! the table order (alphabetical by format name).

use super::delegate::FormatClassifier;
use super::magic;
use super::text;
use super::verdict::ProbeResult;
use crate::catalog::{self, FormatId};
use std::path::Path;

/// One registered detection strategy.
pub enum Probe {
    /// Fixed byte signature at offset zero, via the magic matcher.
    Magic(&'static [u8]),
    /// Bounded content inspection (line prefixes, tokens, structure).
    Content(fn(&Path) -> ProbeResult),
    /// Classification handed to the external codec capability.
    Delegated,
    /// Intentionally unimplemented; never contributes a candidate.
    Unsupported,
}

impl Probe {
    /// Run this probe against `path`. Never fails; probe-local errors
    /// fold into `NoMatch`.
    pub fn run(
        &self,
        path: &Path,
        classifier: &dyn FormatClassifier,
        format: FormatId,
    ) -> ProbeResult {
        match self {
            Probe::Magic(signature) => {
                ProbeResult::from_bool(magic::matches_magic(path, signature))
            }
            Probe::Content(probe) => probe(path),
            Probe::Delegated => ProbeResult::from_bool(classifier.classifies(path, format)),
            Probe::Unsupported => ProbeResult::Unsupported,
        }
    }
}

/// Every format the sniffer can be asked about, in sweep order.
pub static REGISTRY: &[(FormatId, Probe)] = &[
    (FormatId::Abi, Probe::Magic(b"ABIF")),
    (FormatId::Bam, Probe::Delegated),
    (FormatId::Bcf, Probe::Delegated),
    (FormatId::Bed, Probe::Content(text::is_bed)),
    (FormatId::Bedgraph, Probe::Content(text::is_bedgraph)),
    (FormatId::Bigbed, Probe::Unsupported),
    (FormatId::Bigwig, Probe::Unsupported),
    (FormatId::BinaryBed, Probe::Magic(&[0x6C, 0x1B, 0x01])),
    (FormatId::Bplink, Probe::Unsupported),
    (FormatId::Bz2, Probe::Magic(&[0x42, 0x5A, 0x68])),
    (FormatId::Cdao, Probe::Unsupported),
    (FormatId::Clustal, Probe::Content(text::is_clustal)),
    (FormatId::Cram, Probe::Magic(b"CRAM")),
    (FormatId::Csv, Probe::Content(text::is_csv)),
    (FormatId::Dsrc, Probe::Magic(&[0xAA, 0x02])),
    (FormatId::Embl, Probe::Unsupported),
    (FormatId::Ena, Probe::Content(text::is_ena)),
    (FormatId::Fasta, Probe::Content(text::is_fasta)),
    (FormatId::Fastq, Probe::Content(text::is_fastq)),
    (FormatId::Genbank, Probe::Content(text::is_genbank)),
    (FormatId::Gfa, Probe::Unsupported),
    (FormatId::Gff2, Probe::Content(text::is_gff2)),
    (FormatId::Gff3, Probe::Content(text::is_gff3)),
    (FormatId::Gz, Probe::Magic(&[0x1F, 0x8B])),
    (FormatId::Json, Probe::Content(text::is_json)),
    (FormatId::Maf, Probe::Content(text::is_maf)),
    (FormatId::Newick, Probe::Content(text::is_newick)),
    (FormatId::Nexus, Probe::Content(text::is_nexus)),
    (FormatId::Ods, Probe::Magic(&[0x50, 0x4B, 0x03, 0x04])),
    (FormatId::Paf, Probe::Unsupported),
    (FormatId::Phylip, Probe::Content(text::is_phylip)),
    (FormatId::Phyloxml, Probe::Content(text::is_phyloxml)),
    (FormatId::Plink, Probe::Unsupported),
    (FormatId::Qual, Probe::Content(text::is_qual)),
    (
        FormatId::Rar,
        Probe::Magic(&[0x52, 0x61, 0x72, 0x21, 0x1A, 0x07, 0x00]),
    ),
    (FormatId::Sam, Probe::Delegated),
    (FormatId::Scf, Probe::Magic(b".scf")),
    (
        FormatId::SevenZip,
        Probe::Magic(&[0x37, 0x7A, 0xBC, 0xAF, 0x27, 0x1C]),
    ),
    (FormatId::Sra, Probe::Unsupported),
    (FormatId::Stockholm, Probe::Content(text::is_stockholm)),
    (FormatId::Tar, Probe::Magic(b"ustar")),
    (FormatId::Tsv, Probe::Content(text::is_tsv)),
    (FormatId::Twobit, Probe::Content(text::is_twobit)),
    (FormatId::Vcf, Probe::Delegated),
    (FormatId::Wig, Probe::Unsupported),
    (FormatId::Wiggle, Probe::Unsupported),
    (FormatId::Xls, Probe::Magic(&[0xD0, 0xCF, 0x11])),
    (FormatId::Xlsx, Probe::Magic(&[0xD0, 0xCF, 0x11])),
    (FormatId::Xmfa, Probe::Content(text::is_xmfa)),
    (
        FormatId::Xz,
        Probe::Magic(&[0xFD, 0x37, 0x7A, 0x58, 0x5A, 0x00]),
    ),
    (FormatId::Yaml, Probe::Unsupported),
    (FormatId::Zip, Probe::Magic(&[0x50, 0x4B, 0x03, 0x04])),
];

/// Look up the probe registered for `format`.
pub fn probe_for(format: FormatId) -> Option<&'static Probe> {
    REGISTRY
        .iter()
        .find(|(f, _)| *f == format)
        .map(|(_, probe)| probe)
}

/// Startup self-check: formats known to the extension catalog that
/// have no registered probe. Detection only; the caller decides how to
/// report the gaps.
pub fn validate() -> Vec<FormatId> {
    catalog::FORMAT_EXTENSIONS
        .iter()
        .map(|(format, _)| *format)
        .filter(|format| probe_for(*format).is_none())
        .collect()
}
