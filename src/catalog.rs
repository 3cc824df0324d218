//! Format catalog: identifiers and file-name extensions.
//!
//! This is the closed set of formats the sniffer knows about, together
//! with the extension table owned by the surrounding conversion tooling.
//! The probe registry is cross-checked against this table at startup.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier for one supported file format.
///
/// The set is closed: adding a format means adding a variant here, an
/// entry in [`FORMAT_EXTENSIONS`], and a probe in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatId {
    Abi,
    Bam,
    Bcf,
    Bed,
    Bedgraph,
    Bigbed,
    Bigwig,
    BinaryBed,
    Bplink,
    Bz2,
    Cdao,
    Clustal,
    Cram,
    Csv,
    Dsrc,
    Embl,
    Ena,
    Fasta,
    Fastq,
    Genbank,
    Gfa,
    Gff2,
    Gff3,
    Gz,
    Json,
    Maf,
    Newick,
    Nexus,
    Ods,
    Paf,
    Phylip,
    Phyloxml,
    Plink,
    Qual,
    Rar,
    Sam,
    Scf,
    #[serde(rename = "7z")]
    SevenZip,
    Sra,
    Stockholm,
    Tar,
    Tsv,
    Twobit,
    Vcf,
    Wig,
    Wiggle,
    Xls,
    Xlsx,
    Xmfa,
    Xz,
    Yaml,
    Zip,
}

impl FormatId {
    /// Canonical lower-case name, stable across releases.
    pub fn as_str(self) -> &'static str {
        match self {
            FormatId::Abi => "abi",
            FormatId::Bam => "bam",
            FormatId::Bcf => "bcf",
            FormatId::Bed => "bed",
            FormatId::Bedgraph => "bedgraph",
            FormatId::Bigbed => "bigbed",
            FormatId::Bigwig => "bigwig",
            FormatId::BinaryBed => "binary_bed",
            FormatId::Bplink => "bplink",
            FormatId::Bz2 => "bz2",
            FormatId::Cdao => "cdao",
            FormatId::Clustal => "clustal",
            FormatId::Cram => "cram",
            FormatId::Csv => "csv",
            FormatId::Dsrc => "dsrc",
            FormatId::Embl => "embl",
            FormatId::Ena => "ena",
            FormatId::Fasta => "fasta",
            FormatId::Fastq => "fastq",
            FormatId::Genbank => "genbank",
            FormatId::Gfa => "gfa",
            FormatId::Gff2 => "gff2",
            FormatId::Gff3 => "gff3",
            FormatId::Gz => "gz",
            FormatId::Json => "json",
            FormatId::Maf => "maf",
            FormatId::Newick => "newick",
            FormatId::Nexus => "nexus",
            FormatId::Ods => "ods",
            FormatId::Paf => "paf",
            FormatId::Phylip => "phylip",
            FormatId::Phyloxml => "phyloxml",
            FormatId::Plink => "plink",
            FormatId::Qual => "qual",
            FormatId::Rar => "rar",
            FormatId::Sam => "sam",
            FormatId::Scf => "scf",
            FormatId::SevenZip => "7z",
            FormatId::Sra => "sra",
            FormatId::Stockholm => "stockholm",
            FormatId::Tar => "tar",
            FormatId::Tsv => "tsv",
            FormatId::Twobit => "twobit",
            FormatId::Vcf => "vcf",
            FormatId::Wig => "wig",
            FormatId::Wiggle => "wiggle",
            FormatId::Xls => "xls",
            FormatId::Xlsx => "xlsx",
            FormatId::Xmfa => "xmfa",
            FormatId::Xz => "xz",
            FormatId::Yaml => "yaml",
            FormatId::Zip => "zip",
        }
    }

    /// Parse a canonical format name (case-insensitive).
    pub fn from_name(name: &str) -> Option<FormatId> {
        let lower = name.to_ascii_lowercase();
        FORMAT_EXTENSIONS
            .iter()
            .map(|(format, _)| *format)
            .find(|format| format.as_str() == lower)
    }
}

impl fmt::Display for FormatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Format-to-extension table, owned by the format catalog rather than
/// the sniffer core. One format may carry several extensions.
pub const FORMAT_EXTENSIONS: &[(FormatId, &[&str])] = &[
    (FormatId::Abi, &["abi", "ab1"]),
    (FormatId::Bam, &["bam"]),
    (FormatId::Bcf, &["bcf"]),
    (FormatId::Bed, &["bed"]),
    (FormatId::Bedgraph, &["bedgraph", "bg"]),
    (FormatId::Bigbed, &["bigbed", "bb"]),
    (FormatId::Bigwig, &["bigwig", "bw"]),
    (FormatId::BinaryBed, &["bed"]),
    (FormatId::Bplink, &["bed", "bim", "fam"]),
    (FormatId::Bz2, &["bz2"]),
    (FormatId::Cdao, &["cdao"]),
    (FormatId::Clustal, &["clustal", "aln"]),
    (FormatId::Cram, &["cram"]),
    (FormatId::Csv, &["csv"]),
    (FormatId::Dsrc, &["dsrc"]),
    (FormatId::Embl, &["embl"]),
    (FormatId::Ena, &["ena"]),
    (FormatId::Fasta, &["fasta", "fa", "fst"]),
    (FormatId::Fastq, &["fastq", "fq"]),
    (FormatId::Genbank, &["genbank", "gbk", "gb"]),
    (FormatId::Gfa, &["gfa"]),
    (FormatId::Gff2, &["gff"]),
    (FormatId::Gff3, &["gff3"]),
    (FormatId::Gz, &["gz"]),
    (FormatId::Json, &["json"]),
    (FormatId::Maf, &["maf"]),
    (FormatId::Newick, &["newick", "nwk", "nhx"]),
    (FormatId::Nexus, &["nexus", "nx", "nxs"]),
    (FormatId::Ods, &["ods"]),
    (FormatId::Paf, &["paf"]),
    (FormatId::Phylip, &["phylip", "phy"]),
    (FormatId::Phyloxml, &["phyloxml", "xml"]),
    (FormatId::Plink, &["ped", "map"]),
    (FormatId::Qual, &["qual"]),
    (FormatId::Rar, &["rar"]),
    (FormatId::Sam, &["sam"]),
    (FormatId::Scf, &["scf"]),
    (FormatId::SevenZip, &["7z"]),
    (FormatId::Sra, &["sra"]),
    (FormatId::Stockholm, &["stockholm", "sto", "stk"]),
    (FormatId::Tar, &["tar"]),
    (FormatId::Tsv, &["tsv"]),
    (FormatId::Twobit, &["2bit"]),
    (FormatId::Vcf, &["vcf"]),
    (FormatId::Wig, &["wig"]),
    (FormatId::Wiggle, &["wiggle"]),
    (FormatId::Xls, &["xls"]),
    (FormatId::Xlsx, &["xlsx"]),
    (FormatId::Xmfa, &["xmfa"]),
    (FormatId::Xz, &["xz"]),
    (FormatId::Yaml, &["yaml", "yml"]),
    (FormatId::Zip, &["zip"]),
];

/// Extensions registered for `format`, empty if unknown.
pub fn extensions_for(format: FormatId) -> &'static [&'static str] {
    FORMAT_EXTENSIONS
        .iter()
        .find(|(f, _)| *f == format)
        .map(|(_, exts)| *exts)
        .unwrap_or(&[])
}
