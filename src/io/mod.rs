//! Read input, assembly output and diagnostic exports
pub mod export;
pub mod fasta;
pub mod fastq;
pub mod metadata;

use anyhow::Result;
use tracing::debug;

/// True when the file name marks FASTQ input (`.fastq` or `.fq` anywhere in it)
pub fn is_fastq(path: &str) -> bool {
    let name = std::path::Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path);
    name.contains(".fastq") || name.contains(".fq")
}

/// Read all sequences from a FASTA or FASTQ file, plain or gzipped
pub fn read_sequences(path: &str) -> Result<Vec<String>> {
    let sequences = if is_fastq(path) {
        fastq::read_fastq_sequences(fastq::open_fastq(path)?)?
    } else {
        fasta::read_fasta_sequences(fasta::open_fasta(path)?)?
    };
    debug!("Read {} sequences from {}", sequences.len(), path);
    Ok(sequences)
}
