use tracing::debug;

use crate::error::{AssemblyError, Result};
use crate::kmer::alphabet::Alphabet;
use crate::kmer::kmer::Kmer;

/// Slices reads into overlapping windows of length `k`.
#[derive(Debug, Clone)]
pub struct KmerExtractor<'a> {
    k: usize,
    alphabet: &'a Alphabet,
}

impl<'a> KmerExtractor<'a> {
    pub fn new(k: usize, alphabet: &'a Alphabet) -> Result<Self> {
        if k == 0 {
            return Err(AssemblyError::InvalidK { k });
        }
        Ok(Self { k, alphabet })
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Extracts every k-mer occurrence from `reads` and returns them sorted.
    ///
    /// Duplicates are kept: one entry per occurrence. Every read is checked
    /// before any window is taken, so a bad read never yields a partial list.
    pub fn extract<S: AsRef<str>>(&self, reads: &[S]) -> Result<Vec<Kmer>> {
        let mut total = 0;
        for (i, read) in reads.iter().enumerate() {
            let bytes = read.as_ref().as_bytes();
            if bytes.len() < self.k {
                return Err(AssemblyError::ReadTooShort {
                    read: i,
                    len: bytes.len(),
                    k: self.k,
                });
            }
            if let Some(position) = self.alphabet.first_foreign(bytes) {
                // Report the full character, not a UTF-8 continuation byte.
                let symbol = read.as_ref()[position..].chars().next().unwrap_or('?');
                return Err(AssemblyError::InvalidSymbol { read: i, position, symbol });
            }
            total += bytes.len() - self.k + 1;
        }

        let mut kmers = Vec::with_capacity(total);
        for read in reads {
            kmers.extend(windows(read.as_ref(), self.k));
        }
        debug!("Extracted {} k-mers from {} reads", kmers.len(), reads.len());

        kmers.sort();
        Ok(kmers)
    }
}

/// Every length-`k` window of `read`, in offset order.
///
/// The caller guarantees `read` is ASCII and at least `k` long.
fn windows(read: &str, k: usize) -> impl Iterator<Item = Kmer> + '_ {
    (0..=read.len() - k).map(move |j| read[j..j + k].to_string())
}

/// Convenience wrapper: extract and sort with a fresh extractor.
pub fn extract_kmers<S: AsRef<str>>(k: usize, reads: &[S], alphabet: &Alphabet) -> Result<Vec<Kmer>> {
    KmerExtractor::new(k, alphabet)?.extract(reads)
}
