//! K-mer types, the symbol alphabet and window extraction
pub mod alphabet;
pub mod extract;
pub mod kmer;

pub use alphabet::Alphabet;
pub use extract::{extract_kmers, KmerExtractor};
pub use kmer::Kmer;
