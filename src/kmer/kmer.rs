pub type Kmer = String;

/// The k-1 symbols that follow the first one.
pub fn suffix(kmer: &str) -> &str {
    kmer.get(1..).unwrap_or("")
}

/// The k-1 symbols that precede the last one.
pub fn prefix(kmer: &str) -> &str {
    kmer.get(..kmer.len().saturating_sub(1)).unwrap_or("")
}

/// True when `next` can follow `kmer` in a walk, i.e. they share a (k-1)-overlap.
pub fn overlaps(kmer: &str, next: &str) -> bool {
    kmer.len() == next.len() && !kmer.is_empty() && suffix(kmer) == prefix(next)
}

/// Last symbol of a k-mer, the one base a walk step contributes.
pub fn last_symbol(kmer: &str) -> Option<char> {
    kmer.as_bytes().last().map(|&b| b as char)
}
