use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AssemblyError, Result};
use crate::kmer::alphabet::Alphabet;
use crate::kmer::kmer::{suffix, Kmer};

/// Directed overlap between two k-mer occurrences, by index into the sorted list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KmerArc {
    pub source: usize,
    pub destination: usize,
}

impl KmerArc {
    pub fn new(source: usize, destination: usize) -> Self {
        Self { source, destination }
    }
}

impl From<(usize, usize)> for KmerArc {
    fn from((source, destination): (usize, usize)) -> Self {
        Self::new(source, destination)
    }
}

/// Which occurrences of a repeated successor k-mer receive an arc.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum LinkPolicy {
    /// Link only the lowest index of an equal run.
    #[default]
    FirstMatch,
    /// Link every index holding the successor k-mer.
    AllMatches,
}

/// Computes arcs over a sorted k-mer list by suffix extension and binary search.
#[derive(Debug, Clone)]
pub struct OverlapResolver<'a> {
    alphabet: &'a Alphabet,
    policy: LinkPolicy,
}

impl<'a> OverlapResolver<'a> {
    pub fn new(alphabet: &'a Alphabet, policy: LinkPolicy) -> Self {
        Self { alphabet, policy }
    }

    /// Returns arcs ordered by source, then alphabet symbol, then destination.
    pub fn resolve(&self, kmers: &[Kmer], k: usize) -> Result<Vec<KmerArc>> {
        check_sorted(kmers, k)?;

        let mut arcs = Vec::new();
        let mut candidate = String::with_capacity(k);
        for (i, kmer) in kmers.iter().enumerate() {
            let tail = suffix(kmer);
            for &symbol in self.alphabet.symbols() {
                candidate.clear();
                candidate.push_str(tail);
                candidate.push(symbol as char);

                let Some(lo) = find_first(kmers, &candidate) else {
                    continue;
                };
                match self.policy {
                    LinkPolicy::FirstMatch => arcs.push(KmerArc::new(i, lo)),
                    LinkPolicy::AllMatches => {
                        let hi = upper_bound(kmers, &candidate);
                        arcs.extend((lo..hi).map(|j| KmerArc::new(i, j)));
                    }
                }
            }
        }

        debug!("Resolved {} arcs over {} k-mers ({:?})", arcs.len(), kmers.len(), self.policy);
        Ok(arcs)
    }
}

/// Smallest index whose k-mer is not less than `target`.
pub fn lower_bound(kmers: &[Kmer], target: &str) -> usize {
    kmers.partition_point(|kmer| kmer.as_str() < target)
}

/// Smallest index whose k-mer is greater than `target`.
pub fn upper_bound(kmers: &[Kmer], target: &str) -> usize {
    kmers.partition_point(|kmer| kmer.as_str() <= target)
}

/// Index of the first occurrence of `target`, if present.
pub fn find_first(kmers: &[Kmer], target: &str) -> Option<usize> {
    let lo = lower_bound(kmers, target);
    (lo < kmers.len() && kmers[lo] == target).then_some(lo)
}

fn check_sorted(kmers: &[Kmer], k: usize) -> Result<()> {
    for (index, kmer) in kmers.iter().enumerate() {
        if kmer.len() != k {
            return Err(AssemblyError::KmerLength { index, expected: k, found: kmer.len() });
        }
        if index > 0 && kmers[index - 1] > *kmer {
            return Err(AssemblyError::UnsortedKmers { index });
        }
    }
    Ok(())
}

/// Shorthand for `OverlapResolver::new(alphabet, policy).resolve(kmers, k)`.
pub fn compute_arcs(kmers: &[Kmer], k: usize, alphabet: &Alphabet, policy: LinkPolicy) -> Result<Vec<KmerArc>> {
    OverlapResolver::new(alphabet, policy).resolve(kmers, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kmer::extract::extract_kmers;
    use crate::kmer::kmer::overlaps;

    fn kmers(list: &[&str]) -> Vec<Kmer> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn pairs(arcs: &[KmerArc]) -> Vec<(usize, usize)> {
        arcs.iter().map(|a| (a.source, a.destination)).collect()
    }

    #[test]
    fn test_first_match_links_lowest_duplicate() {
        let list = kmers(&["ACGT", "ACGT", "CGTA", "GTAC", "TACG"]);
        let arcs = compute_arcs(&list, 4, &Alphabet::dna(), LinkPolicy::FirstMatch).unwrap();
        assert_eq!(pairs(&arcs), vec![(0, 2), (1, 2), (2, 3), (3, 4), (4, 0)]);
    }

    #[test]
    fn test_all_matches_links_every_duplicate() {
        let list = kmers(&["ACGT", "ACGT", "CGTA", "GTAC", "TACG"]);
        let arcs = compute_arcs(&list, 4, &Alphabet::dna(), LinkPolicy::AllMatches).unwrap();
        assert_eq!(pairs(&arcs), vec![(0, 2), (1, 2), (2, 3), (3, 4), (4, 0), (4, 1)]);
    }

    #[test]
    fn test_arcs_follow_alphabet_order() {
        let list = kmers(&["ACG", "CGA", "CGT"]);
        let dna = compute_arcs(&list, 3, &Alphabet::dna(), LinkPolicy::FirstMatch).unwrap();
        assert_eq!(pairs(&dna), vec![(0, 1), (0, 2)]);

        let reversed: Alphabet = "TGCA".parse().unwrap();
        let rev = compute_arcs(&list, 3, &reversed, LinkPolicy::FirstMatch).unwrap();
        assert_eq!(pairs(&rev), vec![(0, 2), (0, 1)]);
    }

    #[test]
    fn test_self_loop_on_homopolymer() {
        let list = kmers(&["AAAA", "TTTT"]);
        let arcs = compute_arcs(&list, 4, &Alphabet::dna(), LinkPolicy::FirstMatch).unwrap();
        assert_eq!(pairs(&arcs), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_every_arc_is_an_overlap() {
        let list = extract_kmers(5, &["GATTACAGATTACCA", "TTACCAGGATA"], &Alphabet::dna()).unwrap();
        for policy in [LinkPolicy::FirstMatch, LinkPolicy::AllMatches] {
            let arcs = compute_arcs(&list, 5, &Alphabet::dna(), policy).unwrap();
            assert!(!arcs.is_empty());
            for arc in &arcs {
                assert!(overlaps(&list[arc.source], &list[arc.destination]));
            }
        }
    }

    #[test]
    fn test_k_of_one_links_to_each_symbol() {
        let list = kmers(&["A", "C", "C"]);
        let arcs = compute_arcs(&list, 1, &Alphabet::dna(), LinkPolicy::FirstMatch).unwrap();
        assert_eq!(pairs(&arcs), vec![(0, 0), (0, 1), (1, 0), (1, 1), (2, 0), (2, 1)]);
    }

    #[test]
    fn test_unsorted_input_rejected() {
        let list = kmers(&["CGTA", "ACGT"]);
        let err = compute_arcs(&list, 4, &Alphabet::dna(), LinkPolicy::FirstMatch).unwrap_err();
        assert_eq!(err, AssemblyError::UnsortedKmers { index: 1 });
    }

    #[test]
    fn test_wrong_length_rejected() {
        let list = kmers(&["ACG", "ACGT"]);
        let err = compute_arcs(&list, 4, &Alphabet::dna(), LinkPolicy::FirstMatch).unwrap_err();
        assert_eq!(err, AssemblyError::KmerLength { index: 0, expected: 4, found: 3 });
    }

    #[test]
    fn test_bounds() {
        let list = kmers(&["AC", "CA", "CA", "GT"]);
        assert_eq!(lower_bound(&list, "CA"), 1);
        assert_eq!(upper_bound(&list, "CA"), 3);
        assert_eq!(find_first(&list, "CA"), Some(1));
        assert_eq!(find_first(&list, "CC"), None);
        assert_eq!(find_first(&list, "TT"), None);
    }

    #[test]
    fn test_empty_list() {
        let arcs = compute_arcs(&[], 4, &Alphabet::dna(), LinkPolicy::FirstMatch).unwrap();
        assert!(arcs.is_empty());
    }
}
