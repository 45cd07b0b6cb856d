use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{AssemblyError, Result};
use crate::graph::feasibility::StartPolicy;
use crate::graph::overlap::LinkPolicy;
use crate::kmer::alphabet::Alphabet;

/// Default k-mer size.
pub const DEFAULT_K: usize = 21;

/// Parameters of one assembly run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssemblyConfig {
    /// K-mer size
    pub k: usize,
    /// Symbols reads may contain, in the order successors are tried
    pub alphabet: Alphabet,
    /// How repeated successor k-mers are linked
    pub link_policy: LinkPolicy,
    /// Where the Eulerian walk begins
    pub start_policy: StartPolicy,
    /// Reject graphs without a trail over every arc
    pub check_feasibility: bool,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            alphabet: Alphabet::dna(),
            link_policy: LinkPolicy::FirstMatch,
            start_policy: StartPolicy::Balanced,
            check_feasibility: true,
        }
    }
}

impl AssemblyConfig {
    pub fn with_k(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }

    /// First-match links, walk from node 0, no feasibility check.
    pub fn legacy(k: usize) -> Self {
        Self {
            k,
            alphabet: Alphabet::dna(),
            link_policy: LinkPolicy::FirstMatch,
            start_policy: StartPolicy::FirstNode,
            check_feasibility: false,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(AssemblyError::InvalidK { k: self.k });
        }
        Ok(())
    }

    /// Loads a JSON config; missing fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = AssemblyConfig::default();
        assert_eq!(config.k, 21);
        assert_eq!(config.alphabet, Alphabet::dna());
        assert_eq!(config.link_policy, LinkPolicy::FirstMatch);
        assert_eq!(config.start_policy, StartPolicy::Balanced);
        assert!(config.check_feasibility);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: AssemblyConfig =
            serde_json::from_str(r#"{"k": 31, "link_policy": "all-matches"}"#).unwrap();
        assert_eq!(config.k, 31);
        assert_eq!(config.link_policy, LinkPolicy::AllMatches);
        assert_eq!(config.start_policy, StartPolicy::Balanced);
        assert!(config.check_feasibility);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(serde_json::from_str::<AssemblyConfig>(r#"{"kmer": 31}"#).is_err());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{"k": 5, "alphabet": "01", "start_policy": "first-node", "check_feasibility": false}}"#
        )
        .unwrap();

        let config = AssemblyConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.k, 5);
        assert_eq!(config.alphabet.symbols(), b"01");
        assert_eq!(config.start_policy, StartPolicy::FirstNode);
        assert!(!config.check_feasibility);
    }

    #[test]
    fn test_zero_k_in_file_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"k": 0}}"#).unwrap();
        assert!(AssemblyConfig::from_json_file(file.path()).is_err());
    }

    #[test]
    fn test_round_trip_json() {
        let config = AssemblyConfig::legacy(7);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"first-node\""));
        assert_eq!(serde_json::from_str::<AssemblyConfig>(&json).unwrap(), config);
    }
}
