use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AssemblyError, Result};

/// Ordered set of symbols reads are written in.
///
/// Symbol order is the order in which successor candidates are tried when
/// computing arcs, and therefore the order successor lists are filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    symbols: Vec<u8>,
    members: [bool; 256],
}

impl Alphabet {
    /// Builds an alphabet from distinct printable ASCII symbols.
    pub fn new(symbols: &[u8]) -> Result<Self> {
        if symbols.is_empty() {
            return Err(AssemblyError::InvalidAlphabet("alphabet is empty".to_string()));
        }

        let mut members = [false; 256];
        for &symbol in symbols {
            if !symbol.is_ascii_graphic() {
                return Err(AssemblyError::InvalidAlphabet(format!(
                    "symbol {:#04x} is not printable ASCII",
                    symbol
                )));
            }
            if members[symbol as usize] {
                return Err(AssemblyError::InvalidAlphabet(format!(
                    "symbol '{}' appears more than once",
                    symbol as char
                )));
            }
            members[symbol as usize] = true;
        }

        Ok(Self {
            symbols: symbols.to_vec(),
            members,
        })
    }

    /// The nucleotide alphabet `ACGT`.
    pub fn dna() -> Self {
        Self::new(b"ACGT").expect("ACGT is a valid alphabet")
    }

    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.members[symbol as usize]
    }

    /// Position of the first byte of `seq` that is not in the alphabet.
    pub fn first_foreign(&self, seq: &[u8]) -> Option<usize> {
        seq.iter().position(|&b| !self.contains(b))
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::dna()
    }
}

impl FromStr for Alphabet {
    type Err = AssemblyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s.as_bytes())
    }
}

impl TryFrom<String> for Alphabet {
    type Error = AssemblyError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> String {
        alphabet.to_string()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Symbols are validated ASCII, so the lossy path never triggers.
        f.write_str(&String::from_utf8_lossy(&self.symbols))
    }
}
