use thiserror::Error;

/// Errors raised by the assembly core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("k-mer size must be at least 1 (got {k})")]
    InvalidK { k: usize },

    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("read {read} has length {len}, shorter than k = {k}")]
    ReadTooShort { read: usize, len: usize, k: usize },

    #[error("read {read} contains symbol '{symbol}' at position {position}, which is not in the alphabet")]
    InvalidSymbol { read: usize, position: usize, symbol: char },

    #[error("k-mer {index} has length {found}, expected {expected}")]
    KmerLength { index: usize, expected: usize, found: usize },

    #[error("k-mer list is not sorted at index {index}")]
    UnsortedKmers { index: usize },

    #[error("arc ({from}, {to}) references a node outside 0..{nodes}")]
    ArcOutOfRange { from: usize, to: usize, nodes: usize },

    #[error("graph has no Eulerian trail: {0}")]
    Infeasible(Infeasibility),

    #[error("graph has already been traversed")]
    GraphExhausted,
}

/// Reasons a graph cannot be covered by a single Eulerian trail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Infeasibility {
    #[error("node {node} has out-degree {out_degree} and in-degree {in_degree}")]
    DegreeImbalance { node: usize, out_degree: usize, in_degree: usize },

    #[error("{sources} nodes with surplus out-degree and {sinks} with surplus in-degree")]
    TooManyEndpoints { sources: usize, sinks: usize },

    #[error("node {node} cannot start a trail, node {expected} must")]
    InvalidStart { node: usize, expected: usize },

    #[error("node {node} is not reachable from start node {start}")]
    Unreachable { node: usize, start: usize },

    #[error("{remaining} arcs left unconsumed after traversal")]
    IncompleteTrail { remaining: usize },
}

impl From<Infeasibility> for AssemblyError {
    fn from(reason: Infeasibility) -> Self {
        AssemblyError::Infeasible(reason)
    }
}

pub type Result<T> = std::result::Result<T, AssemblyError>;
