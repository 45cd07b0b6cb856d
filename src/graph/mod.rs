//! Occurrence-level De Bruijn graph: arcs, construction, and Eulerian walks
pub mod debruijn;
pub mod euler;
pub mod feasibility;
pub mod overlap;

pub use debruijn::{DeBruijnGraph, Node};
pub use euler::{EulerPath, EulerianAssembler};
pub use feasibility::{check_trail, StartPolicy, TrailPlan};
pub use overlap::{compute_arcs, KmerArc, LinkPolicy, OverlapResolver};
