//! De Bruijn graph assembly of short reads along an Eulerian trail.
//!
//! Reads are cut into sorted k-mers, overlapping k-mers are linked by
//! binary search, one graph node is created per k-mer occurrence, and a
//! Hierholzer walk over the arcs spells the assembled sequence.

pub mod config;
pub mod error;
pub mod graph;
pub mod io;
pub mod kmer;
pub mod pipeline;
pub mod stats;

pub use config::AssemblyConfig;
pub use error::{AssemblyError, Infeasibility};
pub use pipeline::{assemble_sequences, AssemblyOutput};
