//! Pipeline module - chains the assembly stages and the file collaborators
pub mod assemble;

pub use assemble::{assemble_file, assemble_sequences, build_graph, AssembleTargets, AssemblyOutput, GraphParts};
