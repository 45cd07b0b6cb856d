use serde::Serialize;
use std::fs::File;
use std::io;

use crate::config::AssemblyConfig;
use crate::stats::GraphStats;

/// Wall-clock time spent in each stage, in milliseconds
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct StageTimings {
    pub extract_ms: f64,
    pub overlap_ms: f64,
    pub build_ms: f64,
    pub traverse_ms: f64,
}

impl StageTimings {
    pub fn total_ms(&self) -> f64 {
        self.extract_ms + self.overlap_ms + self.build_ms + self.traverse_ms
    }
}

/// Summary of one assembly run
#[derive(Serialize, Debug, Clone)]
pub struct AssemblyReport {
    pub config: AssemblyConfig,
    pub reads: usize,
    pub kmers: usize,
    pub arcs: usize,
    pub path_length: usize,
    pub assembled_length: usize,
    pub gc_content: f64,
    pub graph: GraphStats,
    pub timings: StageTimings,
}

/// Fraction of G and C symbols in a sequence
pub fn gc_content(sequence: &str) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }
    let gc_count = sequence
        .bytes()
        .filter(|&b| b == b'G' || b == b'C' || b == b'g' || b == b'c')
        .count();
    gc_count as f64 / sequence.len() as f64
}

/// Write the run report to a JSON file
pub fn write_report(report: &AssemblyReport, output: &str) -> io::Result<()> {
    let file = File::create(output)?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gc_content() {
        assert_eq!(gc_content(""), 0.0);
        assert_eq!(gc_content("GGCC"), 1.0);
        assert_eq!(gc_content("ACGT"), 0.5);
        assert_eq!(gc_content("AAAT"), 0.0);
    }

    #[test]
    fn test_total_ms() {
        let timings = StageTimings {
            extract_ms: 1.0,
            overlap_ms: 2.0,
            build_ms: 0.5,
            traverse_ms: 0.25,
        };
        assert_eq!(timings.total_ms(), 3.75);
    }
}
