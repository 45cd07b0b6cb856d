use std::time::Instant;

use anyhow::Context;
use tracing::{info, warn};

use crate::config::AssemblyConfig;
use crate::error::Result;
use crate::graph::debruijn::DeBruijnGraph;
use crate::graph::euler::{EulerPath, EulerianAssembler};
use crate::graph::overlap::{KmerArc, OverlapResolver};
use crate::io::export::{export_dot_graph, export_node_table, export_path_table};
use crate::io::fasta::FastaWriter;
use crate::io::metadata::{gc_content, write_report, AssemblyReport, StageTimings};
use crate::io::read_sequences;
use crate::kmer::extract::KmerExtractor;
use crate::kmer::kmer::Kmer;
use crate::stats::calculate_graph_stats;

/// Result of the core pipeline.
#[derive(Debug, Clone)]
pub struct AssemblyOutput {
    /// Assembled sequence, empty when there were no reads.
    pub sequence: String,
    pub path: EulerPath,
    /// The graph as built, before the walk drained it.
    pub graph: DeBruijnGraph,
    pub report: AssemblyReport,
}

/// Sorted k-mers, their arcs and the graph built from them.
#[derive(Debug, Clone)]
pub struct GraphParts {
    pub kmers: Vec<Kmer>,
    pub arcs: Vec<KmerArc>,
    pub graph: DeBruijnGraph,
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

/// Extraction, overlap and construction, timing each stage.
pub fn build_graph<S: AsRef<str>>(
    reads: &[S],
    config: &AssemblyConfig,
    timings: &mut StageTimings,
) -> Result<GraphParts> {
    config.validate()?;

    let start = Instant::now();
    let kmers = KmerExtractor::new(config.k, &config.alphabet)?.extract(reads)?;
    timings.extract_ms = elapsed_ms(start);
    info!("{} k-mers extracted and sorted in {:.2} ms", kmers.len(), timings.extract_ms);

    let start = Instant::now();
    let arcs = OverlapResolver::new(&config.alphabet, config.link_policy).resolve(&kmers, config.k)?;
    timings.overlap_ms = elapsed_ms(start);
    info!("{} arcs computed in {:.2} ms", arcs.len(), timings.overlap_ms);

    let start = Instant::now();
    let graph = DeBruijnGraph::build(&kmers, &arcs)?;
    timings.build_ms = elapsed_ms(start);
    info!("Graph built with {} nodes in {:.2} ms", graph.node_count(), timings.build_ms);

    Ok(GraphParts { kmers, arcs, graph })
}

/// Reads in, assembled sequence out.
///
/// No reads is a valid run and yields an empty sequence.
pub fn assemble_sequences<S: AsRef<str>>(reads: &[S], config: &AssemblyConfig) -> Result<AssemblyOutput> {
    if reads.is_empty() {
        warn!("No reads given; the assembled sequence is empty");
    }

    let mut timings = StageTimings::default();
    let GraphParts { kmers, arcs, graph } = build_graph(reads, config, &mut timings)?;
    let snapshot = graph.clone();
    let stats = calculate_graph_stats(&snapshot);

    let start = Instant::now();
    let mut working = graph;
    let assembler = EulerianAssembler::new(config.start_policy, config.check_feasibility);
    let (sequence, path) = assembler.assemble(&mut working)?;
    timings.traverse_ms = elapsed_ms(start);
    info!(
        "Eulerian walk of {} nodes spelled {} bases in {:.2} ms",
        path.len(),
        sequence.len(),
        timings.traverse_ms
    );

    let report = AssemblyReport {
        config: config.clone(),
        reads: reads.len(),
        kmers: kmers.len(),
        arcs: arcs.len(),
        path_length: path.len(),
        assembled_length: sequence.len(),
        gc_content: gc_content(&sequence),
        graph: stats,
        timings,
    };

    Ok(AssemblyOutput {
        sequence,
        path,
        graph: snapshot,
        report,
    })
}

/// File locations for one assembly run.
#[derive(Debug, Clone, Default)]
pub struct AssembleTargets {
    pub input: String,
    pub output: String,
    pub record_name: String,
    pub dot: Option<String>,
    pub node_tsv: Option<String>,
    pub path_tsv: Option<String>,
    pub report: Option<String>,
}

/// Read a FASTA/FASTQ file, assemble it, and write the FASTA result plus any
/// requested diagnostics.
pub fn assemble_file(targets: &AssembleTargets, config: &AssemblyConfig) -> anyhow::Result<AssemblyReport> {
    info!("Starting assembly from: {}", targets.input);
    info!(
        "k = {}, alphabet = {}, link policy = {:?}, start policy = {:?}, feasibility check = {}",
        config.k, config.alphabet, config.link_policy, config.start_policy, config.check_feasibility
    );

    let reads = read_sequences(&targets.input)?;
    info!("{} sequences read", reads.len());

    let output = assemble_sequences(&reads, config)
        .with_context(|| format!("assembling {}", targets.input))?;

    let mut writer = FastaWriter::new(&targets.output)?;
    writer
        .write_record(&targets.record_name, &output.sequence)
        .with_context(|| format!("writing {}", targets.output))?;
    writer.finish().with_context(|| format!("writing {}", targets.output))?;
    info!("Assembled sequence written to {}", targets.output);

    if let Some(path) = &targets.dot {
        export_dot_graph(&output.graph, path).with_context(|| format!("writing {}", path))?;
        info!("Graph DOT written to {}", path);
    }
    if let Some(path) = &targets.node_tsv {
        export_node_table(&output.graph, path).with_context(|| format!("writing {}", path))?;
        info!("Node table written to {}", path);
    }
    if let Some(path) = &targets.path_tsv {
        export_path_table(&output.graph, &output.path, path)
            .with_context(|| format!("writing {}", path))?;
        info!("Path table written to {}", path);
    }
    if let Some(path) = &targets.report {
        write_report(&output.report, path).with_context(|| format!("writing {}", path))?;
        info!("Report written to {}", path);
    }

    Ok(output.report)
}
