mod cli_main;

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

use cli_main::{Cli, Commands, GraphOptions};
use wren::io::export::{export_dot_graph, export_node_table};
use wren::io::read_sequences;
use wren::io::metadata::StageTimings;
use wren::pipeline::{assemble_file, build_graph, AssembleTargets};
use wren::stats::calculate_graph_stats;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Setting tracing default failed");

    let result = match cli.command {
        Commands::Assemble { graph, output, name, path_tsv, report } => {
            run_assemble(graph, output, name, path_tsv, report)
        }
        Commands::Graph { graph } => run_graph(graph),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_assemble(
    options: GraphOptions,
    output: String,
    name: String,
    path_tsv: Option<String>,
    report: Option<String>,
) -> anyhow::Result<()> {
    let config = options.resolve_config()?;
    let start = std::time::Instant::now();

    let targets = AssembleTargets {
        input: options.input,
        output,
        record_name: name,
        dot: options.dot,
        node_tsv: options.tsv,
        path_tsv,
        report,
    };
    let summary = assemble_file(&targets, &config)?;

    info!(
        "Assembly completed in {:.2}s: {} bases from {} reads",
        start.elapsed().as_secs_f32(),
        summary.assembled_length,
        summary.reads
    );
    Ok(())
}

fn run_graph(options: GraphOptions) -> anyhow::Result<()> {
    let config = options.resolve_config()?;
    let reads = read_sequences(&options.input)?;

    let mut timings = StageTimings::default();
    let parts = build_graph(&reads, &config, &mut timings)?;

    if let Some(path) = &options.dot {
        export_dot_graph(&parts.graph, path)?;
        info!("Graph DOT written to {}", path);
    }
    if let Some(path) = &options.tsv {
        export_node_table(&parts.graph, path)?;
        info!("Node table written to {}", path);
    }

    let stats = calculate_graph_stats(&parts.graph);
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
