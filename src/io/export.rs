use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use petgraph::dot::{Config, Dot};

use crate::graph::debruijn::DeBruijnGraph;

/// Export the graph in DOT format for tools like Graphviz
pub fn export_dot_graph(graph: &DeBruijnGraph, output_path: &str) -> io::Result<()> {
    let file = File::create(Path::new(output_path))?;
    let mut writer = BufWriter::new(file);
    write_dot(graph, &mut writer)?;
    writer.flush()
}

pub fn write_dot<W: Write>(graph: &DeBruijnGraph, writer: &mut W) -> io::Result<()> {
    let pg = graph.to_petgraph();
    write!(writer, "{:?}", Dot::with_config(&pg, &[Config::EdgeNoLabel]))
}

/// Export one row per node: id, k-mer, degrees and successor list
pub fn export_node_table(graph: &DeBruijnGraph, output_path: &str) -> io::Result<()> {
    let file = File::create(Path::new(output_path))?;
    let mut writer = BufWriter::new(file);
    write_node_table(graph, &mut writer)?;
    writer.flush()
}

pub fn write_node_table<W: Write>(graph: &DeBruijnGraph, writer: &mut W) -> io::Result<()> {
    let in_degrees = graph.in_degrees();

    writeln!(writer, "id\tkmer\tin_degree\tout_degree\tsuccessors")?;
    for node in graph.nodes() {
        let successors = node
            .successors
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(",");
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}",
            node.id,
            node.kmer,
            in_degrees[node.id],
            node.out_degree(),
            successors
        )?;
    }
    Ok(())
}

/// Export the walk as one row per step: step, node id, k-mer
pub fn export_path_table(graph: &DeBruijnGraph, path: &[usize], output_path: &str) -> io::Result<()> {
    let file = File::create(Path::new(output_path))?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "step\tnode\tkmer")?;
    for (step, &id) in path.iter().enumerate() {
        let kmer = graph.node(id).map(|n| n.kmer.as_str()).unwrap_or("");
        writeln!(writer, "{}\t{}\t{}", step, id, kmer)?;
    }
    writer.flush()
}
