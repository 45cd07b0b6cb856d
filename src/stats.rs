use ahash::AHashSet;
use petgraph::algo::connected_components;
use serde::Serialize;

use crate::graph::debruijn::DeBruijnGraph;
use crate::graph::feasibility::DegreeProfile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub arcs: usize,
    pub distinct_kmers: usize,
    /// Nodes with one more outgoing than incoming arc
    pub sources: usize,
    /// Nodes with one more incoming than outgoing arc
    pub sinks: usize,
    /// Nodes whose in- and out-degree differ by more than one
    pub unbalanced: usize,
    pub self_loops: usize,
    pub isolated: usize,
    /// Components when arc direction is ignored
    pub weak_components: usize,
}

pub fn calculate_graph_stats(graph: &DeBruijnGraph) -> GraphStats {
    let profile = DegreeProfile::of(graph);
    let distinct: AHashSet<&str> = graph.nodes().iter().map(|n| n.kmer.as_str()).collect();

    let self_loops = graph.arcs().filter(|a| a.source == a.destination).count();
    let isolated = (0..graph.node_count()).filter(|&n| profile.degree(n) == Some(0)).count();
    let unbalanced = profile
        .out_degrees
        .iter()
        .zip(&profile.in_degrees)
        .filter(|(&out, &inn)| out.abs_diff(inn) > 1)
        .count();

    GraphStats {
        nodes: graph.node_count(),
        arcs: graph.arc_count(),
        distinct_kmers: distinct.len(),
        sources: profile.sources.len(),
        sinks: profile.sinks.len(),
        unbalanced,
        self_loops,
        isolated,
        weak_components: connected_components(&graph.to_petgraph()),
    }
}
