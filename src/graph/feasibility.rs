//! Degree-balance and reachability analysis ahead of an Eulerian walk.
//!
//! A directed graph has a trail using every arc exactly once when at most one
//! node has one more outgoing than incoming arc (where the trail starts), at
//! most one node has one more incoming than outgoing arc (where it ends), all
//! other nodes are balanced, and every node can be reached from the start.
//! Nodes are k-mer occurrences the walk has to spell, so an isolated node
//! counts as unreachable.

use serde::{Deserialize, Serialize};

use crate::error::Infeasibility;
use crate::graph::debruijn::DeBruijnGraph;

/// How the traversal picks its first node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum StartPolicy {
    /// The unique node with surplus out-degree, else the first node with an arc.
    #[default]
    Balanced,
    /// Always node 0.
    FirstNode,
}

/// Degree summary of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DegreeProfile {
    pub in_degrees: Vec<usize>,
    pub out_degrees: Vec<usize>,
    /// Nodes with out - in = +1.
    pub sources: Vec<usize>,
    /// Nodes with in - out = +1.
    pub sinks: Vec<usize>,
}

impl DegreeProfile {
    pub fn of(graph: &DeBruijnGraph) -> Self {
        let in_degrees = graph.in_degrees();
        let out_degrees: Vec<usize> = graph.nodes().iter().map(|n| n.out_degree()).collect();

        let mut sources = Vec::new();
        let mut sinks = Vec::new();
        for (node, (&out, &inn)) in out_degrees.iter().zip(&in_degrees).enumerate() {
            if out == inn + 1 {
                sources.push(node);
            } else if inn == out + 1 {
                sinks.push(node);
            }
        }

        Self {
            in_degrees,
            out_degrees,
            sources,
            sinks,
        }
    }

    /// Total degree of `node`, or `None` when it is not in the graph.
    pub fn degree(&self, node: usize) -> Option<usize> {
        Some(self.in_degrees.get(node)? + self.out_degrees.get(node)?)
    }

    /// The unique source, else the first node with an outgoing arc, else node 0.
    pub fn natural_start(&self) -> usize {
        self.sources
            .first()
            .copied()
            .unwrap_or_else(|| self.out_degrees.iter().position(|&d| d > 0).unwrap_or(0))
    }

    /// First node whose in- and out-degrees differ by more than one.
    pub fn first_imbalance(&self) -> Option<Infeasibility> {
        self.out_degrees
            .iter()
            .zip(&self.in_degrees)
            .position(|(&out, &inn)| out.abs_diff(inn) > 1)
            .map(|node| Infeasibility::DegreeImbalance {
                node,
                out_degree: self.out_degrees[node],
                in_degree: self.in_degrees[node],
            })
    }
}

/// Outcome of a successful check: where the trail must begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrailPlan {
    pub start: usize,
    /// True when every node is balanced, so the trail closes on itself.
    pub circuit: bool,
}

/// Verifies that `graph` admits a single trail over all its arcs and picks
/// the start node according to `policy`. An empty graph is trivially fine.
pub fn check_trail(graph: &DeBruijnGraph, policy: StartPolicy) -> Result<TrailPlan, Infeasibility> {
    if graph.is_empty() {
        return Ok(TrailPlan { start: 0, circuit: true });
    }

    let profile = DegreeProfile::of(graph);
    if let Some(imbalance) = profile.first_imbalance() {
        return Err(imbalance);
    }
    if profile.sources.len() > 1 || profile.sinks.len() > 1 {
        return Err(Infeasibility::TooManyEndpoints {
            sources: profile.sources.len(),
            sinks: profile.sinks.len(),
        });
    }

    let circuit = profile.sources.is_empty();
    let natural = profile.natural_start();
    let start = match policy {
        StartPolicy::Balanced => natural,
        StartPolicy::FirstNode => {
            // In a circuit any node carrying an arc may start; node 0 with no
            // arcs only works when the graph has no arcs at all.
            let zero_ok = if circuit {
                profile.out_degrees[0] > 0 || graph.arc_count() == 0
            } else {
                natural == 0
            };
            if !zero_ok {
                return Err(Infeasibility::InvalidStart { node: 0, expected: natural });
            }
            0
        }
    };

    let reached = reachable_from(graph, start);
    if let Some(node) = reached.iter().position(|&r| !r) {
        return Err(Infeasibility::Unreachable { node, start });
    }

    Ok(TrailPlan { start, circuit })
}

/// Marks every node reachable from `start` along arcs, with an explicit stack.
pub fn reachable_from(graph: &DeBruijnGraph, start: usize) -> Vec<bool> {
    let mut seen = vec![false; graph.node_count()];
    if start >= seen.len() {
        return seen;
    }

    let mut stack = vec![start];
    seen[start] = true;
    while let Some(v) = stack.pop() {
        for &next in &graph.nodes()[v].successors {
            if !seen[next] {
                seen[next] = true;
                stack.push(next);
            }
        }
    }
    seen
}
