use tracing::{debug, warn};

use crate::error::{AssemblyError, Infeasibility, Result};
use crate::graph::debruijn::DeBruijnGraph;
use crate::graph::feasibility::{check_trail, DegreeProfile, StartPolicy};
use crate::kmer::kmer::last_symbol;

/// Node ids of one walk, in forward order.
pub type EulerPath = Vec<usize>;

/// Hierholzer traversal over a [`DeBruijnGraph`], consuming its arcs.
#[derive(Debug, Clone, Copy)]
pub struct EulerianAssembler {
    pub start_policy: StartPolicy,
    /// Reject graphs without a trail over every arc instead of returning a partial walk.
    pub check_feasibility: bool,
}

impl Default for EulerianAssembler {
    fn default() -> Self {
        Self::new(StartPolicy::Balanced, true)
    }
}

impl EulerianAssembler {
    pub fn new(start_policy: StartPolicy, check_feasibility: bool) -> Self {
        Self {
            start_policy,
            check_feasibility,
        }
    }

    /// Walks the graph from the chosen start node and returns the node path.
    ///
    /// Every successor list is drained in place and the graph is marked
    /// exhausted, even when the walk turns out incomplete.
    pub fn find_path(&self, graph: &mut DeBruijnGraph) -> Result<EulerPath> {
        if graph.is_exhausted() {
            return Err(AssemblyError::GraphExhausted);
        }
        if graph.is_empty() {
            graph.mark_exhausted();
            return Ok(Vec::new());
        }

        let start = if self.check_feasibility {
            let plan = check_trail(graph, self.start_policy)?;
            debug!("Trail starts at node {} (circuit: {})", plan.start, plan.circuit);
            plan.start
        } else {
            match self.start_policy {
                StartPolicy::Balanced => DegreeProfile::of(graph).natural_start(),
                StartPolicy::FirstNode => 0,
            }
        };

        let path = hierholzer(graph, start);
        graph.mark_exhausted();

        let remaining = graph.arc_count();
        if remaining > 0 {
            if self.check_feasibility {
                return Err(Infeasibility::IncompleteTrail { remaining }.into());
            }
            warn!("{} arcs were not reached from node {}; assembly is partial", remaining, start);
        }
        Ok(path)
    }

    /// Finds a path and spells the sequence it walks.
    pub fn assemble(&self, graph: &mut DeBruijnGraph) -> Result<(String, EulerPath)> {
        let path = self.find_path(graph)?;
        let sequence = spell_path(graph, &path);
        Ok((sequence, path))
    }
}

/// Stack-based Hierholzer walk from `start`.
///
/// Each iteration either consumes one arc or pops one node, so the loop runs
/// at most `arcs + nodes on the stack` times.
fn hierholzer(graph: &mut DeBruijnGraph, start: usize) -> EulerPath {
    let mut stack = vec![start];
    let mut path = Vec::with_capacity(graph.arc_count() + 1);

    while let Some(&v) = stack.last() {
        match graph.take_successor(v) {
            Some(next) => stack.push(next),
            None => {
                stack.pop();
                path.push(v);
            }
        }
    }

    path.reverse();
    path
}

/// Full first k-mer, then the last symbol of each following node's k-mer.
/// Ids outside the graph are skipped.
pub fn spell_path(graph: &DeBruijnGraph, path: &[usize]) -> String {
    let mut nodes = path.iter().filter_map(|&id| graph.node(id));
    let Some(head) = nodes.next() else {
        return String::new();
    };

    let mut sequence = String::with_capacity(head.kmer.len() + path.len());
    sequence.push_str(&head.kmer);
    sequence.extend(nodes.filter_map(|node| last_symbol(&node.kmer)));
    sequence
}
