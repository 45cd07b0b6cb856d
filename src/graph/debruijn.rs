use petgraph::graph::DiGraph;
use serde::Serialize;
use tracing::debug;

use crate::error::{AssemblyError, Result};
use crate::graph::overlap::KmerArc;
use crate::kmer::kmer::Kmer;

/// One k-mer occurrence. Repeated k-mers get one node each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: usize,
    pub kmer: Kmer,
    /// Successor node ids in arc order; traversal pops from the end.
    pub successors: Vec<usize>,
}

impl Node {
    pub fn new(id: usize, kmer: Kmer) -> Self {
        Self {
            id,
            kmer,
            successors: Vec::new(),
        }
    }

    pub fn out_degree(&self) -> usize {
        self.successors.len()
    }
}

/// Node arena for the occurrence-level De Bruijn graph.
///
/// Node `i` carries the i-th entry of the sorted k-mer list. Successor lists
/// are drained in place by a traversal, after which the graph is marked
/// exhausted and refuses a second walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeBruijnGraph {
    nodes: Vec<Node>,
    exhausted: bool,
}

impl DeBruijnGraph {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(n),
            exhausted: false,
        }
    }

    /// Creates one node per k-mer, then attaches arcs in the given order.
    pub fn build(kmers: &[Kmer], arcs: &[KmerArc]) -> Result<Self> {
        let mut graph = Self::with_capacity(kmers.len());
        for kmer in kmers {
            graph.add_node(kmer.clone());
        }
        for arc in arcs {
            graph.add_arc(arc.source, arc.destination)?;
        }
        debug!("Built graph with {} nodes and {} arcs", graph.node_count(), arcs.len());
        Ok(graph)
    }

    /// Appends a node and returns its id.
    pub fn add_node(&mut self, kmer: Kmer) -> usize {
        let id = self.nodes.len();
        self.nodes.push(Node::new(id, kmer));
        id
    }

    /// Appends `to` to the successor list of `from`.
    pub fn add_arc(&mut self, from: usize, to: usize) -> Result<()> {
        let nodes = self.nodes.len();
        if from >= nodes || to >= nodes {
            return Err(AssemblyError::ArcOutOfRange { from, to, nodes });
        }
        self.nodes[from].successors.push(to);
        Ok(())
    }

    pub fn has_successor(&self, node: usize) -> bool {
        self.nodes.get(node).map_or(false, |n| !n.successors.is_empty())
    }

    /// Removes and returns the most recently added successor of `node`.
    pub fn take_successor(&mut self, node: usize) -> Option<usize> {
        self.nodes.get_mut(node)?.successors.pop()
    }

    pub fn node(&self, id: usize) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of arcs not yet consumed.
    pub fn arc_count(&self) -> usize {
        self.nodes.iter().map(Node::out_degree).sum()
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub(crate) fn mark_exhausted(&mut self) {
        self.exhausted = true;
    }

    /// In-degree of every node.
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.nodes.len()];
        for node in &self.nodes {
            for &next in &node.successors {
                degrees[next] += 1;
            }
        }
        degrees
    }

    /// Arcs in node order, then successor-list order.
    pub fn arcs(&self) -> impl Iterator<Item = KmerArc> + '_ {
        self.nodes
            .iter()
            .flat_map(|n| n.successors.iter().map(move |&d| KmerArc::new(n.id, d)))
    }

    /// Copy into a petgraph graph with k-mer labels, node indices preserved.
    pub fn to_petgraph(&self) -> DiGraph<Kmer, ()> {
        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.arc_count());
        let indices: Vec<_> = self.nodes.iter().map(|n| graph.add_node(n.kmer.clone())).collect();
        for arc in self.arcs() {
            graph.add_edge(indices[arc.source], indices[arc.destination], ());
        }
        graph
    }
}
