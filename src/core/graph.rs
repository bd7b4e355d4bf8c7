//! Compatibility graph over a participant pool.
//!
//! Nodes are pool positions, edges join compatible participants. The graph
//! backs the maximum-matching strategy and the per-run diagnostics.

use crate::core::compat::is_compatible;
use crate::core::participant::Participant;
use petgraph::algo::maximum_matching;
use petgraph::graph::{NodeIndex, UnGraph};

pub struct CompatibilityGraph {
    /// Node weights are indices into the pool the graph was built from.
    graph: UnGraph<usize, ()>,
}

impl CompatibilityGraph {
    pub fn build(pool: &[Participant]) -> Self {
        let mut graph = UnGraph::with_capacity(pool.len(), pool.len());
        let nodes: Vec<NodeIndex> = (0..pool.len()).map(|i| graph.add_node(i)).collect();

        for i in 0..pool.len() {
            for j in (i + 1)..pool.len() {
                if is_compatible(&pool[i], &pool[j]) {
                    graph.add_edge(nodes[i], nodes[j], ());
                }
            }
        }

        Self { graph }
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Pool indices of participants with no compatible partner at all.
    pub fn isolated(&self) -> Vec<usize> {
        self.graph
            .node_indices()
            .filter(|&n| self.graph.neighbors(n).next().is_none())
            .map(|n| self.graph[n])
            .collect()
    }

    /// Maximum set of disjoint compatible pairs, as pool index pairs.
    pub fn maximum_pairs(&self) -> Vec<(usize, usize)> {
        let matching = maximum_matching(&self.graph);
        let mut pairs: Vec<(usize, usize)> = matching
            .edges()
            .map(|(a, b)| {
                let (a, b) = (self.graph[a], self.graph[b]);
                (a.min(b), a.max(b))
            })
            .collect();
        pairs.sort_unstable();
        pairs
    }
}
