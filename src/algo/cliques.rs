/*!
# Maximum Cliques

Exhaustive backtracking over the vertices in insertion order. A candidate is only ever extended by
a later vertex that is adjacent to every current member, so every candidate is a clique and each
one is considered exactly once. The search is exponential and intended for small graphs.
*/

use tracing::debug;

use super::*;

struct CliqueSearch {
    order: Vec<Node>,
    adjacency: Vec<NodeBitSet>,
    current: Vec<Node>,
    best: Vec<Vec<Node>>,
}

impl CliqueSearch {
    fn new<G: AdjacencyList>(graph: &G) -> Self {
        let n = graph.node_capacity();
        // removed slots keep an empty neighborhood
        let adjacency = (0..n)
            .map(|u| NodeBitSet::new_with_bits_set(n, graph.neighbors_of(u)))
            .collect();

        Self {
            order: graph.vertices().collect(),
            adjacency,
            current: Vec::new(),
            best: Vec::new(),
        }
    }

    fn best_size(&self) -> usize {
        self.best.first().map_or(0, Vec::len)
    }

    fn backtrack(&mut self, from: usize) {
        if !self.current.is_empty() {
            if self.current.len() > self.best_size() {
                self.best.clear();
                self.best.push(self.current.clone());
            } else if self.current.len() == self.best_size() {
                self.best.push(self.current.clone());
            }
        }

        // even taking every remaining vertex cannot reach the best size
        if self.current.len() + (self.order.len() - from) < self.best_size() {
            return;
        }

        for i in from..self.order.len() {
            let v = self.order[i];
            if self
                .current
                .iter()
                .all(|&u| self.adjacency[u as usize].get_bit(v))
            {
                self.current.push(v);
                self.backtrack(i + 1);
                self.current.pop();
            }
        }
    }
}

/// Returns all maximum cliques of an undirected graph.
///
/// Each clique lists its nodes in vertex order; cliques are reported in lexicographic order of
/// their positions in the vertex order. A graph without vertices has no cliques.
pub fn maximum_cliques_of<G: AdjacencyList>(graph: &G) -> Vec<Vec<Node>> {
    let mut search = CliqueSearch::new(graph);
    search.backtrack(0);
    debug!(
        size = search.best_size(),
        count = search.best.len(),
        "maximum cliques"
    );
    search.best
}

impl<L: Label> Graph<L> {
    /// Returns all vertex subsets of maximum size that are pairwise adjacent.
    /// Fails with [`GraphError::NotUndirected`] on directed graphs.
    pub fn maximum_cliques(&self) -> Result<Vec<Vec<L>>> {
        if self.is_directed() {
            return Err(GraphError::NotUndirected);
        }

        Ok(maximum_cliques_of(self)
            .into_iter()
            .map(|clique| {
                clique
                    .into_iter()
                    .map(|u| self.label_of(u).clone())
                    .collect()
            })
            .collect())
    }
}
