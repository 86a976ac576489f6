/*!
# Minimum Spanning Trees

Kruskal's algorithm: all undirected edges are sorted ascending by weight (stable, so ties keep
their enumeration order) and added greedily whenever they join two different components of a
[`UnionFind`] forest.
*/

use itertools::Itertools;
use tracing::{debug, trace};

use super::*;

/// Computes the edges of a minimum spanning forest of an undirected, weighted graph.
///
/// Edges are enumerated once each as `(u, v)` with `u < v`, vertex by vertex in insertion order
/// and then in adjacency order. Stops as soon as `n - 1` edges have been selected.
pub fn kruskal<G>(graph: &G) -> Vec<WeightedEdge>
where
    G: WeightedAdjacencyList,
{
    let mut edges = graph
        .edges(true)
        .map(|Edge(u, v)| WeightedEdge::new(u, v, graph.weight_of(u, v).unwrap_or(0)))
        .collect_vec();
    edges.sort_by_key(|e| e.weight);

    let target = graph.number_of_nodes().saturating_sub(1) as usize;
    let mut forest = UnionFind::new(graph.node_capacity());
    let mut tree = Vec::with_capacity(target);

    for e in edges {
        if tree.len() == target {
            break;
        }
        if forest.union(e.edge.0, e.edge.1) {
            trace!(edge = %e.edge, weight = e.weight, "accept");
            tree.push(e);
        }
    }

    tree
}

pub trait MinimumSpanningTree: Sized {
    /// Returns a new undirected, weighted graph containing all vertices and the edges of a
    /// minimum spanning tree.
    ///
    /// Fails with [`GraphError::NotUndirected`], [`GraphError::NotWeighted`] and
    /// [`GraphError::NotConnected`] (checked in this order), and with [`GraphError::EmptyGraph`]
    /// if there are no vertices.
    fn minimum_spanning_tree(&self) -> Result<Self>;
}

impl<L: Label> MinimumSpanningTree for Graph<L> {
    fn minimum_spanning_tree(&self) -> Result<Self> {
        if self.is_directed() {
            return Err(GraphError::NotUndirected);
        }
        if !self.is_weighted() {
            return Err(GraphError::NotWeighted);
        }
        if !self.is_connected()? {
            return Err(GraphError::NotConnected);
        }

        let mut tree = Graph::with_kind(GraphKind::new(false, true));
        for label in self.labels() {
            tree.add_vertex(label.clone())?;
        }

        let mut total: Weight = 0;
        for WeightedEdge {
            edge: Edge(u, v),
            weight,
        } in kruskal(self)
        {
            tree.add_edge_with_weight(self.label_of(u), self.label_of(v), weight)?;
            total = total.saturating_add(weight);
        }

        debug!(
            edges = tree.edge_count(),
            total_weight = total,
            "minimum spanning tree"
        );
        Ok(tree)
    }
}
