/*!
# Index-level Graph Operations

Algorithms in [`crate::algo`] are written against the traits in this module rather than against
[`Graph`](crate::repr::Graph) directly. They operate on dense [`Node`] slots; translation from and to
vertex labels happens at the public boundary of each algorithm.
*/

use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of (live) vertices of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of slots ever allocated, i.e. an exclusive upper bound on every live [`Node`]
    fn node_capacity(&self) -> NumNodes;

    /// Returns an iterator over all live vertices in insertion order.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_;

    /// Return the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns empty bitset with one entry per slot
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.node_capacity())
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_nodes() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges of the graph. Undirected edges are counted once.
    fn number_of_edges(&self) -> NumEdges;
}

/// Runtime mode flags of a graph
pub trait GraphType {
    /// Returns *true* if edges have an orientation
    fn is_directed(&self) -> bool;

    /// Returns *true* if every edge carries a weight
    fn is_weighted(&self) -> bool;

    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the (outgoing) neighborhood of a given vertex in insertion order.
    /// ** Panics if `u` is not a valid slot **
    fn neighbors_of(&self, u: Node) -> impl DoubleEndedIterator<Item = Node> + '_;

    /// Returns the number of (outgoing) neighbors of `u`
    /// ** Panics if `u` is not a valid slot **
    fn degree_of(&self, u: Node) -> NumNodes {
        self.neighbors_of(u).count() as NumNodes
    }

    /// Returns an iterator to all vertices with non-zero degree
    fn vertices_with_neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| self.degree_of(u) > 0)
    }

    /// Returns an iterator over outgoing edges of a given vertex.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    /// ** Panics if `u` is not a valid slot **
    fn edges_of(&self, u: Node, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.neighbors_of(u)
            .map(move |v| Edge(u, v))
            .filter(move |e| !only_normalized || e.is_normalized())
    }

    /// Returns an iterator over all edges in the graph, vertex by vertex in insertion order.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices()
            .flat_map(move |u| self.edges_of(u, only_normalized))
    }

    /// Returns an iterator over all edges in the graph in sorted order.
    fn ordered_edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.edges(only_normalized).sorted()
    }
}

/// Access to inbound neighborhoods.
///
/// For undirected graphs, inbound and outbound neighborhoods coincide.
pub trait DirectedAdjacencyList: AdjacencyList {
    /// Returns an iterator over nodes `v` with edges `(v, u)`
    /// ** Panics if `u` is not a valid slot **
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of incoming neighbors of a given vertex
    /// ** Panics if `u` is not a valid slot **
    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.in_neighbors_of(u).count() as NumNodes
    }

    /// Returns the in-degree of every slot at once in `O(n + m)`.
    /// Dead slots have in-degree `0`.
    fn in_degrees(&self) -> Vec<NumNodes> {
        let mut in_degs = vec![0; self.node_capacity() as usize];
        for Edge(_, v) in self.edges(false) {
            in_degs[v as usize] += 1;
        }
        in_degs
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u` is not a valid slot **
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Access to edge weights
pub trait WeightedAdjacencyList: AdjacencyList + GraphType {
    /// Returns the weight of the edge `(u, v)` or `None` if the graph is unweighted or the edge is absent
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight>;

    /// Returns the outgoing neighbors of `u` together with the weight of the connecting edge.
    /// Unweighted graphs report weight `0` for every edge.
    /// ** Panics if `u` is not a valid slot **
    fn weighted_neighbors_of(&self, u: Node) -> impl Iterator<Item = (Node, Weight)> + '_ {
        self.neighbors_of(u)
            .map(move |v| (v, self.weight_of(u, v).unwrap_or(0)))
    }
}
