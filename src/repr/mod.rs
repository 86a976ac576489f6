/*!
# Graph Representation

This module defines the graph store [`Graph`], an adjacency-list representation whose
*directed* and *weighted* modes are runtime flags that can be toggled at any time.

## Design

- Every vertex label is interned into a dense [`Node`] slot in insertion order.
  Removing a vertex leaves its slot dead; slots are never reused.
- Outgoing neighborhoods are stored as `Vec<Node>` in edge-insertion order.
  Undirected edges are stored as two arcs `u -> v` and `v -> u`.
- Weights live in a separate [`WeightTable`] that exists iff the graph is weighted and holds
  exactly one entry per arc.

Neither table is ever handed out. Label-level accessors return owned copies, index-level access
goes through the traits in [`crate::ops`].
*/

use std::{
    borrow::Borrow,
    fmt::{Debug, Display},
    hash::Hash,
};

use fxhash::FxHashMap;
use itertools::Either;

use crate::{ops::*, *};

mod editing;
mod mode;
mod weights;

pub use mode::*;
pub(crate) use weights::WeightTable;

/// An adjacency-list graph over vertex labels of type `L`.
///
/// Freshly created graphs are undirected and unweighted.
///
/// # Examples
/// ```
/// use lgraphs::prelude::*;
///
/// let mut g: Graph = Graph::with_kind(GraphKind::new(false, true));
/// for v in ["1", "2", "3"] {
///     g.add_vertex(v).unwrap();
/// }
/// g.add_edge_with_weight("1", "2", 5).unwrap();
/// g.add_edge_with_weight("2", "3", 10).unwrap();
///
/// assert_eq!(g.get_weight("2", "1").unwrap(), 5);
/// assert_eq!(g.neighbours("2").unwrap(), vec!["1", "3"]);
/// assert_eq!(g.edge_count(), 2);
/// ```
#[derive(Clone)]
pub struct Graph<L: Label = String> {
    labels: Vec<Option<L>>,
    slots: FxHashMap<L, Node>,
    out_nbs: Vec<Vec<Node>>,
    weights: Option<WeightTable>,
    directed: bool,
    num_nodes: NumNodes,
    num_arcs: NumEdges,
}

impl<L: Label> Default for Graph<L> {
    fn default() -> Self {
        Self {
            labels: Vec::new(),
            slots: FxHashMap::default(),
            out_nbs: Vec::new(),
            weights: None,
            directed: false,
            num_nodes: 0,
            num_arcs: 0,
        }
    }
}

impl<L: Label> Graph<L> {
    /// Creates an empty undirected, unweighted graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with the given modes
    pub fn with_kind(kind: GraphKind) -> Self {
        Self {
            directed: kind.directed,
            weights: kind.weighted.then(WeightTable::default),
            ..Self::default()
        }
    }

    /// Returns the current modes of the graph
    pub fn kind(&self) -> GraphKind {
        GraphKind::new(self.directed, self.weights.is_some())
    }

    /// Returns the slot of a vertex label
    pub fn index_of<Q>(&self, label: &Q) -> Result<Node>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        self.slots
            .get(label)
            .copied()
            .ok_or_else(|| GraphError::unknown_vertex(label))
    }

    /// Returns the label stored in slot `u` if it is live
    pub fn try_label_of(&self, u: Node) -> Option<&L> {
        self.labels.get(u as usize).and_then(Option::as_ref)
    }

    /// Returns the label stored in slot `u`.
    /// ** Panics if `u` is not a live slot **
    pub fn label_of(&self, u: Node) -> &L {
        match self.try_label_of(u) {
            Some(label) => label,
            None => panic!("slot {u} does not hold a vertex"),
        }
    }

    /// Resolves both endpoints of an edge query
    fn endpoints<Q>(&self, u: &Q, v: &Q) -> Result<(Node, Node)>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        Ok((self.index_of(u)?, self.index_of(v)?))
    }

    /// Returns *true* if a vertex with the given label exists
    pub fn has_vertex<Q>(&self, label: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.slots.contains_key(label)
    }

    /// Returns *true* if there is an edge from `u` to `v`. Unknown labels yield *false*.
    pub fn is_edge<Q>(&self, u: &Q, v: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        self.endpoints(u, v)
            .is_ok_and(|(su, sv)| self.has_edge(su, sv))
    }

    /// Returns the number of vertices in the graph
    pub fn vertex_count(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns the number of edges in the graph.
    /// Every undirected edge is stored as two arcs but counted once.
    pub fn edge_count(&self) -> usize {
        self.number_of_edges() as usize
    }

    /// Returns an iterator over all vertex labels in insertion order
    pub fn labels(&self) -> impl Iterator<Item = &L> + '_ {
        self.labels.iter().flatten()
    }

    /// Returns a copy of all vertex labels in insertion order
    pub fn vertex_list(&self) -> Vec<L> {
        self.labels().cloned().collect()
    }

    /// Returns an iterator over all edges as `(u, v, weight)`.
    /// Undirected edges are reported once; `weight` is `None` for unweighted graphs.
    pub fn labelled_edges(&self) -> impl Iterator<Item = (&L, &L, Option<Weight>)> + '_ {
        self.edges(self.is_undirected()).map(|Edge(u, v)| {
            (self.label_of(u), self.label_of(v), self.weight_of(u, v))
        })
    }

    /// Returns a copy of the outgoing neighbors of a vertex in edge-insertion order
    pub fn neighbours<Q>(&self, label: &Q) -> Result<Vec<L>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let u = self.index_of(label)?;
        Ok(self.neighbors_of(u).map(|v| self.label_of(v).clone()).collect())
    }

    /// Returns a copy of the inbound neighbors of a vertex.
    /// For undirected graphs, this is equivalent to [`Graph::neighbours`].
    pub fn inbound_neighbours<Q>(&self, label: &Q) -> Result<Vec<L>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let u = self.index_of(label)?;
        Ok(self
            .in_neighbors_of(u)
            .map(|v| self.label_of(v).clone())
            .collect())
    }
}

impl<L: Label> GraphNodeOrder for Graph<L> {
    fn number_of_nodes(&self) -> NumNodes {
        self.num_nodes
    }

    fn node_capacity(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.labels
            .iter()
            .enumerate()
            .filter_map(|(u, label)| label.is_some().then_some(u as Node))
    }
}

impl<L: Label> GraphEdgeOrder for Graph<L> {
    fn number_of_edges(&self) -> NumEdges {
        if self.directed {
            self.num_arcs
        } else {
            debug_assert_eq!(self.num_arcs % 2, 0);
            self.num_arcs / 2
        }
    }
}

impl<L: Label> GraphType for Graph<L> {
    fn is_directed(&self) -> bool {
        self.directed
    }

    fn is_weighted(&self) -> bool {
        self.weights.is_some()
    }
}

impl<L: Label> AdjacencyList for Graph<L> {
    fn neighbors_of(&self, u: Node) -> impl DoubleEndedIterator<Item = Node> + '_ {
        self.out_nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.out_nbs[u as usize].len() as NumNodes
    }
}

impl<L: Label> DirectedAdjacencyList for Graph<L> {
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        if self.directed {
            // Scans every neighborhood
            Either::Left(
                self.vertices()
                    .filter(move |&w| self.out_nbs[w as usize].contains(&u)),
            )
        } else {
            Either::Right(self.neighbors_of(u))
        }
    }

    fn in_degree_of(&self, u: Node) -> NumNodes {
        if self.directed {
            self.in_neighbors_of(u).count() as NumNodes
        } else {
            self.degree_of(u)
        }
    }
}

impl<L: Label> AdjacencyTest for Graph<L> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.out_nbs[u as usize].contains(&v)
    }
}

impl<L: Label> WeightedAdjacencyList for Graph<L> {
    fn weight_of(&self, u: Node, v: Node) -> Option<Weight> {
        self.weights.as_ref()?.get(u, v)
    }
}

impl<L: Label> Debug for Graph<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("kind", &self.kind())
            .field("vertices", &self.vertex_list())
            .field("edges", &self.labelled_edges().collect::<Vec<_>>())
            .finish()
    }
}

impl<L: Label> Display for Graph<L> {
    /// Renders the mode line, one `u -> v` line per edge (with ` (w)` for weighted graphs)
    /// and finally every vertex without outgoing edges on a line of its own.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())?;

        for (u, v, weight) in self.labelled_edges() {
            match weight {
                Some(w) => write!(f, "\n{u} -> {v} ({w})")?,
                None => write!(f, "\n{u} -> {v}")?,
            }
        }

        for u in self.vertices().filter(|&u| self.degree_of(u) == 0) {
            write!(f, "\n{}", self.label_of(u))?;
        }

        Ok(())
    }
}
