/*!
# Connectivity

Decides whether a graph consists of a single component by running a [`BFS`] from an arbitrary
vertex and comparing the number of reached vertices against the number of vertices.

Directed graphs are checked on their *underlying undirected* structure (weak connectivity), so
the answer never depends on which start vertex the [`ChoiceStrategy`] picks.
*/

use itertools::Itertools;
use tracing::debug;

use super::*;

/// Read-only view of a directed graph in which every arc is traversable in both directions
struct UnderlyingUndirected<'a, G> {
    graph: &'a G,
    in_nbs: Vec<Vec<Node>>,
}

impl<'a, G: AdjacencyList> UnderlyingUndirected<'a, G> {
    fn new(graph: &'a G) -> Self {
        let mut in_nbs = vec![Vec::new(); graph.node_capacity() as usize];
        for Edge(u, v) in graph.edges(false) {
            in_nbs[v as usize].push(u);
        }
        Self { graph, in_nbs }
    }
}

impl<G: AdjacencyList> GraphNodeOrder for UnderlyingUndirected<'_, G> {
    fn number_of_nodes(&self) -> NumNodes {
        self.graph.number_of_nodes()
    }

    fn node_capacity(&self) -> NumNodes {
        self.graph.node_capacity()
    }

    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        self.graph.vertices()
    }
}

impl<G: AdjacencyList> AdjacencyList for UnderlyingUndirected<'_, G> {
    fn neighbors_of(&self, u: Node) -> impl DoubleEndedIterator<Item = Node> + '_ {
        self.graph
            .neighbors_of(u)
            .chain(self.in_nbs[u as usize].iter().copied())
    }
}

/// Configurable connectivity check.
///
/// # Examples
/// ```
/// use lgraphs::{prelude::*, algo::*, utils::FirstChoice};
///
/// let mut g: Graph = Graph::new();
/// for v in ["a", "b", "c"] {
///     g.add_vertex(v).unwrap();
/// }
/// g.add_edge("a", "b").unwrap();
///
/// let mut check = ConnectivityCheck::new().strategy(FirstChoice);
/// assert!(!check.run(&g).unwrap());
///
/// g.add_edge("c", "b").unwrap();
/// assert!(check.run(&g).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConnectivityCheck<C = RandomChoice> {
    strategy: C,
}

impl ConnectivityCheck<RandomChoice> {
    /// Creates a check that picks its start vertex uniformly at random
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: ChoiceStrategy> ConnectivityCheck<C> {
    /// Replaces the strategy used to pick the start vertex
    pub fn strategy<D: ChoiceStrategy>(self, strategy: D) -> ConnectivityCheck<D> {
        ConnectivityCheck { strategy }
    }

    /// Returns *true* if every vertex is reachable from an arbitrary start vertex.
    /// Fails with [`GraphError::EmptyGraph`] if the graph has no vertices.
    pub fn run<G>(&mut self, graph: &G) -> Result<bool>
    where
        G: AdjacencyList + GraphType,
    {
        if graph.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let vertices = graph.vertices().collect_vec();
        let start = vertices[self.strategy.choose(vertices.len())];

        let reached = if graph.is_directed() {
            UnderlyingUndirected::new(graph).bfs(start).count()
        } else {
            graph.bfs(start).count()
        };

        debug!(start, reached, total = vertices.len(), "connectivity check");
        Ok(reached == vertices.len())
    }
}

pub trait Connectivity: AdjacencyList + GraphType + Sized {
    /// Returns *true* if the graph consists of a single (weakly) connected component.
    /// Fails with [`GraphError::EmptyGraph`] if the graph has no vertices.
    fn is_connected(&self) -> Result<bool> {
        ConnectivityCheck::new().run(self)
    }
}

impl<G> Connectivity for G where G: AdjacencyList + GraphType + Sized {}
