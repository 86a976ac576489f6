/*!
# Eulerian Circuits

A graph is *Eulerian* if it is connected and
- (directed) every vertex has equal in- and out-degree, or
- (undirected) every vertex has even degree.

Circuits are built with Hierholzer's algorithm: a stack walks along unused edges and every
vertex without remaining unused edges is popped into the (reversed) circuit.
Infeasibility is a regular outcome and yields an empty circuit.
*/

use fxhash::FxHashMap;
use tracing::debug;

use super::*;

pub trait Eulerian: DirectedAdjacencyList + GraphType + Sized {
    /// Returns *true* if the graph admits an Eulerian circuit.
    /// Graphs without vertices are not Eulerian.
    fn is_eulerian(&self) -> bool {
        match self.is_connected() {
            Ok(true) => {}
            _ => {
                debug!("not eulerian: empty or disconnected");
                return false;
            }
        }

        let balanced = if self.is_directed() {
            let in_degs = self.in_degrees();
            self.vertices()
                .find(|&u| self.degree_of(u) != in_degs[u as usize])
        } else {
            self.vertices().find(|&u| self.degree_of(u) % 2 != 0)
        };

        match balanced {
            Some(u) => {
                debug!(vertex = u, "not eulerian: unbalanced degree");
                false
            }
            None => true,
        }
    }
}

impl<G> Eulerian for G where G: DirectedAdjacencyList + GraphType + Sized {}

/// Unused arcs per tail node. Arcs are numbered in adjacency order; `pos` tracks where each arc
/// currently sits in its tail's list so that any arc can be dropped in constant time.
struct UnusedArcs {
    heads: Vec<Node>,
    twins: Vec<usize>,
    pos: Vec<usize>,
    lists: Vec<Vec<usize>>,
}

impl UnusedArcs {
    fn new<G: AdjacencyList + GraphType>(graph: &G) -> Self {
        let mut heads = Vec::new();
        let mut pos = Vec::new();
        let mut lists = vec![Vec::new(); graph.node_capacity() as usize];
        let mut twins = Vec::new();
        let mut open_twins: FxHashMap<Edge, usize> = FxHashMap::default();

        for u in graph.vertices() {
            for v in graph.neighbors_of(u) {
                let arc = heads.len();
                heads.push(v);
                pos.push(lists[u as usize].len());
                lists[u as usize].push(arc);
                twins.push(arc);

                if graph.is_undirected() {
                    match open_twins.remove(&Edge(v, u)) {
                        Some(twin) => {
                            twins[arc] = twin;
                            twins[twin] = arc;
                        }
                        None => {
                            open_twins.insert(Edge(u, v), arc);
                        }
                    }
                }
            }
        }
        debug_assert!(open_twins.is_empty());

        Self {
            heads,
            twins,
            pos,
            lists,
        }
    }

    fn remove(&mut self, u: Node, idx: usize) -> usize {
        let list = &mut self.lists[u as usize];
        let arc = list.swap_remove(idx);
        if let Some(&moved) = list.get(idx) {
            self.pos[moved] = idx;
        }
        arc
    }
}

/// Runs Hierholzer's algorithm from `start` and returns the visited nodes in circuit order.
///
/// Every arc is consumed exactly once; for undirected graphs the reverse arc is consumed along
/// with it. Which unused arc leaves the current node is decided by `strategy`.
/// The result is only a closed walk over all edges if the graph is Eulerian.
pub fn hierholzer<G, C>(graph: &G, start: Node, strategy: &mut C) -> Vec<Node>
where
    G: AdjacencyList + GraphType,
    C: ChoiceStrategy,
{
    let mut unused = UnusedArcs::new(graph);
    let mut stack = vec![start];
    let mut circuit = Vec::new();

    while let Some(&u) = stack.last() {
        let remaining = unused.lists[u as usize].len();
        if remaining == 0 {
            circuit.push(u);
            stack.pop();
            continue;
        }

        let arc = unused.remove(u, strategy.choose(remaining));
        let v = unused.heads[arc];
        let twin = unused.twins[arc];
        if twin != arc {
            unused.remove(v, unused.pos[twin]);
        }
        stack.push(v);
    }

    circuit.reverse();
    circuit
}

/// Configurable Eulerian circuit builder.
///
/// # Examples
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// let mut g: Graph = Graph::new();
/// for v in ["1", "2", "3"] {
///     g.add_vertex(v).unwrap();
/// }
/// g.add_edge("1", "2").unwrap();
/// g.add_edge("2", "3").unwrap();
///
/// // a path is not Eulerian
/// assert!(EulerianCircuit::new().build(&g).unwrap().is_empty());
///
/// g.add_edge("3", "1").unwrap();
/// let circuit = EulerianCircuit::new().start("2").build(&g).unwrap();
/// assert_eq!(circuit.len(), 4);
/// assert_eq!(circuit.first(), Some(&"2".to_string()));
/// assert_eq!(circuit.last(), Some(&"2".to_string()));
/// ```
#[derive(Debug, Clone)]
pub struct EulerianCircuit<L, C = RandomChoice> {
    start: Option<L>,
    strategy: C,
}

impl<L: Label> EulerianCircuit<L, RandomChoice> {
    /// Creates a builder that starts at the first vertex with outgoing edges and picks
    /// unused edges uniformly at random
    pub fn new() -> Self {
        Self {
            start: None,
            strategy: RandomChoice::new(),
        }
    }
}

impl<L: Label> Default for EulerianCircuit<L, RandomChoice> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label, C: ChoiceStrategy> EulerianCircuit<L, C> {
    /// Sets the vertex at which the circuit starts and ends
    pub fn start(mut self, label: impl Into<L>) -> Self {
        self.start = Some(label.into());
        self
    }

    /// Replaces the strategy used to pick the next unused edge
    pub fn strategy<D: ChoiceStrategy>(self, strategy: D) -> EulerianCircuit<L, D> {
        EulerianCircuit {
            start: self.start,
            strategy,
        }
    }

    /// Returns a closed walk using every edge exactly once, or an empty sequence if the graph is
    /// not Eulerian. Fails with [`GraphError::UnknownVertex`] if the configured start is absent.
    pub fn build(&mut self, graph: &Graph<L>) -> Result<Vec<L>> {
        let start = match &self.start {
            Some(label) => Some(graph.index_of(label)?),
            None => None,
        };

        if !graph.is_eulerian() {
            return Ok(Vec::new());
        }

        let Some(start) = start
            .or_else(|| graph.vertices_with_neighbors().next())
            .or_else(|| graph.vertices().next())
        else {
            return Ok(Vec::new());
        };

        let circuit = hierholzer(graph, start, &mut self.strategy);
        debug_assert_eq!(circuit.len(), graph.edge_count() + 1);

        Ok(circuit
            .into_iter()
            .map(|u| graph.label_of(u).clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{
        gens::*,
        testing::assert_eulerian_circuit,
        utils::{FirstChoice, LastChoice},
    };

    fn graph_from(kind: GraphKind, edges: &[(&str, &str)]) -> Graph {
        let mut g = Graph::with_kind(kind);
        for &(u, v) in edges {
            g.ensure_vertex(u);
            g.ensure_vertex(v);
            g.add_edge(u, v).unwrap();
        }
        g
    }

    #[test]
    fn bowtie() {
        // two triangles sharing vertex 6
        let g = graph_from(
            GraphKind::new(false, false),
            &[
                ("1", "2"),
                ("2", "6"),
                ("6", "1"),
                ("6", "3"),
                ("3", "4"),
                ("4", "6"),
            ],
        );
        assert!(g.is_eulerian());

        let circuit = EulerianCircuit::new().start("6").build(&g).unwrap();
        assert_eq!(circuit.first().map(String::as_str), Some("6"));
        assert_eulerian_circuit(&g, &circuit);

        let circuit = EulerianCircuit::new()
            .strategy(FirstChoice)
            .build(&g)
            .unwrap();
        assert_eq!(circuit.first().map(String::as_str), Some("1"));
        assert_eulerian_circuit(&g, &circuit);
    }

    #[test]
    fn directed_cycles() {
        let mut g = graph_from(
            GraphKind::new(true, false),
            &[("a", "b"), ("b", "c"), ("c", "a"), ("c", "d"), ("d", "c")],
        );
        assert!(g.is_eulerian());
        for strategy in [0, 1] {
            let circuit = if strategy == 0 {
                EulerianCircuit::new().strategy(FirstChoice).build(&g)
            } else {
                EulerianCircuit::new().strategy(LastChoice).build(&g)
            }
            .unwrap();
            assert_eq!(circuit.len(), 6);
            assert_eulerian_circuit(&g, &circuit);
        }

        g.remove_edge("d", "c").unwrap();
        assert!(!g.is_eulerian());
        assert!(EulerianCircuit::new().build(&g).unwrap().is_empty());
    }

    #[test]
    fn infeasible_and_invalid() {
        let path = graph_from(GraphKind::new(false, true), &[("1", "2"), ("2", "3")]);
        assert!(!path.is_eulerian());
        assert!(EulerianCircuit::new().start("1").build(&path).unwrap().is_empty());
        assert!(matches!(
            EulerianCircuit::new().start("9").build(&path),
            Err(GraphError::UnknownVertex(_))
        ));

        // two disjoint triangles have even degrees, but are disconnected
        let mut g = graph_from(
            GraphKind::new(false, false),
            &[("1", "2"), ("2", "3"), ("3", "1")],
        );
        assert!(g.is_eulerian());
        for (u, v) in [("4", "5"), ("5", "6"), ("6", "4")] {
            g.ensure_vertex(u);
            g.ensure_vertex(v);
            g.add_edge(u, v).unwrap();
        }
        assert!(!g.is_eulerian());

        let empty: Graph = Graph::new();
        assert!(!empty.is_eulerian());
        assert!(EulerianCircuit::new().build(&empty).unwrap().is_empty());

        let mut single: Graph = Graph::new();
        single.add_vertex("x").unwrap();
        assert_eq!(EulerianCircuit::new().build(&single).unwrap(), vec!["x"]);
    }

    #[test]
    fn high_degree_hub() {
        // 60 triangles sharing vertex 0, so the hub has degree 120
        let mut g: Graph<Node> = Graph::new();
        g.add_vertex(0 as Node).unwrap();
        for i in 0..60 as Node {
            g.connect_cycle([0, 2 * i + 1, 2 * i + 2]).unwrap();
        }
        assert!(g.is_eulerian());

        let circuit = EulerianCircuit::new()
            .start(0 as Node)
            .strategy(FirstChoice)
            .build(&g)
            .unwrap();
        assert_eq!(circuit.iter().filter(|&&u| u == 0).count(), 61);
        assert_eulerian_circuit(&g, &circuit);

        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let circuit = EulerianCircuit::new()
            .start(7 as Node)
            .strategy(RandomChoice::from_rng(&mut *rng))
            .build(&g)
            .unwrap();
        assert_eulerian_circuit(&g, &circuit);
    }

    #[test]
    fn random_strategies_on_cliques() {
        let rng = &mut Pcg64Mcg::seed_from_u64(8);
        for n in [3 as Node, 5, 7, 9] {
            let mut g: Graph<Node> = Graph::new();
            for u in 0..n {
                g.add_vertex(u).unwrap();
            }
            g.connect_clique(0..n).unwrap();
            assert!(g.is_eulerian());

            for _ in 0..10 {
                let circuit = EulerianCircuit::new()
                    .start(n - 1)
                    .strategy(RandomChoice::from_rng(&mut *rng))
                    .build(&g)
                    .unwrap();
                assert_eq!(circuit.first(), Some(&(n - 1)));
                assert_eulerian_circuit(&g, &circuit);
            }
        }
    }
}
