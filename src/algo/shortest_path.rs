/*!
# Shortest Paths

Dijkstra's algorithm with a binary min-heap and lazy deletion: instead of decreasing keys in place,
an improved vertex is pushed again and outdated (*stale*) entries are discarded when popped.
The goal-aware variant (uniform cost search) stops as soon as the goal is popped as a non-stale entry.

Every run records [`SearchCounters`] (edge relaxations, heap pushes including the seed, heap pops)
for external reporting. Edge weights are assumed to be non-negative; negative weights are
relaxed anyway (with a warning) and may yield wrong distances. Every node is settled at most once,
so the search terminates regardless.
*/

use std::{borrow::Borrow, cmp::Reverse, collections::BinaryHeap, fmt::Display, hash::Hash};

use fxhash::FxHashMap;
use tracing::{debug, warn};

use super::*;

/// Operation counters of a single search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchCounters {
    /// Number of edges inspected for relaxation
    pub relaxations: u64,
    /// Number of heap insertions (including the seed entry)
    pub pushes: u64,
    /// Number of heap removals (including stale entries)
    pub pops: u64,
}

/// Index-level result of a shortest-path search
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: Node,
    distances: Vec<Option<Weight>>,
    predecessors: Vec<Option<Node>>,
    counters: SearchCounters,
}

impl ShortestPathTree {
    pub fn source(&self) -> Node {
        self.source
    }

    /// Returns the best known distance to `u` or `None` if it was never reached
    pub fn distance(&self, u: Node) -> Option<Weight> {
        self.distances.get(u as usize).copied().flatten()
    }

    /// Returns the node preceding `u` on its shortest path
    pub fn predecessor(&self, u: Node) -> Option<Node> {
        self.predecessors.get(u as usize).copied().flatten()
    }

    pub fn counters(&self) -> SearchCounters {
        self.counters
    }

    /// Follows the predecessors backwards from `target`.
    /// Returns the walk from the source to `target`, or an empty walk if it does not end at the source.
    pub fn walk_to(&self, target: Node) -> Vec<Node> {
        let mut walk = vec![target];
        let mut u = target;
        while let Some(p) = self.predecessor(u) {
            walk.push(p);
            u = p;
        }

        if u != self.source {
            return Vec::new();
        }
        walk.reverse();
        walk
    }
}

/// Configurable Dijkstra / uniform cost search.
///
/// # Examples
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// let mut g: Graph<Node> = Graph::with_kind(GraphKind::new(true, true));
/// for u in 0..3 as Node {
///     g.add_vertex(u).unwrap();
/// }
/// g.add_edge_with_weight(&0, &1, 4).unwrap();
/// g.add_edge_with_weight(&0, &2, 1).unwrap();
/// g.add_edge_with_weight(&2, &1, 2).unwrap();
///
/// let tree = ShortestPathSearch::new().run(&g, 0);
/// assert_eq!(tree.distance(1), Some(3));
/// assert_eq!(tree.walk_to(1), vec![0, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestPathSearch {
    goal: Option<Node>,
}

impl ShortestPathSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stops the search once `goal` is settled
    pub fn goal(mut self, goal: Node) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Runs the search from `source`. Unweighted graphs are searched with weight `0` on every edge.
    /// ** Panics if `source` is not a valid slot **
    pub fn run<G: WeightedAdjacencyList>(&self, graph: &G, source: Node) -> ShortestPathTree {
        let n = graph.node_capacity() as usize;
        let mut distances = vec![None; n];
        let mut predecessors = vec![None; n];
        let mut settled = graph.vertex_bitset_unset();
        let mut counters = SearchCounters::default();
        let mut warned = false;

        distances[source as usize] = Some(0);
        let mut heap: BinaryHeap<Reverse<(Weight, Node)>> = BinaryHeap::new();
        heap.push(Reverse((0, source)));
        counters.pushes += 1;

        while let Some(Reverse((dist, u))) = heap.pop() {
            counters.pops += 1;

            // stale entry, or settled before through a negative weight
            if distances[u as usize].is_some_and(|best| dist > best) || settled.set_bit(u) {
                continue;
            }
            if self.goal == Some(u) {
                break;
            }

            for (v, weight) in graph.weighted_neighbors_of(u) {
                counters.relaxations += 1;
                if weight < 0 && !warned {
                    warn!(from = u, to = v, weight, "negative edge weight, distances may be wrong");
                    warned = true;
                }

                // a distance beyond the range of `Weight` is never an improvement
                let Some(candidate) = dist.checked_add(weight) else {
                    continue;
                };
                if !settled.get_bit(v)
                    && distances[v as usize].is_none_or(|best| candidate < best)
                {
                    distances[v as usize] = Some(candidate);
                    predecessors[v as usize] = Some(u);
                    heap.push(Reverse((candidate, v)));
                    counters.pushes += 1;
                }
            }
        }

        debug!(
            source,
            relaxations = counters.relaxations,
            pushes = counters.pushes,
            pops = counters.pops,
            "shortest path search"
        );

        ShortestPathTree {
            source,
            distances,
            predecessors,
            counters,
        }
    }
}

/// Label-level view on a [`ShortestPathTree`]
#[derive(Debug, Clone)]
pub struct ShortestPaths<'a, L: Label> {
    graph: &'a Graph<L>,
    tree: ShortestPathTree,
}

impl<'a, L: Label> ShortestPaths<'a, L> {
    pub fn source(&self) -> &'a L {
        self.graph.label_of(self.tree.source)
    }

    pub fn counters(&self) -> SearchCounters {
        self.tree.counters
    }

    /// Returns the underlying index-level result
    pub fn tree(&self) -> &ShortestPathTree {
        &self.tree
    }

    /// Returns the distance from the source to `target`; `None` if it is unreachable
    pub fn distance_to<Q>(&self, target: &Q) -> Result<Option<Weight>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        Ok(self.tree.distance(self.graph.index_of(target)?))
    }

    /// Returns the vertex preceding `target` on its shortest path
    pub fn predecessor_of<Q>(&self, target: &Q) -> Result<Option<&'a L>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        Ok(self
            .tree
            .predecessor(self.graph.index_of(target)?)
            .map(|p| self.graph.label_of(p)))
    }

    /// Returns the distance of every vertex; `None` marks unreachable vertices
    pub fn distance_map(&self) -> FxHashMap<&'a L, Option<Weight>> {
        self.graph
            .vertices()
            .map(|u| (self.graph.label_of(u), self.tree.distance(u)))
            .collect()
    }

    /// Returns the predecessor of every vertex; `None` for the source and unreached vertices
    pub fn predecessor_map(&self) -> FxHashMap<&'a L, Option<&'a L>> {
        self.graph
            .vertices()
            .map(|u| {
                (
                    self.graph.label_of(u),
                    self.tree.predecessor(u).map(|p| self.graph.label_of(p)),
                )
            })
            .collect()
    }

    /// Returns the walk from the source to `target`, or an empty walk if `target` is unreachable
    pub fn get_walk<Q>(&self, target: &Q) -> Result<Vec<L>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        Ok(self
            .tree
            .walk_to(self.graph.index_of(target)?)
            .into_iter()
            .map(|u| self.graph.label_of(u).clone())
            .collect())
    }
}

impl<L: Label> Graph<L> {
    fn shortest_paths<Q>(
        &self,
        source: &Q,
        search: ShortestPathSearch,
    ) -> Result<ShortestPaths<'_, L>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        if !self.is_weighted() {
            return Err(GraphError::NotWeighted);
        }
        let source = self.index_of(source)?;
        Ok(ShortestPaths {
            graph: self,
            tree: search.run(self, source),
        })
    }

    /// Computes shortest distances from `source` to every vertex.
    ///
    /// Fails with [`GraphError::NotWeighted`] or [`GraphError::UnknownVertex`].
    pub fn dijkstra<Q>(&self, source: &Q) -> Result<ShortestPaths<'_, L>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        self.shortest_paths(source, ShortestPathSearch::new())
    }

    /// Like [`Graph::dijkstra`], but stops as soon as the shortest distance to `goal` is known.
    /// Distances of vertices not settled by then are upper bounds.
    pub fn uniform_cost_search<Q>(&self, source: &Q, goal: &Q) -> Result<ShortestPaths<'_, L>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let goal = self.index_of(goal)?;
        self.shortest_paths(source, ShortestPathSearch::new().goal(goal))
    }
}
