/*!
Graph traversal algorithms and traversal-derived utilities.

This module provides:
- A generic traversal iterator [`TraversalSearch`] whose frontier type decides between
  breadth-first ([`BFS`]) and depth-first ([`DFS`]) order.
- The [`TraversalTree`] extension that turns a traversal into a parent array or the leaves of
  the implied traversal tree.
- A [`Labelled`] adaptor and the high-level [`Traversal`] trait that expose traversals directly on a
  [`Graph`] in terms of vertex labels.

All iterators are lazy and single-use: a new iterator must be constructed to traverse again.
They borrow the graph for their whole lifetime, so the store cannot be mutated mid-traversal.
*/

use std::{borrow::Borrow, collections::VecDeque, fmt::Display, hash::Hash};

use super::*;

/// A single step of a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit {
    /// The visited vertex
    pub node: Node,
    /// Distance (BFS) or depth (DFS) from the start vertex
    pub level: Level,
    /// The vertex from which `node` was discovered; `None` for the start vertex
    pub predecessor: Option<Node>,
}

impl Visit {
    fn root(node: Node) -> Self {
        Self {
            node,
            level: 0,
            predecessor: None,
        }
    }

    fn child(&self, node: Node) -> Self {
        Self {
            node,
            level: self.level + 1,
            predecessor: Some(self.node),
        }
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// A `NodeSequencer` is responsible for storing the "to be visited"
/// nodes during a traversal. Different implementations determine
/// the traversal order:
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer<T> {
    /// If *true*, nodes are marked visited when pushed and thus pushed at most once.
    /// Otherwise they are marked when popped and may be pushed several times.
    const MARKS_ON_PUSH: bool;

    /// Creates a new sequencer initialized with a single node.
    fn init(u: T) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Drops all remaining nodes
    fn clear(&mut self);
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    const MARKS_ON_PUSH: bool = true;

    fn init(u: T) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn clear(&mut self) {
        VecDeque::clear(self)
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    const MARKS_ON_PUSH: bool = false;

    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn clear(&mut self) {
        Vec::clear(self)
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Maintains an explicit "frontier" (queue or stack) of nodes to visit and
/// a set of visited nodes. Every reachable node is yielded exactly once, in both variants
/// neighbors are discovered in adjacency-list order.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer<Visit>,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
    stop_at: Option<Node>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node. Levels are distances.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Visit>>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node. Levels are depths in the DFS tree.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Visit>>;

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer<Visit>,
{
    type Item = Visit;

    fn next(&mut self) -> Option<Self::Item> {
        let visit = loop {
            let visit = self.sequencer.pop()?;
            // `set_bit` returns the previous state
            if S::MARKS_ON_PUSH || !self.visited.set_bit(visit.node) {
                break visit;
            }
        };
        let u = visit.node;

        if self.stop_at == Some(u) {
            self.sequencer.clear();
        } else if S::MARKS_ON_PUSH {
            for v in self.graph.neighbors_of(u) {
                if !self.visited.set_bit(v) {
                    self.sequencer.push(visit.child(v));
                }
            }
        } else {
            // reversed, so that the first neighbor is popped first
            for v in self.graph.neighbors_of(u).rev() {
                if !self.visited.get_bit(v) {
                    self.sequencer.push(visit.child(v));
                }
            }
        }

        Some(visit)
    }
}

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer<Visit>,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start` is not a valid slot **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(start < graph.node_capacity());
        let mut visited = graph.vertex_bitset_unset();
        if S::MARKS_ON_PUSH {
            visited.set_bit(start);
        }
        Self {
            graph,
            visited,
            sequencer: S::init(Visit::root(start)),
            stop_at: None,
        }
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: Node) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper node. If this node is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Node) -> Self {
        self.set_stop_at(stopper);
        self
    }
}

/// Extension trait for traversal iterators, enabling extraction of the implied
/// traversal tree.
pub trait TraversalTree<'a, G>: Iterator<Item = Visit> + Sized
where
    G: 'a + AdjacencyList,
{
    fn tree_graph(&self) -> &'a G;

    /// Consumes the iterator and returns an array with one entry per slot where every visited
    /// node points to its predecessor. The root and all unvisited slots point to themselves.
    fn parent_array(self) -> Vec<Node> {
        let mut tree: Vec<Node> = (0..self.tree_graph().node_capacity()).collect();
        for visit in self {
            if let Some(p) = visit.predecessor {
                tree[visit.node as usize] = p;
            }
        }
        tree
    }

    /// Consumes the iterator and returns all visited nodes without children in the traversal
    /// tree, in visitation order.
    fn tree_leaves(self) -> Vec<Node> {
        let mut has_child = self.tree_graph().vertex_bitset_unset();
        let mut order = Vec::new();
        for visit in self {
            if let Some(p) = visit.predecessor {
                has_child.set_bit(p);
            }
            order.push(visit.node);
        }
        order.retain(|&u| !has_child.get_bit(u));
        order
    }
}

impl<'a, G, S> TraversalTree<'a, G> for TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer<Visit>,
{
    fn tree_graph(&self) -> &'a G {
        self.graph
    }
}

/// Adaptor translating a traversal over slots into `(label, level)` pairs.
pub struct Labelled<'a, L: Label, I> {
    graph: &'a Graph<L>,
    inner: I,
}

impl<'a, L, I> Iterator for Labelled<'a, L, I>
where
    L: Label,
    I: Iterator<Item = Visit>,
{
    type Item = (&'a L, Level);

    fn next(&mut self) -> Option<Self::Item> {
        let visit = self.inner.next()?;
        Some((self.graph.label_of(visit.node), visit.level))
    }
}

/// Provides convenient traversal methods (BFS, DFS, ...) on index-level graphs
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g: Graph<Node> = Graph::new();
    /// for u in 0..3 as Node {
    ///     g.add_vertex(u).unwrap();
    /// }
    /// g.add_edge(&0, &1).unwrap();
    /// g.add_edge(&0, &2).unwrap();
    ///
    /// let order: Vec<_> = g.bfs(1).map(|visit| (visit.node, visit.level)).collect();
    /// assert_eq!(order, vec![(1, 0), (0, 1), (2, 2)]);
    /// ```
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses nodes reachable from `start`
    /// in **depth-first search (DFS) order**.
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

impl<L: Label> Graph<L> {
    /// Returns a BFS iterator yielding `(vertex, distance)` pairs starting at `start`.
    /// Fails with [`GraphError::UnknownVertex`] if `start` is absent.
    pub fn bfs_iter<Q>(&self, start: &Q) -> Result<Labelled<'_, L, BFS<'_, Self>>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        Ok(Labelled {
            graph: self,
            inner: self.bfs(self.index_of(start)?),
        })
    }

    /// Returns a DFS iterator yielding `(vertex, depth)` pairs starting at `start`.
    /// Fails with [`GraphError::UnknownVertex`] if `start` is absent.
    pub fn dfs_iter<Q>(&self, start: &Q) -> Result<Labelled<'_, L, DFS<'_, Self>>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        Ok(Labelled {
            graph: self,
            inner: self.dfs(self.index_of(start)?),
        })
    }

    /// Returns the vertices of the DFS tree rooted at `root` that have no children in it,
    /// in visitation order.
    pub fn dfs_tree_leaves<Q>(&self, root: &Q) -> Result<Vec<L>>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        Ok(self
            .dfs(self.index_of(root)?)
            .tree_leaves()
            .into_iter()
            .map(|u| self.label_of(u).clone())
            .collect())
    }
}

#[cfg(test)]
pub mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::{gens::*, testing::bfs_distances};

    fn from_edges(n: Node, edges: impl IntoIterator<Item = (Node, Node)>) -> Graph<Node> {
        let mut g = Graph::new();
        for u in 0..n {
            g.add_vertex(u).unwrap();
        }
        for (u, v) in edges {
            g.add_edge(&u, &v).unwrap();
        }
        g
    }

    fn weighted_path() -> Graph {
        let mut g = Graph::with_kind(GraphKind::new(false, true));
        for v in ["1", "2", "3", "4"] {
            g.add_vertex(v).unwrap();
        }
        g.add_edge_with_weight("1", "2", 5).unwrap();
        g.add_edge_with_weight("2", "3", 10).unwrap();
        g.add_edge_with_weight("3", "4", 2).unwrap();
        g
    }

    #[test]
    fn labelled_path_levels() {
        let g = weighted_path();
        let expected = vec![("1", 0), ("2", 1), ("3", 2), ("4", 3)];

        let bfs = g
            .bfs_iter("1")
            .unwrap()
            .map(|(u, l)| (u.as_str(), l))
            .collect_vec();
        assert_eq!(bfs, expected);

        let dfs = g
            .dfs_iter("1")
            .unwrap()
            .map(|(u, l)| (u.as_str(), l))
            .collect_vec();
        assert_eq!(dfs, expected);

        assert!(matches!(
            g.bfs_iter("7"),
            Err(GraphError::UnknownVertex(_))
        ));
        assert!(g.dfs_iter("7").is_err());
    }

    #[test]
    fn bfs_order() {
        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);

        let order = graph.bfs(1).map(|x| (x.node, x.level)).collect_vec();
        assert_eq!(order, vec![(1, 0), (2, 1), (0, 1), (4, 2), (5, 2), (3, 3)]);

        let order = BFS::new(&graph, 3).map(|x| x.node).collect_vec();
        assert_eq!(order, [3, 4, 2, 5, 1, 0]);
    }

    #[test]
    fn dfs_order() {
        //  / 2
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]);

        let order = graph.dfs(1).map(|x| (x.node, x.level)).collect_vec();
        assert_eq!(order, vec![(1, 0), (2, 1), (0, 1), (5, 2), (4, 3), (3, 4)]);
    }

    #[test]
    fn dfs_marks_on_pop() {
        // triangle 0-1-2 with 1 listed before 2 at 0: the stale push of 2 is skipped
        let graph = from_edges(3, [(0, 1), (0, 2), (1, 2)]);
        let order = graph.dfs(0).map(|x| (x.node, x.level)).collect_vec();
        assert_eq!(order, vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_stopper() {
        let graph = from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        assert_eq!(graph.bfs(0).map(|x| x.node).collect_vec(), vec![0, 1, 2, 3]);
        assert_eq!(
            graph.bfs(0).stop_at(1).map(|x| x.node).collect_vec(),
            vec![0, 1]
        );
    }

    #[test]
    fn trees() {
        let graph = from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]);
        assert_eq!(graph.dfs(1).parent_array(), vec![1, 1, 1, 4, 5, 0]);
        assert_eq!(graph.dfs(1).tree_leaves(), vec![2, 3]);

        let graph = from_edges(6, [(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);
        assert_eq!(graph.bfs(1).parent_array(), vec![1, 1, 1, 4, 2, 0]);
        assert_eq!(graph.bfs(1).tree_leaves(), vec![5, 3]);
    }

    #[test]
    fn dfs_leaves_of_labelled_tree() {
        let g = weighted_path();
        assert_eq!(g.dfs_tree_leaves("1").unwrap(), vec!["4"]);
        assert_eq!(g.dfs_tree_leaves("2").unwrap(), vec!["1", "4"]);
        assert!(g.dfs_tree_leaves("0").is_err());
    }

    #[test]
    fn directed_traversal_follows_arcs() {
        let mut graph = from_edges(3, []);
        graph.toggle_directed();
        graph.add_edge(&0, &1).unwrap();
        graph.add_edge(&2, &1).unwrap();

        assert_eq!(graph.bfs(0).map(|x| x.node).collect_vec(), vec![0, 1]);
        assert_eq!(graph.dfs(1).map(|x| x.node).collect_vec(), vec![1]);
    }

    #[test]
    fn bfs_levels_are_distances() {
        let rng = &mut Pcg64Mcg::seed_from_u64(42);
        for _ in 0..50 {
            let graph = Gnp::new().nodes(20).prob(0.12).generate(rng);
            for start in [0, 7, 19] {
                let dist = bfs_distances(&graph, start);
                let mut last = 0;
                let mut seen = 0;
                for visit in graph.bfs(start) {
                    assert!(visit.level >= last);
                    assert_eq!(Some(visit.level), dist[visit.node as usize]);
                    last = visit.level;
                    seen += 1;
                }
                assert_eq!(seen, dist.iter().flatten().count());

                let dfs = graph.dfs(start).map(|x| x.node).sorted().collect_vec();
                let bfs = graph.bfs(start).map(|x| x.node).sorted().collect_vec();
                assert_eq!(dfs, bfs);
            }
        }
    }
}
