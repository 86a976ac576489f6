/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing graph.

It allows adding common motifs such as:

- **Paths**
- **Cycles**
- **Cliques**

Missing vertices are inserted on the fly and edges that already exist are kept as they are
(including their weight); new edges get weight `0` in weighted graphs.

# Example

```rust
use lgraphs::{prelude::*, gens::*};

let mut g: Graph = Graph::new();
g.connect_path(["a", "b", "c"]).unwrap();
g.connect_cycle(["c", "d", "e"]).unwrap();
g.connect_clique(["a", "c", "e"]).unwrap();

assert_eq!(g.vertex_list(), vec!["a", "b", "c", "d", "e"]);
assert_eq!(g.edge_count(), 7);
assert!(g.is_edge("e", "a"));
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
pub trait GeneratorSubstructures<L> {
    /// Connects the given vertices in order with a **simple path**.
    ///
    /// Each consecutive pair of vertices is connected by a single edge.
    /// Fails with [`GraphError::SelfLoop`] if a vertex directly follows itself.
    fn connect_path<P>(&mut self, vertices_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item: Into<L>>;

    /// Connects the given vertices with a **cycle**.
    ///
    /// - Consecutive vertices are connected by edges.
    /// - Additionally, the last vertex is connected back to the first if there are at least two.
    fn connect_cycle<C>(&mut self, vertices_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item: Into<L>>;

    /// Connects all given vertices into a **clique** (complete subgraph).
    /// In directed mode, both arcs between every pair are present afterwards.
    fn connect_clique<C>(&mut self, vertices: C) -> Result<()>
    where
        C: IntoIterator<Item: Into<L>>;
}

impl<L: Label> Graph<L> {
    fn connect_slots(&mut self, u: Node, v: Node) -> Result<()> {
        if u != v && self.has_edge(u, v) {
            return Ok(());
        }
        self.add_edge_between(u, v, 0)
    }

    fn ensure_vertices<I>(&mut self, vertices: I) -> Vec<Node>
    where
        I: IntoIterator<Item: Into<L>>,
    {
        vertices
            .into_iter()
            .map(|label| self.ensure_vertex(label))
            .collect_vec()
    }
}

impl<L: Label> GeneratorSubstructures<L> for Graph<L> {
    fn connect_path<P>(&mut self, vertices_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item: Into<L>>,
    {
        let path = self.ensure_vertices(vertices_on_path);
        for (&u, &v) in path.iter().tuple_windows() {
            self.connect_slots(u, v)?;
        }
        Ok(())
    }

    fn connect_cycle<C>(&mut self, vertices_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item: Into<L>>,
    {
        let cycle = self.ensure_vertices(vertices_in_cycle);
        if cycle.len() < 2 {
            return Ok(());
        }
        for (&u, &v) in cycle.iter().circular_tuple_windows() {
            self.connect_slots(u, v)?;
        }
        Ok(())
    }

    fn connect_clique<C>(&mut self, vertices: C) -> Result<()>
    where
        C: IntoIterator<Item: Into<L>>,
    {
        let mut clique = self.ensure_vertices(vertices);
        clique.sort_unstable();
        clique.dedup();

        for (i, &u) in clique.iter().enumerate() {
            for &v in &clique[i + 1..] {
                self.connect_slots(u, v)?;
                if self.is_directed() {
                    self.connect_slots(v, u)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(kind: GraphKind, n: Node) -> Graph<Node> {
        let mut g = Graph::with_kind(kind);
        for u in 0..n {
            g.add_vertex(u).unwrap();
        }
        g
    }

    #[test]
    fn test_connect_path() {
        let undirected = GraphKind::new(false, false);
        {
            let mut g = numbered(undirected, 6);
            g.connect_path(Vec::<Node>::new()).unwrap();
            g.connect_path([1 as Node]).unwrap();
            assert_eq!(g.edge_count(), 0);
        }

        {
            let mut g = numbered(GraphKind::new(true, false), 6);
            g.connect_path([0 as Node, 3, 1, 4]).unwrap();
            assert_eq!(
                g.ordered_edges(false).collect_vec(),
                vec![Edge(0, 3), Edge(1, 4), Edge(3, 1)]
            );
        }

        {
            let mut g = numbered(undirected, 2);
            g.connect_path([0 as Node, 1, 2]).unwrap();
            assert_eq!(g.vertex_count(), 3);
            assert!(g.is_edge(&2, &1));

            assert!(matches!(
                g.connect_path([2 as Node, 2]),
                Err(GraphError::SelfLoop(_))
            ));
        }
    }

    #[test]
    fn test_connect_cycle() {
        {
            let mut g = numbered(GraphKind::new(false, false), 6);
            g.connect_cycle([1 as Node]).unwrap();
            assert_eq!(g.edge_count(), 0);

            // the closing edge of a 2-cycle already exists when undirected
            g.connect_cycle([1 as Node, 2]).unwrap();
            assert_eq!(g.edge_count(), 1);
        }

        {
            let mut g = numbered(GraphKind::new(true, true), 6);
            g.add_edge_with_weight(&3, &1, 7).unwrap();
            g.connect_cycle([0 as Node, 3, 1, 4]).unwrap();
            assert_eq!(
                g.ordered_edges(false).collect_vec(),
                vec![Edge(0, 3), Edge(1, 4), Edge(3, 1), Edge(4, 0)]
            );
            assert_eq!(g.get_weight(&3, &1).unwrap(), 7);
            assert_eq!(g.get_weight(&4, &0).unwrap(), 0);
        }
    }

    #[test]
    fn test_connect_clique() {
        for (directed, arcs) in [(false, 6), (true, 12)] {
            let mut g = numbered(GraphKind::new(directed, false), 6);
            g.connect_clique([1 as Node, 2, 4, 2, 5]).unwrap();
            assert_eq!(g.edge_count(), arcs);

            // reconnecting is a no-op
            g.connect_clique([5 as Node, 4, 1]).unwrap();
            assert_eq!(g.edge_count(), arcs);
        }

        let mut g: Graph = Graph::new();
        g.connect_clique(["x"]).unwrap();
        assert_eq!(g.vertex_list(), vec!["x"]);
        assert_eq!(g.edge_count(), 0);
    }
}
