/*!
`lgraphs` is a graph data structure & algorithms library designed for graphs that are
- **l**abelled : Vertices are identified by arbitrary hashable labels (`String` by default)
- optionally **weighted** : Every edge may carry an integral weight
- optionally **directed** : Both flags can be toggled at runtime

# Representation

Every label is interned to a dense slot `Node = u32` in insertion order.
Slots of removed vertices are never reused, so vertex enumeration order is always insertion order.
For **edges**, we use a simple tuple-struct `Edge(Node, Node)`.

### Directed vs Undirected

We support both **directed** and **undirected** graphs in a single representation
[`Graph`](crate::repr::Graph):

- In an **undirected** graph, every edge `{u, v}` is stored as the two arcs `u -> v` and `v -> u`
  carrying the same weight, but counted once.
- In a **directed** graph, `u -> v` and `v -> u` are distinct.

# Design

All algorithms/generators are provided as configurable structs that one can alter to their needs
using the *Builder* / *Setter* pattern before calling the configured algorithm on a provided graph.
Alternatively, the most commonly used functionality is implemented via traits or methods on the
graph itself, making it usable without configuring the algorithm beforehand.

Failures are reported as [`GraphError`]s; algorithms and generators log through
[`tracing`](https://docs.rs/tracing) but never install a subscriber themselves.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations and the graph itself,
- [`algo`] includes traversals, connectivity, minimum spanning trees, Eulerian circuits,
  maximum cliques and shortest paths,
- [`gens`] includes a random graph generator and deterministic substructures such as paths/cycles/cliques,
- [`io`] includes handlers for reading and writing graph descriptions,
- [`utils`] includes swappable choice strategies and a union-find structure.

In most use-cases, `use lgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use lgraphs::{prelude::*, algo::*};

let mut g: Graph = Graph::with_kind(GraphKind::new(false, true));
for v in ["a", "b", "c"] {
    g.add_vertex(v).unwrap();
}
g.add_edge_with_weight("a", "b", 2).unwrap();
g.add_edge_with_weight("b", "c", 1).unwrap();
g.add_edge_with_weight("a", "c", 5).unwrap();

assert!(g.is_connected().unwrap());
assert_eq!(g.minimum_spanning_tree().unwrap().edge_count(), 2);
assert_eq!(g.dijkstra("a").unwrap().distance_to("c").unwrap(), Some(3));
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;

pub use edge::*;
pub use error::*;
pub use node::*;

/// `lgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits as well as the graph itself.
pub mod prelude {
    pub use super::{edge::*, error::*, node::*, ops::*, repr::*};
}
