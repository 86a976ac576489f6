/*!
# Graph Algorithms

This module provides the classical algorithms on top of [`Graph`](crate::repr::Graph).
All algorithms are re-exported at the top level of this module, so you can simply do:
```rust
use lgraphs::algo::*;
```
and gain access to traversals, connectivity, spanning trees, Eulerian circuits, cliques and
shortest paths.

Each algorithm is implemented against the index-level traits in [`crate::ops`] and exposed twice:
as a configurable struct or free function on slots, and as a label-based method on the graph itself.
Traversals are provided as **iterators**, making it easy to consume results lazily.
*/

mod cliques;
mod connectivity;
mod eulerian;
mod shortest_path;
mod spanning_tree;
mod traversal;

use crate::{prelude::*, utils::*};

pub use cliques::*;
pub use connectivity::*;
pub use eulerian::*;
pub use shortest_path::*;
pub use spanning_tree::*;
pub use traversal::*;
