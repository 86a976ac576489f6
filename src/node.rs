/*!
# Node Representation

Vertices are identified by arbitrary *labels* on the public surface of a [`Graph`](crate::repr::Graph),
but every label is interned to a dense slot `Node = u32` in insertion order.
All algorithms operate on these slots and translate back to labels at the boundary.

We choose `Node = u32` as almost all use-cases involve less than `2^32` vertices.
*/

use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

use stream_bitset::bitset::BitSetImpl;

/// Internal vertex slot. Slots of removed vertices are never reused.
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` vertex slots in a graph!
pub type NumNodes = Node;

/// Distance (BFS) or depth (DFS) of a visited vertex from the start of a traversal
pub type Level = NumNodes;

/// BitSet for Nodes
pub type NodeBitSet = BitSetImpl<Node>;

/// Opaque vertex identifiers.
///
/// A label is only ever compared for equality and hashed; no ordering is assumed.
/// `Display` is required to render labels in errors, reports and written graph descriptions.
pub trait Label: Clone + Eq + Hash + Debug + Display {}

impl<T> Label for T where T: Clone + Eq + Hash + Debug + Display {}
