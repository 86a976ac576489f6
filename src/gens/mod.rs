/*!
# Graph Generators

Random and deterministic generators that build [`Graph`](crate::repr::Graph)s, mostly used to
produce test instances for the algorithms in [`crate::algo`].

Generators follow a builder-style pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using builder methods (e.g., `.nodes(n).prob(p)`).
3. Produce a graph via `generate(rng)`.

Supported models:
- G(n,p): Erdős–Rényi model with independent edge probability, optionally directed and weighted

In addition, [`GeneratorSubstructures`] adds deterministic paths, cycles and cliques to an
existing graph.
*/

use rand::Rng;

use crate::prelude::*;

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
///
/// This is the most common builder trait across all generators.
/// Allows a fluent interface when configuring generators.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen {
    /// Set the average degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
}

/// Trait for generators producing whole graphs whose vertices are labelled `0..n`.
pub trait GraphGenerator {
    /// Generates a random graph
    fn generate<R>(&self, rng: &mut R) -> Graph<Node>
    where
        R: Rng;
}
