/*!
# Utilities

Provides helper structs used by the algorithms:
- [`ChoiceStrategy`] and its implementations to make arbitrary choices swappable,
- [`UnionFind`], the disjoint-set forest behind Kruskal's algorithm.
*/

pub mod choice;
pub mod union_find;

pub use choice::*;
pub use union_find::UnionFind;

/// Helper trait for probalities
pub trait Probability {
    /// Returns *true* if the probality is valid (ie. between `0` and `1`)
    fn is_valid_probility(&self) -> bool;
}

impl Probability for f64 {
    fn is_valid_probility(&self) -> bool {
        (0.0..=1.0).contains(self)
    }
}
