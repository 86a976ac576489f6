use std::{fmt::Display, str::FromStr};

use tracing::debug;

use super::*;

/// The two runtime mode flags of a [`Graph`].
///
/// Renders to (and parses from) the header line of a graph description,
/// e.g. `"undirected weighted"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GraphKind {
    pub directed: bool,
    pub weighted: bool,
}

impl GraphKind {
    pub const fn new(directed: bool, weighted: bool) -> Self {
        Self { directed, weighted }
    }
}

impl Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            if self.directed { "directed" } else { "undirected" },
            if self.weighted { "weighted" } else { "unweighted" }
        )
    }
}

impl FromStr for GraphKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let (Some(dir), Some(wgt), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(format!("expected `<directed|undirected> <weighted|unweighted>`, got `{s}`"));
        };

        let directed = match dir {
            "directed" => true,
            "undirected" => false,
            _ => return Err(format!("unknown direction `{dir}`")),
        };
        let weighted = match wgt {
            "weighted" => true,
            "unweighted" => false,
            _ => return Err(format!("unknown weighting `{wgt}`")),
        };

        Ok(Self::new(directed, weighted))
    }
}

impl<L: Label> Graph<L> {
    /// Flips the directed flag.
    ///
    /// A store turning directed keeps both arcs of every undirected edge.
    /// A store turning undirected gains the reverse of every one-way arc. If both arcs of a pair
    /// already exist with different weights, the arc met first (in vertex insertion order, then
    /// adjacency order) wins and the reverse takes its weight.
    pub fn toggle_directed(&mut self) {
        self.directed = !self.directed;
        self.symmetrize();
    }

    /// Flips the weighted flag.
    ///
    /// Turning weights on assigns weight `0` to every arc; turning them off drops all weights.
    pub fn toggle_weighted(&mut self) {
        self.weights = match self.weights.take() {
            Some(_) => None,
            None => Some(WeightTable::seeded(&self.out_nbs)),
        };
        debug!(weighted = self.is_weighted(), "toggled weights");
    }

    /// Restores the symmetry invariant in undirected mode. No-op for directed stores.
    fn symmetrize(&mut self) {
        if self.directed {
            debug!(arcs = self.num_arcs, "store is now directed");
            return;
        }

        let mut added = 0usize;
        let mut overwritten = 0usize;
        for u in 0..self.node_capacity() {
            // neighbors pushed during this pass are reverse arcs and need no visit
            let degree = self.out_nbs[u as usize].len();
            for i in 0..degree {
                let v = self.out_nbs[u as usize][i];
                let weight = self.weight_of(u, v).unwrap_or(0);

                if !self.has_edge(v, u) {
                    self.push_arc(v, u, weight);
                    added += 1;
                } else if u < v
                    && let Some(weights) = self.weights.as_mut()
                    && weights.set(v, u, weight) != Some(weight)
                {
                    overwritten += 1;
                }
            }
        }

        debug!(added, overwritten, "symmetrized store");
    }
}
