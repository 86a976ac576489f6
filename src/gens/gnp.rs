use std::ops::RangeInclusive;

use itertools::Itertools;
use rand_distr::{Distribution, Geometric};

use crate::{gens::*, utils::*};

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a node
    AvgDeg(f64),
}

/// `G(n,p)` graphs contain every possible edge between `n` vertices with probability `p`
/// independent from each other.
///
/// Generated graphs are simple: there are no self-loops, and in the undirected case every
/// unordered pair is considered once. Vertices are labelled `0..n` and thus coincide with their slots.
/// If a weight range is set, the graph is weighted and every edge gets a uniform weight from it.
///
/// # Examples
/// ```
/// use lgraphs::{prelude::*, gens::*};
///
/// let g = Gnp::new()
///     .nodes(10)
///     .prob(1.0)
///     .weights(1..=3)
///     .generate(&mut rand::rng());
///
/// assert_eq!(g.vertex_count(), 10);
/// assert_eq!(g.edge_count(), 45);
/// assert!(g.is_weighted() && g.is_undirected());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: GnpType,
    directed: bool,
    weights: Option<RangeInclusive<Weight>>,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probility());
        self.p = GnpType::Prob(prob);
        self
    }

    /// Generates ordered pairs (arcs) instead of unordered pairs
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Makes the generated graph weighted with weights drawn uniformly from `range`
    pub fn weights(mut self, range: RangeInclusive<Weight>) -> Self {
        assert!(!range.is_empty(), "Weight range must not be empty!");
        self.weights = Some(range);
        self
    }

    fn probability(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Probility of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => {
                let p = if self.n > 1 {
                    d / (self.n - 1) as f64
                } else {
                    0.0
                };
                assert!(
                    p.is_valid_probility(),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        }
    }

    /// Returns a stream over the random edges of this model.
    /// Candidates are all slot pairs `x = u * n + v`; loops and, if undirected, pairs with
    /// `u > v` are skipped.
    pub fn stream<'a, R: Rng>(&self, rng: &'a mut R) -> impl Iterator<Item = Edge> + 'a {
        let n = self.n as u64;
        let directed = self.directed;

        GeometricJumps::new(self.probability(), n * n, rng)
            .map(move |x| Edge((x / n) as Node, (x % n) as Node))
            .filter(move |e| !e.is_loop() && (directed || e.is_normalized()))
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d/(n-1)`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl GraphGenerator for Gnp {
    fn generate<R>(&self, rng: &mut R) -> Graph<Node>
    where
        R: Rng,
    {
        let mut graph = Graph::with_kind(GraphKind::new(self.directed, self.weights.is_some()));
        for u in 0..self.n {
            graph.ensure_vertex(u);
        }

        let edges = self.stream(rng).collect_vec();
        for Edge(u, v) in edges {
            let weight = match &self.weights {
                Some(range) => rng.random_range(range.clone()),
                None => 0,
            };
            let inserted = graph.add_edge_between(u, v, weight);
            debug_assert!(inserted.is_ok(), "candidate pairs are distinct and loop-free");
        }

        graph
    }
}

/// Iterator over the successes of independent Bernoulli trials `0..stop`, jumping from one
/// success to the next with geometrically distributed gaps.
struct GeometricJumps<'a, R: Rng> {
    distr: Option<Geometric>,
    rng: &'a mut R,
    cur: u64,
    stop: u64,
}

impl<'a, R: Rng> GeometricJumps<'a, R> {
    fn new(prob: f64, stop: u64, rng: &'a mut R) -> Self {
        Self {
            // p = 0 never succeeds
            distr: (prob > 0.0).then(|| Geometric::new(prob).unwrap()),
            rng,
            cur: 0,
            stop,
        }
    }
}

impl<R: Rng> Iterator for GeometricJumps<'_, R> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let distr = self.distr.as_ref()?;
        let next = self.cur.checked_add(distr.sample(&mut *self.rng))?;
        if next >= self.stop {
            self.cur = self.stop;
            return None;
        }
        self.cur = next + 1;
        Some(next)
    }
}
