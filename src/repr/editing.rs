use std::{borrow::Borrow, fmt::Display, hash::Hash};

use super::*;

impl<L: Label> Graph<L> {
    /// Inserts a new isolated vertex and returns its slot.
    /// Fails with [`GraphError::DuplicateVertex`] if the label is already present.
    pub fn add_vertex(&mut self, label: impl Into<L>) -> Result<Node> {
        let label = label.into();
        if self.slots.contains_key(&label) {
            return Err(GraphError::DuplicateVertex(label.to_string()));
        }
        Ok(self.push_vertex(label))
    }

    /// Returns the slot of `label`, inserting it as an isolated vertex if it is not yet present
    pub fn ensure_vertex(&mut self, label: impl Into<L>) -> Node {
        let label = label.into();
        match self.slots.get(&label) {
            Some(&u) => u,
            None => self.push_vertex(label),
        }
    }

    fn push_vertex(&mut self, label: L) -> Node {
        let u = self.labels.len() as Node;
        assert!(u < INVALID_NODE, "too many vertex slots");

        self.slots.insert(label.clone(), u);
        self.labels.push(Some(label));
        self.out_nbs.push(Vec::new());
        if let Some(weights) = self.weights.as_mut() {
            weights.push_row();
        }
        self.num_nodes += 1;
        u
    }

    /// Adds an edge between `u` and `v` with weight `0`.
    /// See [`Graph::add_edge_with_weight`].
    pub fn add_edge<Q>(&mut self, u: &Q, v: &Q) -> Result<()>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        self.add_edge_with_weight(u, v, 0)
    }

    /// Adds an edge between `u` and `v`.
    ///
    /// Directed stores append `u -> v` only, undirected stores both `u -> v` and `v -> u`.
    /// The weight is recorded for every appended arc and ignored on unweighted stores.
    ///
    /// Fails with [`GraphError::UnknownVertex`] if an endpoint is absent,
    /// with [`GraphError::SelfLoop`] if `u == v`
    /// and with [`GraphError::DuplicateEdge`] if `v` is already a neighbor of `u`.
    pub fn add_edge_with_weight<Q>(&mut self, u: &Q, v: &Q, weight: Weight) -> Result<()>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let (su, sv) = self.endpoints(u, v)?;
        self.add_edge_between(su, sv, weight)
    }

    /// Index-level version of [`Graph::add_edge_with_weight`]
    /// ** Panics if `u` or `v` is not a live slot **
    pub fn add_edge_between(&mut self, u: Node, v: Node, weight: Weight) -> Result<()> {
        if u == v {
            return Err(GraphError::SelfLoop(self.label_of(u).to_string()));
        }
        if self.has_edge(u, v) {
            return Err(GraphError::duplicate_edge(
                self.label_of(u),
                self.label_of(v),
            ));
        }

        self.push_arc(u, v, weight);
        if !self.directed {
            self.push_arc(v, u, weight);
        }
        Ok(())
    }

    /// Removes the edge between `u` and `v` (both arcs if undirected)
    pub fn remove_edge<Q>(&mut self, u: &Q, v: &Q) -> Result<()>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let (su, sv) = self.endpoints(u, v)?;
        if !self.pop_arc(su, sv) {
            return Err(GraphError::no_such_edge(u, v));
        }
        if !self.directed {
            self.pop_arc(sv, su);
        }
        Ok(())
    }

    /// Removes a vertex with all incident edges. Its slot stays dead.
    pub fn remove_vertex<Q>(&mut self, label: &Q) -> Result<()>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let u = self.index_of(label)?;

        // inbound arcs first, then the vertex' own entries
        for w in 0..self.node_capacity() {
            if w != u {
                self.pop_arc(w, u);
            }
        }

        let own = std::mem::take(&mut self.out_nbs[u as usize]);
        self.num_arcs -= own.len() as NumEdges;
        if let Some(weights) = self.weights.as_mut() {
            weights.clear_row(u);
        }

        if let Some(l) = self.labels[u as usize].take() {
            self.slots.remove::<L>(&l);
        }
        self.num_nodes -= 1;
        Ok(())
    }

    /// Overwrites the weight of an existing edge (both arcs if undirected).
    ///
    /// Fails with [`GraphError::NotWeighted`] on unweighted stores
    /// and [`GraphError::NoSuchEdge`] if the edge is absent.
    pub fn set_weight<Q>(&mut self, u: &Q, v: &Q, weight: Weight) -> Result<()>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        if self.weights.is_none() {
            return Err(GraphError::NotWeighted);
        }
        let (su, sv) = self.endpoints(u, v)?;
        if !self.has_edge(su, sv) {
            return Err(GraphError::no_such_edge(u, v));
        }

        let directed = self.directed;
        if let Some(weights) = self.weights.as_mut() {
            weights.set(su, sv, weight);
            if !directed {
                weights.set(sv, su, weight);
            }
        }
        Ok(())
    }

    /// Returns the weight of the edge from `u` to `v`.
    ///
    /// Fails with [`GraphError::NotWeighted`] (checked first), [`GraphError::UnknownVertex`]
    /// or [`GraphError::NoSuchEdge`].
    pub fn get_weight<Q>(&self, u: &Q, v: &Q) -> Result<Weight>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        if self.weights.is_none() {
            return Err(GraphError::NotWeighted);
        }
        let (su, sv) = self.endpoints(u, v)?;
        self.weight_of(su, sv)
            .ok_or_else(|| GraphError::no_such_edge(u, v))
    }

    /// Appends arc `(u, v)`; the caller guarantees it is absent
    pub(super) fn push_arc(&mut self, u: Node, v: Node, weight: Weight) {
        debug_assert!(!self.has_edge(u, v));
        self.out_nbs[u as usize].push(v);
        if let Some(weights) = self.weights.as_mut() {
            weights.set(u, v, weight);
        }
        self.num_arcs += 1;
    }

    /// Removes arc `(u, v)` keeping the order of the remaining neighbors.
    /// Returns *true* if the arc existed.
    pub(super) fn pop_arc(&mut self, u: Node, v: Node) -> bool {
        let nbs = &mut self.out_nbs[u as usize];
        let Some(pos) = nbs.iter().position(|&w| w == v) else {
            return false;
        };
        nbs.remove(pos);
        if let Some(weights) = self.weights.as_mut() {
            weights.remove(u, v);
        }
        self.num_arcs -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use fxhash::FxHashMap;
    use itertools::Itertools;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    fn path_graph(kind: GraphKind) -> Graph {
        let mut g = Graph::with_kind(kind);
        for v in ["1", "2", "3", "4"] {
            g.add_vertex(v).unwrap();
        }
        g.add_edge_with_weight("1", "2", 5).unwrap();
        g.add_edge_with_weight("2", "3", 10).unwrap();
        g.add_edge_with_weight("3", "4", 2).unwrap();
        g
    }

    #[test]
    fn weights_and_duplicates() {
        let mut g = path_graph(GraphKind::new(false, true));

        assert_eq!(g.get_weight("1", "2").unwrap(), 5);
        assert_eq!(g.get_weight("2", "1").unwrap(), 5);
        assert!(matches!(
            g.add_edge_with_weight("1", "2", 7),
            Err(GraphError::DuplicateEdge(..))
        ));
        assert!(matches!(
            g.add_edge("2", "1"),
            Err(GraphError::DuplicateEdge(..))
        ));
        assert!(matches!(
            g.get_weight("1", "3"),
            Err(GraphError::NoSuchEdge(..))
        ));
        assert!(matches!(
            g.get_weight("1", "9"),
            Err(GraphError::UnknownVertex(label)) if label == "9"
        ));

        g.set_weight("3", "2", 1).unwrap();
        assert_eq!(g.get_weight("2", "3").unwrap(), 1);

        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.vertex_count(), 4);
    }

    #[test]
    fn rejects_invalid_inserts() {
        let mut g: Graph = Graph::new();
        g.add_vertex("a").unwrap();

        assert!(matches!(
            g.add_vertex("a"),
            Err(GraphError::DuplicateVertex(label)) if label == "a"
        ));
        assert!(matches!(g.add_edge("a", "a"), Err(GraphError::SelfLoop(_))));
        assert!(matches!(
            g.add_edge("a", "b"),
            Err(GraphError::UnknownVertex(_))
        ));
        assert!(matches!(
            g.get_weight("a", "b"),
            Err(GraphError::NotWeighted)
        ));
        assert!(matches!(
            g.set_weight("a", "b", 1),
            Err(GraphError::NotWeighted)
        ));
        assert!(matches!(
            g.remove_edge("a", "a"),
            Err(GraphError::NoSuchEdge(..))
        ));
    }

    #[test]
    fn directed_edges_are_one_way() {
        let mut g = path_graph(GraphKind::new(true, true));

        assert!(g.is_edge("1", "2"));
        assert!(!g.is_edge("2", "1"));
        assert_eq!(g.edge_count(), 3);
        g.add_edge_with_weight("2", "1", 8).unwrap();
        assert_eq!(g.get_weight("1", "2").unwrap(), 5);
        assert_eq!(g.get_weight("2", "1").unwrap(), 8);

        assert_eq!(g.neighbours("2").unwrap(), vec!["3", "1"]);
        assert_eq!(g.inbound_neighbours("2").unwrap(), vec!["1"]);
        assert_eq!(g.inbound_neighbours("1").unwrap(), vec!["2"]);
    }

    #[test]
    fn neighbours_are_copies() {
        let mut g = path_graph(GraphKind::new(false, false));

        let mut nbs = g.neighbours("2").unwrap();
        nbs.push("4".to_string());
        nbs.clear();

        assert_eq!(g.neighbours("2").unwrap(), vec!["1", "3"]);
        assert_eq!(g.inbound_neighbours("2").unwrap(), vec!["1", "3"]);
        assert!(g.neighbours("x").is_err());

        g.remove_edge("2", "1").unwrap();
        assert_eq!(g.neighbours("2").unwrap(), vec!["3"]);
        assert!(g.neighbours("1").unwrap().is_empty());
    }

    #[test]
    fn remove_vertex_cascades() {
        for directed in [false, true] {
            let mut g = path_graph(GraphKind::new(directed, true));
            g.remove_vertex("2").unwrap();

            assert!(!g.has_vertex("2"));
            assert_eq!(g.vertex_count(), 3);
            assert_eq!(g.edge_count(), 1);
            assert!(g.neighbours("1").unwrap().is_empty());
            assert_eq!(g.get_weight("3", "4").unwrap(), 2);
            assert_eq!(g.weights.as_ref().unwrap().number_of_entries(), g.num_arcs as usize);

            // removed labels can be reused and get a fresh slot
            assert_eq!(g.add_vertex("2").unwrap(), 4);
            assert!(g.neighbours("2").unwrap().is_empty());
            assert!(matches!(g.remove_vertex("9"), Err(GraphError::UnknownVertex(_))));
        }
    }

    /// Checks the symmetry and edge-count invariants for an undirected store
    fn assert_undirected_consistent(g: &Graph<Node>) {
        let mut arcs = 0;
        for u in g.vertices() {
            for v in g.neighbors_of(u) {
                assert!(g.has_edge(v, u), "missing reverse of ({u},{v})");
                arcs += 1;
            }
        }
        assert_eq!(arcs % 2, 0);
        assert_eq!(g.edge_count(), arcs / 2);
        if let Some(weights) = g.weights.as_ref() {
            assert_eq!(weights.number_of_entries(), arcs);
            for Edge(u, v) in g.edges(false) {
                assert_eq!(g.weight_of(u, v), g.weight_of(v, u));
            }
        }
    }

    #[test]
    fn random_edits_keep_symmetry() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);
        for _ in 0..50 {
            let mut g: Graph<Node> = Graph::with_kind(GraphKind::new(false, rng.random_bool(0.5)));
            for u in 0..12 as Node {
                g.add_vertex(u).unwrap();
            }

            for _ in 0..200 {
                let u: Node = rng.random_range(0..12);
                let v: Node = rng.random_range(0..12);
                match rng.random_range(0..10) {
                    0 => {
                        let _ = g.remove_vertex(&u);
                    }
                    1..=3 => {
                        let _ = g.remove_edge(&u, &v);
                    }
                    4 => g.toggle_weighted(),
                    5 => {
                        // one-way arc with a fresh weight, then back to undirected
                        g.toggle_directed();
                        let _ = g.add_edge_with_weight(&u, &v, rng.random_range(0..20));
                        g.toggle_directed();
                    }
                    _ => {
                        let _ = g.add_edge_with_weight(&u, &v, rng.random_range(0..20));
                    }
                }
                assert_undirected_consistent(&g);
            }

            let labels = g.vertex_list();
            assert_eq!(labels.iter().copied().sorted().collect_vec(), labels);
        }
    }

    #[test]
    fn random_arcs_symmetrize() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4321);
        for _ in 0..50 {
            let mut g: Graph<Node> = Graph::with_kind(GraphKind::new(true, true));
            for u in 0..10 as Node {
                g.add_vertex(u).unwrap();
            }

            for _ in 0..60 {
                let u: Node = rng.random_range(0..10);
                let v: Node = rng.random_range(0..10);
                if rng.random_bool(0.2) {
                    let _ = g.remove_edge(&u, &v);
                } else {
                    let _ = g.add_edge_with_weight(&u, &v, rng.random_range(0..20));
                }
            }

            let arcs: FxHashMap<(Node, Node), Weight> = g
                .labelled_edges()
                .map(|(&u, &v, w)| ((u, v), w.unwrap()))
                .collect();
            let pairs = arcs
                .keys()
                .map(|&(u, v)| (u.min(v), u.max(v)))
                .unique()
                .count();

            g.toggle_directed();
            assert_undirected_consistent(&g);
            assert_eq!(g.edge_count(), pairs);

            // labels equal slots here, so the arc leaving the smaller label is met first
            for (&(u, v), &w) in &arcs {
                let expected = arcs.get(&(u.min(v), u.max(v))).copied().unwrap_or(w);
                assert_eq!(g.get_weight(&u, &v).unwrap(), expected);
                assert_eq!(g.get_weight(&v, &u).unwrap(), expected);
            }

            g.toggle_directed();
            assert_eq!(g.edge_count(), 2 * pairs);
        }
    }
}
