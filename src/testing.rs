//! Naive reference implementations used as oracles in unit tests.

use fxhash::FxHashMap;
use itertools::Itertools;

use crate::prelude::*;

/// Hop distances from `source` by repeated relaxation over all arcs until nothing changes
pub(crate) fn bfs_distances<G: AdjacencyList>(graph: &G, source: Node) -> Vec<Option<Level>> {
    let mut dist = vec![None; graph.node_capacity() as usize];
    dist[source as usize] = Some(0);

    loop {
        let mut changed = false;
        for Edge(u, v) in graph.edges(false).collect_vec() {
            if let Some(du) = dist[u as usize]
                && dist[v as usize].is_none_or(|dv| du + 1 < dv)
            {
                dist[v as usize] = Some(du + 1);
                changed = true;
            }
        }
        if !changed {
            return dist;
        }
    }
}

/// Bellman-Ford distances from `source`; assumes there are no negative cycles
pub(crate) fn brute_force_distances<G: WeightedAdjacencyList>(
    graph: &G,
    source: Node,
) -> Vec<Option<Weight>> {
    let mut dist = vec![None; graph.node_capacity() as usize];
    dist[source as usize] = Some(0);

    for _ in 0..graph.number_of_nodes() {
        for Edge(u, v) in graph.edges(false).collect_vec() {
            let w = graph.weight_of(u, v).unwrap_or(0);
            if let Some(du) = dist[u as usize]
                && dist[v as usize].is_none_or(|dv| du + w < dv)
            {
                dist[v as usize] = Some(du + w);
            }
        }
    }
    dist
}

/// Minimum weight over all `n - 1` edge subsets that connect every vertex, or `None` if the
/// graph is disconnected. Exponential in the number of edges.
pub(crate) fn brute_force_mst_weight<L: Label>(graph: &Graph<L>) -> Option<Weight> {
    let nodes = graph.vertices().collect_vec();
    let edges = graph
        .edges(true)
        .map(|Edge(u, v)| (u, v, graph.weight_of(u, v).unwrap_or(0)))
        .collect_vec();

    edges
        .iter()
        .combinations(nodes.len().saturating_sub(1))
        .filter(|subset| {
            // propagate component ids until stable
            let mut comp: FxHashMap<Node, Node> = nodes.iter().map(|&u| (u, u)).collect();
            loop {
                let mut changed = false;
                for &&(u, v, _) in subset {
                    let c = comp[&u].min(comp[&v]);
                    for x in [u, v] {
                        if comp[&x] != c {
                            comp.insert(x, c);
                            changed = true;
                        }
                    }
                }
                if !changed {
                    break;
                }
            }
            comp.values().all_equal()
        })
        .map(|subset| subset.iter().map(|&&(_, _, w)| w).sum::<Weight>())
        .min()
}

/// Enumerates every vertex subset and keeps the pairwise adjacent ones of maximum size,
/// sorted lexicographically by vertex order.
pub(crate) fn brute_force_maximum_cliques<L: Label>(graph: &Graph<L>) -> Vec<Vec<L>> {
    let nodes = graph.vertices().collect_vec();
    assert!(nodes.len() < 20, "too many vertices for brute force");

    let mut best: Vec<Vec<usize>> = Vec::new();
    for mask in 1u32..(1 << nodes.len()) {
        let members = (0..nodes.len()).filter(|i| mask & (1 << i) != 0).collect_vec();
        let is_clique = members
            .iter()
            .tuple_combinations()
            .all(|(&i, &j)| graph.has_edge(nodes[i], nodes[j]));
        if !is_clique {
            continue;
        }

        match best.first().map_or(0, Vec::len).cmp(&members.len()) {
            std::cmp::Ordering::Less => best = vec![members],
            std::cmp::Ordering::Equal => best.push(members),
            std::cmp::Ordering::Greater => {}
        }
    }

    best.sort();
    best.into_iter()
        .map(|members| {
            members
                .into_iter()
                .map(|i| graph.label_of(nodes[i]).clone())
                .collect()
        })
        .collect()
}

/// Asserts that `circuit` is a closed walk using every edge of `graph` exactly once
pub(crate) fn assert_eulerian_circuit<L: Label>(graph: &Graph<L>, circuit: &[L]) {
    assert_eq!(circuit.len(), graph.edge_count() + 1);
    assert_eq!(circuit.first(), circuit.last());

    let mut used = circuit
        .iter()
        .map(|label| graph.index_of(label).unwrap())
        .tuple_windows()
        .map(|(u, v)| {
            assert!(graph.has_edge(u, v), "{u} -> {v} is not an edge");
            if graph.is_directed() {
                Edge(u, v)
            } else {
                Edge(u, v).normalized()
            }
        })
        .collect_vec();
    used.sort_unstable();

    let expected = graph.ordered_edges(graph.is_undirected()).collect_vec();
    assert_eq!(used, expected);
}
