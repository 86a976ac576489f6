use crate::prelude::*;

/// Array-backed disjoint-set forest over the slots `0..n`.
///
/// Uses path halving in [`UnionFind::find`] and union by size, so a sequence of `m` operations runs
/// in `O(m * alpha(n))`.
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<Node>,
    size: Vec<NumNodes>,
}

impl UnionFind {
    /// Creates `n` singleton sets
    pub fn new(n: NumNodes) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n as usize],
        }
    }

    /// Returns the representative of the set containing `u`.
    /// ** Panics if `u >= n` **
    pub fn find(&mut self, mut u: Node) -> Node {
        while self.parent[u as usize] != u {
            let grand_parent = self.parent[self.parent[u as usize] as usize];
            self.parent[u as usize] = grand_parent;
            u = grand_parent;
        }
        u
    }

    /// Merges the sets of `u` and `v`. Returns *false* if they already were the same set.
    pub fn union(&mut self, u: Node, v: Node) -> bool {
        let (mut ru, mut rv) = (self.find(u), self.find(v));
        if ru == rv {
            return false;
        }

        if self.size[ru as usize] < self.size[rv as usize] {
            std::mem::swap(&mut ru, &mut rv);
        }
        self.parent[rv as usize] = ru;
        self.size[ru as usize] += self.size[rv as usize];
        true
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn merge_chain() {
        let mut uf = UnionFind::new(6);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(uf.union(1, 3));
        assert!(!uf.union(0, 2));

        assert_eq!(uf.find(0), uf.find(3));
        assert_ne!(uf.find(0), uf.find(4));
        assert_ne!(uf.find(4), uf.find(5));
        assert!(uf.union(4, 5));
        assert!(!uf.union(5, 4));
    }

    #[test]
    fn matches_naive_labels() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        let n = 30;
        let mut uf = UnionFind::new(n);
        let mut label: Vec<Node> = (0..n).collect();

        for _ in 0..60 {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            let (lu, lv) = (label[u as usize], label[v as usize]);
            assert_eq!(uf.union(u, v), lu != lv);
            for l in label.iter_mut() {
                if *l == lv {
                    *l = lu;
                }
            }

            for x in 0..n {
                assert_eq!(
                    uf.find(u) == uf.find(x),
                    label[x as usize] == label[u as usize]
                );
            }
        }
    }
}
