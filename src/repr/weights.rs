use fxhash::FxHashMap;

use crate::*;

/// Per-arc weights, one row per vertex slot.
///
/// A table exists iff the owning graph is weighted; it then holds exactly one entry per arc.
#[derive(Debug, Clone, Default)]
pub(crate) struct WeightTable {
    rows: Vec<FxHashMap<Node, Weight>>,
}

impl WeightTable {
    /// Creates a table with `n` empty rows
    pub(crate) fn with_rows(n: usize) -> Self {
        Self {
            rows: vec![FxHashMap::default(); n],
        }
    }

    /// Creates a table holding weight `0` for every arc of the given adjacency lists
    pub(crate) fn seeded(out_nbs: &[Vec<Node>]) -> Self {
        let mut table = Self::with_rows(out_nbs.len());
        for (u, nbs) in out_nbs.iter().enumerate() {
            table.rows[u].extend(nbs.iter().map(|&v| (v, 0)));
        }
        table
    }

    /// Appends a row for a freshly created slot
    pub(crate) fn push_row(&mut self) {
        self.rows.push(FxHashMap::default());
    }

    pub(crate) fn get(&self, u: Node, v: Node) -> Option<Weight> {
        self.rows.get(u as usize)?.get(&v).copied()
    }

    /// Sets the weight of arc `(u, v)` and returns the previous one
    pub(crate) fn set(&mut self, u: Node, v: Node, weight: Weight) -> Option<Weight> {
        self.rows[u as usize].insert(v, weight)
    }

    pub(crate) fn remove(&mut self, u: Node, v: Node) -> Option<Weight> {
        self.rows[u as usize].remove(&v)
    }

    /// Drops all outgoing weights of `u`
    pub(crate) fn clear_row(&mut self, u: Node) {
        self.rows[u as usize].clear();
    }

    /// Total number of stored weights
    pub(crate) fn number_of_entries(&self) -> usize {
        self.rows.iter().map(|row| row.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_table_matches_arcs() {
        let out_nbs = vec![vec![1, 2], vec![0], vec![]];
        let mut table = WeightTable::seeded(&out_nbs);

        assert_eq!(table.number_of_entries(), 3);
        assert_eq!(table.get(0, 2), Some(0));
        assert_eq!(table.get(2, 0), None);
        assert_eq!(table.get(7, 0), None);

        assert_eq!(table.set(0, 2, 9), Some(0));
        assert_eq!(table.remove(0, 2), Some(9));

        table.push_row();
        table.set(3, 0, 4);
        table.clear_row(0);
        assert_eq!(table.number_of_entries(), 2);
    }
}
