//! Current clique: a sorted vertex subset bound to a single [`Graph`], with a
//! BitVec membership mask for O(1) `contains`.
//!
//! Pairwise adjacency is *checked* on every add, not assumed. A violation
//! means the move selection produced an illegal vertex, which is a bug in the
//! search and panics immediately rather than being tolerated.

use bitvec::prelude::*;

use crate::graph::Graph;

#[derive(Clone, Debug)]
pub struct Clique<'g> {
    graph: &'g Graph,
    /// Ascending, duplicate-free.
    members: Vec<usize>,
    inset: BitVec,
}

impl<'g> Clique<'g> {
    /*────────── constructor ──────────*/

    /// Empty clique.
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            members: Vec::new(),
            inset: bitvec![0; graph.n()],
        }
    }

    /*────────── queries ──────────*/

    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn contains(&self, v: usize) -> bool {
        self.inset[v]
    }

    /// Members in ascending order; doubles as the canonical signature for
    /// the revisit history.
    #[inline]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        self.graph
    }

    /*────────── mutators (single-vertex, search-loop only) ──────────*/

    /// Insert `v`, keeping the member list sorted.
    ///
    /// Panics if `v` is already a member or not adjacent to every current
    /// member — both indicate a broken move selection.
    pub fn add(&mut self, v: usize) {
        assert!(!self.inset[v], "vertex {v} added twice");
        for &u in &self.members {
            assert!(
                self.graph.are_adjacent(u, v),
                "vertex {v} not adjacent to member {u}"
            );
        }
        let at = self.members.partition_point(|&u| u < v);
        self.members.insert(at, v);
        self.inset.set(v, true);
    }

    /// Remove `v`; panics if it is not a member.
    pub fn remove(&mut self, v: usize) {
        assert!(self.inset[v], "vertex {v} dropped but not a member");
        let at = self.members.binary_search(&v).expect("member list out of sync");
        self.members.remove(at);
        self.inset.set(v, false);
    }

    /// Clear completely (restart).
    pub fn clear(&mut self) {
        self.members.clear();
        self.inset.fill(false);
    }
}

/*────────────────── tests ──────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn triangle_plus_isolated() -> Graph {
        Graph::from_edge_list(4, &[(0, 1), (0, 2), (1, 2)]).unwrap()
    }

    #[test]
    fn add_keeps_sorted_order() {
        let g = triangle_plus_isolated();
        let mut c = Clique::new(&g);
        c.add(2);
        c.add(0);
        c.add(1);
        assert_eq!(c.members(), &[0, 1, 2]);
        assert!(c.contains(1));
        assert!(!c.contains(3));
    }

    #[test]
    #[should_panic(expected = "not adjacent")]
    fn add_non_adjacent_panics() {
        let g = triangle_plus_isolated();
        let mut c = Clique::new(&g);
        c.add(0);
        c.add(3); // isolated vertex
    }

    #[test]
    #[should_panic(expected = "added twice")]
    fn duplicate_add_panics() {
        let g = triangle_plus_isolated();
        let mut c = Clique::new(&g);
        c.add(0);
        c.add(0);
    }

    #[test]
    fn remove_and_clear() {
        let g = triangle_plus_isolated();
        let mut c = Clique::new(&g);
        c.add(0);
        c.add(1);
        c.remove(0);
        assert_eq!(c.members(), &[1]);
        c.clear();
        assert!(c.is_empty());
        assert!(!c.contains(1));
    }
}
