//! Undirected graph stored as an adjacency BitVec per row, with a per-vertex
//! degree cache. Immutable once constructed; the search only ever reads it.

use bitvec::prelude::*;

use crate::error::CliqueError;

#[derive(Clone, Debug)]
pub struct Graph {
    /// Row-major adjacency; `adj[i][j]` is 1 ⇔ edge (i,j) exists, j≠i.
    adj: Vec<BitVec>,
    /// Cached `adj[v].count_ones()`.
    degrees: Vec<usize>,
    /// Edge count derived from the matrix (each edge counted once).
    num_edges: usize,
}

impl Graph {
    /*────────── constructor ──────────*/

    /// Build from an explicit edge list (0-based indices, undirected).
    ///
    /// Out-of-range endpoints and self-loops are rejected here, once, so the
    /// adjacency queries on the hot path never have to re-check them.
    pub fn from_edge_list(n: usize, edges: &[(usize, usize)]) -> Result<Self, CliqueError> {
        let mut rows: Vec<BitVec> = (0..n).map(|_| bitvec![0; n]).collect();
        for &(u, v) in edges {
            for w in [u, v] {
                if w >= n {
                    return Err(CliqueError::Range { vertex: w, limit: n });
                }
            }
            if u == v {
                return Err(CliqueError::Consistency(format!("self-loop at vertex {u}")));
            }
            rows[u].set(v, true);
            rows[v].set(u, true);
        }

        let degrees: Vec<usize> = rows.iter().map(|r| r.count_ones()).collect();
        let num_edges = degrees.iter().sum::<usize>() / 2;
        Ok(Self { adj: rows, degrees, num_edges })
    }

    /*────────── getters ──────────*/

    #[inline]
    pub fn n(&self) -> usize {
        self.adj.len()
    }

    /// Number of edges (each counted once).
    #[inline]
    pub fn m(&self) -> usize {
        self.num_edges
    }

    /// Degree of vertex v (precomputed).
    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.degrees[v]
    }

    /// Symmetric adjacency test; false on the diagonal.
    #[inline]
    pub fn are_adjacent(&self, a: usize, b: usize) -> bool {
        self.adj[a][b]
    }

    /// Immutable row slice for adjacency of v.
    #[inline]
    pub fn neigh_row(&self, v: usize) -> &BitSlice {
        &self.adj[v]
    }

    /*────────── post-load sanity checks ──────────*/

    /// Structural validation, run once before the search ever starts.
    ///
    /// Checks symmetry, a zero diagonal, that the matrix is neither all-false
    /// nor all-true off the diagonal, and that the degree cache agrees with
    /// the matrix (`Σ degrees == 2m == #set bits`).
    pub fn validate(&self) -> Result<(), CliqueError> {
        let n = self.n();
        for i in 0..n {
            if self.adj[i][i] {
                return Err(CliqueError::Consistency(format!(
                    "diagonal entry set at vertex {i}"
                )));
            }
            for j in self.adj[i].iter_ones() {
                if !self.adj[j][i] {
                    return Err(CliqueError::Consistency(format!(
                        "adjacency not symmetric at ({i},{j})"
                    )));
                }
            }
        }

        let set_bits: usize = self.adj.iter().map(|r| r.count_ones()).sum();
        let max_off_diag = n * n.saturating_sub(1);
        if n > 1 && set_bits == 0 {
            return Err(CliqueError::Consistency("adjacency matrix is all false".into()));
        }
        if n > 1 && set_bits == max_off_diag {
            return Err(CliqueError::Consistency("adjacency matrix is all true".into()));
        }

        let degree_sum: usize = self.degrees.iter().sum();
        if degree_sum != set_bits || degree_sum != 2 * self.num_edges {
            return Err(CliqueError::Consistency(format!(
                "degree sum {degree_sum} disagrees with matrix ({set_bits} set bits, {} edges)",
                self.num_edges
            )));
        }
        Ok(())
    }
}

/// Adjacency-list dump, one `v: neighbours…` line per vertex.
impl std::fmt::Display for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.n() {
            write!(f, "{i}:")?;
            for j in self.adj[i].iter_ones() {
                write!(f, " {j}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/*────────────────── tests ──────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliqueError;

    #[test]
    fn tiny_triangle() {
        let g = Graph::from_edge_list(3, &[(0, 1), (0, 2), (1, 2)]).unwrap();
        assert_eq!(g.n(), 3);
        assert_eq!(g.m(), 3);
        assert!(g.are_adjacent(0, 2) && g.are_adjacent(2, 0));
        assert!(!g.are_adjacent(1, 1));
        assert_eq!(g.degree(1), 2);
    }

    #[test]
    fn duplicate_edges_collapse() {
        let g = Graph::from_edge_list(3, &[(0, 1), (1, 0), (0, 1)]).unwrap();
        assert_eq!(g.m(), 1);
        assert_eq!(g.degree(0), 1);
    }

    #[test]
    fn out_of_range_endpoint_rejected() {
        let err = Graph::from_edge_list(3, &[(0, 3)]).unwrap_err();
        assert!(matches!(err, CliqueError::Range { vertex: 3, limit: 3 }));
    }

    #[test]
    fn self_loop_rejected() {
        let err = Graph::from_edge_list(3, &[(1, 1)]).unwrap_err();
        assert!(matches!(err, CliqueError::Consistency(_)));
    }

    #[test]
    fn degenerate_matrices_fail_validation() {
        let empty = Graph::from_edge_list(4, &[]).unwrap();
        assert!(empty.validate().is_err());

        // K3 is all-true off the diagonal.
        let full = Graph::from_edge_list(3, &[(0, 1), (0, 2), (1, 2)]).unwrap();
        assert!(full.validate().is_err());

        let ok = Graph::from_edge_list(4, &[(0, 1), (1, 2)]).unwrap();
        ok.validate().unwrap();
    }

    #[test]
    fn display_lists_neighbours() {
        let g = Graph::from_edge_list(3, &[(0, 2)]).unwrap();
        assert_eq!(g.to_string(), "0: 2\n1:\n2: 0\n");
    }
}
