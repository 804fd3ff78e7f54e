//! The add/drop/kick/restart local-search loop.
//!
//! Each iteration either grows the clique by the best legal extension,
//! shrinks it by the member most in the way of future extensions, or — when
//! every member is tabu — kicks a random member out. Stagnation triggers a
//! restart from a fresh seed vertex. One loop serves both the greedy and the
//! tabu variant via the [`MoveFilter`] parameter.

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::candidate::{one_missing, possible_add};
use crate::clique::Clique;
use crate::graph::Graph;
use crate::params::Params;
use crate::tabu::{MoveFilter, TabuList, Unrestricted};

/// Outcome of one search run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// Largest clique observed, ascending vertex ids.
    pub best: Vec<usize>,
    /// Iteration at which `best` was reached.
    pub found_at: usize,
    /// Iterations actually executed.
    pub iterations: usize,
    /// Restarts triggered.
    pub restarts: usize,
}

impl SearchResult {
    #[inline]
    pub fn best_size(&self) -> usize {
        self.best.len()
    }
}

/// Run the search with the adaptive tabu filter.
pub fn solve_tabu<R>(graph: &Graph, p: &Params, rng: &mut R) -> SearchResult
where
    R: Rng + ?Sized,
{
    let mut filter = TabuList::new(graph.n());
    solve(graph, p, &mut filter, rng)
}

/// Run the search with every move always legal (plain greedy heuristic).
pub fn solve_greedy<R>(graph: &Graph, p: &Params, rng: &mut R) -> SearchResult
where
    R: Rng + ?Sized,
{
    let mut filter = Unrestricted;
    solve(graph, p, &mut filter, rng)
}

/// The shared state machine. Runs until the iteration budget is exhausted or
/// the target clique size is reached, whichever comes first (both checked at
/// loop top only).
pub fn solve<F, R>(graph: &Graph, p: &Params, filter: &mut F, rng: &mut R) -> SearchResult
where
    F: MoveFilter,
    R: Rng + ?Sized,
{
    let n = graph.n();
    if n == 0 {
        return SearchResult { best: Vec::new(), found_at: 0, iterations: 0, restarts: 0 };
    }
    let target = p.target_clique_size.unwrap_or(n);

    let mut clique = Clique::new(graph);
    let seed = match p.start_vertex {
        Some(v) => {
            assert!(v < n, "start vertex {v} out of range");
            v
        }
        None => rng.gen_range(0..n),
    };
    debug!("seeding with vertex {seed}");
    clique.add(seed);

    let mut best: Vec<usize> = clique.members().to_vec();
    let mut best_size = best.len();
    let mut found_at = 0usize;
    let mut time_last_restart = 0usize;
    let mut restarts = 0usize;
    let mut time = 0usize;

    while time < p.max_time && best_size < target {
        time += 1;

        let add_candidates = possible_add(graph, &clique);
        let drop_scores = one_missing(graph, &clique);

        let legal_adds: Vec<usize> = add_candidates
            .iter()
            .copied()
            .filter(|&v| filter.allows(v, time))
            .collect();

        if !legal_adds.is_empty() {
            // Growing.
            let v = pick_vertex_to_add(graph, &add_candidates, &legal_adds, rng);
            debug!("adding vertex {v}");
            clique.add(v);
            filter.record_move(v, time);
            if clique.len() > best_size {
                best_size = clique.len();
                best = clique.members().to_vec();
                found_at = time;
                info!("new best clique of size {best_size} at iteration {time}");
            }
        } else if !clique.is_empty() {
            let any_legal_drop = clique
                .members()
                .iter()
                .any(|&v| filter.allows(v, time));
            let v = if any_legal_drop {
                // Shrinking: scored over *all* members, as in the original
                // heuristic; the legal subset only gates whether a scored
                // drop happens at all.
                pick_vertex_to_drop(graph, &clique, &drop_scores, rng)
            } else {
                // Kicking: every member is tabu, force a random drop.
                *clique
                    .members()
                    .choose(rng)
                    .expect("non-empty clique")
            };
            debug!("dropping vertex {v}");
            clique.remove(v);
            filter.record_move(v, time);
        }

        let restart_after = p.restart_multiplier * best_size;
        if time - found_at > restart_after && time - time_last_restart > restart_after {
            restarts += 1;
            time_last_restart = time;
            info!("restart #{restarts} at iteration {time}");
            clique.clear();
            filter.on_restart(time);

            let fresh: Vec<usize> = (0..n).filter(|&v| filter.never_moved(v)).collect();
            let seed = match fresh.choose(rng) {
                Some(&v) => v,
                None => rng.gen_range(0..n),
            };
            debug!("reseeding with vertex {seed}");
            clique.add(seed);
        }

        filter.update_period(&clique, time, best_size);
    }

    SearchResult { best, found_at, iterations: time, restarts }
}

/// Best extension: the legal candidate with the most neighbours inside the
/// *full* candidate set (not just the legal subset), ties uniform at random.
fn pick_vertex_to_add<R>(
    graph: &Graph,
    candidates: &[usize],
    legal: &[usize],
    rng: &mut R,
) -> usize
where
    R: Rng + ?Sized,
{
    if legal.len() == 1 {
        return legal[0];
    }

    let score = |v: usize| {
        candidates
            .iter()
            .filter(|&&u| u != v && graph.are_adjacent(u, v))
            .count()
    };

    let mut best_score = 0usize;
    let mut ties: Vec<usize> = Vec::new();
    for &v in legal {
        let s = score(v);
        if s > best_score || ties.is_empty() {
            best_score = s;
            ties.clear();
            ties.push(v);
        } else if s == best_score {
            ties.push(v);
        }
    }
    *ties.choose(rng).expect("legal add candidates")
}

/// Worst member: the one *not* adjacent to the most `one_missing` vertices,
/// i.e. the member blocking the most near-extensions. Ties uniform at random.
fn pick_vertex_to_drop<R>(
    graph: &Graph,
    clique: &Clique<'_>,
    one_missing: &[usize],
    rng: &mut R,
) -> usize
where
    R: Rng + ?Sized,
{
    let members = clique.members();
    if members.len() == 1 {
        return members[0];
    }

    let score = |u: usize| {
        one_missing
            .iter()
            .filter(|&&w| !graph.are_adjacent(u, w))
            .count()
    };

    let mut best_score = 0usize;
    let mut ties: Vec<usize> = Vec::new();
    for &u in members {
        let s = score(u);
        if s > best_score || ties.is_empty() {
            best_score = s;
            ties.clear();
            ties.push(u);
        } else if s == best_score {
            ties.push(u);
        }
    }
    *ties.choose(rng).expect("non-empty clique")
}

/*────────────────── tests ──────────────────*/
