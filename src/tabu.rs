//! Move legality: the prohibition (tabu) mechanism with an adaptive period.
//!
//! The search loop is written against the [`MoveFilter`] trait so the greedy
//! and tabu variants share one loop. [`Unrestricted`] allows everything;
//! [`TabuList`] forbids recently moved vertices and adapts its prohibition
//! period from a history of visited clique configurations.

use std::collections::HashMap;

use crate::clique::Clique;

/// Decides which candidate moves are legal and reacts to search events.
pub trait MoveFilter {
    /// May vertex `v` be added or dropped at iteration `time`?
    fn allows(&self, v: usize, time: usize) -> bool;

    /// Note that `v` was just added or dropped at iteration `time`.
    fn record_move(&mut self, v: usize, time: usize);

    /// Has `v` never been moved? Used to prefer fresh seeds after a restart.
    fn never_moved(&self, v: usize) -> bool;

    /// The search just restarted at iteration `time`.
    fn on_restart(&mut self, time: usize);

    /// Called once per iteration, after moves and any restart were applied.
    fn update_period(&mut self, clique: &Clique<'_>, time: usize, best_size: usize);
}

/// Trivial filter: every move is always legal. Turns the shared loop into
/// the plain greedy add/drop heuristic.
#[derive(Clone, Debug, Default)]
pub struct Unrestricted;

impl MoveFilter for Unrestricted {
    #[inline]
    fn allows(&self, _v: usize, _time: usize) -> bool {
        true
    }
    fn record_move(&mut self, _v: usize, _time: usize) {}
    #[inline]
    fn never_moved(&self, _v: usize) -> bool {
        true
    }
    fn on_restart(&mut self, _time: usize) {}
    fn update_period(&mut self, _clique: &Clique<'_>, _time: usize, _best_size: usize) {}
}

/// Per-vertex cooldown with a rolling, self-adjusting prohibition period.
#[derive(Clone, Debug)]
pub struct TabuList {
    /// Iteration a vertex was last added or dropped; `None` = never moved.
    last_moved: Vec<Option<usize>>,
    prohibit_period: usize,
    time_prohibit_changed: usize,
    /// Visited clique configurations, keyed by the full sorted-member
    /// signature (collision-safe), mapped to the iteration last seen.
    /// Cleared on restart, which also bounds its growth.
    history: HashMap<Vec<usize>, usize>,
    n: usize,
}

impl TabuList {
    pub fn new(n: usize) -> Self {
        Self {
            last_moved: vec![None; n],
            prohibit_period: 1,
            time_prohibit_changed: 0,
            history: HashMap::new(),
            n,
        }
    }

    #[inline]
    pub fn prohibit_period(&self) -> usize {
        self.prohibit_period
    }
}

impl MoveFilter for TabuList {
    /// Legal iff the cooldown has fully elapsed; never-moved vertices are
    /// always legal.
    #[inline]
    fn allows(&self, v: usize, time: usize) -> bool {
        match self.last_moved[v] {
            None => true,
            Some(moved) => time > moved + self.prohibit_period,
        }
    }

    fn record_move(&mut self, v: usize, time: usize) {
        self.last_moved[v] = Some(time);
    }

    #[inline]
    fn never_moved(&self, v: usize) -> bool {
        self.last_moved[v].is_none()
    }

    fn on_restart(&mut self, time: usize) {
        self.history.clear();
        self.prohibit_period = 1;
        self.time_prohibit_changed = time;
    }

    /// Adapt the prohibition period from the revisit history.
    ///
    /// A revisit of the current configuration within `2n - 1` iterations
    /// means the search is cycling: escalate the period by 1, capped at
    /// `2 * best_size`. If the period has not changed for more than
    /// `10 * best_size` iterations, relax it by 1, floored at 1.
    fn update_period(&mut self, clique: &Clique<'_>, time: usize, best_size: usize) {
        let signature: Vec<usize> = clique.members().to_vec();

        let mut cycling = false;
        if let Some(last_seen) = self.history.get_mut(&signature) {
            if time - *last_seen < 2 * self.n - 1 {
                cycling = true;
            }
            *last_seen = time;
        } else {
            self.history.insert(signature, time);
        }

        if cycling {
            self.prohibit_period = (self.prohibit_period + 1).min(2 * best_size);
            self.time_prohibit_changed = time;
        } else if self.prohibit_period > 1
            && time - self.time_prohibit_changed > 10 * best_size
        {
            self.prohibit_period -= 1;
            self.time_prohibit_changed = time;
        }
    }
}

/*────────────────── tests ──────────────────*/
