//! Parameter bundle for the clique search.
//!
//! The random seed is deliberately *not* in here: callers construct the RNG
//! themselves and pass it down, so independent runs stay reproducible and
//! can share nothing.

/// All tunable controls for one search run.
#[derive(Clone, Debug)]
pub struct Params {
    /// Iteration budget; the dominant termination condition.
    pub max_time: usize,

    /// Early-stop clique size; `None` means the vertex count of the graph
    /// (practically unreachable, so `max_time` decides).
    pub target_clique_size: Option<usize>,

    /// Restart fires after `restart_multiplier * best_size` iterations
    /// without improvement (and at least that long since the last restart).
    pub restart_multiplier: usize,

    /// Fixed first clique member; `None` picks a random vertex. Mostly for
    /// tests that need a known starting point.
    pub start_vertex: Option<usize>,
}

impl Default for Params {
    fn default() -> Self {
        Params {
            max_time: 25_000,
            target_clique_size: None,
            restart_multiplier: 2,
            start_vertex: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params() {
        let p = Params::default();
        assert_eq!(p.max_time, 25_000);
        assert_eq!(p.target_clique_size, None);
        assert_eq!(p.restart_multiplier, 2);
        assert_eq!(p.start_vertex, None);
    }
}
