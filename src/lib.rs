//! Tabu local-search heuristic for the maximum clique problem.
//!
//! Loads a DIMACS *.clq graph, then repeatedly grows and shrinks a single
//! candidate clique under a prohibition (tabu) rule with an adaptive period,
//! restarting on stagnation. Bounded-time heuristic; no optimality guarantee.

/*───────── internal modules ─────────*/
pub mod candidate;
pub mod clique;
pub mod dimacs;
pub mod error;
pub mod graph;
pub mod params;
pub mod report;
pub mod search;
pub mod tabu;

/*───────── re-exports ─────────*/
pub use clique::Clique;
pub use error::CliqueError;
pub use graph::Graph;
pub use params::Params;
pub use search::{solve, solve_greedy, solve_tabu, SearchResult};
pub use tabu::{MoveFilter, TabuList, Unrestricted};
