//! Error taxonomy for graph loading and validation.
//!
//! All fatal conditions surface *before* the search starts; the search loop
//! itself never returns an error — invariant violations there are bugs and
//! panic via `assert!`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliqueError {
    /// File could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or unsupported DIMACS text; raised before any graph exists.
    #[error("format error: {0}")]
    Format(String),

    /// Edge endpoint outside `[0, limit)`; raised at graph construction.
    #[error("vertex {vertex} out of range 0..{limit}")]
    Range { vertex: usize, limit: usize },

    /// Structural invariant violated after load (asymmetry, self-loop,
    /// degenerate matrix, degree-sum mismatch).
    #[error("consistency error: {0}")]
    Consistency(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_message_names_bounds() {
        let e = CliqueError::Range { vertex: 9, limit: 5 };
        assert_eq!(e.to_string(), "vertex 9 out of range 0..5");
    }
}
