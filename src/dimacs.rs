//! DIMACS *.clq loader: a strict validation pass over the raw text plus the
//! actual parse. The search core never touches file handles; it gets a
//! ready-made [`Graph`] from [`load_graph`].
//!
//! Recognised lines: `c …` comments, exactly one `p <name> <n> <m>` header,
//! and `e <a> <b>` edges with 1-based endpoints. Anything else is a
//! [`CliqueError::Format`].

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::CliqueError;
use crate::graph::Graph;

/// Check the raw text before any graph object exists.
///
/// Rejects unknown line prefixes, wrong token counts, non-integer or negative
/// fields, and a missing or repeated `p` header. Never constructs a graph.
pub fn validate<R: Read>(reader: R) -> Result<(), CliqueError> {
    let mut p_lines = 0usize;

    for line in BufReader::new(reader).lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens[0] {
            "p" => {
                p_lines += 1;
                if p_lines > 1 {
                    return Err(CliqueError::Format("more than one p line".into()));
                }
                if tokens.len() != 4 {
                    return Err(CliqueError::Format(format!("malformed p line: {line}")));
                }
                for field in &tokens[2..4] {
                    let value: i64 = field.parse().map_err(|_| {
                        CliqueError::Format(format!("cannot parse p line: {line}"))
                    })?;
                    if value < 0 {
                        return Err(CliqueError::Format(format!(
                            "negative count in p line: {line}"
                        )));
                    }
                }
            }
            "e" => {
                if tokens.len() != 3 {
                    return Err(CliqueError::Format(format!("malformed e line: {line}")));
                }
                for field in &tokens[1..3] {
                    let value: i64 = field.parse().map_err(|_| {
                        CliqueError::Format(format!("cannot parse e line: {line}"))
                    })?;
                    if value < 1 {
                        return Err(CliqueError::Format(format!(
                            "edge endpoint below 1 in line: {line}"
                        )));
                    }
                }
            }
            _ => {
                return Err(CliqueError::Format(format!("unknown line type: {line}")));
            }
        }
    }

    if p_lines == 0 {
        return Err(CliqueError::Format("missing p line".into()));
    }
    Ok(())
}

/// Parse DIMACS text into a [`Graph`] (1-based endpoints become 0-based).
///
/// Assumes [`validate`] has accepted the text; still fails cleanly on inputs
/// it would have rejected. Out-of-range endpoints surface as
/// [`CliqueError::Range`] from graph construction.
pub fn parse<R: Read>(reader: R) -> Result<Graph, CliqueError> {
    let mut n: Option<usize> = None;
    let mut edges: Vec<(usize, usize)> = Vec::new();

    for line in BufReader::new(reader).lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens[0] {
            "p" if tokens.len() == 4 => {
                let nodes: usize = tokens[2]
                    .parse()
                    .map_err(|_| CliqueError::Format(format!("cannot parse p line: {line}")))?;
                n = Some(nodes);
            }
            "e" if tokens.len() == 3 => {
                if n.is_none() {
                    return Err(CliqueError::Format("e line before p line".into()));
                }
                let a: usize = tokens[1]
                    .parse()
                    .map_err(|_| CliqueError::Format(format!("cannot parse e line: {line}")))?;
                let b: usize = tokens[2]
                    .parse()
                    .map_err(|_| CliqueError::Format(format!("cannot parse e line: {line}")))?;
                if a < 1 || b < 1 {
                    return Err(CliqueError::Format(format!(
                        "edge endpoint below 1 in line: {line}"
                    )));
                }
                edges.push((a - 1, b - 1));
            }
            _ => {
                return Err(CliqueError::Format(format!("unknown line type: {line}")));
            }
        }
    }

    let n = n.ok_or_else(|| CliqueError::Format("missing p line".into()))?;
    Graph::from_edge_list(n, &edges)
}

/// Read a graph file: validate the text, parse it, then run the structural
/// sanity checks. The only entry point the binary uses.
pub fn load_graph<P: AsRef<Path>>(path: P) -> Result<Graph, CliqueError> {
    let mut text = String::new();
    File::open(path)?.read_to_string(&mut text)?;

    validate(text.as_bytes())?;
    let graph = parse(text.as_bytes())?;
    graph.validate()?;
    Ok(graph)
}

/*────────────────── tests ──────────────────*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const TRIANGLE: &[u8] = b"c tiny test graph\np edge 3 3\ne 1 2\ne 1 3\ne 2 3\n";

    #[test]
    fn parses_triangle() {
        validate(Cursor::new(TRIANGLE)).unwrap();
        let g = parse(Cursor::new(TRIANGLE)).unwrap();
        assert_eq!(g.n(), 3);
        assert_eq!(g.m(), 3);
        assert!(g.are_adjacent(0, 1));
    }

    #[test]
    fn unknown_prefix_rejected() {
        let bad = b"p edge 3 1\nx 1 2\n";
        let err = validate(Cursor::new(bad)).unwrap_err();
        assert!(matches!(err, CliqueError::Format(_)));
    }

    #[test]
    fn malformed_token_counts_rejected() {
        assert!(validate(Cursor::new(b"p edge 3\n")).is_err());
        assert!(validate(Cursor::new(b"p edge 3 3\ne 1\n")).is_err());
        assert!(validate(Cursor::new(b"p edge 3 3\ne 1 2 3\n")).is_err());
    }

    #[test]
    fn negative_counts_rejected() {
        let err = validate(Cursor::new(b"p edge -3 1\n")).unwrap_err();
        assert!(matches!(err, CliqueError::Format(_)));
    }

    #[test]
    fn non_integer_fields_rejected() {
        assert!(validate(Cursor::new(b"p edge three 3\n")).is_err());
        assert!(validate(Cursor::new(b"p edge 3 3\ne one 2\n")).is_err());
    }

    #[test]
    fn missing_or_repeated_p_line_rejected() {
        assert!(validate(Cursor::new(b"e 1 2\n")).is_err());
        assert!(validate(Cursor::new(b"p edge 2 1\np edge 2 1\ne 1 2\n")).is_err());
    }

    #[test]
    fn out_of_range_endpoint_is_range_error() {
        let bad = b"p edge 3 1\ne 1 9\n";
        let err = parse(Cursor::new(bad)).unwrap_err();
        assert!(matches!(err, CliqueError::Range { vertex: 8, limit: 3 }));
    }

    #[test]
    fn comments_and_blank_lines_ignored() {
        let text = b"c header\n\nc another\np edge 2 1\ne 1 2\n";
        validate(Cursor::new(text)).unwrap();
        let g = parse(Cursor::new(text)).unwrap();
        assert_eq!(g.m(), 1);
    }
}
