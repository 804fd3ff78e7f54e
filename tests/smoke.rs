use std::io::Cursor;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tabuclique::{dimacs, solve_tabu, CliqueError, Params};

/// K5 in DIMACS text, with comments and a blank line mixed in.
const K5: &[u8] = b"c complete graph on 5 vertices\n\np edge 5 10\n\
e 1 2\ne 1 3\ne 1 4\ne 1 5\ne 2 3\ne 2 4\ne 2 5\ne 3 4\ne 3 5\ne 4 5\n";

#[test]
fn smoke_k5_end_to_end() {
    dimacs::validate(Cursor::new(K5)).unwrap();
    let g = dimacs::parse(Cursor::new(K5)).unwrap();
    g.validate().unwrap_err(); // K5 is degenerate (all-true) by design of the check

    let p = Params { max_time: 20, ..Params::default() };
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let sol = solve_tabu(&g, &p, &mut rng);
    assert_eq!(sol.best, vec![0, 1, 2, 3, 4]);
}

#[test]
fn smoke_brockish_fragment() {
    // K5 minus the (1,2) edge plus a pendant vertex: maximum clique is
    // {0,1,3,4} or {0,2,3,4}, size 4.
    let text = b"p edge 6 10\n\
e 1 2\ne 1 3\ne 1 4\ne 1 5\ne 2 4\ne 2 5\ne 3 4\ne 3 5\ne 4 5\ne 5 6\n";
    dimacs::validate(Cursor::new(&text[..])).unwrap();
    let g = dimacs::parse(Cursor::new(&text[..])).unwrap();
    g.validate().unwrap();

    let p = Params { max_time: 500, ..Params::default() };
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let sol = solve_tabu(&g, &p, &mut rng);
    assert_eq!(sol.best_size(), 4);
}

#[test]
fn smoke_rejects_unknown_line() {
    let bad = b"p edge 3 1\nx 1 2\n";
    let err = dimacs::validate(Cursor::new(&bad[..])).unwrap_err();
    assert!(matches!(err, CliqueError::Format(_)));
}
