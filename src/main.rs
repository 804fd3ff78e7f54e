//! CLI entry point: validate and load a DIMACS graph, run the tabu search,
//! report the best clique found.
//!
//! Usage: tabuclique <graph.clq> [max_time] [seed] [out_file]
//! Set RUST_LOG=debug to trace individual add/drop moves.

use std::fs::File;
use std::process::ExitCode;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use tabuclique::{dimacs, report, Params};

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: {} <graph.clq> [max_time] [seed] [out_file]", args[0]);
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let path = &args[1];
    let max_time: usize = match args.get(2) {
        Some(s) => s.parse()?,
        None => Params::default().max_time,
    };
    let seed: u64 = match args.get(3) {
        Some(s) => s.parse()?,
        None => 0,
    };

    let graph = dimacs::load_graph(path)?;
    println!("graph loaded and validated");

    let p = Params { max_time, ..Params::default() };
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let result = tabuclique::solve_tabu(&graph, &p, &mut rng);

    report::print_summary(&graph, &result);

    if let Some(out_path) = args.get(4) {
        let file = File::create(out_path)?;
        report::write_clique(file, &result)?;
        println!("clique written to {out_path}");
    }
    Ok(())
}
