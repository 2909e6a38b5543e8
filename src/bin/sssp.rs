//! Reference stdin/stdout driver for the solver. Not part of the library's
//! public API: a thin textual harness for manual testing and scripting.
//!
//! Input format:
//! ```text
//! n m
//! u1 v1 w1
//! ...
//! um vm wm
//! s
//! ```
//! Output: one line per vertex `0..n`, the shortest distance from `s`, or
//! `INF` if unreachable.

use std::io::{self, BufRead, Write};
use std::process;

use bmssp_sssp::{DirectedGraph, MutableGraph, Solver};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("sssp: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let header = next_line(&mut lines)?;
    let mut header_parts = header.split_whitespace();
    let n: usize = parse_token(header_parts.next(), "vertex count")?;
    let m: usize = parse_token(header_parts.next(), "edge count")?;

    let mut graph = DirectedGraph::with_capacity(n);
    for edge_index in 0..m {
        let line = next_line(&mut lines)
            .map_err(|e| format!("edge {edge_index}: {e}"))?;
        let mut parts = line.split_whitespace();
        let u: usize = parse_token(parts.next(), "edge source")?;
        let v: usize = parse_token(parts.next(), "edge target")?;
        let w: f64 = parse_token(parts.next(), "edge weight")?;
        graph.add_edge(u, v, w);
    }

    let source_line = next_line(&mut lines)?;
    let source: usize = parse_token(source_line.split_whitespace().next(), "source vertex")?;

    let solver = Solver::new(graph).map_err(|e| e.to_string())?;
    let distances = solver.solve(source).map_err(|e| e.to_string())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for dist in distances {
        if dist.is_infinite() {
            writeln!(out, "INF").map_err(|e| e.to_string())?;
        } else {
            writeln!(out, "{dist}").map_err(|e| e.to_string())?;
        }
    }
    Ok(())
}

fn next_line(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<String, String> {
    lines
        .next()
        .ok_or_else(|| "unexpected end of input".to_string())?
        .map_err(|e| format!("failed to read line: {e}"))
}

fn parse_token<T: std::str::FromStr>(token: Option<&str>, what: &str) -> Result<T, String> {
    token
        .ok_or_else(|| format!("missing {what}"))?
        .parse()
        .map_err(|_| format!("malformed {what}"))
}
