//! CLI command implementations.

use std::io::{BufRead, Write};
use std::path::Path;

use crate::engine::QueryEngine;
use crate::format::read_line_lossy;
use crate::graph::RouteMap;
use crate::types::{MapError, MapResult, QUIT_COMMAND};

/// Prompt shown before each interactive query.
pub const PROMPT: &str = "Enter origin and destination (quit to exit): ";

/// One line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryLine {
    /// The quit sentinel.
    Quit,
    /// Origin and destination identifiers.
    Route(String, String),
    /// Nothing but whitespace.
    Empty,
    /// Wrong number of tokens (the count is kept for the message).
    Invalid(usize),
}

/// Interpret one line typed at the prompt.
pub fn parse_query_line(line: &str) -> QueryLine {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => QueryLine::Empty,
        [cmd] if *cmd == QUIT_COMMAND => QueryLine::Quit,
        [origin, destination] => {
            QueryLine::Route((*origin).to_string(), (*destination).to_string())
        }
        _ => QueryLine::Invalid(tokens.len()),
    }
}

/// Run the interactive query loop until `quit` or end of input.
///
/// Unknown cities and malformed lines are reported and the loop continues.
/// Input that is not UTF-8 is decoded lossily, so it can only ever surface
/// as an unknown city.
pub fn cmd_query(
    map: &mut RouteMap,
    mut input: impl BufRead,
    out: &mut impl Write,
    json: bool,
) -> MapResult<()> {
    let engine = QueryEngine::new();
    let mut buf = Vec::new();

    loop {
        if !json {
            write!(out, "{}", PROMPT)?;
            out.flush()?;
        }
        let line = match read_line_lossy(&mut input, &mut buf)? {
            Some(line) => line,
            None => break,
        };

        match parse_query_line(&line) {
            QueryLine::Quit => break,
            QueryLine::Empty => continue,
            QueryLine::Invalid(count) => {
                let msg = format!("Expected two cities, got {} tokens", count);
                write_error(out, &msg, json)?;
            }
            QueryLine::Route(origin, destination) => {
                match engine.is_connected(map, &origin, &destination) {
                    Ok(answer) if json => writeln!(out, "{}", serde_json::json!(answer))?,
                    Ok(answer) => writeln!(out, "{}", answer)?,
                    Err(e @ MapError::UnknownCity(_)) => write_error(out, &e.to_string(), json)?,
                    Err(e) => return Err(e),
                }
            }
        }
    }

    if !json {
        writeln!(out, "Normal exit.")?;
    }
    Ok(())
}

/// Answer a single query and print the result.
pub fn cmd_check(
    path: &Path,
    origin: &str,
    destination: &str,
    out: &mut impl Write,
    json: bool,
) -> MapResult<()> {
    let mut map = RouteMap::load(path)?;
    let answer = QueryEngine::new().is_connected(&mut map, origin, destination)?;

    if json {
        writeln!(out, "{}", serde_json::json!(answer))?;
    } else {
        writeln!(out, "{}", answer)?;
    }
    Ok(())
}

/// Print every city reachable from `origin`.
pub fn cmd_reach(path: &Path, origin: &str, out: &mut impl Write, json: bool) -> MapResult<()> {
    let mut map = RouteMap::load(path)?;
    let result = QueryEngine::new().reachable_from(&mut map, origin)?;

    if json {
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_default()
        )?;
    } else {
        writeln!(
            out,
            "{} cities reachable from {}:",
            result.reachable.len(),
            result.origin
        )?;
        for name in &result.reachable {
            writeln!(out, "  {}", name)?;
        }
    }
    Ok(())
}

/// Display information about a map file.
pub fn cmd_info(path: &Path, out: &mut impl Write, json: bool) -> MapResult<()> {
    let map = RouteMap::load(path)?;
    let graph = map.graph();

    if json {
        let nodes: Vec<serde_json::Value> = graph
            .nodes()
            .iter()
            .map(|n| {
                let neighbours: Vec<&str> = n
                    .neighbours()
                    .iter()
                    .filter_map(|&i| graph.node(i).map(|m| m.name()))
                    .collect();
                serde_json::json!({
                    "index": n.index(),
                    "name": n.name(),
                    "neighbours": neighbours,
                })
            })
            .collect();
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "cities": nodes,
        });
        writeln!(
            out,
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        )?;
    } else {
        writeln!(out, "File: {}", path.display())?;
        writeln!(out, "Nodes: {}", graph.node_count())?;
        writeln!(out, "Edges: {}", graph.edge_count())?;
        for node in graph.nodes() {
            writeln!(out, "Node {}: {}", node.index(), node.name())?;
        }
    }
    Ok(())
}

fn write_error(out: &mut impl Write, msg: &str, json: bool) -> MapResult<()> {
    if json {
        writeln!(out, "{}", serde_json::json!({ "error": msg }))?;
    } else {
        writeln!(out, "{}", msg)?;
    }
    Ok(())
}
