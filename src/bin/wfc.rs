//! Example driver: runs the solver over a built-in sample (or a JSON sample
//! file given as the first argument) and prints the result as plain text.
//! Colorized rendering belongs to an external collaborator, not this crate.

use std::collections::BTreeMap;
use std::{env, fs, process};

use tiled_wfc::{wave_function, Grid, WfcError};

const DEFAULT_AREA: usize = 1024;
const MAX_AREA: usize = 1_000_000;

/// Validates a CLI-supplied area string, rejecting anything that doesn't
/// parse as a `usize` or that exceeds a sane upper bound for a demo run.
fn parse_area(raw: &str) -> Result<usize, String> {
    let area: usize = raw
        .parse()
        .map_err(|_| format!("invalid area {raw:?}: not a non-negative integer"))?;
    if area > MAX_AREA {
        return Err(WfcError::InvalidArea { area }.to_string());
    }
    Ok(area)
}

fn default_sample() -> Vec<Vec<String>> {
    [["L", "L", "L"], ["L", "L", "C"], ["L", "C", "S"], ["C", "S", "S"]]
        .into_iter()
        .map(|row| row.into_iter().map(String::from).collect())
        .collect()
}

fn load_sample(path: &str) -> Result<Vec<Vec<String>>, String> {
    let contents = fs::read_to_string(path).map_err(|e| format!("reading {path}: {e}"))?;
    serde_json::from_str(&contents).map_err(|e| format!("parsing {path}: {e}"))
}

fn code_for(label: &str) -> &str {
    match label {
        "LAND" => "L",
        "COAST" => "C",
        "SEA" => "S",
        other => other,
    }
}

fn render(grid: &Grid) {
    for row in grid.to_label_rows() {
        let line: Vec<&str> = row.iter().map(|label| code_for(label)).collect();
        println!("{}", line.join(" "));
    }
}

fn histogram(grid: &Grid) -> BTreeMap<String, usize> {
    let mut totals = BTreeMap::new();
    for row in grid.to_label_rows() {
        for label in row {
            *totals.entry(label).or_insert(0) += 1;
        }
    }
    totals
}

fn main() {
    env_logger::init();

    let sample = match env::args().nth(1) {
        Some(path) => match load_sample(&path) {
            Ok(sample) => sample,
            Err(err) => {
                eprintln!("error: {err}");
                process::exit(1);
            }
        },
        None => default_sample(),
    };

    let area = match env::args().nth(2) {
        Some(raw) => match parse_area(&raw) {
            Ok(area) => area,
            Err(err) => {
                eprintln!("error: {err}");
                process::exit(1);
            }
        },
        None => DEFAULT_AREA,
    };

    let grid = match wave_function(&sample, area) {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    };

    render(&grid);
    println!("{:?}", histogram(&grid));
}
