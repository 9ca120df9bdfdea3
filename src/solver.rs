//! The propagator, the entropy-ordered collapse driver, and the public entry
//! point that ties rule extraction, weighting, and collapse together.

use std::collections::HashSet;

use log::{debug, info, warn};

use crate::alphabet::Label;
use crate::entropy::shannon_entropy;
use crate::error::WfcError;
use crate::grid::Grid;
use crate::rng::{NumberGenerator, StdRngSource};
use crate::ruleset::{generate_rule_set, RuleSet};
use crate::weights::{alphabet_from_weights, calculate_weights, Weights};

/// Injectable entropy heuristic, defaulting to [`shannon_entropy`].
pub type EntropySelector = fn(&[Label], &Weights) -> f64;

/// Tunables beyond sample and area. `max_restarts` bounds the restart loop;
/// leaving it unbounded would never terminate against a pathological
/// ruleset.
#[derive(Debug, Clone)]
pub struct WaveFunctionConfig {
    pub seed: Option<u64>,
    pub max_restarts: u32,
    pub entropy: EntropySelector,
}

impl Default for WaveFunctionConfig {
    fn default() -> Self {
        WaveFunctionConfig {
            seed: None,
            max_restarts: 10_000,
            entropy: shannon_entropy,
        }
    }
}

struct Contradiction;

/// Build a ruleset and weights from `sample`, then collapse a
/// `⌊√area⌋ × ⌊√area⌋` grid that is locally consistent with them.
pub fn wave_function(sample: &[Vec<String>], area: usize) -> Result<Grid, WfcError> {
    wave_function_with_config(sample, area, WaveFunctionConfig::default())
}

pub fn wave_function_with_config(
    sample: &[Vec<String>],
    area: usize,
    config: WaveFunctionConfig,
) -> Result<Grid, WfcError> {
    if sample.is_empty() || sample.iter().all(|row| row.is_empty()) {
        return Err(WfcError::EmptySample);
    }

    let weights = calculate_weights(sample);
    if weights.is_empty() {
        return Err(WfcError::NoLabelsObserved);
    }
    let alphabet = alphabet_from_weights(&weights);
    let rules = generate_rule_set(sample, &alphabet);

    let width = (area as f64).sqrt().floor() as usize;
    let target = width * width;

    let mut rng = StdRngSource::new(config.seed);
    let mut restarts: u32 = 0;

    loop {
        match try_collapse(&rules, &weights, &alphabet, width, target, config.entropy, &mut rng) {
            Ok(grid) => {
                info!("collapse succeeded after {restarts} restart(s)");
                return Ok(grid);
            }
            Err(Contradiction) => {
                restarts += 1;
                warn!("contradiction encountered, restarting (attempt {restarts})");
                if restarts > config.max_restarts {
                    return Err(WfcError::ConstraintsUnsatisfiable { restarts });
                }
            }
        }
    }
}

fn try_collapse(
    rules: &RuleSet,
    weights: &Weights,
    alphabet: &[Label],
    width: usize,
    target: usize,
    entropy: EntropySelector,
    rng: &mut dyn NumberGenerator,
) -> Result<Grid, Contradiction> {
    let mut grid = Grid::new(width, alphabet);
    let mut collapsed_count = 0usize;

    while collapsed_count < target {
        let mut selection = find_lowest_entropy(&grid, weights, entropy);

        if collapsed_count == 0 {
            if let Some((0, 0)) = selection {
                selection = Some((rng.next(width), rng.next(width)));
            }
        }

        let (row, col) = match selection {
            Some(pos) => pos,
            None => break,
        };

        let possibilities = grid.cell(row, col).possibilities.clone();
        if possibilities.is_empty() {
            return Err(Contradiction);
        }

        let chosen_index = rng.next(possibilities.len());
        let chosen = possibilities[chosen_index].clone();

        grid.collapse_at(row, col, chosen.clone());
        collapsed_count += 1;

        propagate(&mut grid, rules, row, col, &chosen);
    }

    Ok(grid)
}

/// Row-major scan for the uncollapsed cell with minimum entropy. Cells with
/// an empty possibility set (a contradiction) are treated as entropy `0.0`
/// without calling `entropy` on them.
fn find_lowest_entropy(
    grid: &Grid,
    weights: &Weights,
    entropy: EntropySelector,
) -> Option<(usize, usize)> {
    let width = grid.width();
    let mut best: Option<((usize, usize), f64)> = None;

    for row in 0..width {
        for col in 0..width {
            let cell = grid.cell(row, col);
            if cell.is_collapsed() {
                continue;
            }
            let h = if cell.possibilities.is_empty() {
                0.0
            } else {
                entropy(&cell.possibilities, weights)
            };
            match best {
                None => best = Some(((row, col), h)),
                Some((_, best_h)) if h < best_h => best = Some(((row, col), h)),
                _ => {}
            }
        }
    }

    best.map(|(pos, _)| pos)
}

/// Membership intersection, sorted ascending for deterministic test
/// comparisons.
fn intersect_sorted(current: &[Label], allowed: &[Label]) -> Vec<Label> {
    let allowed_set: HashSet<&Label> = allowed.iter().collect();
    let mut result: Vec<Label> = current
        .iter()
        .filter(|label| allowed_set.contains(label))
        .cloned()
        .collect();
    result.sort();
    result
}

/// One-hop propagation: shrink each in-bounds, uncollapsed neighbor's
/// possibilities to those compatible with the just-collapsed label in the
/// direction toward that neighbor. One-hop only: neighbors of neighbors are
/// not revisited.
fn propagate(grid: &mut Grid, rules: &RuleSet, row: usize, col: usize, label: &Label) {
    let neighbor_rules = match rules.get(label) {
        Some(rules) => rules,
        None => return,
    };

    for (nr, nc, dir) in grid.neighbors(row, col) {
        if grid.cell(nr, nc).is_collapsed() {
            continue;
        }
        let allowed = neighbor_rules.get(dir);
        let current = grid.cell(nr, nc).possibilities.clone();
        let updated = intersect_sorted(&current, allowed);
        debug!(
            "propagate {label} {dir:?} -> ({nr},{nc}): {} -> {} possibilities",
            current.len(),
            updated.len()
        );
        grid.set_possibilities(nr, nc, updated);
    }
}
