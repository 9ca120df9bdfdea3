//! Rule extraction: per-label, per-direction legal-neighbor sets inferred
//! from a sample grid.

use std::collections::HashMap;

use crate::alphabet::{decode_cell, Label};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Legal neighbors observed for one label, one set per cardinal direction.
/// `up` enumerates labels observed directly above a cell holding this label,
/// and so on for the other three directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeighborRules {
    pub up: Vec<Label>,
    pub down: Vec<Label>,
    pub left: Vec<Label>,
    pub right: Vec<Label>,
}

impl NeighborRules {
    pub fn get(&self, dir: Direction) -> &[Label] {
        match dir {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
            Direction::Left => &self.left,
            Direction::Right => &self.right,
        }
    }

    fn get_mut(&mut self, dir: Direction) -> &mut Vec<Label> {
        match dir {
            Direction::Up => &mut self.up,
            Direction::Down => &mut self.down,
            Direction::Left => &mut self.left,
            Direction::Right => &mut self.right,
        }
    }

    fn observe(&mut self, dir: Direction, label: &Label) {
        let set = self.get_mut(dir);
        if !set.contains(label) {
            set.push(label.clone());
        }
    }
}

pub type RuleSet = HashMap<Label, NeighborRules>;

/// Derive a [`RuleSet`] from a sample grid. `alphabet` seeds one empty entry
/// per observed label; cells whose decoded label isn't in `alphabet` (i.e.
/// unknown codes) contribute no observation.
pub fn generate_rule_set(sample: &[Vec<String>], alphabet: &[Label]) -> RuleSet {
    let mut rules: RuleSet = alphabet
        .iter()
        .cloned()
        .map(|label| (label, NeighborRules::default()))
        .collect();

    for (i, row) in sample.iter().enumerate() {
        for (j, code) in row.iter().enumerate() {
            let label = match decode_cell(code) {
                Some(label) => label,
                None => continue,
            };
            let entry = match rules.get_mut(&label) {
                Some(entry) => entry,
                None => continue,
            };

            if i > 0 {
                if let Some(up) = decode_cell(&sample[i - 1][j]) {
                    entry.observe(Direction::Up, &up);
                }
            }
            if i + 1 < sample.len() {
                if let Some(down) = decode_cell(&sample[i + 1][j]) {
                    entry.observe(Direction::Down, &down);
                }
            }
            if j > 0 {
                if let Some(left) = decode_cell(&row[j - 1]) {
                    entry.observe(Direction::Left, &left);
                }
            }
            if j + 1 < row.len() {
                if let Some(right) = decode_cell(&row[j + 1]) {
                    entry.observe(Direction::Right, &right);
                }
            }

            log::trace!("rule observation at ({i}, {j}): {label}");
        }
    }

    log::debug!("extracted rules for {} labels", rules.len());
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weights::{alphabet_from_weights, calculate_weights};

    fn row(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    fn rules_for(sample: &[Vec<String>]) -> RuleSet {
        let weights = calculate_weights(sample);
        let alphabet = alphabet_from_weights(&weights);
        generate_rule_set(sample, &alphabet)
    }

    #[test]
    fn rule_extraction_records_observed_adjacencies() {
        let sample = vec![row("L C S"), row("L C S"), row("C S L")];
        let rules = rules_for(&sample);

        let land = &rules["LAND"];
        assert!(land.down.contains(&"LAND".to_string()));
        assert!(land.down.contains(&"COAST".to_string()));
        assert!(land.up.contains(&"LAND".to_string()));
        assert!(land.up.contains(&"SEA".to_string()));
        assert!(land.right.contains(&"COAST".to_string()));
        assert!(land.left.contains(&"SEA".to_string()));
    }

    #[test]
    fn no_rule_set_contains_the_none_sentinel() {
        let sample = vec![row("L X S"), row("X L X")];
        let rules = rules_for(&sample);
        for entry in rules.values() {
            for set in [&entry.up, &entry.down, &entry.left, &entry.right] {
                for label in set {
                    assert_ne!(label, "");
                }
            }
        }
    }

    #[test]
    fn neighbor_sets_contain_each_label_at_most_once() {
        let sample = vec![row("L L L"), row("L L L"), row("L L L")];
        let rules = rules_for(&sample);
        let land = &rules["LAND"];
        for set in [&land.up, &land.down, &land.left, &land.right] {
            let mut seen = std::collections::HashSet::new();
            for label in set {
                assert!(seen.insert(label), "duplicate entry {label} in rule set");
            }
        }
    }

    #[test]
    fn rule_set_contains_exactly_the_alphabet() {
        let sample = vec![row("L C"), row("S L")];
        let weights = calculate_weights(&sample);
        let alphabet = alphabet_from_weights(&weights);
        let rules = generate_rule_set(&sample, &alphabet);

        let mut rule_labels: Vec<&Label> = rules.keys().collect();
        rule_labels.sort();
        let mut alphabet_sorted = alphabet.clone();
        alphabet_sorted.sort();
        assert_eq!(rule_labels, alphabet_sorted.iter().collect::<Vec<_>>());
    }

    #[test]
    fn rule_soundness_every_rule_has_a_witness() {
        // Every rule entry must correspond to an adjacency actually present in the sample.
        let sample = vec![row("L C S"), row("C S L"), row("S L C"), row("L L C")];
        let rules = rules_for(&sample);

        for (label, neighbor_rules) in &rules {
            for (dir, set) in [
                (Direction::Up, &neighbor_rules.up),
                (Direction::Down, &neighbor_rules.down),
                (Direction::Left, &neighbor_rules.left),
                (Direction::Right, &neighbor_rules.right),
            ] {
                for neighbor_label in set {
                    let witnessed = (0..sample.len()).any(|i| {
                        (0..sample[i].len()).any(|j| {
                            if decode_cell(&sample[i][j]).as_ref() != Some(label) {
                                return false;
                            }
                            let (ni, nj): (isize, isize) = match dir {
                                Direction::Up => (i as isize - 1, j as isize),
                                Direction::Down => (i as isize + 1, j as isize),
                                Direction::Left => (i as isize, j as isize - 1),
                                Direction::Right => (i as isize, j as isize + 1),
                            };
                            if ni < 0 || nj < 0 {
                                return false;
                            }
                            let (ni, nj) = (ni as usize, nj as usize);
                            sample
                                .get(ni)
                                .and_then(|r| r.get(nj))
                                .and_then(|c| decode_cell(c))
                                .as_ref()
                                == Some(neighbor_label)
                        })
                    });
                    assert!(
                        witnessed,
                        "rule {label} {dir:?} {neighbor_label} has no witness in the sample"
                    );
                }
            }
        }
    }
}
