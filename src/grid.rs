//! Output lattice: a dense, row-major grid of [`Cell`]s addressed by
//! `(row, col)` indices. Neighbors are computed from width and index
//! arithmetic rather than a pointer graph.

use crate::alphabet::Label;
use crate::ruleset::Direction;

#[derive(Debug, Clone)]
pub struct Cell {
    pub possibilities: Vec<Label>,
    pub chosen: Option<Label>,
}

impl Cell {
    fn new(alphabet: &[Label]) -> Self {
        Cell {
            possibilities: alphabet.to_vec(),
            chosen: None,
        }
    }

    pub fn is_collapsed(&self) -> bool {
        self.chosen.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct Grid {
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(width: usize, alphabet: &[Label]) -> Self {
        let cells = (0..width * width).map(|_| Cell::new(alphabet)).collect();
        Grid { width, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[self.index(row, col)]
    }

    pub(crate) fn set_possibilities(&mut self, row: usize, col: usize, possibilities: Vec<Label>) {
        let idx = self.index(row, col);
        self.cells[idx].possibilities = possibilities;
    }

    pub(crate) fn collapse_at(&mut self, row: usize, col: usize, label: Label) {
        let idx = self.index(row, col);
        self.cells[idx].chosen = Some(label.clone());
        self.cells[idx].possibilities = vec![label];
    }

    /// In-bounds neighbors of `(row, col)`, tagged with the direction *from*
    /// `(row, col)` *to* the neighbor.
    pub fn neighbors(&self, row: usize, col: usize) -> Vec<(usize, usize, Direction)> {
        let mut out = Vec::with_capacity(4);
        if row > 0 {
            out.push((row - 1, col, Direction::Up));
        }
        if row + 1 < self.width {
            out.push((row + 1, col, Direction::Down));
        }
        if col > 0 {
            out.push((row, col - 1, Direction::Left));
        }
        if col + 1 < self.width {
            out.push((row, col + 1, Direction::Right));
        }
        out
    }

    /// Every cell's chosen label, row-major. Panics if any cell is
    /// uncollapsed; callers only reach this once `wave_function` has
    /// returned successfully.
    pub fn to_label_rows(&self) -> Vec<Vec<String>> {
        (0..self.width)
            .map(|row| {
                (0..self.width)
                    .map(|col| {
                        self.cell(row, col)
                            .chosen
                            .clone()
                            .expect("grid returned from wave_function must be fully collapsed")
                    })
                    .collect()
            })
            .collect()
    }
}
