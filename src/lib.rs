//! Simple-tiled Wave Function Collapse: adjacency rules are inferred from a
//! small sample grid, then an output grid is collapsed one cell at a time in
//! order of lowest Shannon entropy, propagating constraints to neighbors and
//! restarting the whole grid on contradiction.

pub mod alphabet;
pub mod entropy;
pub mod error;
pub mod grid;
pub mod rng;
pub mod ruleset;
pub mod solver;
pub mod weights;

pub use alphabet::Label;
pub use error::WfcError;
pub use grid::{Cell, Grid};
pub use ruleset::{Direction, NeighborRules, RuleSet};
pub use solver::{wave_function, wave_function_with_config, EntropySelector, WaveFunctionConfig};
pub use weights::Weights;
