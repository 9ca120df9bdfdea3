use std::fmt;

#[derive(Debug)]
pub enum WfcError {
    /// The sample grid has no rows, or every row is empty.
    EmptySample,
    /// The decoder produced only the "none" sentinel for every sample cell,
    /// so the alphabet would be empty.
    NoLabelsObserved,
    /// The configured restart cap was exceeded without finding a
    /// contradiction-free grid.
    ConstraintsUnsatisfiable { restarts: u32 },
    /// Reserved for callers constructing an area from external (e.g.
    /// CLI-supplied) input; `wave_function` itself accepts any `area`.
    InvalidArea { area: usize },
}

impl fmt::Display for WfcError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            WfcError::EmptySample => write!(f, "sample grid has no rows or columns"),
            WfcError::NoLabelsObserved => {
                write!(f, "sample grid contains no recognizable labels")
            }
            WfcError::ConstraintsUnsatisfiable { restarts } => write!(
                f,
                "no contradiction-free grid found after {} restarts",
                restarts
            ),
            WfcError::InvalidArea { area } => write!(f, "invalid area: {}", area),
        }
    }
}

impl std::error::Error for WfcError {}
