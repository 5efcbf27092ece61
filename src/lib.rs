use std::{
    error, fs,
    fmt::Display,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

pub mod grid;
pub mod patrol;

pub use grid::{Direction, Grid, GridBuilder, Pose, Position, Tile};
pub use patrol::{
    find_unique_positions, patrol_positions, run_trial, run_trial_with_obstacle, run_trials,
    run_trials_on_path, run_trials_par, Outcome, Patrol, Step,
};

#[derive(Debug)]
pub enum Error {
    EmptyGrid,
    InconsistentRow(usize, usize),
    InvalidChar(char),
    NoGuard,
    MultipleGuards(Pose, Pose),
    OutOfBounds(Position),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyGrid => write!(f, "Given grid has no row."),
            Error::InconsistentRow(expect_col_n, real_col_n) => write!(
                f,
                "Row of {} cell(s) in a grid {} cell(s) wide.",
                real_col_n, expect_col_n
            ),
            Error::InvalidChar(c) => write!(f, "Unknown grid symbol({}).", c),
            Error::NoGuard => write!(f, "Grid has no guard(^), expect exactly one."),
            Error::MultipleGuards(first, second) => write!(
                f,
                "Grid has more than one guard, at least {} and {}.",
                first, second
            ),
            Error::OutOfBounds(pos) => write!(f, "Position{} is outside of grid.", pos),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Run obstacle trials on all cores, each trial on its own overlay.
    /// Only used by part2, part1 ignores it.
    #[arg(short, long)]
    pub parallel: bool,
}

pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read given file({}).", path.as_ref().display()))?;

    text.parse::<Grid>()
        .with_context(|| format!("Invalid grid in given file({}).", path.as_ref().display()))
}
