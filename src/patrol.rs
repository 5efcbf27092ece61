use std::collections::HashSet;

use log::{debug, warn};
use rayon::prelude::*;

use crate::{
    grid::{Grid, Pose, Position, Tile},
    Error,
};

/// Result of a single transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Moved(Pose),
    Turned(Pose),
    Exited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Exited,
    Looped,
}

impl Outcome {
    pub fn is_loop(&self) -> bool {
        matches!(self, Outcome::Looped)
    }
}

/// Guard movement rules over a grid, optionally with one extra obstacle
/// laid over it. The grid itself is never touched.
#[derive(Debug, Clone, Copy)]
pub struct Patrol<'a> {
    grid: &'a Grid,
    extra: Option<Position>,
}

impl<'a> Patrol<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid, extra: None }
    }

    pub fn with_obstacle(grid: &'a Grid, obstacle: Position) -> Self {
        Self {
            grid,
            extra: Some(obstacle),
        }
    }

    pub fn step(&self, pose: &Pose) -> Step {
        match pose
            .pos
            .along(pose.dir)
            .filter(|next_pos| self.grid.is_in_bounds(next_pos))
        {
            None => Step::Exited,
            Some(next_pos) if self.grid.is_obstacle_with(&next_pos, self.extra.as_ref()) => {
                Step::Turned(Pose::new(pose.pos, pose.dir.turn_right()))
            }
            Some(next_pos) => Step::Moved(Pose::new(next_pos, pose.dir)),
        }
    }

    /// Walks from `start` until the guard leaves the grid or a pose repeats.
    /// `on_pose` sees every pose, `start` included, exactly once.
    ///
    /// Turns are recorded as well as moves, so a guard boxed in on all four
    /// sides is caught spinning on the spot, and the number of transitions
    /// never exceeds `4 * rows * cols`.
    pub fn walk<F>(&self, start: &Pose, mut on_pose: F) -> Outcome
    where
        F: FnMut(&Pose),
    {
        let mut visited = HashSet::new();
        visited.insert(*start);
        on_pose(start);

        let mut pose = *start;
        loop {
            match self.step(&pose) {
                Step::Exited => return Outcome::Exited,
                Step::Moved(next) | Step::Turned(next) => {
                    if !visited.insert(next) {
                        return Outcome::Looped;
                    }

                    on_pose(&next);
                    pose = next;
                }
            }
        }
    }

    pub fn trace(&self, start: &Pose) -> (Vec<Pose>, Outcome) {
        let mut path = Vec::new();
        let outcome = self.walk(start, |pose| path.push(*pose));
        (path, outcome)
    }
}

/// Cells the guard stands on while patrolling the unmodified grid.
pub fn patrol_positions(grid: &Grid, start: &Pose) -> HashSet<Position> {
    let mut positions = HashSet::new();
    let outcome = Patrol::new(grid).walk(start, |pose| {
        positions.insert(pose.pos);
    });
    if outcome.is_loop() {
        warn!("Guard never leaves the grid, counted positions of one full cycle.");
    }

    positions
}

pub fn find_unique_positions(grid: &Grid) -> usize {
    patrol_positions(grid, &grid.find_start()).len()
}

/// Loop check against the grid exactly as it stands.
pub fn run_trial(grid: &Grid, start: &Pose) -> bool {
    Patrol::new(grid).walk(start, |_| {}).is_loop()
}

pub fn run_trial_with_obstacle(grid: &Grid, start: &Pose, obstacle: &Position) -> bool {
    Patrol::with_obstacle(grid, *obstacle)
        .walk(start, |_| {})
        .is_loop()
}

fn is_candidate(grid: &Grid, pos: &Position) -> bool {
    grid.cell(pos.x, pos.y) == Some(Tile::Open)
}

/// Places an obstacle on every open cell in turn, checks for a loop and puts
/// the cell back. `on_row(row, row_n)` is called before each row is scanned,
/// rows counted from 1. The grid is left as it was given.
pub fn run_trials<F>(grid: &mut Grid, mut on_row: F) -> Result<usize, Error>
where
    F: FnMut(usize, usize),
{
    let start = grid.find_start();
    let (row_n, col_n) = (grid.row_n(), grid.col_n());
    let mut loop_n = 0;
    for y in 0..row_n {
        on_row(y + 1, row_n);
        for x in 0..col_n {
            if !is_candidate(grid, &Position::new(x, y)) {
                continue;
            }

            let old_tile = grid.set_cell(x, y, Tile::Obstacle)?;
            if run_trial(grid, &start) {
                debug!("Obstacle at {} makes the guard loop.", Position::new(x, y));
                loop_n += 1;
            }
            grid.set_cell(x, y, old_tile)?;
        }
    }

    Ok(loop_n)
}

/// Same count as [`run_trials`], rows spread over the rayon pool.
pub fn run_trials_par(grid: &Grid) -> usize {
    let start = grid.find_start();
    (0..grid.row_n())
        .into_par_iter()
        .map(|y| {
            (0..grid.col_n())
                .map(|x| Position::new(x, y))
                .filter(|pos| is_candidate(grid, pos))
                .filter(|pos| run_trial_with_obstacle(grid, &start, pos))
                .count()
        })
        .sum()
}

/// Same count as [`run_trials`]. An obstacle off the original route can't
/// change the route, so only cells on it are tried. A route that already
/// loops stays a loop for any obstacle off it, so then every cell is tried.
pub fn run_trials_on_path(grid: &Grid) -> usize {
    let start = grid.find_start();
    let mut positions = HashSet::new();
    let outcome = Patrol::new(grid).walk(&start, |pose| {
        positions.insert(pose.pos);
    });
    if outcome.is_loop() {
        debug!("Original route loops already, trying every cell.");
        return run_trials_par(grid);
    }

    positions
        .par_iter()
        .filter(|pos| is_candidate(grid, pos))
        .filter(|pos| run_trial_with_obstacle(grid, &start, pos))
        .count()
}
