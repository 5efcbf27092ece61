use std::{fmt::Display, str::FromStr};

use log::warn;

use crate::Error;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    #[default]
    Up,
    Right,
    Down,
    Left,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.arrow())
    }
}

impl Direction {
    /// Arrow drawn for a guard facing this way.
    pub fn arrow(&self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Right => '>',
            Direction::Down => 'v',
            Direction::Left => '<',
        }
    }

    pub fn turn_right(&self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }
}

/// Cell coordinate, `x` is the column and `y` the row, origin at top-left.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// One step along `dir`. Only stepping off the top or left edge gives `None`,
    /// the other two edges are left to [`Grid::is_in_bounds`].
    pub fn along(&self, dir: Direction) -> Option<Position> {
        match dir {
            Direction::Up if self.y > 0 => Some(Self::new(self.x, self.y - 1)),
            Direction::Right => Some(Self::new(self.x + 1, self.y)),
            Direction::Down => Some(Self::new(self.x, self.y + 1)),
            Direction::Left if self.x > 0 => Some(Self::new(self.x - 1, self.y)),
            _ => None,
        }
    }
}

/// Position plus facing direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pose {
    pub pos: Position,
    pub dir: Direction,
}

impl Display for Pose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.dir, self.pos)
    }
}

impl Pose {
    pub fn new(pos: Position, dir: Direction) -> Self {
        Self { pos, dir }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Open,
    Obstacle,
    Start,
}

impl Tile {
    pub fn symbol(&self) -> char {
        match self {
            Tile::Open => '.',
            Tile::Obstacle => '#',
            Tile::Start => '^',
        }
    }
}

impl TryFrom<char> for Tile {
    type Error = Error;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '.' => Ok(Tile::Open),
            '#' => Ok(Tile::Obstacle),
            '^' => Ok(Tile::Start),
            other => Err(Error::InvalidChar(other)),
        }
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: usize,
}

impl Grid {
    pub fn parse(text: &str) -> Result<Grid, Error> {
        let mut builder = GridBuilder::new();
        for line in text.lines() {
            builder.add_row(line)?;
        }

        builder.build()
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn is_in_bounds(&self, pos: &Position) -> bool {
        pos.x < self.col_n && pos.y < self.row_n
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<Tile> {
        let pos = Position::new(x, y);
        if self.is_in_bounds(&pos) {
            self.tiles.get(self.index(&pos)).copied()
        } else {
            None
        }
    }

    /// Overwrites one cell and hands back what was there before.
    pub fn set_cell(&mut self, x: usize, y: usize, tile: Tile) -> Result<Tile, Error> {
        let pos = Position::new(x, y);
        if !self.is_in_bounds(&pos) {
            return Err(Error::OutOfBounds(pos));
        }

        let ind = self.index(&pos);
        Ok(std::mem::replace(&mut self.tiles[ind], tile))
    }

    pub fn is_obstacle(&self, pos: &Position) -> bool {
        self.cell(pos.x, pos.y)
            .is_some_and(|tile| tile == Tile::Obstacle)
    }

    /// Same as [`Grid::is_obstacle`] but with `extra` treated as one more obstacle.
    pub fn is_obstacle_with(&self, pos: &Position, extra: Option<&Position>) -> bool {
        extra.is_some_and(|extra| extra == pos) || self.is_obstacle(pos)
    }

    /// First start symbol in row-major order, facing up. A grid without one
    /// yields the zero pose after a warning.
    pub fn find_start(&self) -> Pose {
        match self.starts().next() {
            Some(pose) => pose,
            None => {
                warn!("Starting position not found in grid.");
                Pose::default()
            }
        }
    }

    pub fn guard_start(&self) -> Result<Pose, Error> {
        let mut starts = self.starts();
        let first = starts.next().ok_or(Error::NoGuard)?;
        if let Some(second) = starts.next() {
            return Err(Error::MultipleGuards(first, second));
        }

        Ok(first)
    }

    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.row_n).flat_map(move |y| (0..self.col_n).map(move |x| Position::new(x, y)))
    }

    fn starts(&self) -> impl Iterator<Item = Pose> + '_ {
        self.positions()
            .filter(|pos| self.tiles[self.index(pos)] == Tile::Start)
            .map(|pos| Pose::new(pos, Direction::Up))
    }

    fn index(&self, pos: &Position) -> usize {
        pos.y * self.col_n + pos.x
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grid::parse(s)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.tiles.chunks(self.col_n.max(1)) {
            for tile in row {
                write!(f, "{}", tile)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

pub struct GridBuilder {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: Option<usize>,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            row_n: 0,
            col_n: None,
        }
    }

    /// Blank lines are skipped, surrounding whitespace is ignored.
    pub fn add_row(&mut self, row_text: &str) -> Result<(), Error> {
        let row_text = row_text.trim();
        if row_text.is_empty() {
            return Ok(());
        }

        let this_col_n = row_text.chars().count();
        let expect_col_n = *self.col_n.get_or_insert(this_col_n);
        if expect_col_n != this_col_n {
            return Err(Error::InconsistentRow(expect_col_n, this_col_n));
        }

        for c in row_text.chars() {
            self.tiles.push(Tile::try_from(c)?);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<Grid, Error> {
        if self.row_n == 0 {
            return Err(Error::EmptyGrid);
        }

        Ok(Grid {
            tiles: self.tiles,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
        })
    }
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::new()
    }
}
