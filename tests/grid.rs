use guard_patrol::{Direction, Error, Grid, Pose, Position, Tile};

#[test]
fn parse_skips_blank_lines_and_trims() {
    let grid = Grid::parse("\n  .#.\n\n...\n.^.  \n\n").unwrap();

    assert_eq!(grid.row_n(), 3);
    assert_eq!(grid.col_n(), 3);
    assert_eq!(grid.cell(1, 0), Some(Tile::Obstacle));
    assert_eq!(grid.cell(1, 2), Some(Tile::Start));
    assert_eq!(grid.cell(0, 0), Some(Tile::Open));
    assert_eq!(grid.to_string(), ".#.\n...\n.^.\n");
}

#[test]
fn parse_rejects_bad_input() {
    assert!(matches!(Grid::parse(""), Err(Error::EmptyGrid)));
    assert!(matches!(Grid::parse(" \n\n"), Err(Error::EmptyGrid)));
    assert!(matches!(
        Grid::parse("...\n..\n"),
        Err(Error::InconsistentRow(3, 2))
    ));
    assert!(matches!(Grid::parse(".x.\n"), Err(Error::InvalidChar('x'))));
}

#[test]
fn bounds_follow_dimensions() {
    let grid: Grid = "....\n.^..\n".parse().unwrap();

    assert!(grid.is_in_bounds(&Position::new(3, 1)));
    assert!(!grid.is_in_bounds(&Position::new(4, 1)));
    assert!(!grid.is_in_bounds(&Position::new(0, 2)));
    assert_eq!(grid.cell(4, 0), None);
}

#[test]
fn set_cell_returns_previous_tile() {
    let mut grid = Grid::parse("..\n^.\n").unwrap();

    assert_eq!(grid.set_cell(1, 0, Tile::Obstacle).unwrap(), Tile::Open);
    assert!(grid.is_obstacle(&Position::new(1, 0)));
    assert_eq!(grid.set_cell(1, 0, Tile::Open).unwrap(), Tile::Obstacle);
    assert_eq!(grid, Grid::parse("..\n^.\n").unwrap());
    assert!(matches!(
        grid.set_cell(2, 0, Tile::Obstacle),
        Err(Error::OutOfBounds(pos)) if pos == Position::new(2, 0)
    ));
}

#[test]
fn overlay_adds_one_obstacle() {
    let grid = Grid::parse(".#\n^.\n").unwrap();
    let extra = Position::new(1, 1);

    assert!(grid.is_obstacle_with(&Position::new(1, 0), None));
    assert!(grid.is_obstacle_with(&extra, Some(&extra)));
    assert!(!grid.is_obstacle_with(&extra, None));
    assert!(!grid.is_obstacle_with(&Position::new(0, 0), Some(&extra)));
}

#[test]
fn find_start_scans_row_major() {
    let grid = Grid::parse("...\n..^\n^..\n").unwrap();

    assert_eq!(
        grid.find_start(),
        Pose::new(Position::new(2, 1), Direction::Up)
    );
    assert!(matches!(grid.guard_start(), Err(Error::MultipleGuards(_, _))));
}

#[test]
fn missing_start_is_soft_in_find_start_only() {
    let grid = Grid::parse("..#\n...\n").unwrap();

    assert_eq!(grid.find_start(), Pose::default());
    assert_eq!(Pose::default(), Pose::new(Position::new(0, 0), Direction::Up));
    assert!(matches!(grid.guard_start(), Err(Error::NoGuard)));
}

#[test]
fn direction_turns_clockwise() {
    let mut dir = Direction::Up;
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(dir);
        dir = dir.turn_right();
    }

    assert_eq!(
        seen,
        vec![Direction::Up, Direction::Right, Direction::Down, Direction::Left]
    );
    assert_eq!(dir, Direction::Up);
}

#[test]
fn position_along_stops_at_top_left_edges() {
    let origin = Position::new(0, 0);

    assert_eq!(origin.along(Direction::Up), None);
    assert_eq!(origin.along(Direction::Left), None);
    assert_eq!(origin.along(Direction::Right), Some(Position::new(1, 0)));
    assert_eq!(origin.along(Direction::Down), Some(Position::new(0, 1)));
}

#[test]
fn read_grid_reports_file_and_cause() {
    let path = std::env::temp_dir().join("guard_patrol_ragged_grid.txt");
    std::fs::write(&path, "...\n.^\n").unwrap();

    let err = guard_patrol::read_grid(&path).unwrap_err();

    assert!(err.to_string().contains("Invalid grid in given file"));
    assert!(matches!(
        err.downcast_ref::<Error>(),
        Some(Error::InconsistentRow(3, 2))
    ));
}

#[test]
fn pose_displays_arrow_and_position() {
    let pose = Pose::new(Position::new(4, 6), Direction::Left);

    assert_eq!(Direction::Down.arrow(), 'v');
    assert_eq!(pose.to_string(), "<(4, 6)");
}
