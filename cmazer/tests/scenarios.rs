use cmazer::{
    dims::Dims,
    gameboard::{CellWall, Grid},
    visualizer::MoveRecorder,
    Maze,
};

#[test]
fn single_cell_maze() {
    let mut maze = Maze::new(1, 1, Some(0));
    maze.generate();

    let cell = &maze.grid()[Dims::ZERO];
    assert!(cell.is_open(CellWall::Top));
    assert!(cell.is_open(CellWall::Bottom));
    assert!(cell.get_wall(CellWall::Left));
    assert!(cell.get_wall(CellWall::Right));

    let mut rec = MoveRecorder::new();
    assert!(maze.solve_with(&mut rec));
    assert!(rec.moves.is_empty());
}

#[test]
fn two_cell_corridor() {
    let mut maze = Maze::new(2, 1, Some(0));
    maze.generate();

    assert!(maze.grid()[Dims(0, 0)].is_open(CellWall::Right));
    assert!(maze.grid()[Dims(1, 0)].is_open(CellWall::Left));

    let mut rec = MoveRecorder::new();
    assert!(maze.solve_with(&mut rec));
    assert_eq!(rec.forward_count(), 1);
    assert_eq!(rec.undo_count(), 0);
}

/// Wall bitmap of the 12x10 maze generated with seed `0x5eed`, row by row.
/// Any change to the RNG, the way it is drawn from or the neighbour order shows
/// up here.
#[rustfmt::skip]
const SEEDED_12X10: [u8; 120] = [
    0x0a, 0x09, 0x01, 0x07, 0x09, 0x01, 0x05, 0x05, 0x03, 0x09, 0x05, 0x03,
    0x0a, 0x0a, 0x0c, 0x05, 0x06, 0x0c, 0x05, 0x03, 0x0a, 0x0e, 0x09, 0x06,
    0x0a, 0x0c, 0x01, 0x05, 0x05, 0x01, 0x07, 0x0a, 0x0c, 0x03, 0x0c, 0x03,
    0x0c, 0x03, 0x0e, 0x09, 0x03, 0x0e, 0x09, 0x06, 0x0d, 0x04, 0x05, 0x02,
    0x0b, 0x0c, 0x05, 0x06, 0x0c, 0x03, 0x08, 0x05, 0x03, 0x09, 0x05, 0x06,
    0x08, 0x05, 0x07, 0x09, 0x05, 0x06, 0x0c, 0x07, 0x0a, 0x0c, 0x03, 0x0b,
    0x0a, 0x09, 0x03, 0x0a, 0x09, 0x05, 0x05, 0x03, 0x0c, 0x03, 0x0a, 0x0a,
    0x0a, 0x0a, 0x0c, 0x06, 0x0c, 0x03, 0x0b, 0x0a, 0x09, 0x06, 0x0c, 0x02,
    0x08, 0x06, 0x09, 0x05, 0x05, 0x06, 0x0a, 0x0a, 0x0c, 0x05, 0x03, 0x0a,
    0x0c, 0x05, 0x06, 0x0d, 0x05, 0x05, 0x04, 0x04, 0x05, 0x05, 0x06, 0x0a,
];

#[test]
fn seeded_layout_matches_recorded_bitmap() {
    for _ in 0..3 {
        let mut maze = Maze::new(12, 10, Some(0x5eed));
        maze.generate();
        assert!(maze.grid().is_perfect());
        assert_eq!(maze.grid().wall_bitmap(), SEEDED_12X10);
    }

    let mut other = Maze::new(12, 10, Some(0x5eee));
    other.generate();
    assert_ne!(other.grid().wall_bitmap(), SEEDED_12X10);
}

#[test]
fn silent_and_observed_runs_agree() {
    let mut silent = Maze::new(9, 7, Some(11));
    silent.generate();
    let silent_found = silent.solve();

    let mut observed = Maze::new(9, 7, Some(11));
    let mut rec = MoveRecorder::new();
    observed.generate_with(&mut rec);
    let observed_found = observed.solve_with(&mut rec);

    assert_eq!(silent.grid(), observed.grid());
    assert_eq!(silent.visited(), observed.visited());
    assert_eq!(silent_found, observed_found);
}

#[test]
fn disconnected_grid_is_unsolvable() {
    // entry region: the top-left 2x2 block, exit region: the rest
    let mut grid = Grid::new(3, 3);
    grid.open_passage(Dims(0, 0), Dims(1, 0));
    grid.open_passage(Dims(0, 0), Dims(0, 1));
    grid.open_passage(Dims(0, 1), Dims(1, 1));
    grid.open_passage(Dims(2, 0), Dims(2, 1));
    grid.open_passage(Dims(2, 1), Dims(2, 2));
    grid.open_passage(Dims(2, 2), Dims(1, 2));
    grid.open_passage(Dims(1, 2), Dims(0, 2));

    let mut maze = Maze::from_grid(grid);
    let mut rec = MoveRecorder::new();

    assert!(!maze.solve_with(&mut rec));
    assert_eq!(maze.visited_count(), 4);
    assert!(!maze.is_visited(maze.exit()));
    assert_eq!(rec.forward_count(), rec.undo_count());
}
