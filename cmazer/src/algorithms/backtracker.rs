use rand::Rng;
use smallvec::SmallVec;

use crate::{dims::Dims, gameboard::Grid, visualizer::Visualizer};

use super::CellMask;

/// Randomized backtracker. Carves a spanning tree of passages into `grid`,
/// starting at `start`.
///
/// Every step looks at the still unvisited neighbours of the cell on top of the
/// stack, picks one of them with a single `gen_range(0..len)` draw, opens the
/// passage and continues from there. When a cell has no unvisited neighbours
/// left it is popped and its parent is looked at again, so a cell can spawn
/// several branches. This is the recursive backtracker with an explicit stack:
/// the draws, and with them the layout, match the recursive formulation exactly.
///
/// Cells already marked in `visited` are treated as carved and never entered.
/// Returns the number of passages opened.
///
/// # Panics
/// If `start` is outside of the grid or `visited` has a different size.
pub fn carve<R: Rng + ?Sized>(
    grid: &mut Grid,
    start: Dims,
    visited: &mut CellMask,
    rng: &mut R,
    visualizer: &mut dyn Visualizer,
) -> usize {
    assert!(
        grid.is_in_bounds(start),
        "carving start {:?} is outside of the {:?} grid",
        start,
        grid.size()
    );
    assert_eq!(visited.size(), grid.size(), "visited mask size mismatch");

    let mut carved = 0;
    let mut stack = Vec::with_capacity(grid.cell_count());

    visited[start] = true;
    stack.push(start);
    while let Some(&current) = stack.last() {
        let unvisited = grid
            .neighbors(current)
            .into_iter()
            .filter(|&pos| !visited[pos])
            .collect::<SmallVec<[_; 4]>>();

        if unvisited.is_empty() {
            stack.pop();
            continue;
        }

        let next = unvisited[rng.gen_range(0..unvisited.len())];
        grid.open_passage(current, next);
        carved += 1;

        visualizer.on_cell_drawn(current, &grid[current]);
        visualizer.on_cell_drawn(next, &grid[next]);
        visualizer.on_tick();

        visited[next] = true;
        stack.push(next);
    }

    log::debug!("carved {} passages from {:?}", carved, start);

    carved
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;
    use crate::{algorithms::Random, visualizer::NoVisualizer};

    fn carved(cols: usize, rows: usize, start: Dims, seed: u64) -> (Grid, CellMask) {
        let mut grid = Grid::new(cols, rows);
        let mut visited = CellMask::new_empty(cols, rows);
        let mut rng = Random::seed_from_u64(seed);
        carve(&mut grid, start, &mut visited, &mut rng, &mut NoVisualizer);
        (grid, visited)
    }

    #[test]
    fn single_cell_has_nothing_to_carve() {
        let (grid, visited) = carved(1, 1, Dims::ZERO, 0);
        assert_eq!(grid.passage_count(), 0);
        assert_eq!(visited.enabled_count(), 1);
    }

    #[test]
    fn spans_whole_grid_from_any_start() {
        for start in [Dims(0, 0), Dims(4, 3), Dims(7, 0), Dims(2, 5)] {
            let (grid, visited) = carved(8, 6, start, 7);
            assert!(grid.is_perfect(), "not perfect when starting at {:?}", start);
            assert_eq!(visited.enabled_count(), 48);
        }
    }

    #[test]
    fn branches_instead_of_single_walk() {
        // a single walk would leave every cell with at most two passages
        let (grid, _) = carved(20, 20, Dims::ZERO, 3);
        let branching = grid
            .iter_pos()
            .filter(|&pos| grid[pos].open_walls().count() >= 3)
            .count();
        assert!(branching > 0);
    }

    #[test]
    fn same_seed_same_layout() {
        let (a, _) = carved(12, 10, Dims::ZERO, 1);
        let (b, _) = carved(12, 10, Dims::ZERO, 1);
        assert_eq!(a.wall_bitmap(), b.wall_bitmap());
    }

    #[test]
    fn premarked_cells_are_skipped() {
        let mut grid = Grid::new(3, 1);
        let mut visited = CellMask::new_empty(3, 1);
        visited[Dims(2, 0)] = true;
        let mut rng = Random::seed_from_u64(0);

        let count = carve(&mut grid, Dims::ZERO, &mut visited, &mut rng, &mut NoVisualizer);

        assert_eq!(count, 1);
        assert!(grid[Dims(1, 0)].get_wall(crate::gameboard::CellWall::Right));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn start_out_of_bounds() {
        carved(3, 3, Dims(3, 0), 0);
    }
}
