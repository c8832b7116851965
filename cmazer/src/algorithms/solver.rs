use crate::{
    dims::Dims,
    gameboard::{CellWall, Grid},
    visualizer::Visualizer,
};

use super::CellMask;

/// Depth-first search from `start` to the grid exit.
///
/// Directions are tried top, right, bottom, left. Stepping into a neighbour
/// reports a forward move, giving up on it reports the same move as undone.
/// Visited cells are marked in `visited` and never entered twice; cells marked
/// beforehand count as already explored.
///
/// Returns `false` if the exit can't be reached, which is a normal outcome for
/// a hand-built grid with disconnected regions.
///
/// # Panics
/// If `start` is outside of the grid or `visited` has a different size.
pub fn solve_from(
    grid: &Grid,
    start: Dims,
    visited: &mut CellMask,
    visualizer: &mut dyn Visualizer,
) -> bool {
    assert!(
        grid.is_in_bounds(start),
        "solving start {:?} is outside of the {:?} grid",
        start,
        grid.size()
    );
    assert_eq!(visited.size(), grid.size(), "visited mask size mismatch");

    let exit = grid.exit();
    let order = CellWall::get_in_order();

    visited[start] = true;
    if start == exit {
        return true;
    }

    // (cell, index of the next direction to try)
    let mut stack: Vec<(Dims, usize)> = vec![(start, 0)];
    while let Some(frame) = stack.last_mut() {
        let current = frame.0;

        let Some(&wall) = order.get(frame.1) else {
            stack.pop();
            if let Some(&(parent, _)) = stack.last() {
                visualizer.on_move(parent, current, true);
                visualizer.on_tick();
            }
            continue;
        };
        frame.1 += 1;

        if !grid.can_pass(current, wall) {
            continue;
        }

        let next = current + wall.to_coord();
        if visited[next] {
            continue;
        }

        visualizer.on_move(current, next, false);
        visualizer.on_tick();

        visited[next] = true;
        if next == exit {
            log::debug!("exit {:?} reached, path length {}", exit, stack.len());
            return true;
        }
        stack.push((next, 0));
    }

    log::debug!(
        "no path from {:?} to {:?}, explored {} cells",
        start,
        exit,
        visited.enabled_count()
    );

    false
}
