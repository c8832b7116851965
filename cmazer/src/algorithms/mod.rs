pub mod backtracker;
pub mod solver;

use std::ops;

use rand::{thread_rng, Rng as _, SeedableRng as _};

use crate::{array::Array2D, dims::Dims};

pub use backtracker::carve;
pub use solver::solve_from;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Seeds a [`Random`] from `seed`, or from thread entropy if there is none.
///
/// Returns the seed that was actually used, so a run can be replayed.
pub fn random_from_seed(seed: Option<u64>) -> (Random, u64) {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    (Random::seed_from_u64(seed), seed)
}

/// Per-cell marker used as the visited set of a traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellMask(Array2D<bool>);

impl CellMask {
    /// All cells unmarked.
    pub fn new_empty(width: usize, height: usize) -> Self {
        Self(Array2D::new(false, width, height))
    }

    pub fn size(&self) -> Dims {
        self.0.size()
    }

    pub fn enabled_count(&self) -> usize {
        self.0.iter().filter(|&&b| b).count()
    }

    pub fn clear(&mut self) {
        self.0.fill(false);
    }
}

impl ops::Index<Dims> for CellMask {
    type Output = bool;

    /// Returns the value at the given index, or `false` if the index is out of bounds.
    fn index(&self, index: Dims) -> &Self::Output {
        self.0.get(index).unwrap_or(&false)
    }
}

impl ops::IndexMut<Dims> for CellMask {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.0
            .get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}
