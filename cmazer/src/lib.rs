//! Core of mazer.
//!
//! Generates perfect rectangular mazes with a randomized backtracker and solves
//! them with a depth-first search. Drawing is left to whoever implements
//! [`visualizer::Visualizer`].
//!
//! Both algorithms keep their own explicit stack, so grid size is bounded by
//! memory rather than by the call stack.

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod gameboard;
pub mod maze;
pub mod visualizer;

pub use maze::{Maze, MazeError};
