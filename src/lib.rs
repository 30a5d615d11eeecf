pub mod generator;
pub mod grid;
pub mod logger;
pub mod solver;
pub mod validate;

pub use grid::{Grid, Pos};
pub use solver::{SolveStats, Solver};
