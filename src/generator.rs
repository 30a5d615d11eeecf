use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::grid::{neighbors, Grid, Value, CELLS};
use crate::solver::count_solutions;

pub struct PuzzleGenerator {
    rng: rand::rngs::StdRng,
}

impl PuzzleGenerator {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => rand::rngs::StdRng::seed_from_u64(s),
            None => rand::rngs::StdRng::from_rng(rand::thread_rng()).unwrap(),
        };
        Self { rng }
    }

    /// A complete random path over the whole board, numbered
    /// start_value..=start_value+35.
    pub fn generate_path(&mut self, start_value: Value) -> Grid {
        let target = start_value + (CELLS as Value - 1);
        loop {
            let mut grid = Grid::empty();
            let mut visited = [false; CELLS];
            let start = self.rng.gen_range(0..CELLS);
            grid.cells[start] = start_value;
            visited[start] = true;
            if self.walk(&mut grid, start, start_value, &mut visited, target) {
                return grid;
            }
        }
    }

    /// Generates a puzzle with roughly `target_clues` clues: build a full
    /// path, then strip cells in random order, keeping each removal only if
    /// the puzzle still has a unique completion. The cells holding the range
    /// extremes always stay, pinning the inferred range to the generated one.
    pub fn generate_puzzle(&mut self, target_clues: usize, start_value: Value) -> Grid {
        let max_value = start_value + (CELLS as Value - 1);
        let mut puzzle = self.generate_path(start_value);
        let mut positions: Vec<usize> = (0..CELLS).collect();
        positions.shuffle(&mut self.rng);
        let mut clues = CELLS;
        for idx in positions {
            if clues <= target_clues { break; }
            let old = puzzle.cells[idx];
            if old == start_value || old == max_value { continue; }
            puzzle.cells[idx] = 0;
            if count_solutions(&puzzle, start_value, max_value, 2) != 1 {
                // restore
                puzzle.cells[idx] = old;
            } else {
                clues -= 1;
            }
        }
        puzzle
    }

    fn walk(&mut self, grid: &mut Grid, index: usize, value: Value, visited: &mut [bool; CELLS], target: Value) -> bool {
        if value == target { return true; }
        let mut moves: Vec<usize> = neighbors(index).iter().copied().filter(|&n| !visited[n]).collect();
        moves.shuffle(&mut self.rng);
        for n in moves {
            grid.cells[n] = value + 1;
            visited[n] = true;
            if self.walk(grid, n, value + 1, visited, target) { return true; }
            grid.cells[n] = 0;
            visited[n] = false;
        }
        false
    }
}
