use anyhow::Result;

use crate::grid::{adjacent, neighbors, Clue, Grid, Value, CELLS};
use crate::logger::DevLogger;
use crate::validate::{clues_fit_range, is_valid_solution};

/// Which way a partial path grows from its anchor clue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction { Ascending, Descending }

impl Direction {
    fn next(self, value: Value) -> Value {
        match self {
            Direction::Ascending => value + 1,
            Direction::Descending => value - 1,
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SolveStats {
    pub ranges_tried: usize,
    pub nodes: u64,
    pub backtracks: u64,
}

pub struct Solver {
    stats: SolveStats,
}

impl Default for Solver {
    fn default() -> Self { Self::new() }
}

impl Solver {
    pub fn new() -> Self {
        Self { stats: SolveStats::default() }
    }

    pub fn stats(&self) -> SolveStats { self.stats }

    /// Solves the grid, inferring the value range from the clues. The range is
    /// not part of the input: candidate minimums are scanned from the lowest
    /// clue value downward and the first candidate that survives validation,
    /// search, and the solution check wins. `None` means no candidate worked.
    pub fn solve(&mut self, grid: &Grid, logger: &mut DevLogger) -> Result<Option<Grid>> {
        self.stats = SolveStats::default();

        let mut clues = grid.clues();
        if clues.is_empty() {
            logger.log("No clues", "an empty grid has no orientation; giving up")?;
            return Ok(None);
        }
        clues.sort_unstable_by_key(|c| c.value);
        let lowest = clues[0].value;
        let highest = clues[clues.len() - 1].value;
        // values are bounded below by 1 and the range is exactly CELLS wide
        let absolute_min = highest.saturating_sub(CELLS as Value - 1).max(1);

        for candidate_min in (absolute_min..=lowest).rev() {
            let Some(candidate_max) = candidate_min.checked_add(CELLS as Value - 1) else {
                continue;
            };
            if candidate_max < highest {
                continue;
            }
            if !clues_fit_range(&clues, candidate_min, candidate_max, CELLS) {
                continue;
            }
            self.stats.ranges_tried += 1;
            logger.range_attempt(candidate_min, candidate_max, grid)?;

            let mut attempt = grid.clone();
            if self.attempt_range(&mut attempt, &clues, candidate_min, candidate_max)
                && is_valid_solution(&attempt, candidate_min, candidate_max)
                && attempt.is_filled()
            {
                logger.solved(candidate_min, candidate_max, &attempt, self.stats)?;
                return Ok(Some(attempt));
            }
        }
        logger.exhausted(self.stats)?;
        Ok(None)
    }

    /// Builds the full path for one candidate range, anchored at the
    /// lowest-valued clue: grow down to `min` first when the anchor sits above
    /// it, then up to `max`.
    fn attempt_range(&mut self, grid: &mut Grid, clues: &[Clue], min: Value, max: Value) -> bool {
        let anchor = clues[0];
        let mut visited = [false; CELLS];
        visited[anchor.index] = true;
        if anchor.value > min
            && !self.extend(grid, anchor.index, anchor.value, &mut visited, min, Direction::Descending)
        {
            return false;
        }
        self.extend(grid, anchor.index, anchor.value, &mut visited, max, Direction::Ascending)
    }

    /// Extends the path one value at a time toward `target`. A clue that
    /// already fixes the next value must be adjacent or the branch dies;
    /// otherwise every unvisited empty neighbor is tried with full undo.
    fn extend(
        &mut self,
        grid: &mut Grid,
        index: usize,
        value: Value,
        visited: &mut [bool; CELLS],
        target: Value,
        dir: Direction,
    ) -> bool {
        self.stats.nodes += 1;
        if value == target {
            return true;
        }
        let next_value = dir.next(value);
        if let Some(next_index) = grid.position_of(next_value) {
            if !adjacent(index, next_index) {
                return false;
            }
            visited[next_index] = true;
            return self.extend(grid, next_index, next_value, visited, target, dir);
        }
        for &n in neighbors(index) {
            if visited[n] || grid.cells[n] != 0 {
                continue;
            }
            grid.cells[n] = next_value;
            visited[n] = true;
            if self.extend(grid, n, next_value, visited, target, dir) {
                return true;
            }
            grid.cells[n] = 0;
            visited[n] = false;
            self.stats.backtracks += 1;
        }
        false
    }
}

/// Counts completions of the grid within a fixed [min,max], stopping at
/// `limit`. Used by the generator to keep stripped puzzles unique.
pub fn count_solutions(grid: &Grid, min: Value, max: Value, limit: usize) -> usize {
    let mut clues = grid.clues();
    if clues.is_empty() {
        return 0;
    }
    clues.sort_unstable_by_key(|c| c.value);
    if !clues_fit_range(&clues, min, max, CELLS) {
        return 0;
    }
    let anchor = clues[0];
    let mut work = grid.clone();
    let mut visited = [false; CELLS];
    visited[anchor.index] = true;
    let mut count = 0;
    if anchor.value > min {
        count_down(&mut work, anchor.index, anchor.value, &mut visited, min, anchor, max, limit, &mut count);
    } else {
        count_up(&mut work, anchor.index, anchor.value, &mut visited, max, limit, &mut count);
    }
    count
}

#[allow(clippy::too_many_arguments)]
fn count_down(
    grid: &mut Grid,
    index: usize,
    value: Value,
    visited: &mut [bool; CELLS],
    min: Value,
    anchor: Clue,
    max: Value,
    limit: usize,
    count: &mut usize,
) {
    if *count >= limit {
        return;
    }
    if value == min {
        // downward half is complete; every upward completion of it counts
        count_up(grid, anchor.index, anchor.value, visited, max, limit, count);
        return;
    }
    let next_value = value - 1;
    if let Some(next_index) = grid.position_of(next_value) {
        if !adjacent(index, next_index) {
            return;
        }
        visited[next_index] = true;
        count_down(grid, next_index, next_value, visited, min, anchor, max, limit, count);
        visited[next_index] = false;
        return;
    }
    for &n in neighbors(index) {
        if visited[n] || grid.cells[n] != 0 {
            continue;
        }
        grid.cells[n] = next_value;
        visited[n] = true;
        count_down(grid, n, next_value, visited, min, anchor, max, limit, count);
        grid.cells[n] = 0;
        visited[n] = false;
        if *count >= limit {
            return;
        }
    }
}

fn count_up(
    grid: &mut Grid,
    index: usize,
    value: Value,
    visited: &mut [bool; CELLS],
    max: Value,
    limit: usize,
    count: &mut usize,
) {
    if *count >= limit {
        return;
    }
    if value == max {
        *count += 1;
        return;
    }
    let next_value = value + 1;
    if let Some(next_index) = grid.position_of(next_value) {
        if !adjacent(index, next_index) {
            return;
        }
        visited[next_index] = true;
        count_up(grid, next_index, next_value, visited, max, limit, count);
        visited[next_index] = false;
        return;
    }
    for &n in neighbors(index) {
        if visited[n] || grid.cells[n] != 0 {
            continue;
        }
        grid.cells[n] = next_value;
        visited[n] = true;
        count_up(grid, n, next_value, visited, max, limit, count);
        grid.cells[n] = 0;
        visited[n] = false;
        if *count >= limit {
            return;
        }
    }
}
