use itertools::Itertools;

use crate::grid::{adjacent, Clue, Grid, Value};

/// Feasibility of a candidate range against the given clues. Hard rejections,
/// checked in order: the range must fit in `len` cells, every clue must fall
/// inside it, clue values must be unique, and clues holding consecutive values
/// must sit on adjacent cells.
pub fn clues_fit_range(clues: &[Clue], min: Value, max: Value, len: usize) -> bool {
    if max < min || (max - min + 1) as usize > len {
        return false;
    }
    if clues.iter().any(|c| c.value < min || c.value > max) {
        return false;
    }
    if !clues.iter().map(|c| c.value).all_unique() {
        return false;
    }
    clues
        .iter()
        .sorted_by_key(|c| c.value)
        .tuple_windows()
        .all(|(a, b)| b.value != a.value + 1 || adjacent(a.index, b.index))
}

/// A completed grid is a solution for [min,max] when every value in the range
/// appears, consecutive values sit on adjacent cells, and no cell is empty.
pub fn is_valid_solution(grid: &Grid, min: Value, max: Value) -> bool {
    if (min..=max).any(|v| grid.position_of(v).is_none()) {
        return false;
    }
    for v in min..max {
        match (grid.position_of(v), grid.position_of(v + 1)) {
            (Some(a), Some(b)) if adjacent(a, b) => {}
            _ => return false,
        }
    }
    grid.is_filled()
}
