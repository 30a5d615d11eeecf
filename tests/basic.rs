use numbrix::grid::{adjacent, neighbors, Clue, Grid, Pos, CELLS, SIDE};
use numbrix::validate::{clues_fit_range, is_valid_solution};

fn snake() -> Grid {
    // boustrophedon path, 1 in the top-left corner
    Grid::from_rows([
        [1, 2, 3, 4, 5, 6],
        [12, 11, 10, 9, 8, 7],
        [13, 14, 15, 16, 17, 18],
        [24, 23, 22, 21, 20, 19],
        [25, 26, 27, 28, 29, 30],
        [36, 35, 34, 33, 32, 31],
    ])
}

#[test]
fn parse_and_format_round_trip() {
    let g = snake();
    let line = g.to_line();
    let parsed = Grid::parse(&line).expect("parse own output");
    assert_eq!(parsed, g);
}

#[test]
fn parse_blanks_and_sentinels() {
    let text = ". _ 0 5 6 7 ".to_string() + &". ".repeat(30);
    let g = Grid::parse(&text).expect("parse");
    assert_eq!(g.value_at(0), 0);
    assert_eq!(g.value_at(1), 0);
    assert_eq!(g.value_at(2), 0);
    assert_eq!(g.value_at(3), 5);
    assert_eq!(g.clues().len(), 3);
}

#[test]
fn parse_rejects_bad_input() {
    assert!(Grid::parse("1 2 3").is_err(), "too few cells");
    assert!(Grid::parse(&"1 ".repeat(37)).is_err(), "too many cells");
    assert!(Grid::parse(&(". ".repeat(35) + "x")).is_err(), "non-numeric cell");
    assert!(Grid::parse(&(". ".repeat(35) + "-4")).is_err(), "negative cell");
}

#[test]
fn pos_round_trip() {
    for i in 0..CELLS {
        assert_eq!(Pos::from_idx(i).idx(), i);
    }
    assert_eq!(Pos::from_idx(7), Pos { r: 1, c: 1 });
    assert_eq!(snake().get(Pos { r: 1, c: 0 }), 12);
}

#[test]
fn adjacency_is_symmetric() {
    for a in 0..CELLS {
        for b in 0..CELLS {
            assert_eq!(adjacent(a, b), adjacent(b, a), "cells {} and {}", a, b);
        }
    }
}

#[test]
fn adjacency_ignores_diagonals_and_self() {
    assert!(adjacent(0, 1));
    assert!(adjacent(0, 6));
    assert!(!adjacent(0, 7), "diagonal");
    assert!(!adjacent(0, 0), "self");
    assert!(!adjacent(5, 6), "row wrap");
}

#[test]
fn neighbor_counts_and_order() {
    for i in 0..CELLS {
        let n = neighbors(i).len();
        assert!((2..=4).contains(&n), "cell {} has {} neighbors", i, n);
    }
    for corner in [0, SIDE - 1, CELLS - SIDE, CELLS - 1] {
        assert_eq!(neighbors(corner).len(), 2, "corner {}", corner);
    }
    // up, right, down, left
    assert_eq!(neighbors(14), &[8, 15, 20, 13]);
    assert_eq!(neighbors(0), &[1, 6]);
    assert_eq!(neighbors(35), &[29, 34]);
}

#[test]
fn clue_range_checks() {
    let ok = [Clue { index: 0, value: 5 }, Clue { index: 1, value: 6 }];
    assert!(clues_fit_range(&ok, 5, 40, CELLS));

    // range wider than the board
    assert!(!clues_fit_range(&ok, 1, 40, CELLS));
    // clue outside the candidate range
    assert!(!clues_fit_range(&ok, 6, 41, CELLS));
    // duplicate clue values
    let dup = [Clue { index: 0, value: 5 }, Clue { index: 10, value: 5 }];
    assert!(!clues_fit_range(&dup, 1, 36, CELLS));
    // consecutive values on non-adjacent cells
    let apart = [Clue { index: 0, value: 5 }, Clue { index: 10, value: 6 }];
    assert!(!clues_fit_range(&apart, 1, 36, CELLS));
}

#[test]
fn solution_validator_is_idempotent() {
    let g = snake();
    assert!(is_valid_solution(&g, 1, 36));
    assert!(is_valid_solution(&g, 1, 36), "second pass agrees");
}

#[test]
fn solution_validator_rejects_swapped_pair() {
    // swapping 1 and 2 leaves 2 non-adjacent to 3
    let g = Grid::from_rows([
        [2, 1, 3, 4, 5, 6],
        [12, 11, 10, 9, 8, 7],
        [13, 14, 15, 16, 17, 18],
        [24, 23, 22, 21, 20, 19],
        [25, 26, 27, 28, 29, 30],
        [36, 35, 34, 33, 32, 31],
    ]);
    assert!(!is_valid_solution(&g, 1, 36));
}

#[test]
fn solution_validator_rejects_holes_and_wrong_range() {
    let mut line: Vec<String> = snake().to_line().split(' ').map(String::from).collect();
    line[20] = ".".into();
    let holed = Grid::parse(&line.join(" ")).expect("parse");
    assert!(!is_valid_solution(&holed, 1, 36));

    let g = snake();
    assert!(!is_valid_solution(&g, 2, 37), "range the grid does not realize");
}

#[test]
fn pretty_string_marks_blanks() {
    let g = Grid::parse(&(". ".repeat(35) + "7")).expect("parse");
    let s = g.to_pretty_string();
    assert!(s.contains('·'));
    assert!(s.contains('7'));
}
