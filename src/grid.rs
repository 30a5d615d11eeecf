use anyhow::{bail, Result};
use itertools::Itertools;
use once_cell::sync::Lazy;

pub type Value = u32; // 0 = empty

pub const SIDE: usize = 6;
pub const CELLS: usize = SIDE * SIDE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos { pub r: usize, pub c: usize }

impl Pos {
    pub fn idx(self) -> usize { self.r * SIDE + self.c }
    pub fn from_idx(i: usize) -> Self { Self { r: i / SIDE, c: i % SIDE } }
}

/// A pre-filled cell: where it is and what it holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Clue {
    pub index: usize,
    pub value: Value,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub(crate) cells: [Value; CELLS],
}

impl Grid {
    pub fn empty() -> Self { Self { cells: [0; CELLS] } }

    pub fn from_rows(rows: [[Value; SIDE]; SIDE]) -> Self {
        let mut g = Self::empty();
        for r in 0..SIDE { for c in 0..SIDE { g.cells[r * SIDE + c] = rows[r][c]; } }
        g
    }

    /// Parses 36 whitespace- or comma-separated cells; `.`, `_`, and `0` are blanks.
    pub fn parse(text: &str) -> Result<Self> {
        let mut g = Grid::empty();
        let mut count = 0usize;
        let tokens = text
            .split(|ch: char| ch.is_whitespace() || ch == ',')
            .filter(|t| !t.is_empty());
        for tok in tokens {
            if count == CELLS { bail!("expected {} cells, got more", CELLS) }
            g.cells[count] = match tok {
                "." | "_" => 0,
                _ => match tok.parse::<Value>() {
                    Ok(v) => v,
                    Err(_) => bail!("invalid cell {tok:?}"),
                },
            };
            count += 1;
        }
        if count != CELLS { bail!("expected {} cells, got {}", CELLS, count) }
        Ok(g)
    }

    pub fn to_line(&self) -> String {
        self.cells
            .iter()
            .map(|&v| if v == 0 { ".".into() } else { v.to_string() })
            .join(" ")
    }

    pub fn to_pretty_string(&self) -> String {
        let width = self.cells.iter().map(|&v| v.to_string().len()).max().unwrap_or(1);
        let bar = format!("+{}+\n", "-".repeat(SIDE * (width + 1) + 1));
        let mut s = String::new();
        s.push_str(&bar);
        for r in 0..SIDE {
            s.push_str("| ");
            for c in 0..SIDE {
                let v = self.cells[r * SIDE + c];
                if v == 0 {
                    s.push_str(&format!("{:>width$} ", "·"));
                } else {
                    s.push_str(&format!("{v:>width$} "));
                }
            }
            s.push('|');
            s.push('\n');
        }
        s.push_str(&bar);
        s
    }

    pub fn get(&self, p: Pos) -> Value { self.cells[p.idx()] }
    pub fn value_at(&self, index: usize) -> Value { self.cells[index] }

    pub fn is_filled(&self) -> bool { self.cells.iter().all(|&v| v != 0) }

    pub fn clues(&self) -> Vec<Clue> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v != 0)
            .map(|(index, &value)| Clue { index, value })
            .collect()
    }

    pub fn position_of(&self, value: Value) -> Option<usize> {
        self.cells.iter().position(|&v| v == value)
    }
}

/// True iff the cells share a row or column at distance 1.
pub fn adjacent(a: usize, b: usize) -> bool {
    let (pa, pb) = (Pos::from_idx(a), Pos::from_idx(b));
    (pa.r == pb.r && pa.c.abs_diff(pb.c) == 1) || (pa.c == pb.c && pa.r.abs_diff(pb.r) == 1)
}

// neighbor order: up, right, down, left
static NEIGHBORS: Lazy<Vec<Vec<usize>>> = Lazy::new(|| {
    (0..CELLS)
        .map(|i| {
            let Pos { r, c } = Pos::from_idx(i);
            let mut v = Vec::with_capacity(4);
            if r > 0 { v.push(i - SIDE); }
            if c + 1 < SIDE { v.push(i + 1); }
            if r + 1 < SIDE { v.push(i + SIDE); }
            if c > 0 { v.push(i - 1); }
            v
        })
        .collect()
});

pub fn neighbors(index: usize) -> &'static [usize] {
    &NEIGHBORS[index]
}
