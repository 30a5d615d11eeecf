use anyhow::Result;
use chrono::Local;
use colored::*;
use std::{fs::{self, File}, io::Write, path::PathBuf};

use crate::grid::{Grid, Value};
use crate::solver::SolveStats;

/// Writes numbered search-trace files and optionally echoes them to the
/// console. One file per logged event: trace(1).txt, trace(2).txt, ...
pub struct DevLogger {
    dir: PathBuf,
    color: bool,
    step: bool,
    max_logs: usize,
    counter: usize,
}

impl DevLogger {
    pub fn new(dir: impl Into<PathBuf>, color: bool, step: bool, max_logs: usize) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, color, step, max_logs, counter: 0 })
    }

    pub fn log(&mut self, title: &str, details: &str) -> Result<()> {
        if self.max_logs != 0 && self.counter >= self.max_logs { return Ok(()); }
        self.counter += 1;
        let path = self.dir.join(format!("trace({}).txt", self.counter));

        let ts = Local::now().format("%Y-%m-%d %H:%M:%S");
        let mut f = File::create(&path)?;
        writeln!(f, "[{}] {}\n\n{}", ts, title, details)?;

        if self.color {
            println!("{} {}\n{}", "➤".cyan().bold(), title.bold(), details);
        } else {
            println!("➤ {}\n{}", title, details);
        }

        if self.step {
            print!("-- press Enter to continue --");
            use std::io::{self, Write as _};
            io::stdout().flush().ok();
            let mut s = String::new();
            io::stdin().read_line(&mut s).ok();
        }
        Ok(())
    }

    pub fn range_attempt(&mut self, min: Value, max: Value, grid: &Grid) -> Result<()> {
        self.log(
            &format!("Trying range {}..={}", min, max),
            &grid.to_pretty_string(),
        )
    }

    pub fn solved(&mut self, min: Value, max: Value, grid: &Grid, stats: SolveStats) -> Result<()> {
        self.log(
            &format!("Solved with range {}..={}", min, max),
            &format!(
                "{}\nranges tried: {}, nodes: {}, backtracks: {}",
                grid.to_pretty_string(),
                stats.ranges_tried,
                stats.nodes,
                stats.backtracks
            ),
        )
    }

    pub fn exhausted(&mut self, stats: SolveStats) -> Result<()> {
        self.log(
            "No solution",
            &format!(
                "all candidate ranges exhausted (ranges tried: {}, nodes: {}, backtracks: {})",
                stats.ranges_tried, stats.nodes, stats.backtracks
            ),
        )
    }
}
