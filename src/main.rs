use anyhow::{bail, Context, Result};
use clap::Parser;
use numbrix::{generator::PuzzleGenerator, grid::Grid, logger::DevLogger, solver::Solver};
use std::{fs, path::PathBuf};

#[derive(Parser, Debug)]
#[command(name = "numbrix", version, about = "6x6 number-path puzzle solver with search traces")]
struct Cli {
    /// Path to a puzzle file (36 cells, whitespace separated; . or _ for blanks).
    /// If omitted, reads from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Generate a puzzle with this many clues instead of solving one
    #[arg(short, long, conflicts_with = "input")]
    generate: Option<usize>,

    /// Seed for the puzzle generator
    #[arg(long)]
    seed: Option<u64>,

    /// First value of the generated path
    #[arg(long, default_value_t = 1)]
    start: u32,

    /// Step-by-step mode (pauses after each trace entry). Press Enter to continue.
    #[arg(long)]
    step: bool,

    /// Maximum trace files to write (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    max_logs: usize,

    /// Emit trace entries to console with colors
    #[arg(long)]
    color: bool,
}

fn read_puzzle(input: &Option<PathBuf>) -> Result<String> {
    match input {
        Some(p) => fs::read_to_string(p).with_context(|| format!("reading {}", p.display())),
        None => {
            use std::io::{self, Read};
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(clues) = cli.generate {
        if !(2..=36).contains(&clues) { bail!("clue count must be between 2 and 36") }
        let mut generator = PuzzleGenerator::new(cli.seed);
        let puzzle = generator.generate_puzzle(clues, cli.start);
        println!("{}", puzzle.to_pretty_string());
        println!("{}", puzzle.to_line());
        return Ok(());
    }

    let text = read_puzzle(&cli.input)?;
    let grid = Grid::parse(&text).context("parse puzzle")?;
    let mut logger = DevLogger::new("tracelogs", cli.color, cli.step, cli.max_logs)?;
    let mut solver = Solver::new();

    match solver.solve(&grid, &mut logger)? {
        Some(solution) => println!("\nSolved grid:\n{}", solution.to_pretty_string()),
        None => println!("\nNo solution exists for this grid."),
    }
    Ok(())
}
