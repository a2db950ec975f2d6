use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use turnroute_lib::{plan_route, Grid, Position, RouteRequest};

mod output;

use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Turn-constrained maze routing utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route through a maze file and print the coordinates.
    Solve {
        /// Path to the maze file (one row per line, 0/. free, 1/# wall).
        #[arg(long)]
        maze: PathBuf,
        /// Start coordinate as ROW,COL.
        #[arg(long, value_parser = parse_position)]
        start: Position,
        /// Goal coordinate as ROW,COL.
        #[arg(long, value_parser = parse_position)]
        goal: Position,
        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Solve a maze and print it with the route overlaid.
    Render {
        /// Path to the maze file.
        #[arg(long)]
        maze: PathBuf,
        /// Start coordinate as ROW,COL.
        #[arg(long, value_parser = parse_position)]
        start: Position,
        /// Goal coordinate as ROW,COL.
        #[arg(long, value_parser = parse_position)]
        goal: Position,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Solve {
            maze,
            start,
            goal,
            format,
        } => handle_solve(&maze, start, goal, format),
        Command::Render { maze, start, goal } => handle_render(&maze, start, goal),
    }
}

fn handle_solve(maze: &Path, start: Position, goal: Position, format: OutputFormat) -> Result<()> {
    let grid = load_grid(maze)?;
    let plan = plan_route(&grid, &RouteRequest::new(start, goal))?;

    match format {
        OutputFormat::Text => output::render_text(&plan),
        OutputFormat::Json => output::render_json(&plan)?,
    }
    Ok(())
}

fn handle_render(maze: &Path, start: Position, goal: Position) -> Result<()> {
    let grid = load_grid(maze)?;
    let plan = plan_route(&grid, &RouteRequest::new(start, goal))?;
    output::render_overlay(&grid, &plan);
    Ok(())
}

fn load_grid(path: &Path) -> Result<Grid> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read maze file {}", path.display()))?;
    let grid = Grid::parse(&text)
        .with_context(|| format!("failed to parse maze file {}", path.display()))?;
    Ok(grid)
}

fn parse_position(value: &str) -> std::result::Result<Position, String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {value:?}"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|_| format!("invalid row in {value:?}"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|_| format!("invalid column in {value:?}"))?;
    Ok(Position::new(row, col))
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
