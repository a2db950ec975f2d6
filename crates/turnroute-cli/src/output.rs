//! Output formatting for solved routes.

use anyhow::Result;
use clap::ValueEnum;

use turnroute_lib::{Grid, Position, RoutePlan};

/// Supported output formats for the solve command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print the route as a coordinate list.
pub fn render_text(plan: &RoutePlan) {
    println!(
        "Route from {} to {} ({} moves):",
        plan.start,
        plan.goal,
        plan.move_count()
    );
    for step in &plan.steps {
        println!("- {step}");
    }
}

/// Print the route plan as JSON.
pub fn render_json(plan: &RoutePlan) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(plan)?);
    Ok(())
}

/// Print the maze with the route overlaid: `S` start, `G` goal, `*`
/// route cells, `.` free cells, `#` walls.
pub fn render_overlay(grid: &Grid, plan: &RoutePlan) {
    let on_route: std::collections::HashSet<Position> = plan.steps.iter().copied().collect();

    for row in 0..grid.rows() {
        let mut line = String::with_capacity(grid.cols());
        for col in 0..grid.cols() {
            let position = Position::new(row, col);
            let glyph = if position == plan.start {
                'S'
            } else if position == plan.goal {
                'G'
            } else if on_route.contains(&position) {
                '*'
            } else if grid.is_free(position) {
                '.'
            } else {
                '#'
            };
            line.push(glyph);
        }
        println!("{line}");
    }
    println!("\n{} moves", plan.move_count());
}
