//! Blocks-world planning CLI.
//!
//! Reads a start state and a goal state (from flags, or interactively when
//! either is missing) and prints the derived plan one action per line.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use blocks_core::{parse_state, World};
use blocks_planner::GoalStackPlanner;

#[derive(Parser)]
#[command(name = "blocks")]
#[command(about = "Goal-stack planner for the blocks world", version)]
struct Cli {
    /// Start state, e.g. "on_table a^on b a^clear b^arm_empty"
    #[arg(long)]
    start: Option<String>,

    /// Goal state, e.g. "holding b"
    #[arg(long)]
    goal: Option<String>,

    /// Emit the plan as JSON instead of one action per line
    #[arg(long)]
    json: bool,

    /// Verbose output (per-step planning stack and world snapshots)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let start = match cli.start {
        Some(state) => state,
        None => prompt("Enter the start state :: ")?,
    };
    let goal = match cli.goal {
        Some(state) => state,
        None => prompt("Enter the goal state :: ")?,
    };

    let start: World = start.parse().context("invalid start state")?;
    let goals = parse_state(&goal).context("invalid goal state")?;

    let plan = GoalStackPlanner::new()
        .plan(&start, &goals)
        .context("planning failed")?;

    if cli.json {
        println!("{}", serde_json::to_string(&plan)?);
    } else {
        for action in plan.iter() {
            println!("{action}");
        }
        println!("Plan derived ({} steps)", plan.len());
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read state from stdin")?;
    Ok(line.trim().to_string())
}
