use anyhow::Context;
use clap::Parser;
use dungeon_solver::report::render_summary;
use dungeon_solver::solver::{solve_dfs_with_progress, SearchEvent, SearchLimits, DEFAULT_BAIL_REPORT_INTERVAL};
use dungeon_solver::utils::read_dungeon_file;
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the dungeon file (W wall, . floor, R/P/B monsters, S start)
    #[clap(default_value = "test.txt")]
    dungeon_file: PathBuf,

    /// Stop after expanding this many search nodes
    #[clap(long)]
    max_nodes: Option<u64>,

    /// Stop after this many seconds
    #[clap(long)]
    time_limit: Option<f64>,

    /// Only accept solutions cheaper than this
    #[clap(long)]
    cost_ceiling: Option<u32>,

    /// Print a progress line every this many pruned branches (0 disables)
    #[clap(long, default_value_t = DEFAULT_BAIL_REPORT_INTERVAL)]
    bail_interval: u64,

    /// Draw boards with ANSI colors
    #[clap(long)]
    color: bool,

    /// Suppress progress lines
    #[clap(short, long)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let time_start = Instant::now();

    println!("Reading filename: {}", args.dungeon_file.display());
    let dungeon = read_dungeon_file(&args.dungeon_file)
        .with_context(|| format!("Failed to load dungeon from {}", args.dungeon_file.display()))?;

    let time_limit = args
        .time_limit
        .map(Duration::try_from_secs_f64)
        .transpose()
        .context("Invalid --time-limit")?;
    let limits = SearchLimits {
        max_nodes: args.max_nodes,
        time_limit,
        cost_ceiling: args.cost_ceiling,
        bail_report_interval: args.bail_interval,
    };

    let quiet = args.quiet;
    let outcome = solve_dfs_with_progress(&dungeon, &limits, |event| {
        if quiet {
            return;
        }
        match event {
            SearchEvent::NewBest { cost, .. } => println!("Best cost: {}", cost),
            SearchEvent::Bails { count } => println!("bails: {}", count),
        }
    });

    println!("{}", render_summary(&outcome, time_start.elapsed(), args.color));
    Ok(())
}
