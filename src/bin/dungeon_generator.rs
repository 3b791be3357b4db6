use clap::Parser;
use dungeon_solver::heuristics::{minimum_extra_cost, remaining_health};
use dungeon_solver::utils::{generate_dungeon, GeneratorConfig};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Prints a random dungeon in the solver's input format", long_about = None)]
struct Args {
    /// Total rows, including the wall border
    #[clap(long, default_value_t = 7)]
    rows: usize,

    /// Total columns, including the wall border
    #[clap(long, default_value_t = 7)]
    cols: usize,

    /// Number of monsters
    #[clap(short, long, default_value_t = 4)]
    monsters: usize,

    /// Number of walls inside the border
    #[clap(short, long, default_value_t = 3)]
    walls: usize,

    /// Random seed; the same seed always gives the same dungeon
    #[clap(short, long, default_value_t = 0)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = GeneratorConfig {
        rows: args.rows,
        cols: args.cols,
        monsters: args.monsters,
        walls: args.walls,
    };

    let dungeon = generate_dungeon(&config, args.seed)?;
    println!("{}", dungeon);

    let health = remaining_health(&dungeon.grid);
    eprintln!(
        "Seed {}: {} monsters, health {}, cost lower bound {}",
        args.seed,
        dungeon.grid.monster_count(),
        health,
        minimum_extra_cost(health)
    );
    Ok(())
}
