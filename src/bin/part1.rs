use anyhow::{Context, Result};
use clap::Parser;
use guard_patrol::CLIArgs;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CLIArgs::parse();
    let grid = guard_patrol::read_grid(&args.input_path).with_context(|| {
        format!(
            "Failed to read grid from given file({}).",
            args.input_path.display()
        )
    })?;
    let start = grid.guard_start()?;

    let position_n = guard_patrol::patrol_positions(&grid, &start).len();
    println!(
        "The guard will visit {} distinct position(s) before leaving given grid.",
        position_n
    );

    Ok(())
}
