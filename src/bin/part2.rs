use anyhow::{Context, Result};
use clap::Parser;
use guard_patrol::CLIArgs;
use log::info;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CLIArgs::parse();
    let mut grid = guard_patrol::read_grid(&args.input_path).with_context(|| {
        format!(
            "Failed to read grid from given file({}).",
            args.input_path.display()
        )
    })?;
    grid.guard_start()?;

    info!("Running trials...");
    let loop_n = if args.parallel {
        guard_patrol::run_trials_par(&grid)
    } else {
        guard_patrol::run_trials(&mut grid, |row, row_n| {
            info!("Running trial {}/{}", row, row_n)
        })?
    };
    println!(
        "There is(are) {} position(s) where one new obstacle makes the guard loop.",
        loop_n
    );

    Ok(())
}
