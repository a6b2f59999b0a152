use anyhow::Result;
use clap::Parser;

use phonebook::display::format_estimate;
use phonebook::estimate::estimate;

/// Basic COCOMO effort, schedule and staffing estimate
#[derive(Parser)]
#[command(name = "cocomo", version)]
struct Cli {
    /// Project size in thousands of lines of code
    #[arg(long, default_value_t = 9.0)]
    kloc: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let est = estimate(cli.kloc)?;
    println!("{}", format_estimate(&est));

    Ok(())
}
