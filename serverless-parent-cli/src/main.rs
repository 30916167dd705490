//! CLI entrypoint for `serverless-parent`.

use clap::Parser;
use serverless_parent_cli::cli::Args;
use serverless_parent_cli::{logging, run};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    logging::init(args.verbosity)?;
    run(&args)?;
    Ok(())
}
