//! Compare command implementation.

use crate::cli::ProblemArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::{engine_for, load_problem};
use crate::output::Formatter;

/// Execute the compare command.
pub fn execute_compare(args: ProblemArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", compare(&args, config, formatter)?);
    Ok(())
}

fn compare(args: &ProblemArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let engine = engine_for(args, config);
    let claims = load_problem(args, &engine)?;
    let results = engine.compare(&claims)?;
    formatter.format_comparison(&claims, &results)
}
