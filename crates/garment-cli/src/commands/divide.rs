//! Divide command implementation.

use crate::cli::DivideArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::{engine_for, load_problem};
use crate::output::Formatter;
use tracing::info;

/// Execute the divide command.
pub fn execute_divide(args: DivideArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", divide(&args, config, formatter)?);
    Ok(())
}

fn divide(args: &DivideArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let engine = engine_for(&args.problem, config);
    let claims = load_problem(&args.problem, &engine)?;
    let rule = args
        .rule
        .map(Into::into)
        .unwrap_or(engine.config().default_rule);

    info!("Dividing {} among {} claims with {}", claims.estate(), claims.len(), rule);
    let allocation = engine.divide(&claims, rule)?;
    formatter.format_allocation(rule, &claims, &allocation)
}
