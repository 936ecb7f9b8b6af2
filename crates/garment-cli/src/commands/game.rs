//! Game command implementation.

use crate::cli::DivideArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::{engine_for, load_problem};
use crate::output::Formatter;
use garment_engine::BankruptcyGame;
use tracing::info;

/// Execute the game command.
pub fn execute_game(args: DivideArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", game(&args, config, formatter)?);
    Ok(())
}

fn game(args: &DivideArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let engine = engine_for(&args.problem, config);
    let claims = load_problem(&args.problem, &engine)?;
    let game = BankruptcyGame::from_claims(&claims)?;
    let rule = args
        .rule
        .map(Into::into)
        .unwrap_or(engine.config().default_rule);

    info!("Checking {} against the core of a {}-player game", rule, game.players());
    let allocation = engine.divide(&claims, rule)?;
    formatter.format_game(&game, rule, &allocation)
}
