//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &mut Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => println!("{}", formatter.format_config(config)?),
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Reset => {
            reset_config(config, path)?;
            println!(
                "{}",
                formatter.success(&format!("Wrote default configuration to {}", path.display()))
            );
        }
    }
    Ok(())
}

/// Replace the configuration with defaults and save it.
fn reset_config(config: &mut Config, path: &Path) -> Result<()> {
    *config = Config::default();
    config.save_to(path)
}
