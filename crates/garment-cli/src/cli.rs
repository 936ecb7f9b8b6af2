//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};
use garment_domain::Rule;
use garment_engine::OverEstatePolicy;

/// Garment - divide an estate among claims that exceed it.
#[derive(Debug, Parser)]
#[command(name = "garment")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "GARMENT_CONFIG")]
    pub config: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (awards only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Divide an estate with one rule
    Divide(DivideArgs),

    /// Divide an estate with every rule side by side
    Compare(ProblemArgs),

    /// Inspect the bankruptcy game and check a rule against its core
    Game(DivideArgs),

    /// Show or reset the configuration
    Config(ConfigArgs),
}

/// The division problem, from flags or a JSON file.
#[derive(Debug, Args)]
pub struct ProblemArgs {
    /// Estate to divide (e.g. 100, 200/3, 12.5)
    #[arg(short, long, allow_hyphen_values = true)]
    pub estate: Option<String>,

    /// Comma-separated claims (e.g. 100,200,300)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub claims: Vec<String>,

    /// JSON file with "estate" and "claims"
    #[arg(long, conflicts_with_all = ["estate", "claims"])]
    pub claims_file: Option<String>,

    /// Handling of claims above the estate (overrides config)
    #[arg(short, long, value_enum)]
    pub policy: Option<PolicyArg>,
}

/// Arguments for the divide and game commands.
#[derive(Debug, Args)]
pub struct DivideArgs {
    #[command(flatten)]
    pub problem: ProblemArgs,

    /// Division rule (defaults to the configured rule)
    #[arg(short, long, value_enum)]
    pub rule: Option<RuleArg>,
}

/// Arguments for configuration management.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write the default configuration
    Reset,
}

/// Rule argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum RuleArg {
    /// Awards proportional to claims
    Proportional,
    /// Constrained equal awards
    Cea,
    /// Constrained equal losses
    Cel,
    /// Contested garment rule
    Talmud,
}

/// Over-estate policy argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PolicyArg {
    /// Truncate silently
    Cap,
    /// Truncate with a warning
    Warn,
    /// Refuse to divide
    Reject,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<RuleArg> for Rule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::Proportional => Rule::Proportional,
            RuleArg::Cea => Rule::Cea,
            RuleArg::Cel => Rule::Cel,
            RuleArg::Talmud => Rule::Talmud,
        }
    }
}

impl From<PolicyArg> for OverEstatePolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Cap => OverEstatePolicy::Cap,
            PolicyArg::Warn => OverEstatePolicy::Warn,
            PolicyArg::Reject => OverEstatePolicy::Reject,
        }
    }
}
