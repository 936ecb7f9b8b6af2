//! Output formatting for the CLI.

use crate::config::{Config, OutputFormat};
use crate::error::Result;
use colored::*;
use garment_domain::{Allocation, Amount, ClaimSet, Rule};
use garment_engine::BankruptcyGame;
use serde_json::json;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the result of a single rule.
    pub fn format_allocation(
        &self,
        rule: Rule,
        claims: &ClaimSet,
        allocation: &Allocation,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&allocation_json(
                rule, claims, allocation,
            ))?),
            OutputFormat::Table => Ok(self.format_allocation_table(rule, claims, allocation)),
            OutputFormat::Quiet => Ok(quiet_line(allocation.awards())),
        }
    }

    /// Format every rule side by side.
    pub fn format_comparison(
        &self,
        claims: &ClaimSet,
        results: &[(Rule, Allocation)],
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let rules: Vec<serde_json::Value> = results
                    .iter()
                    .map(|(rule, allocation)| allocation_json(*rule, claims, allocation))
                    .collect();
                Ok(serde_json::to_string_pretty(&rules)?)
            }
            OutputFormat::Table => Ok(self.format_comparison_table(claims, results)),
            OutputFormat::Quiet => Ok(results
                .iter()
                .map(|(rule, allocation)| format!("{} {}", rule, quiet_line(allocation.awards())))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the coalition values of `game` and how `allocation` fares in it.
    pub fn format_game(
        &self,
        game: &BankruptcyGame,
        rule: Rule,
        allocation: &Allocation,
    ) -> Result<String> {
        let in_core = game.in_core(allocation);
        let max_excess = game.max_excess(allocation);

        match self.format {
            OutputFormat::Json => {
                let coalitions: Vec<serde_json::Value> = game
                    .coalitions()
                    .filter(|coalition| !coalition.is_empty())
                    .map(|coalition| {
                        let value = game.value(coalition);
                        let excess = game.excess(coalition, allocation);
                        json!({
                            "members": coalition.members().collect::<Vec<_>>(),
                            "value": value.to_string(),
                            "awarded": (&value - &excess).to_string(),
                            "excess": excess.to_string(),
                        })
                    })
                    .collect();
                let report = json!({
                    "rule": rule.as_str(),
                    "players": game.players(),
                    "monotonic": game.is_monotonic(),
                    "convex": game.is_convex(),
                    "in_core": in_core,
                    "max_excess": max_excess.to_string(),
                    "coalitions": coalitions,
                });
                Ok(serde_json::to_string_pretty(&report)?)
            }
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Coalition", "Value", "Awarded", "Excess"]);
                for coalition in game.coalitions().filter(|c| !c.is_empty()) {
                    let value = game.value(coalition);
                    let excess = game.excess(coalition, allocation);
                    builder.push_record([
                        coalition.to_string(),
                        format_amount(&value),
                        format_amount(&(&value - &excess)),
                        format_amount(&excess),
                    ]);
                }

                let verdict = if in_core {
                    self.success(&format!("{} allocation is in the core", rule))
                } else {
                    self.error(&format!("{} allocation is outside the core", rule))
                };
                Ok(format!(
                    "{}\nMonotonic: {}\nConvex: {}\nMax excess: {}\n{}",
                    self.table(builder),
                    yes_no(game.is_monotonic()),
                    yes_no(game.is_convex()),
                    format_amount(&max_excess),
                    verdict
                ))
            }
            OutputFormat::Quiet => Ok(format!("{} {}", in_core, max_excess)),
        }
    }

    /// Format the effective configuration.
    pub fn format_config(&self, config: &Config) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
            OutputFormat::Table | OutputFormat::Quiet => config.to_toml(),
        }
    }

    fn format_allocation_table(
        &self,
        rule: Rule,
        claims: &ClaimSet,
        allocation: &Allocation,
    ) -> String {
        if claims.is_empty() {
            return self.colorize("No claims to divide.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["Claimant", "Claim", "Award", "Loss"]);
        for ((claim, award), loss) in claims
            .claims()
            .iter()
            .zip(allocation.awards())
            .zip(allocation.losses(claims))
        {
            builder.push_record([
                claim.id.to_string(),
                format_amount(&claim.amount),
                format_amount(award),
                format_amount(&loss),
            ]);
        }

        format!(
            "{}\n{}",
            self.table(builder),
            self.info(&format!(
                "{} divided {} of {} claimed",
                rule.title(),
                format_amount(claims.estate()),
                format_amount(claims.total_claims())
            ))
        )
    }

    fn format_comparison_table(&self, claims: &ClaimSet, results: &[(Rule, Allocation)]) -> String {
        if claims.is_empty() {
            return self.colorize("No claims to divide.", "yellow");
        }

        let mut builder = Builder::default();
        let mut header = vec!["Claimant".to_string(), "Claim".to_string()];
        header.extend(results.iter().map(|(rule, _)| rule.as_str().to_string()));
        builder.push_record(header);

        for (index, claim) in claims.claims().iter().enumerate() {
            let mut row = vec![claim.id.to_string(), format_amount(&claim.amount)];
            row.extend(
                results
                    .iter()
                    .map(|(_, allocation)| format_amount(&allocation.awards()[index])),
            );
            builder.push_record(row);
        }

        self.table(builder)
    }

    fn table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Exact value, with a two-decimal approximation when it is not whole.
pub fn format_amount(amount: &Amount) -> String {
    if amount.is_integer() {
        amount.to_string()
    } else {
        format!("{} (≈{:.2})", amount, amount.to_f64())
    }
}

fn allocation_json(rule: Rule, claims: &ClaimSet, allocation: &Allocation) -> serde_json::Value {
    json!({
        "rule": rule.as_str(),
        "estate": claims.estate().to_string(),
        "claims": claims.claims().iter().map(|c| c.amount.to_string()).collect::<Vec<_>>(),
        "awards": allocation.awards().iter().map(Amount::to_string).collect::<Vec<_>>(),
        "total": allocation.total().to_string(),
    })
}

fn quiet_line(awards: &[Amount]) -> String {
    awards
        .iter()
        .map(Amount::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}
