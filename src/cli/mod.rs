use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::application::{Ledger, LedgerError, LedgerSummary};
use crate::domain::{DishId, format_cents};
use crate::logging;

/// Dishes ordered by the demo run.
pub const DEMO_ORDER: [DishId; 2] = [1, 2];

/// Bistro - restaurant back-office ledger
#[derive(Parser)]
#[command(name = "bistro")]
#[command(about = "Seeds a demo restaurant ledger and prints its order total and gross profit")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Output of the demo run.
#[derive(Debug, Serialize)]
pub struct StartupReport {
    pub total_fee: String,
    pub gross_profit: String,
    pub summary: LedgerSummary,
}

/// Populate a ledger with the demo kitchen: two raw materials, two dishes
/// and two customers.
pub fn seed_demo(ledger: &mut Ledger) -> Result<(), LedgerError> {
    ledger.add_raw_material(1, "Tomato", 50)?;
    ledger.add_raw_material(2, "Cheese", 150)?;

    ledger.add_dish(1, "Pizza", 1000)?;
    ledger.add_dish(2, "Salad", 500)?;

    ledger.add_customer(1, "Alice")?;
    ledger.add_customer(2, "Bob")?;
    Ok(())
}

/// Seed the demo ledger and compute the report for `DEMO_ORDER`.
pub fn build_report() -> Result<StartupReport> {
    let mut ledger = Ledger::new();
    seed_demo(&mut ledger).context("Failed to seed demo ledger")?;

    let total_fee = ledger
        .calculate_total_fee(&DEMO_ORDER)
        .context("Failed to price demo order")?;
    let summary = ledger.summary().context("Failed to summarize demo ledger")?;

    Ok(StartupReport {
        total_fee: format_cents(total_fee),
        gross_profit: format_cents(summary.gross_profit),
        summary,
    })
}

impl Cli {
    pub fn run(self) -> Result<()> {
        logging::init_tracing(self.verbose);

        let report = build_report()?;
        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("Total Fee: ${}", report.total_fee);
            println!("Gross Profit: ${}", report.gross_profit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_report() {
        let report = build_report().unwrap();
        assert_eq!(report.total_fee, "15.00");
        assert_eq!(report.gross_profit, "13.00");
        assert_eq!(report.summary.customer_count, 2);
    }

    #[test]
    fn test_seed_demo_twice_fails() {
        let mut ledger = Ledger::new();
        seed_demo(&mut ledger).unwrap();
        assert!(seed_demo(&mut ledger).is_err());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["bistro", "-v", "--json"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.json);

        let cli = Cli::try_parse_from(["bistro"]).unwrap();
        assert!(!cli.verbose);
        assert!(!cli.json);
    }
}
