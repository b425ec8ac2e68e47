//! Output formatting module for CLI display
//!
//! This module handles all terminal output formatting, separating
//! the concerns of calculation from presentation.

use anyhow::{Context, Result};
use colored::Colorize;
use compound_interest::calculator::{InterestQuote, YearlyBalance};
use compound_interest::utils::format_currency;
use rust_decimal::Decimal;
use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

/// The one-line summary printed by default.
pub fn format_sentence(quote: &InterestQuote) -> String {
    format!(
        "The interest earned on ${} at an annual rate of {}% for {} years is ${:.2}",
        quote.principal, quote.rate, quote.years, quote.interest
    )
}

pub fn format_quote_json(quote: &InterestQuote) -> Result<String> {
    serde_json::to_string_pretty(quote).context("JSON serialization failed")
}

/// Format the year-by-year growth as a terminal table
pub fn format_schedule_table(rows: &[YearlyBalance]) -> String {
    if rows.is_empty() {
        return format!("\n{} No whole years to show", "ℹ".blue().bold());
    }

    #[derive(Tabled)]
    struct ScheduleRow {
        #[tabled(rename = "Year")]
        year: u32,
        #[tabled(rename = "Balance")]
        balance: String,
        #[tabled(rename = "Interest")]
        interest: String,
    }

    let table_rows: Vec<ScheduleRow> = rows
        .iter()
        .map(|r| {
            let interest = format_currency(r.interest_to_date);
            ScheduleRow {
                year: r.year,
                balance: format_currency(r.balance),
                interest: if r.interest_to_date >= Decimal::ZERO {
                    interest.green().to_string()
                } else {
                    interest.red().to_string()
                },
            }
        })
        .collect();

    let mut table = Table::new(&table_rows);
    table.with(Style::modern());
    table.modify(Columns::new(1..), Alignment::right());

    format!("\n{} Yearly balance\n\n{}", "📈".cyan().bold(), table)
}
