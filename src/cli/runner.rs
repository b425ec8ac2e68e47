use anyhow::{Context, Result};
use compound_interest::calculator::{parse_decimal, yearly_schedule, InterestQuote};
use compound_interest::config::{Config, Defaults};
use rust_decimal::Decimal;
use tracing::info;

use crate::cli::formatters;
use crate::cli::Cli;

/// Inputs after merging flags over config defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    pub principal: Decimal,
    pub rate: Decimal,
    pub years: Decimal,
}

/// Flags win over the config file. A flag that is given but not numeric is
/// an error, never a silent fallback to the default.
pub fn resolve_inputs(cli: &Cli, defaults: &Defaults) -> Result<Inputs> {
    let pick = |field: &str, flag: &Option<String>, default: Decimal| -> Result<Decimal> {
        match flag {
            Some(raw) => Ok(parse_decimal(field, raw)?),
            None => Ok(default),
        }
    };

    Ok(Inputs {
        principal: pick("principal", &cli.principal, defaults.principal)?,
        rate: pick("rate", &cli.rate, defaults.rate)?,
        years: pick("years", &cli.years, defaults.years)?,
    })
}

/// Run one calculation and render everything that goes to stdout.
///
/// Nothing is rendered unless the calculation succeeds.
pub fn run(cli: &Cli) -> Result<String> {
    let config = Config::load(cli.config.as_deref()).context("failed to load configuration")?;
    let inputs = resolve_inputs(cli, &config.defaults)?;

    info!(
        principal = %inputs.principal,
        rate = %inputs.rate,
        years = %inputs.years,
        "calculating interest"
    );

    let quote = InterestQuote::calculate(inputs.principal, inputs.rate, inputs.years)
        .context("failed to compute interest")?;

    if cli.json {
        return formatters::format_quote_json(&quote);
    }

    let mut output = formatters::format_sentence(&quote);
    if cli.schedule {
        let rows = yearly_schedule(inputs.principal, inputs.rate, inputs.years)
            .context("failed to build yearly schedule")?;
        output.push('\n');
        output.push_str(&formatters::format_schedule_table(&rows));
    }

    Ok(output)
}
