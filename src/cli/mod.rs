use std::path::PathBuf;

use clap::Parser;

pub mod formatters;
pub mod runner;

#[derive(Parser, Debug)]
#[command(name = "compound-interest")]
#[command(version, about = "Compound interest calculator")]
#[command(
    long_about = "Compute the interest earned on a principal at an annual percentage rate, compounded once a year, rounded to cents."
)]
pub struct Cli {
    /// Initial amount (default 1000, or the config file value)
    #[arg(short, long, allow_hyphen_values = true)]
    pub principal: Option<String>,

    /// Annual interest rate in percent, e.g. 5 for 5%
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: Option<String>,

    /// Number of yearly compounding periods
    #[arg(short, long, allow_hyphen_values = true)]
    pub years: Option<String>,

    /// Print the balance at the end of every year
    #[arg(long)]
    pub schedule: bool,

    /// Config file with default inputs
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Disable colorized/ANSI output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Output results in JSON format
    #[arg(long = "json")]
    pub json: bool,
}
