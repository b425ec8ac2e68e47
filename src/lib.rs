//! Compound interest calculator
//!
//! Computes the interest accrued on a principal at an annual percentage rate,
//! compounded once a year, using exact decimal arithmetic and rounding to cents.

pub mod calculator;
pub mod config;
pub mod error;
pub mod utils;
