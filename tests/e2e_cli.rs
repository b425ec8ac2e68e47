use assert_cmd::prelude::*;
use predicates::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::str::FromStr;
use tempfile::TempDir;

use cli_helpers::{base_cmd, quote_json, write_config_at, write_default_config};

const REFERENCE_SENTENCE: &str =
    "The interest earned on $1000 at an annual rate of 5% for 10 years is $628.89";

fn setup_temp_home() -> TempDir {
    TempDir::new().expect("failed to create temp home")
}

#[test]
fn default_run_prints_reference_sentence() {
    let home = setup_temp_home();

    base_cmd(&home)
        .assert()
        .success()
        .stdout(predicate::str::contains(REFERENCE_SENTENCE))
        .stdout(predicate::str::contains("\u{001b}[").not());
}

#[test]
fn flags_change_the_sentence() {
    let home = setup_temp_home();

    base_cmd(&home)
        .args(["--principal", "2500", "--rate", "3.5", "--years", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The interest earned on $2500 at an annual rate of 3.5% for 2 years is $178.06",
        ));
}

#[test]
fn zero_rate_prints_zero_cents() {
    let home = setup_temp_home();

    base_cmd(&home)
        .args(["--rate", "0"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("is $0.00\n"));
}

#[test]
fn invalid_input_fails_without_sentence() {
    let home = setup_temp_home();

    base_cmd(&home)
        .args(["--rate", "five"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("rate is not a number"));
}

#[test]
fn negative_years_fails_without_sentence() {
    let home = setup_temp_home();

    base_cmd(&home)
        .args(["--years", "-3"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("The interest earned").not())
        .stderr(predicate::str::contains("years must not be negative"));
}

#[test]
fn fractional_power_of_negative_growth_is_domain_error() {
    let home = setup_temp_home();

    base_cmd(&home)
        .args(["--rate", "-150", "--years", "0.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("domain error"));
}

#[test]
fn json_output_carries_all_fields() -> anyhow::Result<()> {
    let home = setup_temp_home();

    let json = quote_json(&home, &["--years", "100"])?;
    let interest = Decimal::from_str(json["interest"].as_str().unwrap_or_default())?;

    assert_eq!(json["principal"], "1000");
    assert_eq!(json["rate"], "5");
    assert_eq!(json["years"], "100");
    assert!(interest > dec!(130000));
    assert!(interest.scale() <= 2);
    Ok(())
}

#[test]
fn schedule_lists_each_year() {
    let home = setup_temp_home();

    base_cmd(&home)
        .args(["--rate", "10", "--years", "3", "--schedule"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is $331.00"))
        .stdout(predicate::str::contains("$1,100.00"))
        .stdout(predicate::str::contains("$1,210.00"))
        .stdout(predicate::str::contains("$1,331.00"));
}

#[test]
fn default_config_file_supplies_inputs() -> anyhow::Result<()> {
    let home = setup_temp_home();
    write_default_config(&home, "[defaults]\nprincipal = \"2000\"\n");

    let json = quote_json(&home, &[])?;
    assert_eq!(json["principal"], "2000");
    assert_eq!(json["interest"], "1257.79");
    Ok(())
}

#[test]
fn env_config_path_is_honored_and_flags_still_win() -> anyhow::Result<()> {
    let home = setup_temp_home();
    let path = home.path().join("custom.toml");
    write_config_at(&path, "[defaults]\nrate = 10\nyears = 1\n");

    base_cmd(&home)
        .env("INTEREST_CONFIG", &path)
        .args(["--principal", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The interest earned on $50 at an annual rate of 10% for 1 years is $5.00",
        ));
    Ok(())
}

#[test]
fn malformed_config_is_reported() {
    let home = setup_temp_home();
    write_default_config(&home, "[defaults]\nrate = \"high\"\n");

    base_cmd(&home)
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn overlong_schedule_is_rejected() {
    let home = setup_temp_home();

    base_cmd(&home)
        .args(["--rate", "0", "--years", "4000000000", "--schedule"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("too long for a schedule"));
}
