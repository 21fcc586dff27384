/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line and shell behavior
mod common;

use assert_cmd::prelude::*;
use common::{ConfigDirBuilder, converter_cmd};
use predicates::prelude::*;

fn shell_cmd(config_dir: &std::path::Path) -> assert_cmd::Command {
    assert_cmd::Command::from_std(converter_cmd(config_dir))
}

#[test]
fn test_cli_convert_one_shot() {
    let config = ConfigDirBuilder::new().build();

    converter_cmd(config.path())
        .args(["convert", "1", "Kilometers", "Meters"])
        .assert()
        .success()
        .stdout("1 Kilometers = 1000 Meters\n");
}

#[test]
fn test_cli_convert_infers_category_case_insensitively() {
    let config = ConfigDirBuilder::new().build();

    converter_cmd(config.path())
        .args(["convert", "100", "celsius", "kelvin"])
        .assert()
        .success()
        .stdout("100 Celsius = 373.15 Kelvin\n");
}

#[test]
fn test_cli_convert_negative_value_with_category() {
    let config = ConfigDirBuilder::new().build();

    converter_cmd(config.path())
        .args(["convert", "-40", "Celsius", "Fahrenheit", "--category", "temperature"])
        .assert()
        .success()
        .stdout("-40 Celsius = -40 Fahrenheit\n");
}

#[test]
fn test_cli_convert_json_output() {
    let config = ConfigDirBuilder::new().build();

    converter_cmd(config.path())
        .args(["convert", "1", "Kilometers", "Meters", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""category":"Length""#))
        .stdout(predicate::str::contains(r#""converted":1000.0"#))
        .stdout(predicate::str::contains(r#""display":"1 Kilometers = 1000 Meters""#))
        .stdout(predicate::str::contains(r#""recorded_at":"#));
}

#[test]
fn test_cli_precision_flag() {
    let config = ConfigDirBuilder::new().build();

    converter_cmd(config.path())
        .args(["--precision", "2", "convert", "1", "Meters", "Feet"])
        .assert()
        .success()
        .stdout("1.00 Meters = 3.28 Feet\n");
}

#[test]
fn test_cli_precision_from_settings_file() {
    let config = ConfigDirBuilder::new().with_settings_json(r#"{"precision": 1}"#).build();

    converter_cmd(config.path())
        .args(["convert", "1", "Kilometers", "Meters"])
        .assert()
        .success()
        .stdout("1.0 Kilometers = 1000.0 Meters\n");
}

#[test]
fn test_cli_precision_flag_overrides_settings_file() {
    let config = ConfigDirBuilder::new().with_settings_json(r#"{"precision": 1}"#).build();

    converter_cmd(config.path())
        .args(["convert", "1", "Kilometers", "Meters", "--precision", "0"])
        .assert()
        .success()
        .stdout("1 Kilometers = 1000 Meters\n");
}

#[test]
fn test_cli_convert_units_without_common_category() {
    let config = ConfigDirBuilder::new().build();

    converter_cmd(config.path())
        .args(["convert", "1", "Meters", "Grams"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No category contains both 'Meters' and 'Grams'"));
}

#[test]
fn test_cli_convert_unknown_unit_in_explicit_category() {
    let config = ConfigDirBuilder::new().build();

    converter_cmd(config.path())
        .args(["convert", "1", "Meters", "Parsecs", "--category", "Length"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown unit 'Parsecs' in category Length"));
}

#[test]
fn test_cli_categories() {
    let config = ConfigDirBuilder::new().build();

    converter_cmd(config.path())
        .arg("categories")
        .assert()
        .success()
        .stdout("Length\nWeight\nTemperature\nTime\nSpeed\nEnergy\nCustom\n");
}

#[test]
fn test_cli_units() {
    let config = ConfigDirBuilder::new().build();

    converter_cmd(config.path())
        .args(["units", "energy"])
        .assert()
        .success()
        .stdout("Joules\nKilojoules\nCalories\nKilocalories\n");
}

#[test]
fn test_cli_units_unknown_category() {
    let config = ConfigDirBuilder::new().build();

    converter_cmd(config.path())
        .args(["units", "Volume"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown category"));
}

#[test]
fn test_cli_shell_session_from_stdin() {
    let config = ConfigDirBuilder::new().build();

    shell_cmd(config.path())
        .arg("shell")
        .write_stdin("add Inch Centimeter 2.54\nuse Custom\n10 Inch to Centimeter\nhistory\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added custom unit: Inch to Centimeter with factor 2.54"))
        .stdout(predicate::str::contains("Category: Custom"))
        .stdout(predicate::str::contains("10 Inch = 25.4 Centimeter\n"))
        .stdout(predicate::str::contains("  1. 10 Inch = 25.4 Centimeter (just now)"));
}

#[test]
fn test_cli_no_subcommand_runs_shell() {
    let config = ConfigDirBuilder::new().build();

    shell_cmd(config.path())
        .write_stdin("1 Kilometers Meters\n")
        .assert()
        .success()
        .stdout("1 Kilometers = 1000 Meters\n");
}

#[test]
fn test_cli_shell_reports_errors_and_continues() {
    let config = ConfigDirBuilder::new().build();

    shell_cmd(config.path())
        .write_stdin("1 Kilograms NotAUnit\nuse Weight\n1 Kilograms NotAUnit\n1 Kilograms Grams\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("error: Unknown unit 'Kilograms' in category Length"))
        .stdout(predicate::str::contains("error: Unknown unit 'NotAUnit' in category Weight"))
        .stdout(predicate::str::contains("1 Kilograms = 1000 Grams"));
}

#[test]
fn test_cli_shell_uses_default_category_from_settings() {
    let config = ConfigDirBuilder::new()
        .with_settings_json(r#"{"default_category": "Temperature"}"#)
        .build();

    shell_cmd(config.path())
        .write_stdin("0 Celsius Fahrenheit\n")
        .assert()
        .success()
        .stdout("0 Celsius = 32 Fahrenheit\n");
}

#[test]
fn test_cli_malformed_default_settings_falls_back() {
    let config = ConfigDirBuilder::new().with_settings_json("{ not json").build();

    converter_cmd(config.path())
        .args(["convert", "1", "Kilometers", "Meters"])
        .assert()
        .success()
        .stdout("1 Kilometers = 1000 Meters\n")
        .stderr(predicate::str::contains("Failed to load settings, using defaults"));
}

#[test]
fn test_cli_missing_explicit_config_is_error() {
    let config = ConfigDirBuilder::new().build();

    converter_cmd(config.path())
        .arg("--config")
        .arg(config.path().join("missing.json"))
        .arg("categories")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read settings file"));
}

#[test]
fn test_cli_help_flag() {
    let config = ConfigDirBuilder::new().build();

    converter_cmd(config.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert values between units"))
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("shell"));
}

#[test]
fn test_cli_version_flag() {
    let config = ConfigDirBuilder::new().build();

    converter_cmd(config.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}
