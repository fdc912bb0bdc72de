use clap::{Args, CommandFactory, FromArgMatches, Parser};
use fleetindex::config::SavingsAssumptions;
use fleetindex::savings::{CostDriver, DriverInputs};
use std::io::Write;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    assumptions: SavingsAssumptions,
}

fn parse(args: &[&str]) -> (SavingsAssumptions, clap::ArgMatches) {
    let matches = TestCli::command()
        .try_get_matches_from(std::iter::once("test").chain(args.iter().copied()))
        .expect("args should parse");
    let cli = TestCli::from_arg_matches(&matches).expect("matches should convert");
    (cli.assumptions, matches)
}

#[test]
fn test_cli_defaults_match_struct_defaults() {
    let (parsed, _) = parse(&[]);
    assert_eq!(parsed, SavingsAssumptions::default());
}

#[test]
fn test_driver_triples() {
    let a = SavingsAssumptions::default();
    assert_eq!(
        a.driver(CostDriver::Fuel),
        DriverInputs {
            before: 30.0,
            after: 28.0,
            unit_cost: 2.15
        }
    );
    assert_eq!(a.driver(CostDriver::Brakes).unit_cost, 1_800.0);
    assert_eq!(a.driver(CostDriver::Tyres).after, 110_000.0);
}

#[test]
fn test_set_driver_round_trips() {
    let mut a = SavingsAssumptions::default();
    let tyres = DriverInputs {
        before: 80_000.0,
        after: 120_000.0,
        unit_cost: 6_500.0,
    };
    a.set_driver(CostDriver::Tyres, tyres);
    assert_eq!(a.driver(CostDriver::Tyres), tyres);
    assert_eq!(a.tyre_unit_cost, 6_500.0);
}

#[test]
fn test_load_partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{ "annual_distance": 90000, "fuel_unit_cost": 3.1 }}"#).unwrap();

    let loaded = SavingsAssumptions::load_from_file(file.path()).unwrap();
    assert_eq!(loaded.annual_distance, 90_000.0);
    assert_eq!(loaded.fuel_unit_cost, 3.1);
    assert_eq!(loaded.brake_unit_cost, 1_800.0);
}

#[test]
fn test_load_missing_file_is_config_error() {
    let err = SavingsAssumptions::load_from_file("/definitely/not/here.json").unwrap_err();
    assert!(err.to_string().contains("Configuration Error"));
}

#[test]
fn test_load_bad_json_is_json_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "not json").unwrap();
    let err = SavingsAssumptions::load_from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("JSON Parsing Error"));
}

#[test]
fn test_merge_only_overrides_explicit_flags() {
    let mut from_file = SavingsAssumptions {
        annual_distance: 90_000.0,
        fuel_unit_cost: 3.1,
        ..Default::default()
    };

    let (cli, matches) = parse(&["--fuel-unit-cost", "2.5"]);
    from_file.merge_from_cli(&cli, &matches);

    // typed on the command line
    assert_eq!(from_file.fuel_unit_cost, 2.5);
    // clap default must not clobber the file value
    assert_eq!(from_file.annual_distance, 90_000.0);
}

#[test]
fn test_flattened_args_are_augmentable() {
    // The assumptions block can be dropped into any subcommand.
    let cmd = SavingsAssumptions::augment_args(clap::Command::new("x"));
    assert!(cmd.get_arguments().any(|a| a.get_id() == "brake_after_distance"));
}
