//! CLI parse tests.

use super::{dataset_path, Cli, CliCommand};
use clap::Parser;

pub(super) fn try_parse(args: &[&str]) -> Result<CliCommand, clap::Error> {
    Cli::try_parse_from(args).map(|cli| cli.command)
}

pub(super) fn parse(args: &[&str]) -> CliCommand {
    try_parse(args).unwrap()
}


#[test]
fn dataset_flag_overrides_config() {
    use phishguard_core::config::PhishguardConfig;
    use std::path::PathBuf;

    let cfg = PhishguardConfig::default();
    assert_eq!(dataset_path(&cfg, None), PathBuf::from("phishing_dataset.csv"));
    assert_eq!(
        dataset_path(&cfg, Some(PathBuf::from("/tmp/urls.csv"))),
        PathBuf::from("/tmp/urls.csv")
    );
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(try_parse(&["phishguard", "scan"]).is_err());
}
