use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn calendar_help_explains_override_divergence() {
    let cmd = Cli::command();
    let calendar = cmd.find_subcommand("calendar").unwrap();
    let about = calendar.get_long_about().unwrap().to_string();
    // predict layers overrides on top of the derived count, so the help
    // must not claim the two commands always agree
    assert!(about.contains("override"));
    assert!(!about.contains("is the same"));
}
