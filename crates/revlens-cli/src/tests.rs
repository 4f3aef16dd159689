use clap::Parser;

use super::*;

#[test]
fn parses_db_ping_command() {
    let cli =
        Cli::try_parse_from(["revlens-cli", "db", "ping"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Ping
        })
    ));
}

#[test]
fn parses_db_migrate_command() {
    let cli =
        Cli::try_parse_from(["revlens-cli", "db", "migrate"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Migrate
        })
    ));
}

#[test]
fn parses_db_themes_with_bank_filter() {
    let cli = Cli::try_parse_from(["revlens-cli", "db", "themes", "--bank", "Bank A"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Themes {
                bank: Some(ref b),
                limit: 50,
            }
        }) if b == "Bank A"
    ));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["revlens-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_score_with_default_backend() {
    let cli = Cli::try_parse_from([
        "revlens-cli",
        "score",
        "--input",
        "reviews.csv",
        "--output",
        "scored.csv",
    ])
    .unwrap();

    assert!(matches!(
        cli.command,
        Some(Commands::Score {
            backend: Backend::Lexicon,
            ..
        })
    ));
}

#[test]
fn parses_score_with_model_backend() {
    let cli = Cli::try_parse_from([
        "revlens-cli",
        "score",
        "--input",
        "reviews.csv",
        "--output",
        "scored.csv",
        "--backend",
        "model",
    ])
    .unwrap();

    assert!(matches!(
        cli.command,
        Some(Commands::Score {
            backend: Backend::Model,
            ..
        })
    ));
}

#[test]
fn score_rejects_unknown_backend() {
    let result = Cli::try_parse_from([
        "revlens-cli",
        "score",
        "--input",
        "reviews.csv",
        "--output",
        "scored.csv",
        "--backend",
        "vibes",
    ]);
    assert!(result.is_err());
}

#[test]
fn score_requires_input_and_output() {
    let result = Cli::try_parse_from(["revlens-cli", "score", "--input", "reviews.csv"]);
    assert!(result.is_err());
}

#[test]
fn parses_keywords_with_top_n() {
    let cli = Cli::try_parse_from([
        "revlens-cli",
        "keywords",
        "--input",
        "reviews.csv",
        "--out-dir",
        "out",
        "--top-n",
        "20",
    ])
    .unwrap();

    assert!(matches!(
        cli.command,
        Some(Commands::Keywords {
            top_n: Some(20),
            ..
        })
    ));
}

#[test]
fn keywords_top_n_defaults_to_none() {
    let cli = Cli::try_parse_from([
        "revlens-cli",
        "keywords",
        "--input",
        "reviews.csv",
        "--out-dir",
        "out",
    ])
    .unwrap();

    assert!(matches!(
        cli.command,
        Some(Commands::Keywords { top_n: None, .. })
    ));
}

#[test]
fn parses_themes_with_config_file() {
    let cli = Cli::try_parse_from([
        "revlens-cli",
        "themes",
        "--input",
        "reviews.csv",
        "--output",
        "tagged.csv",
        "--themes-config",
        "config/themes.yaml",
    ])
    .unwrap();

    assert!(matches!(
        cli.command,
        Some(Commands::Themes {
            themes_config: Some(_),
            ..
        })
    ));
}

#[test]
fn parses_aggregate_command() {
    let cli = Cli::try_parse_from([
        "revlens-cli",
        "aggregate",
        "--input",
        "tagged.csv",
        "--output",
        "counts.csv",
    ])
    .unwrap();

    assert!(matches!(cli.command, Some(Commands::Aggregate { .. })));
}

#[test]
fn parses_ingest_command() {
    let cli =
        Cli::try_parse_from(["revlens-cli", "ingest", "--input", "tagged.csv"]).unwrap();

    assert!(matches!(cli.command, Some(Commands::Ingest { .. })));
}
