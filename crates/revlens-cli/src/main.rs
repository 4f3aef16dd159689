use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

mod aggregate;
mod db;
mod ingest;
mod io;
mod keywords;
mod score;
mod themes;

#[derive(Debug, Parser)]
#[command(name = "revlens-cli")]
#[command(about = "Customer review analytics: sentiment, keywords, themes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Score reviews with a sentiment backend
    Score {
        /// Input review CSV
        #[arg(long)]
        input: PathBuf,

        /// Output CSV with sentiment_label and sentiment_score filled in
        #[arg(long)]
        output: PathBuf,

        /// Which sentiment backend to use
        #[arg(long, default_value = "lexicon", value_enum)]
        backend: Backend,
    },
    /// Rank each bank's keywords by TF-IDF
    Keywords {
        /// Input review CSV
        #[arg(long)]
        input: PathBuf,

        /// Directory for the per-bank term tables
        #[arg(long)]
        out_dir: PathBuf,

        /// Terms to keep per bank (defaults to REVLENS_KEYWORD_TOP_N)
        #[arg(long)]
        top_n: Option<usize>,
    },
    /// Assign themes to reviews from keyword rules
    Themes {
        /// Input review CSV
        #[arg(long)]
        input: PathBuf,

        /// Output CSV with the themes column filled in
        #[arg(long)]
        output: PathBuf,

        /// Theme rules YAML; falls back to REVLENS_THEMES_PATH, then to
        /// the built-in rule set
        #[arg(long)]
        themes_config: Option<PathBuf>,
    },
    /// Roll tagged reviews up into per-(bank, theme) counts
    Aggregate {
        /// Input CSV of theme-tagged reviews
        #[arg(long)]
        input: PathBuf,

        /// Output CSV of (bank_name, themes, n_reviews) rows
        #[arg(long)]
        output: PathBuf,
    },
    /// Load banks and reviews from a CSV into Postgres
    Ingest {
        /// Input review CSV (scored/tagged columns are stored when present)
        #[arg(long)]
        input: PathBuf,
    },
    /// Database maintenance commands
    Db {
        #[command(subcommand)]
        command: DbCommands,
    },
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Check database connectivity
    Ping,
    /// Run pending migrations
    Migrate,
    /// Show stored theme counts, newest run first
    Themes {
        /// Filter to a single bank by name
        #[arg(long)]
        bank: Option<String>,

        /// Maximum rows to print
        #[arg(long, default_value_t = 50)]
        limit: i64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Backend {
    /// Counting lexicon scorer, no external services
    Lexicon,
    /// External pretrained classifier service
    Model,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = revlens_core::load_app_config_from_env()?;

    match cli.command {
        Some(Commands::Score {
            input,
            output,
            backend,
        }) => score::run_score(&config, &input, &output, backend).await,
        Some(Commands::Keywords {
            input,
            out_dir,
            top_n,
        }) => keywords::run_keywords(&config, &input, &out_dir, top_n).await,
        Some(Commands::Themes {
            input,
            output,
            themes_config,
        }) => themes::run_themes(&config, &input, &output, themes_config.as_deref()),
        Some(Commands::Aggregate { input, output }) => aggregate::run_aggregate(&input, &output),
        Some(Commands::Ingest { input }) => ingest::run_ingest(&config, &input).await,
        Some(Commands::Db { command }) => match command {
            DbCommands::Ping => db::run_ping(&config).await,
            DbCommands::Migrate => db::run_migrate(&config).await,
            DbCommands::Themes { bank, limit } => {
                db::run_themes(&config, bank.as_deref(), limit).await
            }
        },
        None => {
            println!("revlens-cli: no command given, try --help");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;
