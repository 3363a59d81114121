//! `academy-app` -- inspect or discard the locally stored course draft.
//!
//! # Usage
//!
//! ```text
//! academy-app            # print a JSON report of the stored draft
//! academy-app report     # same as above
//! academy-app discard    # remove every draft key
//! ```
//!
//! Configuration comes from the environment; see [`AppConfig::from_env`].

use std::sync::Arc;

use academy_app::report::draft_report;
use academy_app::AppConfig;
use academy_store::{DraftRepo, FileStore};
use clap::{Parser, Subcommand};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[clap(name = "academy-app", about = "Inspect or discard the stored course draft")]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a JSON report of the stored draft (default).
    Report,
    /// Remove every draft key.
    Discard,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "academy_app=info,academy_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        draft_store_dir = %config.draft_store_dir.display(),
        "Starting academy-app",
    );

    let drafts = DraftRepo::new(Arc::new(FileStore::new(config.draft_store_dir.clone())));

    match cli.command.unwrap_or(Command::Report) {
        Command::Report => {
            let report = draft_report(&drafts).await;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Discard => drafts.discard_draft().await?,
    }

    Ok(())
}
