use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use terranova::catalogue::{JsonFileSource, ProjectSource, ProjectStore, SeedSource};
use terranova::{settings, AuthGate, FileStorage, Session, Step};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// TerraNova Estates catalogue session. Reads one command per line from stdin.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Settings file (defaults to ./terranova.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON file with the project collection to start from
    #[arg(long)]
    data: Option<PathBuf>,
    /// Keep the admin login in memory only
    #[arg(long)]
    ephemeral: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    // Logs go to stderr so views on stdout stay readable
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .context("Invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("🏡 TerraNova Estates");

    let source: Box<dyn ProjectSource> = match cli.data.or(settings.data_file) {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(SeedSource),
    };
    let projects = source
        .load()
        .await
        .with_context(|| format!("Failed to load projects from {} source", source.source_name()))?;
    let store = ProjectStore::new(projects);

    let auth = if cli.ephemeral {
        AuthGate::in_memory()
    } else {
        AuthGate::new(Box::new(FileStorage::new(&settings.token_file)))
            .context("Failed to open token storage")?
    };

    let mut session = Session::new(store, auth);
    if let Step::Output(text) = session.handle_line("home") {
        print!("{text}");
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        match session.handle_line(&line) {
            Step::Output(text) => {
                print!("{text}");
                std::io::stdout().flush().context("Failed to write output")?;
            }
            Step::Quit => break,
        }
    }

    info!(
        "Session ended with {} projects and {} inquiries",
        session.store().len(),
        session.inquiries().len()
    );
    Ok(())
}
