// file: src/main.rs
// description: commandline application entry point
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use dgraph_reindex::utils::logging::{format_success, format_warning};
use dgraph_reindex::{
    DgraphClient, DgraphConfig, EmbeddingManifest, Reindexer, select_definitions, should_proceed,
};
use dialoguer::Confirm;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "dgraph_reindex")]
#[command(version = "0.1.0")]
#[command(about = "Drop and recreate vector predicate indexes on a Dgraph cluster", long_about = None)]
struct Cli {
    /// Predicate to reindex as entityType.attribute; omit to reindex every
    /// predicate in the manifest
    predicate: Option<String>,

    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "./embeddings.json"
    )]
    manifest: PathBuf,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long, action = ArgAction::SetTrue)]
    yes: bool,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    dgraph_reindex::utils::logging::init_logger(cli.color, cli.verbose);

    let config = DgraphConfig::from_env().context("Failed to load environment configuration")?;

    let manifest = EmbeddingManifest::load(&cli.manifest)
        .with_context(|| format!("Failed to load manifest {}", cli.manifest.display()))?;

    match &cli.predicate {
        Some(predicate) => info!("Reindexing {} in {}", predicate, config.grpc_endpoint),
        None => info!(
            "Reindexing all embedding predicates in {}",
            config.grpc_endpoint
        ),
    }

    let selected = select_definitions(&manifest.embeddings, cli.predicate.as_deref());

    if selected.is_empty() {
        warn!(
            "No embedding definitions match; manifest declares {} predicate(s)",
            manifest.embeddings.len()
        );
        return Ok(());
    }

    let proceed = should_proceed(cli.yes, || {
        confirm_reindex(selected.len(), &config.grpc_endpoint)
    })?;
    if !proceed {
        println!("{}", format_warning("Aborted, no indexes were touched"));
        return Ok(());
    }

    let client = DgraphClient::connect(&config).context("Failed to connect to Dgraph")?;

    let reindexer = Reindexer::new(&client);
    let count = reindexer.run(&selected).await?;

    println!(
        "{}",
        format_success(&format!("Reindexed {} predicate(s)", count))
    );

    Ok(())
}

fn confirm_reindex(count: usize, endpoint: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(format!(
            "Drop and recreate {} vector index(es) on {}?",
            count, endpoint
        ))
        .default(false)
        .interact()
        .context("Confirmation prompt failed")?;

    Ok(confirmed)
}
