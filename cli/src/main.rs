//! CLI entrypoint for Bedrock Playground
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use playground_application::AskModelUseCase;
use playground_application::use_cases::ask_model::AskModelInput;
use playground_domain::ModelId;
use playground_infrastructure::{BedrockRuntimeTransport, ConfigLoader, DispatchGateway};
use playground_presentation::{ChatRepl, Cli, ConsoleFormatter};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    if cli.list_models {
        print!("{}", ConsoleFormatter::format_catalog());
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("failed to load configuration")?
    };
    config.validate().context("invalid configuration")?;

    // Pick the model: CLI flag wins over the configured default
    let model = cli
        .model
        .as_deref()
        .map(ModelId::new)
        .unwrap_or_else(|| config.default_model());

    info!(model = %model, region = %config.aws.region, "Starting Bedrock Playground");

    // === Dependency Injection ===
    // Transport → dispatch gateway → use case
    let transport = Arc::new(BedrockRuntimeTransport::new(&config.aws).await);
    let gateway = Arc::new(DispatchGateway::new(transport));
    let use_case = AskModelUseCase::new(gateway);

    // Chat mode
    if cli.chat {
        let mut repl = ChatRepl::new(use_case, model);
        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let question = match cli.question {
        Some(q) => q,
        None => bail!("Question is required. Use --chat for interactive mode."),
    };

    if !cli.quiet {
        println!();
        println!("Model: {}", model);
        println!("Question: {}", question);
        println!();
    }

    let answer = use_case
        .execute(AskModelInput::new(model.clone(), question))
        .await?;

    println!("{}", ConsoleFormatter::format_answer(&model, &answer));

    Ok(())
}
