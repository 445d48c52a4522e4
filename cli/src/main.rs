//! CLI entrypoint for trivia
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use trivia_application::QuestionService;
use trivia_domain::CategoryFilter;
use trivia_infrastructure::{
    ConfigLoader, FileConfig, StorageBackend, open_repository, random_source,
};
use trivia_presentation::{Cli, Command, QuizRepl, QuizSession, RequestHandler, formatter_for};

#[tokio::main]
async fn main() -> Result<ExitCode> {
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
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        print!("{}", ConfigLoader::describe_sources());
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command.clone() else {
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let config = load_config(&cli)?;
    debug!(?config, "Configuration resolved");

    if !config.output.color {
        colored::control::set_override(false);
    }

    // === Dependency Injection ===
    let repository = open_repository(&config.storage)
        .await
        .context("failed to open question store")?;
    let rng = random_source(config.quiz.rng_seed);
    let service = Arc::new(QuestionService::new(repository, rng));

    if let Command::Play { category, rounds } = command {
        let rounds = rounds.unwrap_or(config.quiz.rounds).max(1);
        info!(category, rounds, "Starting interactive quiz");
        let session = QuizSession::new(CategoryFilter::from_raw(category), rounds);
        QuizRepl::new(service, session).run().await?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(request) = command.request() else {
        return Ok(ExitCode::SUCCESS);
    };

    let formatter = formatter_for(config.output.format);
    let handler = RequestHandler::new(service);
    match handler.handle(request).await {
        Ok(outcome) => {
            println!("{}", formatter.format(&outcome));
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            debug!(kind = %e.kind(), "Request failed");
            println!("{}", formatter.format_error(&e));
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Resolve configuration files, then apply command-line overrides
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("failed to load configuration")?
    };

    if let Some(path) = &cli.store {
        config.storage.backend = StorageBackend::Json;
        config.storage.path = Some(path.clone());
    }
    if let Some(seed) = cli.rng_seed {
        config.quiz.rng_seed = Some(seed);
    }
    if let Some(output) = cli.output {
        config.output.format = output.into();
    }

    config.validate()?;
    Ok(config)
}
