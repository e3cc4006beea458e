//! Parley CLI and REST API entry point.
//!
//! Binary name: `parley`
//!
//! Loads `.env`, parses CLI arguments, resolves configuration, opens the
//! database, then dispatches to a chat command or starts the REST API server.

use clap::Parser;
use clap_complete::generate;

use parley_api::cli::{self, ChatCommand, Cli, Commands};
use parley_api::http;
use parley_api::state::AppState;
use parley_infra::config::{default_database_url, load_config, resolve_data_dir};
use parley_observe::tracing_setup::{init_tracing, shutdown_tracing};
use parley_types::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env first, so clap's env fallbacks can see its values
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Shell completions don't need logging or app state
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "parley", &mut std::io::stdout());
        return Ok(());
    }

    let data_dir = resolve_data_dir();
    tokio::fs::create_dir_all(&data_dir).await?;

    // Config is read before tracing starts: `log_queries` from the file
    // shapes the log filter.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| data_dir.join("config.toml"));
    let loaded = load_config(&config_path).await;
    let file_config = loaded.as_ref().cloned().unwrap_or_default();
    let config = cli.apply_overrides(file_config);

    init_tracing(&cli.log_directive(config.log_queries), cli.otel)
        .map_err(|e| anyhow::anyhow!(e))?;

    if let Err(e) = &loaded {
        tracing::warn!(error = %e, "Using default configuration");
    }

    let database_url = config
        .database_url
        .clone()
        .unwrap_or_else(|| default_database_url(&data_dir));

    let state = AppState::init(&database_url, config.log_queries).await?;

    let result = run(cli, &config, state.clone()).await;

    state.db_pool.close().await;
    shutdown_tracing();

    result
}

async fn run(cli: Cli, config: &AppConfig, state: AppState) -> anyhow::Result<()> {
    match cli.command {
        Commands::Chat { action } => match action {
            ChatCommand::Create { title } => {
                cli::chat::create_chat(&state, &title, cli.json).await?;
            }
            ChatCommand::Send { id, text } => {
                cli::chat::send_message(&state, id, &text, cli.json).await?;
            }
            ChatCommand::Show { id, limit } => {
                cli::chat::show_chat(&state, id, limit, cli.json).await?;
            }
            ChatCommand::Delete { id, force } => {
                cli::chat::delete_chat(&state, id, force, cli.json).await?;
            }
        },

        Commands::Serve { .. } => {
            let addr = format!("{}:{}", config.host, config.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            tracing::info!(addr = %addr, "Parley API listening");
            if !cli.quiet {
                println!(
                    "  {} Parley API listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            tracing::info!("Server stopped");
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
