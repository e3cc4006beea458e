//! CLI command definitions for the `parley` binary.
//!
//! Uses clap derive macros for argument parsing. `parley serve` runs the HTTP
//! API; `parley chat ...` runs the same use cases directly against the database.

pub mod chat;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use parley_types::chat::ChatId;
use parley_types::config::AppConfig;

/// Chats and messages over HTTP.
#[derive(Parser)]
#[command(name = "parley", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// SQLite connection string (overrides config.toml).
    #[arg(long, global = true, env = "PARLEY_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Path to the config file (default: {data_dir}/config.toml).
    #[arg(long, global = true, env = "PARLEY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log every SQL statement.
    #[arg(long, global = true, env = "PARLEY_LOG_QUERIES")]
    pub log_queries: bool,

    /// Export trace spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true, env = "PARLEY_OTEL")]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the REST API server.
    Serve {
        /// Port to listen on.
        #[arg(short, long, env = "PARLEY_PORT")]
        port: Option<u16>,

        /// Host to bind to.
        #[arg(long, env = "PARLEY_HOST")]
        host: Option<String>,
    },

    /// Work with chats directly (create, send, show, delete).
    Chat {
        #[command(subcommand)]
        action: ChatCommand,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ChatCommand {
    /// Create a new chat.
    Create {
        /// Chat title (1-200 characters after trimming).
        title: String,
    },

    /// Post a message into a chat.
    Send {
        /// Chat id.
        id: ChatId,

        /// Message text.
        text: String,
    },

    /// Show a chat with its most recent messages.
    Show {
        /// Chat id.
        id: ChatId,

        /// Number of recent messages to show (20-100).
        #[arg(long, default_value_t = 20)]
        limit: i64,
    },

    /// Delete a chat and all of its messages.
    #[command(alias = "rm")]
    Delete {
        /// Chat id.
        id: ChatId,

        /// Skip confirmation prompt.
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Default log directive for the chosen verbosity.
    ///
    /// With `log_queries`, sqlx statement events (debug level, target
    /// `sqlx::query`) pass the filter regardless of verbosity.
    pub fn log_directive(&self, log_queries: bool) -> String {
        let base = match self.verbose {
            0 if self.quiet => "error",
            0 => "info,sqlx=warn",
            1 => "info,parley=debug",
            _ => "trace",
        };
        if log_queries {
            format!("{base},sqlx::query=debug")
        } else {
            base.to_string()
        }
    }

    /// Layer command-line flags (and their environment fallbacks) over the
    /// values loaded from the config file.
    pub fn apply_overrides(&self, mut config: AppConfig) -> AppConfig {
        if let Some(url) = &self.database_url {
            config.database_url = Some(url.clone());
        }
        if self.log_queries {
            config.log_queries = true;
        }
        if let Commands::Serve { port, host } = &self.command {
            if let Some(port) = port {
                config.port = *port;
            }
            if let Some(host) = host {
                config.host = host.clone();
            }
        }
        config
    }
}
