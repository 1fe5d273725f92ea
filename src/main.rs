//! Demurrage calculator binary.
//!
//! # Usage
//!
//! ```bash
//! # HTTP server (default)
//! PORT=8000 demurrage serve
//!
//! # Interactive console prompt
//! demurrage prompt
//!
//! # Print the active tariff as YAML
//! demurrage --tariff config/tariff.yaml tariff
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8000)
//! - `DEMURRAGE_TARIFF`: YAML tariff file (default: built-in standard tariff)
//! - `DEMURRAGE_STATIC_DIR`: Directory holding index.html (default: static)
//! - `RUST_LOG`: Log filter (default: info)

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use demurrage_engine::api::{AppState, DEFAULT_STATIC_DIR, create_router};
use demurrage_engine::cli::Prompt;
use demurrage_engine::config::{ConfigLoader, Tariff};
use demurrage_engine::models::DayPolicy;

#[derive(Parser, Debug)]
#[command(name = "demurrage", version, about = "Demurrage charge calculator")]
struct Cli {
    /// YAML tariff file; the built-in standard tariff is used when omitted
    #[arg(short, long, env = "DEMURRAGE_TARIFF", global = true)]
    tariff: Option<PathBuf>,

    /// Reject day counts of zero
    #[arg(long, global = true)]
    require_positive_days: bool,

    /// Server host
    #[arg(long, env = "HOST", default_value = "0.0.0.0", global = true)]
    host: String,

    /// Server port
    #[arg(short, long, env = "PORT", default_value_t = 8000, global = true)]
    port: u16,

    /// Directory holding index.html and static assets
    #[arg(long, env = "DEMURRAGE_STATIC_DIR", default_value = DEFAULT_STATIC_DIR, global = true)]
    static_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Commands {
    /// Start the HTTP server (default)
    Serve,
    /// Run the interactive calculator
    Prompt,
    /// Print the active tariff as YAML
    Tariff,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let loader = match &cli.tariff {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("failed to load tariff from {}", path.display()))?,
        None => ConfigLoader::standard(),
    };
    let day_policy = if cli.require_positive_days {
        DayPolicy::RequirePositive
    } else {
        DayPolicy::AllowZero
    };

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .context("failed to start async runtime")?;
            runtime.block_on(serve(&cli, loader, day_policy))?;
        }
        Commands::Prompt => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            run_prompt(stdin.lock(), stdout.lock(), loader.tariff(), day_policy)?;
        }
        Commands::Tariff => print!("{}", loader.to_yaml()?),
    }

    Ok(())
}

async fn serve(cli: &Cli, loader: ConfigLoader, day_policy: DayPolicy) -> Result<()> {
    let state = AppState::new(loader.into_tariff())
        .with_day_policy(day_policy)
        .with_static_dir(cli.static_dir.clone());
    let app = create_router(state);

    let listener = bind(&cli.host, cli.port).await?;
    let addr = listener.local_addr()?;

    info!(%addr, ?day_policy, "Demurrage server listening");
    axum::serve(listener, app).await?;

    Ok(())
}

/// Binds the listener, resolving host names as well as IP literals.
async fn bind(host: &str, port: u16) -> Result<TcpListener> {
    TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {}:{}", host, port))
}

/// Runs the blocking prompt on the calling thread.
fn run_prompt<R: BufRead, W: Write>(
    input: R,
    output: W,
    tariff: &Tariff,
    day_policy: DayPolicy,
) -> Result<()> {
    Prompt::new(input, output, tariff)
        .with_day_policy(day_policy)
        .run()
        .context("prompt session failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[tokio::test]
    async fn test_bind_resolves_host_name() {
        let listener = bind("localhost", 0).await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_bind_accepts_ip_literal() {
        let listener = bind("127.0.0.1", 0).await.unwrap();
        assert_ne!(listener.local_addr().unwrap().port(), 0);
    }

    #[test]
    fn test_prompt_runs_without_async_runtime() {
        colored::control::set_override(false);
        let mut output = Vec::new();

        run_prompt(
            Cursor::new("1\n1\n1\n21\nn\n"),
            &mut output,
            Tariff::standard(),
            DayPolicy::AllowZero,
        )
        .unwrap();

        let out = String::from_utf8(output).unwrap();
        assert!(out.contains("Total charge: 35.000"), "{}", out);
        assert!(tokio::runtime::Handle::try_current().is_err());
    }
}
