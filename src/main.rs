//! Mention MCP server.
//!
//! Exposes Mention web-monitoring alert operations as MCP tools over
//! stdio.

mod register;
mod server;

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mention_config::schema::{CONFIG_DIR, LOGS_SUBDIR};
use mention_config::ConfigLoader;

/// Mention MCP server CLI.
#[derive(Parser)]
#[command(name = "mention-mcp")]
#[command(about = "MCP server for the Mention web-monitoring API")]
#[command(version)]
struct Cli {
    /// Configuration file path (default: ~/.config/mention-mcp/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

/// `~/.config/mention-mcp/logs`.
fn log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_DIR).join(LOGS_SUBDIR))
        .unwrap_or_else(|| PathBuf::from(LOGS_SUBDIR))
}

/// Initialize tracing with stderr and file output.
///
/// stdout belongs to the MCP protocol, so the console layer writes to
/// stderr; log files rotate daily under ~/.config/mention-mcp/logs/.
fn init_tracing(debug: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("mention-mcp")
        .filename_suffix("log")
        .max_log_files(30)
        .build(&log_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Keep the writer guard alive for the program duration.
    static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
        std::sync::OnceLock::new();
    let _ = GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "info" }));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_ansi(false),
        )
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_tracing(cli.debug)?;

    let config = match cli.config {
        Some(path) => ConfigLoader::load_from(Some(&path)),
        None => ConfigLoader::load(),
    }
    .map_err(|e| {
        error!(error = %e, "failed to load configuration; set MENTION_ACCESS_TOKEN or provide a config file");
        e
    })?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        base_url = %config.mention_api.base_url,
        "starting mention-mcp"
    );

    let registry = register::build_registry(&config)?;
    let server = server::McpServer::new(
        config.server.name.clone(),
        config.server.version.clone(),
        registry,
    );

    server.serve_stdio().await?;

    info!("shutting down");
    Ok(())
}
