// src/main.rs
use clap::{Parser, Subcommand};
use meowbox_docs::core::config::Config;
use meowbox_docs::{preview, server, Result};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "meowbox-docs")]
#[command(version)]
#[command(about = "MeowBox documentation site server")]
struct Cli {
    /// Configuration file (default: meowbox.toml lookup)
    #[arg(short, long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the docs site (default)
    Serve,

    /// Render a fragment headlessly and print the resulting document
    Preview {
        /// Location fragment, e.g. "#/en/index.html"
        #[arg(value_name = "FRAGMENT", default_value = "")]
        fragment: String,

        /// Navigator language tag
        #[arg(short, long)]
        lang: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Up before the config loads so its warnings are visible.
    let env_filter = init_logger();
    let config = match &cli.config {
        Some(path) => Config::from_file(path).await?,
        None => Config::load().await?,
    };
    if !env_filter {
        log::set_max_level(config.logging.level_filter());
    }

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            config.log_startup();
            server::run(&config).await
        }
        Commands::Preview { fragment, lang } => {
            let html = preview(&config, &fragment, lang.as_deref()).await?;
            println!("{}", html);
            Ok(())
        }
    }
}

/// Without `RUST_LOG` every record passes the filter and the global max
/// level gates output, starting at `info` until the configured level is known.
/// Returns whether `RUST_LOG` is in charge.
fn init_logger() -> bool {
    let env_filter = std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace"))
        .format_timestamp_secs()
        .init();
    if !env_filter {
        log::set_max_level(log::LevelFilter::Info);
    }
    env_filter
}
