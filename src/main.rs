//! CLI entry point for articles-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use articles_rs::commands::nav::NavFormat;

#[derive(Parser)]
#[command(name = "articles-rs")]
#[command(version)]
#[command(about = "Render articles and navigation from a hosted content API", long_about = None)]
struct Cli {
    /// Directory holding _config.yml (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Read drafts from the preview API
    #[arg(long, global = true)]
    preview: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single article to HTML
    Article {
        /// Entry id of the article
        id: String,
    },

    /// Print the navigation tree
    Nav {
        /// Print the sorted tree as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },

    /// Serve article pages
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "articles_rs=debug,info"
    } else {
        "articles_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let articles = articles_rs::Articles::new(&base_dir, cli.preview)?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Article { id } => {
            tracing::info!("Rendering article {}", id);
            articles_rs::commands::article::run(&articles, &id, &mut stdout).await?;
        }

        Commands::Nav { json } => {
            let format = if json { NavFormat::Json } else { NavFormat::Html };
            articles_rs::commands::nav::run(&articles, format, &mut stdout).await?;
        }

        Commands::Serve { port, ip } => {
            drop(stdout);
            tracing::info!("Starting server at http://{}:{}", ip, port);
            articles_rs::server::start(articles, &ip, port).await?;
        }
    }

    Ok(())
}
