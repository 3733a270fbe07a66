//! glimpse CLI - bundle a React project into one self-contained preview page.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "glimpse")]
#[command(about = "Bundle a React project into a single preview document")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to glimpse.toml config file
    #[arg(short, long, default_value = "glimpse.toml", global = true)]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default glimpse.toml
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        yes: bool,
    },

    /// Start development server with live reload
    Dev {
        /// Port to listen on (defaults to config or 5177)
        #[arg(short, long)]
        port: Option<u16>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },

    /// Bundle a project into a preview document
    Build {
        /// Project directory or a serialized file tree (.json)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file (defaults to config or "preview.html")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip CSS minification
        #[arg(long)]
        no_minify: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(&cli.config, yes).await?;
        }
        Commands::Dev { port, no_open } => {
            let config = config::load(&cli.config)?;
            commands::dev::run(config, port, !no_open).await?;
        }
        Commands::Build {
            input,
            output,
            no_minify,
        } => {
            let config = config::load(&cli.config)?;
            let minify = if no_minify { Some(false) } else { None };
            commands::build::run(config, input, output, minify).await?;
        }
    }

    Ok(())
}
