//! py-vercel CLI - packaging and build planning for the Python builder

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pyvercel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for the packaging declaration
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DeclarationFormat {
    /// Pretty-printed JSON
    Json,
    /// Declarative setuptools setup.cfg
    Cfg,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit the packaging declaration for the Python distribution
    Setup {
        /// Manifest holding the package version
        #[arg(short, long, default_value = pyvercel_core::manifest::MANIFEST_FILE)]
        manifest: String,

        /// Declaration format
        #[arg(short, long, value_enum, default_value = "json")]
        format: DeclarationFormat,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Resolve the lambda build plan for an entrypoint
    Plan {
        /// Entrypoint file of the WSGI application
        entrypoint: String,

        /// JSON build config (runtime, wsgiApplicationName, excludeFiles)
        #[arg(short, long)]
        config: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; logs go to stderr so stdout stays machine-readable
    let filter = if cli.verbose {
        "pyvercel_cli=debug,pyvercel_core=debug"
    } else {
        "pyvercel_cli=warn,pyvercel_core=warn"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Setup {
            manifest,
            format,
            output,
        } => commands::setup(&manifest, format, output.as_deref()),

        Commands::Plan { entrypoint, config } => commands::plan(&entrypoint, config.as_deref()),
    }
}
