//! Shelf CLI - browse a book list from the terminal

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use shelf_core::SortOrder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "shelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where to load books from
#[derive(Args, Clone)]
pub struct SourceArgs {
    /// Books endpoint (defaults to SHELF_BOOKS_URL or http://localhost:3000/books.json)
    #[arg(long, conflicts_with = "file")]
    url: Option<String>,

    /// Read the book list from a local JSON file instead
    #[arg(long)]
    file: Option<String>,

    /// Filter from the last fetched list instead of the displayed one
    #[arg(long)]
    pristine: bool,

    /// Skip the initial and sort delays
    #[arg(long)]
    no_delay: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively browse the library view
    View {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Print the library once it has loaded
    List {
        #[command(flatten)]
        source: SourceArgs,

        /// Filter by title or author
        #[arg(short, long)]
        search: Option<String>,

        /// Sort by publication year (asc, desc)
        #[arg(long)]
        sort: Option<SortOrder>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "shelf_cli=debug,shelf_core=debug"
    } else {
        "shelf_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::View { source } => commands::view(&source).await,

        Commands::List {
            source,
            search,
            sort,
            json,
        } => commands::list(&source, search.as_deref(), sort, json).await,
    }
}
