use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use crate::config::{LoadedConfig, UiConfig, load_config};
use crate::logging::init_logging;
use crate::models::{ANONYMOUS_AUTHOR, ReviewRecord, render_stars, site_domain};
use crate::reviews::{FileStorage, MemoryStorage, ReviewStorage, ReviewStore};
use crate::search::SearchCatalog;
use crate::tui::{format_timestamp, run_interactive};

#[derive(Parser)]
#[command(name = "web-explorer")]
#[command(version = "0.1.0")]
#[command(about = "Browse a simulated web and rate the sites you visit", long_about = None)]
pub struct Cli {
    /// Path to config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory holding reviews.json and logs
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Keep reviews in memory and skip the log file; nothing is written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive browser (default)
    Browse {
        /// URL or search query to open first
        target: Option<String>,
    },
    /// Show the rating summary and comments for a URL
    Show { url: String },
    /// Rate a URL from 1 to 5 stars
    Rate { url: String, stars: u8 },
    /// Post a comment on a URL
    Comment {
        url: String,
        text: String,
        /// Name shown next to the comment
        #[arg(long)]
        author: Option<String>,
    },
    /// List catalog sites matching a query
    Search { query: Option<String> },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let loaded = load_config(cli.config.clone(), cli.data_dir.clone())
        .context("Failed to load configuration")?;
    let log_paths = (!cli.ephemeral).then_some(&loaded.paths);
    let _logger = init_logging(&loaded.config.logging, log_paths)?;
    info!(
        "Starting web-explorer (config {} {}, data {})",
        loaded.paths.config_file.display(),
        if loaded.config_exists { "loaded" } else { "missing, using defaults" },
        loaded.paths.data_dir.display()
    );

    let command = cli.command.unwrap_or(Commands::Browse { target: None });
    if cli.ephemeral {
        execute(command, ReviewStore::new(MemoryStorage::new()), &loaded)
    } else {
        let storage = FileStorage::open(&loaded.paths.data_dir).with_context(|| {
            format!("Failed to open review storage in {}", loaded.paths.data_dir.display())
        })?;
        execute(command, ReviewStore::new(storage), &loaded)
    }
}

fn execute<S: ReviewStorage>(
    command: Commands,
    mut store: ReviewStore<S>,
    loaded: &LoadedConfig,
) -> Result<()> {
    match command {
        Commands::Browse { target } => run_interactive(store, &loaded.config.ui, target.as_deref()),
        Commands::Show { url } => {
            print_record(&store.read(&url));
            Ok(())
        }
        Commands::Rate { url, stars } => {
            let record = store.submit_rating(&url, stars)?;
            println!("Rated {} {}", site_domain(&url), render_stars(stars));
            print_summary(&record);
            Ok(())
        }
        Commands::Comment { url, text, author } => {
            let author = comment_author(author, &loaded.config.ui);
            let record = store.submit_comment(&url, &author, &text)?;
            println!("Comment posted on {} ({} total)", site_domain(&url), record.comments.len());
            Ok(())
        }
        Commands::Search { query } => {
            show_search(query.as_deref().unwrap_or(""));
            Ok(())
        }
    }
}

/// `--author`, then `[ui] author`, then anonymous
fn comment_author(flag: Option<String>, ui: &UiConfig) -> String {
    flag.or_else(|| ui.author.clone()).unwrap_or_else(|| ANONYMOUS_AUTHOR.to_string())
}

fn print_summary(record: &ReviewRecord) {
    if record.has_ratings() {
        println!("Average rating: {}", record.rating_summary());
    } else {
        println!("Average rating: no ratings yet");
    }
    if let Some(stars) = record.viewer_rating {
        println!("Your rating: {} ({}/5)", render_stars(stars), stars);
    }
}

fn print_record(record: &ReviewRecord) {
    println!("Reviews for {}", record.url);
    println!("================================");
    print_summary(record);
    println!();

    if record.comments.is_empty() {
        println!("No comments yet");
        return;
    }

    println!("Comments ({}):", record.comments.len());
    for comment in &record.comments {
        let rating = if comment.rating_at_submission > 0 {
            format!(" {}", render_stars(comment.rating_at_submission))
        } else {
            String::new()
        };
        println!(
            "  {}{} - {}",
            comment.author,
            rating,
            format_timestamp(&comment.submitted_at)
        );
        println!("    {}", comment.text);
    }
}

fn show_search(query: &str) {
    let catalog = SearchCatalog::new();
    let results = catalog.search(query);

    if results.is_empty() {
        println!("No results for \"{}\"", query);
        return;
    }

    println!("{} result{}", results.len(), if results.len() == 1 { "" } else { "s" });
    for result in results {
        println!();
        println!("{}", result.title);
        println!("  {}", result.url);
        println!("  {}", result.description);
    }
}
