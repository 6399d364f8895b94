use anyhow::{Context, Result};
use catalog::Catalog;
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::{Outcome, RecommendationEngine};
use slots::SlotExtractor;
use std::path::PathBuf;
use std::sync::Arc;

/// ReelChat - rule-based conversational movie recommender
#[derive(Parser)]
#[command(name = "reel-chat")]
#[command(about = "Conversational movie recommendations via slot filling", long_about = None)]
struct Cli {
    /// Path to an external catalog JSON file (defaults to the builtin catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask for a recommendation
    Ask {
        /// The request, e.g. "a dark korean thriller from the 2000s"
        text: String,

        /// Print the assembled downstream prompt as well
        #[arg(long)]
        show_prompt: bool,
    },

    /// Show the slots extracted from a request (debugging)
    Slots {
        /// The request to extract from
        text: String,

        /// Print the slot set as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the catalog, or export it as JSON
    Catalog {
        /// Write the catalog to this file instead of listing it
        #[arg(long)]
        export: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => Arc::new(
            Catalog::load_from_file(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        ),
        None => Arc::new(Catalog::builtin()),
    };

    match cli.command {
        Commands::Ask { text, show_prompt } => handle_ask(catalog, &text, show_prompt),
        Commands::Slots { text, json } => handle_slots(catalog, &text, json),
        Commands::Catalog { export } => handle_catalog(catalog, export),
    }
}

/// Handle the 'ask' command
fn handle_ask(catalog: Arc<Catalog>, text: &str, show_prompt: bool) -> Result<()> {
    let engine = RecommendationEngine::new(catalog);
    let reply = engine.respond(text);

    println!("{} {}", "User:".bold().blue(), reply.input.trim());

    match &reply.outcome {
        Outcome::Clarify(question) => {
            println!("{} {}", "Assistant:".bold().green(), question.text);
            println!("  {} {}", "(missing slot:".dimmed(), format!("{})", question.slot).dimmed());
        }
        Outcome::Recommend(results) => {
            if results.is_empty() {
                println!(
                    "{} Nothing in the catalog matches that request.",
                    "Assistant:".bold().green()
                );
            } else {
                println!("{}", "Top picks:".bold().green());
                for (rank, entry) in results.iter().enumerate() {
                    let genres = entry
                        .movie
                        .genres
                        .iter()
                        .map(|g| g.to_string())
                        .collect::<Vec<_>>()
                        .join("/");
                    println!(
                        "{}. {} ({}) [{}] dir. {} - score {}",
                        (rank + 1).to_string().green(),
                        entry.movie.title.bold(),
                        entry.movie.year,
                        genres,
                        entry.movie.director,
                        entry.score
                    );
                }
            }
        }
    }

    if show_prompt {
        println!("\n{}", "--- downstream prompt ---".dimmed());
        println!("{}", reply.prompt);
    }
    Ok(())
}

/// Handle the 'slots' command
fn handle_slots(catalog: Arc<Catalog>, text: &str, json: bool) -> Result<()> {
    let extractor = SlotExtractor::new(catalog);
    let slots = extractor.extract(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&slots)?);
        return Ok(());
    }

    println!("{}", format!("Slots for {:?}:", text).bold().blue());
    let filled = slots.filled();
    if filled.is_empty() {
        println!("  (none identified)");
    } else {
        for (slot, value) in filled {
            println!("  {} {}: {}", "•".green(), slot, value);
        }
    }
    Ok(())
}

/// Handle the 'catalog' command
fn handle_catalog(catalog: Arc<Catalog>, export: Option<PathBuf>) -> Result<()> {
    if let Some(path) = export {
        let json = catalog.to_json_string()?;
        std::fs::write(&path, json)
            .with_context(|| format!("Failed to write catalog to {}", path.display()))?;
        println!("{} Exported {} movies to {}", "✓".green(), catalog.len(), path.display());
        return Ok(());
    }

    println!("{}", format!("Catalog ({} movies):", catalog.len()).bold().blue());
    for movie in catalog.movies() {
        let genres = movie
            .genres
            .iter()
            .map(|g| g.to_string())
            .collect::<Vec<_>>()
            .join("/");
        println!(
            "  {} {} ({}) [{}] {} - {}, {} min",
            "•".green(),
            movie.title.bold(),
            movie.year,
            genres,
            movie.director,
            movie.language,
            movie.runtime_minutes
        );
    }
    Ok(())
}
