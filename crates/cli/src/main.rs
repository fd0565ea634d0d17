use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{load, Dataset};
use pipeline::{format_score, rank, write, ActorRatingIndex, Report};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// MovieRank - cast-weighted movie ranking
#[derive(Parser)]
#[command(name = "movie-rank")]
#[command(about = "Rank movies by their rating blended with their cast's best work", long_about = None)]
struct Cli {
    /// Path to the semicolon-delimited movie dataset
    #[arg(short, long, default_value = "films.csv")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank movies and write the top entries to a text file
    Rank {
        /// Only consider movies released in or after this year (0 = all)
        #[arg(long, default_value = "0")]
        min_year: i32,

        /// Comma-separated genres to include (empty = all)
        #[arg(long, default_value = "")]
        genre: String,

        /// Number of entries to keep (0 = all)
        #[arg(long, default_value = "0")]
        limit: usize,

        /// File to write the report to
        #[arg(short, long, default_value = "films.txt")]
        output: PathBuf,

        /// Print the report as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show actors with the best-rated credits
    Actors {
        /// Only consider movies released in or after this year (0 = all)
        #[arg(long, default_value = "0")]
        min_year: i32,

        /// Number of actors to show (0 = all)
        #[arg(long, default_value = "20")]
        limit: usize,
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

    match cli.command {
        Commands::Rank {
            min_year,
            genre,
            limit,
            output,
            json,
        } => {
            let dataset = load_dataset(&cli.data, min_year)?;
            handle_rank(&dataset, &genre, limit, &output, json)?
        }
        Commands::Actors { min_year, limit } => {
            let dataset = load_dataset(&cli.data, min_year)?;
            handle_actors(&dataset, limit)?
        }
    }

    Ok(())
}

fn load_dataset(path: &Path, min_year: i32) -> Result<Dataset> {
    let start = Instant::now();
    let dataset = load(path, min_year)
        .with_context(|| format!("Failed to load movie dataset from {}", path.display()))?;
    tracing::debug!("Loaded dataset in {:?}", start.elapsed());
    Ok(dataset)
}

/// Handle the 'rank' command
fn handle_rank(
    dataset: &Dataset,
    genre: &str,
    limit: usize,
    output: &Path,
    json: bool,
) -> Result<()> {
    let report = rank(dataset, genre, limit).context("Failed to rank movies")?;

    write(&report, output)
        .with_context(|| format!("Failed to write report to {}", output.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
        println!(
            "{} Wrote {} entries to {}",
            "✓".green(),
            report.len(),
            output.display()
        );
    }
    Ok(())
}

/// Handle the 'actors' command
fn handle_actors(dataset: &Dataset, limit: usize) -> Result<()> {
    let index = ActorRatingIndex::build(dataset).context("Failed to index actor ratings")?;

    println!(
        "{}",
        format!("Best-rated actors ({} indexed):", index.len()).bold().blue()
    );
    for (position, (actor, best)) in index.top(limit).into_iter().enumerate() {
        println!(
            "{}. {} - Best rating: {}",
            (position + 1).to_string().green(),
            actor,
            format_score(best)
        );
    }
    Ok(())
}

/// Helper function to print a report as a numbered table
fn print_report(report: &Report) {
    println!("{}", "Top Movies:".bold().blue());
    if report.is_empty() {
        println!("  (no movies matched)");
        return;
    }
    for (position, entry) in report.iter().enumerate() {
        println!(
            "{}. {} - Score: {}",
            (position + 1).to_string().green(),
            entry.title,
            format_score(entry.score)
        );
    }
}
