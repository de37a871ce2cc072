use anyhow::{Context, Result, anyhow};
use awards::ProducerInterval;
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{Movie, MovieId, Year};
use server::{MovieCatalog, MovieFilter};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Razzies - Golden Raspberry Awards explorer
#[derive(Parser)]
#[command(name = "razzies")]
#[command(about = "Query Golden Raspberry Awards nominees, winners and producer win intervals", long_about = None)]
struct Cli {
    /// Path to the `;`-delimited award list
    #[arg(short, long, default_value = "data/movielist.csv")]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Producers with the shortest and longest gap between two wins
    Intervals,

    /// List winning movies, oldest first
    Winners,

    /// List movies, optionally for a single year
    Movies {
        /// Only show nominees of this year
        #[arg(long)]
        year: Option<Year>,
    },

    /// Search movies by title
    Search {
        /// Title to search for (case-insensitive substring match)
        #[arg(long)]
        title: String,
    },

    /// Show a single movie record
    Show {
        /// Movie ID
        #[arg(long)]
        id: MovieId,
    },

    /// Measure interval query latency under concurrent load
    Benchmark {
        /// Number of queries to run
        #[arg(long, default_value = "1000")]
        requests: usize,

        /// Number of queries in flight at once
        #[arg(long, default_value = "10")]
        concurrent: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let catalog = Arc::new(
        MovieCatalog::load_from_file(&cli.data).context("Failed to load award list")?,
    );
    println!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        catalog.count()?,
        start.elapsed()
    );

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Intervals => handle_intervals(&catalog)?,
        Commands::Winners => handle_winners(&catalog)?,
        Commands::Movies { year } => handle_movies(&catalog, year)?,
        Commands::Search { title } => handle_search(&catalog, &title)?,
        Commands::Show { id } => handle_show(&catalog, id)?,
        Commands::Benchmark {
            requests,
            concurrent,
        } => handle_benchmark(catalog, requests, concurrent).await?,
    }

    Ok(())
}

/// Handle the 'intervals' command
fn handle_intervals(catalog: &MovieCatalog) -> Result<()> {
    let result = catalog.prize_intervals()?;

    if result.is_empty() {
        println!("No producer has won more than once.");
        return Ok(());
    }

    print_intervals("Shortest interval between wins:", &result.min);
    println!();
    print_intervals("Longest interval between wins:", &result.max);
    Ok(())
}

/// Handle the 'winners' command
fn handle_winners(catalog: &MovieCatalog) -> Result<()> {
    let winners = catalog.list(MovieFilter::Winners)?;
    println!("{}", format!("{} winners:", winners.len()).bold().blue());
    for movie in &winners {
        print_movie_line(movie);
    }
    Ok(())
}

/// Handle the 'movies' command
fn handle_movies(catalog: &MovieCatalog, year: Option<Year>) -> Result<()> {
    let filter = year.map(MovieFilter::Year).unwrap_or(MovieFilter::All);
    let movies = catalog.list(filter)?;

    let header = match year {
        Some(year) => format!("{} nominees in {}:", movies.len(), year),
        None => format!("{} nominees:", movies.len()),
    };
    println!("{}", header.bold().blue());
    for movie in &movies {
        print_movie_line(movie);
    }
    Ok(())
}

/// Handle the 'search' command
fn handle_search(catalog: &MovieCatalog, title: &str) -> Result<()> {
    let needle = title.to_lowercase();
    let mut matches: Vec<(usize, Movie)> = catalog
        .list(MovieFilter::All)?
        .into_iter()
        .filter_map(|movie| {
            let candidate = movie.title.to_lowercase();
            if candidate == needle {
                Some((0, movie))
            } else if candidate.contains(&needle) {
                Some((1, movie))
            } else {
                None
            }
        })
        .collect();

    // Exact matches first, then by year
    matches.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.year.cmp(&b.1.year)));

    println!("{}", format!("Search results for '{}':", title).bold().blue());
    if matches.is_empty() {
        println!("  (no matches)");
    }
    for (_, movie) in matches.iter().take(20) {
        print_movie_line(movie);
    }
    Ok(())
}

/// Handle the 'show' command
fn handle_show(catalog: &MovieCatalog, id: MovieId) -> Result<()> {
    let movie = catalog
        .get(id)?
        .ok_or_else(|| anyhow!("Movie {} not found", id))?;

    println!("{}", format!("Movie ID: {}", movie.id).bold().blue());
    println!("{}Title: {}", "• ".green(), movie.title);
    println!("{}Year: {}", "• ".green(), movie.year);
    println!("{}Studios: {}", "• ".green(), movie.studios);
    println!("{}Producers:", "• ".green());
    for producer in awards::parse_producers(&movie.producers) {
        println!("    - {}", producer);
    }
    println!(
        "{}Winner: {}",
        "• ".cyan(),
        if movie.winner { "yes".yellow() } else { "no".normal() }
    );
    Ok(())
}

/// Handle the 'benchmark' command
async fn handle_benchmark(
    catalog: Arc<MovieCatalog>,
    requests: usize,
    concurrent: usize,
) -> Result<()> {
    if requests == 0 {
        return Err(anyhow!("--requests must be at least 1"));
    }
    let concurrent = concurrent.max(1);
    let wall_clock = Instant::now();

    // Run the queries in batches of `concurrent` blocking tasks
    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    let mut remaining = requests;
    while remaining > 0 {
        let batch = remaining.min(concurrent);
        let mut handles = Vec::with_capacity(batch);
        for _ in 0..batch {
            let catalog = Arc::clone(&catalog);
            handles.push(tokio::task::spawn_blocking(move || {
                let start = Instant::now();
                catalog.prize_intervals()?;
                Ok::<_, anyhow::Error>(start.elapsed())
            }));
        }
        for handle in handles {
            timings.push(handle.await??);
        }
        remaining -= batch;
    }

    let total_time = wall_clock.elapsed();
    let avg_latency = average_latency(&timings);
    timings.sort();
    let percentile = |p: f32| timings[((timings.len() as f32 * p) as usize).min(timings.len() - 1)];

    println!("{}", "Benchmark results:".bold().blue());
    println!("Queries: {} ({} concurrent)", requests, concurrent);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", percentile(0.50));
    println!("P95 latency: {:?}", percentile(0.95));
    println!("P99 latency: {:?}", percentile(0.99));
    println!(
        "Throughput: {:.2} queries/second",
        requests as f64 / total_time.as_secs_f64()
    );

    Ok(())
}

fn average_latency(timings: &[Duration]) -> Duration {
    if timings.is_empty() {
        return Duration::ZERO;
    }
    let total: u128 = timings.iter().map(Duration::as_nanos).sum();
    let average = total / timings.len() as u128;
    Duration::from_nanos(u64::try_from(average).unwrap_or(u64::MAX))
}

fn print_intervals(title: &str, intervals: &[ProducerInterval]) {
    println!("{}", title.bold().blue());
    for entry in intervals {
        println!(
            "  {} {} year(s): {} -> {}",
            entry.producer.green(),
            entry.interval.to_string().yellow(),
            entry.previous_win,
            entry.following_win
        );
    }
}

fn print_movie_line(movie: &Movie) {
    let marker = if movie.winner { "★".yellow() } else { " ".normal() };
    println!(
        "{} {:>4} [{}] {} ({}) - {}",
        marker,
        movie.year,
        movie.id.to_string().cyan(),
        movie.title,
        movie.studios,
        movie.producers
    );
}
