use anyhow::{Context, Result};
use catalog::{CatalogClient, MovieDetail, MovieSummary, backdrop_url, poster_url};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use service::{FeedKind, FeedOrchestrator, RankedFeed};
use std::sync::Arc;

/// Marquee - movie feed browser
#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Aggregated, ranked movie feeds from the TMDB catalog", long_about = None)]
struct Cli {
    /// TMDB API key (falls back to the TMDB_API_KEY environment variable)
    #[arg(long)]
    api_key: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one of the standing feeds
    Feed {
        /// Which feed to load
        #[arg(long, value_enum, default_value = "trending")]
        kind: FeedArg,

        /// Render the top title as a hero slide with its backdrop
        #[arg(long)]
        hero: bool,
    },

    /// Search the catalog
    Search {
        /// Free-text query
        #[arg(long)]
        query: String,
    },

    /// Show one title's detail page with its recommendation rail
    Detail {
        /// Movie ID to display
        #[arg(long)]
        id: u64,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FeedArg {
    Trending,
    Korean,
    Japanese,
    Popular,
    NowPlaying,
}

impl From<FeedArg> for FeedKind {
    fn from(arg: FeedArg) -> Self {
        match arg {
            FeedArg::Trending => FeedKind::Trending,
            FeedArg::Korean => FeedKind::Korean,
            FeedArg::Japanese => FeedKind::Japanese,
            FeedArg::Popular => FeedKind::Popular,
            FeedArg::NowPlaying => FeedKind::NowPlaying,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let api_key = match cli.api_key {
        Some(key) => key,
        None => std::env::var("TMDB_API_KEY")
            .context("No API key: pass --api-key or set TMDB_API_KEY")?,
    };
    let client = Arc::new(CatalogClient::new(api_key));
    let orchestrator = FeedOrchestrator::new(client);

    match cli.command {
        Commands::Feed { kind, hero } => handle_feed(&orchestrator, kind.into(), hero).await?,
        Commands::Search { query } => handle_search(&orchestrator, &query).await?,
        Commands::Detail { id } => handle_detail(&orchestrator, id).await?,
    }

    Ok(())
}

/// Handle the 'feed' command
async fn handle_feed(orchestrator: &FeedOrchestrator, kind: FeedKind, hero: bool) -> Result<()> {
    let feed = orchestrator.load_feed(kind).await?;
    if feed.movies.is_empty() {
        println!("{}", "No titles available right now.".yellow());
        return Ok(());
    }

    if hero {
        print_hero(&feed.movies[0]);
    }
    println!("{}", format!("{kind} feed:").bold().blue());
    print_ranked(&feed);
    Ok(())
}

/// Handle the 'search' command
async fn handle_search(orchestrator: &FeedOrchestrator, query: &str) -> Result<()> {
    let feed = orchestrator.search(query).await?;
    println!("{}", format!("Search results for '{query}':").bold().blue());
    if feed.movies.is_empty() {
        println!("{}", "Nothing found.".yellow());
        return Ok(());
    }
    print_ranked(&feed);
    Ok(())
}

/// Handle the 'detail' command
async fn handle_detail(orchestrator: &FeedOrchestrator, id: u64) -> Result<()> {
    let detail = orchestrator
        .detail(id)
        .await
        .with_context(|| format!("Movie {id} not found"))?;
    print_detail(&detail);

    let similar = orchestrator.similar(id).await?;
    if !similar.movies.is_empty() {
        println!();
        println!("{}", "You may also like:".bold().blue());
        print_ranked(&similar);
    }
    Ok(())
}

/// Print a ranked feed as a numbered list
fn print_ranked(feed: &RankedFeed) {
    for (index, movie) in feed.movies.iter().enumerate() {
        let rank = index + 1;
        let year = match movie.release_year() {
            0 => "----".to_string(),
            year => year.to_string(),
        };
        println!(
            "{}. {} ({}) [{}] - popularity {:.1}",
            rank.to_string().green(),
            movie.title,
            year,
            movie.original_language,
            movie.popularity
        );
    }
}

/// Print the top title as a hero slide
fn print_hero(movie: &MovieSummary) {
    println!("{}", movie.title.bold().white());
    if let Some(overview) = movie.overview.as_deref() {
        println!("{overview}");
    }
    if let Some(url) = backdrop_url(movie) {
        println!("{} {}", "backdrop:".cyan(), url);
    }
    println!();
}

/// Print a detail page
fn print_detail(detail: &MovieDetail) {
    println!("{}", detail.title.bold().blue());
    if detail.original_title != detail.title && !detail.original_title.is_empty() {
        println!("{}", detail.original_title.italic());
    }

    let year = detail
        .release_date
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "unknown".to_string());
    println!("{}Released: {year}", "• ".green());
    if let Some(runtime) = detail.runtime {
        println!("{}Runtime: {runtime} min", "• ".green());
    }
    if !detail.genres.is_empty() {
        let genres = detail
            .genres
            .iter()
            .map(|genre| genre.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{}Genres: {genres}", "• ".green());
    }
    let directors = detail.directors();
    if !directors.is_empty() {
        println!("{}Directed by: {}", "• ".green(), directors.join(", "));
    }
    println!(
        "{}Rating: {:.1} ({} votes)",
        "• ".cyan(),
        detail.vote_average,
        detail.vote_count
    );
    if let Some(url) = poster_url(&detail.clone().into_summary()) {
        println!("{}Poster: {url}", "• ".cyan());
    }
    if let Some(overview) = detail.overview.as_deref() {
        println!();
        println!("{overview}");
    }
}
