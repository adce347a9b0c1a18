//! gsearch CLI - Google search result scraping from the command line.

use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use gsearch::{SafeSearch, Search, SearchItem, SearchOptions};

/// Scrape Google search results
#[derive(Parser)]
#[command(name = "gsearch")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Search query
    query: String,

    /// Number of results to fetch
    #[arg(short, long, default_value = "10")]
    num_results: usize,

    /// Interface language (hl parameter)
    #[arg(short, long, default_value = "en")]
    lang: String,

    /// Region bias (gl parameter)
    #[arg(short, long)]
    region: Option<String>,

    /// Safe search level
    #[arg(long, default_value = "active")]
    safe: SafeArg,

    /// Proxy URL (e.g., http://127.0.0.1:8080 or socks5://127.0.0.1:1080)
    #[arg(short, long)]
    proxy: Option<String>,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value = "5")]
    timeout: u64,

    /// Pause between page requests in seconds
    #[arg(long, default_value = "0")]
    sleep: u64,

    /// Initial pagination offset
    #[arg(long, default_value = "0")]
    start: usize,

    /// Skip results whose URL was already produced
    #[arg(short, long)]
    unique: bool,

    /// Fetch titles and descriptions, not just URLs
    #[arg(short, long)]
    advanced: bool,

    /// Disable TLS certificate verification
    #[arg(long)]
    insecure: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum SafeArg {
    /// Filtering enabled
    Active,
    /// No filtering
    Off,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// Compact single-line output
    Compact,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    let mut options = SearchOptions::new(&cli.query)
        .with_num_results(cli.num_results)
        .with_lang(&cli.lang)
        .with_safe(match cli.safe {
            SafeArg::Active => SafeSearch::Active,
            SafeArg::Off => SafeSearch::Off,
        })
        .with_timeout(Duration::from_secs(cli.timeout))
        .with_sleep_interval(Duration::from_secs(cli.sleep))
        .with_start_offset(cli.start)
        .with_unique(cli.unique)
        .with_advanced(cli.advanced);

    if let Some(region) = &cli.region {
        options = options.with_region(region);
    }
    if let Some(proxy) = &cli.proxy {
        options = options.with_proxy(proxy);
        if matches!(cli.format, OutputFormat::Text) {
            eprintln!("Using proxy: {}", proxy);
        }
    }
    if cli.insecure {
        options = options.with_ssl_verify(false);
    }

    let items = Search::new(options)?.collect().await?;

    match cli.format {
        OutputFormat::Text => {
            println!(
                "\nSearch results for \"{}\" ({} results):\n",
                cli.query,
                items.len()
            );
            for (i, item) in items.iter().enumerate() {
                match item {
                    SearchItem::Url(url) => println!("{}. {}", i + 1, url),
                    SearchItem::Result(result) => {
                        println!("{}. {}", i + 1, result.title);
                        println!("   URL: {}", result.url);
                        if !result.description.is_empty() {
                            println!("   {}", result.description);
                        }
                        println!();
                    }
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&items)?);
        }
        OutputFormat::Compact => {
            for item in &items {
                match item {
                    SearchItem::Url(url) => println!("{}", url),
                    SearchItem::Result(result) => println!("{}\t{}", result.title, result.url),
                }
            }
        }
    }

    Ok(())
}
