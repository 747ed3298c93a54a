// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (more detail with --verbose)
// 3. Explore the domain
// 4. Write the result files and print a summary
// 5. Exit with proper code (0 = exploration done, 2 = error)
//
// An empty result, hitting the iteration cap or failing to save some pages
// are warnings, not errors: the exit code stays 0.
// =============================================================================

mod cli;   // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - domain exploration
mod error; // src/error.rs - fetch and persistence errors
mod output; // src/output.rs - result files
mod page;  // src/page/ - fetching pages and extracting links

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use crawl::{ExplorationResult, Explorer, StopReason};
use page::HttpFetcher;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    println!("Exploring {}", cli.domain);

    let fetcher = HttpFetcher::new().context("failed to build the HTTP client")?;
    let explorer = Explorer::new(fetcher, cli.explore_options());
    let result = explorer.explore(&cli.domain).await;

    output::write_lines(&cli.output, &result.domain).await?;
    if let Some(subdomains) = &result.subdomains {
        output::write_lines(&cli.subdomains_output, subdomains).await?;
    }

    print_summary(&cli, &result);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    Ok(0)
}

// Logs go to stderr so they never mix with --json output on stdout
fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| log_filter(verbose).into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// --verbose only turns on our own debug events, reqwest and friends stay at warn.
// RUST_LOG overrides this.
fn log_filter(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("warn,{}={}", env!("CARGO_CRATE_NAME"), level)
}

fn print_summary(cli: &Cli, result: &ExplorationResult) {
    println!(
        "{} pages discovered ! Saved in {}",
        result.domain.len(),
        cli.output.display()
    );

    if result.domain.is_empty() {
        println!("⚠️  No page could be explored, is the start URL reachable?");
    }

    if result.stop == StopReason::MaxIterations {
        println!(
            "⚠️  Stopped after {} iterations, some pages may be left unexplored",
            result.iterations
        );
    }

    if let Some(file_errors) = result.file_errors {
        println!("html files saved to {}", cli.pages_dir.display());
        println!("{} errors occurred while saving html files", file_errors);
    }

    if let Some(subdomains) = &result.subdomains {
        println!(
            "{} subdomains discovered at {} ! Saved in {}",
            subdomains.len(),
            cli.domain,
            cli.subdomains_output.display()
        );
    }
}
