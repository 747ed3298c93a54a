// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
//   domain-explorer [OPTIONS] <DOMAIN>
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - value_parser: A function clap runs to validate an argument
// =============================================================================

use crate::crawl::{ExploreOptions, DEFAULT_MAX_ITERATIONS, DEFAULT_PAGES_DIR};
use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "domain-explorer",
    version,
    about = "Explore a domain and save every URL encountered in a text file",
    long_about = "domain-explorer starts at https://www.<DOMAIN> and follows every link that stays \
                  on the domain, writing the list of discovered pages to a text file. It can also \
                  save the HTML of each page and list the subdomains that pages link to."
)]
pub struct Cli {
    /// Domain to explore (e.g., example.com)
    ///
    /// Exploration always starts at https://www.<DOMAIN>
    #[arg(value_parser = parse_domain)]
    pub domain: String,

    /// Save the HTML of every page into a subfolder of the current directory
    #[arg(short = 'f', long)]
    pub save_files: bool,

    /// Save the subdomains encountered in links to a text file
    #[arg(short = 's', long)]
    pub subdomains: bool,

    /// Maximum number of pages explored
    #[arg(short = 'm', long = "max-iter", value_name = "MAX_ITER", default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iter: usize,

    /// Print every exploration step
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory the HTML pages are saved into
    #[arg(long, value_name = "DIR", default_value = DEFAULT_PAGES_DIR)]
    pub pages_dir: PathBuf,

    /// File the discovered URLs are written to
    #[arg(short, long, value_name = "FILE", default_value = "domain.txt")]
    pub output: PathBuf,

    /// File the discovered subdomains are written to
    #[arg(long, value_name = "FILE", default_value = "subdomains.txt")]
    pub subdomains_output: PathBuf,

    /// Start from this URL instead of https://www.<DOMAIN>
    #[arg(long, value_name = "URL")]
    pub start_url: Option<String>,

    /// Also print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Settings for the explorer, taken from the parsed arguments
    pub fn explore_options(&self) -> ExploreOptions {
        ExploreOptions {
            save_files: self.save_files,
            track_subdomains: self.subdomains,
            max_iterations: self.max_iter,
            pages_dir: self.pages_dir.clone(),
            start_url: self.start_url.clone(),
        }
    }
}

// A domain is a bare host name: "example.com", not "https://example.com/"
fn parse_domain(value: &str) -> Result<String, String> {
    let domain = value.trim();

    if domain.is_empty() {
        return Err("domain must not be empty".to_string());
    }
    if domain.contains('/') {
        return Err(format!(
            "'{}' is not a bare domain, pass only the host name (e.g. example.com)",
            domain
        ));
    }

    Ok(domain.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["domain-explorer", "example.com"]).unwrap();

        assert_eq!(cli.domain, "example.com");
        assert!(!cli.save_files);
        assert!(!cli.subdomains);
        assert!(!cli.verbose);
        assert!(!cli.json);
        assert_eq!(cli.max_iter, 2000);
        assert_eq!(cli.pages_dir, PathBuf::from("pages"));
        assert_eq!(cli.output, PathBuf::from("domain.txt"));
        assert_eq!(cli.subdomains_output, PathBuf::from("subdomains.txt"));
        assert_eq!(cli.start_url, None);
    }

    #[test]
    fn test_short_flags() {
        let cli =
            Cli::try_parse_from(["domain-explorer", "-f", "-s", "-v", "-m", "10", "example.com"])
                .unwrap();

        assert!(cli.save_files);
        assert!(cli.subdomains);
        assert!(cli.verbose);
        assert_eq!(cli.max_iter, 10);

        let options = cli.explore_options();
        assert!(options.save_files);
        assert!(options.track_subdomains);
        assert_eq!(options.max_iterations, 10);
    }

    #[test]
    fn test_domain_is_required() {
        assert!(Cli::try_parse_from(["domain-explorer"]).is_err());
    }

    #[test]
    fn test_rejects_urls_as_domain() {
        assert!(Cli::try_parse_from(["domain-explorer", "https://example.com"]).is_err());
        assert!(Cli::try_parse_from(["domain-explorer", "  "]).is_err());
    }

    #[test]
    fn test_rejects_bad_max_iter() {
        assert!(Cli::try_parse_from(["domain-explorer", "-m", "lots", "example.com"]).is_err());
    }
}
