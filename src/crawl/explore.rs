// src/crawl/explore.rs
// =============================================================================
// This module explores a whole domain by following links.
//
// How it works:
// 1. Start with https://www.<domain> in the frontier
// 2. Take any URL out of the frontier and fetch it
// 3. Strip query/fragment from the final URL; skip it if already explored
// 4. Extract every link from the page
// 5. Add links on the same domain that are not explored yet to the frontier
// 6. Optionally save the page and note links to subdomains
// 7. Repeat until the frontier is empty or the iteration cap is hit
//
// The frontier has no duplicates and no promised order: the order pages
// are visited in is arbitrary.
// Only the final set of pages matters.
//
// A failed fetch or a failed save never stops the run. Those pages are
// just dropped (or counted) and the loop carries on.
//
// Rust concepts:
// - Generics: Explorer<F> works with any Fetcher
// - HashSet: explored URLs, O(1) membership checks
// - BTreeSet: sorted sets in the result so output files are stable
// =============================================================================

use crate::crawl::frontier::Frontier;
use crate::crawl::normalize::{canonicalize, classify, domain_of, LinkKind};
use crate::crawl::persist::{PagePersister, DEFAULT_PAGES_DIR};
use crate::page::{extract_links, Fetcher};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Default safeguard against runaway explorations
pub const DEFAULT_MAX_ITERATIONS: usize = 2000;

/// Settings for one exploration run
#[derive(Debug, Clone)]
pub struct ExploreOptions {
    /// Save the HTML of every explored page
    pub save_files: bool,
    /// Collect the subdomains that explored pages link to
    pub track_subdomains: bool,
    /// Stop after this many pages have been explored
    pub max_iterations: usize,
    /// Where saved pages go
    pub pages_dir: PathBuf,
    /// First URL to fetch. Defaults to https://www.<domain>
    pub start_url: Option<String>,
}

impl Default for ExploreOptions {
    fn default() -> Self {
        Self {
            save_files: false,
            track_subdomains: false,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            pages_dir: PathBuf::from(DEFAULT_PAGES_DIR),
            start_url: None,
        }
    }
}

/// Why an exploration ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// Every reachable in-domain page was explored
    FrontierExhausted,
    /// The iteration cap was reached with pages possibly left unexplored
    MaxIterations,
}

/// What an exploration found
#[derive(Debug, Clone, Serialize)]
pub struct ExplorationResult {
    /// Canonical URLs of every explored page
    pub domain: BTreeSet<String>,
    /// Subdomain hosts seen in links, when tracking was enabled
    pub subdomains: Option<BTreeSet<String>>,
    /// Pages that could not be saved, when saving was enabled
    pub file_errors: Option<usize>,
    /// Number of pages explored
    pub iterations: usize,
    pub stop: StopReason,
}

/// Explores a domain using a Fetcher to get pages
pub struct Explorer<F> {
    fetcher: F,
    options: ExploreOptions,
}

impl<F: Fetcher> Explorer<F> {
    pub fn new(fetcher: F, options: ExploreOptions) -> Self {
        Self { fetcher, options }
    }

    /// Runs one exploration of `domain_name` (e.g. "example.com").
    ///
    /// Always returns a result, even when not a single page could be fetched.
    pub async fn explore(&self, domain_name: &str) -> ExplorationResult {
        let opts = &self.options;
        let start_url = opts
            .start_url
            .clone()
            .unwrap_or_else(|| format!("https://www.{}", domain_name));

        let persister = opts
            .save_files
            .then(|| PagePersister::new(opts.pages_dir.clone()));

        let mut frontier = Frontier::new();
        frontier.insert(&start_url);
        // Canonical URLs of pages already explored; only ever grows
        let mut explored: HashSet<String> = HashSet::new();
        let mut subdomains: BTreeSet<String> = BTreeSet::new();
        let mut iterations = 0;
        let mut file_errors = 0;

        info!(domain = domain_name, max_iterations = opts.max_iterations, "exploration started");

        let stop = loop {
            if iterations >= opts.max_iterations {
                warn!("Reached maximum number of iterations ({})", opts.max_iterations);
                break StopReason::MaxIterations;
            }

            let Some(next_url) = frontier.pop() else {
                break StopReason::FrontierExhausted;
            };
            debug!("Exploring {} ({} in queue)", next_url, frontier.len());

            let page = match self.fetcher.fetch(&next_url).await {
                Ok(page) => page,
                Err(e) => {
                    debug!(status = ?e.status(), "   Error while requesting url ({})", e);
                    continue;
                }
            };

            let url = canonicalize(&page.url).to_string();
            if explored.contains(&url) {
                debug!("   Already explored");
                continue;
            }

            let links = extract_links(&page.body);

            // The membership test uses the raw link, so the same page reached
            // through different query strings can be queued more than once.
            // The explored check above drops the duplicates after fetching.
            let queue_size = frontier.len();
            for link in &links {
                if classify(link, domain_name) == LinkKind::InDomain && !explored.contains(link) {
                    frontier.insert(link);
                }
            }
            debug!("   {} new pages discovered", frontier.len() - queue_size);

            if let Some(persister) = &persister {
                match persister.persist(&page.body, &url).await {
                    Ok(path) => debug!("   Page saved at {}", path.display()),
                    Err(e) => {
                        file_errors += 1;
                        debug!("   Couldn't save the HTML file ({})", e);
                    }
                }
            }

            if opts.track_subdomains {
                subdomains.extend(
                    links
                        .iter()
                        .filter(|link| classify(link, domain_name) == LinkKind::Subdomain)
                        .map(|link| domain_of(link).to_string()),
                );
            }
            explored.insert(url);
            iterations += 1;
        };

        info!(
            pages = explored.len(),
            iterations,
            stop = ?stop,
            "exploration finished"
        );

        ExplorationResult {
            domain: explored.into_iter().collect(),
            subdomains: opts.track_subdomains.then_some(subdomains),
            file_errors: opts.save_files.then_some(file_errors),
            iterations,
            stop,
        }
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why is the cap checked before popping?
//    - max_iterations = 0 explores nothing
//    - Once the cap is hit the run reports MaxIterations, even if the
//      frontier happens to be empty at that moment
//
// 2. Why don't failed fetches count as iterations?
//    - An iteration is one explored page. A 404 or an already explored
//      redirect target adds nothing to the result.
//
// 3. What is `let ... else`?
//    - Binds the pattern or runs the else block, which must leave the
//      current scope (here: break out of the loop with a value)
// -----------------------------------------------------------------------------
