// src/page/mod.rs
// =============================================================================
// This module deals with a single web page.
//
// Submodules:
// - fetch: Downloads a page and follows its redirects
// - links: Pulls the href of every <a> tag out of the page HTML
//
// Neither submodule knows anything about domains or exploration. They are
// the building blocks the crawl module drives.
// =============================================================================

mod fetch;
mod links;

pub use fetch::{FetchedPage, Fetcher, HttpFetcher};
pub use links::extract_links;
