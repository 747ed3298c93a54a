// src/crawl/mod.rs
// =============================================================================
// This module handles exploring a domain.
//
// Features:
// - Follows every link that stays on the target domain
// - Deduplicates pages by their URL without query string and fragment
// - Stops at an iteration cap so a broken site can't keep us busy forever
// - Optionally saves every page and collects linked subdomains
//
// Submodules:
// - normalize: domain extraction, canonical URLs, link classification
// - explore: the exploration loop itself
// - frontier: the URLs waiting to be fetched
// - persist: writing pages to disk
// =============================================================================

mod explore;
mod frontier;
mod normalize;
mod persist;

pub use explore::{ExplorationResult, ExploreOptions, Explorer, StopReason, DEFAULT_MAX_ITERATIONS};
pub use persist::DEFAULT_PAGES_DIR;
