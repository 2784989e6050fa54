//! Crawler module for page fetching and traversal
//!
//! This module contains the traversal logic, including:
//! - HTTP fetching with fault classification
//! - Directory and listing page parsing
//! - Branch-forking crawl coordination

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::Coordinator;
pub use fetcher::{build_http_client, fetch_page, FetchFault};
pub use parser::{parse_listing, shelter_links, ListingPage};

use crate::config::Config;
use crate::output::RecordSink;
use crate::ScoutError;
use std::sync::Arc;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client
/// 2. Fetch the organization directory and discover shelters
/// 3. Walk every listing branch, paginating as needed
/// 4. Extract and emit one record per reachable profile
///
/// # Arguments
///
/// * `config` - The crawler configuration
/// * `sink` - Receiver for the extracted records
///
/// # Returns
///
/// * `Ok(())` - Crawl completed (partial fetch failures included)
/// * `Err(ScoutError)` - Setup failed before the crawl could start
pub async fn crawl(config: Config, sink: Arc<dyn RecordSink>) -> Result<(), ScoutError> {
    let coordinator = Coordinator::new(config, sink)?;
    coordinator.run().await
}
