//! Traversal coordinator - main crawl orchestration logic
//!
//! This module drives the three-stage traversal: the organization directory
//! is fetched once, every (shelter, listing-path) pair becomes an
//! independent listing branch, each listing branch walks its pagination
//! chain in order, and every discovered profile becomes a terminal branch
//! that extracts and emits one record.
//!
//! Branches are a forest: a fault terminates its own branch with one log
//! line and never affects a sibling.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_page, FetchFault};
use crate::crawler::parser::{parse_listing, shelter_links};
use crate::extract::extract_profile;
use crate::output::{CrawlStats, RecordSink};
use crate::url::listing_urls;
use crate::ScoutError;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use url::Url;

/// Shared context cloned into every traversal branch.
///
/// Everything here is either immutable or internally synchronized; branches
/// share no traversal state.
#[derive(Clone)]
struct BranchContext {
    client: Client,
    sink: Arc<dyn RecordSink>,
    stats: Arc<CrawlStats>,
    limiter: Arc<Semaphore>,
}

impl BranchContext {
    /// Fetches one page under the global concurrency bound.
    async fn fetch(&self, url: &Url) -> Result<String, FetchFault> {
        // The permit is held for the duration of the request; the
        // semaphore is never closed, so acquire cannot fail.
        let _permit = self.limiter.acquire().await;
        fetch_page(&self.client, url).await
    }

    /// Logs a fault and counts it; the caller terminates the branch.
    fn fault(&self, fault: FetchFault) {
        fault.log();
        self.stats.record_fault();
    }
}

/// Main crawler coordinator structure
pub struct Coordinator {
    config: Config,
    context: BranchContext,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration (already validated)
    /// * `sink` - Receiver for every extracted record
    pub fn new(config: Config, sink: Arc<dyn RecordSink>) -> Result<Self, ScoutError> {
        let client = build_http_client(
            &config.user_agent,
            Duration::from_secs(config.crawler.request_timeout_secs),
            Duration::from_secs(config.crawler.connect_timeout_secs),
        )?;

        let limiter = Arc::new(Semaphore::new(config.crawler.max_concurrent_fetches as usize));

        Ok(Self {
            config,
            context: BranchContext {
                client,
                sink,
                stats: Arc::new(CrawlStats::new()),
                limiter,
            },
        })
    }

    /// Crawl statistics, shared with all branches.
    pub fn stats(&self) -> Arc<CrawlStats> {
        Arc::clone(&self.context.stats)
    }

    /// Runs the crawl to completion.
    ///
    /// Fetch faults never abort the run: a failed directory fetch just
    /// yields zero records, and any branch fault is contained to that
    /// branch. The crawl as a whole always completes.
    pub async fn run(&self) -> Result<(), ScoutError> {
        let directory_url = Url::parse(&self.config.crawler.directory_url)?;
        tracing::info!("Fetching shelter directory: {}", directory_url);

        let body = match self.context.fetch(&directory_url).await {
            Ok(body) => body,
            Err(fault) => {
                self.context.fault(fault);
                self.context.stats.log_summary();
                return Ok(());
            }
        };

        let shelters = shelter_links(&body, &directory_url);
        self.context.stats.record_shelters(shelters.len() as u64);
        tracing::info!("Discovered {} active shelters", shelters.len());

        let mut branches = JoinSet::new();
        for shelter in &shelters {
            for listing_url in listing_urls(shelter) {
                branches.spawn(walk_listing(self.context.clone(), listing_url));
            }
        }

        while let Some(joined) = branches.join_next().await {
            if let Err(error) = joined {
                // A panicked branch must not take down its siblings
                tracing::error!("Traversal branch failed: {}", error);
            }
        }

        self.context.stats.log_summary();
        Ok(())
    }
}

/// Walks one listing branch: page by page along its pagination chain,
/// spawning a profile branch per discovered animal.
///
/// Page N+1 is only requested after page N's links are extracted, so
/// ordering is preserved along the chain; profile fetches run concurrently
/// with the walk and with every sibling branch.
async fn walk_listing(context: BranchContext, start: Url) {
    let mut profiles = JoinSet::new();
    let mut current = Some(start);

    while let Some(url) = current.take() {
        let body = match context.fetch(&url).await {
            Ok(body) => body,
            Err(fault) => {
                context.fault(fault);
                break;
            }
        };

        context.stats.record_listing_page();

        let page = parse_listing(&body, &url);
        tracing::debug!(
            "Listing {}: {} profiles, more pages: {}",
            url,
            page.profiles.len(),
            page.next.is_some()
        );

        for profile_url in page.profiles {
            profiles.spawn(scrape_profile(context.clone(), profile_url));
        }

        current = page.next;
    }

    // The branch owns its profiles; wait for them before finishing
    while let Some(joined) = profiles.join_next().await {
        if let Err(error) = joined {
            tracing::error!("Profile branch failed: {}", error);
        }
    }
}

/// Terminal branch: fetch one profile page, extract, emit.
async fn scrape_profile(context: BranchContext, url: Url) {
    let body = match context.fetch(&url).await {
        Ok(body) => body,
        Err(fault) => {
            context.fault(fault);
            return;
        }
    };

    let record = extract_profile(&body, &url);
    context.stats.record_profile();

    if let Err(error) = context.sink.emit(&record) {
        tracing::error!("Failed to emit record for {}: {}", url, error);
    }
}
