//! In-memory crawl counters

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters shared by all traversal branches.
///
/// The crawl has no global failure mode, so these are the aggregate signal
/// an operator gets: how much was discovered and how much fell to fetch
/// faults.
#[derive(Debug, Default)]
pub struct CrawlStats {
    shelters: AtomicU64,
    listing_pages: AtomicU64,
    profiles: AtomicU64,
    fetch_faults: AtomicU64,
}

impl CrawlStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_shelters(&self, count: u64) {
        self.shelters.fetch_add(count, Ordering::Relaxed);
    }

    pub fn record_listing_page(&self) {
        self.listing_pages.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_profile(&self) {
        self.profiles.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_fault(&self) {
        self.fetch_faults.fetch_add(1, Ordering::Relaxed);
    }

    pub fn shelters(&self) -> u64 {
        self.shelters.load(Ordering::Relaxed)
    }

    pub fn listing_pages(&self) -> u64 {
        self.listing_pages.load(Ordering::Relaxed)
    }

    pub fn profiles(&self) -> u64 {
        self.profiles.load(Ordering::Relaxed)
    }

    pub fn fetch_faults(&self) -> u64 {
        self.fetch_faults.load(Ordering::Relaxed)
    }

    /// Logs the end-of-run summary line.
    pub fn log_summary(&self) {
        tracing::info!(
            "Crawl finished: {} shelters, {} listing pages, {} profiles extracted, {} fetch faults",
            self.shelters(),
            self.listing_pages(),
            self.profiles(),
            self.fetch_faults()
        );
    }
}
