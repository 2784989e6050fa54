//! Output module for Shelter-Scout
//!
//! The crawler stores nothing itself: every extracted record is handed to
//! a [`RecordSink`] the moment it exists. This module defines the sink
//! seam, the shipped JSON Lines implementation, and the in-memory crawl
//! counters.

mod jsonl;
mod stats;
mod traits;

pub use jsonl::JsonLinesSink;
pub use stats::CrawlStats;
pub use traits::{OutputError, OutputResult, RecordSink};
