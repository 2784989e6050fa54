use chrono::{DateTime, Utc};
use serde::Serialize;

/// One extracted animal profile.
///
/// The key set is fixed: every attribute is always present in the
/// serialized record, with unavailable data carried as the `"NA"` sentinel
/// rather than an omitted key. Records are immutable once built and are
/// handed to the sink the moment they exist.
#[derive(Debug, Clone, Serialize)]
pub struct AnimalRecord {
    /// Source host the profile was scraped from
    pub domain: String,

    /// Capture instant (wall clock at extraction, never parsed from the page)
    pub scraped_at: DateTime<Utc>,

    pub id: String,
    pub name: String,

    /// Absolute photo URL, resolved against the profile page
    pub image: String,

    pub status: String,
    pub urgency: String,
    pub special_case: String,

    /// Animal class (species). `class` is a reserved word in Rust; the
    /// serialized key keeps the original name.
    #[serde(rename = "class")]
    pub animal_class: String,
    pub since: String,
    pub gender: String,
    pub age: String,
    pub birthday: String,
    pub race: String,
    pub size: String,
    pub weight: String,
    pub chip: String,
    pub situation: String,
    pub location: String,

    pub health: String,
    pub description: String,
}
