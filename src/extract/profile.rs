//! Profile page extraction
//!
//! Maps one animal detail page to a flat [`AnimalRecord`]. Extraction never
//! fails: every field lookup that misses degrades to the null sentinel, and
//! a page without the profile container yields an all-sentinel record with
//! only `domain` and `scraped_at` carrying data.

use crate::extract::format::{format_value, RawValue};
use crate::extract::record::AnimalRecord;
use crate::extract::{resolver, selectors};
use crate::url::extract_domain;
use chrono::Utc;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Extracts a normalized record from one profile page.
///
/// All field lookups are scoped to the profile container. `domain` comes
/// from the page URL's host and `scraped_at` is stamped at extraction time.
pub fn extract_profile(html: &str, page_url: &Url) -> AnimalRecord {
    let document = Html::parse_document(html);

    let container = Selector::parse(selectors::PROFILE_CONTAINER)
        .ok()
        .and_then(|selector| document.select(&selector).next());

    let scope = FieldScope { container };

    AnimalRecord {
        domain: format_value(RawValue::from(extract_domain(page_url))),
        scraped_at: Utc::now(),

        id: scope.text(selectors::ID),
        name: scope.text(selectors::NAME),

        image: scope.image(page_url),

        status: scope.text(selectors::STATUS),
        urgency: scope.flag(selectors::URGENT_MARKER),
        special_case: scope.flag(selectors::SPECIAL_CASE_MARKER),

        animal_class: scope.text(selectors::CLASS),
        since: scope.text(selectors::SINCE),
        gender: scope.text(selectors::GENDER),
        age: scope.text(selectors::AGE),
        birthday: scope.text(selectors::BIRTHDAY),
        race: scope.text(selectors::RACE),
        size: scope.text(selectors::SIZE),
        weight: scope.text(selectors::WEIGHT),
        chip: scope.text(selectors::CHIP),
        situation: scope.text(selectors::SITUATION),
        location: scope.text(selectors::LOCATION),

        health: scope.text(selectors::HEALTH),
        description: scope.text(selectors::DESCRIPTION),
    }
}

/// Field lookups scoped to the profile container.
///
/// A missing container means every lookup resolves to Absent.
struct FieldScope<'a> {
    container: Option<ElementRef<'a>>,
}

impl FieldScope<'_> {
    fn text(&self, candidates: &[&str]) -> String {
        let raw = self
            .container
            .and_then(|scope| resolver::first_text(scope, candidates));
        format_value(RawValue::from(raw))
    }

    fn flag(&self, marker: &str) -> String {
        let present = self
            .container
            .map(|scope| resolver::marker_present(scope, marker))
            .unwrap_or(false);
        format_value(RawValue::Flag(present))
    }

    fn image(&self, page_url: &Url) -> String {
        let resolved = self
            .container
            .and_then(|scope| resolver::first_attr(scope, selectors::IMAGE, "src"))
            .and_then(|src| page_url.join(src.trim()).ok())
            .map(|url| url.to_string());
        format_value(RawValue::from(resolved))
    }
}
