//! Page-type parsers for the traversal
//!
//! Two page shapes matter to the controller: the organization directory
//! (shelter links) and the listing index (profile links plus the
//! pagination anchor). Profile pages are handled by the extract module.

use crate::url::resolve_href;
use scraper::{Html, Selector};
use url::Url;

/// Anchor text marking the "next page" link in the paginator.
const NEXT_PAGE_GLYPH: &str = "»";

/// Parse result of one listing page.
#[derive(Debug, Clone)]
pub struct ListingPage {
    /// Absolute URLs of the full-profile pages found on this page
    pub profiles: Vec<Url>,

    /// Absolute URL of the next listing page, if the paginator has one
    pub next: Option<Url>,
}

/// Extracts the active-shelter links from the organization directory.
///
/// Active shelters live in the first `ul#protes` list under
/// `div#contenidos`; anything outside that list is ignored. Relative hrefs
/// are resolved against the directory URL.
pub fn shelter_links(html: &str, base_url: &Url) -> Vec<Url> {
    let document = Html::parse_document(html);

    let list_selector = match Selector::parse("div#contenidos ul#protes") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };
    let anchor_selector = match Selector::parse("li a[href]") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };

    let list = match document.select(&list_selector).next() {
        Some(list) => list,
        None => return Vec::new(),
    };

    list.select(&anchor_selector)
        .filter_map(|anchor| anchor.value().attr("href"))
        .filter_map(|href| resolve_href(base_url, href))
        .collect()
}

/// Parses one listing page into its profile links and pagination state.
///
/// Each `div.cuadro_listado` entry contributes its "read full profile"
/// link; entries without one are skipped.
pub fn parse_listing(html: &str, base_url: &Url) -> ListingPage {
    let document = Html::parse_document(html);

    let mut profiles = Vec::new();
    if let (Ok(entry_selector), Ok(link_selector)) = (
        Selector::parse("div.cuadro_listado"),
        Selector::parse("p.leer_completo a[href]"),
    ) {
        for entry in document.select(&entry_selector) {
            let href = entry
                .select(&link_selector)
                .next()
                .and_then(|anchor| anchor.value().attr("href"));

            if let Some(url) = href.and_then(|href| resolve_href(base_url, href)) {
                profiles.push(url);
            }
        }
    }

    ListingPage {
        profiles,
        next: next_page(&document, base_url),
    }
}

/// Finds the pagination anchor: the `»` glyph inside the paginator block.
fn next_page(document: &Html, base_url: &Url) -> Option<Url> {
    let paginator_selector = Selector::parse("div.contNavPaginado").ok()?;
    let anchor_selector = Selector::parse("a[href]").ok()?;

    let paginator = document.select(&paginator_selector).next()?;

    paginator
        .select(&anchor_selector)
        .find(|anchor| anchor.text().collect::<String>().trim() == NEXT_PAGE_GLYPH)
        .and_then(|anchor| anchor.value().attr("href"))
        .and_then(|href| resolve_href(base_url, href))
}
