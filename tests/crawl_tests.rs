//! End-to-end traversal tests
//!
//! These tests use wiremock to stand in for the organization directory and
//! the shelter sub-sites, and drive the full traversal cycle: directory →
//! listing walk (with pagination) → profile extraction → record sink.

use shelter_scout::config::{Config, CrawlerConfig, OutputConfig, UserAgentConfig};
use shelter_scout::crawler::Coordinator;
use shelter_scout::output::{OutputResult, RecordSink};
use shelter_scout::AnimalRecord;
use std::sync::{Arc, Mutex};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Sink collecting records in memory for assertions.
#[derive(Default)]
struct CollectingSink {
    records: Mutex<Vec<AnimalRecord>>,
}

impl CollectingSink {
    fn take(&self) -> Vec<AnimalRecord> {
        self.records.lock().unwrap().clone()
    }
}

impl RecordSink for CollectingSink {
    fn emit(&self, record: &AnimalRecord) -> OutputResult<()> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Creates a test configuration pointed at the mock directory URL
fn create_test_config(directory_url: &str) -> Config {
    Config {
        crawler: CrawlerConfig {
            directory_url: directory_url.to_string(),
            max_concurrent_fetches: 4,
            request_timeout_secs: 5,
            connect_timeout_secs: 2,
        },
        user_agent: UserAgentConfig {
            crawler_name: "TestScout".to_string(),
            crawler_version: "1.0.0".to_string(),
            contact_url: "https://example.com/contact".to_string(),
            contact_email: "test@example.com".to_string(),
        },
        output: OutputConfig {
            records_path: "-".to_string(),
        },
    }
}

fn directory_page(shelter_urls: &[String]) -> String {
    let items: String = shelter_urls
        .iter()
        .map(|url| format!(r#"<li><a href="{}">Refugio</a></li>"#, url))
        .collect();

    format!(
        r#"<html><body><div id="contenidos">
        <ul id="protes">{}</ul>
        </div></body></html>"#,
        items
    )
}

fn listing_page(profile_hrefs: &[&str], next_href: Option<&str>) -> String {
    let entries: String = profile_hrefs
        .iter()
        .map(|href| {
            format!(
                r#"<div class="cuadro_listado">
                <p class="leer_completo"><a href="{}">Leer ficha completa</a></p>
                </div>"#,
                href
            )
        })
        .collect();

    let paginator = match next_href {
        Some(href) => format!(
            r#"<div class="contNavPaginado"><a href="{}">»</a></div>"#,
            href
        ),
        None => String::new(),
    };

    format!("<html><body>{}{}</body></html>", entries, paginator)
}

fn profile_page(id: &str, name: &str, urgent: bool) -> String {
    let urgent_marker = if urgent {
        r#"<strong class="urgente"><span></span></strong>"#
    } else {
        ""
    };

    format!(
        r#"<html><body><div class="ficha_animal">
        <strong class="ficha_id"><span>{id}</span></strong>
        <strong class="ficha_nombre"><span>{name}</span></strong>
        <strong class="estado"><span>En adopcion</span></strong>
        {urgent_marker}
        <strong class="ficha_tipo"><span>Perro</span></strong>
        <strong class="ficha_raza"><span>  Labrador
	mestizo  </span></strong>
        <div id="contenedor_foto"><img src="/fotos/{id}.jpg"></div>
        <div class="ficha_descripcion"><div>Busca casa.</div></div>
        </div></body></html>"#
    )
}

async fn mount_html(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_traversal_with_pagination() {
    let server = MockServer::start().await;
    let base = server.uri();

    // Directory lists one shelter; its listado paginates across two pages
    mount_html(
        &server,
        "/quien-usa",
        directory_page(&[format!("{}/refugio-uno", base)]),
    )
    .await;

    mount_html(
        &server,
        "/refugio-uno/listado",
        listing_page(
            &["/ficha/1", "/ficha/2"],
            Some("/refugio-uno/listado-2"),
        ),
    )
    .await;

    mount_html(
        &server,
        "/refugio-uno/listado-2",
        listing_page(&["/ficha/3"], None),
    )
    .await;

    mount_html(&server, "/ficha/1", profile_page("1", "Luna", true)).await;
    mount_html(&server, "/ficha/2", profile_page("2", "Rocky", false)).await;
    mount_html(&server, "/ficha/3", profile_page("3", "Nala", false)).await;

    // avisos and particulares are not mounted: they 404 and the branches
    // terminate silently

    let sink = Arc::new(CollectingSink::default());
    let config = create_test_config(&format!("{}/quien-usa", base));

    let coordinator = Coordinator::new(config, sink.clone()).expect("failed to create coordinator");
    let stats = coordinator.stats();
    coordinator.run().await.expect("crawl failed");

    let mut records = sink.take();
    assert_eq!(records.len(), 3, "expected one record per profile");

    records.sort_by(|a, b| a.id.cmp(&b.id));

    assert_eq!(records[0].name, "Luna");
    assert_eq!(records[0].urgency, "SI");
    assert_eq!(records[1].name, "Rocky");
    assert_eq!(records[1].urgency, "NO");
    assert_eq!(records[2].name, "Nala");

    // Every record saw the normalization pass and the URL resolution
    for record in &records {
        assert_eq!(record.race, "Labrador mestizo");
        assert_eq!(record.special_case, "NO");
        assert!(record.image.starts_with(&base));
        assert_eq!(record.status, "En adopcion");
    }

    assert_eq!(stats.shelters(), 1);
    assert_eq!(stats.listing_pages(), 2);
    assert_eq!(stats.profiles(), 3);
    // avisos + particulares 404
    assert_eq!(stats.fetch_faults(), 2);
}

#[tokio::test]
async fn test_fault_on_one_shelter_does_not_affect_siblings() {
    let server = MockServer::start().await;
    let base = server.uri();

    // Two shelters; refugio-roto has no listing pages at all (every path
    // 404s), refugio-sano works normally
    mount_html(
        &server,
        "/quien-usa",
        directory_page(&[
            format!("{}/refugio-roto", base),
            format!("{}/refugio-sano", base),
        ]),
    )
    .await;

    mount_html(
        &server,
        "/refugio-sano/listado",
        listing_page(&["/ficha/9"], None),
    )
    .await;

    mount_html(&server, "/ficha/9", profile_page("9", "Kira", false)).await;

    let sink = Arc::new(CollectingSink::default());
    let config = create_test_config(&format!("{}/quien-usa", base));

    let coordinator = Coordinator::new(config, sink.clone()).expect("failed to create coordinator");
    coordinator.run().await.expect("crawl failed");

    let records = sink.take();
    assert_eq!(records.len(), 1, "healthy shelter still yields its record");
    assert_eq!(records[0].name, "Kira");
    assert_eq!(records[0].id, "9");
}

#[tokio::test]
async fn test_unreachable_directory_yields_empty_run() {
    // Nothing mounted: the directory fetch 404s and the crawl completes
    // with zero records instead of failing
    let server = MockServer::start().await;

    let sink = Arc::new(CollectingSink::default());
    let config = create_test_config(&format!("{}/quien-usa", server.uri()));

    let coordinator = Coordinator::new(config, sink.clone()).expect("failed to create coordinator");
    let stats = coordinator.stats();
    let result = coordinator.run().await;

    assert!(result.is_ok());
    assert!(sink.take().is_empty());
    assert_eq!(stats.fetch_faults(), 1);
    assert_eq!(stats.shelters(), 0);
}

#[tokio::test]
async fn test_listing_entries_and_pagination_dispatch() {
    // 3 profile entries plus a next link: exactly 3 profile fetches and
    // exactly 1 extra listing fetch must happen
    let server = MockServer::start().await;
    let base = server.uri();

    mount_html(
        &server,
        "/quien-usa",
        directory_page(&[format!("{}/refugio", base)]),
    )
    .await;

    mount_html(
        &server,
        "/refugio/listado",
        listing_page(
            &["/ficha/1", "/ficha/2", "/ficha/3"],
            Some("/refugio/listado-2"),
        ),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/refugio/listado-2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_page(&[], None)))
        .expect(1)
        .mount(&server)
        .await;

    for id in ["1", "2", "3"] {
        Mock::given(method("GET"))
            .and(path(format!("/ficha/{}", id)))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(profile_page(id, "Canela", false)),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let sink = Arc::new(CollectingSink::default());
    let config = create_test_config(&format!("{}/quien-usa", base));

    let coordinator = Coordinator::new(config, sink.clone()).expect("failed to create coordinator");
    coordinator.run().await.expect("crawl failed");

    // Wiremock verifies the expect(1) counts when the server drops
    assert_eq!(sink.take().len(), 3);
}
