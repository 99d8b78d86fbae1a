use axum::{Json, Router, http::StatusCode, routing::get};
use folio_client::ApiClient;
use folio_core::{ChangeFreq, format_timestamp};
use folio_generator::{SitemapFormat, build_sitemap_urls, render, static_routes};
use serde_json::json;

async fn spawn_api(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api", addr)
}

fn client(base: &str) -> ApiClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    ApiClient::with_client(http, base)
}

#[tokio::test]
async fn sitemap_includes_fetched_article() {
    let app = Router::new().route(
        "/api/articles",
        get(|| async { Json(json!([{"id": 5, "created": "2025-02-01T00:00:00Z"}])) }),
    );
    let base = spawn_api(app).await;

    let urls = build_sitemap_urls(&client(&base)).await;

    assert_eq!(urls.len(), 3);
    assert_eq!(urls[0].loc, "/");
    assert_eq!(urls[1].loc, "/articles");
    assert_eq!(urls[2].loc, "/articles/5");
    assert_eq!(urls[2].changefreq, ChangeFreq::Weekly);
    assert_eq!(urls[2].priority, 0.8);
    assert_eq!(
        urls[2].lastmod.as_ref().map(format_timestamp).as_deref(),
        Some("2025-02-01T00:00:00.000Z")
    );
}

#[tokio::test]
async fn sitemap_degrades_on_server_error() {
    let app = Router::new().route(
        "/api/articles",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
    );
    let base = spawn_api(app).await;

    let urls = build_sitemap_urls(&client(&base)).await;
    assert_eq!(urls, static_routes());
}

#[tokio::test]
async fn sitemap_degrades_when_api_unreachable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let urls = build_sitemap_urls(&client(&format!("http://{}/api", addr))).await;
    assert_eq!(urls, static_routes());
}

#[tokio::test]
async fn sitemap_reads_created_without_offset_as_utc() {
    let app = Router::new().route(
        "/api/articles",
        get(|| async { Json(json!([{"id": 5, "created": "2025-02-01T00:00:00"}, {"id": 6}])) }),
    );
    let base = spawn_api(app).await;

    let urls = build_sitemap_urls(&client(&base)).await;

    let locs: Vec<&str> = urls.iter().map(|u| u.loc.as_str()).collect();
    assert_eq!(locs, vec!["/", "/articles", "/articles/5", "/articles/6"]);
    assert_eq!(
        urls[2].lastmod.as_ref().map(format_timestamp).as_deref(),
        Some("2025-02-01T00:00:00.000Z")
    );
    assert!(urls[3].lastmod.is_none());
}

#[tokio::test]
async fn sitemap_stops_at_bad_timestamp() {
    let app = Router::new().route(
        "/api/articles",
        get(|| async {
            Json(json!([
                {"id": 1, "created": "2025-02-01T00:00:00Z"},
                {"id": 2, "created": "not a date"}
            ]))
        }),
    );
    let base = spawn_api(app).await;

    let urls = build_sitemap_urls(&client(&base)).await;

    let locs: Vec<&str> = urls.iter().map(|u| u.loc.as_str()).collect();
    assert_eq!(locs, vec!["/", "/articles", "/articles/1"]);
}

#[tokio::test]
async fn rendered_xml_uses_site_url() {
    let app = Router::new().route(
        "/api/articles",
        get(|| async { Json(json!([{"id": 12, "title": "Twelve"}])) }),
    );
    let base = spawn_api(app).await;

    let urls = build_sitemap_urls(&client(&base)).await;
    let xml = render(&urls, "https://site.com", SitemapFormat::Xml).unwrap();

    assert!(xml.contains("<loc>https://site.com/</loc>"));
    assert!(xml.contains("<loc>https://site.com/articles</loc>"));
    assert!(xml.contains("<loc>https://site.com/articles/12</loc>"));
    assert_eq!(xml.matches("<lastmod>").count(), 0);
}
