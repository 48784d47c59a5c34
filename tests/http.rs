use std::io::Write;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use saaf_dashboard::{
    riders::{RiderDirectory, RiderSource},
    router,
};
use serde_json::Value;
use tower::ServiceExt;

const RIDERS_JSON: &str = r#"[
    {"id": "r-2", "name": "Usman Tariq", "email": "usman@example.com", "phone": "+92 300 1111111", "area": "Clifton", "status": "active", "joined": "2023-05-10T08:00:00Z"},
    {"id": "r-1", "name": "Hina Raza", "email": "hina@example.com", "phone": "+92 300 2222222", "area": "DHA", "status": "inactive", "joined": "2022-11-20T08:00:00Z"}
]"#;

fn rider_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(RIDERS_JSON.as_bytes()).unwrap();
    file
}

fn app_for(source: RiderSource) -> Router {
    router::app(RiderDirectory::new(source).unwrap(), None)
}

async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, String) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let body = hyper::body::to_bytes(response.into_body()).await.unwrap();

    (status, headers, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn index_redirects_to_riders() {
    let file = rider_file();
    let (status, headers, _) = get(app_for(RiderSource::File(file.path().into())), "/").await;

    assert_eq!(status, StatusCode::SEE_OTHER);
    assert_eq!(headers[header::LOCATION], "/riders");
}

#[tokio::test]
async fn riders_page_renders_listing() {
    let file = rider_file();
    let (status, headers, body) =
        get(app_for(RiderSource::File(file.path().into())), "/riders").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::CONTENT_TYPE], "text/html; charset=UTF-8");
    assert!(body.starts_with("<!DOCTYPE html><html lang=\"en\">"));
    assert!(body.contains("Riders - Saaf Dashboard"));
    assert!(body.contains(">All Riders</h6>"));
    assert_eq!(body.matches("data-ui=\"card\"").count(), 1);

    let hina = body.find(">Hina Raza<").unwrap();
    let usman = body.find(">Usman Tariq<").unwrap();
    assert!(hina < usman);
}

#[tokio::test]
async fn riders_page_survives_a_broken_source() {
    let (status, _, body) = get(
        app_for(RiderSource::File("/nonexistent/riders.json".into())),
        "/riders",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(">All Riders</h6>"));
    assert!(body.contains("Unable to load riders: failed to read rider file"));
}

#[tokio::test]
async fn api_lists_riders_as_json() {
    let file = rider_file();
    let (status, _, body) = get(app_for(RiderSource::File(file.path().into())), "/api/riders").await;

    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_str(&body).unwrap();
    let riders = json["riders"].as_array().unwrap();
    assert_eq!(riders.len(), 2);
    assert_eq!(riders[0]["id"], "r-1");
    assert_eq!(riders[0]["status"], "inactive");
    assert_eq!(riders[1]["joined"], "2023-05-10T08:00:00Z");
}

#[tokio::test]
async fn api_reports_source_failures_as_bad_gateway() {
    let (status, _, body) = get(
        app_for(RiderSource::File("/nonexistent/riders.json".into())),
        "/api/riders",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);

    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(
        json["error"]["message"],
        "failed to read rider file /nonexistent/riders.json"
    );
    assert!(json["error"]["request_id"].is_string());
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let file = rider_file();
    let source = RiderSource::File(file.path().into());

    let (status, _, body) = get(app_for(source.clone()), "/api/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let json: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["error"]["endpoint"], "/api/nope");

    let (status, headers, body) = get(app_for(source), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(headers[header::CONTENT_TYPE], "text/html; charset=UTF-8");
    assert!(body.contains("nope</code> not found"));
}

#[tokio::test]
async fn responses_carry_request_and_server_headers() {
    let file = rider_file();
    let (status, headers, body) =
        get(app_for(RiderSource::File(file.path().into())), "/api/healthy").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "OK");
    assert!(headers.contains_key("x-request-id"));
    assert!(headers["x-origin-server"]
        .to_str()
        .unwrap()
        .starts_with("saaf-dashboard@"));
    assert_eq!(headers["x-server-environment"], "development");
}

#[tokio::test]
async fn supplied_request_id_is_echoed() {
    let file = rider_file();
    let response = app_for(RiderSource::File(file.path().into()))
        .oneshot(
            Request::builder()
                .uri("/riders")
                .header("x-request-id", "saaf-test-id")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-request-id"], "saaf-test-id");
}

#[tokio::test]
async fn static_files_are_served_from_static_dir() {
    let file = rider_file();
    let static_dir = tempfile::tempdir().unwrap();
    std::fs::write(static_dir.path().join("logo.svg"), "<svg></svg>").unwrap();

    let app = router::app(
        RiderDirectory::new(RiderSource::File(file.path().into())).unwrap(),
        Some(static_dir.path().into()),
    );

    let (status, _, body) = get(app.clone(), "/static/logo.svg").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "<svg></svg>");

    let (status, _, _) = get(app, "/static/missing.svg").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn handler_panics_become_error_pages() {
    let file = rider_file();
    let (status, _, body) = get(app_for(RiderSource::File(file.path().into())), "/api/panic").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("500 | Internal Server Error"));
    assert!(body.contains("Message: manual api panic"));
}
