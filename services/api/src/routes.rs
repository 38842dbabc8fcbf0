use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Serialize)]
pub(crate) struct AboutResponse {
    pub(crate) name: &'static str,
    pub(crate) tagline: &'static str,
    pub(crate) overview: &'static str,
    pub(crate) use_cases: &'static [&'static str],
    pub(crate) objectives: &'static [&'static str],
    pub(crate) technologies: &'static [&'static str],
}

const ABOUT: AboutResponse = AboutResponse {
    name: "BrickView",
    tagline: "Real Estate Analytics & Insights Platform",
    overview: "Properties are listed, sold, and evaluated every day, yet buyers, sellers, and \
               agents rarely have accessible tools to follow trends, pricing, and sales \
               performance. BrickView answers those questions from a relational dataset of \
               listings, agents, sales, buyers, and property attributes.",
    use_cases: &[
        "Buyer & Investor Insights",
        "Agent Performance Tracking",
        "Market & Pricing Trends",
    ],
    objectives: &[
        "Analyze property listings, agent performance, and sales patterns",
        "Provide insights into pricing, time on market, and property types",
        "Enable filtering by location, property type, price, and sales agent",
        "Serve map and chart data for visual exploration",
    ],
    technologies: &["Rust", "SQL (SQLite)", "axum", "rusqlite"],
};

/// Operational and informational endpoints layered over the analytics router.
pub(crate) fn with_service_routes(router: Router) -> Router {
    router
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/about", get(about_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn about_endpoint() -> Json<AboutResponse> {
    Json(ABOUT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::analytics_service;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use brickview::analytics_router;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    const FIXTURE: &str = "
        CREATE TABLE agents (Agent_ID INTEGER PRIMARY KEY, Name TEXT);
        CREATE TABLE listings (
            Listing_ID INTEGER PRIMARY KEY, City TEXT, Property_Type TEXT, Price INTEGER,
            Sqft INTEGER, Date_Listed TEXT, Agent_ID INTEGER, Latitude REAL, Longitude REAL
        );
        CREATE TABLE sales (
            Listing_ID INTEGER PRIMARY KEY, Sale_Price INTEGER, Date_Sold TEXT,
            Days_on_Market INTEGER
        );
        INSERT INTO agents VALUES (1, 'Maya Chen');
        INSERT INTO listings VALUES
            (1, 'Austin', 'Condo', 250000, 900, '2024-01-05', 1, 30.26, -97.74),
            (2, 'Denver', 'House', 640000, 2100, '2024-02-11', 1, 39.73, -104.99);
        INSERT INTO sales VALUES (2, 655000, '2024-03-02', 20);
    ";

    fn app(ready: bool) -> (tempfile::TempDir, Router) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("estate.sqlite");
        rusqlite::Connection::open(&path)
            .and_then(|conn| conn.execute_batch(FIXTURE))
            .expect("fixture database");

        let state = AppState {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        state.readiness.store(ready, Ordering::Release);

        let router = with_service_routes(analytics_router(Arc::new(analytics_service(path))))
            .layer(Extension(state));
        (dir, router)
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).expect("request builds"))
            .await
            .expect("router responds");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn health_is_always_ok() {
        let (_dir, router) = app(false);
        let (status, body) = get_json(router, "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_reflects_the_startup_flag() {
        let (_dir, router) = app(false);
        let (status, body) = get_json(router, "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "initializing");

        let (_dir, router) = app(true);
        let (status, body) = get_json(router, "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn about_describes_the_project() {
        let (_dir, router) = app(true);
        let (status, body) = get_json(router, "/api/v1/about").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "BrickView");
        assert_eq!(body["objectives"].as_array().map(Vec::len), Some(4));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn analytics_routes_are_mounted_alongside() {
        let (_dir, router) = app(true);
        let (status, body) = get_json(router, "/api/v1/listings/options").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["agents"], serde_json::json!(["Maya Chen"]));
        assert_eq!(body["price_bounds"]["min"], 250000);
        assert_eq!(body["price_bounds"]["max"], 640000);
    }

    #[tokio::test]
    async fn metrics_render_as_prometheus_text() {
        let (_dir, router) = app(true);
        let response = router
            .oneshot(Request::get("/metrics").body(Body::empty()).expect("request builds"))
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; version=0.0.4"
        );
    }
}
