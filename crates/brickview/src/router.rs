use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;

use crate::catalog::{self, InsightQuery};
use crate::dataset::{FilterOptions, QueryExecutor};
use crate::error::AppError;
use crate::export::{INSIGHT_EXPORT_FILENAME, LISTINGS_EXPORT_FILENAME};
use crate::service::{
    AnalyticsError, AnalyticsService, FilteredListings, InsightResult, ListingFilterRequest,
};

/// Router builder exposing the listing explorer and the insight catalog.
pub fn analytics_router<E>(service: Arc<AnalyticsService<E>>) -> Router
where
    E: QueryExecutor + 'static,
{
    Router::new()
        .route("/api/v1/listings/options", get(options_handler::<E>))
        .route("/api/v1/listings/query", post(listings_handler::<E>))
        .route("/api/v1/listings/export", post(listings_export_handler::<E>))
        .route("/api/v1/insights", get(catalog_handler))
        .route("/api/v1/insights/:number", get(insight_handler::<E>))
        .route(
            "/api/v1/insights/:number/export",
            get(insight_export_handler::<E>),
        )
        .with_state(service)
}

#[derive(Debug, Serialize)]
pub(crate) struct CatalogResponse {
    pub(crate) insights: &'static [InsightQuery],
}

/// SQLite work is blocking, so it runs off the async workers.
async fn blocking<E, T, F>(service: Arc<AnalyticsService<E>>, work: F) -> Result<T, AppError>
where
    E: QueryExecutor + 'static,
    T: Send + 'static,
    F: FnOnce(&AnalyticsService<E>) -> Result<T, AnalyticsError> + Send + 'static,
{
    tokio::task::spawn_blocking(move || work(service.as_ref()))
        .await
        .map_err(|err| AnalyticsError::Worker(err.to_string()))?
        .map_err(AppError::from)
}

pub(crate) async fn options_handler<E>(
    State(service): State<Arc<AnalyticsService<E>>>,
) -> Result<Json<FilterOptions>, AppError>
where
    E: QueryExecutor + 'static,
{
    blocking(service, |service| service.filter_options())
        .await
        .map(Json)
}

pub(crate) async fn listings_handler<E>(
    State(service): State<Arc<AnalyticsService<E>>>,
    Json(request): Json<ListingFilterRequest>,
) -> Result<Json<FilteredListings>, AppError>
where
    E: QueryExecutor + 'static,
{
    blocking(service, move |service| service.filtered_listings(request))
        .await
        .map(Json)
}

pub(crate) async fn listings_export_handler<E>(
    State(service): State<Arc<AnalyticsService<E>>>,
    Json(request): Json<ListingFilterRequest>,
) -> Result<Response, AppError>
where
    E: QueryExecutor + 'static,
{
    let csv = blocking(service, move |service| service.export_listings(request)).await?;
    Ok(csv_attachment(LISTINGS_EXPORT_FILENAME, csv))
}

pub(crate) async fn catalog_handler() -> Json<CatalogResponse> {
    Json(CatalogResponse {
        insights: catalog::entries(),
    })
}

pub(crate) async fn insight_handler<E>(
    State(service): State<Arc<AnalyticsService<E>>>,
    Path(number): Path<u16>,
) -> Result<Json<InsightResult>, AppError>
where
    E: QueryExecutor + 'static,
{
    blocking(service, move |service| service.run_insight(number))
        .await
        .map(Json)
}

pub(crate) async fn insight_export_handler<E>(
    State(service): State<Arc<AnalyticsService<E>>>,
    Path(number): Path<u16>,
) -> Result<Response, AppError>
where
    E: QueryExecutor + 'static,
{
    let csv = blocking(service, move |service| service.export_insight(number)).await?;
    Ok(csv_attachment(INSIGHT_EXPORT_FILENAME, csv))
}

fn csv_attachment(filename: &str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}
