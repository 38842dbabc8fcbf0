use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{self, InsightQuery};
use crate::dataset::{FilterOptions, PriceBounds, QueryError, QueryExecutor, ResultTable};
use crate::export::{self, ExportError};
use crate::filters::{Choice, DateTarget, FilteredListingQuery, ListingFilter, PriceRange};
use crate::insights::{ChartSeries, ListingDashboard};

/// Filter selections as they arrive from a client. Anything omitted is left unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingFilterRequest {
    #[serde(default)]
    pub cities: Vec<String>,
    #[serde(default)]
    pub property_type: Choice,
    #[serde(default)]
    pub agent: Choice,
    /// Defaults to the cheapest listing in the dataset.
    #[serde(default)]
    pub min_price: Option<i64>,
    /// Defaults to the most expensive listing in the dataset.
    #[serde(default)]
    pub max_price: Option<i64>,
    #[serde(default)]
    pub date_target: DateTarget,
    #[serde(default)]
    pub date_range: Vec<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FilteredListings {
    pub query: FilteredListingQuery,
    pub table: ResultTable,
    pub dashboard: ListingDashboard,
}

#[derive(Debug, Clone, Serialize)]
pub struct InsightResult {
    pub insight: &'static InsightQuery,
    pub table: ResultTable,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartSeries>,
}

/// Error raised by the analytics service.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    #[error("no insight numbered {0}")]
    UnknownInsight(u16),
    #[error("no insight labelled '{0}'")]
    UnknownInsightLabel(String),
    #[error(transparent)]
    Query(#[from] QueryError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error("analytics worker failed: {0}")]
    Worker(String),
}

/// Service composing the filter builder, query catalog, and dataset access.
pub struct AnalyticsService<E> {
    executor: Arc<E>,
}

impl<E> AnalyticsService<E>
where
    E: QueryExecutor + 'static,
{
    pub fn new(executor: Arc<E>) -> Self {
        Self { executor }
    }

    pub fn filter_options(&self) -> Result<FilterOptions, AnalyticsError> {
        Ok(FilterOptions::load(self.executor.as_ref())?)
    }

    /// Read fresh on every call so the defaults track the dataset currently on disk.
    pub fn price_bounds(&self) -> Result<PriceBounds, AnalyticsError> {
        Ok(PriceBounds::load(self.executor.as_ref())?)
    }

    /// Fills an omitted price bound from the dataset extremes.
    pub fn resolve_filter(
        &self,
        request: ListingFilterRequest,
    ) -> Result<ListingFilter, AnalyticsError> {
        let price_range = match (request.min_price, request.max_price) {
            (Some(min), Some(max)) => PriceRange { min, max },
            (min, max) => {
                let bounds = self.price_bounds()?;
                PriceRange {
                    min: min.unwrap_or(bounds.min),
                    max: max.unwrap_or(bounds.max),
                }
            }
        };

        Ok(ListingFilter {
            cities: request.cities,
            property_type: request.property_type,
            agent: request.agent,
            price_range,
            date_target: request.date_target,
            date_range: request.date_range,
        })
    }

    /// Compile the filter, run it, and derive the dashboard aggregates.
    pub fn filtered_listings(
        &self,
        request: ListingFilterRequest,
    ) -> Result<FilteredListings, AnalyticsError> {
        let filter = self.resolve_filter(request)?;
        let query = filter.compile();
        tracing::debug!(
            sql = %query.sql,
            params = query.params.len(),
            "compiled listing filter"
        );

        let table = self.executor.execute(&query.sql, &query.params)?;
        let dashboard = ListingDashboard::from_table(&table)?;

        Ok(FilteredListings {
            query,
            table,
            dashboard,
        })
    }

    pub fn run_insight(&self, number: u16) -> Result<InsightResult, AnalyticsError> {
        let insight = catalog::find(number).ok_or(AnalyticsError::UnknownInsight(number))?;
        let table = self.executor.execute(insight.sql, &[])?;
        let chart = match &insight.chart {
            Some(spec) => ChartSeries::from_table(spec, &table)?,
            None => None,
        };

        Ok(InsightResult {
            insight,
            table,
            chart,
        })
    }

    pub fn export_listings(&self, request: ListingFilterRequest) -> Result<String, AnalyticsError> {
        let listings = self.filtered_listings(request)?;
        Ok(export::to_csv(&listings.table)?)
    }

    pub fn export_insight(&self, number: u16) -> Result<String, AnalyticsError> {
        let result = self.run_insight(number)?;
        Ok(export::to_csv(&result.table)?)
    }
}
