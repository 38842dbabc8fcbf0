//! Chart-ready views derived from query results.

mod dashboard;
mod series;

pub use dashboard::{CityPrice, ListingDashboard, MapPoint, MonthlySales, PropertyTypeShare};
pub use series::{ChartPoint, ChartSeries};

use crate::dataset::{QueryError, ResultTable};

fn required_column(table: &ResultTable, name: &str) -> Result<usize, QueryError> {
    table
        .column_index(name)
        .ok_or_else(|| QueryError::MissingColumn(name.to_string()))
}

fn share_pct(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        part / total * 100.0
    }
}
