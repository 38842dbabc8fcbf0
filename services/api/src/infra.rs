use brickview::config::AppConfig;
use brickview::dataset::SqliteDataset;
use brickview::error::AppError;
use brickview::AnalyticsService;
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Environment configuration with the `--database` flag applied on top.
pub(crate) fn load_config(database: Option<PathBuf>) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load()?;
    if let Some(path) = database {
        config.database.path = path;
    }
    Ok(config)
}

pub(crate) fn analytics_service(
    database: impl Into<PathBuf>,
) -> AnalyticsService<SqliteDataset> {
    AnalyticsService::new(Arc::new(SqliteDataset::new(database)))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_trims_and_reports_bad_input() {
        assert_eq!(
            parse_date(" 2024-03-31 "),
            Ok(NaiveDate::from_ymd_opt(2024, 3, 31).expect("valid date"))
        );
        let err = parse_date("31-03-2024").expect_err("wrong order");
        assert!(err.contains("YYYY-MM-DD"));
    }
}
