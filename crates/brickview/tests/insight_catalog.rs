mod support;

use brickview::catalog::{self, ChartKind};
use brickview::dataset::Cell;
use brickview::AnalyticsService;
use std::sync::Arc;

#[test]
fn every_catalog_query_runs_against_the_schema() {
    let (_dir, dataset) = support::seeded_dataset();
    let service = AnalyticsService::new(Arc::new(dataset));

    for entry in catalog::entries() {
        let result = service
            .run_insight(entry.number)
            .unwrap_or_else(|err| panic!("insight {} failed: {err}", entry.number));

        match entry.chart {
            Some(spec) => {
                assert!(!result.table.is_empty(), "insight {} has rows", entry.number);
                let chart = result
                    .chart
                    .unwrap_or_else(|| panic!("insight {} should chart", entry.number));
                assert_eq!(chart.kind, spec.kind);
            }
            None => assert!(result.chart.is_none()),
        }
    }
}

#[test]
fn unsold_listings_insight_uses_the_outer_join() {
    let (_dir, dataset) = support::seeded_dataset();
    let service = AnalyticsService::new(Arc::new(dataset));
    let result = service.run_insight(18).expect("insight runs");

    let mut ids: Vec<i64> = result
        .table
        .column("Listing_ID")
        .expect("listing ids")
        .filter_map(Cell::as_i64)
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 5, 6]);
}

#[test]
fn share_sold_above_listing_price_is_a_percentage() {
    let (_dir, dataset) = support::seeded_dataset();
    let service = AnalyticsService::new(Arc::new(dataset));
    let result = service.run_insight(13).expect("insight runs");

    let percent = result.table.rows[0][0].as_f64().expect("numeric percent");
    assert!((percent - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn price_buckets_chart_as_a_pie() {
    let (_dir, dataset) = support::seeded_dataset();
    let service = AnalyticsService::new(Arc::new(dataset));
    let result = service.run_insight(10).expect("insight runs");

    let chart = result.chart.expect("pie chart");
    assert_eq!(chart.kind, ChartKind::Pie);
    let slices: Vec<(&str, f64)> = chart
        .points
        .iter()
        .map(|point| (point.label.as_str(), point.value))
        .collect();
    assert_eq!(slices, vec![("5L - 10L", 2.0), ("Below 5L", 4.0)]);
    let total_share: f64 = chart.points.iter().filter_map(|p| p.share_pct).sum();
    assert!((total_share - 100.0).abs() < 1e-9);
}

#[test]
fn insight_export_includes_header_and_rows() {
    let (_dir, dataset) = support::seeded_dataset();
    let service = AnalyticsService::new(Arc::new(dataset));
    let csv = service.export_insight(29).expect("export renders");

    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("payment_mode,usage_count"));
    assert_eq!(lines.next(), Some("Bank Transfer,2"));
    assert_eq!(lines.next(), Some("Cash,1"));
    assert_eq!(lines.next(), None);
}
