use crate::infra::{analytics_service, load_config};
use brickview::catalog::{self, InsightQuery};
use brickview::dataset::ResultTable;
use brickview::error::AppError;
use brickview::export;
use brickview::filters::{Choice, DateTarget};
use brickview::insights::{ChartSeries, ListingDashboard};
use brickview::{AnalyticsError, ListingFilterRequest};
use chrono::NaiveDate;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Args, Debug, Default)]
pub(crate) struct ListingsArgs {
    /// Restrict to a city; repeat for several. Omit for every city.
    #[arg(long = "city")]
    pub(crate) cities: Vec<String>,
    /// Property type to keep, or "All"
    #[arg(long, default_value = "All")]
    pub(crate) property_type: String,
    /// Listing agent to keep, or "All"
    #[arg(long, default_value = "All")]
    pub(crate) agent: String,
    /// Lowest price (defaults to the cheapest listing)
    #[arg(long)]
    pub(crate) min_price: Option<i64>,
    /// Highest price (defaults to the most expensive listing)
    #[arg(long)]
    pub(crate) max_price: Option<i64>,
    /// Date column the --date range applies to: listed or sold
    #[arg(long, default_value = "listed")]
    pub(crate) date_by: DateTarget,
    /// Range bound (YYYY-MM-DD). Pass twice for a range; a single date is ignored.
    #[arg(long = "date", value_parser = crate::infra::parse_date)]
    pub(crate) dates: Vec<NaiveDate>,
    /// Print the compiled statement and its parameters
    #[arg(long)]
    pub(crate) show_sql: bool,
    /// Write the filtered rows to this CSV file
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

impl ListingsArgs {
    fn request(&self) -> ListingFilterRequest {
        ListingFilterRequest {
            cities: self.cities.clone(),
            property_type: Choice::parse(&self.property_type),
            agent: Choice::parse(&self.agent),
            min_price: self.min_price,
            max_price: self.max_price,
            date_target: self.date_by,
            date_range: self.dates.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct InsightRunArgs {
    /// Question number (1-30) or its exact label
    pub(crate) query: String,
    /// Print the SQL behind the question
    #[arg(long)]
    pub(crate) show_sql: bool,
    /// Write the result rows to this CSV file
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) fn run_listings(
    args: ListingsArgs,
    database: Option<PathBuf>,
) -> Result<(), AppError> {
    let config = load_config(database)?;
    let service = analytics_service(config.database.path);
    let listings = service.filtered_listings(args.request())?;

    if args.show_sql {
        println!("SQL: {}", listings.query.sql);
        println!("Params: {}", serde_json::json!(listings.query.params));
    }

    println!("Filtered listings ({} rows)", listings.table.len());
    render_table(&listings.table);
    render_dashboard(&listings.dashboard);

    if let Some(path) = args.csv {
        write_csv(&path, &listings.table)?;
    }
    Ok(())
}

pub(crate) fn run_insight_catalog() {
    println!("Insight catalog");
    for entry in catalog::entries() {
        let chart = entry.chart.map(|spec| spec.kind.label()).unwrap_or("Table");
        println!("- {} [{}]", entry.label, chart);
    }
}

pub(crate) fn run_insight(
    args: InsightRunArgs,
    database: Option<PathBuf>,
) -> Result<(), AppError> {
    let insight = resolve_insight(&args.query)?;
    let config = load_config(database)?;
    let service = analytics_service(config.database.path);
    let result = service.run_insight(insight.number)?;

    println!("{}", insight.label);
    if args.show_sql {
        println!("\n{}", insight.sql);
    }

    println!("\nQuery result ({} rows)", result.table.len());
    render_table(&result.table);
    if let Some(chart) = &result.chart {
        render_chart(chart);
    }

    if let Some(path) = args.csv {
        write_csv(&path, &result.table)?;
    }
    Ok(())
}

pub(crate) fn run_options(database: Option<PathBuf>) -> Result<(), AppError> {
    let config = load_config(database)?;
    let options = analytics_service(config.database.path).filter_options()?;

    println!("Cities: {}", options.cities.join(", "));
    println!("Property types: {}", options.property_types.join(", "));
    println!("Agents: {}", options.agents.join(", "));
    println!(
        "Price range: {} - {}",
        options.price_bounds.min, options.price_bounds.max
    );
    Ok(())
}

fn resolve_insight(query: &str) -> Result<&'static InsightQuery, AnalyticsError> {
    let query = query.trim();
    match query.parse::<u16>() {
        Ok(number) => catalog::find(number).ok_or(AnalyticsError::UnknownInsight(number)),
        Err(_) => catalog::find_by_label(query)
            .ok_or_else(|| AnalyticsError::UnknownInsightLabel(query.to_string())),
    }
}

fn write_csv(path: &Path, table: &ResultTable) -> Result<(), AppError> {
    let body = export::to_csv(table).map_err(AnalyticsError::from)?;
    std::fs::write(path, body)?;
    println!("\nSaved {} rows to {}", table.len(), path.display());
    Ok(())
}

fn render_table(table: &ResultTable) {
    if table.is_empty() {
        println!("No rows matched.");
        return;
    }
    println!("{}", table.columns.join(" | "));
    for row in &table.rows {
        let cells: Vec<String> = row.iter().map(|cell| cell.display()).collect();
        println!("{}", cells.join(" | "));
    }
}

fn render_dashboard(dashboard: &ListingDashboard) {
    if dashboard.has_map() {
        println!(
            "\nActive listings with coordinates: {}",
            dashboard.map_points.len()
        );
    } else {
        println!("\nNo active listings with coordinates to map.");
    }

    if !dashboard.average_price_by_city.is_empty() {
        println!("\nAverage price by city");
        for entry in &dashboard.average_price_by_city {
            println!("- {}: {:.2}", entry.city, entry.average_price);
        }
    }

    if !dashboard.property_type_distribution.is_empty() {
        println!("\nProperty type distribution");
        for entry in &dashboard.property_type_distribution {
            println!(
                "- {}: {} listings ({:.1}%)",
                entry.property_type, entry.listings, entry.share_pct
            );
        }
    }

    if dashboard.monthly_sales.is_empty() {
        println!("\nMonthly sales: none");
    } else {
        println!("\nMonthly sales");
        for entry in &dashboard.monthly_sales {
            println!("- {}: {}", entry.month.format("%Y-%m"), entry.sales);
        }
    }
}

fn render_chart(chart: &ChartSeries) {
    println!("\n{} chart: {} by {}", chart.kind.label(), chart.y, chart.x);
    for point in &chart.points {
        match point.share_pct {
            Some(share) => println!("- {}: {} ({:.1}%)", point.label, point.value, share),
            None => println!("- {}: {}", point.label, point.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_args_become_a_filter_request() {
        let args = ListingsArgs {
            cities: vec!["Austin".to_string()],
            property_type: "All".to_string(),
            agent: "Maya Chen".to_string(),
            max_price: Some(500_000),
            date_by: DateTarget::DateSold,
            ..ListingsArgs::default()
        };
        let request = args.request();

        assert_eq!(request.property_type, Choice::All);
        assert_eq!(request.agent, Choice::Only("Maya Chen".to_string()));
        assert_eq!(request.min_price, None);
        assert_eq!(request.max_price, Some(500_000));
        assert_eq!(request.date_target, DateTarget::DateSold);
    }

    #[test]
    fn insights_resolve_by_number_or_label() {
        assert_eq!(resolve_insight("13").expect("found").number, 13);
        let by_label = resolve_insight("18. Properties Currently Unsold").expect("found");
        assert_eq!(by_label.number, 18);
        assert!(matches!(
            resolve_insight("31"),
            Err(AnalyticsError::UnknownInsight(31))
        ));
        assert!(matches!(
            resolve_insight("Which city is cheapest?"),
            Err(AnalyticsError::UnknownInsightLabel(_))
        ));
    }

    #[test]
    fn csv_export_writes_the_table() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(export::INSIGHT_EXPORT_FILENAME);
        let table = ResultTable::new(vec!["City".to_string()]);

        write_csv(&path, &table).expect("csv written");
        assert_eq!(std::fs::read_to_string(&path).expect("readable"), "City\n");
    }
}
