use super::{required_column, share_pct};
use crate::dataset::{Cell, QueryError, ResultTable};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapPoint {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityPrice {
    pub city: String,
    pub average_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyTypeShare {
    pub property_type: String,
    pub listings: usize,
    pub share_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySales {
    pub month: NaiveDate,
    pub sales: usize,
}

/// Aggregates drawn next to the filtered listings table.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListingDashboard {
    /// Active listings only: no sale date and both coordinates known.
    pub map_points: Vec<MapPoint>,
    pub average_price_by_city: Vec<CityPrice>,
    pub property_type_distribution: Vec<PropertyTypeShare>,
    pub monthly_sales: Vec<MonthlySales>,
}

struct ListingColumns {
    city: usize,
    property_type: usize,
    price: usize,
    date_sold: usize,
    latitude: usize,
    longitude: usize,
}

impl ListingColumns {
    fn locate(table: &ResultTable) -> Result<Self, QueryError> {
        Ok(Self {
            city: required_column(table, "City")?,
            property_type: required_column(table, "Property_Type")?,
            price: required_column(table, "Price")?,
            date_sold: required_column(table, "Date_Sold")?,
            latitude: required_column(table, "latitude")?,
            longitude: required_column(table, "longitude")?,
        })
    }
}

impl ListingDashboard {
    /// Expects the columns of the filtered listings statement.
    pub fn from_table(table: &ResultTable) -> Result<Self, QueryError> {
        let columns = ListingColumns::locate(table)?;

        Ok(Self {
            map_points: map_points(table, &columns),
            average_price_by_city: average_price_by_city(table, &columns),
            property_type_distribution: property_type_distribution(table, &columns),
            monthly_sales: monthly_sales(table, &columns),
        })
    }

    pub fn has_map(&self) -> bool {
        !self.map_points.is_empty()
    }
}

fn map_points(table: &ResultTable, columns: &ListingColumns) -> Vec<MapPoint> {
    table
        .rows
        .iter()
        .filter(|row| row[columns.date_sold].is_null())
        .filter_map(|row| {
            Some(MapPoint {
                latitude: row[columns.latitude].as_f64()?,
                longitude: row[columns.longitude].as_f64()?,
            })
        })
        .collect()
}

fn average_price_by_city(table: &ResultTable, columns: &ListingColumns) -> Vec<CityPrice> {
    let mut totals: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for row in &table.rows {
        let (Some(city), Some(price)) = (label(&row[columns.city]), row[columns.price].as_f64())
        else {
            continue;
        };
        let entry = totals.entry(city).or_insert((0.0, 0));
        entry.0 += price;
        entry.1 += 1;
    }

    totals
        .into_iter()
        .map(|(city, (sum, count))| CityPrice {
            city,
            average_price: sum / count as f64,
        })
        .collect()
}

fn property_type_distribution(
    table: &ResultTable,
    columns: &ListingColumns,
) -> Vec<PropertyTypeShare> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for row in &table.rows {
        if let Some(property_type) = label(&row[columns.property_type]) {
            *counts.entry(property_type).or_default() += 1;
        }
    }

    let total: usize = counts.values().sum();
    let mut shares: Vec<PropertyTypeShare> = counts
        .into_iter()
        .map(|(property_type, listings)| PropertyTypeShare {
            property_type,
            listings,
            share_pct: share_pct(listings as f64, total as f64),
        })
        .collect();
    // Stable sort keeps alphabetical order among equal counts.
    shares.sort_by(|a, b| b.listings.cmp(&a.listings));
    shares
}

fn monthly_sales(table: &ResultTable, columns: &ListingColumns) -> Vec<MonthlySales> {
    let mut months: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for row in &table.rows {
        if let Some(month) = sale_month(&row[columns.date_sold]) {
            *months.entry(month).or_default() += 1;
        }
    }

    months
        .into_iter()
        .map(|(month, sales)| MonthlySales { month, sales })
        .collect()
}

fn label(cell: &Cell) -> Option<String> {
    (!cell.is_null()).then(|| cell.display())
}

/// First day of the sale month. Accepts plain dates and timestamps with a date prefix.
fn sale_month(cell: &Cell) -> Option<NaiveDate> {
    let raw = cell.as_text()?.trim();
    let date = NaiveDate::parse_from_str(raw.get(..10)?, "%Y-%m-%d").ok()?;
    date.with_day(1)
}
