use super::ListingFilter;
use crate::dataset::SqlParam;
use serde::Serialize;

/// Listings joined to their agent and, when sold, their sale. `WHERE 1=1` lets every
/// predicate start with `AND`.
pub const BASE_QUERY: &str = concat!(
    "SELECT l.Listing_ID, l.City, l.Property_Type, l.Price, l.Date_Listed, ",
    "a.Name AS Agent_Name, s.Date_Sold, s.Days_on_Market, ",
    "l.Latitude as latitude, l.Longitude as longitude ",
    "FROM listings l ",
    "JOIN agents a ON l.Agent_ID = a.Agent_ID ",
    "LEFT JOIN sales s ON l.Listing_ID = s.Listing_ID ",
    "WHERE 1=1",
);

/// One optional condition and the values for its placeholders.
#[derive(Debug, Clone, PartialEq)]
struct Fragment {
    sql: String,
    params: Vec<SqlParam>,
}

type FragmentFn = fn(&ListingFilter) -> Option<Fragment>;

// Declaration order is the order clauses and parameters appear in the statement.
const FRAGMENTS: [FragmentFn; 5] = [
    city_fragment,
    property_type_fragment,
    agent_fragment,
    price_fragment,
    date_fragment,
];

fn city_fragment(filter: &ListingFilter) -> Option<Fragment> {
    if filter.cities.is_empty() {
        return None;
    }

    let placeholders = vec!["?"; filter.cities.len()].join(",");
    Some(Fragment {
        sql: format!(" AND l.City IN ({placeholders})"),
        params: filter.cities.iter().cloned().map(SqlParam::Text).collect(),
    })
}

fn property_type_fragment(filter: &ListingFilter) -> Option<Fragment> {
    filter.property_type.selected().map(|value| Fragment {
        sql: " AND l.Property_Type = ?".to_string(),
        params: vec![SqlParam::text(value)],
    })
}

fn agent_fragment(filter: &ListingFilter) -> Option<Fragment> {
    filter.agent.selected().map(|value| Fragment {
        sql: " AND a.Name = ?".to_string(),
        params: vec![SqlParam::text(value)],
    })
}

fn price_fragment(filter: &ListingFilter) -> Option<Fragment> {
    let range = filter.price_range;
    Some(Fragment {
        sql: " AND l.Price BETWEEN ? AND ?".to_string(),
        params: vec![SqlParam::Integer(range.min), SqlParam::Integer(range.max)],
    })
}

fn date_fragment(filter: &ListingFilter) -> Option<Fragment> {
    // Anything but a complete two-date range is ignored, never partially applied.
    let [start, end] = filter.date_range.as_slice() else {
        return None;
    };

    // Filtering on the sale date drops unsold listings: their NULL fails BETWEEN.
    let column = filter.date_target.column();

    Some(Fragment {
        sql: format!(" AND {column} BETWEEN ? AND ?"),
        params: vec![SqlParam::Date(*start), SqlParam::Date(*end)],
    })
}

/// Compiled statement plus the parameters for its placeholders, left to right.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilteredListingQuery {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl FilteredListingQuery {
    /// Pure: identical filters always compile to identical text and parameter order.
    pub fn compile(filter: &ListingFilter) -> Self {
        let mut sql = String::from(BASE_QUERY);
        let mut params = Vec::new();

        for fragment in FRAGMENTS.iter().filter_map(|build| build(filter)) {
            sql.push_str(&fragment.sql);
            params.extend(fragment.params);
        }

        Self { sql, params }
    }

    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }
}
