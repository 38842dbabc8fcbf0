//! Listing filter state and its compilation into a single parameterized statement.

mod builder;

use crate::dataset::PriceBounds;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use builder::{FilteredListingQuery, BASE_QUERY};

/// Sentinel accepted by single-value selectors to mean "no constraint".
pub const ALL: &str = "All";

/// A single-value selector that may be left at "All".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Choice {
    #[default]
    All,
    Only(String),
}

impl Choice {
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    pub fn selected(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }
}

impl From<Option<String>> for Choice {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(Choice::parse).unwrap_or_default()
    }
}

impl From<Choice> for Option<String> {
    fn from(value: Choice) -> Self {
        match value {
            Choice::All => None,
            Choice::Only(value) => Some(value),
        }
    }
}

/// Which date column the date range applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateTarget {
    #[default]
    #[serde(rename = "date_listed", alias = "Date Listed")]
    DateListed,
    #[serde(rename = "date_sold", alias = "Date Sold")]
    DateSold,
}

impl DateTarget {
    pub const fn label(self) -> &'static str {
        match self {
            Self::DateListed => "Date Listed",
            Self::DateSold => "Date Sold",
        }
    }

    /// Qualified column in the listing/agent/sale join.
    pub const fn column(self) -> &'static str {
        match self {
            Self::DateListed => "l.Date_Listed",
            Self::DateSold => "s.Date_Sold",
        }
    }
}

impl fmt::Display for DateTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DateTarget {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "listed" | "date_listed" => Ok(Self::DateListed),
            "sold" | "date_sold" => Ok(Self::DateSold),
            _ => Err(format!(
                "unknown date target '{raw}' (expected 'Date Listed' or 'Date Sold')"
            )),
        }
    }
}

/// Closed price interval. Inverted ranges are kept as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

impl From<PriceBounds> for PriceRange {
    fn from(bounds: PriceBounds) -> Self {
        Self {
            min: bounds.min,
            max: bounds.max,
        }
    }
}

/// The complete set of listing filter selections.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingFilter {
    pub cities: Vec<String>,
    pub property_type: Choice,
    pub agent: Choice,
    pub price_range: PriceRange,
    pub date_target: DateTarget,
    /// Only applied when it holds exactly two dates.
    pub date_range: Vec<NaiveDate>,
}

impl ListingFilter {
    /// Filter with every selector untouched: all cities, types, agents, the full price span.
    pub fn unfiltered(bounds: PriceBounds) -> Self {
        Self {
            cities: Vec::new(),
            property_type: Choice::All,
            agent: Choice::All,
            price_range: bounds.into(),
            date_target: DateTarget::DateListed,
            date_range: Vec::new(),
        }
    }

    pub fn compile(&self) -> FilteredListingQuery {
        FilteredListingQuery::compile(self)
    }
}
