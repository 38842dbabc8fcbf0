//! BrickView: read-only analytics over a real estate dataset of listings, agents, sales,
//! buyers, and property attributes.

pub mod catalog;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod filters;
pub mod insights;
pub mod router;
pub mod service;
pub mod telemetry;

pub use router::analytics_router;
pub use service::{
    AnalyticsError, AnalyticsService, FilteredListings, InsightResult, ListingFilterRequest,
};
