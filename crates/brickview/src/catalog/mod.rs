//! Fixed catalog of analytical questions over the dataset.

mod queries;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bar => "Bar",
            Self::Line => "Line",
            Self::Pie => "Pie",
        }
    }
}

/// How a result is charted: the column labelling each point and the column holding its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub x: &'static str,
    pub y: &'static str,
}

/// One canned question. The SQL takes no parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InsightQuery {
    pub number: u16,
    pub label: &'static str,
    pub sql: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartSpec>,
}

pub fn entries() -> &'static [InsightQuery] {
    &queries::CATALOG
}

/// Looks up an entry by its 1-based number.
pub fn find(number: u16) -> Option<&'static InsightQuery> {
    entries().iter().find(|entry| entry.number == number)
}

pub fn find_by_label(label: &str) -> Option<&'static InsightQuery> {
    let label = label.trim();
    entries().iter().find(|entry| entry.label == label)
}
