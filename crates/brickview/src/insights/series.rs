use super::{required_column, share_pct};
use crate::catalog::{ChartKind, ChartSpec};
use crate::dataset::{QueryError, ResultTable};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
    /// Slice share in percent; pie charts only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    pub kind: ChartKind,
    pub x: &'static str,
    pub y: &'static str,
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Builds the series described by `spec`. Empty results have nothing to chart.
    pub fn from_table(spec: &ChartSpec, table: &ResultTable) -> Result<Option<Self>, QueryError> {
        if table.is_empty() {
            return Ok(None);
        }

        let x_index = required_column(table, spec.x)?;
        let y_index = required_column(table, spec.y)?;

        let mut points: Vec<ChartPoint> = table
            .rows
            .iter()
            .filter_map(|row| {
                let value = row[y_index].as_f64()?;
                Some(ChartPoint {
                    label: row[x_index].display(),
                    value,
                    share_pct: None,
                })
            })
            .collect();

        if spec.kind == ChartKind::Pie {
            let total: f64 = points.iter().map(|point| point.value).sum();
            for point in &mut points {
                point.share_pct = Some(share_pct(point.value, total));
            }
        }

        Ok(Some(Self {
            kind: spec.kind,
            x: spec.x,
            y: spec.y,
            points,
        }))
    }
}
