use chrono::NaiveDate;
use rusqlite::types::{ToSql, ToSqlOutput, Value, ValueRef};
use serde::Serialize;

/// Positional parameter bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlParam {
    Integer(i64),
    Date(NaiveDate),
    Text(String),
}

impl SqlParam {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

impl ToSql for SqlParam {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            SqlParam::Integer(value) => ToSqlOutput::Owned(Value::Integer(*value)),
            // Stored dates are ISO text, so compare as text.
            SqlParam::Date(value) => {
                ToSqlOutput::Owned(Value::Text(value.format("%Y-%m-%d").to_string()))
            }
            SqlParam::Text(value) => ToSqlOutput::Borrowed(ValueRef::Text(value.as_bytes())),
        })
    }
}

/// A single scalar from a result row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// Numeric view of the cell. Text is parsed so coordinates stored as strings still work.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Integer(value) => Some(*value as f64),
            Cell::Real(value) => Some(*value),
            Cell::Text(value) => value.trim().parse().ok(),
            Cell::Null => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Cell::Integer(value) => Some(*value),
            Cell::Real(value) => Some(value.trunc() as i64),
            Cell::Text(value) => value.trim().parse().ok(),
            Cell::Null => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Display form used for labels and CSV fields; null renders empty.
    pub fn display(&self) -> String {
        match self {
            Cell::Null => String::new(),
            Cell::Integer(value) => value.to_string(),
            // Reals keep their decimal point, so 4.0 stays distinct from 4.
            Cell::Real(value) => format!("{value:?}"),
            Cell::Text(value) => value.clone(),
        }
    }
}

impl From<ValueRef<'_>> for Cell {
    fn from(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => Cell::Null,
            ValueRef::Integer(value) => Cell::Integer(value),
            ValueRef::Real(value) => Cell::Real(value),
            ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
                Cell::Text(String::from_utf8_lossy(bytes).into_owned())
            }
        }
    }
}

/// Tabular result set with named columns, in statement order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl ResultTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// SQLite identifiers are case-insensitive, so lookups are too.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns
            .iter()
            .position(|column| column.eq_ignore_ascii_case(name))
    }

    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Cell> + '_> {
        let index = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[index]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ResultTable {
        ResultTable {
            columns: vec!["City".to_string(), "Avg_Price".to_string()],
            rows: vec![
                vec![Cell::Text("Austin".into()), Cell::Real(410000.5)],
                vec![Cell::Text("Denver".into()), Cell::Null],
            ],
        }
    }

    #[test]
    fn column_lookup_ignores_case() {
        let table = table();
        assert_eq!(table.column_index("city"), Some(0));
        assert_eq!(table.column_index("AVG_PRICE"), Some(1));
        assert_eq!(table.column_index("Price"), None);
    }

    #[test]
    fn column_iterates_values_in_row_order() {
        let table = table();
        let prices: Vec<Option<f64>> = table
            .column("Avg_Price")
            .expect("column present")
            .map(Cell::as_f64)
            .collect();
        assert_eq!(prices, vec![Some(410000.5), None]);
    }

    #[test]
    fn text_cells_parse_as_numbers() {
        assert_eq!(Cell::Text(" 30.2672 ".into()).as_f64(), Some(30.2672));
        assert_eq!(Cell::Text("north".into()).as_f64(), None);
        assert_eq!(Cell::Real(12.9).as_i64(), Some(12));
    }

    #[test]
    fn reals_display_with_a_decimal_point() {
        assert_eq!(Cell::Real(350000.0).display(), "350000.0");
        assert_eq!(Cell::Real(4.25).display(), "4.25");
        assert_eq!(Cell::Integer(350000).display(), "350000");
        assert_eq!(Cell::Null.display(), "");
    }

    #[test]
    fn cells_serialize_as_bare_scalars() {
        let row = vec![
            Cell::Null,
            Cell::Integer(3),
            Cell::Real(1.5),
            Cell::Text("Condo".into()),
        ];
        let json = serde_json::to_string(&row).expect("serializes");
        assert_eq!(json, r#"[null,3,1.5,"Condo"]"#);
    }

    #[test]
    fn dates_bind_as_iso_text() {
        let param = SqlParam::Date(NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"));
        match param.to_sql().expect("binds") {
            ToSqlOutput::Owned(Value::Text(text)) => assert_eq!(text, "2024-01-01"),
            other => panic!("unexpected binding {other:?}"),
        }
    }
}
