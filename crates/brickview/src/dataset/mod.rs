//! Read-only access to the pre-built real estate dataset.
//!
//! Every call opens its own connection and releases it before returning, so nothing here
//! holds state between requests.

mod options;
mod table;

use rusqlite::{params_from_iter, Connection, OpenFlags};
use std::path::{Path, PathBuf};

pub use options::{FilterOptions, PriceBounds};
pub use table::{Cell, ResultTable, SqlParam};

/// Executes SQL against the dataset. Swappable so services can be exercised in isolation.
pub trait QueryExecutor: Send + Sync {
    /// Runs `sql` with positional `params`. An empty slice runs the statement unparameterized.
    fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<ResultTable, QueryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("failed to open dataset at {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error("query execution failed: {0}")]
    Execution(#[from] rusqlite::Error),
    #[error("query result is missing column '{0}'")]
    MissingColumn(String),
    #[error("listings table is empty; no price range available")]
    EmptyListings,
}

/// SQLite file opened read-only, once per statement.
#[derive(Debug, Clone)]
pub struct SqliteDataset {
    path: PathBuf,
}

impl SqliteDataset {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connect(&self) -> Result<Connection, QueryError> {
        Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| QueryError::Open {
            path: self.path.clone(),
            source,
        })
    }
}

impl QueryExecutor for SqliteDataset {
    fn execute(&self, sql: &str, params: &[SqlParam]) -> Result<ResultTable, QueryError> {
        let conn = self.connect()?;
        let table = run_statement(&conn, sql, params).inspect_err(|err| {
            tracing::warn!(error = %err, "dataset query failed");
        })?;

        tracing::debug!(
            sql = sql.trim(),
            params = params.len(),
            rows = table.len(),
            "dataset query executed"
        );
        Ok(table)
    }
}

fn run_statement(
    conn: &Connection,
    sql: &str,
    params: &[SqlParam],
) -> Result<ResultTable, QueryError> {
    let mut stmt = conn.prepare(sql)?;
    let columns: Vec<String> = stmt
        .column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let width = columns.len();
    let mut table = ResultTable::new(columns);

    let mut rows = stmt.query(params_from_iter(params.iter()))?;
    while let Some(row) = rows.next()? {
        let mut cells = Vec::with_capacity(width);
        for index in 0..width {
            cells.push(Cell::from(row.get_ref(index)?));
        }
        table.rows.push(cells);
    }

    Ok(table)
}
