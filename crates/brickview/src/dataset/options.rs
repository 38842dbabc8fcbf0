use super::{QueryError, QueryExecutor, ResultTable};
use serde::Serialize;

const CITIES_SQL: &str = "SELECT DISTINCT City FROM listings";
const PROPERTY_TYPES_SQL: &str = "SELECT DISTINCT Property_Type FROM listings";
const AGENTS_SQL: &str = "SELECT DISTINCT Name FROM agents";
const PRICE_BOUNDS_SQL: &str = "SELECT MIN(Price) as min_p, MAX(Price) as max_p FROM listings";

/// Whole-unit bounds enclosing every listing price: the minimum rounded down, the maximum up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBounds {
    pub min: i64,
    pub max: i64,
}

impl PriceBounds {
    pub fn load<E: QueryExecutor + ?Sized>(executor: &E) -> Result<Self, QueryError> {
        let table = executor.execute(PRICE_BOUNDS_SQL, &[])?;
        let row = table.rows.first().ok_or(QueryError::EmptyListings)?;
        let min = row.first().and_then(|cell| cell.as_f64());
        let max = row.get(1).and_then(|cell| cell.as_f64());

        match (min, max) {
            (Some(min), Some(max)) => Ok(Self {
                min: min.floor() as i64,
                max: max.ceil() as i64,
            }),
            _ => Err(QueryError::EmptyListings),
        }
    }
}

/// Values offered by the listing filter controls.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub cities: Vec<String>,
    pub property_types: Vec<String>,
    pub agents: Vec<String>,
    pub price_bounds: PriceBounds,
}

impl FilterOptions {
    pub fn load<E: QueryExecutor + ?Sized>(executor: &E) -> Result<Self, QueryError> {
        Ok(Self {
            cities: distinct_values(executor, CITIES_SQL)?,
            property_types: distinct_values(executor, PROPERTY_TYPES_SQL)?,
            agents: distinct_values(executor, AGENTS_SQL)?,
            price_bounds: PriceBounds::load(executor)?,
        })
    }
}

fn distinct_values<E: QueryExecutor + ?Sized>(
    executor: &E,
    sql: &str,
) -> Result<Vec<String>, QueryError> {
    let table = executor.execute(sql, &[])?;
    Ok(first_column_values(&table))
}

fn first_column_values(table: &ResultTable) -> Vec<String> {
    table
        .rows
        .iter()
        .filter_map(|row| row.first())
        .filter(|cell| !cell.is_null())
        .map(|cell| cell.display())
        .collect()
}
