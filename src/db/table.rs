use rusqlite::types::Value;
use rusqlite::ToSql;
use std::time::Instant;
use tracing::debug;

use crate::db::connection::Database;
use crate::errors::ServerError;

/// A SQL string plus its leading parameters. `fetch` appends
/// `(limit, offset)` after these, so the SQL must end with
/// `LIMIT ? OFFSET ?`.
#[derive(Debug, Clone)]
pub struct Query {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Query {
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    pub fn bind(mut self, value: impl Into<Value>) -> Self {
        self.params.push(value.into());
        self
    }
}

/// Fully materialized result set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    fn cell(&self, row: usize, col: &str) -> Option<&Value> {
        let idx = self.column_index(col)?;
        self.rows.get(row)?.get(idx)
    }

    /// Text view of a cell. Numbers are formatted; NULL and missing are `None`.
    pub fn text(&self, row: usize, col: &str) -> Option<String> {
        match self.cell(row, col)? {
            Value::Text(s) => Some(s.clone()),
            Value::Integer(i) => Some(i.to_string()),
            Value::Real(f) => Some(f.to_string()),
            Value::Null | Value::Blob(_) => None,
        }
    }

    /// Numeric view of a cell. Numeric text is parsed; anything else,
    /// including NaN and infinities, is `None`.
    pub fn real(&self, row: usize, col: &str) -> Option<f64> {
        let v = match self.cell(row, col)? {
            Value::Integer(i) => *i as f64,
            Value::Real(f) => *f,
            Value::Text(s) => s.trim().parse().ok()?,
            Value::Null | Value::Blob(_) => return None,
        };
        Some(v).filter(|v| v.is_finite())
    }
}

/// Runs `query` with `(limit, offset)` bound as the trailing parameters and
/// materializes every row. A query with no matches is an empty table.
pub fn fetch(db: &Database, query: &Query, limit: i64, offset: i64) -> Result<Table, ServerError> {
    let started = Instant::now();

    let table = db.with_conn(|conn| {
        let mut stmt = conn.prepare(&query.sql)?;

        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let width = columns.len();

        let mut params: Vec<&dyn ToSql> = query.params.iter().map(|p| p as &dyn ToSql).collect();
        params.push(&limit);
        params.push(&offset);

        let mut rows = stmt.query(params.as_slice())?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let mut values = Vec::with_capacity(width);
            for i in 0..width {
                values.push(row.get::<_, Value>(i)?);
            }
            out.push(values);
        }

        Ok(Table { columns, rows: out })
    })?;

    debug!(
        rows = table.len(),
        limit,
        offset,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "fetch complete"
    );

    Ok(table)
}
