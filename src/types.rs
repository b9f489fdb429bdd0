//! Result types for the driver.
//!
//! Defines the structures used to represent query results returned by the
//! engine, and the aggregation of a paginated response chain into one
//! materialized result.

use crate::protocol::{signature_of, QueryResponse, TypeSignature};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// A row of data from a query result.
pub type Row = Vec<Value>;

/// Represents a single cell value from a query result.
///
/// With `string_fields` enabled the engine renders every cell as a string,
/// so `Text` dominates in practice; the other variants cover engines (or
/// configurations) that send native JSON scalars. The result's
/// [`TypeSignature`] guides interpretation of `Text` cells.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Value {
    /// NULL value.
    #[default]
    Null,

    /// Boolean value.
    Bool(bool),

    /// Signed integer (up to i64).
    Int(i64),

    /// Floating point number.
    Float(f64),

    /// Text/string value.
    Text(String),
}

impl Value {
    /// Returns true if this value is NULL.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Converts the value to a display string.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::Null => "NULL".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_display_string())
    }
}

// Conversion implementations for common types
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        match v {
            Some(val) => val.into(),
            None => Value::Null,
        }
    }
}

/// A fully materialized query result.
///
/// Produced once pagination completes; the driver never mutates it
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    /// All rows, in arrival order across pages.
    pub rows: Vec<Row>,

    /// Per-column classification captured from the first page.
    pub signature: TypeSignature,
}

impl QueryResult {
    /// Folds an ordered response chain into one result.
    ///
    /// Rows are concatenated in chain order; pages without rows contribute
    /// nothing (normal for intermediate pages). The signature comes from
    /// the first page only, which is authoritative for the whole set. An
    /// empty chain is caller-level misuse and yields an empty result.
    pub fn from_pages(pages: Vec<QueryResponse>) -> Self {
        let Some(first) = pages.first() else {
            warn!("aggregating an empty response chain; returning an empty result");
            return Self::default();
        };

        let signature = signature_of(first);
        let rows = pages.into_iter().flat_map(|page| page.data).collect();

        Self { rows, signature }
    }

    /// Returns true if the result has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows in the result.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
