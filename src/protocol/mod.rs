//! Wire types for the engine's HTTP query interface.
//!
//! One statement submission produces a chain of responses linked by
//! `next_uri`; each response may also carry a replacement session object
//! and a server-reported error. Decoding is tolerant of unknown keys and
//! never interprets the session contents.

mod signature;

pub use signature::{signature_of, ColumnKind, TypeSignature};

use crate::error::{FerryError, Result};
use crate::types::Row;
use serde::{Deserialize, Serialize};

/// Server-owned session state, threaded through opaquely.
pub type SessionState = serde_json::Map<String, serde_json::Value>;

/// Body of the initial statement submission.
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    /// The SQL statement to execute.
    pub sql: String,
    /// Asks the engine to render every cell as a string.
    pub string_fields: bool,
    /// Session state from the previous statement, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionState>,
}

impl QueryRequest {
    /// Creates a request for the given statement with no session.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            string_fields: true,
            session: None,
        }
    }

    /// Attaches session state to the request.
    pub fn with_session(mut self, session: SessionState) -> Self {
        self.session = Some(session);
        self
    }
}

/// Decoded shape of one HTTP reply from the engine.
///
/// `schema` and `data` are required; a payload missing either fails to
/// decode. `next_uri`, `session` and `error` are all optional and absent
/// means "no follow-up" / "no session update" / "no error" respectively.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct QueryResponse {
    /// Result schema; classified into a type signature on the first page.
    pub schema: Vec<Field>,
    /// Rows carried by this page. Empty on intermediate pages is normal.
    pub data: Vec<Row>,
    /// Where to fetch the next page; absence signals completion.
    pub next_uri: Option<String>,
    /// Replacement session state, when the server updates it.
    pub session: Option<SessionState>,
    /// Server-reported failure embedded in an otherwise ordinary reply.
    pub error: Option<ResponseError>,
}

/// One field of the result schema.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Field {
    /// Column name. Some engines omit it; classification never reads it.
    #[serde(default)]
    pub name: String,
    /// Column type, possibly wrapped one level for nullable columns.
    #[serde(default)]
    pub data_type: FieldType,
}

/// A type tag, either direct (`{"type": "Int32"}`) or wrapped for
/// nullable columns (`{"inner": {"type": "Int32"}}`).
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct FieldType {
    #[serde(rename = "type")]
    pub name: Option<String>,
    pub inner: Option<Box<FieldType>>,
}

impl FieldType {
    /// Resolves the effective type tag, unwrapping exactly one level of
    /// nullable nesting. Returns None when no tag is present at the
    /// resolved level.
    pub fn effective_tag(&self) -> Option<&str> {
        match &self.inner {
            Some(inner) => inner.name.as_deref(),
            None => self.name.as_deref(),
        }
    }
}

/// Server-reported error payload.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ResponseError {
    pub code: i64,
    pub message: String,
}

impl From<&ResponseError> for FerryError {
    fn from(err: &ResponseError) -> Self {
        FerryError::server(err.code, err.message.clone())
    }
}

/// Decodes one raw reply body into a [`QueryResponse`].
///
/// Unknown extra keys are ignored. A payload carrying a server error still
/// decodes successfully; failure handling is the pagination loop's job.
pub fn decode_response(body: &[u8]) -> Result<QueryResponse> {
    serde_json::from_slice(body).map_err(|e| FerryError::malformed(e.to_string()))
}
