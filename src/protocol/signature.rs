//! Schema classification.
//!
//! Reduces each schema field to a coarse column kind and the whole result
//! set to a compact signature, one letter per column. Callers use the
//! signature to interpret cell values without re-parsing the schema.

use super::{Field, QueryResponse};
use std::fmt;

/// Coarse classification of one result column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Integer family (`Int32`, `UInt8`, `BigInt`, ...).
    Integer,
    /// Floating-point family (`Float64`, `Double`, ...).
    Float,
    /// Boolean.
    Bool,
    /// Everything else, treated as text.
    Text,
}

impl ColumnKind {
    /// Classifies a raw type tag.
    ///
    /// Case-insensitive substring matching in fixed priority order:
    /// integer first, then float/double, then boolean. The order is part
    /// of the contract — composite type names must classify the same way
    /// on every engine, so first match always wins.
    pub fn classify(tag: &str) -> Self {
        let tag = tag.to_lowercase();
        if tag.contains("int") {
            Self::Integer
        } else if tag.contains("float") || tag.contains("double") {
            Self::Float
        } else if tag.contains("bool") {
            Self::Bool
        } else {
            Self::Text
        }
    }

    /// Returns the one-letter code for this kind.
    pub fn code(&self) -> char {
        match self {
            Self::Integer => 'I',
            Self::Float => 'F',
            Self::Bool => 'B',
            Self::Text => 'T',
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Ordered per-column classification of a result set, in schema order.
///
/// Derived once from the first page of a result chain and authoritative
/// for every later page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSignature(Vec<ColumnKind>);

impl TypeSignature {
    /// Returns the number of classified columns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no columns were classified.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the kind of the column at `index`, if present.
    pub fn kind(&self, index: usize) -> Option<ColumnKind> {
        self.0.get(index).copied()
    }

    /// Iterates over the column kinds in schema order.
    pub fn iter(&self) -> impl Iterator<Item = ColumnKind> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<ColumnKind> for TypeSignature {
    fn from_iter<I: IntoIterator<Item = ColumnKind>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in &self.0 {
            write!(f, "{kind}")?;
        }
        Ok(())
    }
}

/// Classifies one schema field, unwrapping a nullable wrapper first.
fn classify_field(field: &Field) -> ColumnKind {
    match field.data_type.effective_tag() {
        Some(tag) => ColumnKind::classify(tag),
        None => ColumnKind::Text,
    }
}

/// Derives the type signature of a response.
///
/// A response carrying a server error yields an empty signature;
/// classification is skipped entirely.
pub fn signature_of(response: &QueryResponse) -> TypeSignature {
    if response.error.is_some() {
        return TypeSignature::default();
    }
    response.schema.iter().map(classify_field).collect()
}
