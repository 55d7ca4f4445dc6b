//! Schema-less document representation.
//!
//! Documents carry whatever fields were written to them. Nothing here
//! enforces a per-collection shape; turning a document into a typed record
//! is the job of the content normalizer.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

/// Field every query orders by (descending).
pub const CREATED_AT: &str = "created_at";

/// A single typed field value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Double(f64),
    String(String),
    Timestamp(DateTime<Utc>),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer view. Whole doubles are accepted since some writers store
    /// every number as a double.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            Self::Double(d) if d.fract() == 0.0 => Some(*d as i64),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Field name to value map of a document.
pub type Fields = BTreeMap<String, FieldValue>;

/// A stored document and its backend-assigned key.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.get(CREATED_AT).and_then(FieldValue::as_timestamp)
    }
}

/// Top-level collections, one per entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Projects,
    Contacts,
    Testimonials,
}

impl Collection {
    pub fn name(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Contacts => "contacts",
            Self::Testimonials => "testimonials",
        }
    }
}

/// A read against one collection, always ordered by `created_at`
/// descending.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub collection: Collection,
    /// Boolean field that must be `true` for a document to match.
    pub flag: Option<&'static str>,
    pub limit: Option<u32>,
}

impl Query {
    /// Every document in `collection`.
    pub fn all(collection: Collection) -> Self {
        Self {
            collection,
            flag: None,
            limit: None,
        }
    }

    /// Documents whose `flag` field is `true`, at most `limit` of them.
    pub fn flagged(collection: Collection, flag: &'static str, limit: u32) -> Self {
        Self {
            collection,
            flag: Some(flag),
            limit: Some(limit),
        }
    }

    /// Whether `doc` passes the flag filter.
    pub fn matches(&self, doc: &Document) -> bool {
        match self.flag {
            Some(field) => doc.get(field).and_then(FieldValue::as_bool) == Some(true),
            None => true,
        }
    }
}
