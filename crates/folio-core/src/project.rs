//! # Project Records
//!
//! A `Project` is one portfolio item as served by `GET /projects`. The
//! client treats it as read-only and does not validate per-item shape:
//! a field that is missing, `null`, or of the wrong JSON type decodes to
//! its default rather than failing the whole listing.
//!
//! ## Identity
//!
//! `id` is the sole list key. Uniqueness is assumed, not enforced; a
//! listing with duplicate ids keeps both entries in source order.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

// ─── Project Id ──────────────────────────────────────────────────────

/// Server-assigned project identifier.
///
/// The backend may send either a JSON number or a string; both are kept
/// verbatim so the identifier round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum ProjectId {
    /// Numeric identifier, e.g. `1` or `1.5`.
    Number(Number),
    /// Any other identifier, kept as text.
    Text(String),
}

impl Default for ProjectId {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl From<Value> for ProjectId {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::Text(s),
            Value::Null => Self::default(),
            other => Self::Text(other.to_string()),
        }
    }
}

impl From<i64> for ProjectId {
    fn from(id: i64) -> Self {
        Self::Number(Number::from(id))
    }
}

impl From<i32> for ProjectId {
    fn from(id: i32) -> Self {
        Self::Number(Number::from(id))
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl Serialize for ProjectId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(n) => n.serialize(serializer),
            Self::Text(s) => serializer.serialize_str(s),
        }
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

// ─── Project Status ──────────────────────────────────────────────────

/// Lifecycle status of a project as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub enum ProjectStatus {
    /// Project is under active development.
    Active,
    /// Project is archived or paused.
    Inactive,
    /// Any other value, kept as sent (`null` when missing). Matches only
    /// the `all` filter.
    Unknown(Value),
}

impl Default for ProjectStatus {
    fn default() -> Self {
        Self::Unknown(Value::Null)
    }
}

impl From<Value> for ProjectStatus {
    fn from(value: Value) -> Self {
        match value.as_str() {
            Some("active") => Self::Active,
            Some("inactive") => Self::Inactive,
            _ => Self::Unknown(value),
        }
    }
}

impl Serialize for ProjectStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Active => serializer.serialize_str("active"),
            Self::Inactive => serializer.serialize_str("inactive"),
            Self::Unknown(raw) => raw.serialize(serializer),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("active"),
            Self::Inactive => f.write_str("inactive"),
            Self::Unknown(Value::String(s)) => f.write_str(s),
            Self::Unknown(_) => f.write_str("unknown"),
        }
    }
}

// ─── Project ─────────────────────────────────────────────────────────

/// One portfolio item.
///
/// Decodes from any JSON value. Unknown extra fields are ignored, `title`
/// is accepted as an alias of `name`, and an item that is not an object
/// at all (`null`, a number, a string) becomes a project with every field
/// defaulted instead of failing the listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Project {
    /// Stable identifier; the list key.
    pub id: ProjectId,
    /// Display name. Search target.
    pub name: String,
    /// Display description. Search target.
    pub description: String,
    /// Filter target.
    pub status: ProjectStatus,
    /// Repository URL used as the outbound link.
    pub github: String,
}

impl Project {
    /// Build a project from its parts.
    pub fn new(
        id: impl Into<ProjectId>,
        name: impl Into<String>,
        description: impl Into<String>,
        status: ProjectStatus,
        github: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            status,
            github: github.into(),
        }
    }
}

impl From<Value> for Project {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value::<ProjectFields>(value)
                .map(Self::from)
                .unwrap_or_default(),
            _ => Self::default(),
        }
    }
}

/// Field-wise lenient view of a project object.
#[derive(Deserialize)]
struct ProjectFields {
    #[serde(default)]
    id: ProjectId,
    #[serde(default, alias = "title", deserialize_with = "lenient_string")]
    name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    description: String,
    #[serde(default)]
    status: ProjectStatus,
    #[serde(default, deserialize_with = "lenient_string")]
    github: String,
}

impl From<ProjectFields> for Project {
    fn from(fields: ProjectFields) -> Self {
        Self {
            id: fields.id,
            name: fields.name,
            description: fields.description,
            status: fields.status,
            github: fields.github,
        }
    }
}

/// Decode a string field without rejecting `null` or non-string values.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_text(Option::<Value>::deserialize(deserializer)?).unwrap_or_default())
}

/// Text of a JSON value: strings as-is, other non-null values stringified.
pub(crate) fn lenient_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
