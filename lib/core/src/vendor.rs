use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field the ranker writes the computed score into
pub const SUITABILITY_SCORE_FIELD: &str = "suitability_score";

/// A vendor record with an open-ended set of attributes.
///
/// Vendors have no fixed schema: every field in the source document is
/// kept, in its original order, and passed through to the response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vendor {
    fields: Map<String, Value>,
}

impl Vendor {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    #[inline]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Check whether a field carries data.
    ///
    /// A field is present when it exists and its value is not `null`,
    /// `false`, numeric zero, an empty string, an empty array or an empty
    /// object.
    pub fn has(&self, field: &str) -> bool {
        self.fields.get(field).map(is_truthy).unwrap_or(false)
    }

    /// Score previously assigned by the ranker, if any
    pub fn suitability_score(&self) -> Option<u8> {
        self.fields
            .get(SUITABILITY_SCORE_FIELD)
            .and_then(Value::as_u64)
            .and_then(|s| u8::try_from(s).ok())
    }

    #[inline]
    pub fn set_suitability_score(&mut self, score: u8) {
        self.fields
            .insert(SUITABILITY_SCORE_FIELD.to_string(), Value::from(score));
    }

    #[inline]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    #[inline]
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    #[inline]
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }
}

impl From<Map<String, Value>> for Vendor {
    fn from(fields: Map<String, Value>) -> Self {
        Self::from_fields(fields)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
