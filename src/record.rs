//! Field access for table rows.
//!
//! The view engine never looks inside a record directly.  It asks the
//! record for the text form of a named field through the [`Record`]
//! trait, so any row shape a page holds can be searched and sorted the
//! same way.

use serde_json::{Map, Number, Value};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// A row that can expose its fields as text.
///
/// Implementations return `None` when the field is absent or holds no
/// primitive value.  The engine treats such a field as never matching a
/// non-empty search and as the empty string when sorting.
pub trait Record {
    fn field_text(&self, field: &str) -> Option<Cow<'_, str>>;
}

impl Record for Map<String, Value> {
    fn field_text(&self, field: &str) -> Option<Cow<'_, str>> {
        self.get(field).and_then(value_text)
    }
}

impl Record for Value {
    fn field_text(&self, field: &str) -> Option<Cow<'_, str>> {
        self.as_object().and_then(|row| row.field_text(field))
    }
}

impl Record for HashMap<String, String> {
    fn field_text(&self, field: &str) -> Option<Cow<'_, str>> {
        self.get(field).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl Record for BTreeMap<String, String> {
    fn field_text(&self, field: &str) -> Option<Cow<'_, str>> {
        self.get(field).map(|v| Cow::Borrowed(v.as_str()))
    }
}

/// Text form of a primitive JSON value.
///
/// Strings are returned as-is, booleans as `true`/`false` and numbers in
/// their shortest decimal form, with integral floats printed without a
/// fractional part (`3.0` becomes `"3"`).  `null`, arrays and objects
/// have no text form.
pub fn value_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Number(n) => Some(Cow::Owned(number_text(n))),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
        Some(f) => f.to_string(),
        None => n.to_string(),
    }
}
