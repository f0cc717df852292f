//! `ApiResponse` and its projections

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Decoded API payload with non-mutating projections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiResponse {
    data: Value,
}

impl ApiResponse {
    /// Wrap a JSON value
    pub fn new(data: Value) -> Self {
        Self { data }
    }

    /// The null wrapper
    pub fn null() -> Self {
        Self { data: Value::Null }
    }

    /// Borrow the wrapped value
    pub fn value(&self) -> &Value {
        &self.data
    }

    /// Take the wrapped value
    pub fn into_value(self) -> Value {
        self.data
    }

    /// Items of a list, or an empty slice for anything else
    pub fn as_array(&self) -> &[Value] {
        match &self.data {
            Value::Array(items) => items,
            _ => &[],
        }
    }

    /// Whether the wrapped value is `null`
    pub fn is_null(&self) -> bool {
        self.data.is_null()
    }

    /// Number of list items (0 when not a list)
    pub fn len(&self) -> usize {
        self.as_array().len()
    }

    /// Whether there are no list items
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Extract named fields by dot-path from the object or from each list item
    ///
    /// Result keys are the paths as given. A path whose intermediate value
    /// is missing or not an object resolves to `null`. Non-object list items
    /// are skipped; scalars yield the null wrapper.
    pub fn get_fields<I, S>(&self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields: Vec<S> = fields.into_iter().collect();
        let extract = |item: &Map<String, Value>| -> Value {
            let mut out = Map::with_capacity(fields.len());
            for field in &fields {
                let path = field.as_ref();
                out.insert(path.to_string(), lookup_in_object(item, path));
            }
            Value::Object(out)
        };

        match &self.data {
            Value::Array(items) => Self::new(Value::Array(
                items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(extract)
                    .collect(),
            )),
            Value::Object(map) => Self::new(extract(map)),
            _ => Self::null(),
        }
    }

    /// Project one field across a list
    ///
    /// Non-object items are skipped; a missing field contributes `null`.
    pub fn pluck(&self, field: &str) -> Self {
        match &self.data {
            Value::Array(items) => Self::new(Value::Array(
                items
                    .iter()
                    .filter_map(Value::as_object)
                    .map(|item| lookup_in_object(item, field))
                    .collect(),
            )),
            _ => Self::null(),
        }
    }

    /// First list item
    pub fn head(&self) -> Self {
        self.as_array().first().cloned().map_or_else(Self::null, Self::new)
    }

    /// Last list item
    pub fn last(&self) -> Self {
        self.as_array().last().cloned().map_or_else(Self::null, Self::new)
    }

    /// List item at zero-based index `n`
    pub fn take(&self, n: usize) -> Self {
        self.as_array().get(n).cloned().map_or_else(Self::null, Self::new)
    }

    /// First `n` list items, as a list
    pub fn limit(&self, n: usize) -> Self {
        match &self.data {
            Value::Array(items) => {
                Self::new(Value::Array(items.iter().take(n).cloned().collect()))
            }
            _ => Self::null(),
        }
    }

    /// Two-space indented JSON rendering
    pub fn pretty_print(&self) -> String {
        serde_json::to_string_pretty(&self.data).unwrap_or_else(|_| self.data.to_string())
    }

    /// Deserialize the wrapped value into a typed model
    pub fn parse_as<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.data.clone())?)
    }
}

impl From<Value> for ApiResponse {
    fn from(data: Value) -> Self {
        Self::new(data)
    }
}

impl std::fmt::Display for ApiResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pretty_print())
    }
}

/// Resolve a dot-path through nested objects
///
/// Returns `None` when a segment is missing or an intermediate value is not
/// an object.
pub fn lookup_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = value;
    for key in path.split('.') {
        current = current.as_object()?.get(key)?;
    }
    Some(current)
}

fn lookup_in_object(item: &Map<String, Value>, path: &str) -> Value {
    let (first, rest) = match path.split_once('.') {
        Some((first, rest)) => (first, Some(rest)),
        None => (path, None),
    };
    let Some(value) = item.get(first) else {
        return Value::Null;
    };
    match rest {
        Some(rest) => lookup_path(value, rest).cloned().unwrap_or(Value::Null),
        None => value.clone(),
    }
}
