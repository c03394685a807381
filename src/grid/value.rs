//! Cell values and the [`Record`] trait rows implement.

use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

/// The value of one field of one row.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// The key path does not exist on the row.
    #[default]
    Missing,
    /// The field exists and is explicitly empty.
    Null,
    /// A boolean.
    Bool(bool),
    /// Any number.
    Number(f64),
    /// Text.
    Text(String),
}

impl CellValue {
    /// True for [`Missing`](Self::Missing) and [`Null`](Self::Null).
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Missing | Self::Null)
    }

    fn rank(&self) -> u8 {
        match self {
            Self::Missing => 0,
            Self::Null => 1,
            Self::Bool(_) => 2,
            Self::Number(_) => 3,
            Self::Text(_) => 4,
        }
    }

    /// Total order used for sorting.
    ///
    /// Numbers compare numerically, text by code point, `false < true`.
    /// Values of different kinds order by kind:
    /// missing, null, bool, number, text.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing | Self::Null => Ok(()),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl From<&Value> for CellValue {
    /// Arrays and objects become their compact JSON text.
    fn from(v: &Value) -> Self {
        match v {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            Value::String(s) => Self::Text(s.clone()),
            Value::Array(_) | Value::Object(_) => Self::Text(v.to_string()),
        }
    }
}

/// Stable identity of a row, used to key the selection.
///
/// Ids the row reports itself and positional fallbacks never compare equal,
/// so a row whose id is `"1"` and an id-less row at index 1 stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RowId {
    /// An id reported by [`Record::id`].
    Key(String),
    /// Position in the grid's data, for rows without an id. Only valid for
    /// the data it was taken from.
    Index(usize),
}

impl RowId {
    /// The reported id, or `None` for a positional fallback.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Key(key) => Some(key),
            Self::Index(_) => None,
        }
    }

    /// Whether this id is a position rather than a reported id.
    pub fn is_positional(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => f.write_str(key),
            Self::Index(index) => write!(f, "#{}", index),
        }
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        Self::Key(s.to_string())
    }
}

impl From<String> for RowId {
    fn from(s: String) -> Self {
        Self::Key(s)
    }
}

impl From<u64> for RowId {
    fn from(n: u64) -> Self {
        Self::Key(n.to_string())
    }
}

impl From<usize> for RowId {
    fn from(n: usize) -> Self {
        Self::Key(n.to_string())
    }
}

/// A row the grid can display.
///
/// ```rust
/// use bubbletea_datagrid::grid::{CellValue, Record, RowId};
///
/// struct Vendor {
///     code: u64,
///     name: String,
/// }
///
/// impl Record for Vendor {
///     fn field(&self, key: &str) -> CellValue {
///         match key {
///             "code" => CellValue::Number(self.code as f64),
///             "name" => CellValue::from(self.name.as_str()),
///             _ => CellValue::Missing,
///         }
///     }
///
///     fn id(&self) -> Option<RowId> {
///         Some(RowId::from(self.code))
///     }
/// }
/// ```
pub trait Record {
    /// The value at `key`, which may be a dotted path. Unknown keys give
    /// [`CellValue::Missing`].
    fn field(&self, key: &str) -> CellValue;

    /// The row's identity. Rows without one are identified by their position
    /// in the grid's data.
    fn id(&self) -> Option<RowId> {
        None
    }
}

/// Follows a dotted path (`"contactInfo.email"`, `"lines.0.sku"`) through
/// objects and arrays.
pub fn resolve_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }
    path.split('.')
        .try_fold(value, |current, segment| match current {
            Value::Object(map) => map.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
}

impl Record for Value {
    fn field(&self, key: &str) -> CellValue {
        resolve_path(self, key).map_or(CellValue::Missing, CellValue::from)
    }

    /// `id`, then `_id`; strings and numbers are accepted.
    fn id(&self) -> Option<RowId> {
        ["id", "_id"].iter().find_map(|k| match self.get(*k)? {
            Value::String(s) => Some(RowId::from(s.as_str())),
            Value::Number(n) => Some(RowId::from(n.to_string())),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dotted_path_lookup() {
        let row = json!({
            "name": "Acme",
            "contactInfo": { "email": "ops@acme.test", "phones": ["555-0100"] }
        });
        assert_eq!(row.field("name"), CellValue::from("Acme"));
        assert_eq!(row.field("contactInfo.email"), CellValue::from("ops@acme.test"));
        assert_eq!(row.field("contactInfo.phones.0"), CellValue::from("555-0100"));
    }

    #[test]
    fn test_malformed_paths_are_missing() {
        let row = json!({ "name": "Acme", "contactInfo": null });
        assert_eq!(row.field("contactInfo.email"), CellValue::Missing);
        assert_eq!(row.field("name.first"), CellValue::Missing);
        assert_eq!(row.field(""), CellValue::Missing);
        assert_eq!(row.field("a..b"), CellValue::Missing);
        assert_eq!(row.field("contactInfo"), CellValue::Null);
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Number(42.0).to_string(), "42");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
        assert_eq!(CellValue::Missing.to_string(), "");
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::Bool(true).to_string(), "true");
    }

    #[test]
    fn test_compare_orders_within_and_across_kinds() {
        assert_eq!(
            CellValue::Number(9.0).compare(&CellValue::Number(10.0)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::from("Bob").compare(&CellValue::from("Jane")),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Missing.compare(&CellValue::Number(0.0)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::from("1").compare(&CellValue::Number(2.0)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_json_row_ids() {
        assert_eq!(json!({"id": 7}).id(), Some(RowId::from("7")));
        assert_eq!(json!({"_id": "abc"}).id(), Some(RowId::from("abc")));
        assert_eq!(json!({"id": "x", "_id": "y"}).id(), Some(RowId::from("x")));
        assert_eq!(json!({"name": "no id"}).id(), None);
    }

    #[test]
    fn test_reported_and_positional_ids_differ() {
        assert_ne!(RowId::from(1usize), RowId::Index(1));
        assert_eq!(RowId::from(1usize), RowId::from("1"));
        assert_eq!(RowId::Index(3).to_string(), "#3");
        assert_eq!(RowId::from("abc").key(), Some("abc"));
        assert!(RowId::Index(0).is_positional());
    }
}
