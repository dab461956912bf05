//! Query string encoding.
//!
//! `QueryParams` is an ordered list of name/optional-value pairs. Encoding
//! keeps insertion order, drops absent values and percent-encodes names and
//! values. Defined-but-falsy values (`0`, `""`, `false`) are kept.

use std::fmt;

/// A primitive query value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Str(s) => f.write_str(s),
            QueryValue::Int(n) => write!(f, "{n}"),
            QueryValue::Float(n) => write!(f, "{n}"),
            QueryValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Str(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Str(value.clone())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

impl From<f32> for QueryValue {
    fn from(value: f32) -> Self {
        QueryValue::Float(f64::from(value))
    }
}

macro_rules! int_query_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for QueryValue {
                fn from(value: $t) -> Self {
                    QueryValue::Int(i64::from(value))
                }
            }
        )*
    };
}

int_query_value!(i8, i16, i32, i64, u8, u16, u32);

/// Ordered mapping from parameter name to optional value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, Option<QueryValue>)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter. `None` is recorded but never encoded.
    pub fn push<V: Into<QueryValue>>(mut self, name: &str, value: Option<V>) -> Self {
        self.pairs.push((name.to_string(), value.map(Into::into)));
        self
    }

    /// Append a parameter that is always present.
    pub fn set<V: Into<QueryValue>>(self, name: &str, value: V) -> Self {
        self.push(name, Some(value))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn encode(&self) -> String {
        encode_query(self)
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for QueryParams
where
    K: AsRef<str>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(QueryParams::new(), |q, (k, v)| q.push(k.as_ref(), v))
    }
}

/// Encode `params` as `name=value` pairs joined with `&`, without a leading `?`.
///
/// Returns an empty string when nothing is present.
pub fn encode_query(params: &QueryParams) -> String {
    params
        .pairs
        .iter()
        .filter_map(|(name, value)| {
            value.as_ref().map(|v| {
                format!(
                    "{}={}",
                    urlencoding::encode(name),
                    urlencoding::encode(&v.to_string())
                )
            })
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Join a path and its query, adding `?` only when the query is non-empty.
pub fn with_query(path: &str, params: &QueryParams) -> String {
    let query = encode_query(params);
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}
