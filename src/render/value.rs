//! Closed intermediate representation for everything that ends up in the
//! generated Roc source.

/// A value destined for the generated file.
///
/// Records keep their fields in insertion order, so the rendered output is
/// stable for a given tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<Value>),
    Record(Vec<(String, Value)>),
    Tag(Tag),
}

/// A tag union constructor, optionally applied to a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub name: String,
    pub payload: Option<Box<Value>>,
}

impl Tag {
    /// A tag with no payload, e.g. `NoHomepage`.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payload: None,
        }
    }

    /// A tag applied to a payload, e.g. `Url "https://..."`.
    pub fn with(name: impl Into<String>, payload: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            payload: Some(Box::new(payload.into())),
        }
    }
}

impl Value {
    /// Build a record from `(field, value)` pairs, keeping their order.
    pub fn record<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Record(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// `Url <payload>` when present, the bare fallback tag otherwise.
    pub fn url_or(url: Option<&str>, absent: &str) -> Self {
        match url {
            Some(url) => Tag::with("Url", url).into(),
            None => Tag::bare(absent).into(),
        }
    }
}

impl From<Tag> for Value {
    fn from(tag: Tag) -> Self {
        Value::Tag(tag)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}
