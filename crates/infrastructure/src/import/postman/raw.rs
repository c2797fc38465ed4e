//! Shape classification for untyped collection input.
//!
//! Imported files come from many tools and versions, so the importer works on
//! `serde_json::Value` and classifies each element here instead of relying on
//! a strict typed schema.

use serde_json::{Map, Value};

/// One element of a top-level `item` array.
#[derive(Debug, Clone, Copy)]
pub enum RawItem<'a> {
    /// Has a nested `item` sequence.
    Group(RawGroup<'a>),
    /// Has a `request` object and no nested `item` sequence.
    Request(RawRequest<'a>),
    /// Anything else.
    Unrecognized,
}

impl<'a> RawItem<'a> {
    /// Classifies an element. A nested `item` sequence wins over `request`.
    #[must_use]
    pub fn classify(value: &'a Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::Unrecognized;
        };
        if let Some(children) = fields.get("item").and_then(Value::as_array) {
            return Self::Group(RawGroup { fields, children });
        }
        RawRequest::from_value(value).map_or(Self::Unrecognized, Self::Request)
    }
}

/// A folder-like element.
#[derive(Debug, Clone, Copy)]
pub struct RawGroup<'a> {
    fields: &'a Map<String, Value>,
    /// Nested elements.
    pub children: &'a [Value],
}

impl<'a> RawGroup<'a> {
    /// Group name, if it is a string.
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        str_field(self.fields, "name")
    }

    /// Protocol behavior flags, if they form an object.
    #[must_use]
    pub fn behavior_flags(&self) -> Option<&'a Map<String, Value>> {
        self.fields
            .get("protocolProfileBehavior")
            .and_then(Value::as_object)
    }
}

/// A request-like element: an object with a `request` object.
#[derive(Debug, Clone, Copy)]
pub struct RawRequest<'a> {
    /// The whole element.
    pub item: &'a Map<String, Value>,
    /// The `request` sub-object.
    pub request: &'a Map<String, Value>,
}

impl<'a> RawRequest<'a> {
    /// Keys of a request element that map onto typed fields.
    pub const KNOWN_KEYS: &'static [&'static str] = &["name", "request", "event", "item"];

    /// Returns the element as a request when it carries a `request` object.
    #[must_use]
    pub fn from_value(value: &'a Value) -> Option<Self> {
        let item = value.as_object()?;
        let request = item.get("request")?.as_object()?;
        Some(Self { item, request })
    }

    /// Request name, if it is a string.
    #[must_use]
    pub fn name(&self) -> Option<&'a str> {
        str_field(self.item, "name")
    }

    /// Method text, if it is a string.
    #[must_use]
    pub fn method(&self) -> Option<&'a str> {
        str_field(self.request, "method")
    }

    /// Element-level fields not covered by [`Self::KNOWN_KEYS`].
    pub fn extra_fields(self) -> impl Iterator<Item = (&'a String, &'a Value)> {
        self.item
            .iter()
            .filter(|(key, _)| !Self::KNOWN_KEYS.contains(&key.as_str()))
    }
}

/// Returns `fields[key]` when it is a string.
#[must_use]
pub fn str_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}

/// Renders a scalar as text: strings verbatim, numbers and booleans via
/// `to_string`, everything else as empty.
#[must_use]
pub fn scalar_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}
