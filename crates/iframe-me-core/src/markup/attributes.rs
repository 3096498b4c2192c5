//! Caller-supplied iframe attributes, with `class` held apart from the rest.

/// Attributes for an embed: optional extra classes plus pass-through attributes.
///
/// Built from `(name, value)` pairs. A `class` entry becomes [`custom_classes`](Self::custom_classes);
/// every other entry keeps its insertion order. A repeated name keeps the position
/// of its first occurrence and the value of its last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedAttributes {
    custom_classes: Option<String>,
    extra: Vec<(String, String)>,
}

impl EmbedAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the classes appended after the default class.
    pub fn with_class(mut self, classes: impl Into<String>) -> Self {
        self.custom_classes = Some(classes.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        if name.eq_ignore_ascii_case("class") {
            self.custom_classes = Some(value);
            return;
        }
        match self.extra.iter().position(|(k, _)| *k == name) {
            Some(i) => self.extra[i].1 = value,
            None => self.extra.push((name, value)),
        }
    }

    /// Classes as supplied (untrimmed), if any.
    pub fn custom_classes(&self) -> Option<&str> {
        self.custom_classes.as_deref()
    }

    /// Non-class attributes in insertion order.
    pub fn extra_attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.extra.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for EmbedAttributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (k, v) in iter {
            attrs.insert(k, v);
        }
        attrs
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for EmbedAttributes
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// True for names matching `[A-Za-z_:][A-Za-z0-9_:.-]*`.
pub fn is_valid_attribute_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == ':' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '.' | '-'))
}
