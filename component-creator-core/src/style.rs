use serde::{Deserialize, Serialize};

/// Values that carry no information for the styling tab.
const UNINTERESTING_VALUES: &[&str] = &["none", "auto", "normal"];

/// Resolved (computed) style of one element, in the order the browser reports it.
///
/// Serialises as a plain `{ "property": "value" }` object; the order of keys is
/// preserved on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "StyleMap", into = "StyleMap")]
pub struct ComputedStyle {
    entries: Vec<(String, String)>,
}

impl ComputedStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `property`, replacing an earlier value in place.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((property, value)),
        }
    }

    /// Builder form of [`ComputedStyle::set`].
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ComputedStyle {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = ComputedStyle::new();
        for (k, v) in iter {
            style.set(k, v);
        }
        style
    }
}

// serde keeps map order only through a sequence of pairs, so the map form is
// visited manually.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct StyleMap(#[serde(with = "ordered_map")] Vec<(String, String)>);

impl From<StyleMap> for ComputedStyle {
    fn from(map: StyleMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl From<ComputedStyle> for StyleMap {
    fn from(style: ComputedStyle) -> Self {
        StyleMap(style.entries)
    }
}

pub(crate) mod ordered_map {
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S: Serializer>(
        entries: &[(String, String)],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (k, v) in entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<(String, String)>, D::Error> {
        struct PairsVisitor;

        impl<'de> Visitor<'de> for PairsVisitor {
            type Value = Vec<(String, String)>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of CSS property names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut pairs = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    pairs.push((k, v));
                }
                Ok(pairs)
            }
        }

        deserializer.deserialize_map(PairsVisitor)
    }
}

// ─── Style sampler ───────────────────────────────────────────────────────────

/// Filters a computed style down to the entries worth showing: empty values and
/// the keywords `none`, `auto` and `normal` are dropped, order is kept.
pub fn sample_styles(style: &ComputedStyle) -> Vec<(String, String)> {
    style
        .iter()
        .filter(|(_, value)| !value.is_empty() && !UNINTERESTING_VALUES.contains(value))
        .map(|(p, v)| (p.to_string(), v.to_string()))
        .collect()
}
