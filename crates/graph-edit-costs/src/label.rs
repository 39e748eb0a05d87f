//! Node and edge labels as open, string-keyed numeric attribute maps.
//!
//! Graph datasets define their own attribute sets (a plane-drawing dataset
//! stores `"x"`/`"y"` coordinates, a molecule dataset stores charge and
//! valence, and so on), so labels are not fixed structs. A [`Label`] maps
//! attribute names to text-encoded real values exactly as graph-file
//! loaders produce them; parsing to `f64` happens lazily at comparison
//! time via [`Label::numeric`].
//!
//! [`AttributeVector`] is the fully decoded numeric form used by the
//! median solver. It is transient: decoded from labels, consumed, and
//! discarded within a single call.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CostModelError, CostResult};

/// Decoded numeric form of a label: attribute name to finite real value.
///
/// `BTreeMap` keeps key iteration deterministic, so repeated runs over the
/// same input accumulate floating-point sums in the same order.
pub type AttributeVector = BTreeMap<String, f64>;

/// A node or edge label: attribute names mapped to text-encoded reals.
///
/// Key order is irrelevant to all cost computations. Values are kept as
/// text so the same model can sit behind any graph-file format whose
/// loader exposes numeric attributes as parseable strings.
///
/// # Example
///
/// ```
/// use graph_edit_costs::Label;
///
/// let label = Label::from_pairs([("x", "1.5"), ("y", "-2.0")]);
/// assert_eq!(label.numeric("x").unwrap(), 1.5);
/// assert_eq!(label.get("y"), Some("-2.0"));
/// assert!(label.get("z").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label {
    attributes: BTreeMap<String, String>,
}

impl Label {
    /// Creates an empty label (no attributes).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a label from an iterator of key/value pairs.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            attributes: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Sets an attribute, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Returns the raw text value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Returns the parsed numeric value for `key`.
    ///
    /// # Errors
    ///
    /// - [`CostModelError::MissingAttribute`] if the key is absent.
    /// - [`CostModelError::NonNumericAttribute`] if the value does not
    ///   parse as a real number.
    pub fn numeric(&self, key: &str) -> CostResult<f64> {
        let raw = self
            .attributes
            .get(key)
            .ok_or_else(|| CostModelError::MissingAttribute {
                key: key.to_string(),
            })?;
        parse_attribute(key, raw)
    }

    /// Iterates over attribute key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over attribute keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Whether the label carries no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Decodes every attribute into its numeric form.
    ///
    /// # Errors
    ///
    /// [`CostModelError::NonNumericAttribute`] on the first value that
    /// fails to parse.
    pub fn to_attribute_vector(&self) -> CostResult<AttributeVector> {
        self.attributes
            .iter()
            .map(|(key, raw)| Ok((key.clone(), parse_attribute(key, raw)?)))
            .collect()
    }

    /// Re-encodes a numeric vector as a label.
    ///
    /// Values are formatted with Rust's shortest-roundtrip float notation,
    /// so decoding the produced label recovers the exact `f64` values.
    pub fn from_attribute_vector(vector: &AttributeVector) -> Self {
        Self {
            attributes: vector
                .iter()
                .map(|(key, value)| (key.clone(), value.to_string()))
                .collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for Label {
    fn from(attributes: BTreeMap<String, String>) -> Self {
        Self { attributes }
    }
}

impl FromIterator<(String, String)> for Label {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            attributes: iter.into_iter().collect(),
        }
    }
}

/// Parses one attribute value, reporting the offending key on failure.
///
/// Surrounding whitespace is tolerated; graph-file loaders differ on
/// whether they strip it.
pub(crate) fn parse_attribute(key: &str, raw: &str) -> CostResult<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|source| CostModelError::NonNumericAttribute {
            key: key.to_string(),
            value: raw.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pairs_and_get() {
        let label = Label::from_pairs([("x", "3"), ("y", "4")]);
        assert_eq!(label.len(), 2);
        assert_eq!(label.get("x"), Some("3"));
        assert_eq!(label.get("y"), Some("4"));
        assert_eq!(label.get("z"), None);
    }

    #[test]
    fn test_numeric_parses_value() {
        let label = Label::from_pairs([("x", "2.5")]);
        assert_eq!(label.numeric("x").unwrap(), 2.5);
    }

    #[test]
    fn test_numeric_tolerates_whitespace() {
        let label = Label::from_pairs([("x", " 1.25 ")]);
        assert_eq!(label.numeric("x").unwrap(), 1.25);
    }

    #[test]
    fn test_numeric_missing_key() {
        let label = Label::from_pairs([("x", "1")]);
        assert!(matches!(
            label.numeric("y"),
            Err(CostModelError::MissingAttribute { key }) if key == "y"
        ));
    }

    #[test]
    fn test_numeric_non_numeric_value() {
        let label = Label::from_pairs([("x", "abc")]);
        assert!(matches!(
            label.numeric("x"),
            Err(CostModelError::NonNumericAttribute { key, value, .. })
                if key == "x" && value == "abc"
        ));
    }

    #[test]
    fn test_attribute_vector_roundtrip() {
        let label = Label::from_pairs([("a", "0.1"), ("b", "-7"), ("c", "3e2")]);
        let vector = label.to_attribute_vector().unwrap();
        assert_eq!(vector["a"], 0.1);
        assert_eq!(vector["b"], -7.0);
        assert_eq!(vector["c"], 300.0);

        let encoded = Label::from_attribute_vector(&vector);
        let decoded = encoded.to_attribute_vector().unwrap();
        assert_eq!(decoded, vector);
    }

    #[test]
    fn test_to_attribute_vector_reports_bad_value() {
        let label = Label::from_pairs([("a", "1"), ("b", "oops")]);
        assert!(matches!(
            label.to_attribute_vector(),
            Err(CostModelError::NonNumericAttribute { key, .. }) if key == "b"
        ));
    }

    #[test]
    fn test_empty_label() {
        let label = Label::new();
        assert!(label.is_empty());
        assert_eq!(label.len(), 0);
        assert_eq!(label.to_attribute_vector().unwrap(), AttributeVector::new());
    }

    #[test]
    fn test_serde_roundtrip() {
        let label = Label::from_pairs([("x", "1.5"), ("y", "2")]);
        let json = serde_json::to_string(&label).unwrap();
        let restored: Label = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, label);
    }

    #[test]
    fn test_serde_is_plain_map() {
        let label = Label::from_pairs([("x", "1")]);
        let json = serde_json::to_string(&label).unwrap();
        assert_eq!(json, r#"{"x":"1"}"#);
    }
}
