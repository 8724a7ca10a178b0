use crate::catalog::feature::{Feature, FeatureValue};
use crate::io::error::{Result, document_error, malformed};
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;

/// Object entries in document order, repeated keys included
#[derive(Debug)]
struct Entries<T>(Vec<(String, T)>);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Entries<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for EntriesVisitor<T> {
            type Value = Entries<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("an object")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, T>()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

/// The `features` object of a specification exactly as written
///
/// Maps feature names to objects of value weights. Unlike a JSON map, it
/// keeps repeated keys so [`Catalog::from_table`] can reject them.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct FeatureTable(Entries<Entries<u32>>);

/// Ordered, immutable set of features driving a drawing run
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    features: Vec<Feature>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate feature names
    ///
    /// # Errors
    ///
    /// Returns `MalformedSpecification` if two features share a name
    pub fn new(features: Vec<Feature>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(features.len());
        for feature in &features {
            if !seen.insert(feature.name()) {
                return Err(malformed(&format!(
                    "feature '{}' is declared more than once",
                    feature.name()
                )));
            }
        }

        Ok(Self { features })
    }

    /// Build a catalog from a parsed `features` table
    ///
    /// # Errors
    ///
    /// Returns `MalformedSpecification` if a feature name repeats, or a
    /// value name repeats within one feature
    pub fn from_table(table: FeatureTable) -> Result<Self> {
        let mut features = Vec::with_capacity(table.0.0.len());
        for (name, Entries(weights)) in table.0.0 {
            let mut seen = HashSet::with_capacity(weights.len());
            for (value, _) in &weights {
                if !seen.insert(value.as_str()) {
                    return Err(malformed(&format!(
                        "value '{name}:{value}' is declared more than once"
                    )));
                }
            }

            let values = weights
                .into_iter()
                .map(|(value, weight)| FeatureValue::new(value, weight))
                .collect();
            features.push(Feature::new(name, values));
        }

        Self::new(features)
    }

    /// Build a catalog from an already parsed `features` value
    ///
    /// The expected shape is `{ <feature>: { <value>: weight, ... }, ... }`.
    /// A `Value` keeps one entry per key, so repeated names are only caught
    /// by [`Self::from_json_str`].
    ///
    /// # Errors
    ///
    /// Returns `MalformedSpecification` if the value is not an object of
    /// objects, or if a weight is not a non-negative integer within `u32`
    pub fn from_json(features: &Value) -> Result<Self> {
        let table = FeatureTable::deserialize(features).map_err(|e| malformed(&e))?;
        Self::from_table(table)
    }

    /// Parse a `features` object from JSON text
    ///
    /// Document order is kept for both features and values.
    ///
    /// # Errors
    ///
    /// Returns `Json` if the text is not JSON, and `MalformedSpecification`
    /// for a wrong shape, a bad weight or a repeated name
    pub fn from_json_str(text: &str) -> Result<Self> {
        let table = serde_json::from_str::<FeatureTable>(text).map_err(document_error)?;
        Self::from_table(table)
    }

    /// Features in drawing order
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Look up a feature by name
    pub fn feature(&self, name: &str) -> Option<&Feature> {
        self.features.iter().find(|f| f.name() == name)
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the catalog has no features
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
