//! Drawing specification loading from JSON

use crate::catalog::{Catalog, FeatureTable};
use crate::io::error::{Result, WithPath, document_error, file_system};
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;
use std::path::Path;

const NAME: &str = "name";
const COUNT: &str = "count";
const FEATURES: &str = "features";

/// Top-level document; keys match regardless of ASCII case and unknown keys
/// are skipped
struct RawSpecification {
    name: String,
    count: i64,
    features: FeatureTable,
}

impl<'de> Deserialize<'de> for RawSpecification {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RawVisitor;

        impl<'de> Visitor<'de> for RawVisitor {
            type Value = RawSpecification;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a specification object")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut name = None;
                let mut count = None;
                let mut features = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.to_ascii_lowercase().as_str() {
                        NAME => set_once::<_, A::Error>(&mut name, NAME, map.next_value()?)?,
                        COUNT => set_once::<_, A::Error>(&mut count, COUNT, map.next_value()?)?,
                        FEATURES => {
                            set_once::<_, A::Error>(&mut features, FEATURES, map.next_value()?)?;
                        }
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                        }
                    }
                }

                Ok(RawSpecification {
                    name: name.ok_or_else(|| de::Error::missing_field(NAME))?,
                    count: count.ok_or_else(|| de::Error::missing_field(COUNT))?,
                    features: features.ok_or_else(|| de::Error::missing_field(FEATURES))?,
                })
            }
        }

        deserializer.deserialize_map(RawVisitor)
    }
}

fn set_once<T, E: de::Error>(
    slot: &mut Option<T>,
    field: &'static str,
    value: T,
) -> std::result::Result<(), E> {
    if slot.is_some() {
        return Err(E::duplicate_field(field));
    }
    *slot = Some(value);
    Ok(())
}

/// A named collection: how many tokens to draw and from which features
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Specification {
    /// Collection name, used in reports
    pub name: String,
    /// Requested number of draws
    pub count: i64,
    /// Features in document order
    pub catalog: Catalog,
}

impl Specification {
    /// Parse a specification document
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The text is not valid JSON
    /// - `name`, `count` or `features` is missing or has the wrong type
    /// - A key is given twice, in any letter case
    /// - A feature or weight is malformed, or a feature or value name repeats
    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw = serde_json::from_str::<RawSpecification>(text).map_err(document_error)?;
        let catalog = Catalog::from_table(raw.features)?;

        Ok(Self {
            name: raw.name,
            count: raw.count,
            catalog,
        })
    }

    /// Read and parse a specification file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails to parse
    pub fn load(path: &Path) -> Result<Self> {
        let text =
            std::fs::read_to_string(path).map_err(|e| file_system(path, "read specification", e))?;
        Self::from_json_str(&text).with_path(path)
    }
}
