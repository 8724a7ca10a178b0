use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// One realized combination of feature values and the draws that produced it
///
/// Two vectors describe the same combination iff their keys are equal,
/// including feature order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vector {
    key: Vec<(String, String)>,
    count: usize,
}

impl Vector {
    /// Create a vector from `(feature, value)` pairs in catalog order
    pub const fn new(key: Vec<(String, String)>, count: usize) -> Self {
        Self { key, count }
    }

    /// Vector with no features yet, standing for `count` pending draws
    pub const fn empty(count: usize) -> Self {
        Self::new(Vec::new(), count)
    }

    /// `(feature, value)` pairs in catalog order
    pub fn key(&self) -> &[(String, String)] {
        &self.key
    }

    /// Number of draws that collapsed into this combination
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Whether more than one draw landed on this combination
    pub const fn is_duplicate(&self) -> bool {
        self.count > 1
    }

    /// Value chosen for `feature`, if the key covers it
    pub fn value_of(&self, feature: &str) -> Option<&str> {
        self.key
            .iter()
            .find(|(name, _)| name == feature)
            .map(|(_, value)| value.as_str())
    }

    /// Copy of this key with one more feature appended, carrying `count` draws
    pub fn extended(&self, feature: &str, value: &str, count: usize) -> Self {
        let mut key = Vec::with_capacity(self.key.len() + 1);
        key.extend(self.key.iter().cloned());
        key.push((feature.to_string(), value.to_string()));
        Self::new(key, count)
    }

    /// The key repeated once per draw
    pub fn draws(&self) -> impl Iterator<Item = &[(String, String)]> + '_ {
        std::iter::repeat_n(self.key.as_slice(), self.count)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (_, value)) in self.key.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            f.write_str(value)?;
        }
        write!(f, ":{}", self.count)
    }
}

// Serialized as a flat `feature -> value` object; the count is expressed by
// repetition in the token file, not inside the object.
impl Serialize for Vector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.key.len()))?;
        for (feature, value) in &self.key {
            map.serialize_entry(feature, value)?;
        }
        map.end()
    }
}
