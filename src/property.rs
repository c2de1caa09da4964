//! Property records: bounded, ordered name/value lists attached to nodes.
//!
//! Every Arbre node carries two of these, one for generic properties
//! (position, size, visibility) and one for presentation attributes. Both
//! preserve insertion order and refuse entries past their capacity.

use std::fmt;

/// Errors from property list mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PropertyError {
    #[error("property list is full ({capacity} entries), cannot add `{name}`")]
    CapacityExceeded { name: String, capacity: usize },
}

/// A single name/value pair. Values are always strings; see
/// [`format_bool`] for the boolean contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Property {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// Ordered, capacity-bounded list of [`Property`] entries.
///
/// Names are not deduplicated by [`push`](Self::push); use
/// [`set`](Self::set) to overwrite an existing entry in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyList {
    entries: Vec<Property>,
    capacity: usize,
}

impl PropertyList {
    /// Create an empty list that holds at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    /// Append an entry at the end.
    pub fn push(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), PropertyError> {
        let name = name.into();
        if self.entries.len() >= self.capacity {
            return Err(PropertyError::CapacityExceeded {
                name,
                capacity: self.capacity,
            });
        }
        self.entries.push(Property::new(name, value));
        Ok(())
    }

    /// Overwrite the first entry named `name`, or append a new one.
    pub fn set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), PropertyError> {
        let name = name.into();
        match self.entries.iter_mut().find(|p| p.name == name) {
            Some(existing) => {
                existing.value = value.into();
                Ok(())
            }
            None => self.push(name, value),
        }
    }

    /// Value of the first entry named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Remove every entry named `name`. Returns how many were removed.
    pub fn remove(&mut self, name: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|p| p.name != name);
        before - self.entries.len()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Property> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }
}

impl<'a> IntoIterator for &'a PropertyList {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Booleans are stored as `"1"` / `"0"`.
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "1"
    } else {
        "0"
    }
}

/// Absent optional strings are stored as the empty string.
pub fn format_opt(value: Option<&str>) -> &str {
    value.unwrap_or("")
}
