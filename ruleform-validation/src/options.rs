// Validator option bag

use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A single option value attached to a validator descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<OptionValue>),
}

impl OptionValue {
    /// Borrow the value as a string slice, if it is text
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Interpret the value as a number.
    ///
    /// Text is parsed, booleans map to 0/1, lists have no numeric value.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            OptionValue::Integer(i) => Some(*i as f64),
            OptionValue::Float(f) => Some(*f),
            OptionValue::Text(s) => s.trim().parse().ok(),
            OptionValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            OptionValue::List(_) => None,
        }
    }

    /// Interpret the value as a non-negative length
    pub fn as_usize(&self) -> Option<usize> {
        match self {
            OptionValue::Integer(i) => usize::try_from(*i).ok(),
            OptionValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Truthiness for flag options such as `allowEmpty`
    pub fn is_truthy(&self) -> bool {
        match self {
            OptionValue::Bool(b) => *b,
            OptionValue::Integer(i) => *i != 0,
            OptionValue::Float(f) => *f != 0.0,
            OptionValue::Text(s) => !s.is_empty() && s != "0",
            OptionValue::List(items) => !items.is_empty(),
        }
    }

    /// Flatten the value into a list of strings.
    ///
    /// Scalars become a one-element list.
    pub fn to_string_list(&self) -> Vec<String> {
        match self {
            OptionValue::List(items) => items.iter().map(|v| v.to_string()).collect(),
            other => vec![other.to_string()],
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // false renders as nothing, true as "1"
            OptionValue::Bool(true) => write!(f, "1"),
            OptionValue::Bool(false) => Ok(()),
            OptionValue::Integer(i) => write!(f, "{}", i),
            OptionValue::Float(v) => write!(f, "{}", v),
            OptionValue::Text(s) => write!(f, "{}", s),
            OptionValue::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        OptionValue::Integer(value as i64)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Integer(value)
    }
}

impl From<usize> for OptionValue {
    fn from(value: usize) -> Self {
        OptionValue::Integer(value as i64)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        OptionValue::Float(value)
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(values: Vec<T>) -> Self {
        OptionValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// Ordered key-value bag of validator options.
///
/// Insertion order is kept; setting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    entries: Vec<(String, OptionValue)>,
}

impl Options {
    /// Create an empty option bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether an option is set
    pub fn has(&self, name: &str) -> bool {
        self.entries.iter().any(|(key, _)| key == name)
    }

    /// Get an option value
    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    /// Set an option, replacing any previous value
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Remove an option, returning its value
    pub fn remove(&mut self, name: &str) -> Option<OptionValue> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(OptionValue::as_str)
    }

    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(OptionValue::as_f64)
    }

    pub fn get_usize(&self, name: &str) -> Option<usize> {
        self.get(name).and_then(OptionValue::as_usize)
    }

    /// Flag lookup; unset flags are false
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).is_some_and(OptionValue::is_truthy)
    }

    /// Names listed under `extendedOptions`.
    ///
    /// A single text value counts as a one-name list.
    pub fn extended_options(&self) -> Vec<String> {
        self.get("extendedOptions")
            .map(OptionValue::to_string_list)
            .unwrap_or_default()
    }

    /// Iterate options in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Options {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_in_place() {
        let mut options = Options::new();
        options.set("min", 3);
        options.set("max", 10);
        options.set("min", 5);

        let keys: Vec<&str> = options.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["min", "max"]);
        assert_eq!(options.get_usize("min"), Some(5));
    }

    #[test]
    fn test_display_values() {
        assert_eq!(OptionValue::from(3).to_string(), "3");
        assert_eq!(OptionValue::from(2.5).to_string(), "2.5");
        assert_eq!(OptionValue::from(2.0).to_string(), "2");
        assert_eq!(OptionValue::from(true).to_string(), "1");
        assert_eq!(OptionValue::from(false).to_string(), "");
        assert_eq!(OptionValue::from(vec!["a", "b", "c"]).to_string(), "a, b, c");
    }

    #[test]
    fn test_extended_options_scalar_and_list() {
        let mut options = Options::new();
        assert!(options.extended_options().is_empty());

        options.set("extendedOptions", "currency");
        assert_eq!(options.extended_options(), vec!["currency"]);

        options.set("extendedOptions", vec!["currency", "precision"]);
        assert_eq!(options.extended_options(), vec!["currency", "precision"]);
    }

    #[test]
    fn test_typed_getters() {
        let mut options = Options::new();
        options.set("minimum", "4.5");
        options.set("allowEmpty", true);
        options.set("pattern", "/^a/");

        assert_eq!(options.get_f64("minimum"), Some(4.5));
        assert!(options.flag("allowEmpty"));
        assert!(!options.flag("cancelOnFail"));
        assert_eq!(options.get_str("pattern"), Some("/^a/"));
        assert_eq!(options.get_str("minimum"), Some("4.5"));
    }

    #[test]
    fn test_remove() {
        let mut options = Options::new();
        options.set("with", "password");
        assert_eq!(options.remove("with"), Some(OptionValue::from("password")));
        assert!(options.is_empty());
        assert_eq!(options.remove("with"), None);
    }
}
