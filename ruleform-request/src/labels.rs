//! Localized validator labels
//!
//! A [`LabelTable`] maps validator kind identifiers to display labels. It is
//! used both for the exported `class` of a rule and as a literal find/replace
//! pass over rendered messages.

use crate::{RequestError, Result};
use ruleform_validation::ValidatorKind;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Built-in Russian labels, in replacement order
pub const RUSSIAN_LABELS: &[(&str, &str)] = &[
    ("ruleform::Alnum", "Альфанумеры"),
    ("ruleform::Alpha", "Алфавит"),
    ("ruleform::Date", "Валидная дата"),
    ("ruleform::Digit", "Цифры"),
    ("ruleform::File", "Файл"),
    ("ruleform::Uniqueness", "Уникальное"),
    ("ruleform::Numericality", "Номер"),
    ("ruleform::PresenceOf", "Не пусто"),
    ("ruleform::Identical", "Идентично другому"),
    ("ruleform::Email", "Почта"),
    ("ruleform::ExclusionIn", "Не входит в лист"),
    ("ruleform::InclusionIn", "Входит в лист"),
    ("ruleform::Regex", "Regex"),
    ("ruleform::StringLength", "Определенная длина строки"),
    ("ruleform::Between", "Между двумя значениями"),
    ("ruleform::Confirmation", "Подтверждение другого"),
    ("ruleform::Url", "Валидный URL"),
    ("ruleform::CreditCard", "Кредитная карта"),
    ("ruleform::Callback", "Функция"),
];

/// Built-in English labels, in replacement order
pub const ENGLISH_LABELS: &[(&str, &str)] = &[
    ("ruleform::Alnum", "Alphanumeric"),
    ("ruleform::Alpha", "Alphabetic"),
    ("ruleform::Date", "Valid date"),
    ("ruleform::Digit", "Digits"),
    ("ruleform::File", "File"),
    ("ruleform::Uniqueness", "Unique"),
    ("ruleform::Numericality", "Number"),
    ("ruleform::PresenceOf", "Required"),
    ("ruleform::Identical", "Identical to another"),
    ("ruleform::Email", "Email"),
    ("ruleform::ExclusionIn", "Not in list"),
    ("ruleform::InclusionIn", "In list"),
    ("ruleform::Regex", "Regex"),
    ("ruleform::StringLength", "String length"),
    ("ruleform::Between", "Between two values"),
    ("ruleform::Confirmation", "Confirms another"),
    ("ruleform::Url", "Valid URL"),
    ("ruleform::CreditCard", "Credit card"),
    ("ruleform::Callback", "Function"),
];

/// Ordered identifier → label table
#[derive(Debug, Clone, PartialEq)]
pub struct LabelTable {
    entries: Vec<(String, String)>,
}

impl LabelTable {
    /// Build a table from static pairs
    pub fn from_static(pairs: &[(&str, &str)]) -> Self {
        Self {
            entries: pairs
                .iter()
                .map(|(id, label)| (id.to_string(), label.to_string()))
                .collect(),
        }
    }

    /// Table with no labels: classes stay raw and messages are left untouched
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn russian() -> Self {
        Self::from_static(RUSSIAN_LABELS)
    }

    pub fn english() -> Self {
        Self::from_static(ENGLISH_LABELS)
    }

    /// Built-in table for a locale code such as `ru`, `en` or `en-US`
    pub fn for_locale(locale: &str) -> Option<Self> {
        let language = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match language.as_str() {
            "ru" => Some(Self::russian()),
            "en" => Some(Self::english()),
            _ => None,
        }
    }

    /// Parse a flat JSON object of identifier → label.
    ///
    /// Entries keep the object's key order, which is also the replacement
    /// order of [`substitute`](Self::substitute).
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(RequestError::Serialization)
    }

    /// Set or replace a label; new identifiers are appended
    pub fn with_label(mut self, identifier: impl Into<String>, label: impl Into<String>) -> Self {
        self.set(identifier, label);
        self
    }

    pub fn set(&mut self, identifier: impl Into<String>, label: impl Into<String>) {
        let identifier = identifier.into();
        let label = label.into();
        match self.entries.iter_mut().find(|(id, _)| *id == identifier) {
            Some(entry) => entry.1 = label,
            None => self.entries.push((identifier, label)),
        }
    }

    /// Label for an identifier
    pub fn label(&self, identifier: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(id, _)| id == identifier)
            .map(|(_, label)| label.as_str())
    }

    /// Label for a kind
    pub fn label_for(&self, kind: &ValidatorKind) -> Option<&str> {
        self.label(kind.identifier())
    }

    /// Label if known, else the identifier itself
    pub fn class_name<'a>(&'a self, identifier: &'a str) -> &'a str {
        self.label(identifier).unwrap_or(identifier)
    }

    /// Replace every literal identifier occurrence with its label, in table order
    pub fn substitute(&self, text: &str) -> String {
        self.entries
            .iter()
            .fold(text.to_string(), |acc, (id, label)| acc.replace(id.as_str(), label))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(id, label)| (id.as_str(), label.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LabelTable {
    fn default() -> Self {
        Self::russian()
    }
}

impl Serialize for LabelTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_map(self.iter())
    }
}

struct LabelTableVisitor;

impl<'de> Visitor<'de> for LabelTableVisitor {
    type Value = LabelTable;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of validator identifiers to labels")
    }

    fn visit_map<M>(self, mut access: M) -> std::result::Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut table = LabelTable::empty();
        while let Some((identifier, label)) = access.next_entry::<String, String>()? {
            table.set(identifier, label);
        }
        Ok(table)
    }
}

/// Deserializes from a map, keeping entries in document order
impl<'de> Deserialize<'de> for LabelTable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(LabelTableVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_cover_every_kind() {
        for table in [LabelTable::russian(), LabelTable::english()] {
            assert_eq!(table.len(), 19);
            for kind in ValidatorKind::BUILTIN.iter() {
                assert!(table.label_for(kind).is_some(), "missing {}", kind);
            }
        }
    }

    #[test]
    fn test_class_name_falls_back_to_identifier() {
        let table = LabelTable::russian();
        assert_eq!(table.class_name("ruleform::PresenceOf"), "Не пусто");
        assert_eq!(table.class_name("app::Phone"), "app::Phone");
    }

    #[test]
    fn test_substitute_is_literal_and_case_sensitive() {
        let table = LabelTable::english();
        assert_eq!(
            table.substitute("ruleform::Email or ruleform::Email, not RULEFORM::EMAIL"),
            "Email or Email, not RULEFORM::EMAIL"
        );
        assert_eq!(table.substitute("a.b*c"), "a.b*c");
    }

    #[test]
    fn test_for_locale() {
        assert_eq!(LabelTable::for_locale("ru"), Some(LabelTable::russian()));
        assert_eq!(LabelTable::for_locale("en-US"), Some(LabelTable::english()));
        assert_eq!(LabelTable::for_locale("EN_gb"), Some(LabelTable::english()));
        assert_eq!(LabelTable::for_locale("de"), None);
    }

    #[test]
    fn test_overrides_and_json() {
        let table = LabelTable::english()
            .with_label("ruleform::Email", "E-mail address")
            .with_label("app::Phone", "Phone");
        assert_eq!(table.len(), 20);
        assert_eq!(table.label("ruleform::Email"), Some("E-mail address"));
        assert_eq!(table.label("app::Phone"), Some("Phone"));

        let parsed = LabelTable::from_json(r#"{"app::Phone": "Телефон"}"#).unwrap();
        assert_eq!(parsed.label("app::Phone"), Some("Телефон"));
        assert!(LabelTable::from_json("[]").is_err());
    }

    #[test]
    fn test_json_keeps_document_order() {
        let table = LabelTable::from_json(r#"{"app::FooBar": "X", "app::Foo": "Y"}"#).unwrap();
        let ids: Vec<&str> = table.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["app::FooBar", "app::Foo"]);

        // the longer identifier comes first, so the shorter one cannot split it
        assert_eq!(table.substitute("app::FooBar and app::Foo"), "X and Y");
    }

    #[test]
    fn test_serialize_round_trips_order() {
        let table = LabelTable::empty()
            .with_label("app::Zeta", "Z")
            .with_label("app::Alpha", "A");
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"app::Zeta":"Z","app::Alpha":"A"}"#);
    }

    #[test]
    fn test_default_is_russian() {
        assert_eq!(LabelTable::default().label("ruleform::Email"), Some("Почта"));
    }
}
