// Exported rule metadata

use serde::{Deserialize, Serialize};

/// Client-facing description of every registered rule
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub fields: Vec<FieldSummary>,
}

/// Rules of one field, in registration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSummary {
    pub field: String,
    pub rules: Vec<RuleSummary>,
}

/// One exported rule; every key is always present, empty when unset
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSummary {
    pub class: String,
    pub message: String,
    pub description: String,
}

impl Summary {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&FieldSummary> {
        self.fields.iter().find(|f| f.field == name)
    }
}
