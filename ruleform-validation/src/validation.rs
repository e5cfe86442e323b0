// Validation registry

use crate::filters::{IntoFilters, apply_filters};
use crate::validators::check_descriptor;
use crate::{Filter, FormData, Message, MessageGroup, Result, Rule};
use tracing::debug;

/// Field → ordered rules registry plus per-field filters.
///
/// Fields keep the order of their first registration; rules keep registration
/// order within a field.
#[derive(Debug, Clone, Default)]
pub struct Validation {
    rules: Vec<(String, Vec<Rule>)>,
    filters: Vec<(String, Vec<Filter>)>,
}

impl Validation {
    /// Create an empty validation
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule to a field
    pub fn add(&mut self, field: impl Into<String>, rule: impl Into<Rule>) -> &mut Self {
        let field = field.into();
        let rule = rule.into();
        debug!(field = %field, kind = %rule.descriptor().kind(), "Adding validation rule");

        match self.rules.iter_mut().find(|(name, _)| *name == field) {
            Some((_, rules)) => rules.push(rule),
            None => self.rules.push((field, vec![rule])),
        }
        self
    }

    /// Registered rules per field, in registration order
    pub fn validators(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.rules
            .iter()
            .map(|(field, rules)| (field.as_str(), rules.as_slice()))
    }

    /// Rules for a single field
    pub fn rules_for(&self, field: &str) -> &[Rule] {
        self.rules
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, rules)| rules.as_slice())
            .unwrap_or(&[])
    }

    /// Check whether any rule is registered
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Replace the filters of a field
    pub fn set_filters(&mut self, field: impl Into<String>, filters: impl IntoFilters) -> Result<&mut Self> {
        let field = field.into();
        let filters = filters.into_filters()?;
        debug!(field = %field, count = filters.len(), "Setting field filters");

        match self.filters.iter_mut().find(|(name, _)| *name == field) {
            Some((_, existing)) => *existing = filters,
            None => self.filters.push((field, filters)),
        }
        Ok(self)
    }

    /// Filters of one field (`Some`) or of every field (`None`)
    pub fn filters(&self, field: Option<&str>) -> Vec<(&str, &[Filter])> {
        self.filters
            .iter()
            .filter(|(name, _)| field.is_none_or(|f| f == name.as_str()))
            .map(|(name, filters)| (name.as_str(), filters.as_slice()))
            .collect()
    }

    fn filters_for(&self, field: &str) -> &[Filter] {
        self.filters
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, filters)| filters.as_slice())
            .unwrap_or(&[])
    }

    /// Filtered value of a field, `None` if absent from the data
    pub fn value(&self, field: &str, data: &FormData) -> Option<String> {
        data.get(field)
            .map(|raw| apply_filters(self.filters_for(field), raw))
    }

    /// Validate form data against every registered rule
    pub fn validate(&self, data: &FormData) -> MessageGroup {
        let mut group = MessageGroup::default();

        for (field, rules) in &self.rules {
            let value = self.value(field, data);

            for rule in rules {
                let failures = check_rule(rule, field, value.as_deref(), data);
                let failed = !failures.is_empty();
                for message in failures {
                    group.push(message);
                }

                if failed && rule.descriptor().options().flag("cancelOnFail") {
                    debug!(field = %field, "Cancelling remaining rules after failure");
                    break;
                }
            }
        }

        debug!(
            fields = self.rules.len(),
            failures = group.len(),
            "Validation finished"
        );
        group
    }
}

/// Composite rules run the parent check, then every child
fn check_rule(rule: &Rule, field: &str, value: Option<&str>, data: &FormData) -> Vec<Message> {
    std::iter::once(rule.descriptor())
        .chain(rule.children())
        .filter_map(|descriptor| check_descriptor(descriptor, field, value, data).err())
        .collect()
}
