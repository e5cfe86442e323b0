//! Rule metadata export
//!
//! Flattens a validation registry into a [`Summary`] for client-side form
//! rendering. For every rule the exporter collects the values of a fixed set of
//! option names (plus the descriptor's own `extendedOptions`) into a
//! description, renders the message template with the field name and localized
//! labels, and resolves the rule's class label.

use crate::{FieldSummary, LabelTable, RuleSummary, Summary};
use ruleform_validation::{Rule, Validation, ValidatorDescriptor};
use tracing::debug;

/// Option names whose values feed the description, in collection order
pub const DESCRIBED_OPTIONS: &[&str] = &[
    "message",
    "min",
    "max",
    "messageMaximum",
    "messageMinimum",
    "format",
    "maxSize",
    "messageSize",
    "messageType",
    "maxResolution",
    "messageMaxResolution",
    "accepted",
    "domain",
    "pattern",
    "minimum",
    "maximum",
    "with",
];

/// Placeholder replaced with the field name in templates
pub const FIELD_PLACEHOLDER: &str = ":field";

/// Converts a registry into a [`Summary`].
///
/// Description values are joined with `separator`, empty by default so that
/// successive values run together.
#[derive(Debug, Clone, Default)]
pub struct RuleMetadataExporter {
    labels: LabelTable,
    separator: String,
}

impl RuleMetadataExporter {
    pub fn new(labels: LabelTable) -> Self {
        Self {
            labels,
            separator: String::new(),
        }
    }

    /// Join description values with a delimiter instead of running them together
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Export a validation registry; `None` when no rule is registered
    pub fn export(&self, validation: &Validation) -> Option<Summary> {
        self.export_rules(validation.validators())
    }

    /// Export any field → rules sequence; `None` when it is empty
    pub fn export_rules<'a, I>(&self, registry: I) -> Option<Summary>
    where
        I: IntoIterator<Item = (&'a str, &'a [Rule])>,
    {
        let fields: Vec<FieldSummary> = registry
            .into_iter()
            .map(|(field, rules)| FieldSummary {
                field: field.to_string(),
                rules: rules.iter().map(|rule| self.summarize(field, rule)).collect(),
            })
            .collect();

        if fields.is_empty() {
            return None;
        }

        debug!(
            fields = fields.len(),
            rules = fields.iter().map(|f| f.rules.len()).sum::<usize>(),
            "Exported rule metadata"
        );
        Some(Summary { fields })
    }

    /// Summarize one rule of a field
    pub fn summarize(&self, field: &str, rule: &Rule) -> RuleSummary {
        let parent = rule.descriptor();

        let mut parts = describe(parent);
        let mut message = parent
            .template()
            .map(|template| self.render(template, field))
            .unwrap_or_default();

        // Children extend the description; the last child template wins the message.
        // Each child is described with the base list plus its own extendedOptions,
        // never the parent's.
        for child in rule.children() {
            parts.extend(describe(child));
            if let Some(template) = child.template() {
                message = self.render(template, field);
            }
        }

        RuleSummary {
            class: self.labels.class_name(parent.identifier()).to_string(),
            message,
            description: parts.join(&self.separator),
        }
    }

    /// Substitute the field name, then every known identifier with its label
    pub fn render(&self, template: &str, field: &str) -> String {
        self.labels
            .substitute(&template.replace(FIELD_PLACEHOLDER, field))
    }
}

/// Values of the described options present on a descriptor.
///
/// The descriptor's `extendedOptions` names are appended to the fixed list for
/// this descriptor only. Lists render joined with `", "`.
fn describe(descriptor: &ValidatorDescriptor) -> Vec<String> {
    let options = descriptor.options();
    let extended = options.extended_options();

    DESCRIBED_OPTIONS
        .iter()
        .copied()
        .chain(extended.iter().map(String::as_str))
        .filter_map(|name| options.get(name))
        .map(|value| value.to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ruleform_validation::ValidatorKind;

    fn exporter() -> RuleMetadataExporter {
        RuleMetadataExporter::new(LabelTable::russian())
    }

    #[test]
    fn test_empty_registry_is_none() {
        assert_eq!(exporter().export(&Validation::new()), None);
    }

    #[test]
    fn test_bare_rule_has_empty_strings() {
        let rule = Rule::from(ValidatorDescriptor::custom("app::Phone"));
        assert_eq!(
            exporter().summarize("f", &rule),
            RuleSummary {
                class: "app::Phone".to_string(),
                message: String::new(),
                description: String::new(),
            }
        );
    }

    #[test]
    fn test_description_runs_values_together() {
        let rule = Rule::from(ValidatorDescriptor::string_length(3, 10));
        assert_eq!(exporter().summarize("name", &rule).description, "310");
    }

    #[test]
    fn test_separator_joins_values() {
        let rule = Rule::from(
            ValidatorDescriptor::string_length(3, 10).with_option("messageMinimum", "short"),
        );
        let summary = exporter().with_separator("; ").summarize("name", &rule);
        assert_eq!(summary.description, "3; 10; short");
    }

    #[test]
    fn test_described_option_order_is_fixed() {
        // set in reverse; collected in the fixed order
        let rule = Rule::from(
            ValidatorDescriptor::new(ValidatorKind::Between)
                .with_option("maximum", 9)
                .with_option("minimum", 1)
                .with_message("msg"),
        );
        assert_eq!(exporter().summarize("n", &rule).description, "msg19");
    }

    #[test]
    fn test_list_values_and_extended_options() {
        let rule = Rule::from(
            ValidatorDescriptor::inclusion_in(vec!["a", "b"])
                .with_option("currency", "EUR")
                .with_option("ignored", "x")
                .with_extended_options(vec!["currency"]),
        );
        let summary = exporter().summarize("f", &rule);
        assert_eq!(summary.description, "a, bEUR");
        assert_eq!(summary.class, "Входит в лист");
    }

    #[test]
    fn test_template_renders_field_and_labels() {
        let rule = Rule::from(
            ValidatorDescriptor::presence_of()
                .with_template(":field is required by ruleform::PresenceOf (ruleform::PresenceOf)"),
        );
        let summary = exporter().summarize("email", &rule);
        assert_eq!(summary.message, "email is required by Не пусто (Не пусто)");
        assert_eq!(summary.class, "Не пусто");
    }

    #[test]
    fn test_composite_child_template_overrides_parent() {
        let rule = Rule::composite(
            ValidatorDescriptor::custom("app::AllOf")
                .with_option("min", 1)
                .with_template("parent :field"),
            vec![
                ValidatorDescriptor::string_length(2, 5).with_template("first :field"),
                ValidatorDescriptor::regex("/^x/").with_template("last :field"),
                ValidatorDescriptor::email(),
            ],
        );
        let summary = exporter().summarize("code", &rule);
        assert_eq!(summary.message, "last code");
        assert_eq!(summary.description, "125/^x/");
        assert_eq!(summary.class, "app::AllOf");
    }

    #[test]
    fn test_child_does_not_inherit_parent_extended_options() {
        let rule = Rule::composite(
            ValidatorDescriptor::custom("app::Group")
                .with_option("unit", "kg")
                .with_extended_options(vec!["unit"]),
            vec![
                ValidatorDescriptor::custom("app::Weight").with_option("unit", "lb"),
                ValidatorDescriptor::custom("app::Volume")
                    .with_option("unit", "l")
                    .with_extended_options(vec!["unit"]),
            ],
        );
        assert_eq!(exporter().summarize("w", &rule).description, "kgl");
    }
}
