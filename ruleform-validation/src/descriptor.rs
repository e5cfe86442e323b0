// Validator descriptors and rules

use crate::{FormData, OptionValue, Options, ValidatorKind};
use std::fmt;
use std::sync::Arc;

/// Predicate used by `Callback`, `Uniqueness` and custom kinds.
///
/// Receives the (filtered) field value and the full form data; returns `true`
/// when the value is acceptable.
pub type CheckFn = Arc<dyn Fn(&str, &FormData) -> bool + Send + Sync>;

/// One configured rule instance: a kind, its options and an optional template.
#[derive(Clone)]
pub struct ValidatorDescriptor {
    kind: ValidatorKind,
    options: Options,
    template: Option<String>,
    check: Option<CheckFn>,
}

impl ValidatorDescriptor {
    /// Create a descriptor with no options and no template
    pub fn new(kind: ValidatorKind) -> Self {
        Self {
            kind,
            options: Options::new(),
            template: None,
            check: None,
        }
    }

    /// Descriptor for an application-defined kind
    pub fn custom(identifier: impl Into<String>) -> Self {
        Self::new(ValidatorKind::Custom(identifier.into()))
    }

    pub fn presence_of() -> Self {
        Self::new(ValidatorKind::PresenceOf)
    }

    pub fn email() -> Self {
        Self::new(ValidatorKind::Email)
    }

    pub fn url() -> Self {
        Self::new(ValidatorKind::Url)
    }

    pub fn alpha() -> Self {
        Self::new(ValidatorKind::Alpha)
    }

    pub fn alnum() -> Self {
        Self::new(ValidatorKind::Alnum)
    }

    pub fn digit() -> Self {
        Self::new(ValidatorKind::Digit)
    }

    pub fn numericality() -> Self {
        Self::new(ValidatorKind::Numericality)
    }

    pub fn credit_card() -> Self {
        Self::new(ValidatorKind::CreditCard)
    }

    /// String length bounds, counted in characters
    pub fn string_length(min: usize, max: usize) -> Self {
        Self::new(ValidatorKind::StringLength)
            .with_option("min", min)
            .with_option("max", max)
    }

    /// Date in a PHP-style format such as `Y-m-d`
    pub fn date(format: impl Into<String>) -> Self {
        Self::new(ValidatorKind::Date).with_option("format", format.into())
    }

    pub fn between(minimum: impl Into<OptionValue>, maximum: impl Into<OptionValue>) -> Self {
        Self::new(ValidatorKind::Between)
            .with_option("minimum", minimum)
            .with_option("maximum", maximum)
    }

    pub fn identical(accepted: impl Into<OptionValue>) -> Self {
        Self::new(ValidatorKind::Identical).with_option("accepted", accepted)
    }

    pub fn inclusion_in<S: Into<String>>(domain: Vec<S>) -> Self {
        let domain: Vec<String> = domain.into_iter().map(Into::into).collect();
        Self::new(ValidatorKind::InclusionIn).with_option("domain", domain)
    }

    pub fn exclusion_in<S: Into<String>>(domain: Vec<S>) -> Self {
        let domain: Vec<String> = domain.into_iter().map(Into::into).collect();
        Self::new(ValidatorKind::ExclusionIn).with_option("domain", domain)
    }

    /// Pattern match; `/.../` delimiters are accepted
    pub fn regex(pattern: impl Into<String>) -> Self {
        Self::new(ValidatorKind::Regex).with_option("pattern", pattern.into())
    }

    /// Value must equal the value of another field
    pub fn confirmation(with: impl Into<String>) -> Self {
        Self::new(ValidatorKind::Confirmation).with_option("with", with.into())
    }

    /// Uploaded file; constrain it with `maxSize` / `allowedTypes` options
    pub fn file() -> Self {
        Self::new(ValidatorKind::File)
    }

    pub fn callback<F>(check: F) -> Self
    where
        F: Fn(&str, &FormData) -> bool + Send + Sync + 'static,
    {
        Self::new(ValidatorKind::Callback).with_check(check)
    }

    /// Uniqueness delegated to a lookup returning `true` when the value is unused
    pub fn uniqueness<F>(is_unique: F) -> Self
    where
        F: Fn(&str, &FormData) -> bool + Send + Sync + 'static,
    {
        Self::new(ValidatorKind::Uniqueness).with_check(is_unique)
    }

    /// Set an option
    pub fn with_option(mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.set(name, value);
        self
    }

    /// Set the message template
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Set the `message` override option
    pub fn with_message(self, message: impl Into<String>) -> Self {
        self.with_option("message", message.into())
    }

    /// Declare extra option names to include in exported descriptions
    pub fn with_extended_options<S: Into<String>>(self, names: Vec<S>) -> Self {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        self.with_option("extendedOptions", names)
    }

    /// Attach a predicate
    pub fn with_check<F>(mut self, check: F) -> Self
    where
        F: Fn(&str, &FormData) -> bool + Send + Sync + 'static,
    {
        self.check = Some(Arc::new(check));
        self
    }

    pub fn kind(&self) -> &ValidatorKind {
        &self.kind
    }

    pub fn identifier(&self) -> &str {
        self.kind.identifier()
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    pub fn has_option(&self, name: &str) -> bool {
        self.options.has(name)
    }

    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }

    pub fn set_option(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) {
        self.options.set(name, value);
    }

    /// Explicit template; empty templates count as absent
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref().filter(|t| !t.is_empty())
    }

    pub fn check(&self) -> Option<&CheckFn> {
        self.check.as_ref()
    }
}

impl fmt::Debug for ValidatorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatorDescriptor")
            .field("kind", &self.kind)
            .field("options", &self.options)
            .field("template", &self.template)
            .field("check", &self.check.is_some())
            .finish()
    }
}

/// A rule registered for a field.
///
/// Composite rules carry exactly one level of child descriptors.
#[derive(Debug, Clone)]
pub enum Rule {
    Simple(ValidatorDescriptor),
    Composite {
        parent: ValidatorDescriptor,
        children: Vec<ValidatorDescriptor>,
    },
}

impl Rule {
    /// Combine a parent descriptor with child descriptors
    pub fn composite(parent: ValidatorDescriptor, children: Vec<ValidatorDescriptor>) -> Self {
        Rule::Composite { parent, children }
    }

    /// The rule's own descriptor (the parent, for composites)
    pub fn descriptor(&self) -> &ValidatorDescriptor {
        match self {
            Rule::Simple(descriptor) => descriptor,
            Rule::Composite { parent, .. } => parent,
        }
    }

    pub fn descriptor_mut(&mut self) -> &mut ValidatorDescriptor {
        match self {
            Rule::Simple(descriptor) => descriptor,
            Rule::Composite { parent, .. } => parent,
        }
    }

    /// Child descriptors; empty for simple rules
    pub fn children(&self) -> &[ValidatorDescriptor] {
        match self {
            Rule::Simple(_) => &[],
            Rule::Composite { children, .. } => children,
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Rule::Composite { .. })
    }
}

impl From<ValidatorDescriptor> for Rule {
    fn from(descriptor: ValidatorDescriptor) -> Self {
        Rule::Simple(descriptor)
    }
}
