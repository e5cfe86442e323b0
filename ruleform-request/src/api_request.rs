//! Rule registration facade
//!
//! [`ApiRequest`] wraps a [`Validation`] registry. Rules and filters are
//! registered through it, input is validated by delegating to the engine, and
//! the registered rules can be exported as a [`Summary`] for clients.

use crate::{ExportConfig, Result, RuleMetadataExporter, Summary};
use ruleform_validation::{
    Filter, FormData, FormRequest, IntoFilters, MessageGroup, Rule, Validation,
};
use std::collections::HashMap;
use tracing::debug;

/// Input accepted by [`ApiRequest::validate`]
pub trait IntoFormData {
    fn into_form_data(self) -> ruleform_validation::Result<FormData>;
}

impl IntoFormData for FormData {
    fn into_form_data(self) -> ruleform_validation::Result<FormData> {
        Ok(self)
    }
}

impl IntoFormData for HashMap<String, String> {
    fn into_form_data(self) -> ruleform_validation::Result<FormData> {
        Ok(FormData::from(self))
    }
}

impl<R: FormRequest + ?Sized> IntoFormData for &R {
    fn into_form_data(self) -> ruleform_validation::Result<FormData> {
        self.post()
    }
}

/// Declares the rules of a request type.
///
/// ```
/// use ruleform_request::{ApiRequest, RequestRules};
/// use ruleform_validation::ValidatorDescriptor;
///
/// struct SignupRequest;
///
/// impl RequestRules for SignupRequest {
///     fn initialize(request: &mut ApiRequest) {
///         request
///             .add_rule("email", ValidatorDescriptor::presence_of(), None, None)
///             .add_rule("email", ValidatorDescriptor::email(), Some("Bad email"), None);
///     }
/// }
///
/// let request = ApiRequest::from_rules::<SignupRequest>();
/// assert_eq!(request.validation().rules_for("email").len(), 2);
/// ```
pub trait RequestRules {
    /// Register rules and filters
    fn initialize(request: &mut ApiRequest);

    /// Exporter used by requests built from these rules
    fn exporter() -> RuleMetadataExporter {
        RuleMetadataExporter::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApiRequest {
    validation: Validation,
    exporter: RuleMetadataExporter,
}

impl ApiRequest {
    /// Empty request with the default (Russian) exporter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exporter(exporter: RuleMetadataExporter) -> Self {
        Self {
            validation: Validation::new(),
            exporter,
        }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::with_exporter(config.exporter())
    }

    /// Build a request and run its rule setup
    pub fn from_rules<R: RequestRules>() -> Self {
        let mut request = Self::with_exporter(R::exporter());
        R::initialize(&mut request);
        request
    }

    /// Register a rule for a field.
    ///
    /// `description` fills the rule's `description` option unless it already
    /// sets one; for composites it applies to the parent. `message` is accepted
    /// for call-site compatibility and leaves the rule untouched, so exported
    /// descriptions only reflect options set on the descriptor itself.
    pub fn add_rule(
        &mut self,
        field: impl Into<String>,
        rule: impl Into<Rule>,
        _message: Option<&str>,
        description: Option<&str>,
    ) -> &mut Self {
        let mut rule = rule.into();
        let descriptor = rule.descriptor_mut();

        if let Some(description) = description
            && !descriptor.has_option("description")
        {
            descriptor.set_option("description", description);
        }

        self.validation.add(field, rule);
        self
    }

    /// Set a field's filters, replacing any previous ones
    pub fn add_filter(
        &mut self,
        field: impl Into<String>,
        filters: impl IntoFilters,
    ) -> Result<&mut Self> {
        self.validation.set_filters(field, filters)?;
        Ok(self)
    }

    /// Filters of one field, or of every field
    pub fn filters(&self, field: Option<&str>) -> Vec<(&str, &[Filter])> {
        self.validation.filters(field)
    }

    /// Validate a field map or a request's posted data.
    ///
    /// Errors only when the input cannot be read; rule failures are in the
    /// returned group.
    pub fn validate(&self, input: impl IntoFormData) -> Result<MessageGroup> {
        let data = input.into_form_data()?;
        let messages = self.validation.validate(&data);
        debug!(
            fields = data.values().len(),
            failures = messages.len(),
            "Validated request input"
        );
        Ok(messages)
    }

    pub fn validation(&self) -> &Validation {
        &self.validation
    }

    pub fn validation_mut(&mut self) -> &mut Validation {
        &mut self.validation
    }

    pub fn set_validation(&mut self, validation: Validation) -> &mut Self {
        self.validation = validation;
        self
    }

    pub fn exporter(&self) -> &RuleMetadataExporter {
        &self.exporter
    }

    pub fn set_exporter(&mut self, exporter: RuleMetadataExporter) -> &mut Self {
        self.exporter = exporter;
        self
    }

    /// Registered rules as metadata; `None` when nothing is registered
    pub fn to_summary(&self) -> Option<Summary> {
        self.exporter.export(&self.validation)
    }

    /// Registered rules as JSON; `null` when nothing is registered
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self.to_summary())?)
    }
}
