// Ruleform - self-describing request validation
//
// Register validators per request field, validate incoming form data, and
// export the registered rules as localized metadata for client-side forms.

// Re-export the request facade and exporter
pub use ruleform_request::*;

// Re-export the validation engine
pub use ruleform_validation as validation;

#[cfg(feature = "config")]
pub use ruleform_config;

// Prelude for common imports
pub mod prelude {
    pub use crate::{
        ApiRequest, ExportConfig, LabelTable, RequestError, RequestRules, RuleMetadataExporter,
        Summary,
    };
    pub use ruleform_validation::{
        Filter, FormData, FormRequest, HttpRequest, MessageGroup, Rule, Validation,
        ValidatorDescriptor, ValidatorKind,
    };
}
