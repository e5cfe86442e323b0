//! Request rule registration and rule metadata export for Ruleform
//!
//! An [`ApiRequest`] collects per-field validator descriptors, validates
//! incoming data through the wrapped [`Validation`](ruleform_validation::Validation)
//! engine, and describes its rules to clients so forms can be rendered with
//! matching constraints.
//!
//! # Examples
//!
//! ```
//! use ruleform_request::{ApiRequest, LabelTable, RuleMetadataExporter};
//! use ruleform_validation::ValidatorDescriptor;
//!
//! let mut request = ApiRequest::with_exporter(RuleMetadataExporter::new(LabelTable::english()));
//! request
//!     .add_rule("name", ValidatorDescriptor::presence_of().with_template(":field is required"), None, None)
//!     .add_rule("name", ValidatorDescriptor::string_length(3, 10), None, None);
//!
//! let summary = request.to_summary().unwrap();
//! let rules = &summary.fields[0].rules;
//! assert_eq!(rules[0].class, "Required");
//! assert_eq!(rules[0].message, "name is required");
//! assert_eq!(rules[1].description, "310");
//! ```
//!
//! An empty request exports as `null`:
//!
//! ```
//! use ruleform_request::ApiRequest;
//!
//! assert_eq!(ApiRequest::new().to_json().unwrap(), serde_json::Value::Null);
//! ```

mod api_request;
mod config;
mod error;
mod export;
mod labels;
mod summary;

pub use api_request::{ApiRequest, IntoFormData, RequestRules};
pub use config::{ENV_PREFIX, ExportConfig, SUPPORTED_LOCALES};
pub use error::{RequestError, Result};
pub use export::{DESCRIBED_OPTIONS, FIELD_PLACEHOLDER, RuleMetadataExporter};
pub use labels::{ENGLISH_LABELS, LabelTable, RUSSIAN_LABELS};
pub use summary::{FieldSummary, RuleSummary, Summary};
