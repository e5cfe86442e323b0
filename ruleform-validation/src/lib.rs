//! Validation engine for Ruleform
//!
//! Rules are option-driven validator descriptors registered per field. Each
//! descriptor carries a kind, an ordered option bag and an optional message
//! template, so the same registry can both validate input and be described to
//! clients.
//!
//! # Examples
//!
//! ## Registering and validating
//!
//! ```
//! use ruleform_validation::{FormData, Validation, ValidatorDescriptor};
//!
//! let mut validation = Validation::new();
//! validation
//!     .add("name", ValidatorDescriptor::presence_of())
//!     .add("name", ValidatorDescriptor::string_length(3, 20))
//!     .add("email", ValidatorDescriptor::email());
//!
//! let data = FormData::new()
//!     .with_value("name", "Jo")
//!     .with_value("email", "jo@example.com");
//!
//! let messages = validation.validate(&data);
//! assert_eq!(messages.len(), 1);
//! assert_eq!(messages.for_field("name")[0].kind, "ruleform::StringLength");
//! ```
//!
//! ## Filters
//!
//! ```
//! use ruleform_validation::{FormData, Validation, ValidatorDescriptor};
//!
//! let mut validation = Validation::new();
//! validation.add("email", ValidatorDescriptor::email());
//! validation.set_filters("email", vec!["trim", "lower"]).unwrap();
//!
//! let data = FormData::new().with_value("email", "  Jo@Example.COM ");
//! assert!(validation.validate(&data).is_empty());
//! ```
//!
//! ## Request bodies
//!
//! ```
//! use ruleform_validation::{FormRequest, HttpRequest};
//!
//! let req = HttpRequest::form("POST", "/signup", "name=Jo&email=jo%40example.com");
//! let data = req.post().unwrap();
//! assert_eq!(data.get("email"), Some("jo@example.com"));
//! ```

mod descriptor;
mod error;
mod filters;
mod kind;
mod messages;
mod options;
mod request;
mod validation;
pub mod validators;

pub use descriptor::*;
pub use error::*;
pub use filters::*;
pub use kind::*;
pub use messages::*;
pub use options::*;
pub use request::*;
pub use validation::*;
