// Validator kinds

use std::fmt;

/// Category of a validation rule.
///
/// Every kind has a stable identifier (`ruleform::PresenceOf`, ...) that is
/// used for label lookup and may appear verbatim in message templates.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValidatorKind {
    Alnum,
    Alpha,
    Date,
    Digit,
    File,
    Uniqueness,
    Numericality,
    PresenceOf,
    Identical,
    Email,
    ExclusionIn,
    InclusionIn,
    Regex,
    StringLength,
    Between,
    Confirmation,
    Url,
    CreditCard,
    Callback,
    /// Application-defined kind, identified by its own string
    Custom(String),
}

impl ValidatorKind {
    /// All built-in kinds, in label-table order
    pub const BUILTIN: [ValidatorKind; 19] = [
        ValidatorKind::Alnum,
        ValidatorKind::Alpha,
        ValidatorKind::Date,
        ValidatorKind::Digit,
        ValidatorKind::File,
        ValidatorKind::Uniqueness,
        ValidatorKind::Numericality,
        ValidatorKind::PresenceOf,
        ValidatorKind::Identical,
        ValidatorKind::Email,
        ValidatorKind::ExclusionIn,
        ValidatorKind::InclusionIn,
        ValidatorKind::Regex,
        ValidatorKind::StringLength,
        ValidatorKind::Between,
        ValidatorKind::Confirmation,
        ValidatorKind::Url,
        ValidatorKind::CreditCard,
        ValidatorKind::Callback,
    ];

    /// Stable identifier of the kind
    pub fn identifier(&self) -> &str {
        match self {
            ValidatorKind::Alnum => "ruleform::Alnum",
            ValidatorKind::Alpha => "ruleform::Alpha",
            ValidatorKind::Date => "ruleform::Date",
            ValidatorKind::Digit => "ruleform::Digit",
            ValidatorKind::File => "ruleform::File",
            ValidatorKind::Uniqueness => "ruleform::Uniqueness",
            ValidatorKind::Numericality => "ruleform::Numericality",
            ValidatorKind::PresenceOf => "ruleform::PresenceOf",
            ValidatorKind::Identical => "ruleform::Identical",
            ValidatorKind::Email => "ruleform::Email",
            ValidatorKind::ExclusionIn => "ruleform::ExclusionIn",
            ValidatorKind::InclusionIn => "ruleform::InclusionIn",
            ValidatorKind::Regex => "ruleform::Regex",
            ValidatorKind::StringLength => "ruleform::StringLength",
            ValidatorKind::Between => "ruleform::Between",
            ValidatorKind::Confirmation => "ruleform::Confirmation",
            ValidatorKind::Url => "ruleform::Url",
            ValidatorKind::CreditCard => "ruleform::CreditCard",
            ValidatorKind::Callback => "ruleform::Callback",
            ValidatorKind::Custom(id) => id,
        }
    }

    /// Resolve an identifier back to a kind; unknown identifiers become `Custom`
    pub fn from_identifier(identifier: &str) -> Self {
        Self::BUILTIN
            .iter()
            .find(|kind| kind.identifier() == identifier)
            .cloned()
            .unwrap_or_else(|| ValidatorKind::Custom(identifier.to_string()))
    }

    /// Message used when neither a `message` option nor a template is set
    pub fn default_template(&self) -> &'static str {
        match self {
            ValidatorKind::Alnum => "Field :field must contain only letters and numbers",
            ValidatorKind::Alpha => "Field :field must contain only letters",
            ValidatorKind::Date => "Field :field is not a valid date",
            ValidatorKind::Digit => "Field :field must be numeric",
            ValidatorKind::File => "Field :field must be a valid file",
            ValidatorKind::Uniqueness => "Field :field must be unique",
            ValidatorKind::Numericality => "Field :field does not have a valid numeric format",
            ValidatorKind::PresenceOf => "Field :field is required",
            ValidatorKind::Identical => "Field :field does not have the expected value",
            ValidatorKind::Email => "Field :field must be an email address",
            ValidatorKind::ExclusionIn => "Field :field must not be a part of list: :domain",
            ValidatorKind::InclusionIn => "Field :field must be a part of list: :domain",
            ValidatorKind::Regex => "Field :field does not match the required format",
            ValidatorKind::StringLength => "Field :field has an invalid length",
            ValidatorKind::Between => "Field :field must be within the range of :minimum to :maximum",
            ValidatorKind::Confirmation => "Field :field must be the same as :with",
            ValidatorKind::Url => "Field :field must be a url",
            ValidatorKind::CreditCard => "Field :field is not valid for a credit card number",
            ValidatorKind::Callback | ValidatorKind::Custom(_) => "Field :field must match the callback function",
        }
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}
