// Built-in validator checks

use crate::{FormData, Message, ValidatorDescriptor, ValidatorKind};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{trace, warn};

// Common regex patterns
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$").unwrap()
});

static URL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());

static ALPHA_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

static ALPHANUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9]+$").unwrap());

static DIGIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

static NUMERIC_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?\d+(?:[.,]\d+)?$").unwrap());

const DEFAULT_DATE_FORMAT: &str = "Y-m-d";

/// Outcome of a single check: which message option and default apply on failure
struct Failure {
    message_option: Option<&'static str>,
    default_template: Option<&'static str>,
}

impl Failure {
    fn generic() -> Self {
        Self {
            message_option: None,
            default_template: None,
        }
    }

    fn specific(message_option: &'static str, default_template: &'static str) -> Self {
        Self {
            message_option: Some(message_option),
            default_template: Some(default_template),
        }
    }
}

/// Run one descriptor against a field value.
///
/// `value` is the filtered value, `None` when the field is absent.
pub fn check_descriptor(
    descriptor: &ValidatorDescriptor,
    field: &str,
    value: Option<&str>,
    data: &FormData,
) -> Result<(), Message> {
    let options = descriptor.options();
    let is_empty = value.is_none_or(|v| v.is_empty());
    let kind = descriptor.kind();

    if is_empty && options.flag("allowEmpty") && *kind != ValidatorKind::PresenceOf {
        trace!(field = %field, kind = %kind, "Skipping empty value");
        return Ok(());
    }

    trace!(field = %field, kind = %kind, "Checking field");

    let text = value.unwrap_or("");
    let outcome = match kind {
        ValidatorKind::PresenceOf => pass_if(!text.trim().is_empty()),
        ValidatorKind::Alnum => pass_if(ALPHANUMERIC_REGEX.is_match(text)),
        ValidatorKind::Alpha => pass_if(ALPHA_REGEX.is_match(text)),
        ValidatorKind::Digit => pass_if(DIGIT_REGEX.is_match(text)),
        ValidatorKind::Numericality => pass_if(NUMERIC_REGEX.is_match(text)),
        ValidatorKind::Email => pass_if(EMAIL_REGEX.is_match(text)),
        ValidatorKind::Url => pass_if(URL_REGEX.is_match(text)),
        ValidatorKind::CreditCard => pass_if(luhn(text)),
        ValidatorKind::Date => {
            let format = options.get_str("format").unwrap_or(DEFAULT_DATE_FORMAT);
            pass_if(is_valid_date(text, format))
        }
        ValidatorKind::Identical => {
            let accepted = options.get("accepted").or_else(|| options.get("value"));
            pass_if(accepted.is_some_and(|expected| expected.to_string() == text))
        }
        ValidatorKind::InclusionIn => {
            let domain = options
                .get("domain")
                .map(|d| d.to_string_list())
                .unwrap_or_default();
            pass_if(domain.iter().any(|item| item == text))
        }
        ValidatorKind::ExclusionIn => {
            let domain = options
                .get("domain")
                .map(|d| d.to_string_list())
                .unwrap_or_default();
            pass_if(!domain.iter().any(|item| item == text))
        }
        ValidatorKind::Regex => match options.get_str("pattern").map(compile_pattern) {
            Some(Ok(regex)) => pass_if(matches_whole(&regex, text)),
            Some(Err(e)) => {
                warn!(field = %field, error = %e, "Invalid regex pattern");
                Err(Failure::generic())
            }
            None => Err(Failure::generic()),
        },
        ValidatorKind::StringLength => check_length(descriptor, text),
        ValidatorKind::Between => {
            let number: Option<f64> = text.trim().parse().ok();
            let minimum = options.get_f64("minimum");
            let maximum = options.get_f64("maximum");
            pass_if(number.is_some_and(|n| {
                minimum.is_none_or(|min| n >= min) && maximum.is_none_or(|max| n <= max)
            }))
        }
        ValidatorKind::Confirmation => {
            let other = options.get_str("with").and_then(|with| data.get(with));
            let matches = match other {
                Some(other) if options.flag("ignoreCase") => other.to_lowercase() == text.to_lowercase(),
                Some(other) => other == text,
                None => false,
            };
            pass_if(matches)
        }
        ValidatorKind::File => check_file(descriptor, field, data),
        ValidatorKind::Callback | ValidatorKind::Uniqueness | ValidatorKind::Custom(_) => {
            pass_if(descriptor.check().is_none_or(|check| check(text, data)))
        }
    };

    outcome.map_err(|failure| {
        let mut message = Message::new(field, render(descriptor, field, &failure))
            .with_kind(descriptor.identifier());
        if let Some(v) = value {
            message = message.with_value(v);
        }
        message
    })
}

fn pass_if(ok: bool) -> Result<(), Failure> {
    if ok { Ok(()) } else { Err(Failure::generic()) }
}

fn check_length(descriptor: &ValidatorDescriptor, text: &str) -> Result<(), Failure> {
    let options = descriptor.options();
    let length = text.chars().count();

    if let Some(max) = options.get_usize("max") {
        if length > max {
            return Err(Failure::specific(
                "messageMaximum",
                "Field :field must not exceed :max characters long",
            ));
        }
    }
    if let Some(min) = options.get_usize("min") {
        if length < min {
            return Err(Failure::specific(
                "messageMinimum",
                "Field :field must be at least :min characters long",
            ));
        }
    }
    Ok(())
}

fn check_file(descriptor: &ValidatorDescriptor, field: &str, data: &FormData) -> Result<(), Failure> {
    let options = descriptor.options();
    let Some(file) = data.file(field) else {
        return Err(Failure::generic());
    };

    if let Some(limit) = options.get("maxSize").and_then(|v| parse_size(&v.to_string())) {
        if file.exceeds_size(limit) {
            return Err(Failure::specific(
                "messageSize",
                "File :field exceeds the max filesize of :maxSize",
            ));
        }
    }

    if let Some(allowed) = options.get("allowedTypes") {
        let allowed = allowed.to_string_list();
        if !allowed.iter().any(|t| t.eq_ignore_ascii_case(&file.content_type)) {
            return Err(Failure::specific(
                "messageType",
                "File :field must be of type: :allowedTypes",
            ));
        }
    }

    Ok(())
}

/// Resolve and render the failure message.
///
/// Precedence: specific message option, `message` option, template, specific
/// default, kind default. `:field` becomes the `label` option or the field name;
/// `:<option>` placeholders become option values.
fn render(descriptor: &ValidatorDescriptor, field: &str, failure: &Failure) -> String {
    let options = descriptor.options();
    let template = failure
        .message_option
        .and_then(|name| options.get(name))
        .or_else(|| options.get("message"))
        .map(|v| v.to_string())
        .or_else(|| descriptor.template().map(str::to_string))
        .or_else(|| failure.default_template.map(str::to_string))
        .unwrap_or_else(|| descriptor.kind().default_template().to_string());

    let label = options
        .get("label")
        .map(|v| v.to_string())
        .unwrap_or_else(|| field.to_string());
    let mut message = template.replace(":field", &label);

    // Longest names first so `:min` does not clobber `:minimum`
    let mut names: Vec<(&str, String)> = options
        .iter()
        .map(|(name, value)| (name, value.to_string()))
        .collect();
    names.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    for (name, value) in names {
        message = message.replace(&format!(":{}", name), &value);
    }
    message
}

/// Compile a pattern, accepting `/.../flags` delimiters
pub fn compile_pattern(pattern: &str) -> Result<Regex, regex::Error> {
    let delimited = pattern
        .strip_prefix('/')
        .and_then(|rest| rest.rfind('/').map(|end| (&rest[..end], &rest[end + 1..])));

    match delimited {
        Some((body, flags)) => {
            let inline: String = flags.chars().filter(|c| matches!(c, 'i' | 'm' | 's' | 'x')).collect();
            if inline.is_empty() {
                Regex::new(body)
            } else {
                Regex::new(&format!("(?{}){}", inline, body))
            }
        }
        None => Regex::new(pattern),
    }
}

/// The first match must cover the whole value
fn matches_whole(regex: &Regex, text: &str) -> bool {
    regex.find(text).is_some_and(|m| m.as_str() == text)
}

/// Translate a PHP-style date format into a chrono format string
pub fn chrono_format(format: &str) -> String {
    let mut out = String::with_capacity(format.len() * 2);
    for c in format.chars() {
        match c {
            'Y' => out.push_str("%Y"),
            'y' => out.push_str("%y"),
            'm' | 'n' => out.push_str("%m"),
            'd' | 'j' => out.push_str("%d"),
            'H' | 'G' => out.push_str("%H"),
            'i' => out.push_str("%M"),
            's' => out.push_str("%S"),
            'D' => out.push_str("%a"),
            'M' => out.push_str("%b"),
            '%' => out.push_str("%%"),
            other => out.push(other),
        }
    }
    out
}

fn is_valid_date(text: &str, format: &str) -> bool {
    let format = chrono_format(format);
    NaiveDateTime::parse_from_str(text, &format).is_ok()
        || NaiveDate::parse_from_str(text, &format).is_ok()
        || NaiveTime::parse_from_str(text, &format).is_ok()
}

/// Parse sizes like `512`, `2K`, `2M`, `1G`, `10MB`
pub fn parse_size(size: &str) -> Option<usize> {
    let size = size.trim().to_ascii_uppercase();
    let size = size.strip_suffix('B').unwrap_or(&size);
    let (number, multiplier) = match size.chars().last()? {
        'K' => (&size[..size.len() - 1], 1024f64),
        'M' => (&size[..size.len() - 1], 1024f64 * 1024.0),
        'G' => (&size[..size.len() - 1], 1024f64 * 1024.0 * 1024.0),
        _ => (size, 1f64),
    };
    let number: f64 = number.trim().parse().ok()?;
    Some((number * multiplier) as usize)
}

fn luhn(text: &str) -> bool {
    if text.len() < 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let sum: u32 = text
        .bytes()
        .rev()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            if i % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum();
    sum % 10 == 0
}
