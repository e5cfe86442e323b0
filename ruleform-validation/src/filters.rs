// Input filters applied before validation

use crate::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Sanitizing filter applied to a field value before its rules run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    Trim,
    Lower,
    Upper,
    /// Keep digits and sign characters
    Int,
    /// Absolute integer value
    Absint,
    /// Keep digits, sign characters and the decimal point
    Float,
    Alphanum,
    Striptags,
    /// Keep characters valid in an email address
    Email,
    /// Strip tags and encode quotes
    String,
}

impl Filter {
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Trim => "trim",
            Filter::Lower => "lower",
            Filter::Upper => "upper",
            Filter::Int => "int",
            Filter::Absint => "absint",
            Filter::Float => "float",
            Filter::Alphanum => "alphanum",
            Filter::Striptags => "striptags",
            Filter::Email => "email",
            Filter::String => "string",
        }
    }

    /// Apply the filter to a value
    pub fn apply(&self, value: &str) -> String {
        match self {
            Filter::Trim => value.trim().to_string(),
            Filter::Lower => value.to_lowercase(),
            Filter::Upper => value.to_uppercase(),
            Filter::Int => value
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '+')
                .collect(),
            Filter::Absint => {
                let digits: String = Filter::Int.apply(value);
                digits
                    .parse::<i64>()
                    .map(|n| n.unsigned_abs().to_string())
                    .unwrap_or_else(|_| "0".to_string())
            }
            Filter::Float => value
                .chars()
                .filter(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.'))
                .collect(),
            Filter::Alphanum => value.chars().filter(|c| c.is_ascii_alphanumeric()).collect(),
            Filter::Striptags => TAG_REGEX.replace_all(value, "").into_owned(),
            Filter::Email => value
                .chars()
                .filter(|c| c.is_ascii_alphanumeric() || "!#$%&'*+-=?^_`{|}~@.[]".contains(*c))
                .collect(),
            Filter::String => TAG_REGEX
                .replace_all(value, "")
                .replace('"', "&#34;")
                .replace('\'', "&#39;"),
        }
    }
}

impl FromStr for Filter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "trim" => Ok(Filter::Trim),
            "lower" => Ok(Filter::Lower),
            "upper" => Ok(Filter::Upper),
            "int" => Ok(Filter::Int),
            "absint" => Ok(Filter::Absint),
            "float" => Ok(Filter::Float),
            "alphanum" => Ok(Filter::Alphanum),
            "striptags" => Ok(Filter::Striptags),
            "email" => Ok(Filter::Email),
            "string" => Ok(Filter::String),
            _ => Err(Error::UnknownFilter(s.to_string())),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Conversion into a filter list: a single name, a list of names, or filters
pub trait IntoFilters {
    fn into_filters(self) -> Result<Vec<Filter>>;
}

impl IntoFilters for Filter {
    fn into_filters(self) -> Result<Vec<Filter>> {
        Ok(vec![self])
    }
}

impl IntoFilters for Vec<Filter> {
    fn into_filters(self) -> Result<Vec<Filter>> {
        Ok(self)
    }
}

impl IntoFilters for &str {
    fn into_filters(self) -> Result<Vec<Filter>> {
        Ok(vec![self.parse()?])
    }
}

impl IntoFilters for Vec<&str> {
    fn into_filters(self) -> Result<Vec<Filter>> {
        self.into_iter().map(str::parse).collect()
    }
}

impl IntoFilters for &[&str] {
    fn into_filters(self) -> Result<Vec<Filter>> {
        self.iter().map(|name| name.parse()).collect()
    }
}

/// Apply filters in order
pub fn apply_filters(filters: &[Filter], value: &str) -> String {
    filters
        .iter()
        .fold(value.to_string(), |acc, filter| filter.apply(&acc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("trim".parse::<Filter>().unwrap(), Filter::Trim);
        assert_eq!(" Lower ".parse::<Filter>().unwrap(), Filter::Lower);
        assert!(matches!(
            "rot13".parse::<Filter>(),
            Err(Error::UnknownFilter(name)) if name == "rot13"
        ));
    }

    #[test]
    fn test_apply_chain() {
        let filters = vec!["trim", "lower"].into_filters().unwrap();
        assert_eq!(apply_filters(&filters, "  John@Example.COM "), "john@example.com");
    }

    #[test]
    fn test_numeric_filters() {
        assert_eq!(Filter::Int.apply("a1b2-3"), "12-3");
        assert_eq!(Filter::Absint.apply("-42"), "42");
        assert_eq!(Filter::Absint.apply("abc"), "0");
        assert_eq!(Filter::Float.apply("3.14 rad"), "3.14");
    }

    #[test]
    fn test_tag_filters() {
        assert_eq!(Filter::Striptags.apply("<b>bold</b> text"), "bold text");
        assert_eq!(Filter::String.apply("<i>it's</i>"), "it&#39;s");
    }

    #[test]
    fn test_email_and_alphanum() {
        assert_eq!(Filter::Email.apply("jo hn(at)@ex.com"), "johnat@ex.com");
        assert_eq!(Filter::Alphanum.apply("a-b_c 1"), "abc1");
    }
}
