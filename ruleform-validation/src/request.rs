// Request form data

use crate::{Error, Result};
use std::collections::HashMap;

/// Uploaded file data
#[derive(Debug, Clone)]
pub struct FormFile {
    /// Original filename
    pub filename: String,

    /// Content type (MIME type)
    pub content_type: String,

    /// File size in bytes
    pub size: usize,

    /// File data
    pub data: Vec<u8>,
}

impl FormFile {
    /// Create a new form file
    pub fn new(filename: impl Into<String>, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        let size = data.len();
        Self {
            filename: filename.into(),
            content_type: content_type.into(),
            size,
            data,
        }
    }

    /// Check if file size exceeds limit
    pub fn exceeds_size(&self, max_bytes: usize) -> bool {
        self.size > max_bytes
    }
}

/// Field-keyed input handed to the validation engine.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    values: HashMap<String, String>,
    files: HashMap<String, FormFile>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field value
    pub fn with_value(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    /// Add an uploaded file
    pub fn with_file(mut self, field: impl Into<String>, file: FormFile) -> Self {
        self.files.insert(field.into(), file);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn file(&self, field: &str) -> Option<&FormFile> {
        self.files.get(field)
    }

    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.files.is_empty()
    }
}

impl From<HashMap<String, String>> for FormData {
    fn from(values: HashMap<String, String>) -> Self {
        Self {
            values,
            files: HashMap::new(),
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = FormData::new();
        for (field, value) in iter {
            data.insert(field, value);
        }
        data
    }
}

/// Anything that can yield posted form fields.
pub trait FormRequest {
    /// Extract the posted form fields
    fn post(&self) -> Result<FormData>;
}

/// Minimal incoming HTTP request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
    pub query_params: HashMap<String, String>,
    pub files: HashMap<String, FormFile>,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            headers: HashMap::new(),
            body: Vec::new(),
            query_params: HashMap::new(),
            files: HashMap::new(),
        }
    }

    /// URL-encoded form body
    pub fn form(method: impl Into<String>, path: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self::new(method, path)
            .with_header("Content-Type", "application/x-www-form-urlencoded")
            .with_body(body)
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_file(mut self, field: impl Into<String>, file: FormFile) -> Self {
        self.files.insert(field.into(), file);
        self
    }

    /// Header lookup, case-insensitive on the name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Media type of the body without parameters
    pub fn content_type(&self) -> Option<String> {
        self.header("Content-Type")
            .and_then(|value| value.split(';').next())
            .map(|media| media.trim().to_ascii_lowercase())
    }
}

impl FormRequest for HttpRequest {
    fn post(&self) -> Result<FormData> {
        let mut data = if self.body.is_empty() {
            FormData::new()
        } else {
            match self.content_type().as_deref() {
                None | Some("application/x-www-form-urlencoded") => parse_form_map(&self.body)?,
                Some("application/json") => parse_json_map(&self.body)?,
                Some(other) => return Err(Error::UnsupportedContentType(other.to_string())),
            }
        };

        for (field, file) in &self.files {
            data.files.insert(field.clone(), file.clone());
        }

        Ok(data)
    }
}

/// Parse URL-encoded form data into form fields
pub fn parse_form_map(body: &[u8]) -> Result<FormData> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)
        .map_err(|e| Error::InvalidFormData(e.to_string()))?;

    Ok(pairs.into_iter().collect())
}

/// Parse a JSON object body into form fields; scalar members are stringified
pub fn parse_json_map(body: &[u8]) -> Result<FormData> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    let serde_json::Value::Object(map) = value else {
        return Err(Error::InvalidFormData("expected a JSON object".to_string()));
    };

    let mut data = FormData::new();
    for (field, value) in map {
        match value {
            serde_json::Value::Null => {}
            serde_json::Value::String(s) => data.insert(field, s),
            serde_json::Value::Bool(b) => data.insert(field, if b { "1" } else { "" }),
            other => data.insert(field, other.to_string()),
        }
    }
    Ok(data)
}
