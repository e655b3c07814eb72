//! Configuration file loading and persistence.
//!
//! Configuration files are JSON documents. Nested objects address settings
//! by dotted key, so `{"hosts": {"up": "up.example.com"}}` sets `hosts.up`.
//! A literal dotted key at the top level (`{"hosts.up": "..."}`) is
//! accepted as well.

use crate::config::setting::Setting;
use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// An editable JSON configuration document.
///
/// Unrelated content in the file is preserved when a setting is written.
///
/// # Examples
///
/// ```
/// use qshell::config::ConfigDocument;
/// use qshell::Setting;
///
/// let mut doc = ConfigDocument::default();
/// doc.set(Setting::UpHost, "up.example.com");
///
/// let flat = doc.flatten();
/// assert_eq!(flat.get("hosts.up").map(String::as_str), Some("up.example.com"));
/// assert_eq!(flat.get("hosts.up_host").map(String::as_str), Some("up.example.com"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigDocument {
    root: Map<String, Value>,
}

impl ConfigDocument {
    /// Parses a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON or its top level is not an
    /// object.
    pub fn parse(contents: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(contents)? {
            Value::Object(root) => Ok(Self { root }),
            other => Err(Error::Validation {
                field: "configuration".into(),
                message: format!("expected a JSON object, found {}", json_kind(&other)),
            }),
        }
    }

    /// Flattens the document into dotted keys and string values.
    ///
    /// Numbers and booleans are stringified; nulls and arrays are skipped.
    #[must_use]
    pub fn flatten(&self) -> BTreeMap<String, String> {
        let mut values = BTreeMap::new();
        flatten_into(&mut values, None, &self.root);
        values
    }

    /// Writes a value under a dotted key, creating intermediate objects.
    ///
    /// Any non-object value standing where an intermediate object is needed
    /// is replaced. Literal dotted entries spelling the same key (such as a
    /// top-level `"hosts.up"`) are removed so they cannot shadow the value.
    pub fn set_key(&mut self, key: &str, value: &str) {
        let parts: Vec<&str> = key.split('.').collect();
        insert_dotted(&mut self.root, &parts, value);
    }

    /// Writes a value under every key of the setting.
    pub fn set(&mut self, setting: Setting, value: &str) {
        for key in setting.keys() {
            self.set_key(key, value);
        }
    }

    /// Serializes the document as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn insert_dotted(map: &mut Map<String, Value>, parts: &[&str], value: &str) {
    match parts {
        [] => {}
        [leaf] => {
            map.insert((*leaf).to_string(), Value::String(value.to_string()));
        }
        [head, rest @ ..] => {
            map.remove(&parts.join("."));
            let entry = map
                .entry((*head).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            match entry {
                Value::Object(nested) => insert_dotted(nested, rest, value),
                other => {
                    let mut nested = Map::new();
                    insert_dotted(&mut nested, rest, value);
                    *other = Value::Object(nested);
                }
            }
        }
    }
}

fn flatten_into(
    values: &mut BTreeMap<String, String>,
    prefix: Option<&str>,
    map: &Map<String, Value>,
) {
    for (name, value) in map {
        let key = match prefix {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name.clone(),
        };
        match value {
            Value::Object(nested) => flatten_into(values, Some(key.as_str()), nested),
            Value::String(s) => {
                values.insert(key, s.clone());
            }
            Value::Number(n) => {
                values.insert(key, n.to_string());
            }
            Value::Bool(b) => {
                values.insert(key, b.to_string());
            }
            Value::Null | Value::Array(_) => {
                log::debug!("ignoring non-scalar configuration value at {key}");
            }
        }
    }
}

/// Reads and writes configuration files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a configuration document, or `None` if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a
    /// JSON object.
    pub fn load_document(path: &Path) -> Result<Option<ConfigDocument>> {
        if !path.exists() {
            log::debug!("configuration file {} not found", path.display());
            return Ok(None);
        }

        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        let document = ConfigDocument::parse(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid JSON: {e}"),
        })?;

        log::debug!("loaded configuration file {}", path.display());
        Ok(Some(document))
    }

    /// Load a configuration file as flattened dotted keys.
    ///
    /// A missing file yields an empty map.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_file(path: &Path) -> Result<BTreeMap<String, String>> {
        Ok(Self::load_document(path)?
            .map(|doc| doc.flatten())
            .unwrap_or_default())
    }

    /// Write a document, creating the parent directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save_document(path: &Path, document: &ConfigDocument) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, document.to_json()? + "\n")?;
        log::debug!("wrote configuration file {}", path.display());
        Ok(())
    }

    /// Persist one setting into a configuration file.
    ///
    /// Existing content is preserved; every key of the setting is written.
    ///
    /// # Errors
    ///
    /// Returns an error if the existing file cannot be parsed or the file
    /// cannot be written.
    pub fn persist_setting(path: &Path, setting: Setting, value: &str) -> Result<()> {
        let mut document = Self::load_document(path)?.unwrap_or_default();
        document.set(setting, value);
        Self::save_document(path, &document)
    }
}
