//! Layered key/value storage backing the configuration resolver.
//!
//! The store knows nothing about settings or aliases; it maps physical
//! keys to string values in three layers, listed from highest to lowest
//! precedence:
//!
//! 1. [`Layer::Explicit`]: values set programmatically or from flags
//! 2. [`Layer::File`]: values loaded from the configuration file
//! 3. [`Layer::Default`]: values compiled into the program

use std::collections::BTreeMap;

/// One precedence level of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    /// Explicitly set values. Highest precedence.
    Explicit,
    /// Values read from the configuration file.
    File,
    /// Built-in defaults. Lowest precedence.
    Default,
}

impl Layer {
    /// All layers, highest precedence first.
    pub const PRECEDENCE: [Layer; 3] = [Layer::Explicit, Layer::File, Layer::Default];

    /// Short lowercase name, used when reporting where a value came from.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::File => "file",
            Self::Default => "default",
        }
    }
}

/// Key/value store with explicit, file and default layers.
///
/// # Examples
///
/// ```
/// use qshell::config::{ConfigStore, Layer};
///
/// let mut store = ConfigStore::new();
/// store.insert(Layer::Default, "hosts.rs", "rs.qiniu.com");
/// assert_eq!(store.get("hosts.rs"), Some("rs.qiniu.com"));
///
/// store.insert(Layer::Explicit, "hosts.rs", "rs.example.com");
/// assert_eq!(store.get("hosts.rs"), Some("rs.example.com"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    explicit: BTreeMap<String, String>,
    file: BTreeMap<String, String>,
    defaults: BTreeMap<String, String>,
}

impl ConfigStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn layer(&self, layer: Layer) -> &BTreeMap<String, String> {
        match layer {
            Layer::Explicit => &self.explicit,
            Layer::File => &self.file,
            Layer::Default => &self.defaults,
        }
    }

    fn layer_mut(&mut self, layer: Layer) -> &mut BTreeMap<String, String> {
        match layer {
            Layer::Explicit => &mut self.explicit,
            Layer::File => &mut self.file,
            Layer::Default => &mut self.defaults,
        }
    }

    /// Writes `value` under `key` in the given layer.
    pub fn insert(&mut self, layer: Layer, key: &str, value: &str) {
        self.layer_mut(layer)
            .insert(key.to_string(), value.to_string());
    }

    /// Replaces the whole file layer.
    pub fn replace_file_layer(&mut self, values: BTreeMap<String, String>) {
        self.file = values;
    }

    /// Reads `key` from a single layer.
    #[must_use]
    pub fn get_in(&self, layer: Layer, key: &str) -> Option<&str> {
        self.layer(layer).get(key).map(String::as_str)
    }

    /// Reads `key` from the highest-precedence layer that holds it.
    ///
    /// A key explicitly set to the empty string still shadows lower layers.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        Layer::PRECEDENCE
            .into_iter()
            .find_map(|layer| self.get_in(layer, key))
    }

    /// Whether any layer holds `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates the keys and values of one layer in key order.
    pub fn iter_layer(&self, layer: Layer) -> impl Iterator<Item = (&str, &str)> {
        self.layer(layer)
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
