//! Named string properties and `${name}` template expansion
//!
//! The [`PropertyStore`] is the shared mutable state of one evaluation pass:
//! the host seeds it, a [`SelectionContext`](crate::selection::SelectionContext)
//! publishes the current selection into it, and rule constraints and command
//! templates are expanded against it.
//!
//! # Example
//!
//! ```
//! use shellrules::PropertyStore;
//!
//! let mut store = PropertyStore::new();
//! store.set_property("name", "Brad Pitt");
//! store.set_property("age", "53");
//! store.set_property("job", "actor");
//!
//! let line = store.expand("${name} is a ${age} years old ${job}.");
//! assert_eq!(line, "Brad Pitt is a 53 years old actor.");
//! ```

use std::collections::BTreeMap;
use tracing::debug;

/// Prefix under which environment variables are registered as properties.
pub const ENV_PROPERTY_PREFIX: &str = "env.";

/// Name of the property holding the platform path separator.
pub const PATH_SEPARATOR_PROPERTY_NAME: &str = "path.separator";

/// Name of the property holding the platform line separator.
pub const LINE_SEPARATOR_PROPERTY_NAME: &str = "line.separator";

/// Alias of [`LINE_SEPARATOR_PROPERTY_NAME`].
pub const NEWLINE_PROPERTY_NAME: &str = "newline";

/// Name of the property holding the canonical "true" value.
pub const SYSTEM_TRUE_PROPERTY_NAME: &str = "system.true";

/// Name of the property holding the canonical "false" value.
pub const SYSTEM_FALSE_PROPERTY_NAME: &str = "system.false";

const TOKEN_OPEN: &str = "${";
const TOKEN_CLOSE: char = '}';

/// Mutable mapping from property names to string values.
///
/// Keys are unique and the last write wins. A name that was never set reads
/// as the empty string but is reported as absent by [`has_property`]. None of
/// the operations can fail.
///
/// A fresh store is seeded with one `env.<NAME>` entry per process
/// environment variable plus a handful of platform defaults; [`clear`]
/// returns the store to exactly that state.
///
/// The store is intended to live for the duration of one evaluation pass.
/// It is a plain value: callers that share it across threads must serialize
/// access themselves, since a `clear` racing an `expand` would produce
/// inconsistent results.
///
/// [`has_property`]: PropertyStore::has_property
/// [`clear`]: PropertyStore::clear
#[derive(Debug, Clone, Default)]
pub struct PropertyStore {
    properties: BTreeMap<String, String>,
}

impl PropertyStore {
    /// Create a store seeded with environment variables and default
    /// properties.
    pub fn new() -> Self {
        let mut store = Self {
            properties: BTreeMap::new(),
        };
        store.register_environment_variables();
        store.register_default_properties();
        store
    }

    /// Create a completely empty store, without any seeded entries.
    ///
    /// Mostly useful in tests; production callers want [`PropertyStore::new`].
    pub fn empty() -> Self {
        Self::default()
    }

    /// Insert or overwrite a property.
    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    /// Whether a property exists, even if its value is the empty string.
    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// The stored value, or the empty string for an absent name.
    pub fn get_property(&self, name: &str) -> &str {
        self.properties
            .get(name)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Remove a single property. No-op if the name is absent.
    pub fn clear_property(&mut self, name: &str) {
        self.properties.remove(name);
    }

    /// Remove all properties, then re-seed the environment and default
    /// entries as if the store were freshly constructed.
    pub fn clear(&mut self) {
        self.properties.clear();
        self.register_environment_variables();
        self.register_default_properties();
    }

    /// Number of stored properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the store holds no properties at all.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Replace every `${name}` token that references a stored property with
    /// that property's value.
    ///
    /// The template is scanned once, left to right. Substituted values are
    /// copied verbatim and never rescanned, so expansion of one property can
    /// never re-trigger another token. Tokens naming an unknown property are
    /// left untouched, as is any `${` without a closing `}`.
    pub fn expand(&self, template: &str) -> String {
        let mut output = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find(TOKEN_OPEN) {
            output.push_str(&rest[..open]);
            let after_open = &rest[open + TOKEN_OPEN.len()..];

            match after_open.find(TOKEN_CLOSE) {
                Some(close) if close > 0 && self.has_property(&after_open[..close]) => {
                    let name = &after_open[..close];
                    output.push_str(self.get_property(name));
                    rest = &after_open[close + TOKEN_CLOSE.len_utf8()..];
                }
                _ => {
                    // Not a resolvable token. Emit the opening marker literally
                    // and resume scanning right after it, so a nested token
                    // such as "${a${b}}" can still resolve "${b}".
                    output.push_str(TOKEN_OPEN);
                    rest = after_open;
                }
            }
        }

        output.push_str(rest);
        output
    }

    fn register_environment_variables(&mut self) {
        let mut count = 0usize;
        for (name, value) in std::env::vars_os() {
            // Variables that are not valid UTF-8 cannot be addressed by a
            // ${name} token anyway.
            if let (Ok(name), Ok(value)) = (name.into_string(), value.into_string()) {
                self.set_property(format!("{ENV_PROPERTY_PREFIX}{name}"), value);
                count += 1;
            }
        }
        debug!(count, "registered environment variable properties");
    }

    fn register_default_properties(&mut self) {
        let path_separator = std::path::MAIN_SEPARATOR.to_string();
        let line_separator = if cfg!(windows) { "\r\n" } else { "\n" };

        self.set_property(PATH_SEPARATOR_PROPERTY_NAME, path_separator);
        self.set_property(LINE_SEPARATOR_PROPERTY_NAME, line_separator);
        self.set_property(NEWLINE_PROPERTY_NAME, line_separator);
        self.set_property(SYSTEM_TRUE_PROPERTY_NAME, "true");
        self.set_property(SYSTEM_FALSE_PROPERTY_NAME, "false");
    }
}
