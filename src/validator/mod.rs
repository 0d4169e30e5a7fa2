//! Rule applicability validation
//!
//! A [`Validator`] holds the declarative constraints attached to one menu
//! rule and decides whether the rule applies to the current selection. It is
//! a read-only predicate over a [`SelectionContext`] and a [`PropertyStore`];
//! it never signals errors during evaluation, only accept or reject.
//!
//! # Example
//!
//! ```
//! use shellrules::{PropertyStore, SelectionContext, Validator};
//!
//! let store = PropertyStore::new();
//! let context = SelectionContext::new(
//!     vec!["/tmp/report.pdf".to_string()],
//!     1,
//!     0,
//! );
//!
//! let validator = Validator::new()
//!     .with_max_files(1)
//!     .with_file_extensions("pdf;doc");
//! assert!(validator.validate(&context, &store));
//! ```

use crate::properties::PropertyStore;
use crate::selection::{SelectionContext, file_extension};
use crate::wildcard;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Separator between entries of a list-valued constraint.
pub const CONSTRAINT_LIST_SEPARATOR: char = ';';

/// Declarative constraint set attached to a menu rule.
///
/// Every constraint is optional; an empty or unset constraint means
/// unconstrained, never "reject everything". List-valued constraints are
/// `;`-separated strings as they appear in rule definitions; stray empty
/// entries from a `;;` are kept as literal empty strings and simply never
/// match anything real.
///
/// The `inverse` constraint flips the sense of the named checks. It accepts
/// the check names `maxfiles`, `maxfolders`, `properties`, `fileextensions`
/// and `pattern`, or `all`, again `;`-separated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Validator {
    /// Inclusive upper bound on the number of selected files.
    #[serde(rename = "maxfiles")]
    pub max_files: usize,

    /// Inclusive upper bound on the number of selected directories.
    #[serde(rename = "maxfolders")]
    pub max_directories: usize,

    /// `;`-separated property names that must all exist in the store.
    pub properties: String,

    /// `;`-separated file extensions (without leading dot) that every
    /// selected element's extension must be among. Compared as uppercase
    /// ASCII.
    #[serde(rename = "fileextensions")]
    pub file_extensions: String,

    /// `;`-separated wildcard patterns; every selected element must match at
    /// least one. Compared as uppercase ASCII.
    pub pattern: String,

    /// `;`-separated names of checks whose sense is inverted.
    pub inverse: String,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            max_files: usize::MAX,
            max_directories: usize::MAX,
            properties: String::new(),
            file_extensions: String::new(),
            pattern: String::new(),
            inverse: String::new(),
        }
    }
}

impl Validator {
    /// Create an unconstrained validator that accepts any selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of selected files.
    pub fn with_max_files(mut self, max_files: usize) -> Self {
        self.max_files = max_files;
        self
    }

    /// Set the maximum number of selected directories.
    pub fn with_max_directories(mut self, max_directories: usize) -> Self {
        self.max_directories = max_directories;
        self
    }

    /// Set the `;`-separated required property names.
    pub fn with_properties(mut self, properties: impl Into<String>) -> Self {
        self.properties = properties.into();
        self
    }

    /// Set the `;`-separated accepted file extensions.
    pub fn with_file_extensions(mut self, file_extensions: impl Into<String>) -> Self {
        self.file_extensions = file_extensions.into();
        self
    }

    /// Set the `;`-separated wildcard patterns.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Set the `;`-separated inverted check names.
    pub fn with_inverse(mut self, inverse: impl Into<String>) -> Self {
        self.inverse = inverse.into();
        self
    }

    /// Set the maximum number of selected files from a rule-definition
    /// attribute string.
    ///
    /// Malformed counts are a configuration-load error, surfaced here rather
    /// than during evaluation.
    pub fn with_max_files_attribute(self, value: &str) -> crate::Result<Self> {
        let parsed = value
            .trim()
            .parse::<usize>()
            .map_err(|_| crate::Error::invalid_count("maxfiles", value))?;
        Ok(self.with_max_files(parsed))
    }

    /// Set the maximum number of selected directories from a rule-definition
    /// attribute string.
    pub fn with_max_directories_attribute(self, value: &str) -> crate::Result<Self> {
        let parsed = value
            .trim()
            .parse::<usize>()
            .map_err(|_| crate::Error::invalid_count("maxfolders", value))?;
        Ok(self.with_max_directories(parsed))
    }

    /// Whether the named check is listed in the `inverse` constraint.
    ///
    /// `all` inverts every check. Matching is whole-entry on the
    /// `;`-separated list, so `foo` never matches inside `foobar`.
    pub fn is_inversed(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        if name != "all" && self.is_inversed("all") {
            return true;
        }
        self.inverse
            .split(CONSTRAINT_LIST_SEPARATOR)
            .any(|entry| entry == name)
    }

    /// Evaluate every constraint against the selection and the live property
    /// set.
    ///
    /// Checks run in a fixed order and short-circuit on the first failure:
    /// file count, directory count, required properties, file extensions,
    /// then wildcard patterns. List-valued constraints are expanded through
    /// the store before splitting, so they may themselves contain `${name}`
    /// tokens.
    pub fn validate(&self, context: &SelectionContext, store: &PropertyStore) -> bool {
        let files_inversed = self.is_inversed("maxfiles");
        let too_many_files = context.num_files() > self.max_files;
        if too_many_files != files_inversed {
            debug!(
                num_files = context.num_files(),
                max_files = self.max_files,
                inversed = files_inversed,
                "rejected by file count"
            );
            return false;
        }

        let directories_inversed = self.is_inversed("maxfolders");
        let too_many_directories = context.num_directories() > self.max_directories;
        if too_many_directories != directories_inversed {
            debug!(
                num_directories = context.num_directories(),
                max_directories = self.max_directories,
                inversed = directories_inversed,
                "rejected by directory count"
            );
            return false;
        }

        let properties = store.expand(&self.properties);
        if !properties.is_empty()
            && !self.validate_properties(store, &properties, self.is_inversed("properties"))
        {
            return false;
        }

        let file_extensions = store.expand(&self.file_extensions);
        if !file_extensions.is_empty()
            && !self.validate_file_extensions(
                context,
                &file_extensions,
                self.is_inversed("fileextensions"),
            )
        {
            return false;
        }

        let pattern = store.expand(&self.pattern);
        if !pattern.is_empty()
            && !self.validate_pattern(context, &pattern, self.is_inversed("pattern"))
        {
            return false;
        }

        true
    }

    fn validate_properties(&self, store: &PropertyStore, properties: &str, inversed: bool) -> bool {
        for name in properties.split(CONSTRAINT_LIST_SEPARATOR) {
            let exists = store.has_property(name);
            if exists == inversed {
                debug!(property = name, exists, inversed, "rejected by property");
                return false;
            }
        }
        true
    }

    fn validate_file_extensions(
        &self,
        context: &SelectionContext,
        file_extensions: &str,
        inversed: bool,
    ) -> bool {
        let accepted: Vec<String> = file_extensions
            .split(CONSTRAINT_LIST_SEPARATOR)
            .map(|ext| ext.to_ascii_uppercase())
            .collect();

        // every selected element must carry an accepted extension
        for element in context.elements() {
            let extension = file_extension(element).to_ascii_uppercase();
            let found = accepted.contains(&extension);
            if found == inversed {
                debug!(%element, %extension, inversed, "rejected by file extension");
                return false;
            }
        }
        true
    }

    fn validate_pattern(&self, context: &SelectionContext, pattern: &str, inversed: bool) -> bool {
        // compared as uppercase ASCII, like the extension check
        let patterns: Vec<String> = pattern
            .split(CONSTRAINT_LIST_SEPARATOR)
            .map(|p| p.to_ascii_uppercase())
            .collect();

        for element in context.elements() {
            let element_upper = element.to_ascii_uppercase();
            let found = patterns.iter().any(|p| wildcard::is_match(p, &element_upper));
            if found == inversed {
                debug!(%element, inversed, "rejected by pattern");
                return false;
            }
        }
        true
    }
}
