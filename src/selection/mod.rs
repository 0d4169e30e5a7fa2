//! Immutable snapshot of the current file/directory selection
//!
//! A [`SelectionContext`] is built once per evaluation pass from whatever the
//! host shell reports as selected, then handed read-only to every candidate
//! rule's validator.

use crate::properties::{LINE_SEPARATOR_PROPERTY_NAME, PropertyStore};

/// Property name receiving the full path of each selected element.
pub const SELECTION_PATH_PROPERTY_NAME: &str = "selection.path";

/// Property name receiving the parent path of each selected element.
pub const SELECTION_PARENT_PATH_PROPERTY_NAME: &str = "selection.parent.path";

/// Property name receiving the parent directory name of each selected element.
pub const SELECTION_PARENT_FILENAME_PROPERTY_NAME: &str = "selection.parent.filename";

/// Property name receiving the file name of each selected element.
pub const SELECTION_FILENAME_PROPERTY_NAME: &str = "selection.filename";

/// Property name receiving the file name without extension of each selected element.
pub const SELECTION_FILENAME_NOEXT_PROPERTY_NAME: &str = "selection.filename.noext";

/// Property name receiving the file extension of each selected element.
pub const SELECTION_FILENAME_EXTENSION_PROPERTY_NAME: &str = "selection.filename.extension";

const SELECTION_PROPERTY_NAMES: [&str; 6] = [
    SELECTION_PATH_PROPERTY_NAME,
    SELECTION_PARENT_PATH_PROPERTY_NAME,
    SELECTION_PARENT_FILENAME_PROPERTY_NAME,
    SELECTION_FILENAME_PROPERTY_NAME,
    SELECTION_FILENAME_NOEXT_PROPERTY_NAME,
    SELECTION_FILENAME_EXTENSION_PROPERTY_NAME,
];

/// Ordered, immutable description of the user's current selection.
///
/// The file and directory counts are supplied by the caller, which classified
/// each element at the shell boundary. The core trusts both counts
/// independently and never re-derives them from `elements`; keeping
/// `num_files + num_directories == elements.len()` consistent is the caller's
/// contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionContext {
    elements: Vec<String>,
    num_files: usize,
    num_directories: usize,
}

impl SelectionContext {
    /// Create a context from selected paths and caller-classified counts.
    pub fn new(elements: Vec<String>, num_files: usize, num_directories: usize) -> Self {
        Self {
            elements,
            num_files,
            num_directories,
        }
    }

    /// The selected paths, in selection order.
    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    /// Number of selected elements classified as files.
    pub fn num_files(&self) -> usize {
        self.num_files
    }

    /// Number of selected elements classified as directories.
    pub fn num_directories(&self) -> usize {
        self.num_directories
    }

    /// Publish the selection into a store as `selection.*` properties.
    ///
    /// Each property holds one line per selected element, joined with the
    /// store's line separator, so a command template can print all selected
    /// paths on individual lines. An empty selection registers nothing.
    pub fn register_properties(&self, store: &mut PropertyStore) {
        if self.elements.is_empty() {
            return;
        }

        let line_separator = store.get_property(LINE_SEPARATOR_PROPERTY_NAME).to_string();

        let mut paths = Vec::with_capacity(self.elements.len());
        let mut parent_paths = Vec::with_capacity(self.elements.len());
        let mut parent_filenames = Vec::with_capacity(self.elements.len());
        let mut filenames = Vec::with_capacity(self.elements.len());
        let mut filenames_noext = Vec::with_capacity(self.elements.len());
        let mut extensions = Vec::with_capacity(self.elements.len());

        for element in &self.elements {
            let parent = parent_path(element);
            paths.push(element.as_str());
            parent_paths.push(parent);
            parent_filenames.push(file_name(parent));
            filenames.push(file_name(element));
            filenames_noext.push(file_stem(element));
            extensions.push(file_extension(element));
        }

        store.set_property(SELECTION_PATH_PROPERTY_NAME, paths.join(&line_separator));
        store.set_property(
            SELECTION_PARENT_PATH_PROPERTY_NAME,
            parent_paths.join(&line_separator),
        );
        store.set_property(
            SELECTION_PARENT_FILENAME_PROPERTY_NAME,
            parent_filenames.join(&line_separator),
        );
        store.set_property(
            SELECTION_FILENAME_PROPERTY_NAME,
            filenames.join(&line_separator),
        );
        store.set_property(
            SELECTION_FILENAME_NOEXT_PROPERTY_NAME,
            filenames_noext.join(&line_separator),
        );
        store.set_property(
            SELECTION_FILENAME_EXTENSION_PROPERTY_NAME,
            extensions.join(&line_separator),
        );
    }

    /// Remove every `selection.*` property previously published by
    /// [`register_properties`](SelectionContext::register_properties).
    pub fn unregister_properties(&self, store: &mut PropertyStore) {
        for name in SELECTION_PROPERTY_NAMES {
            store.clear_property(name);
        }
    }
}

fn last_separator(path: &str) -> Option<usize> {
    path.rfind(['/', '\\'])
}

/// The portion of `path` before its last path separator, or `""` when the
/// path has no parent.
pub fn parent_path(path: &str) -> &str {
    match last_separator(path) {
        Some(pos) => &path[..pos],
        None => "",
    }
}

/// The final component of `path`.
pub fn file_name(path: &str) -> &str {
    match last_separator(path) {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

/// The file name of `path` without its extension.
pub fn file_stem(path: &str) -> &str {
    let name = file_name(path);
    match name.rfind('.') {
        Some(pos) => &name[..pos],
        None => name,
    }
}

/// The extension of `path`'s file name, without the leading dot, or `""`
/// when the file name has none.
pub fn file_extension(path: &str) -> &str {
    let name = file_name(path);
    match name.rfind('.') {
        Some(pos) => &name[pos + 1..],
        None => "",
    }
}
