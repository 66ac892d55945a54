//! Accumulating keyed set of user-selected files.
//!
//! Drag-and-drop and the file picker both feed this set; batches
//! accumulate, they never replace earlier selections. Re-adding a file
//! with a name already present stores it under a counter-suffixed key
//! (`plate.rip`, `plate.rip (2)`, ...) instead of overwriting. The set
//! lives until page navigation; there is no clear operation.

use std::collections::HashMap;

/// One selected file: unique display key, original name and the handle.
///
/// The key is only for display and de-duplication; the multipart part
/// is sent under the original `name`.
#[derive(Debug, Clone)]
pub struct SelectedFile<F> {
    /// Unique key within the set
    pub key: String,
    /// File name as the browser reported it
    pub name: String,
    /// Underlying file handle (`web_sys::File` in the browser)
    pub handle: F,
}

/// Ordered, keyed accumulation of selected files.
#[derive(Debug, Clone)]
pub struct SelectedFiles<F> {
    entries: Vec<SelectedFile<F>>,
    seen: HashMap<String, u32>,
}

impl<F> Default for SelectedFiles<F> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            seen: HashMap::new(),
        }
    }
}

impl<F> SelectedFiles<F> {
    /// Insert one file under a unique key.
    pub fn insert(&mut self, name: impl Into<String>, handle: F) {
        let name = name.into();
        let count = self.seen.entry(name.clone()).or_insert(0);
        *count += 1;
        let mut key = if *count == 1 {
            name.clone()
        } else {
            format!("{name} ({count})")
        };
        // A file literally named "x (2)" can collide with a generated key.
        while self.entries.iter().any(|entry| entry.key == key) {
            *count += 1;
            key = format!("{name} ({count})");
        }
        self.entries.push(SelectedFile { key, name, handle });
    }

    /// Insert a whole batch from one drop or picker event.
    pub fn insert_all(&mut self, batch: impl IntoIterator<Item = (String, F)>) {
        for (name, handle) in batch {
            self.insert(name, handle);
        }
    }

    /// Number of selected files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been selected yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SelectedFile<F>> {
        self.entries.iter()
    }
}
