//! Stylesheet residue collection.

/// Per-file source text with documentation comments removed.
///
/// Entries are kept in the order files were processed and joined without a
/// separator.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StylesheetResidue {
    parts: Vec<String>,
}

impl StylesheetResidue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, text: impl Into<String>) {
        self.parts.push(text.into());
    }

    /// Concatenate all entries in insertion order.
    #[must_use]
    pub fn join(&self) -> String {
        self.parts.concat()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
