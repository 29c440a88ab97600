//! Document model: documents grouped by title, each with ordered sections.

use std::collections::HashMap;

use cssdoc_renderer::slugify;
use serde::Serialize;

use crate::front_matter::{CommentMetadata, MissingField, SectionKey};

/// Anchor id of a document.
#[must_use]
pub fn document_id(title: &str) -> String {
    slugify(title)
}

/// Anchor id of a section, namespaced by its document title.
///
/// Two documents with identically named sections still get distinct ids.
#[must_use]
pub fn section_id(title: &str, section: &str) -> String {
    slugify(&format!("{title}_{section}"))
}

/// One rendered documentation comment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: String,
    /// Section title (the comment's `section` field).
    pub title: String,
    /// Rendered HTML.
    pub content: String,
}

/// Sections sharing a `title`, across all source files.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    /// Summary from the most recently attached comment.
    pub resume: Option<String>,
    /// Sections in processing order. Never reordered or deduplicated.
    pub sections: Vec<Section>,
}

/// Documents keyed by title, in first-seen order.
///
/// The key is the raw title, not its id: two titles that slug to the same id
/// still form two documents.
#[derive(Clone, Debug, Default)]
pub struct DocumentSet {
    documents: Vec<Document>,
    by_title: HashMap<String, usize>,
}

impl DocumentSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a rendered comment to the document named by its metadata.
    ///
    /// Creates the document on first sight of its title. Every call appends a
    /// section and replaces the document `resume` with the comment's value.
    ///
    /// # Errors
    ///
    /// Returns [`MissingField`] if `title` or `section` is absent; the set is
    /// left unchanged.
    pub fn add_section(
        &mut self,
        metadata: &CommentMetadata,
        content: String,
    ) -> Result<&Section, MissingField> {
        let key = metadata.key()?;
        Ok(self.attach(&key, metadata.resume.clone(), content))
    }

    /// Attach a section under an already validated key.
    pub fn attach(
        &mut self,
        key: &SectionKey<'_>,
        resume: Option<String>,
        content: String,
    ) -> &Section {
        let index = match self.by_title.get(key.title) {
            Some(&index) => index,
            None => {
                self.documents.push(Document {
                    id: key.document_id(),
                    title: key.title.to_owned(),
                    resume: None,
                    sections: Vec::new(),
                });
                let index = self.documents.len() - 1;
                self.by_title.insert(key.title.to_owned(), index);
                index
            }
        };

        let document = &mut self.documents[index];
        document.resume = resume;
        document.sections.push(Section {
            id: key.section_id(),
            title: key.section.to_owned(),
            content,
        });
        &document.sections[document.sections.len() - 1]
    }

    /// Look up a document by its title.
    #[must_use]
    pub fn get(&self, title: &str) -> Option<&Document> {
        self.by_title.get(title).map(|&index| &self.documents[index])
    }

    /// Documents in first-seen order.
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Total number of sections across all documents.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.documents.iter().map(|d| d.sections.len()).sum()
    }

    #[must_use]
    pub fn into_documents(self) -> Vec<Document> {
        self.documents
    }
}

impl<'a> IntoIterator for &'a DocumentSet {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn metadata(title: &str, section: &str, resume: Option<&str>) -> CommentMetadata {
        CommentMetadata {
            title: Some(title.to_owned()),
            section: Some(section.to_owned()),
            resume: resume.map(str::to_owned),
            ..CommentMetadata::default()
        }
    }

    #[test]
    fn test_ids() {
        assert_eq!(document_id("Buttons"), "buttons");
        assert_eq!(section_id("Buttons", "Primary"), "buttons_primary");
        assert_eq!(section_id("Form Inputs", "Text Field"), "form-inputs_text-field");
    }

    #[test]
    fn test_ids_are_deterministic() {
        assert_eq!(section_id("A b", "C"), section_id("A b", "C"));
    }

    #[test]
    fn test_sections_group_by_title() {
        let mut set = DocumentSet::new();
        set.add_section(&metadata("Buttons", "Primary", Some("one")), "<p>1</p>".to_owned())
            .unwrap();
        set.add_section(&metadata("Forms", "Inputs", None), "<p>2</p>".to_owned())
            .unwrap();
        set.add_section(&metadata("Buttons", "Secondary", Some("two")), "<p>3</p>".to_owned())
            .unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.section_count(), 3);
        let titles: Vec<_> = set.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["Buttons", "Forms"]);

        let buttons = set.get("Buttons").unwrap();
        assert_eq!(buttons.id, "buttons");
        let ids: Vec<_> = buttons.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["buttons_primary", "buttons_secondary"]);
        assert_eq!(buttons.resume.as_deref(), Some("two"));
    }

    #[test]
    fn test_resume_last_writer_wins() {
        let mut set = DocumentSet::new();
        set.add_section(&metadata("Grid", "Rows", Some("first")), String::new())
            .unwrap();
        set.add_section(&metadata("Grid", "Columns", None), String::new())
            .unwrap();
        assert_eq!(set.get("Grid").unwrap().resume, None);
    }

    #[test]
    fn test_same_pair_twice_appends() {
        let mut set = DocumentSet::new();
        let meta = metadata("Buttons", "Primary", None);
        set.add_section(&meta, "<p>x</p>".to_owned()).unwrap();
        set.add_section(&meta, "<p>x</p>".to_owned()).unwrap();
        let buttons = set.get("Buttons").unwrap();
        assert_eq!(buttons.sections.len(), 2);
        assert_eq!(buttons.sections[0], buttons.sections[1]);
    }

    #[test]
    fn test_colliding_slugs_stay_separate() {
        let mut set = DocumentSet::new();
        set.add_section(&metadata("Forms!", "A", None), String::new())
            .unwrap();
        set.add_section(&metadata("Forms?", "A", None), String::new())
            .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.documents()[0].id, set.documents()[1].id);
    }

    #[test]
    fn test_missing_fields_leave_set_unchanged() {
        let mut set = DocumentSet::new();
        let no_title = CommentMetadata {
            section: Some("Primary".to_owned()),
            ..CommentMetadata::default()
        };
        assert_eq!(
            set.add_section(&no_title, String::new()).unwrap_err(),
            MissingField::Title
        );

        let no_section = CommentMetadata {
            title: Some("Buttons".to_owned()),
            ..CommentMetadata::default()
        };
        assert_eq!(
            set.add_section(&no_section, String::new()).unwrap_err(),
            MissingField::Section
        );
        assert!(set.is_empty());
    }

    #[test]
    fn test_add_section_returns_new_section() {
        let mut set = DocumentSet::new();
        let section = set
            .add_section(&metadata("Type", "Headings", None), "<h1>".to_owned())
            .unwrap();
        assert_eq!(section.title, "Headings");
        assert_eq!(section.content, "<h1>");
    }
}
