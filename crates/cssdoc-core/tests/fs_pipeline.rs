//! End-to-end pipeline runs over a real source tree.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use cssdoc_core::{Pipeline, PipelineError};
use cssdoc_renderer::{AutoHighlighter, ContentTransformer};
use cssdoc_storage::{FsStorage, ScanOrder, StorageErrorKind};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn transformer() -> ContentTransformer {
    ContentTransformer::new(Arc::new(AutoHighlighter::new()))
}

fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "a_buttons.css",
        "/*---\ntitle: Buttons\nsection: Primary\nresume: A\n---\n```example\n<button class=\"btn\">Go</button>\n```\n*/\n.btn { }\n",
    );
    write(
        dir.path(),
        "b/buttons.scss",
        "/*---\ntitle: Buttons\nsection: Secondary\nresume: B\n---\n```css\n.btn-secondary {}\n```\n*/\n.btn-secondary { }\n",
    );
    write(dir.path(), "notes.txt", "/*---\ntitle: Ignored\nsection: X\n---\n*/");
    dir
}

#[test]
fn test_descending_scan_is_default() {
    let dir = fixture();
    let storage = FsStorage::new(dir.path().to_path_buf())
        .with_extensions(vec!["css".to_owned(), "scss".to_owned()]);
    let model = Pipeline::new(&storage, transformer()).run().unwrap();

    assert_eq!(model.files, 2);
    let buttons = model.documents.get("Buttons").unwrap();
    let ids: Vec<_> = buttons.sections.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["buttons_secondary", "buttons_primary"]);
    assert_eq!(buttons.resume.as_deref(), Some("A"));
    assert!(model.documents.get("Ignored").is_none());
}

#[test]
fn test_ascending_scan() {
    let dir = fixture();
    let storage = FsStorage::new(dir.path().to_path_buf())
        .with_extensions(vec!["css".to_owned(), "scss".to_owned()])
        .with_order(ScanOrder::Ascending);
    let model = Pipeline::new(&storage, transformer()).run().unwrap();

    let buttons = model.documents.get("Buttons").unwrap();
    assert_eq!(buttons.sections[0].id, "buttons_primary");
    assert_eq!(buttons.resume.as_deref(), Some("B"));
    assert_eq!(model.residue.join(), "\n.btn { }\n\n.btn-secondary { }\n");
}

#[test]
fn test_rendered_content() {
    let dir = fixture();
    let storage = FsStorage::new(dir.path().to_path_buf())
        .with_extensions(vec!["css".to_owned(), "scss".to_owned()])
        .with_order(ScanOrder::Ascending);
    let model = Pipeline::new(&storage, transformer()).run().unwrap();

    let buttons = model.documents.get("Buttons").unwrap();
    assert_eq!(
        buttons.sections[0].content,
        "<div class=\"doc-example\"><button class=\"btn\">Go</button>\n</div>"
    );
    assert!(
        buttons.sections[1]
            .content
            .starts_with(r#"<pre class="hljs"><code class="language-css">"#)
    );
}

#[test]
fn test_missing_source_dir() {
    let dir = TempDir::new().unwrap();
    let storage = FsStorage::new(dir.path().join("missing"));
    let err = Pipeline::new(&storage, transformer()).run().unwrap_err();
    let PipelineError::Storage(e) = err;
    assert_eq!(e.kind, StorageErrorKind::NotFound);
}
