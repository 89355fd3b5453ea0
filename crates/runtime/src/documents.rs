use annolint_core::text::LineIndex;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;

/// One open document. Immutable; an edit replaces the whole entry.
#[derive(Debug)]
pub struct Document {
    pub uri: String,
    pub text: String,
    pub version: i32,
    pub line_index: LineIndex,
}

impl Document {
    pub fn new(uri: impl Into<String>, text: impl Into<String>, version: i32) -> Self {
        let text = text.into();
        Self {
            uri: uri.into(),
            line_index: LineIndex::new(&text),
            text,
            version,
        }
    }
}

/// Text of the documents the client has open, keyed by URI.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: DashMap<String, Arc<Document>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&self, uri: &str, text: impl Into<String>, version: i32) {
        self.documents
            .insert(uri.to_string(), Arc::new(Document::new(uri, text, version)));
    }

    /// Replaces the text of `uri`. A version older than the stored one is
    /// ignored.
    pub fn change(&self, uri: &str, text: impl Into<String>, version: i32) -> bool {
        if let Some(current) = self.documents.get(uri) {
            if current.version > version {
                debug!(uri, stored = current.version, version, "stale document version");
                return false;
            }
        }
        self.open(uri, text, version);
        true
    }

    pub fn close(&self, uri: &str) -> Option<Arc<Document>> {
        self.documents.remove(uri).map(|(_, doc)| doc)
    }

    pub fn get(&self, uri: &str) -> Option<Arc<Document>> {
        self.documents.get(uri).map(|doc| doc.value().clone())
    }

    pub fn text(&self, uri: &str) -> Option<String> {
        self.get(uri).map(|doc| doc.text.clone())
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stale_changes_are_ignored() {
        let store = DocumentStore::new();
        store.open("file:///A.java", "class A {}", 3);
        assert!(!store.change("file:///A.java", "class B {}", 2));
        assert_eq!(store.text("file:///A.java").as_deref(), Some("class A {}"));

        assert!(store.change("file:///A.java", "class C {}", 4));
        let doc = store.get("file:///A.java").unwrap();
        assert_eq!(doc.version, 4);
        assert_eq!(doc.text, "class C {}");

        assert!(store.close("file:///A.java").is_some());
        assert!(store.is_empty());
        assert!(store.text("file:///A.java").is_none());
    }
}
