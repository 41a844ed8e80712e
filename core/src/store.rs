use crate::tf::{term_frequency, TermFrequency};
use crate::DocId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub term_frequency: TermFrequency,
    pub text: String,
}

/// Holds every indexed document and its derived term-frequency vector,
/// keyed by a sequential id minted at index time. The store lives for
/// the process only; documents are never updated or removed.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: BTreeMap<DocId, Document>,
    next_id: DocId,
}

impl DocumentStore {
    pub fn new() -> Self { Self::default() }

    /// Index a document: mint the next id (1, 2, 3, ... with no gaps or
    /// reuse), compute its term-frequency vector once, and retain the
    /// original text. Returns the assigned id.
    pub fn index_document(&mut self, text: &str) -> DocId {
        self.next_id += 1;
        let id = self.next_id;
        self.documents.insert(id, Document {
            id,
            term_frequency: term_frequency(text),
            text: text.to_string(),
        });
        tracing::debug!(doc_id = id, "indexed document");
        id
    }

    /// Every indexed document's id and vector, in ascending id order.
    pub fn all_documents(&self) -> impl Iterator<Item = (DocId, &TermFrequency)> {
        self.documents.values().map(|d| (d.id, &d.term_frequency))
    }

    /// Original text for `id`, or `""` when no such document exists.
    /// A lookup miss is not an error.
    pub fn get_text(&self, id: DocId) -> &str {
        self.documents.get(&id).map(|d| d.text.as_str()).unwrap_or("")
    }

    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }
}
