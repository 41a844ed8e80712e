use crate::score::cosine_similarity;
use crate::store::DocumentStore;
use crate::tf::term_frequency;
use crate::DocId;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ScoredResult {
    pub score: f64,
    pub doc_id: DocId,
}

/// Rank every stored document against `query` by cosine similarity.
///
/// Documents scoring exactly 0.0 are omitted rather than listed at zero.
/// Results sort by descending score, ties by descending doc id — the
/// same order as a reverse sort over (score, id) pairs. Case folding is
/// the caller's job and must match whatever was applied at index time.
pub fn search(query: &str, store: &DocumentStore) -> Vec<ScoredResult> {
    let query_tf = term_frequency(query);
    let mut results: Vec<ScoredResult> = store
        .all_documents()
        .filter_map(|(doc_id, doc_tf)| {
            let score = cosine_similarity(&query_tf, doc_tf);
            (score != 0.0).then_some(ScoredResult { score, doc_id })
        })
        .collect();
    results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(b.doc_id.cmp(&a.doc_id))
    });
    tracing::debug!(hits = results.len(), "search complete");
    results
}
