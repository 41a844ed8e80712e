use crate::tf::TermFrequency;

/// Euclidean norm of a term-frequency vector, |v|.
pub fn magnitude(v: &TermFrequency) -> f64 {
    v.values().map(|&c| (c as f64) * (c as f64)).sum::<f64>().sqrt()
}

/// Cosine similarity between a query vector and a document vector,
/// (a . b) / (|a| |b|).
///
/// If either vector has magnitude 0 the similarity is 0.0: an empty
/// query or document carries no signal, and the division is never
/// attempted.
pub fn cosine_similarity(query: &TermFrequency, document: &TermFrequency) -> f64 {
    let denom = magnitude(query) * magnitude(document);
    if denom == 0.0 {
        return 0.0;
    }
    let dot: f64 = query
        .iter()
        .filter_map(|(term, &qc)| document.get(term).map(|&dc| f64::from(qc) * f64::from(dc)))
        .sum();
    dot / denom
}
