use anyhow::{bail, Result};
use cosearch_core::{search, DocId, DocumentStore};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Characters of document text shown per result line.
pub const PREVIEW_CHARS: usize = 100;

/// One ranked hit ready for display.
#[derive(Debug, Serialize)]
pub struct SearchHit {
    pub score: f64,
    pub doc_id: DocId,
    pub preview: String,
}

/// Index every regular file under `dir`, lower-cased, in sorted path
/// order so ids are stable across runs. Unreadable (e.g. non-UTF-8)
/// files are skipped with a warning. Returns the number indexed.
pub fn index_directory(store: &mut DocumentStore, dir: &Path) -> Result<usize> {
    if !dir.is_dir() {
        bail!("documents path {} is not a directory", dir.display());
    }
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .map(|e| e.into_path())
        .collect();
    files.sort();

    let mut indexed = 0;
    for path in files {
        match fs::read_to_string(&path) {
            Ok(text) => {
                let doc_id = store.index_document(&text.to_lowercase());
                tracing::debug!(doc_id, path = %path.display(), "indexed file");
                indexed += 1;
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "skipping unreadable file");
            }
        }
    }
    if indexed == 0 {
        bail!("no readable documents under {}", dir.display());
    }
    Ok(indexed)
}

/// Lower-case the query to match the indexing path, run the search, and
/// resolve each ranked result to a display preview.
pub fn search_hits(store: &DocumentStore, query: &str) -> Vec<SearchHit> {
    search(&query.to_lowercase(), store)
        .into_iter()
        .map(|r| SearchHit {
            score: r.score,
            doc_id: r.doc_id,
            preview: preview(store.get_text(r.doc_id)).to_string(),
        })
        .collect()
}

/// First `PREVIEW_CHARS` characters of `text`, char-boundary safe.
fn preview(text: &str) -> &str {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_truncates_long_text() {
        let text = "x".repeat(250);
        assert_eq!(preview(&text).len(), PREVIEW_CHARS);
    }

    #[test]
    fn preview_keeps_short_text_whole() {
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn preview_respects_char_boundaries() {
        let text = "é".repeat(150);
        let p = preview(&text);
        assert_eq!(p.chars().count(), PREVIEW_CHARS);
    }
}
