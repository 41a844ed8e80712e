pub mod engine;
pub mod score;
pub mod store;
pub mod tf;

pub use engine::{search, ScoredResult};
pub use score::{cosine_similarity, magnitude};
pub use store::{Document, DocumentStore};
pub use tf::{term_frequency, TermFrequency};

pub type DocId = u32;
