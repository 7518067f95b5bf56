// ---------------------------------------------------------------------------
// stylerec — preference-ranked catalog recommendations
// ---------------------------------------------------------------------------
//
// Scores catalog items against a user profile (tag cosine similarity plus
// categorical boosts, gated by a soft budget penalty), then adjusts the
// ranking with persistent like/dislike feedback via tag overlap.
//
// Pipeline: catalog -> tag vocabulary -> per-item scoring -> top-K ->
// feedback-driven rerank. Feedback lives in a flat JSON file reloaded at
// the start of each session.
// ---------------------------------------------------------------------------

pub mod catalog;
pub mod config;
pub mod cosine;
pub mod error;
pub mod feedback;
pub mod recommend;
pub mod rerank;
pub mod scoring;
pub mod types;
pub mod vocab;

pub use catalog::Catalog;
pub use feedback::{FeedbackState, FeedbackStore};
pub use recommend::{recommend, recommend_with_feedback};
pub use rerank::rerank_with_feedback;
pub use types::{CatalogItem, ScoredItem, UserProfile};
pub use vocab::TagVocabulary;
