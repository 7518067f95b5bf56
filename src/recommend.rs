// ---------------------------------------------------------------------------
// Recommender — base ranking over the full catalog, plus the unified
// feedback pipeline (base scoring -> overlap rerank)
// ---------------------------------------------------------------------------

use crate::catalog::Catalog;
use crate::feedback::FeedbackState;
use crate::rerank::rerank_with_feedback;
use crate::scoring::score_item;
use crate::types::{ScoredItem, UserProfile};
use crate::vocab::TagVocabulary;

/// Score every catalog item against the profile and return the top-K by
/// base score, descending. Ties keep catalog order (stable sort). An
/// empty catalog or `top_k == 0` yields an empty result, never an error.
pub fn recommend(catalog: &Catalog, profile: &UserProfile) -> Vec<ScoredItem> {
	if catalog.is_empty() || profile.top_k == 0 {
		return Vec::new();
	}

	let vocab = TagVocabulary::build(catalog);
	let user_vec = vocab.vectorize(&profile.tags.join(","));

	let mut scored: Vec<ScoredItem> = catalog
		.items()
		.iter()
		.map(|item| ScoredItem::new(item.clone(), score_item(item, profile, &user_vec, &vocab)))
		.collect();

	scored.sort_by(|a, b| {
		b.base_score
			.partial_cmp(&a.base_score)
			.unwrap_or(std::cmp::Ordering::Equal)
	});
	scored.truncate(profile.top_k);

	tracing::debug!(
		candidates = catalog.len(),
		vocab = vocab.len(),
		returned = scored.len(),
		"Base ranking computed"
	);
	scored
}

/// Full ranking pipeline: base scoring followed by the feedback-driven
/// rerank over the same top-K set.
pub fn recommend_with_feedback(
	catalog: &Catalog,
	profile: &UserProfile,
	state: &FeedbackState,
) -> Vec<ScoredItem> {
	rerank_with_feedback(recommend(catalog, profile), catalog, state)
}
