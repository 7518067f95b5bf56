// ---------------------------------------------------------------------------
// Feedback-driven reranking — tag-overlap adjustment over a base ranking
// ---------------------------------------------------------------------------
//
// Tags of previously liked/disliked items are pooled into two aggregate
// sets; each candidate's overlap with those pools shifts its score. The
// overlap is scaled by /8 and capped so an item sharing many tags with
// feedback history cannot swamp its base score. The dislike penalty (0.20)
// outweighs the like boost (0.15), suppressing disliked patterns faster
// than rewarding liked ones. Purely a re-scoring pass: no item is added or
// removed, and a final score may go negative when the penalty exceeds the
// base score.
// ---------------------------------------------------------------------------

use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::feedback::FeedbackState;
use crate::types::ScoredItem;
use crate::vocab::normalize_tags;

const OVERLAP_SCALE: f64 = 8.0;
const LIKE_BOOST: f64 = 0.15;
const DISLIKE_PENALTY: f64 = 0.20;

/// Union of normalized tags across all feedback item ids, resolved through
/// the catalog. Ids no longer present in the catalog are skipped.
fn pooled_tags<'a>(ids: impl Iterator<Item = &'a String>, catalog: &Catalog) -> HashSet<String> {
	let mut pool = HashSet::new();
	for id in ids {
		if let Some(item) = catalog.get(id) {
			pool.extend(normalize_tags(&item.style_tags));
		}
	}
	pool
}

fn overlap_adjustment(overlap: usize, cap: f64) -> f64 {
	(overlap as f64 / OVERLAP_SCALE).min(1.0) * cap
}

/// Recompute final scores from tag overlap with liked/disliked history and
/// re-sort descending (stable on ties). With empty feedback this is the
/// identity: final scores equal base scores and the order is unchanged.
pub fn rerank_with_feedback(
	mut scored: Vec<ScoredItem>,
	catalog: &Catalog,
	state: &FeedbackState,
) -> Vec<ScoredItem> {
	let liked_tags = pooled_tags(state.likes.iter(), catalog);
	let disliked_tags = pooled_tags(state.dislikes.iter(), catalog);

	for entry in &mut scored {
		let item_tags: HashSet<String> =
			normalize_tags(&entry.item.style_tags).into_iter().collect();
		let like_overlap = item_tags.intersection(&liked_tags).count();
		let dislike_overlap = item_tags.intersection(&disliked_tags).count();

		entry.final_score = entry.base_score
			+ overlap_adjustment(like_overlap, LIKE_BOOST)
			- overlap_adjustment(dislike_overlap, DISLIKE_PENALTY);
	}

	scored.sort_by(|a, b| {
		b.final_score
			.partial_cmp(&a.final_score)
			.unwrap_or(std::cmp::Ordering::Equal)
	});
	scored
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::CatalogItem;

	fn make_item(id: &str, tags: &str) -> CatalogItem {
		CatalogItem {
			id: id.to_string(),
			name: format!("Item {id}"),
			category: "top".to_string(),
			color: "black".to_string(),
			occasion: "casual".to_string(),
			style_tags: tags.to_string(),
			price: 50.0,
		}
	}

	fn scored(item: CatalogItem, base: f64) -> ScoredItem {
		ScoredItem::new(item, base)
	}

	#[test]
	fn empty_feedback_is_identity() {
		let catalog = Catalog::from_items(vec![
			make_item("1", "minimal"),
			make_item("2", "formal"),
		])
		.unwrap();
		let input = vec![
			scored(make_item("1", "minimal"), 0.9),
			scored(make_item("2", "formal"), 0.5),
		];
		let out = rerank_with_feedback(input, &catalog, &FeedbackState::default());
		assert_eq!(out[0].item.id, "1");
		assert_eq!(out[1].item.id, "2");
		assert_eq!(out[0].final_score, out[0].base_score);
		assert_eq!(out[1].final_score, out[1].base_score);
	}

	#[test]
	fn liked_overlap_boosts() {
		let catalog = Catalog::from_items(vec![
			make_item("1", "minimal, black"),
			make_item("2", "minimal, monochrome"),
		])
		.unwrap();
		let mut state = FeedbackState::default();
		state.record("1", true);

		let input = vec![scored(make_item("2", "minimal, monochrome"), 0.5)];
		let out = rerank_with_feedback(input, &catalog, &state);
		// one overlapping tag: 1/8 * 0.15
		assert!((out[0].final_score - (0.5 + 0.15 / 8.0)).abs() < 1e-12);
	}

	#[test]
	fn disliked_overlap_penalizes_more_than_like_boosts() {
		let catalog = Catalog::from_items(vec![
			make_item("1", "neon"),
			make_item("2", "neon, glitter"),
			make_item("3", "neon"),
		])
		.unwrap();
		let mut state = FeedbackState::default();
		state.record("1", false);
		state.record("3", true);

		// Item 2 overlaps both pools on "neon": penalty outweighs boost.
		let input = vec![scored(make_item("2", "neon, glitter"), 0.5)];
		let out = rerank_with_feedback(input, &catalog, &state);
		let expected = 0.5 + 0.15 / 8.0 - 0.20 / 8.0;
		assert!((out[0].final_score - expected).abs() < 1e-12);
		assert!(out[0].final_score < out[0].base_score);
	}

	#[test]
	fn adjustments_are_capped() {
		let many_tags = "a,b,c,d,e,f,g,h,i,j,k,l";
		let catalog = Catalog::from_items(vec![
			make_item("1", many_tags),
			make_item("2", many_tags),
		])
		.unwrap();
		let mut state = FeedbackState::default();
		state.record("1", true);

		// 12 overlapping tags, but the boost caps at 0.15.
		let input = vec![scored(make_item("2", many_tags), 0.5)];
		let out = rerank_with_feedback(input, &catalog, &state);
		assert!((out[0].final_score - 0.65).abs() < 1e-12);
	}

	#[test]
	fn final_score_may_go_negative() {
		let catalog = Catalog::from_items(vec![
			make_item("1", "neon"),
			make_item("2", "neon"),
		])
		.unwrap();
		let mut state = FeedbackState::default();
		state.record("1", false);

		let input = vec![scored(make_item("2", "neon"), 0.01)];
		let out = rerank_with_feedback(input, &catalog, &state);
		assert!(out[0].final_score < 0.0);
	}

	#[test]
	fn reorders_by_final_score() {
		let catalog = Catalog::from_items(vec![
			make_item("1", "neon, glitter, loud"),
			make_item("2", "neon, glitter, loud"),
			make_item("3", "minimal"),
		])
		.unwrap();
		let mut state = FeedbackState::default();
		state.record("1", false);

		let input = vec![
			scored(make_item("2", "neon, glitter, loud"), 0.6),
			scored(make_item("3", "minimal"), 0.58),
		];
		let out = rerank_with_feedback(input, &catalog, &state);
		// 0.6 - 3/8 * 0.20 = 0.525 drops below 0.58
		assert_eq!(out[0].item.id, "3");
		assert_eq!(out[1].item.id, "2");
		assert_eq!(out.len(), 2);
	}

	#[test]
	fn unknown_feedback_ids_are_skipped() {
		let catalog = Catalog::from_items(vec![make_item("1", "minimal")]).unwrap();
		let mut state = FeedbackState::default();
		state.record("ghost", true);

		let input = vec![scored(make_item("1", "minimal"), 0.4)];
		let out = rerank_with_feedback(input, &catalog, &state);
		assert_eq!(out[0].final_score, 0.4);
	}
}
