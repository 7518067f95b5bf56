// ---------------------------------------------------------------------------
// Item scoring — hybrid preference score for a single catalog item
// ---------------------------------------------------------------------------
//
// score = (0.7 * tag_cosine + color_boost + occasion_boost) * budget_factor
//
// Tag similarity is the primary signal; color/occasion are additive nudges
// capped at 0.15 each so they cannot dominate an irrelevant-tag item. The
// multiplicative budget gate keeps an over-budget item from outranking an
// in-budget item of comparable relevance. Base scores are always >= 0.
// ---------------------------------------------------------------------------

use crate::cosine::cosine_similarity;
use crate::types::{CatalogItem, UserProfile};
use crate::vocab::TagVocabulary;

const TAG_WEIGHT: f64 = 0.7;
const COLOR_BOOST: f64 = 0.15;
const OCCASION_BOOST: f64 = 0.15;

/// Soft budget penalty. 1.0 while price <= budget; beyond that an
/// exponential decay so moderately over-budget items survive with a
/// reduced score and far-over-budget items approach zero. The
/// `max(budget, 1.0)` guards division by a zero or near-zero budget.
pub fn budget_factor(price: f64, budget: f64) -> f64 {
	if price <= budget {
		return 1.0;
	}
	let over = price - budget;
	(-over / budget.max(1.0)).exp()
}

/// Score one item against the profile. `user_vec` is the profile's tag
/// vector over `vocab`, computed once per request by the caller.
pub fn score_item(
	item: &CatalogItem,
	profile: &UserProfile,
	user_vec: &[f32],
	vocab: &TagVocabulary,
) -> f64 {
	let item_vec = vocab.vectorize(&item.style_tags);
	let tag_score = cosine_similarity(user_vec, &item_vec);

	let color = item.color.trim().to_lowercase();
	let occasion = item.occasion.trim().to_lowercase();

	let color_boost = if profile.colors.iter().any(|c| c == &color) {
		COLOR_BOOST
	} else {
		0.0
	};
	let occasion_boost = if occasion == profile.occasion {
		OCCASION_BOOST
	} else {
		0.0
	};

	(TAG_WEIGHT * tag_score + color_boost + occasion_boost) * budget_factor(item.price, profile.budget)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::catalog::Catalog;

	fn make_item(id: &str, color: &str, occasion: &str, tags: &str, price: f64) -> CatalogItem {
		CatalogItem {
			id: id.to_string(),
			name: format!("Item {id}"),
			category: "top".to_string(),
			color: color.to_string(),
			occasion: occasion.to_string(),
			style_tags: tags.to_string(),
			price,
		}
	}

	fn make_profile(colors: &str, occasion: &str, tags: &str, budget: f64) -> UserProfile {
		UserProfile::from_raw(colors, occasion, tags, budget, 5)
	}

	#[test]
	fn budget_factor_at_or_under_budget_is_one() {
		assert_eq!(budget_factor(50.0, 100.0), 1.0);
		assert_eq!(budget_factor(100.0, 100.0), 1.0);
	}

	#[test]
	fn budget_factor_over_budget_decays() {
		let f = budget_factor(150.0, 100.0);
		assert!(f < 1.0);
		assert!((f - (-0.5f64).exp()).abs() < 1e-12);
	}

	#[test]
	fn budget_factor_approaches_zero_far_over() {
		assert!(budget_factor(10_000.0, 100.0) < 1e-12);
	}

	#[test]
	fn budget_factor_zero_budget_guard() {
		// max(budget, 1.0) keeps the decay finite for a zero budget
		let f = budget_factor(2.0, 0.0);
		assert!((f - (-2.0f64).exp()).abs() < 1e-12);
	}

	#[test]
	fn perfect_match_scores_one() {
		let item = make_item("1", "black", "casual", "minimal, black", 50.0);
		let catalog = Catalog::from_items(vec![item.clone()]).unwrap();
		let vocab = TagVocabulary::build(&catalog);
		let profile = make_profile("black", "casual", "minimal, black", 100.0);
		let user_vec = vocab.vectorize(&profile.tags.join(","));
		let score = score_item(&item, &profile, &user_vec, &vocab);
		// 0.7 * 1.0 + 0.15 + 0.15
		assert!((score - 1.0).abs() < 1e-9);
	}

	#[test]
	fn no_overlap_no_boosts_scores_zero() {
		let item = make_item("1", "red", "work", "formal", 50.0);
		let catalog = Catalog::from_items(vec![
			make_item("0", "black", "casual", "minimal", 10.0),
			item.clone(),
		])
		.unwrap();
		let vocab = TagVocabulary::build(&catalog);
		let profile = make_profile("black", "casual", "minimal", 100.0);
		let user_vec = vocab.vectorize(&profile.tags.join(","));
		assert_eq!(score_item(&item, &profile, &user_vec, &vocab), 0.0);
	}

	#[test]
	fn color_and_occasion_boosts_are_additive() {
		let item = make_item("1", "Black", "Casual", "formal", 50.0);
		let catalog = Catalog::from_items(vec![item.clone()]).unwrap();
		let vocab = TagVocabulary::build(&catalog);
		let profile = make_profile("black", "casual", "minimal", 100.0);
		let user_vec = vocab.vectorize(&profile.tags.join(","));
		// No tag overlap, both categorical boosts apply
		let score = score_item(&item, &profile, &user_vec, &vocab);
		assert!((score - 0.3).abs() < 1e-12);
	}

	#[test]
	fn over_budget_scales_whole_score() {
		let item = make_item("1", "black", "casual", "minimal", 200.0);
		let catalog = Catalog::from_items(vec![item.clone()]).unwrap();
		let vocab = TagVocabulary::build(&catalog);
		let profile = make_profile("black", "casual", "minimal", 100.0);
		let user_vec = vocab.vectorize(&profile.tags.join(","));
		let score = score_item(&item, &profile, &user_vec, &vocab);
		let expected = (0.7 + 0.15 + 0.15) * (-1.0f64).exp();
		assert!((score - expected).abs() < 1e-9);
	}

	#[test]
	fn score_never_negative() {
		let item = make_item("1", "neon", "gala", "glitter", 1e6);
		let catalog = Catalog::from_items(vec![item.clone()]).unwrap();
		let vocab = TagVocabulary::build(&catalog);
		let profile = make_profile("black", "casual", "minimal", 0.0);
		let user_vec = vocab.vectorize(&profile.tags.join(","));
		assert!(score_item(&item, &profile, &user_vec, &vocab) >= 0.0);
	}
}
