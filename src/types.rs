use serde::{Deserialize, Serialize};

/// One row of the catalog. Immutable within a ranking pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
	#[serde(rename = "item_id")]
	pub id: String,
	pub name: String,
	pub category: String,
	pub color: String,
	pub occasion: String,
	/// Comma-separated free-text tags, e.g. "minimal, streetwear".
	pub style_tags: String,
	pub price: f64,
}

/// User preferences for a single scoring request. All string fields are
/// expected to be normalized (trimmed, lowercased) by the constructor.
#[derive(Debug, Clone)]
pub struct UserProfile {
	pub colors: Vec<String>,
	pub occasion: String,
	pub tags: Vec<String>,
	pub budget: f64,
	pub top_k: usize,
}

impl UserProfile {
	/// Build a profile from raw comma-separated inputs, normalizing each
	/// field the same way catalog tags are normalized.
	pub fn from_raw(colors: &str, occasion: &str, tags: &str, budget: f64, top_k: usize) -> Self {
		Self {
			colors: crate::vocab::normalize_tags(colors),
			occasion: occasion.trim().to_lowercase(),
			tags: crate::vocab::normalize_tags(tags),
			budget,
			top_k,
		}
	}
}

/// A catalog item with its computed scores. `final_score` equals
/// `base_score` until the reranker has run.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredItem {
	pub item: CatalogItem,
	pub base_score: f64,
	pub final_score: f64,
}

impl ScoredItem {
	pub fn new(item: CatalogItem, base_score: f64) -> Self {
		Self {
			item,
			base_score,
			final_score: base_score,
		}
	}
}
