// ---------------------------------------------------------------------------
// Tag vocabulary — deterministic tag -> index mapping over a catalog
// ---------------------------------------------------------------------------
//
// Indices are assigned in catalog iteration order, so for a fixed catalog
// (same rows, same order) the vocabulary and every vector derived from it
// are identical across runs.
// ---------------------------------------------------------------------------

use std::collections::HashMap;

use crate::catalog::Catalog;

/// Normalize a comma-separated tag string into trimmed, lowercased,
/// non-empty tokens. Order is preserved; duplicates are not removed.
pub fn normalize_tags(raw: &str) -> Vec<String> {
	raw.split(',')
		.map(|t| t.trim().to_lowercase())
		.filter(|t| !t.is_empty())
		.collect()
}

/// Mapping from normalized tag to a dense vector index. Read-only after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct TagVocabulary {
	index: HashMap<String, usize>,
}

impl TagVocabulary {
	/// Build the vocabulary from the catalog's tag column. An empty
	/// catalog yields an empty vocabulary (all similarities become 0).
	pub fn build(catalog: &Catalog) -> Self {
		let mut index = HashMap::new();
		for item in catalog.items() {
			for tag in normalize_tags(&item.style_tags) {
				let next = index.len();
				index.entry(tag).or_insert(next);
			}
		}
		Self { index }
	}

	pub fn len(&self) -> usize {
		self.index.len()
	}

	pub fn is_empty(&self) -> bool {
		self.index.is_empty()
	}

	pub fn index_of(&self, tag: &str) -> Option<usize> {
		self.index.get(tag).copied()
	}

	/// Convert a comma-separated tag string into a binary presence vector
	/// over the vocabulary (1.0 if present, 0.0 otherwise — not a count).
	/// Tags outside the vocabulary are silently ignored.
	pub fn vectorize(&self, tags: &str) -> Vec<f32> {
		let mut vec = vec![0.0f32; self.index.len()];
		for tag in normalize_tags(tags) {
			if let Some(&i) = self.index.get(&tag) {
				vec[i] = 1.0;
			}
		}
		vec
	}
}
