// ---------------------------------------------------------------------------
// Feedback store — persistent likes/dislikes and learned tag weights
// ---------------------------------------------------------------------------
//
// State lives in a flat JSON file, loaded at session start and written back
// synchronously after each mutation. Single-writer, single-process; no
// locking is provided. Saves go through a temp-file-then-rename swap so a
// crash mid-write never leaves a half-written file for the next load.
// ---------------------------------------------------------------------------

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::FeedbackError;

/// Fixed step applied to a tag weight per like/dislike event. Weights are
/// unbounded and accumulate across repeated identical feedback; callers
/// relying on bounded weights must clamp externally.
const WEIGHT_STEP: f64 = 0.2;

/// Persisted feedback. `likes` and `dislikes` are mutually exclusive;
/// `BTreeSet`/`BTreeMap` keep the serialized form sorted and deduplicated
/// so a state round-trips exactly through save/load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackState {
	#[serde(default)]
	pub likes: BTreeSet<String>,
	#[serde(default)]
	pub dislikes: BTreeSet<String>,
	#[serde(default)]
	pub tag_weights: BTreeMap<String, f64>,
}

impl FeedbackState {
	/// Move `item_id` into the liked or disliked set, removing it from
	/// the other so the sets stay disjoint.
	pub fn record(&mut self, item_id: &str, liked: bool) {
		if liked {
			self.likes.insert(item_id.to_string());
			self.dislikes.remove(item_id);
		} else {
			self.dislikes.insert(item_id.to_string());
			self.likes.remove(item_id);
		}
	}

	/// Apply fixed-step weight updates: +0.2 per liked tag, -0.2 per
	/// disliked tag. Tags empty after trim/lowercase are skipped.
	pub fn update_tag_weights(&mut self, liked_tags: &[String], disliked_tags: &[String]) {
		for tag in liked_tags {
			let tag = tag.trim().to_lowercase();
			if !tag.is_empty() {
				*self.tag_weights.entry(tag).or_insert(0.0) += WEIGHT_STEP;
			}
		}
		for tag in disliked_tags {
			let tag = tag.trim().to_lowercase();
			if !tag.is_empty() {
				*self.tag_weights.entry(tag).or_insert(0.0) -= WEIGHT_STEP;
			}
		}
	}
}

/// Owns the feedback file path and the in-memory state. Every mutating
/// operation persists before returning.
#[derive(Debug)]
pub struct FeedbackStore {
	path: PathBuf,
	state: FeedbackState,
}

impl FeedbackStore {
	/// Load-or-default. A missing file yields an empty state; a corrupt
	/// or unreadable file is logged and also yields an empty state, so
	/// repeated opens never fail and never corrupt anything.
	pub fn open(path: impl Into<PathBuf>) -> Self {
		let path = path.into();
		let state = load_state(&path);
		Self { path, state }
	}

	pub fn state(&self) -> &FeedbackState {
		&self.state
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Record a like/dislike for an item and persist.
	pub fn record(&mut self, item_id: &str, liked: bool) -> Result<(), FeedbackError> {
		self.state.record(item_id, liked);
		self.save()
	}

	/// Apply tag-weight updates and persist.
	pub fn update_tag_weights(
		&mut self,
		liked_tags: &[String],
		disliked_tags: &[String],
	) -> Result<(), FeedbackError> {
		self.state.update_tag_weights(liked_tags, disliked_tags);
		self.save()
	}

	/// Write the current state to disk via temp-file-then-rename.
	pub fn save(&self) -> Result<(), FeedbackError> {
		if let Some(parent) = self.path.parent() {
			if !parent.as_os_str().is_empty() {
				std::fs::create_dir_all(parent)?;
			}
		}
		let json = serde_json::to_string_pretty(&self.state)?;
		let tmp = self.path.with_extension("json.tmp");
		std::fs::write(&tmp, json.as_bytes())?;
		std::fs::rename(&tmp, &self.path)?;
		Ok(())
	}
}

fn load_state(path: &Path) -> FeedbackState {
	match std::fs::read_to_string(path) {
		Ok(contents) => match serde_json::from_str(&contents) {
			Ok(state) => state,
			Err(e) => {
				tracing::warn!(path = %path.display(), error = %e, "Corrupt feedback file, starting fresh");
				FeedbackState::default()
			}
		},
		Err(e) if e.kind() == std::io::ErrorKind::NotFound => FeedbackState::default(),
		Err(e) => {
			tracing::warn!(path = %path.display(), error = %e, "Unreadable feedback file, starting fresh");
			FeedbackState::default()
		}
	}
}
