use thiserror::Error;

/// Errors raised while loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	#[error("CSV error: {0}")]
	Csv(#[from] csv::Error),
	#[error("Invalid row {row}: {reason}")]
	InvalidRow { row: usize, reason: String },
	#[error("Duplicate item id: {0}")]
	DuplicateId(String),
}

/// Errors raised while persisting feedback state.
///
/// Read-side failures are not represented here: a missing or corrupt
/// feedback file falls back to an empty state rather than erroring.
#[derive(Debug, Error)]
pub enum FeedbackError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}
