use clap::Parser;

use crate::types::UserProfile;

/// Occasions the scorer knows how to match against. Anything else falls
/// back to "casual".
pub const KNOWN_OCCASIONS: [&str; 6] = [
	"casual",
	"formal",
	"work",
	"date",
	"night-out",
	"smart-casual",
];

pub const DEFAULT_OCCASION: &str = "casual";

#[derive(Parser, Debug)]
#[command(
	name = "stylerec",
	about = "Preference-ranked catalog recommendations with feedback-adaptive reranking"
)]
pub struct CliArgs {
	/// Path to the items CSV
	#[arg(long, default_value = "data/items.csv", env = "STYLEREC_DATA")]
	pub data: String,

	/// Path to the persisted feedback file
	#[arg(long, default_value = "data/feedback.json", env = "STYLEREC_FEEDBACK")]
	pub feedback: String,

	/// Comma-separated preferred colors
	#[arg(long, default_value = "black, white")]
	pub colors: String,

	/// Occasion (casual / formal / work / date / night-out / smart-casual)
	#[arg(long, default_value = DEFAULT_OCCASION)]
	pub occasion: String,

	/// Comma-separated style tags
	#[arg(long, default_value = "minimal, comfortable")]
	pub tags: String,

	/// Max budget in USD
	#[arg(long, default_value = "100")]
	pub budget: f64,

	/// Number of recommendations
	#[arg(long, default_value = "5")]
	pub top_k: usize,

	/// Record a like for this item id, then exit
	#[arg(long, conflicts_with = "dislike")]
	pub like: Option<String>,

	/// Record a dislike for this item id, then exit
	#[arg(long)]
	pub dislike: Option<String>,

	/// Log level (trace, debug, info, warn, error)
	#[arg(long, default_value = "info", env = "STYLEREC_LOG_LEVEL")]
	pub log_level: String,
}

impl CliArgs {
	/// Build the scoring profile from the raw flag values. An occasion
	/// outside the known set falls back to the default with a warning.
	pub fn profile(&self) -> UserProfile {
		let occasion = self.occasion.trim().to_lowercase();
		let occasion = if KNOWN_OCCASIONS.contains(&occasion.as_str()) {
			occasion
		} else {
			tracing::warn!(
				given = %occasion,
				fallback = DEFAULT_OCCASION,
				"Unknown occasion"
			);
			DEFAULT_OCCASION.to_string()
		};
		UserProfile::from_raw(&self.colors, &occasion, &self.tags, self.budget, self.top_k)
	}
}
