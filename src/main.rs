use clap::Parser;

use stylerec::catalog::Catalog;
use stylerec::config::CliArgs;
use stylerec::feedback::FeedbackStore;
use stylerec::recommend::recommend_with_feedback;
use stylerec::vocab::normalize_tags;

fn main() {
	let args = CliArgs::parse();

	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_env_filter(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level)),
		)
		.init();

	let catalog = match Catalog::from_csv_path(&args.data) {
		Ok(c) => c,
		Err(e) => {
			tracing::error!(path = %args.data, "Failed to load catalog: {}", e);
			std::process::exit(1);
		}
	};

	let mut store = FeedbackStore::open(&args.feedback);

	// Feedback recording is its own invocation; scoring happens next run.
	let feedback_target = match (&args.like, &args.dislike) {
		(Some(id), _) => Some((id.clone(), true)),
		(_, Some(id)) => Some((id.clone(), false)),
		_ => None,
	};
	if let Some((id, liked)) = feedback_target {
		if let Err(e) = record_feedback(&mut store, &catalog, &id, liked) {
			tracing::error!("Failed to record feedback: {}", e);
			std::process::exit(1);
		}
		println!(
			"Recorded {} for item {id}. Next run will adapt.",
			if liked { "like" } else { "dislike" }
		);
		return;
	}

	let profile = args.profile();
	let recs = recommend_with_feedback(&catalog, &profile, store.state());

	println!("\nTop recommendations:\n");
	for rec in &recs {
		let item = &rec.item;
		println!(
			"- [{}] {} (${:.0}) | {} | {} | {} | score={:.3}",
			item.id, item.name, item.price, item.category, item.color, item.occasion, rec.final_score
		);
	}

	let weights = &store.state().tag_weights;
	if !weights.is_empty() {
		println!("\nLearned tag weights:");
		for (tag, weight) in weights {
			println!("  {tag}: {weight:+.1}");
		}
	}
}

fn record_feedback(
	store: &mut FeedbackStore,
	catalog: &Catalog,
	item_id: &str,
	liked: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let item = catalog
		.get(item_id)
		.ok_or_else(|| format!("item {item_id} not found in catalog"))?;
	let item_tags = normalize_tags(&item.style_tags);

	store.record(item_id, liked)?;
	if liked {
		store.update_tag_weights(&item_tags, &[])?;
	} else {
		store.update_tag_weights(&[], &item_tags)?;
	}
	Ok(())
}
