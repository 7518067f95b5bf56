// ---------------------------------------------------------------------------
// Catalog — CSV-backed item source with id lookup
// ---------------------------------------------------------------------------
//
// Expected columns: item_id, name, category, color, occasion, style_tags,
// price. Rows are validated here so the scoring core can assume well-typed
// items: non-negative numeric price, non-empty unique id.
// ---------------------------------------------------------------------------

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::error::CatalogError;
use crate::types::CatalogItem;

/// The full item catalog, preserving CSV row order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	items: Vec<CatalogItem>,
	by_id: HashMap<String, usize>,
}

impl Catalog {
	/// Build a catalog from already-parsed items, validating ids.
	pub fn from_items(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
		let mut by_id = HashMap::with_capacity(items.len());
		for (row, item) in items.iter().enumerate() {
			validate_item(item, row + 1)?;
			if by_id.insert(item.id.clone(), row).is_some() {
				return Err(CatalogError::DuplicateId(item.id.clone()));
			}
		}
		Ok(Self { items, by_id })
	}

	/// Load and validate a catalog from a CSV file.
	pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
		let file = std::fs::File::open(path.as_ref())?;
		Self::from_csv_reader(file)
	}

	/// Load and validate a catalog from any CSV reader (headers required).
	pub fn from_csv_reader(reader: impl Read) -> Result<Self, CatalogError> {
		let mut csv_reader = csv::Reader::from_reader(reader);
		let mut items = Vec::new();
		for record in csv_reader.deserialize() {
			let item: CatalogItem = record?;
			items.push(item);
		}
		let catalog = Self::from_items(items)?;
		tracing::debug!(items = catalog.len(), "Catalog loaded");
		Ok(catalog)
	}

	/// Items in stable catalog order.
	pub fn items(&self) -> &[CatalogItem] {
		&self.items
	}

	pub fn get(&self, id: &str) -> Option<&CatalogItem> {
		self.by_id.get(id).map(|&i| &self.items[i])
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}

fn validate_item(item: &CatalogItem, row: usize) -> Result<(), CatalogError> {
	if item.id.trim().is_empty() {
		return Err(CatalogError::InvalidRow {
			row,
			reason: "empty item_id".to_string(),
		});
	}
	if !item.price.is_finite() || item.price < 0.0 {
		return Err(CatalogError::InvalidRow {
			row,
			reason: format!("invalid price: {}", item.price),
		});
	}
	Ok(())
}
