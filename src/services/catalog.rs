use crate::models::DishRecord;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading the dish dataset
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to open dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed dataset: {0}")]
    Csv(#[from] csv::Error),
}

/// Options controlling how raw dataset rows are cleaned
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// Drop rows without a `user_id` or a numeric `rating`
    pub drop_incomplete: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { drop_incomplete: true }
    }
}

/// One CSV row as found in the file. Columns that are missing from the
/// header come through as `None`, unknown columns are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDishRow {
    user_id: Option<String>,
    dish_name: Option<String>,
    restaurant_name: Option<String>,
    average_cost: Option<String>,
    rating: Option<String>,
    diet_type: Option<String>,
    calories: Option<String>,
    cuisine: Option<String>,
    img_url: Option<String>,
}

impl RawDishRow {
    fn into_record(self, options: &LoadOptions) -> Option<DishRecord> {
        let dish_name = self.dish_name.as_deref().map(str::trim).unwrap_or_default();
        if dish_name.is_empty() {
            return None;
        }

        let rating = parse_number(self.rating.as_deref());
        if options.drop_incomplete {
            let has_user = self.user_id.as_deref().is_some_and(|u| !u.trim().is_empty());
            if !has_user || rating.is_none() {
                return None;
            }
        }

        let record = DishRecord {
            dish_name: dish_name.to_string(),
            restaurant_name: self.restaurant_name,
            average_cost: parse_number(self.average_cost.as_deref()),
            rating,
            diet_type: self.diet_type,
            calories: parse_number(self.calories.as_deref()),
            cuisine: self.cuisine,
            img_url: self.img_url,
        };

        Some(record.normalized())
    }
}

/// Lenient numeric coercion: anything that does not parse is absent
fn parse_number(value: Option<&str>) -> Option<f64> {
    value
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|n| n.is_finite())
}

/// Immutable, deduplicated in-memory table of dishes
///
/// Built once at startup and shared read-only between workers.
#[derive(Debug, Clone, Default)]
pub struct DishCatalog {
    records: Vec<DishRecord>,
    by_name: HashMap<String, usize>,
}

impl DishCatalog {
    /// Build a catalog from records, keeping the first record seen for each name
    pub fn from_records(records: impl IntoIterator<Item = DishRecord>) -> Self {
        let mut catalog = Self::default();

        for record in records {
            if catalog.by_name.contains_key(&record.dish_name) {
                continue;
            }
            catalog.by_name.insert(record.dish_name.clone(), catalog.records.len());
            catalog.records.push(record);
        }

        catalog
    }

    /// Load a catalog from CSV data with a header row
    pub fn from_reader<R: Read>(reader: R, options: &LoadOptions) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let mut total_rows = 0usize;
        let mut kept = Vec::new();

        for row in csv_reader.deserialize::<RawDishRow>() {
            total_rows += 1;
            if let Some(record) = row?.into_record(options) {
                kept.push(record);
            }
        }

        let kept_rows = kept.len();
        let catalog = Self::from_records(kept);

        tracing::info!(
            "Dataset loaded: {} rows read, {} kept after cleaning, {} unique dishes",
            total_rows,
            kept_rows,
            catalog.len()
        );

        Ok(catalog)
    }

    /// Load a catalog from a CSV file on disk
    pub fn from_path<P: AsRef<Path>>(path: P, options: &LoadOptions) -> Result<Self, CatalogError> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(file, options)
    }

    /// Exact, case-sensitive lookup by dish name
    pub fn lookup(&self, dish_name: &str) -> Option<&DishRecord> {
        self.by_name.get(dish_name).map(|&idx| &self.records[idx])
    }

    /// First dish whose name matches ignoring case
    pub fn find_case_insensitive(&self, dish_name: &str) -> Option<&DishRecord> {
        let wanted = dish_name.to_lowercase();
        self.records
            .iter()
            .find(|record| record.dish_name.to_lowercase() == wanted)
    }

    /// All dishes in load order
    pub fn all(&self) -> &[DishRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
