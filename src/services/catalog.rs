use crate::core::Catalog;
use crate::models::InfluencerRecord;
use serde::Deserialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Catalog file not found: {0}")]
    NotFound(PathBuf),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// One CSV row as exported from the influencer spreadsheet
#[derive(Debug, Deserialize)]
struct CatalogRow {
    influencer_name: String,
    category: String,
    content_type: String,
    platform: String,
    total_followers: u64,
    overall_engagement: f64,
    rates_for_charging_inr: f64,
    age: u32,
    gender: String,
    email: String,
    phone_number: String,
}

impl From<CatalogRow> for InfluencerRecord {
    fn from(row: CatalogRow) -> Self {
        InfluencerRecord {
            name: row.influencer_name.trim().to_string(),
            category: normalize(&row.category),
            content_type: normalize(&row.content_type),
            platform: normalize(&row.platform),
            total_followers: row.total_followers,
            overall_engagement: row.overall_engagement,
            rate: row.rates_for_charging_inr,
            age: row.age,
            gender: normalize(&row.gender),
            email: normalize(&row.email),
            phone: normalize(&row.phone_number),
        }
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Load the catalog from a CSV file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CatalogError::NotFound(path.to_path_buf()));
    }

    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    let catalog = read_catalog(file)?;

    tracing::info!("Loaded {} influencer records from {}", catalog.len(), path.display());

    Ok(catalog)
}

/// Parse catalog CSV from any reader
///
/// A row that cannot be coerced to the record types fails the whole load:
/// a malformed catalog is a broken export, not something to paper over.
pub fn read_catalog<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let records = csv_reader
        .deserialize::<CatalogRow>()
        .map(|row| row.map(InfluencerRecord::from))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Catalog::new(records))
}
