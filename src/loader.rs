//! Load estimate and ledger records from CSV/JSON files
//!
//! Everything under this module is glue for the report binaries: the
//! engine itself only ever sees the already-loaded record slices.

use crate::estimate::{LineItem, TaxRate, UnitPricing};
use crate::project::{CostEntry, HourEntry, ProjectLedger, TimeEntry};
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors from loading record files
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line item row {row} has neither unit_price nor unit_cost")]
    MissingUnitPrice { row: usize },
}

/// Flat CSV row for a line item; nested pricing shapes don't map to CSV
/// columns, so rows are flattened here and converted after parsing.
#[derive(Debug, Deserialize)]
struct LineItemRecord {
    quantity: f64,
    #[serde(default)]
    unit_price: Option<f64>,
    #[serde(default)]
    unit_cost: Option<f64>,
    #[serde(default)]
    margin_percent: Option<f64>,
    #[serde(default)]
    tax_rate: Option<f64>,
}

impl LineItemRecord {
    fn into_line_item(self, row: usize) -> Result<LineItem, LoadError> {
        let pricing = match (self.unit_price, self.unit_cost) {
            // A stored unit price wins over cost/margin when both exist
            (Some(unit_price), _) => UnitPricing::Priced { unit_price },
            (None, Some(unit_cost)) => UnitPricing::CostMargin {
                unit_cost,
                margin_percent: self.margin_percent.unwrap_or(0.0),
            },
            (None, None) => return Err(LoadError::MissingUnitPrice { row }),
        };
        Ok(LineItem {
            quantity: self.quantity,
            pricing,
            tax_rate: TaxRate::from(self.tax_rate),
        })
    }
}

/// Load line items from a CSV file
pub fn load_line_items<P: AsRef<Path>>(path: P) -> Result<Vec<LineItem>, LoadError> {
    load_line_items_from_reader(File::open(path)?)
}

/// Load line items from any CSV reader
pub fn load_line_items_from_reader<R: Read>(reader: R) -> Result<Vec<LineItem>, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut items = Vec::new();
    for (row, record) in csv_reader.deserialize::<LineItemRecord>().enumerate() {
        items.push(record?.into_line_item(row + 1)?);
    }
    Ok(items)
}

/// Load line items from a JSON array file (the estimate export format)
pub fn load_line_items_json<P: AsRef<Path>>(path: P) -> Result<Vec<LineItem>, LoadError> {
    Ok(serde_json::from_reader(File::open(path)?)?)
}

/// Load cost entries (date, amount, kind) from a CSV file
pub fn load_cost_entries<P: AsRef<Path>>(path: P) -> Result<Vec<CostEntry>, LoadError> {
    load_cost_entries_from_reader(File::open(path)?)
}

/// Load cost entries from any CSV reader
pub fn load_cost_entries_from_reader<R: Read>(reader: R) -> Result<Vec<CostEntry>, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize()
        .collect::<Result<Vec<CostEntry>, csv::Error>>()
        .map_err(LoadError::from)
}

/// Load hour entries (date, hours, hourly_rate) from a CSV file
pub fn load_hour_entries<P: AsRef<Path>>(path: P) -> Result<Vec<HourEntry>, LoadError> {
    load_hour_entries_from_reader(File::open(path)?)
}

/// Load hour entries from any CSV reader
pub fn load_hour_entries_from_reader<R: Read>(reader: R) -> Result<Vec<HourEntry>, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize()
        .collect::<Result<Vec<HourEntry>, csv::Error>>()
        .map_err(LoadError::from)
}

/// Load time-tracking sessions (date, minutes) from a CSV file
pub fn load_time_entries<P: AsRef<Path>>(path: P) -> Result<Vec<TimeEntry>, LoadError> {
    load_time_entries_from_reader(File::open(path)?)
}

/// Load time-tracking sessions from any CSV reader
pub fn load_time_entries_from_reader<R: Read>(reader: R) -> Result<Vec<TimeEntry>, LoadError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize()
        .collect::<Result<Vec<TimeEntry>, csv::Error>>()
        .map_err(LoadError::from)
}

/// Load one project's ledger (budget + entries) from a JSON file
pub fn load_project_ledger<P: AsRef<Path>>(path: P) -> Result<ProjectLedger, LoadError> {
    Ok(serde_json::from_reader(File::open(path)?)?)
}
