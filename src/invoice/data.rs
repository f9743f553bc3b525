use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::config::LineItem;
use crate::error::{InvoiceError, Result};

/// One invoice data file: everything specific to a single invoice, kept as
/// editable YAML next to the config. The business and customer themselves
/// are resolved from the config at build time via `customer_id`.
#[derive(Debug, Deserialize, Serialize)]
pub struct InvoiceData {
    pub customer_id: u32,
    /// "invoice" gets the payment-terms footer; any other value (e.g.
    /// "quote") renders without one.
    pub invoice_type: String,
    pub invoice_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    pub invoice_number: String,
    pub currency: String,
    pub items: Vec<LineItem>,
    #[serde(default)]
    pub taxable: bool,
}

/// Load an invoice data file.
pub fn load_data(path: &Path) -> Result<InvoiceData> {
    if !path.exists() {
        return Err(InvoiceError::DataFileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|e| InvoiceError::DataParse {
        path: path.to_path_buf(),
        source: e,
    })
}
