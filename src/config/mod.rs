mod business;
mod customer;
mod item;

pub use business::Business;
pub use customer::Customer;
pub use item::{Description, LineItem};

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{InvoiceError, Result};

/// Default config location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Process-wide configuration: the business identity plus the customer
/// directory, with render-time tax settings and optional tool overrides.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(flatten)]
    pub business: Business,
    /// Sales tax rate applied when an invoice marks itself taxable,
    /// e.g. 0.05 for 5%.
    #[serde(default)]
    pub tax_rate: f64,
    /// Short tax description rendered next to the tax line, e.g. "GST".
    #[serde(default)]
    pub tax_desc: String,
    /// HTML-to-PDF converter binary. Defaults to wkhtmltopdf.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_converter: Option<String>,
    /// Command used to open generated PDFs instead of the platform default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewer: Option<String>,
    /// Path to an HTML template overriding the embedded default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    pub customers: Vec<Customer>,
}

impl Config {
    /// Look up a customer by id.
    pub fn customer(&self, id: u32) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id == id)
    }

    /// A fresh placeholder config for the operator to fill in, written when
    /// no config file exists yet.
    pub fn placeholder() -> Self {
        Config {
            business: Business {
                name: "[BUSINESS_NAME]".into(),
                address: "[BUSINESS_ADDRESS]".into(),
                city_province_country: "[BUSINESS_CITY_PROVINCE_COUNTRY]".into(),
                postal_code: "[BUSINESS_POSTAL_CODE]".into(),
                phone: "[BUSINESS_PHONE]".into(),
                email: "[BUSINESS_EMAIL]".into(),
                owner: "[BUSINESS_OWNER]".into(),
                abrv: "[ABRV]".into(),
                tax_number: String::new(),
                reg_number: String::new(),
                iban: String::new(),
                swift: String::new(),
            },
            tax_rate: 0.0,
            tax_desc: String::new(),
            pdf_converter: None,
            viewer: None,
            template: None,
            customers: vec![Customer {
                id: 1,
                name: "[CUSTOMER_NAME]".into(),
                address: "[CUSTOMER_ADDRESS]".into(),
                city_province_country: "[CUSTOMER_CITY_PROVINCE_COUNTRY]".into(),
                postal_code: "[CUSTOMER_POSTAL_CODE]".into(),
                phone: "[CUSTOMER_PHONE]".into(),
                currency: "CAD".into(),
                items: None,
            }],
        }
    }
}

/// Load config.yaml.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|e| InvoiceError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Serialize a value as YAML and write it to `path`.
pub fn write_yaml<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = serde_yaml::to_string(value).map_err(|e| InvoiceError::YamlWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    fs::write(path, content)?;
    Ok(())
}
