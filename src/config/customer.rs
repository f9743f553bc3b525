use serde::{Deserialize, Serialize};

use crate::config::LineItem;

/// A billed party, addressable by numeric id within the config.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Customer {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub city_province_country: String,
    pub postal_code: String,
    pub phone: String,
    pub currency: String,
    /// Default line items copied into newly scaffolded invoice data files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<LineItem>>,
}
