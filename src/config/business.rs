use serde::{Deserialize, Serialize};

/// The invoice issuer's fixed identity, contact, and banking data.
/// Loaded once per run from config.yaml and never mutated afterwards.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Business {
    pub name: String,
    pub address: String,
    pub city_province_country: String,
    pub postal_code: String,
    pub phone: String,
    pub email: String,
    /// Display name cheques are made payable to.
    pub owner: String,
    /// Short business abbreviation used as the invoice-number prefix.
    pub abrv: String,
    #[serde(default)]
    pub tax_number: String,
    #[serde(default)]
    pub reg_number: String,
    #[serde(default)]
    pub iban: String,
    #[serde(default)]
    pub swift: String,
}
