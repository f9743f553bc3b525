use serde::{Deserialize, Serialize};

/// One billable line as it appears in YAML, either in a customer's default
/// item list or in an invoice data file. `hours` and `units` are both
/// quantities; an item carrying neither is billed at a flat rate.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LineItem {
    pub desc: Description,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<f64>,
    pub rate: f64,
    /// Unit label for `units`-based items, e.g. "hour" or "day".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat_percent: Option<f64>,
}

impl LineItem {
    /// Billed quantity, if the item carries one.
    pub fn quantity(&self) -> Option<f64> {
        self.units.or(self.hours)
    }
}

/// An item description: a plain string, or a list of lines where entries
/// starting with an uppercase letter render as sub-headings.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(untagged)]
pub enum Description {
    Text(String),
    Lines(Vec<String>),
}

impl Description {
    /// The description flattened to plain text, one entry per line.
    pub fn plain_text(&self) -> String {
        match self {
            Description::Text(text) => text.clone(),
            Description::Lines(lines) => lines.join("\n"),
        }
    }
}
