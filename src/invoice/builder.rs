use chrono::{DateTime, Local};
use rand::Rng;

use crate::config::{Config, Customer, Description, LineItem};
use crate::invoice::InvoiceData;

const NUMBER_SUFFIX_LEN: usize = 5;
const SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate an invoice number: business abbreviation, current date as
/// DDMMYYYY, and a random five-character uppercase-alphanumeric suffix.
/// Collisions are possible and accepted; nothing downstream dedupes.
pub fn invoice_number(abrv: &str, now: &DateTime<Local>) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..NUMBER_SUFFIX_LEN)
        .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
        .collect();
    format!("{}{}{}", abrv, now.format("%d%m%Y"), suffix)
}

/// Display date used on scaffolded invoices, e.g. "Aug 06, 2026".
pub fn invoice_date(now: &DateTime<Local>) -> String {
    now.format("%b %d, %Y").to_string()
}

/// A fresh skeleton invoice for `customer`: generated number, today's date,
/// the customer's currency, and their default items when configured.
pub fn new_invoice_data(config: &Config, customer: &Customer, now: &DateTime<Local>) -> InvoiceData {
    InvoiceData {
        customer_id: customer.id,
        invoice_type: "invoice".into(),
        invoice_date: invoice_date(now),
        due_date: None,
        invoice_number: invoice_number(&config.business.abrv, now),
        currency: customer.currency.clone(),
        items: customer.items.clone().unwrap_or_else(placeholder_items),
        taxable: false,
    }
}

/// Placeholder item list for customers without configured defaults.
pub fn placeholder_items() -> Vec<LineItem> {
    vec![LineItem {
        desc: Description::Text("[DESCRIPTION]".into()),
        hours: Some(0.0),
        units: None,
        rate: 35.0,
        by: None,
        vat_percent: None,
    }]
}

/// File name for a scaffolded data file; spaces in names become
/// underscores so the name survives shells and file pickers.
pub fn data_file_name(business_name: &str, customer_name: &str, number: &str) -> String {
    format!(
        "{}_-_{}_Invoice_-_{}.yaml",
        sanitize(business_name),
        sanitize(customer_name),
        number
    )
}

fn sanitize(name: &str) -> String {
    name.replace(' ', "_")
}
