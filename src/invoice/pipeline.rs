use chrono::Local;
use std::path::{Path, PathBuf};

use crate::config::{write_yaml, Config};
use crate::error::{InvoiceError, Result};
use crate::invoice::{data_file_name, load_data, new_invoice_data};
use crate::pdf::{html_to_pdf, DEFAULT_CONVERTER};
use crate::render::Renderer;

/// Scaffold a new invoice data file for the customer named on the command
/// line. The argument is kept as a string so a non-numeric value gets its
/// own message instead of a clap parse error.
pub fn init_invoice(config: &Config, customer_id_arg: &str) -> Result<PathBuf> {
    let id: u32 = customer_id_arg
        .parse()
        .map_err(|_| InvoiceError::InvalidCustomerId(customer_id_arg.to_string()))?;
    let customer = config
        .customer(id)
        .ok_or(InvoiceError::CustomerNotFound(id))?;

    let data = new_invoice_data(config, customer, &Local::now());
    let file_name = data_file_name(&config.business.name, &customer.name, &data.invoice_number);
    let path = PathBuf::from(file_name);
    write_yaml(&path, &data)?;
    Ok(path)
}

/// Build a PDF from an invoice data file: load, resolve the customer,
/// render the HTML, and hand it to the external converter. Returns the
/// written PDF path.
pub fn build_pdf(config: &Config, data_path: &Path) -> Result<PathBuf> {
    let data = load_data(data_path)?;
    let customer = config
        .customer(data.customer_id)
        .ok_or(InvoiceError::CustomerNotFound(data.customer_id))?;

    println!("Generating...");

    let renderer = Renderer::from_config(config)?;
    let html = renderer.render(config, customer, &data)?;

    let pdf_path = output_path(data_path, &data.invoice_type);
    let converter = config.pdf_converter.as_deref().unwrap_or(DEFAULT_CONVERTER);
    html_to_pdf(&html, &pdf_path, converter)?;

    Ok(pdf_path)
}

/// PDF path for a data file: swap the .yaml extension for .pdf and replace
/// the literal "Invoice" in the name with the capitalized invoice type, so
/// a quote data file produces `..._Quote_-_<number>.pdf`.
pub fn output_path(data_path: &Path, invoice_type: &str) -> PathBuf {
    let name = data_path.file_name().unwrap_or_default().to_string_lossy();
    let stem = name.strip_suffix(".yaml").unwrap_or(&name);
    let renamed = stem.replace("Invoice", &capitalize(invoice_type));
    data_path.with_file_name(format!("{renamed}.pdf"))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
