use std::fs;
use std::path::PathBuf;
use tera::{Context, Tera};

use crate::config::{Config, Customer, Description, LineItem};
use crate::error::{InvoiceError, Result};
use crate::invoice::{Invoice, InvoiceData, Item};

/// Default invoice template, embedded so the binary works without any
/// template files on disk.
const DEFAULT_TEMPLATE: &str = include_str!("../../templates/invoice.html");

const TEMPLATE_NAME: &str = "invoice.html";

/// Renders an invoice to a final HTML document by binding the business,
/// customer, and computed amounts into an HTML template.
pub struct Renderer {
    template: String,
}

impl Renderer {
    /// Use the config-declared template file when one is set, the embedded
    /// default otherwise.
    pub fn from_config(config: &Config) -> Result<Self> {
        let template = match &config.template {
            Some(path) => {
                let path = PathBuf::from(path);
                if !path.exists() {
                    return Err(InvoiceError::TemplateNotFound(path));
                }
                fs::read_to_string(&path)?
            }
            None => DEFAULT_TEMPLATE.to_string(),
        };
        Ok(Renderer { template })
    }

    pub fn with_template(template: impl Into<String>) -> Self {
        Renderer {
            template: template.into(),
        }
    }

    /// Produce the final HTML document for one invoice.
    pub fn render(
        &self,
        config: &Config,
        customer: &Customer,
        data: &InvoiceData,
    ) -> Result<String> {
        let items = compute_items(&data.items)?;
        let invoice = Invoice::new(
            data.invoice_number.clone(),
            data.invoice_date.clone(),
            data.due_date.clone().unwrap_or_default(),
            config.business.clone(),
            customer.clone(),
            items,
        );

        let rows: String = data
            .items
            .iter()
            .zip(invoice.items())
            .map(|(entry, item)| item_row(entry, item.total()))
            .collect();

        let subtotal = invoice.total();

        let mut ctx = Context::new();
        ctx.insert("business", invoice.business());
        ctx.insert("customer", invoice.customer());
        ctx.insert("invoice_number", invoice.number());
        ctx.insert("invoice_date", invoice.date());
        ctx.insert("due_date", invoice.due_date());
        ctx.insert("invoice_type", &data.invoice_type);
        ctx.insert("currency", &data.currency);
        ctx.insert("items", &rows);
        ctx.insert("subtotal", &money(subtotal));
        ctx.insert("taxable", &data.taxable);
        ctx.insert("sales_tax", &sales_tax(subtotal, data.taxable, config.tax_rate));
        ctx.insert("sales_tax_desc", &sales_tax_desc(data.taxable, &config.tax_desc));
        ctx.insert("total", &grand_total(subtotal, data.taxable, config.tax_rate));

        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, &self.template)?;
        Ok(tera.render(TEMPLATE_NAME, &ctx)?)
    }
}

/// Turn the raw YAML entries into computed items. `hours` and `units` both
/// act as the billed quantity; an entry with neither is a flat rate.
fn compute_items(entries: &[LineItem]) -> Result<Vec<Item>> {
    entries
        .iter()
        .map(|entry| {
            let amount = entry.quantity().unwrap_or(1.0);
            let unit = entry.by.as_deref().unwrap_or("unit");
            Item::new(
                entry.desc.plain_text(),
                unit,
                amount,
                entry.rate,
                entry.vat_percent.unwrap_or(0.0),
            )
        })
        .collect()
}

/// One table row per item. Entries with explicit `units` get a quantity
/// column and a per-unit rate; everything else shows a flat rate.
fn item_row(entry: &LineItem, total: f64) -> String {
    let mut row = String::from("<tr>");
    row.push_str(&format!(
        "<td class='item-cell'>{}</td>",
        render_description(&entry.desc)
    ));
    if let Some(units) = entry.units {
        let by = entry.by.as_deref().unwrap_or("unit");
        row.push_str(&format!(
            "<td class='text-center item-cell'>{units} {by}(s)</td>"
        ));
        row.push_str(&format!(
            "<td class='text-right item-cell'><span class='currency'>$</span>{} / {by}</td>",
            entry.rate
        ));
    } else {
        row.push_str("<td class='text-center item-cell'>-</td>");
        row.push_str(&format!(
            "<td class='text-right item-cell'><span class='currency'>$</span>{}</td>",
            entry.rate
        ));
    }
    row.push_str(&format!(
        "<td class='text-right item-cell'><span class='currency'>$</span>{}</td>",
        money(total)
    ));
    row.push_str("</tr>");
    row
}

/// A plain-string description renders verbatim. A list renders one line per
/// entry, dashed unless the entry starts with an uppercase letter, which
/// marks a sub-heading.
fn render_description(desc: &Description) -> String {
    match desc {
        Description::Text(text) => text.clone(),
        Description::Lines(lines) => {
            let mut out = String::new();
            for line in lines {
                let heading = line.chars().next().is_some_and(|c| c.is_uppercase());
                if !heading {
                    out.push_str("- ");
                }
                out.push_str(line);
                out.push_str("<br/>");
            }
            out
        }
    }
}

fn money(value: f64) -> String {
    format!("{value:.2}")
}

fn sales_tax(subtotal: f64, taxable: bool, tax_rate: f64) -> String {
    if taxable {
        money(subtotal * tax_rate)
    } else {
        "-".to_string()
    }
}

fn sales_tax_desc(taxable: bool, tax_desc: &str) -> String {
    if taxable {
        format!("({tax_desc})")
    } else {
        String::new()
    }
}

fn grand_total(subtotal: f64, taxable: bool, tax_rate: f64) -> String {
    if taxable {
        money(subtotal + subtotal * tax_rate)
    } else {
        money(subtotal)
    }
}
