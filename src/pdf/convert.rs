use std::fs;
use std::path::Path;
use std::process::Command;

use crate::error::{InvoiceError, Result};

/// Default HTML-to-PDF converter binary.
pub const DEFAULT_CONVERTER: &str = "wkhtmltopdf";

/// Convert a rendered HTML document to a PDF file using the external
/// converter. The converter is treated as a black box: HTML file in, PDF
/// file out, non-zero exit is a failure with its stderr attached.
pub fn html_to_pdf(html: &str, output_path: &Path, converter: &str) -> Result<()> {
    // Probe for the converter before writing anything.
    if Command::new(converter).arg("--version").output().is_err() {
        return Err(InvoiceError::PdfConverterNotFound(converter.to_string()));
    }

    let temp_dir = std::env::temp_dir().join("invoice-gen");
    fs::create_dir_all(&temp_dir)?;

    let html_path = temp_dir.join("invoice.html");
    fs::write(&html_path, html)?;

    let output = Command::new(converter)
        .arg(&html_path)
        .arg(output_path)
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(InvoiceError::PdfGeneration(stderr.to_string()));
    }

    let _ = fs::remove_file(&html_path);

    Ok(())
}
