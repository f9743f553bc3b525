use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invoice data file '{0}' does not exist.")]
    DataFileNotFound(PathBuf),

    #[error("Failed to parse invoice data file {path}: {source}")]
    DataParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Customer with id '{0}' does not exist, please use -l to list active customers.")]
    CustomerNotFound(u32),

    #[error("Invalid customer_id value '{0}', please enter a number or use -l to list active customers.")]
    InvalidCustomerId(String),

    #[error("Invalid item '{item}': {reason}")]
    InvalidItem { item: String, reason: String },

    #[error("Template file not found: {0}")]
    TemplateNotFound(PathBuf),

    #[error("Failed to render invoice template: {0}")]
    TemplateRender(#[from] tera::Error),

    #[error("'{0}' not found. Install it or point `pdf_converter` in config.yaml at an HTML-to-PDF tool.")]
    PdfConverterNotFound(String),

    #[error("Failed to generate PDF: {0}")]
    PdfGeneration(String),

    #[error("Failed to write YAML file {path}: {source}")]
    YamlWrite {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InvoiceError>;
