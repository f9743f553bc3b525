mod builder;
mod data;
mod model;
mod pipeline;

pub use builder::{data_file_name, invoice_date, invoice_number, new_invoice_data};
pub use data::{load_data, InvoiceData};
pub use model::{Invoice, Item};
pub use pipeline::{build_pdf, init_invoice, output_path};
