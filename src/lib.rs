pub mod config;
pub mod error;
pub mod invoice;
pub mod pdf;
pub mod render;

pub use config::{Business, Config, Customer, Description, LineItem};
pub use error::{InvoiceError, Result};
pub use invoice::{Invoice, InvoiceData, Item};
pub use render::Renderer;
