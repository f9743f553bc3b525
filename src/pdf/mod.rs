mod convert;
mod open;

pub use convert::{html_to_pdf, DEFAULT_CONVERTER};
pub use open::open_file;
