//! Customer name extraction from shipping-label text.

mod parser;
pub mod rules;

pub use parser::{ExtractionResult, LabelParser};
pub use rules::{clean_customer_name, CustomerNameExtractor, FieldExtractor};
