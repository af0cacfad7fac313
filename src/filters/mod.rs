pub mod apply;
pub mod ast;
pub mod parser;

pub use apply::{apply_filter, matches_filter};
pub use ast::{DateFilter, DateOperator, ViewFilter};
pub use parser::parse_date_filter;
