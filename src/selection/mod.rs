//! Interactive selection: pagination, filtering, search and chat-number resolution

pub mod engine;
pub mod search;
pub mod view;

pub use engine::{
    Effect, Mode, Notice, PAGE_SIZE, SelectionEngine, parse_selection, total_pages,
};
pub use search::{SearchHit, SearchReport, search_records};
pub use view::{PageRow, PageView};
