/// One listing row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRow {
    /// 1-based position in the full record list
    pub number: usize,
    pub date: String,
    pub message_count: usize,
    pub preview: String,
}

/// Everything the listing screen shows for the current page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub page: usize,
    pub total_pages: usize,
    /// 1-based bounds of this page within the displayed list
    pub first: usize,
    pub last: usize,
    pub displayed_count: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    /// Empty records in the filtered view that are currently hidden
    pub hidden_empty: usize,
    pub show_empty: bool,
    pub active_filter: Option<String>,
    pub rows: Vec<PageRow>,
}
