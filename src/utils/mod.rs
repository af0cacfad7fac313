pub mod paths;
pub mod terminal;
pub mod text;

pub use paths::{
    backup_path, default_output_path, ensure_markdown_extension, format_path_with_tilde,
    validate_file_size,
};
pub use terminal::sanitize_line;
pub use text::{contains_case_insensitive, context_window, find_case_insensitive};
