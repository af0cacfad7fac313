use std::borrow::Cow;
use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

// Chat exports are a single JSON document; refuse anything beyond 256MB
const MAX_FILE_SIZE_BYTES: u64 = 256 * 1024 * 1024;

const BACKUP_SUFFIX: &str = ".backup";

/// Default Markdown path for an input file: a `.json` suffix becomes `.md`, any other
/// extension is replaced, and a bare name gains `.md`
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use chat_scribe::utils::default_output_path;
///
/// assert_eq!(default_output_path(Path::new("chats.json")), PathBuf::from("chats.md"));
/// ```
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("md")
}

/// Normalise a user-supplied output name so it always ends in `.md`
pub fn ensure_markdown_extension(name: &str) -> PathBuf {
    if name.ends_with(".md") { PathBuf::from(name) } else { PathBuf::from(format!("{}.md", name)) }
}

/// Sibling path holding the byte-for-byte copy taken before a destructive rewrite
pub fn backup_path(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_os_string();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Validates that a file's size is within acceptable limits
///
/// Takes an open file handle so the size checked is the size of the file actually read.
///
/// # Errors
///
/// Returns an error if the metadata cannot be read or the file exceeds the limit.
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    let file_size = metadata.len();
    if file_size > MAX_FILE_SIZE_BYTES {
        bail!(
            "File too large: {} ({} bytes, max {} bytes)",
            path.display(),
            file_size,
            MAX_FILE_SIZE_BYTES
        );
    }

    Ok(())
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    let home = dirs::home_dir();
    format_path_with_tilde_internal(path, home.as_deref())
}

/// Internal helper for path formatting with an explicit home (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&Path>) -> String {
    if let Some(home) = home
        && let Ok(rest) = path.strip_prefix(home)
    {
        return Path::new("~").join(rest).to_string_lossy().into_owned();
    }

    match path.to_string_lossy() {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}
