//! Message text rendering for Markdown export.
//!
//! Two passes, in this order:
//!
//! 1. **Thinking blocks** (`<think>…</think>`) are kept, removed, or folded into a
//!    `<details>` element depending on [`ThinkingMode`].
//! 2. **Annotated code fences** opened as ```` ```lang:path/to/file ```` are rewritten into a
//!    `**File:**` label followed by a plain ```` ```lang ```` fence.
//!
//! The fence pass runs on the output of the thinking pass, so a fence that only existed
//! inside a removed thinking block is never labelled.

use std::borrow::Cow;
use std::sync::LazyLock;

use clap::ValueEnum;
use regex::{Captures, Regex};

/// Summary line of a folded thinking block
pub const THINKING_SUMMARY: &str = "Assistant's thinking process";

/// Non-greedy and dot-matches-newline, so back-to-back blocks are handled independently
static THINK_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<think>(.*?)</think>").expect("thinking block pattern is valid")
});

/// ```` ```lang:path\n<code>``` ```` with the code matched lazily up to the next fence
static ANNOTATED_FENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"```([a-zA-Z0-9_-]+):([^\n]+)\n((?s:.*?))```")
        .expect("annotated fence pattern is valid")
});

/// What to do with `<think>` blocks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ThinkingMode {
    /// Leave the text as written
    #[default]
    Keep,
    /// Delete blocks including their markers
    Remove,
    /// Collapse blocks into a `<details>` element
    Fold,
}

impl ThinkingMode {
    /// Map the interactive menu answer: 1 removes, 2 folds, anything else keeps
    pub fn from_menu_choice(choice: &str) -> Self {
        match choice.trim() {
            "1" => ThinkingMode::Remove,
            "2" => ThinkingMode::Fold,
            _ => ThinkingMode::Keep,
        }
    }
}

/// Render one message body for export
pub fn render_text(text: &str, mode: ThinkingMode) -> String {
    let without_thinking = apply_thinking_mode(text, mode);
    annotate_code_fences(&without_thinking).into_owned()
}

fn apply_thinking_mode(text: &str, mode: ThinkingMode) -> Cow<'_, str> {
    match mode {
        ThinkingMode::Keep => Cow::Borrowed(text),
        ThinkingMode::Remove => THINK_BLOCK_RE.replace_all(text, ""),
        ThinkingMode::Fold => THINK_BLOCK_RE.replace_all(text, |caps: &Captures| {
            format!(
                "<details>\n<summary>{}</summary>\n\n{}\n</details>",
                THINKING_SUMMARY,
                caps[1].trim()
            )
        }),
    }
}

fn annotate_code_fences(text: &str) -> Cow<'_, str> {
    ANNOTATED_FENCE_RE.replace_all(text, |caps: &Captures| {
        format!("**File:** `{}`\n\n```{}\n{}```", caps[2].trim(), &caps[1], &caps[3])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_returns_input_unchanged() {
        let text = "a<think>secret</think>b";
        assert_eq!(render_text(text, ThinkingMode::Keep), text);
    }

    #[test]
    fn test_remove_thinking_block() {
        assert_eq!(render_text("a<think>secret</think>b", ThinkingMode::Remove), "ab");
    }

    #[test]
    fn test_fold_thinking_block() {
        let rendered = render_text("a<think>secret</think>b", ThinkingMode::Fold);
        assert_eq!(
            rendered,
            "a<details>\n<summary>Assistant's thinking process</summary>\n\nsecret\n</details>b"
        );
        assert!(!rendered.contains("<think>"));
        assert!(!rendered.contains("</think>"));
    }

    #[test]
    fn test_fold_trims_inner_content() {
        let rendered = render_text("<think>\n  step one\n  step two\n\n</think>", ThinkingMode::Fold);
        assert!(rendered.contains("\n\nstep one\n  step two\n</details>"));
    }

    #[test]
    fn test_multiline_thinking_block_removed() {
        let text = "Start\n<think>\nline 1\nline 2\n</think>\nEnd";
        assert_eq!(render_text(text, ThinkingMode::Remove), "Start\n\nEnd");
    }

    #[test]
    fn test_back_to_back_blocks_handled_independently() {
        let text = "<think>one</think>middle<think>two</think>end";
        assert_eq!(render_text(text, ThinkingMode::Remove), "middleend");

        let folded = render_text(text, ThinkingMode::Fold);
        assert_eq!(folded.matches("<details>").count(), 2);
        assert!(folded.contains("middle"));
    }

    #[test]
    fn test_unclosed_thinking_block_untouched() {
        let text = "before <think>never closed";
        assert_eq!(render_text(text, ThinkingMode::Remove), text);
    }

    #[test]
    fn test_annotated_fence_rewritten() {
        let rendered = render_text("```ts:src/app.ts\ncode\n```", ThinkingMode::Keep);
        assert_eq!(rendered, "**File:** `src/app.ts`\n\n```ts\ncode\n```");
    }

    #[test]
    fn test_annotated_fence_path_trimmed_and_code_verbatim() {
        let text = "See:\n```rust:  src/main.rs  \nfn main() {\n    println!(\"hi\");\n}\n```\nDone";
        let rendered = render_text(text, ThinkingMode::Keep);
        assert_eq!(
            rendered,
            "See:\n**File:** `src/main.rs`\n\n```rust\nfn main() {\n    println!(\"hi\");\n}\n```\nDone"
        );
    }

    #[test]
    fn test_plain_fence_untouched() {
        let text = "```rust\nlet x: u32 = 1;\n```";
        assert_eq!(render_text(text, ThinkingMode::Keep), text);
    }

    #[test]
    fn test_plain_and_annotated_fences_mixed() {
        let text = "```python\nprint(1)\n```\n\n```go:cmd/main.go\npackage main\n```";
        let rendered = render_text(text, ThinkingMode::Keep);
        assert!(rendered.starts_with("```python\nprint(1)\n```"));
        assert!(rendered.ends_with("**File:** `cmd/main.go`\n\n```go\npackage main\n```"));
    }

    #[test]
    fn test_fence_inside_removed_thinking_not_labelled() {
        let text = "<think>```js:a.js\nx\n```</think>```py:b.py\ny\n```";
        let rendered = render_text(text, ThinkingMode::Remove);
        assert_eq!(rendered, "**File:** `b.py`\n\n```py\ny\n```");
    }

    #[test]
    fn test_thinking_mode_from_menu_choice() {
        assert_eq!(ThinkingMode::from_menu_choice("1"), ThinkingMode::Remove);
        assert_eq!(ThinkingMode::from_menu_choice(" 2 "), ThinkingMode::Fold);
        assert_eq!(ThinkingMode::from_menu_choice("3"), ThinkingMode::Keep);
        assert_eq!(ThinkingMode::from_menu_choice(""), ThinkingMode::Keep);
    }
}
