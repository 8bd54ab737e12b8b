//! Rendering of vocabulary entries as Telegram MarkdownV2 text.

use crate::types::VocabularyEntry;

/// Characters that must be backslash-escaped anywhere in MarkdownV2 text
pub const MARKDOWN_V2_RESERVED: &[char] = &[
    '\\', '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Line used when an entry has no examples. Already escaped.
pub const NO_EXAMPLES_LINE: &str = "   ➤ No examples available\\.";

/// Stands in for a blank meaning; an empty `__` would not parse
const BLANK_MEANING: &str = "\\-";

/// Escape user text for MarkdownV2
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if MARKDOWN_V2_RESERVED.contains(&ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// Render one entry; `index` is the 1-based position in the batch
pub fn format_entry(entry: &VocabularyEntry, index: usize) -> String {
    let meaning = if entry.interpretation.trim().is_empty() {
        BLANK_MEANING.to_string()
    } else {
        escape_markdown(&entry.interpretation)
    };

    let mut lines = vec![
        format!("🔹 Word {index}"),
        String::new(),
        format!("*{}*", escape_markdown(&entry.phrase)),
        String::new(),
        format!("💡 Meaning: _{meaning}_"),
        String::new(),
        "🧾 Examples:".to_string(),
    ];

    if entry.examples.is_empty() {
        lines.push(NO_EXAMPLES_LINE.to_string());
    } else {
        for (i, example) in entry.examples.iter().enumerate() {
            lines.push(format!(
                "   ➤ Example {}: {}",
                i + 1,
                escape_markdown(example)
            ));
        }
    }

    lines.join("\n")
}
