use unicode_normalization::UnicodeNormalization;

/// Fold text into the form used for substring matching
pub fn normalize(text: &str) -> String {
    let text = text.trim();

    if text.is_empty() {
        return String::new();
    }

    // Unicode normalization (NFKC), so full-width input matches
    let text: String = text.nfkc().collect();

    text.replace(['\n', '\r'], " ").trim().to_lowercase()
}
