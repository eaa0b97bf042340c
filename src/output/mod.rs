// Output formatting — terminal display of verdicts, buckets, and scores.

pub mod terminal;

/// One-line preview of message content: newlines flattened to spaces, cut to
/// at most `max_chars` characters with "..." appended when shortened.
///
/// Counts characters, not bytes, so multi-byte text never splits mid-character.
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.chars().count() <= max_chars {
        flat
    } else {
        let cut: String = flat.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_text_unchanged() {
        assert_eq!(preview("hello", 10), "hello");
    }

    #[test]
    fn test_preview_flattens_newlines() {
        assert_eq!(preview("a\nb", 10), "a b");
    }

    #[test]
    fn test_preview_cuts_on_characters() {
        assert_eq!(preview("ééééé", 3), "ééé...");
    }
}
