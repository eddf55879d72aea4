//! Response shaping for Discord limits
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.3.0
//!
//! ## Changelog
//! - 1.0.0: Initial extraction from help and extension reply paths

/// Discord embed description limit
pub const EMBED_LIMIT: usize = 4096;
/// Discord message content limit
pub const MESSAGE_LIMIT: usize = 2000;

/// Split text into pieces no larger than `max_size` bytes.
///
/// Prefers newline boundaries; a single line longer than `max_size` is split
/// at character boundaries so no chunk ever lands mid-codepoint.
pub fn chunk_text(text: &str, max_size: usize) -> Vec<String> {
    if text.len() <= max_size {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    for line in text.lines() {
        if !current.is_empty() && current.len() + line.len() + 1 > max_size {
            chunks.push(std::mem::take(&mut current));
        }
        if line.len() >= max_size {
            chunks.extend(split_line(line, max_size));
            continue;
        }
        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

fn split_line(line: &str, max_size: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    for ch in line.chars() {
        if current.len() + ch.len_utf8() > max_size {
            pieces.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

fn truncate_to(text: &str, limit: usize) -> String {
    if text.len() <= limit {
        return text.to_string();
    }
    let mut end = limit - 3;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

/// Truncate text to the embed description limit, with ellipsis
pub fn truncate_for_embed(text: &str) -> String {
    truncate_to(text, EMBED_LIMIT)
}

/// Truncate text to the message content limit, with ellipsis
pub fn truncate_for_message(text: &str) -> String {
    truncate_to(text, MESSAGE_LIMIT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_single_chunk() {
        assert_eq!(chunk_text("hello", 100), vec!["hello"]);
    }

    #[test]
    fn test_chunks_split_on_lines() {
        let chunks = chunk_text("alpha\nbeta\ngamma", 11);
        assert_eq!(chunks, vec!["alpha\nbeta", "gamma"]);
    }

    #[test]
    fn test_long_line_split_at_char_boundaries() {
        let chunks = chunk_text(&"界".repeat(40), 30);
        assert!(chunks.len() >= 4);
        for chunk in &chunks {
            assert!(chunk.len() <= 30);
            assert!(!chunk.is_empty());
        }
    }

    #[test]
    fn test_exactly_at_limit_not_split() {
        let text = "a".repeat(64);
        assert_eq!(chunk_text(&text, 64), vec![text]);
    }

    #[test]
    fn test_truncate_short_untouched() {
        assert_eq!(truncate_for_message("fine"), "fine");
    }

    #[test]
    fn test_truncate_long_ends_with_ellipsis() {
        let out = truncate_for_embed(&"x".repeat(EMBED_LIMIT + 10));
        assert!(out.len() <= EMBED_LIMIT);
        assert!(out.ends_with("..."));
    }

    #[test]
    fn test_truncate_respects_utf8_boundary() {
        let out = truncate_for_message(&"é".repeat(MESSAGE_LIMIT));
        assert!(out.len() <= MESSAGE_LIMIT);
        assert!(out.ends_with("..."));
    }
}
