//! Splits a skeleton line into bold caption text and plain placeholder runs.

/// A stretch of text rendered with a single emphasis setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSegment {
    pub content: String,
    pub emphasized: bool,
}

impl TextSegment {
    fn new(content: String, emphasized: bool) -> Self {
        Self { content, emphasized }
    }
}

/// Split `text` into segments, emphasized everywhere except inside
/// `{{ ... }}` spans (delimiters included).
///
/// A `{` opens a span only when the next character is also `{`, and a `}`
/// closes one only when the previous character is `}`. Braces at the very
/// start or end of the line therefore never look past the line, and a lone
/// brace is ordinary text.
pub fn split_runs(text: &str) -> Vec<TextSegment> {
    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut emphasized = true;

    for (idx, &ch) in chars.iter().enumerate() {
        let opens = ch == '{' && chars.get(idx + 1) == Some(&'{');
        let closes = ch == '}' && idx > 0 && chars[idx - 1] == '}';

        if opens {
            if !current.is_empty() {
                segments.push(TextSegment::new(std::mem::take(&mut current), emphasized));
            }
            current.push(ch);
            emphasized = false;
        } else if closes {
            current.push(ch);
            segments.push(TextSegment::new(std::mem::take(&mut current), emphasized));
            emphasized = true;
        } else {
            current.push(ch);
        }
    }

    if !current.is_empty() {
        segments.push(TextSegment::new(current, emphasized));
    }

    segments
}
