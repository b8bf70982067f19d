//! Greedy word wrapping shared by the text and PDF renderers

use std::mem;

/// Wrap `text` so every line measures at most `max_width`.
///
/// Explicit newlines start a new paragraph; blank lines are kept. Words wider
/// than a full line are split between characters.
pub fn wrap(text: &str, max_width: f32, measure: impl Fn(&str) -> f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let start = lines.len();

        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                push_word(&mut lines, &mut current, word, max_width, &measure);
                continue;
            }

            let candidate = format!("{current} {word}");
            if measure(&candidate) <= max_width {
                current = candidate;
            } else {
                lines.push(mem::take(&mut current));
                push_word(&mut lines, &mut current, word, max_width, &measure);
            }
        }

        if !current.is_empty() || lines.len() == start {
            lines.push(current);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Start a line with `word`, breaking it by character if it cannot fit whole
fn push_word(
    lines: &mut Vec<String>,
    current: &mut String,
    word: &str,
    max_width: f32,
    measure: &impl Fn(&str) -> f32,
) {
    if measure(word) <= max_width {
        current.push_str(word);
        return;
    }

    for ch in word.chars() {
        current.push(ch);
        if measure(current.as_str()) > max_width && current.chars().count() > 1 {
            current.pop();
            lines.push(mem::take(current));
            current.push(ch);
        }
    }
}

/// One unit per character; used for fixed-width text output
pub fn char_width(text: &str) -> f32 {
    text.chars().count() as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_fits_on_one_line() {
        assert_eq!(wrap("short text", 20.0, char_width), vec!["short text"]);
    }

    #[test]
    fn test_wrap_breaks_between_words() {
        let lines = wrap("the quick brown fox jumps", 10.0, char_width);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps"]);
        assert!(lines.iter().all(|l| char_width(l) <= 10.0));
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let lines = wrap("abcdefghij xy", 4.0, char_width);
        assert_eq!(lines, vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn test_wrap_keeps_paragraphs_and_blank_lines() {
        let lines = wrap("first\n\nsecond", 20.0, char_width);
        assert_eq!(lines, vec!["first", "", "second"]);
    }

    #[test]
    fn test_wrap_collapses_inner_whitespace() {
        assert_eq!(wrap("a    b", 20.0, char_width), vec!["a b"]);
    }

    #[test]
    fn test_wrap_empty_input() {
        assert_eq!(wrap("", 10.0, char_width), vec![String::new()]);
    }
}
