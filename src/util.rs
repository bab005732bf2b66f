//! Text helpers shared by the docblock renderer and parser.
//!
//! Both sides split text into lines through [`split_lines`], so a
//! description survives a render/parse round trip regardless of which
//! line-break convention it was written with.

/// Split `text` on every line break: `\r\n`, `\n` or a lone `\r`.
///
/// Unlike [`str::lines`], a lone `\r` also ends a line.  An empty input
/// yields no lines, and a trailing line break does not produce an extra
/// empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Join `words` with single spaces.
pub(crate) fn join_words(words: &[&str]) -> String {
    words.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_every_convention() {
        assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn keeps_blank_lines_between_text() {
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\r\n\r\nb"), vec!["a", "", "b"]);
    }

    #[test]
    fn trailing_break_adds_no_line() {
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\r\n"), vec!["a"]);
        assert!(split_lines("").is_empty());
    }
}
