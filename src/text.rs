//! Word-wrapped text blocks for help output.

use core::fmt::{self, Write};

fn is_blank(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

fn is_line_break(c: u8) -> bool {
    c == b'\r' || c == b'\n'
}

/// Write `count` spaces.
pub fn pad<W: Write + ?Sized>(w: &mut W, count: usize) -> fmt::Result {
    for _ in 0..count {
        w.write_char(' ')?;
    }
    Ok(())
}

/// Write `text` as a block of lines at most `line_width` columns wide,
/// assuming the first line already starts at column `indent`.
///
/// Each line takes up to `line_width - indent` characters and is then
/// extended to the end of the current word, so words are never split. Blanks
/// around a break and explicit CR/LF in `text` are dropped. Continuation
/// lines are preceded by CR LF and `indent` spaces, and the block always
/// ends with CR LF. Text without any blank renders as one unbroken line.
///
/// ```rust
/// use libcli::text::write_block;
///
/// let mut out = String::new();
/// write_block(&mut out, "alpha beta gamma delta", 10, 4).unwrap();
/// assert_eq!(out, "alpha beta\r\n    gamma delta\r\n");
/// ```
pub fn write_block<W: Write + ?Sized>(
    w: &mut W,
    text: &str,
    line_width: usize,
    indent: usize,
) -> fmt::Result {
    let bytes = text.as_bytes();
    let budget = line_width.saturating_sub(indent);
    let mut pos = 0;

    while pos < bytes.len() {
        while pos < bytes.len() && is_blank(bytes[pos]) {
            pos += 1;
        }

        let start = pos;
        let mut count = 0;
        while count < budget && pos < bytes.len() && !is_line_break(bytes[pos]) {
            pos += 1;
            count += 1;
        }

        // finish the current word
        while pos < bytes.len() && !is_blank(bytes[pos]) && !is_line_break(bytes[pos]) {
            pos += 1;
        }

        // `pos` sits on an ASCII byte or at the end here, so this is a char boundary
        w.write_str(&text[start..pos])?;

        while pos < bytes.len() && is_blank(bytes[pos]) {
            pos += 1;
        }
        while pos < bytes.len() && is_line_break(bytes[pos]) {
            pos += 1;
        }

        if pos < bytes.len() {
            w.write_str("\r\n")?;
            pad(w, indent)?;
        }
    }

    w.write_str("\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(text: &str, line_width: usize, indent: usize) -> String {
        let mut out = String::new();
        write_block(&mut out, text, line_width, indent).unwrap();
        out
    }

    #[test]
    fn test_short_text_single_line() {
        assert_eq!(block("Help", 50, 10), "Help\r\n");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(block("", 50, 10), "\r\n");
        assert_eq!(block("   \t ", 50, 10), "\r\n");
    }

    #[test]
    fn test_wrap_never_splits_words() {
        let out = block("alpha beta gamma delta", 10, 4);
        assert_eq!(out, "alpha beta\r\n    gamma delta\r\n");

        for line in out.split("\r\n").skip(1).filter(|l| !l.is_empty()) {
            assert!(line.starts_with("    "));
            assert!(!line.starts_with("     "));
        }
        for word in ["alpha", "beta", "gamma", "delta"] {
            assert!(out.contains(word));
        }
    }

    #[test]
    fn test_no_whitespace_is_one_line() {
        assert_eq!(block("abcdefghijklmnopqrstuvwxyz", 10, 4), "abcdefghijklmnopqrstuvwxyz\r\n");
    }

    #[test]
    fn test_leading_blanks_skipped() {
        assert_eq!(block("  \tword", 50, 4), "word\r\n");
    }

    #[test]
    fn test_explicit_line_breaks() {
        assert_eq!(block("first\nsecond", 50, 4), "first\r\n    second\r\n");
        assert_eq!(block("first\r\n\r\nsecond", 50, 2), "first\r\n  second\r\n");
    }

    #[test]
    fn test_break_on_blank_drops_it() {
        // the budget ends on the blank itself, so no word is extended
        assert_eq!(block("abcd efgh", 6, 2), "abcd\r\n  efgh\r\n");
    }

    #[test]
    fn test_indent_wider_than_line() {
        // no budget left: every word gets its own line
        assert_eq!(block("one two", 4, 8), "one\r\n        two\r\n");
    }

    #[test]
    fn test_deterministic() {
        let text = "Set the keyer speed in words per minute, range 5 to 60";
        assert_eq!(block(text, 50, 16), block(text, 50, 16));
    }

    #[test]
    fn test_non_ascii_kept_whole() {
        assert_eq!(block("température élevée", 10, 4), "température\r\n    élevée\r\n");
    }

    #[test]
    fn test_pad() {
        let mut out = String::new();
        pad(&mut out, 3).unwrap();
        assert_eq!(out, "   ");
        pad(&mut out, 0).unwrap();
        assert_eq!(out, "   ");
    }
}
