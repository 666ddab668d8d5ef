// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Stateful physical-line reader with a 1-based line counter, in cooked (blank/comment-skipping)
//! and raw (every line) modes.

/// Splits `text` into physical lines, accepting either CR-LF or LF terminators and stripping
/// them.
pub(crate) fn lines_from_str(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
}

pub(crate) struct LineSource<I> {
    lines: I,
    current_line: usize,
}

impl<I: Iterator<Item = String>> LineSource<I> {
    pub(crate) fn new(lines: I) -> Self {
        LineSource {
            lines,
            current_line: 0,
        }
    }

    /// Raw mode: returns every physical line, or `None` at end of source.
    pub(crate) fn next_raw(&mut self) -> Option<(usize, String)> {
        let line = self.lines.next()?;
        self.current_line += 1;
        Some((self.current_line, line))
    }

    /// Cooked mode: skips lines that, trimmed, are empty or begin with `#`.
    pub(crate) fn next_cooked(&mut self) -> Option<(usize, String)> {
        loop {
            let (line_no, line) = self.next_raw()?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Some((line_no, line));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooked_skips_blank_and_comment_lines() {
        let mut source = LineSource::new(lines_from_str("foo\n\n# comment\nbar\n"));
        assert_eq!(source.next_cooked(), Some((1, "foo".to_string())));
        assert_eq!(source.next_cooked(), Some((4, "bar".to_string())));
        assert_eq!(source.next_cooked(), None);
    }

    #[test]
    fn raw_returns_every_line() {
        let mut source = LineSource::new(lines_from_str("a\n\nb\n"));
        assert_eq!(source.next_raw(), Some((1, "a".to_string())));
        assert_eq!(source.next_raw(), Some((2, String::new())));
        assert_eq!(source.next_raw(), Some((3, "b".to_string())));
        assert_eq!(source.next_raw(), None);
    }

    #[test]
    fn accepts_crlf() {
        let mut source = LineSource::new(lines_from_str("foo\r\nbar\r\n"));
        assert_eq!(source.next_raw(), Some((1, "foo".to_string())));
        assert_eq!(source.next_raw(), Some((2, "bar".to_string())));
    }
}
