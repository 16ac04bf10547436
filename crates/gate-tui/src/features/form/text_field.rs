//! Single-line text field with a grapheme cursor.
//!
//! The cursor is a byte offset that always sits on a grapheme boundary.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Glyph drawn per grapheme when a field is masked.
pub const MASK_CHAR: char = '•';

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
}

impl TextField {
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Cursor position as a byte offset into `value`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Inserts text at the cursor. Line breaks are dropped.
    pub fn insert_str(&mut self, text: &str) {
        let clean: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
        if clean.is_empty() {
            return;
        }
        self.value.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    /// Backspace.
    pub fn delete_prev(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.value.replace_range(start..self.cursor, "");
            self.cursor = start;
        }
    }

    /// Delete.
    pub fn delete_next(&mut self) {
        if let Some(end) = self.next_boundary() {
            self.value.replace_range(self.cursor..end, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(start) = self.prev_boundary() {
            self.cursor = start;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(end) = self.next_boundary() {
            self.cursor = end;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Display columns before the cursor.
    pub fn cursor_width(&self, masked: bool) -> usize {
        let before = &self.value[..self.cursor];
        if masked {
            before.graphemes(true).count()
        } else {
            before.width()
        }
    }

    /// The value with every grapheme replaced by `MASK_CHAR`.
    pub fn masked(&self) -> String {
        self.value.graphemes(true).map(|_| MASK_CHAR).collect()
    }

    /// The part of the displayed value that fits in `width` columns with
    /// the cursor in view, and the cursor column within it.
    pub fn viewport(&self, masked: bool, width: usize) -> (String, usize) {
        let shown = if masked {
            self.masked()
        } else {
            self.value.clone()
        };
        let cursor_col = self.cursor_width(masked);
        // The cursor needs a column of its own at the end.
        let last_col = width.saturating_sub(1);

        let mut skipped = 0;
        let mut used = 0;
        let mut visible = String::new();
        for grapheme in shown.graphemes(true) {
            let w = grapheme.width();
            if cursor_col.saturating_sub(skipped) > last_col {
                skipped += w;
                continue;
            }
            if used + w > width {
                break;
            }
            visible.push_str(grapheme);
            used += w;
        }
        (visible, cursor_col.saturating_sub(skipped))
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.value[..self.cursor]
            .grapheme_indices(true)
            .next_back()
            .map(|(idx, _)| idx)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.value[self.cursor..]
            .graphemes(true)
            .next()
            .map(|g| self.cursor + g.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(text: &str) -> TextField {
        let mut f = TextField::default();
        f.insert_str(text);
        f
    }

    #[test]
    fn test_insert_appends_and_moves_cursor() {
        let mut f = field("tes");
        f.insert_char('t');
        assert_eq!(f.value(), "test");
        assert_eq!(f.cursor(), 4);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut f = field("tst");
        f.move_home();
        f.move_right();
        f.insert_char('e');
        assert_eq!(f.value(), "test");
        assert_eq!(f.cursor(), 2);
    }

    #[test]
    fn test_newlines_are_dropped() {
        let f = field("pass\r\nword\n");
        assert_eq!(f.value(), "password");
    }

    #[test]
    fn test_backspace_removes_whole_grapheme() {
        let mut f = field("ae\u{301}");
        f.delete_prev();
        assert_eq!(f.value(), "a");
        f.delete_prev();
        f.delete_prev();
        assert!(f.is_empty());
        assert_eq!(f.cursor(), 0);
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut f = field("abc");
        f.move_home();
        f.delete_next();
        assert_eq!(f.value(), "bc");
        f.move_end();
        f.delete_next();
        assert_eq!(f.value(), "bc");
    }

    #[test]
    fn test_cursor_movement_is_clamped() {
        let mut f = field("ab");
        f.move_right();
        assert_eq!(f.cursor(), 2);
        f.move_left();
        f.move_left();
        f.move_left();
        assert_eq!(f.cursor(), 0);
    }

    #[test]
    fn test_masked_uses_one_glyph_per_grapheme() {
        let f = field("pä🇺🇸");
        assert_eq!(f.masked(), "•••");
        assert_eq!(f.cursor_width(true), 3);
    }

    #[test]
    fn test_cursor_width_counts_wide_chars() {
        let f = field("日本");
        assert_eq!(f.cursor_width(false), 4);
    }

    #[test]
    fn test_viewport_fits_short_value() {
        let f = field("john");
        assert_eq!(f.viewport(false, 10), ("john".to_string(), 4));
    }

    #[test]
    fn test_viewport_scrolls_to_cursor_at_end() {
        let f = field("abcdefghij");
        let (visible, col) = f.viewport(false, 5);
        assert_eq!(visible, "ghij");
        assert_eq!(col, 4);
    }

    #[test]
    fn test_viewport_shows_head_when_cursor_at_start() {
        let mut f = field("abcdefghij");
        f.move_home();
        assert_eq!(f.viewport(false, 5), ("abcde".to_string(), 0));
    }

    #[test]
    fn test_viewport_masked_counts_graphemes() {
        let f = field("日本語です");
        let (visible, col) = f.viewport(true, 3);
        assert_eq!(visible, "••");
        assert_eq!(col, 2);
    }

    #[test]
    fn test_viewport_skips_whole_wide_chars() {
        let f = field("日本語");
        let (visible, col) = f.viewport(false, 3);
        assert_eq!(visible, "語");
        assert_eq!(col, 2);
    }

    #[test]
    fn test_clear() {
        let mut f = field("secret");
        f.clear();
        assert!(f.is_empty());
        assert_eq!(f.cursor(), 0);
    }
}
