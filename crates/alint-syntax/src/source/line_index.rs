//! Offset to line/column conversion.

use text_size::TextSize;

/// Line start offsets of one source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineIndex {
    line_starts: Vec<TextSize>,
}

impl LineIndex {
    /// Builds the index for `text`.
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![TextSize::from(0)];
        line_starts.extend(
            text.match_indices('\n')
                .map(|(offset, _)| TextSize::from(offset as u32 + 1)),
        );
        Self { line_starts }
    }

    /// 1-based line and column of `offset`. Columns count characters.
    #[must_use]
    pub fn line_col(&self, text: &str, offset: TextSize) -> (u32, u32) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let start = usize::from(self.line_starts[line]);
        let end = usize::from(offset).min(text.len());
        let column = text.get(start..end).map_or(0, |prefix| prefix.chars().count());
        (line as u32 + 1, column as u32 + 1)
    }

    /// Text of the 1-based `line`, without its line terminator.
    #[must_use]
    pub fn line_text<'t>(&self, text: &'t str, line: u32) -> Option<&'t str> {
        let index = (line as usize).checked_sub(1)?;
        let start = usize::from(*self.line_starts.get(index)?);
        let end = self
            .line_starts
            .get(index + 1)
            .map_or(text.len(), |next| usize::from(*next) - 1);
        let line = text.get(start..end)?;
        Some(line.strip_suffix('\r').unwrap_or(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_col_is_one_based() {
        let text = "ab\ncd\n";
        let index = LineIndex::new(text);
        assert_eq!(index.line_col(text, 0.into()), (1, 1));
        assert_eq!(index.line_col(text, 1.into()), (1, 2));
        assert_eq!(index.line_col(text, 3.into()), (2, 1));
        assert_eq!(index.line_col(text, 6.into()), (3, 1));
    }

    #[test]
    fn test_line_text() {
        let text = "first\r\nsecond\nlast";
        let index = LineIndex::new(text);
        assert_eq!(index.line_text(text, 1), Some("first"));
        assert_eq!(index.line_text(text, 2), Some("second"));
        assert_eq!(index.line_text(text, 3), Some("last"));
        assert_eq!(index.line_text(text, 4), None);
        assert_eq!(index.line_text(text, 0), None);
    }
}
