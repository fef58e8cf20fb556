/// Position in a fixed cell grid, stored as a linear cell index the way a
/// text-mode screen addresses its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextCursor {
    columns: usize,
    rows: usize,
    location: usize,
}

impl TextCursor {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns: columns.max(1),
            rows: rows.max(1),
            location: 0,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn location(&self) -> usize {
        self.location
    }

    /// (column, row)
    pub fn position(&self) -> (usize, usize) {
        (self.location % self.columns, self.location / self.columns)
    }

    /// Moves one cell on. Returns `true` when the screen ran out and the
    /// cursor wrapped to the top.
    pub fn advance(&mut self) -> bool {
        self.move_to(self.location + 1)
    }

    /// Moves to the start of the next row, even from column 0.
    pub fn newline(&mut self) -> bool {
        self.move_to(self.location + self.columns - self.location % self.columns)
    }

    pub fn reset(&mut self) {
        self.location = 0;
    }

    fn move_to(&mut self, location: usize) -> bool {
        if location >= self.columns * self.rows {
            self.location = 0;
            true
        } else {
            self.location = location;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_runs_across_rows() {
        let mut cursor = TextCursor::new(3, 2);
        for _ in 0..4 {
            assert!(!cursor.advance());
        }
        assert_eq!(cursor.position(), (1, 1));
    }

    #[test]
    fn newline_from_mid_row_and_from_column_zero() {
        let mut cursor = TextCursor::new(80, 25);
        cursor.advance();
        cursor.advance();
        cursor.newline();
        assert_eq!(cursor.position(), (0, 1));

        cursor.newline();
        assert_eq!(cursor.position(), (0, 2));
        assert_eq!(cursor.location(), 160);
    }

    #[test]
    fn running_off_the_screen_wraps_to_top() {
        let mut cursor = TextCursor::new(2, 2);
        assert!(!cursor.newline());
        assert!(cursor.newline());
        assert_eq!(cursor.position(), (0, 0));

        for _ in 0..3 {
            cursor.advance();
        }
        assert!(cursor.advance());
        assert_eq!(cursor.location(), 0);
    }

    #[test]
    fn degenerate_grid_still_has_one_cell() {
        let cursor = TextCursor::new(0, 0);
        assert_eq!((cursor.columns(), cursor.rows()), (1, 1));
    }
}
