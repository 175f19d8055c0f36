//! 2D cursor over the board: a column index plus a row within that column.
//!
//! Rows address the per-column filtered view; translation back to the flat
//! task list goes through task ids, never raw indices.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardCursor {
    pub column: usize,
    pub row: usize,
}

impl BoardCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn left(&mut self, counts: &[usize]) {
        if self.column > 0 {
            self.column -= 1;
            self.clamp(counts);
        }
    }

    pub fn right(&mut self, counts: &[usize]) {
        if self.column + 1 < counts.len() {
            self.column += 1;
            self.clamp(counts);
        }
    }

    pub fn up(&mut self) {
        self.row = self.row.saturating_sub(1);
    }

    pub fn down(&mut self, counts: &[usize]) {
        let count = counts.get(self.column).copied().unwrap_or(0);
        if count > 0 && self.row + 1 < count {
            self.row += 1;
        }
    }

    /// Pull the cursor back in range after the board changed under it.
    pub fn clamp(&mut self, counts: &[usize]) {
        if counts.is_empty() {
            *self = Self::default();
            return;
        }
        if self.column >= counts.len() {
            self.column = counts.len() - 1;
        }
        let count = counts[self.column];
        if count == 0 {
            self.row = 0;
        } else if self.row >= count {
            self.row = count - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_right_clamps_row_to_new_column() {
        let counts = [3, 1, 0, 2];
        let mut cursor = BoardCursor { column: 0, row: 2 };
        cursor.right(&counts);
        assert_eq!((cursor.column, cursor.row), (1, 0));
        cursor.right(&counts);
        assert_eq!((cursor.column, cursor.row), (2, 0));
    }

    #[test]
    fn test_down_stops_at_last_row() {
        let counts = [2];
        let mut cursor = BoardCursor::new();
        cursor.down(&counts);
        cursor.down(&counts);
        assert_eq!(cursor.row, 1);
    }

    #[test]
    fn test_edges_are_sticky() {
        let counts = [1, 1];
        let mut cursor = BoardCursor::new();
        cursor.left(&counts);
        cursor.up();
        assert_eq!((cursor.column, cursor.row), (0, 0));
        cursor.right(&counts);
        cursor.right(&counts);
        assert_eq!(cursor.column, 1);
    }

    #[test]
    fn test_clamp_after_delete() {
        let mut cursor = BoardCursor { column: 1, row: 4 };
        cursor.clamp(&[2, 3]);
        assert_eq!((cursor.column, cursor.row), (1, 2));
        cursor.clamp(&[2, 0]);
        assert_eq!(cursor.row, 0);
    }
}
