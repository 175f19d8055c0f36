//! Multi-selection state for the merge dialog.
//!
//! Tracks a cursor over a list plus the set of toggled rows. Toggle order is
//! preserved because the merge operation snapshots its sources in the order
//! the user picked them.

#[derive(Debug, Clone, Default)]
pub struct MultiSelect {
    cursor: usize,
    picked: Vec<usize>,
}

impl MultiSelect {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn next(&mut self, len: usize) {
        if len > 0 && self.cursor + 1 < len {
            self.cursor += 1;
        }
    }

    pub fn prev(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Toggle the row under the cursor in or out of the picked set.
    pub fn toggle_current(&mut self) {
        self.toggle(self.cursor);
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(pos) = self.picked.iter().position(|&i| i == index) {
            self.picked.remove(pos);
        } else {
            self.picked.push(index);
        }
    }

    pub fn is_picked(&self, index: usize) -> bool {
        self.picked.contains(&index)
    }

    /// Picked indices in toggle order.
    pub fn picked(&self) -> &[usize] {
        &self.picked
    }

    pub fn count(&self) -> usize {
        self.picked.len()
    }

    pub fn meets_minimum(&self, min: usize) -> bool {
        self.picked.len() >= min
    }

    pub fn clear(&mut self) {
        self.cursor = 0;
        self.picked.clear();
    }

    /// Drop picks that fell out of range after the list shrank.
    pub fn clamp(&mut self, len: usize) {
        self.picked.retain(|&i| i < len);
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_preserves_pick_order() {
        let mut select = MultiSelect::new();
        select.toggle(2);
        select.toggle(0);
        select.toggle(1);
        assert_eq!(select.picked(), &[2, 0, 1]);
    }

    #[test]
    fn test_toggle_twice_removes() {
        let mut select = MultiSelect::new();
        select.toggle(1);
        select.toggle(1);
        assert!(!select.is_picked(1));
        assert_eq!(select.count(), 0);
    }

    #[test]
    fn test_minimum_for_merge() {
        let mut select = MultiSelect::new();
        select.toggle(0);
        assert!(!select.meets_minimum(2));
        select.toggle(3);
        assert!(select.meets_minimum(2));
    }

    #[test]
    fn test_cursor_bounds() {
        let mut select = MultiSelect::new();
        select.next(3);
        select.next(3);
        select.next(3);
        assert_eq!(select.cursor(), 2);
        select.prev();
        select.prev();
        select.prev();
        assert_eq!(select.cursor(), 0);
    }

    #[test]
    fn test_clamp_drops_stale_picks() {
        let mut select = MultiSelect::new();
        select.toggle(0);
        select.toggle(4);
        select.clamp(2);
        assert_eq!(select.picked(), &[0]);
    }
}
