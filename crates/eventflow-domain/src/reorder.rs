//! The reorder engine shared by column reordering and task moves.

/// Remove the element at `from` and reinsert it so it ends up at position
/// `to`, preserving the relative order of everything else. Pure, O(n).
///
/// `from == to` returns the list unchanged. An out-of-range `from` returns
/// the list unchanged; an out-of-range `to` clamps to the end.
pub fn reorder<T: Clone>(list: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = list.to_vec();
    if from == to || from >= out.len() {
        return out;
    }
    let item = out.remove(from);
    let slot = to.min(out.len());
    out.insert(slot, item);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_index_is_identity() {
        let list = vec!['a', 'b', 'c', 'd'];
        for i in 0..list.len() {
            assert_eq!(reorder(&list, i, i), list);
        }
    }

    #[test]
    fn test_element_lands_at_destination() {
        let list = vec![1, 2, 3, 4, 5];
        assert_eq!(reorder(&list, 0, 3), vec![2, 3, 4, 1, 5]);
        assert_eq!(reorder(&list, 4, 1), vec![1, 5, 2, 3, 4]);
        assert_eq!(reorder(&list, 2, 0), vec![3, 1, 2, 4, 5]);
    }

    #[test]
    fn test_preserves_multiset() {
        let list = vec![10, 20, 30, 40];
        for from in 0..list.len() {
            for to in 0..list.len() {
                let mut moved = reorder(&list, from, to);
                moved.sort_unstable();
                assert_eq!(moved, vec![10, 20, 30, 40]);
            }
        }
    }

    #[test]
    fn test_relative_order_of_others_kept() {
        let list = vec!['a', 'b', 'c', 'd', 'e'];
        let moved = reorder(&list, 1, 3);
        let rest: Vec<char> = moved.iter().copied().filter(|&c| c != 'b').collect();
        assert_eq!(rest, vec!['a', 'c', 'd', 'e']);
    }

    #[test]
    fn test_out_of_range_source_is_identity() {
        let list = vec![1, 2, 3];
        assert_eq!(reorder(&list, 9, 0), list);
    }

    #[test]
    fn test_destination_clamps_to_end() {
        let list = vec![1, 2, 3];
        assert_eq!(reorder(&list, 0, 9), vec![2, 3, 1]);
    }

    #[test]
    fn test_empty_list() {
        let list: Vec<u8> = Vec::new();
        assert!(reorder(&list, 0, 0).is_empty());
    }
}
