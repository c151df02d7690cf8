use crate::node::Side;

/// `⌊log2 n⌋` for a positive `n`.
pub(crate) fn floor_log2(n: usize) -> u32 {
    debug_assert!(n > 0);
    usize::BITS - 1 - n.leading_zeros()
}

/// The edges to follow from the root to reach level-order slot `index` of a complete tree.
///
/// Numbering slots from 1 the way a binary heap does, the bits of the slot number below its
/// leading one spell out the path: `0` is a left edge and `1` a right edge.
pub(crate) fn level_order_path(index: usize) -> impl Iterator<Item = Side> {
    let position = index + 1;
    (0..floor_log2(position)).rev().map(move |bit| {
        if (position >> bit) & 1 == 0 {
            Side::Left
        } else {
            Side::Right
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log2_rounds_down() {
        assert_eq!(floor_log2(1), 0);
        assert_eq!(floor_log2(2), 1);
        assert_eq!(floor_log2(3), 1);
        assert_eq!(floor_log2(7), 2);
        assert_eq!(floor_log2(8), 3);
    }

    #[test]
    fn paths_follow_heap_numbering() {
        assert_eq!(level_order_path(0).count(), 0);
        assert_eq!(level_order_path(1).collect::<Vec<_>>(), [Side::Left]);
        assert_eq!(level_order_path(2).collect::<Vec<_>>(), [Side::Right]);
        assert_eq!(
            level_order_path(4).collect::<Vec<_>>(),
            [Side::Left, Side::Right]
        );
        assert_eq!(
            level_order_path(5).collect::<Vec<_>>(),
            [Side::Right, Side::Left]
        );
        assert_eq!(
            level_order_path(14).collect::<Vec<_>>(),
            [Side::Right, Side::Right, Side::Right]
        );
    }
}
