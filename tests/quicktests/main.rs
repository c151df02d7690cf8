//! Randomized tests that only go through the public API of each tree.

use quickcheck::{Arbitrary, Gen};

mod complete;
mod ordered;

/// Something to do to a tree.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    Insert(T),
    Delete(T),
    /// Rotate around the node holding T, to the left if `true`.
    Rotate(T, bool),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Delete(T::arbitrary(g)),
            2 => Op::Rotate(T::arbitrary(g), bool::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
