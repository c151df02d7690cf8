use std::cell::Cell;
use std::cmp::Ordering;

thread_local! {
    static COMPARISONS: Cell<usize> = Cell::new(0);
}

/// An element that counts how often it gets compared, so a test can tell how many nodes a
/// search looked at.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Counted(pub(crate) i32);

impl Counted {
    /// Runs `f` and returns its result along with the number of comparisons it made.
    pub(crate) fn comparisons<R>(f: impl FnOnce() -> R) -> (R, usize) {
        COMPARISONS.with(|count| count.set(0));
        let result = f();
        (result, COMPARISONS.with(Cell::get))
    }
}

impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Counted {}

impl PartialOrd for Counted {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Counted {
    fn cmp(&self, other: &Self) -> Ordering {
        COMPARISONS.with(|count| count.set(count.get() + 1));
        self.0.cmp(&other.0)
    }
}
