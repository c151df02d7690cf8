use bintree::{Collection, OrderedTree};
use quickcheck::{quickcheck, TestResult};

use crate::Op;

/// Applies `ops` to a tree and to a sorted vector holding the same elements.
fn do_ops(ops: &[Op<i8>], tree: &mut OrderedTree<i8>, model: &mut Vec<i8>) {
    for op in ops {
        match *op {
            Op::Insert(x) => {
                tree.insert(x);
                let pos = model.partition_point(|&y| y <= x);
                model.insert(pos, x);
            }
            Op::Delete(x) => {
                let deleted = tree.delete(&x);
                let pos = model.iter().position(|&y| y == x);
                assert_eq!(deleted, pos.map(|pos| model.remove(pos)));
            }
            Op::Rotate(x, left) => {
                if let Some(id) = tree.search(&x).map(|vertex| vertex.id()) {
                    if left {
                        tree.rotate_left(id);
                    } else {
                        tree.rotate_right(id);
                    }
                }
            }
        }
    }
}

quickcheck! {
    fn in_order_is_sorted(ops: Vec<Op<i8>>) -> bool {
        let mut tree = OrderedTree::new();
        let mut model = Vec::new();
        do_ops(&ops, &mut tree, &mut model);

        tree.iter().copied().eq(model.iter().copied())
    }

    fn len_matches_traversals(ops: Vec<Op<i8>>) -> bool {
        let mut tree = OrderedTree::new();
        do_ops(&ops, &mut tree, &mut Vec::new());

        let len = tree.len();
        tree.as_tree().pre_order().count() == len
            && tree.as_tree().post_order().count() == len
            && tree.as_tree().level_order().count() == len
    }

    fn every_node_links_back(ops: Vec<Op<i8>>) -> bool {
        let mut tree = OrderedTree::new();
        do_ops(&ops, &mut tree, &mut Vec::new());

        tree.as_tree().pre_order().all(|vertex| {
            let left_ok = vertex
                .left()
                .map_or(true, |left| left.parent().unwrap().id() == vertex.id());
            let right_ok = vertex
                .right()
                .map_or(true, |right| right.parent().unwrap().id() == vertex.id());
            left_ok && right_ok
        })
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(x))
            && nots
                .iter()
                .filter(|x| !xs.contains(x))
                .all(|x| tree.search(x).is_none())
    }

    fn insert_then_delete_restores(xs: Vec<i8>, x: i8) -> TestResult {
        if xs.contains(&x) {
            return TestResult::discard();
        }
        let mut tree: OrderedTree<_> = xs.into_iter().collect();
        let before = tree.clone();

        tree.insert(x);
        tree.delete(&x);
        TestResult::from_bool(tree == before)
    }

    fn rotations_undo_each_other(xs: Vec<i8>, at: i8, left: bool) -> TestResult {
        let mut tree: OrderedTree<_> = xs.into_iter().collect();
        let Some(id) = tree.search(&at).map(|vertex| vertex.id()) else {
            return TestResult::discard();
        };
        let before = tree.clone();

        let pivot = if left { tree.rotate_left(id) } else { tree.rotate_right(id) };
        let Some(pivot) = pivot else {
            return TestResult::from_bool(tree == before);
        };
        let sorted = tree.iter().eq(before.iter());
        if left {
            tree.rotate_right(pivot);
        } else {
            tree.rotate_left(pivot);
        }
        TestResult::from_bool(sorted && tree == before)
    }

    fn deletes_through_the_trait(xs: Vec<u8>, deletes: Vec<u8>) -> bool {
        fn run<C: Collection<u8>>(mut collection: C, xs: &[u8], deletes: &[u8]) -> C {
            for &x in xs {
                collection.insert(x);
            }
            for delete in deletes {
                collection.delete(delete);
            }
            collection
        }

        let tree = run(OrderedTree::new(), &xs, &deletes);
        let mut still_present = xs;
        for delete in &deletes {
            if let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }
        still_present.sort_unstable();

        tree.iter().eq(still_present.iter())
    }
}
