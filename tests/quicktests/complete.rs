use bintree::CompleteTree;
use quickcheck::{quickcheck, TestResult};

use crate::Op;

/// Applies `ops` to a tree and to a vector holding its level order. Rotations don't apply.
fn do_ops(ops: &[Op<i8>], tree: &mut CompleteTree<i8>, model: &mut Vec<i8>) {
    for op in ops {
        match *op {
            Op::Insert(x) => {
                tree.insert(x);
                model.push(x);
            }
            Op::Delete(x) => {
                let deleted = tree.delete(&x);
                let pos = model.iter().position(|&y| y == x);
                assert_eq!(deleted, pos.map(|pos| model.swap_remove(pos)));
            }
            Op::Rotate(..) => {}
        }
    }
}

/// Whether level-order slot `i` has children exactly in slots `2i + 1` and `2i + 2`.
fn is_complete(tree: &CompleteTree<i8>) -> bool {
    let len = tree.len();
    tree.as_tree().level_order().enumerate().all(|(i, vertex)| {
        vertex.has_left() == (2 * i + 1 < len) && vertex.has_right() == (2 * i + 2 < len)
    })
}

quickcheck! {
    fn matches_level_order_model(ops: Vec<Op<i8>>) -> bool {
        let mut tree = CompleteTree::new();
        let mut model = Vec::new();
        do_ops(&ops, &mut tree, &mut model);

        tree.iter().copied().eq(model.iter().copied())
    }

    fn stays_complete(ops: Vec<Op<i8>>) -> bool {
        let mut tree = CompleteTree::new();
        do_ops(&ops, &mut tree, &mut Vec::new());

        is_complete(&tree)
    }

    fn height_is_log2_len(ops: Vec<Op<i8>>) -> bool {
        let mut tree = CompleteTree::new();
        do_ops(&ops, &mut tree, &mut Vec::new());

        let walked = tree.root().map_or(-1, |root| root.height() as isize);
        tree.height() == walked
    }

    fn insert_then_delete_restores(xs: Vec<i8>, x: i8) -> TestResult {
        if xs.contains(&x) {
            return TestResult::discard();
        }
        let mut tree: CompleteTree<_> = xs.into_iter().collect();
        let before = tree.clone();

        tree.insert(x);
        tree.delete(&x);
        TestResult::from_bool(tree == before)
    }
}
