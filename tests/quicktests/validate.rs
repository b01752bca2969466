use std::collections::HashSet;

use validate_bst::{is_valid_bst, iterative, recursive, validate, TreeNode, Violation};

use crate::{build_unique, build_with_duplicates};

#[test]
fn empty_tree() {
    assert!(is_valid_bst::<i32>(None));
    assert!(recursive::is_valid_bst::<i32>(None));
    assert_eq!(validate::<i32>(None), Ok(()));
}

#[test]
fn extremes_as_values() {
    let root = build_unique(&[0, i32::MIN, i32::MAX, i32::MIN + 1, i32::MAX - 1]);
    assert!(is_valid_bst(root.as_deref()));

    let root = build_with_duplicates(&[i32::MIN, i32::MIN]);
    assert!(!is_valid_bst(root.as_deref()));
}

#[test]
fn deep_left_chain() {
    let mut root = TreeNode::new(0);
    for x in 1..500_000 {
        root = TreeNode::new(x).with_left(root);
    }
    assert!(is_valid_bst(Some(&root)));

    // Pretend the bottom node was inserted on the wrong side of its ancestors.
    let mut bottom = &mut root;
    while bottom.left.is_some() {
        bottom = bottom.left.as_deref_mut().unwrap();
    }
    bottom.value = 499_999;

    match validate(Some(&root)) {
        Err(Violation::NotBelowUpperBound { value, bound, depth }) => {
            assert_eq!(*value, 499_999);
            assert_eq!(*bound, 1);
            assert_eq!(depth, 499_999);
        }
        other => panic!("unexpected result {:?}", other),
    }
}

quickcheck::quickcheck! {
    fn inserted_unique_values_are_valid(xs: Vec<i32>) -> bool {
        let root = build_unique(&xs);

        is_valid_bst(root.as_deref())
            && iterative::is_valid_bst(root.as_deref())
            && recursive::is_valid_bst(root.as_deref())
    }
}

quickcheck::quickcheck! {
    fn repeated_values_are_rejected(xs: Vec<i8>) -> bool {
        let distinct = xs.iter().collect::<HashSet<_>>().len();
        let root = build_with_duplicates(&xs);

        is_valid_bst(root.as_deref()) == (distinct == xs.len())
    }
}

quickcheck::quickcheck! {
    fn predecessor_raised_to_root_is_rejected(xs: Vec<i16>) -> bool {
        let mut root = build_unique(&xs);
        let root_node = match root.as_deref_mut() {
            Some(root_node) => root_node,
            None => return true,
        };
        let root_value = root_node.value;
        if root_node.left.is_none() {
            return true;
        }

        // The largest value smaller than the root sits at the end of the left subtree's right
        // spine. Every ancestor between it and the root is smaller, so only the root catches it.
        let mut predecessor = root_node.left.as_deref_mut().unwrap();
        while predecessor.right.is_some() {
            predecessor = predecessor.right.as_deref_mut().unwrap();
        }
        predecessor.value = root_value;

        match validate(root.as_deref()) {
            Err(violation) => *violation.value() == root_value && *violation.bound() == root_value,
            Ok(()) => false,
        }
    }
}

quickcheck::quickcheck! {
    fn validation_is_idempotent(xs: Vec<i8>) -> bool {
        let root = build_with_duplicates(&xs);

        let first = validate(root.as_deref());
        let second = validate(root.as_deref());
        first == second && is_valid_bst(root.as_deref()) == first.is_ok()
    }
}
