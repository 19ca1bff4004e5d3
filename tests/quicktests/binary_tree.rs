use binarytree::{BinaryTree, Node};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of adds,
/// removes and walks the tree agrees with the set at every step.
fn do_ops<K>(ops: &[Op<K>], tree: &mut BinaryTree<K>, set: &mut BTreeSet<K>) -> bool
where
    K: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        let agrees = match op {
            Op::Add(k) => tree.add(Node::new(k.clone())) == set.insert(k.clone()),
            Op::Remove(k) => tree.remove(k).map(Node::into_value) == set.take(k),
            Op::Dfs => {
                tree.get_dfs();
                let mut visited = tree.dfs_nodes().to_vec();
                visited.sort();
                visited.iter().eq(set.iter())
            }
        };
        if !agrees || tree.len() != set.len() {
            return false;
        }
    }

    true
}

/// Collects the values of the tree by visiting the left subtree, then
/// the node, then the right subtree.
fn in_order<K: Clone>(tree: &BinaryTree<K>) -> Vec<K> {
    let mut values = Vec::new();
    let mut stack = Vec::new();
    let mut current = tree.root();
    while current.is_some() || !stack.is_empty() {
        while let Some(node) = current {
            stack.push(node);
            current = node.left();
        }
        if let Some(node) = stack.pop() {
            values.push(node.value().clone());
            current = node.right();
        }
    }

    values
}

fn tree_of(xs: &[i8]) -> BinaryTree<i8> {
    let mut tree = BinaryTree::new();
    for x in xs {
        tree.add(Node::new(*x));
    }

    tree
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = BinaryTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set) && set.iter().all(|k| tree.find(k).is_some())
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let expected: Vec<_> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

    in_order(&tree) == expected
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    xs.iter().all(|x| tree.find(x).map(Node::value) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    for remove in &removes {
        tree.remove(remove);
    }

    let mut still_present = xs;
    still_present.retain(|x| !removes.contains(x));

    removes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && in_order(&tree).windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn height_is_bounded_by_len(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    match tree.get_height() {
        None => xs.is_empty(),
        // A tree of height `h` holds at most `2^(h + 1) - 1` nodes.
        Some(height) => {
            height < tree.len() && (height >= 16 || (1usize << (height + 1)) > tree.len())
        }
    }
}

#[quickcheck]
fn dfs_starts_at_root_and_visits_everything(xs: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    tree.get_dfs();

    tree.dfs_nodes().first() == tree.root().map(Node::value) && tree.dfs_nodes().len() == tree.len()
}
