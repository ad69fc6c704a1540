use avl_maze::*;
use avl_maze::avl::AVLTree;
use rand::{self, Rng};
use std::collections::BTreeSet;

/// Something to perform in one round of tests
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundAction {
    Insert { value: i32 },
    Erase { value: i32 },
    Find { value: i32 },
}

/// The result after one round
#[derive(Clone, PartialEq, Debug)]
pub enum RoundResult {
    Inserted(Result<(), TreeError>),
    Erased(Result<i32, TreeError>),
    Found(Option<i32>),
}

pub const MAX_VALUE: i32 = 200;

fn random_round_action(rng: &mut rand::prelude::ThreadRng) -> RoundAction {
    use RoundAction::*;
    let value = rng.gen_range(-MAX_VALUE..=MAX_VALUE);
    match rng.gen_range(0..3) {
        0 => Insert { value },
        1 => Erase { value },
        2 => Find { value },
        _ => panic!(),
    }
}

/// Runs one round against the tree.
pub fn run_round(round_action: &RoundAction, tree: &mut AVLTree<Key<i32>>) -> RoundResult {
    use RoundAction::*;
    use RoundResult::*;

    match *round_action {
        Insert { value } => Inserted(tree.insert(Key::new(value))),
        Erase { value } => Erased(tree.erase(&value).map(|k| k.key)),
        Find { value } => Found(tree.find(&value).map(|k| k.key)),
    }
}

/// Runs the same round against a reference set.
pub fn run_reference_round(round_action: &RoundAction, set: &mut BTreeSet<i32>) -> RoundResult {
    use RoundAction::*;
    use RoundResult::*;

    match *round_action {
        Insert { value } => Inserted(if set.insert(value) {
            Ok(())
        } else {
            Err(TreeError::DuplicateKey)
        }),
        Erase { value } => Erased(if set.is_empty() {
            Err(TreeError::EmptyTree)
        } else if set.remove(&value) {
            Ok(value)
        } else {
            Err(TreeError::KeyNotFound)
        }),
        Find { value } => Found(set.get(&value).copied()),
    }
}

/// Checks the tree's contents against the reference set, and its structure.
pub fn check_against(tree: &AVLTree<Key<i32>>, set: &BTreeSet<i32>) {
    assert_eq!(tree.len(), set.len());
    assert!(tree.iter().map(|k| k.key).eq(set.iter().cloned()));
    tree.assert_correctness();
    tree.assert_balanced();
}

const INITIAL_SIZE: i32 = 100;
pub fn check_consistency(num_rounds: u32) {
    let mut rng = rand::thread_rng();
    let mut set: BTreeSet<i32> = (0..INITIAL_SIZE).collect();
    let mut tree: AVLTree<Key<i32>> = (0..INITIAL_SIZE).map(Key::new).collect();
    check_against(&tree, &set);

    for _ in 0..num_rounds {
        let round_action = random_round_action(&mut rng);
        let res1 = run_round(&round_action, &mut tree);
        let res2 = run_reference_round(&round_action, &mut set);
        assert_eq!(res1, res2, "diverged on {:?}", round_action);
        // This check takes `O(n)` time, but the trees in this test stay small.
        check_against(&tree, &set);
    }
}

/// Erases every element of `0..size` in turn from a fresh tree.
pub fn check_erase(size: i32) {
    let arr: Vec<i32> = (0..size).collect();
    for i in 0..arr.len() {
        let mut tree: AVLTree<Key<i32>> = arr.iter().cloned().map(Key::new).collect();
        assert_eq!(tree.erase(&arr[i]), Ok(Key::new(arr[i])));
        tree.assert_correctness();
        tree.assert_balanced();
        assert_eq!(
            tree.into_iter().map(|k| k.key).collect::<Vec<_>>(),
            arr[..i]
                .iter()
                .chain(arr[i + 1..].iter())
                .cloned()
                .collect::<Vec<_>>()
        );
    }
}
