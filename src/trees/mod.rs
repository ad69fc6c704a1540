//! This module contains the tree engine and the balanced tree built on top of it.

pub mod avl;
pub mod basic_tree;

use crate::data::Keyed;
use crate::error::VerifyError;

/// A step on a path from the root of a tree.
#[derive(PartialEq, Eq, Clone, Copy, Hash, Debug)]
pub enum Side {
    Left,
    Right,
}

/// Shape diagnostics and structural checks, shared by the trees of this crate.
pub trait SomeTree<E: Keyed> {
    /// The cached height of the tree. `0` for the empty tree.
    fn height(&self) -> usize;

    /// The depth of the deepest node, computed by walking the tree.
    fn max_depth(&self) -> usize;

    /// The number of nodes without sons.
    fn leaf_count(&self) -> usize;

    /// The number of nodes, computed by walking the tree.
    fn node_count(&self) -> usize;

    /// Checks that the cached heights are correct and that every node is ordered correctly
    /// relative to its sons. Returns the first violation found.
    fn verify(&self) -> Result<(), VerifyError>;

    /// Returns `true` if, at every node, the heights of the two subtrees differ by at most 1.
    fn is_balanced(&self) -> bool;

    /// Checks that invariants remain correct.
    /// If they are not, panics.
    fn assert_correctness(&self) {
        if let Err(reason) = self.verify() {
            panic!("tree verification failed: {}", reason);
        }
    }

    /// Asserts that the tree is balanced.
    /// Otherwise, panics.
    fn assert_balanced(&self) {
        assert!(self.is_balanced(), "tree is not balanced");
    }
}

impl<E: Keyed> SomeTree<E> for basic_tree::BasicTree<E> {
    fn height(&self) -> usize {
        basic_tree::BasicTree::height(self)
    }

    fn max_depth(&self) -> usize {
        basic_tree::BasicTree::max_depth(self)
    }

    fn leaf_count(&self) -> usize {
        basic_tree::BasicTree::leaf_count(self)
    }

    fn node_count(&self) -> usize {
        basic_tree::BasicTree::node_count(self)
    }

    fn verify(&self) -> Result<(), VerifyError> {
        basic_tree::BasicTree::verify(self)
    }

    fn is_balanced(&self) -> bool {
        basic_tree::BasicTree::is_balanced(self)
    }
}
