//! The data that sits in the tree.
//!
//! Every element stored in an [`crate::avl::AVLTree`] exposes a key, and the tree
//! is ordered by that key. Two elements are considered equal by the tree
//! exactly when their keys are equal, so less-than and equality can never
//! disagree.

use std::cmp::Ordering;

/// This trait represents elements that can be stored in the tree.
///
/// The element may hold any other data besides its key. That data can be
/// changed in place through [`crate::avl::AVLTree::find_mut`], but the key must
/// never change while the element is inside a tree.
pub trait Keyed {
    type Key: Ord;
    fn key(&self) -> &Self::Key;

    /// Compares a probe key against this element's key.
    /// Returns [`Ordering::Less`] if the probe should go to the left of this element.
    fn locate(&self, probe: &Self::Key) -> Ordering {
        probe.cmp(self.key())
    }
}

// The convention is that smaller values go on the left.
/// An element which is nothing but its key.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash, Debug, Default)]
pub struct Key<K> {
    pub key: K,
}

impl<K> Key<K> {
    pub fn new(key: K) -> Key<K> {
        Key { key }
    }
}

impl<K: Ord> Keyed for Key<K> {
    type Key = K;
    fn key(&self) -> &K {
        &self.key
    }
}

impl<K> From<K> for Key<K> {
    fn from(key: K) -> Key<K> {
        Key { key }
    }
}

impl<K: std::fmt::Display> std::fmt::Display for Key<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.key.fmt(f)
    }
}
