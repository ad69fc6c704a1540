//! This module implements the standard traits for the [`BasicTree`].
//! It is mostly a separate file from the main module file, since it's a private module, and its
//! contents are re-exported.

use super::*;

impl<E> Default for BasicTree<E> {
    fn default() -> Self {
        Empty
    }
}

impl<E: std::fmt::Debug> std::fmt::Debug for BasicTree<E> {
    /// Prints the shape of the tree, e.g. `(1 <- 2 -> 3)`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Empty => write!(f, "()"),
            Root(node) => std::fmt::Debug::fmt(&**node, f),
        }
    }
}

impl<E: std::fmt::Debug> std::fmt::Debug for BasicNode<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.left, &self.right) {
            (Empty, Empty) => write!(f, "{:?}", self.element),
            (left, right) => write!(f, "({:?} <- {:?} -> {:?})", left, self.element, right),
        }
    }
}

impl<E> IntoIterator for BasicTree<E> {
    type Item = E;
    type IntoIter = iterators::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        iterators::IntoIter::new(self)
    }
}

impl<'a, E> IntoIterator for &'a BasicTree<E> {
    type Item = &'a E;
    type IntoIter = iterators::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        iterators::Iter::new(self)
    }
}
