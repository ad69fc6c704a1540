//! In-order iterators over a [`BasicTree`].
//! Both keep a stack of the nodes whose left subtree is being visited,
//! so they take `O(height)` extra memory and never recurse.

use super::*;

/// Immutable in-order iterator. Yields the elements in ascending order.
pub struct Iter<'a, E> {
    stack: Vec<&'a BasicNode<E>>,
}

impl<'a, E> Iter<'a, E> {
    pub fn new(tree: &'a BasicTree<E>) -> Self {
        let mut res = Iter { stack: vec![] };
        res.push_left_spine(tree);
        res
    }

    // pushes the node and all of its left descendants. deals with the [`Empty`] case.
    fn push_left_spine(&mut self, mut tree: &'a BasicTree<E>) {
        while let Root(node) = tree {
            self.stack.push(&**node);
            tree = &node.left;
        }
    }
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.element)
    }
}

// the default clone implementation requires that E: Clone, which is unnecessary
impl<'a, E> Clone for Iter<'a, E> {
    fn clone(&self) -> Self {
        Iter {
            stack: self.stack.clone(),
        }
    }
}

/// Owning in-order iterator. Nodes are released as their elements are yielded,
/// and whatever is left when the iterator is dropped is released the same way.
pub struct IntoIter<E> {
    stack: Vec<Box<BasicNode<E>>>,
}

impl<E> IntoIter<E> {
    pub fn new(tree: BasicTree<E>) -> Self {
        let mut res = IntoIter { stack: vec![] };
        res.push_left_spine(tree);
        res
    }

    fn push_left_spine(&mut self, mut tree: BasicTree<E>) {
        while let Root(mut node) = tree {
            tree = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<E> Iterator for IntoIter<E> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        let node = self.stack.pop()?;
        let BasicNode { element, right, .. } = *node;
        self.push_left_spine(right);
        Some(element)
    }
}

impl<E> Drop for IntoIter<E> {
    fn drop(&mut self) {
        while self.next().is_some() {}
    }
}
