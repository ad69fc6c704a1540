//! The basic tree module
//! This module implements the recursive node engine that the [`crate::avl::AVLTree`]
//! is built on: searching, inserting and erasing along a path, rotations,
//! rebalancing, and structural verification.
//!
//! Every operation that changes the shape of a subtree consumes the boxed root
//! of that subtree and returns the new root, which the caller puts back into
//! its own child slot. Ownership of a node is always moved, never shared.

// these should not be public as they are merely separate files
// for some of the functions of this module
mod implementations;
mod iterative_deallocator;
pub mod iterators;

pub use implementations::*;
pub use iterative_deallocator::*;

use super::Side;
use crate::data::Keyed;
use crate::error::VerifyError;
use std::cmp::Ordering;

const PATH_ERROR: &str = "invariant violated: path doesn't match the tree";
const MISSING_CHILD_ERROR: &str = "invariant violated: rotated node is missing its child";

/// A basic tree. might be empty.
#[derive(Clone)]
pub enum BasicTree<E> {
    Empty,
    Root(Box<BasicNode<E>>),
}
use BasicTree::*;

/// A basic node. can be viewed as a non-empty basic tree: it always has one element.
#[derive(Clone)]
pub struct BasicNode<E> {
    element: E,
    pub(crate) left: BasicTree<E>,
    pub(crate) right: BasicTree<E>,
    /// The height of the subtree rooted at this node. A single node has height 1.
    height: usize,
}

/// The result of walking down the tree looking for an element.
/// Both variants hold the sides taken from the root.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Search {
    /// The walk stopped at a node holding an equal element.
    Found(Vec<Side>),
    /// The walk fell off the tree, at the empty position where the element would go.
    Vacant(Vec<Side>),
}

impl<E> BasicTree<E> {
    pub fn new() -> Self {
        Empty
    }

    pub fn from_node(node: BasicNode<E>) -> Self {
        Root(Box::new(node))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Empty)
    }

    pub fn node(&self) -> Option<&BasicNode<E>> {
        match self {
            Empty => None,
            Root(node) => Some(&**node),
        }
    }

    pub fn node_mut(&mut self) -> Option<&mut BasicNode<E>> {
        match self {
            Empty => None,
            Root(node) => Some(&mut **node),
        }
    }

    pub fn into_node_boxed(self) -> Option<Box<BasicNode<E>>> {
        match self {
            Empty => None,
            Root(node) => Some(node),
        }
    }

    /// Takes the tree out, and leaves `Empty` instead.
    pub fn take(&mut self) -> BasicTree<E> {
        std::mem::replace(self, Empty)
    }

    /// The cached height of the tree. `0` if it is empty.
    pub fn height(&self) -> usize {
        match self {
            Empty => 0,
            Root(node) => node.height,
        }
    }

    /// Walks down the tree. `locate` is called with the element of every node on the way,
    /// and should return [`Ordering::Less`] to go left, [`Ordering::Greater`] to go right,
    /// and [`Ordering::Equal`] if this is the element searched for.
    ///
    /// The tree is only read, so if `locate` fails the tree is untouched.
    pub fn search<C, F>(&self, mut locate: F) -> Result<Search, C>
    where
        F: FnMut(&E) -> Result<Ordering, C>,
    {
        let mut path = vec![];
        let mut tree = self;
        while let Root(node) = tree {
            match locate(&node.element)? {
                Ordering::Equal => return Ok(Search::Found(path)),
                Ordering::Less => {
                    path.push(Side::Left);
                    tree = &node.left;
                }
                Ordering::Greater => {
                    path.push(Side::Right);
                    tree = &node.right;
                }
            }
        }
        Ok(Search::Vacant(path))
    }

    /// Finds an element, given a `locate` function as in [`BasicTree::search`].
    pub fn find_by<C, F>(&self, mut locate: F) -> Result<Option<&E>, C>
    where
        F: FnMut(&E) -> Result<Ordering, C>,
    {
        let mut tree = self;
        while let Root(node) = tree {
            match locate(&node.element)? {
                Ordering::Equal => return Ok(Some(&node.element)),
                Ordering::Less => tree = &node.left,
                Ordering::Greater => tree = &node.right,
            }
        }
        Ok(None)
    }

    /// Finds an element mutably, given a `locate` function as in [`BasicTree::search`].
    /// The caller must not change the element's ordering.
    pub fn find_by_mut<C, F>(&mut self, mut locate: F) -> Result<Option<&mut E>, C>
    where
        F: FnMut(&E) -> Result<Ordering, C>,
    {
        let mut tree = self;
        loop {
            match tree {
                Empty => return Ok(None),
                Root(node) => match locate(&node.element)? {
                    Ordering::Equal => return Ok(Some(&mut node.element)),
                    Ordering::Less => tree = &mut node.left,
                    Ordering::Greater => tree = &mut node.right,
                },
            }
        }
    }

    /// Inserts the element at the empty position at the end of `path`,
    /// and rebalances every node on the way back up.
    /// `path` must come from a [`Search::Vacant`] result on this same tree.
    pub(crate) fn insert_at(&mut self, path: &[Side], element: E) {
        let new_root = match self.take().into_node_boxed() {
            None => {
                assert!(path.is_empty(), "{}", PATH_ERROR);
                Box::new(BasicNode::new(element))
            }
            Some(node) => node.insert_at(path, element),
        };
        *self = Root(new_root);
    }

    /// Erases the node at the end of `path`, and returns its element.
    /// `path` must come from a [`Search::Found`] result on this same tree.
    pub(crate) fn erase_at(&mut self, path: &[Side]) -> E {
        let node = self.take().into_node_boxed().expect(PATH_ERROR);
        let (tree, element) = node.erase_at(path);
        *self = tree;
        element
    }

    /// Number of leaves. `0` if the tree is empty.
    pub fn leaf_count(&self) -> usize {
        self.node().map_or(0, BasicNode::leaf_count)
    }

    /// The depth of the deepest node, counted in nodes. `0` if the tree is empty.
    pub fn max_depth(&self) -> usize {
        self.node().map_or(0, BasicNode::max_depth)
    }

    /// Counts the nodes by walking the whole tree.
    pub fn node_count(&self) -> usize {
        self.node().map_or(0, BasicNode::node_count)
    }

    /// Returns `true` if every node's subtrees differ in height by at most 1.
    pub fn is_balanced(&self) -> bool {
        self.node().map_or(true, BasicNode::is_balanced)
    }
}

impl<E: Keyed> BasicTree<E> {
    /// Checks the cached heights, and that every node is ordered correctly
    /// relative to its sons. Stops at the first violation.
    pub fn verify(&self) -> Result<(), VerifyError> {
        match self {
            Empty => Ok(()),
            Root(node) => node.verify(),
        }
    }
}

impl<E> BasicNode<E> {
    pub fn new(element: E) -> BasicNode<E> {
        BasicNode {
            element,
            left: Empty,
            right: Empty,
            height: 1,
        }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn left(&self) -> &BasicTree<E> {
        &self.left
    }

    pub fn right(&self) -> &BasicTree<E> {
        &self.right
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn into_element(self) -> E {
        self.element
    }

    fn child_mut(&mut self, side: Side) -> &mut BasicTree<E> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// `height(left) - height(right)`.
    /// Positive means the left side is higher.
    pub fn slope(&self) -> isize {
        self.left.height() as isize - self.right.height() as isize
    }

    fn update_height(&mut self) {
        self.height = 1 + std::cmp::max(self.left.height(), self.right.height());
    }

    fn insert_at(mut self: Box<Self>, path: &[Side], element: E) -> Box<Self> {
        let (&side, rest) = path.split_first().expect(PATH_ERROR);
        let new_child = match self.child_mut(side).take().into_node_boxed() {
            None => {
                assert!(rest.is_empty(), "{}", PATH_ERROR);
                Box::new(BasicNode::new(element))
            }
            Some(child) => child.insert_at(rest, element),
        };
        *self.child_mut(side) = Root(new_child);
        self.rebalance()
    }

    fn erase_at(mut self: Box<Self>, path: &[Side]) -> (BasicTree<E>, E) {
        match path.split_first() {
            None => self.delete(),
            Some((&side, rest)) => {
                let child = self.child_mut(side).take().into_node_boxed().expect(PATH_ERROR);
                let (new_child, element) = child.erase_at(rest);
                *self.child_mut(side) = new_child;
                (Root(self.rebalance()), element)
            }
        }
    }

    /// Removes this node, and returns the subtree that should take its place.
    ///
    /// If the node has two sons, its left subtree is attached at the left-most
    /// empty position of its right subtree, and the right subtree takes its place.
    /// Everything in the left subtree is smaller than everything in the right subtree,
    /// so the order is kept.
    fn delete(self: Box<Self>) -> (BasicTree<E>, E) {
        let BasicNode {
            element,
            left,
            right,
            ..
        } = *self;
        let replacement = match (left, right) {
            (Empty, Empty) => Empty,
            (left, Empty) => left,
            (Empty, right) => right,
            (Root(left), Root(right)) => Root(right.add_tree_to_left(left)),
        };
        (replacement, element)
    }

    /// Hangs `tree` on the left-most empty position of this subtree,
    /// rebalancing every node on the left spine on the way back up.
    fn add_tree_to_left(mut self: Box<Self>, tree: Box<Self>) -> Box<Self> {
        let new_left = match self.left.take().into_node_boxed() {
            None => tree,
            Some(left) => left.add_tree_to_left(tree),
        };
        self.left = Root(new_left);
        self.rebalance()
    }

    /// Promotes the left son to the current position.
    /// The current node becomes the right son of the promoted node.
    pub(crate) fn rotate_clockwise(mut self: Box<Self>) -> Box<Self> {
        let mut root = self.left.take().into_node_boxed().expect(MISSING_CHILD_ERROR);
        self.left = root.right.take();
        self.update_height();
        root.right = Root(self);
        root.update_height();
        root
    }

    /// Promotes the right son to the current position.
    /// The current node becomes the left son of the promoted node.
    pub(crate) fn rotate_anticlockwise(mut self: Box<Self>) -> Box<Self> {
        let mut root = self.right.take().into_node_boxed().expect(MISSING_CHILD_ERROR);
        self.right = root.left.take();
        self.update_height();
        root.left = Root(self);
        root.update_height();
        root
    }

    /// This function gets called on every node on the way back up, after a node
    /// was inserted or deleted below it. Assumes both sons are already balanced.
    ///
    /// A slope of 2 is fixed by a single or a double rotation.
    /// Larger slopes only happen after a subtree was attached by [`BasicNode::add_tree_to_left`].
    /// Then the current node sinks down the higher side, rebalancing as it goes,
    /// until the two sides meet.
    pub(crate) fn rebalance(mut self: Box<Self>) -> Box<Self> {
        match self.slope() {
            2 => {
                let left = self.left.take().into_node_boxed().expect(MISSING_CHILD_ERROR);
                // left right case: straighten it into a left left case first
                let left = if left.left.height() < left.right.height() {
                    left.rotate_anticlockwise()
                } else {
                    left
                };
                self.left = Root(left);
                self.rotate_clockwise()
            }
            -2 => {
                let right = self.right.take().into_node_boxed().expect(MISSING_CHILD_ERROR);
                // right left case
                let right = if right.right.height() < right.left.height() {
                    right.rotate_clockwise()
                } else {
                    right
                };
                self.right = Root(right);
                self.rotate_anticlockwise()
            }
            slope if slope > 2 => {
                let mut root = self.left.take().into_node_boxed().expect(MISSING_CHILD_ERROR);
                self.left = root.right.take();
                root.right = Root(self.rebalance());
                root.update_height();
                root.rebalance()
            }
            slope if slope < -2 => {
                let mut root = self.right.take().into_node_boxed().expect(MISSING_CHILD_ERROR);
                self.right = root.left.take();
                root.left = Root(self.rebalance());
                root.update_height();
                root.rebalance()
            }
            _ => {
                self.update_height();
                self
            }
        }
    }

    /// A node with no sons counts as one leaf.
    pub fn leaf_count(&self) -> usize {
        if self.height == 1 {
            return 1;
        }
        self.left.leaf_count() + self.right.leaf_count()
    }

    pub fn max_depth(&self) -> usize {
        1 + std::cmp::max(self.left.max_depth(), self.right.max_depth())
    }

    pub fn node_count(&self) -> usize {
        1 + self.left.node_count() + self.right.node_count()
    }

    pub fn is_balanced(&self) -> bool {
        self.slope().abs() <= 1 && self.left.is_balanced() && self.right.is_balanced()
    }
}

impl<E: Keyed> BasicNode<E> {
    /// Depth first, left first. Returns the first violation found.
    pub fn verify(&self) -> Result<(), VerifyError> {
        if self.height != 1 + std::cmp::max(self.left.height(), self.right.height()) {
            return Err(VerifyError::InvalidHeight);
        }
        if let Root(left) = &self.left {
            if left.element.key() >= self.element.key() {
                return Err(VerifyError::LeftOutOfOrder);
            }
            left.verify()?;
        }
        if let Root(right) = &self.right {
            if right.element.key() <= self.element.key() {
                return Err(VerifyError::RightOutOfOrder);
            }
            right.verify()?;
        }
        Ok(())
    }
}
