//! Implementation of AVL trees.
//! Balanced by keeping track of subtree heights, this is a worst-case balancing
//! algorithm: the height of a tree with `n` elements is always `O(log n)`.
//!
//! The tree is an ordered set of [`Keyed`] elements. Every operation first walks
//! down the tree without changing it, and only then changes the structure along the
//! path it found. So an operation that fails, including one whose caller-supplied
//! comparison fails, leaves the tree exactly as it was.

use std::cmp::Ordering;

use void::{ResultVoidExt, Void};

use super::basic_tree::*;
use super::*;
use crate::error::{TreeError, VerifyError};

/// An AVL tree. Keeps a running count of its elements.
///
///```
/// use avl_maze::{SomeTree, avl::AVLTree, Key};
///
/// let mut tree = AVLTree::new();
/// for x in [1, 5, 3, 4, 2] {
///     tree.insert(Key::new(x)).unwrap();
/// }
/// assert_eq!(tree.len(), 5);
/// assert!(tree.height() <= 3);
/// assert_eq!(tree.iter().map(|k| k.key).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
/// # tree.assert_correctness();
///```
#[derive(destructure)]
pub struct AVLTree<E> {
    tree: BasicTree<E>,
    /// Invariant: the number of nodes in `tree`.
    count: usize,
}

impl<E> AVLTree<E> {
    /// Creates an empty [`AVLTree`].
    pub fn new() -> Self {
        AVLTree {
            tree: BasicTree::Empty,
            count: 0,
        }
    }

    /// The number of elements in the tree. `O(1)`.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Same as [`AVLTree::len`].
    pub fn size(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Removes all elements.
    pub fn clear(&mut self) {
        deallocate_iteratively(&mut self.tree);
        self.count = 0;
    }

    /// Read access to the underlying tree structure.
    pub fn inner(&self) -> &BasicTree<E> {
        &self.tree
    }

    /// Iterates over the elements in ascending order.
    pub fn iter(&self) -> iterators::Iter<'_, E> {
        iterators::Iter::new(&self.tree)
    }

    /// A measure of how balanced the tree is, computed as
    /// `log2(n + 1) / max_depth * (2 * leaf_count) / (n + 1)`.
    ///
    /// `1.0` for a perfectly balanced tree, and for the empty tree.
    /// The closer the value is to `0`, the more unbalanced the tree.
    /// A value below `0.5` indicates a seriously unbalanced tree.
    pub fn balance(&self) -> f64 {
        if self.count == 0 {
            return 1.0;
        }
        let items = (self.count + 1) as f64;
        items.log2() / self.tree.max_depth() as f64 * (self.tree.leaf_count() * 2) as f64 / items
    }

    /// Makes this tree a copy of `source`, discarding its previous contents,
    /// and returns the updated tree.
    pub fn assign(&mut self, source: &Self) -> &mut Self
    where
        E: Clone,
    {
        self.clone_from(source);
        self
    }

    /// Finds an element. `locate` should compare the searched element to the element it is given:
    /// [`Ordering::Less`] if the searched element is smaller, and so on.
    pub fn find_by<F>(&self, mut locate: F) -> Option<&E>
    where
        F: FnMut(&E) -> Ordering,
    {
        self.tree.find_by(|e| Ok::<_, Void>(locate(e))).void_unwrap()
    }

    /// Finds an element mutably. See [`AVLTree::find_by`].
    /// The element may be changed in any way that doesn't change its ordering.
    pub fn find_by_mut<F>(&mut self, mut locate: F) -> Option<&mut E>
    where
        F: FnMut(&E) -> Ordering,
    {
        self.tree.find_by_mut(|e| Ok::<_, Void>(locate(e))).void_unwrap()
    }

    /// Like [`AVLTree::find_by`], with a comparison that might fail.
    pub fn try_find_by<C, F>(&self, locate: F) -> Result<Option<&E>, C>
    where
        F: FnMut(&E) -> Result<Ordering, C>,
    {
        self.tree.find_by(locate)
    }

    /// Like [`AVLTree::find_by_mut`], with a comparison that might fail.
    pub fn try_find_by_mut<C, F>(&mut self, locate: F) -> Result<Option<&mut E>, C>
    where
        F: FnMut(&E) -> Result<Ordering, C>,
    {
        self.tree.find_by_mut(locate)
    }

    /// Inserts an element. `cmp(new, stored)` should compare the new element to a stored one.
    ///
    /// Fails with [`TreeError::DuplicateKey`] if an equal element is already in the tree,
    /// and with [`TreeError::Compare`] if a comparison fails. In both cases the tree
    /// is left unchanged.
    pub fn try_insert_by<C, F>(&mut self, element: E, mut cmp: F) -> Result<(), TreeError<C>>
    where
        F: FnMut(&E, &E) -> Result<Ordering, C>,
    {
        let search = self
            .tree
            .search(|stored| cmp(&element, stored))
            .map_err(TreeError::Compare)?;
        match search {
            Search::Found(_) => Err(TreeError::DuplicateKey),
            Search::Vacant(path) => {
                self.tree.insert_at(&path, element);
                self.count += 1;
                Ok(())
            }
        }
    }

    /// Erases an element and returns it. `locate` is as in [`AVLTree::try_find_by`].
    ///
    /// Fails with [`TreeError::EmptyTree`] if the tree is empty, with [`TreeError::KeyNotFound`]
    /// if there is no such element, and with [`TreeError::Compare`] if a comparison fails.
    /// In all cases the tree is left unchanged.
    pub fn try_erase_by<C, F>(&mut self, locate: F) -> Result<E, TreeError<C>>
    where
        F: FnMut(&E) -> Result<Ordering, C>,
    {
        if self.tree.is_empty() {
            return Err(TreeError::EmptyTree);
        }
        match self.tree.search(locate).map_err(TreeError::Compare)? {
            Search::Vacant(_) => Err(TreeError::KeyNotFound),
            Search::Found(path) => {
                let element = self.tree.erase_at(&path);
                self.count -= 1;
                Ok(element)
            }
        }
    }
}

impl<E: Keyed> AVLTree<E> {
    /// Inserts an element.
    /// Fails with [`TreeError::DuplicateKey`] if an element with the same key is already in the tree.
    ///
    ///```
    /// use avl_maze::{avl::AVLTree, Key, TreeError};
    ///
    /// let mut tree = AVLTree::new();
    /// tree.insert(Key::new(7)).unwrap();
    /// assert_eq!(tree.insert(Key::new(7)), Err(TreeError::DuplicateKey));
    /// assert_eq!(tree.len(), 1);
    ///```
    pub fn insert(&mut self, element: E) -> Result<(), TreeError> {
        self.try_insert_by(element, |new, stored| Ok(stored.locate(new.key())))
    }

    /// Erases the element with the given key, and returns it.
    ///
    ///```
    /// use avl_maze::{avl::AVLTree, Key, TreeError};
    ///
    /// let mut tree: AVLTree<Key<i32>> = AVLTree::new();
    /// assert_eq!(tree.erase(&1), Err(TreeError::EmptyTree));
    /// tree.insert(Key::new(1)).unwrap();
    /// assert_eq!(tree.erase(&2), Err(TreeError::KeyNotFound));
    /// assert_eq!(tree.erase(&1), Ok(Key::new(1)));
    /// assert!(tree.is_empty());
    ///```
    pub fn erase(&mut self, key: &E::Key) -> Result<E, TreeError> {
        self.try_erase_by(|stored| Ok(stored.locate(key)))
    }

    /// Returns the element with the given key, if there is one.
    pub fn find(&self, key: &E::Key) -> Option<&E> {
        self.find_by(|stored| stored.locate(key))
    }

    /// Returns the element with the given key mutably, if there is one.
    /// The element's key must not be changed through the returned reference.
    pub fn find_mut(&mut self, key: &E::Key) -> Option<&mut E> {
        self.find_by_mut(|stored| stored.locate(key))
    }

    pub fn contains(&self, key: &E::Key) -> bool {
        self.find(key).is_some()
    }
}

impl<E: Keyed> SomeTree<E> for AVLTree<E> {
    fn height(&self) -> usize {
        self.tree.height()
    }

    fn max_depth(&self) -> usize {
        self.tree.max_depth()
    }

    fn leaf_count(&self) -> usize {
        self.tree.leaf_count()
    }

    fn node_count(&self) -> usize {
        self.tree.node_count()
    }

    /// Also checks that the number of nodes matches the count kept by the tree.
    fn verify(&self) -> Result<(), VerifyError> {
        let counted = self.tree.node_count();
        if counted != self.count {
            return Err(VerifyError::CountMismatch {
                counted,
                expected: self.count,
            });
        }
        self.tree.verify()
    }

    fn is_balanced(&self) -> bool {
        self.tree.is_balanced()
    }
}

impl<E> Default for AVLTree<E> {
    fn default() -> Self {
        AVLTree::new()
    }
}

impl<E> Drop for AVLTree<E> {
    fn drop(&mut self) {
        deallocate_iteratively(&mut self.tree);
    }
}

impl<E: Clone> Clone for AVLTree<E> {
    /// A deep copy: every node is copied, nothing is shared with the original.
    fn clone(&self) -> Self {
        AVLTree {
            tree: self.tree.clone(),
            count: self.count,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        deallocate_iteratively(&mut self.tree);
        self.tree = source.tree.clone();
        self.count = source.count;
    }
}

impl<E: PartialEq> PartialEq for AVLTree<E> {
    /// Two trees are equal if they hold equal elements, regardless of their shape.
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<E: Eq> Eq for AVLTree<E> {}

impl<E: std::fmt::Debug> std::fmt::Debug for AVLTree<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<E: std::fmt::Display> std::fmt::Display for AVLTree<E> {
    /// Prints every element in order, each on its own line.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for element in self.iter() {
            writeln!(f, "{}", element)?;
        }
        Ok(())
    }
}

impl<E: Keyed> Extend<E> for AVLTree<E> {
    /// Elements equal to an element already in the tree are dropped.
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        for element in iter {
            if let Err(err) = self.insert(element) {
                log::warn!("skipping element while extending tree: {}", err);
            }
        }
    }
}

impl<E: Keyed> std::iter::FromIterator<E> for AVLTree<E> {
    /// This takes `O(n log n)` worst-case time.
    /// Elements equal to an earlier element are dropped.
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        let mut tree = AVLTree::new();
        tree.extend(iter);
        tree
    }
}

impl<E> IntoIterator for AVLTree<E> {
    type Item = E;
    type IntoIter = iterators::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        let (tree, _) = self.destructure();
        iterators::IntoIter::new(tree)
    }
}

impl<'a, E> IntoIterator for &'a AVLTree<E> {
    type Item = &'a E;
    type IntoIter = iterators::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Key;

    fn tree_of(keys: impl IntoIterator<Item = i32>) -> AVLTree<Key<i32>> {
        keys.into_iter().map(Key::new).collect()
    }

    #[test]
    fn count_mismatch_is_reported_before_structure() {
        let mut tree = tree_of(1..=5);
        tree.count = 4;
        assert_eq!(
            tree.verify(),
            Err(VerifyError::CountMismatch {
                counted: 5,
                expected: 4
            })
        );
    }

    #[test]
    fn corrupted_order_is_reported() {
        let mut tree = tree_of(1..=3);
        // the root is 2, with 1 on the left. force the left son above its parent.
        let root = tree.tree.node_mut().unwrap();
        let left = root.left.node_mut().unwrap();
        *left = BasicNode::new(Key::new(9));
        let reason = tree.verify().unwrap_err();
        assert_eq!(reason, VerifyError::LeftOutOfOrder);
        assert!(!reason.to_string().is_empty());
    }

    #[test]
    fn failing_comparison_leaves_tree_unchanged() {
        let mut tree = tree_of(0..20);
        let before: Vec<_> = tree.iter().cloned().collect();
        let shape = format!("{:?}", tree.inner());

        let mut calls = 0;
        let res = tree.try_insert_by(Key::new(100), |new, stored| {
            calls += 1;
            if calls == 3 {
                Err("comparator failed")
            } else {
                Ok(new.key.cmp(&stored.key))
            }
        });
        assert_eq!(res, Err(TreeError::Compare("comparator failed")));

        let mut calls = 0;
        let res = tree.try_erase_by(|stored| {
            calls += 1;
            if calls == 2 {
                Err("comparator failed")
            } else {
                Ok(0.cmp(&stored.key))
            }
        });
        assert_eq!(res, Err(TreeError::Compare("comparator failed")));

        assert_eq!(tree.iter().cloned().collect::<Vec<_>>(), before);
        assert_eq!(format!("{:?}", tree.inner()), shape);
        assert_eq!(tree.len(), 20);
        tree.assert_correctness();
    }

    #[test]
    fn assign_replaces_everything() {
        let source = tree_of([10, 20, 30]);
        let mut target = tree_of(0..100);
        let len = target.assign(&source).len();
        assert_eq!(len, 3);
        assert_eq!(target, source);
        target.assert_correctness();
    }

    #[test]
    fn balance_metric() {
        let empty: AVLTree<Key<i32>> = AVLTree::new();
        assert_eq!(empty.balance(), 1.0);
        // a perfect tree of 7 nodes: log2(8) / 3 * 8 / 8
        let perfect = tree_of(1..=7);
        assert!((perfect.balance() - 1.0).abs() < 1e-9);
    }
}
