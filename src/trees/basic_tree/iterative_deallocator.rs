use super::*;

/// The auto-generated deallocation code for [`BasicTree`] is recursive.
/// The depth of an AVL tree is logarithmic, but a tree that was corrupted by hand,
/// or the trees held inside the elements of another tree, can make that recursion deep.
///
/// Therefore, we have this tiny struct in order to deallocate a [`BasicTree`] in an iterative way.
/// From the user's perspective this is a function from the `basic_tree` module.
struct IterativeDeallocator<E> {
    stack: Vec<Box<BasicNode<E>>>,
}

impl<E> IterativeDeallocator<E> {
    fn step(&mut self) -> Option<()> {
        let mut node = self.stack.pop()?;
        self.push(node.left.take());
        self.push(node.right.take());
        Some(())
    }

    fn push(&mut self, tree: BasicTree<E>) {
        if let Some(node) = tree.into_node_boxed() {
            self.stack.push(node);
        }
    }
}

/// Replaces the tree with an empty tree, and deallocates the tree iteratively.
/// Input is a reference and not an owned value so that this function can get
/// called in `Drop` implementations.
pub fn deallocate_iteratively<E>(tree: &mut BasicTree<E>) {
    let my_tree = tree.take();
    let mut deallocator = IterativeDeallocator { stack: vec![] };
    deallocator.push(my_tree);
    while deallocator.step().is_some() {}
}
