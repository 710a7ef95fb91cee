use super::{Error, Mismatch, Result, Shape};

/// One array in a nested structure.
///
/// A `Node` knows by its variant whether its elements are leaf slots or
/// further arrays, so code walking a tree can discover which level it is at
/// without a separate depth counter.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Node<T> {
    /// An array of leaf slots. `None` is an empty slot.
    Leaves(Box<[Option<T>]>),
    /// An array of arrays.
    Branches(Box<[Node<T>]>),
}

impl<T> Node<T> {
    /// Allocates an array of size `sizes[0]` and everything below it, with
    /// every leaf slot empty.
    pub(crate) fn new(sizes: &[usize]) -> Self {
        match sizes {
            [] => unreachable!("Shapes have at least one level"),
            [size] => Node::Leaves((0..*size).map(|_| None).collect()),
            [size, inner @ ..] => Node::Branches((0..*size).map(|_| Node::new(inner)).collect()),
        }
    }

    /// The number of elements in this array.
    pub fn len(&self) -> usize {
        match self {
            Node::Leaves(slots) => slots.len(),
            Node::Branches(kids) => kids.len(),
        }
    }

    /// Returns `true` if this array has no elements.
    ///
    /// Such a `Node` cannot be part of a [`Nested`] structure.
    ///
    /// [`Nested`]: super::Nested
    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Returns `true` if the elements of this array are leaf slots.
    pub fn is_leaves(&self) -> bool { matches!(self, Node::Leaves(_)) }

    /// Infers the [`Shape`] of the tree rooted at `self`.
    ///
    /// Every sibling at a level must have the same length and the same kind,
    /// and no array may be empty.
    ///
    /// ```
    /// use jagged::{Node, Mismatch, Error};
    /// let tree: Node<u8> = Node::Branches(vec![
    ///     Node::Leaves(vec![None, Some(1), None].into()),
    ///     Node::Leaves(vec![Some(2), None, None].into()),
    /// ].into());
    /// assert_eq!(tree.shape().unwrap().sizes(), [2, 3]);
    ///
    /// let ragged: Node<u8> = Node::Branches(vec![
    ///     Node::Leaves(vec![None, None, None].into()),
    ///     Node::Leaves(vec![None].into()),
    /// ].into());
    /// assert_eq!(ragged.shape(), Err(Error::ShapeMismatch {
    ///     level: 1,
    ///     mismatch: Mismatch::Length {expected: 3, found: 1},
    /// }));
    /// ```
    pub fn shape(&self) -> Result<Shape> {
        let mut sizes = Vec::new();
        let mut level: Vec<&Node<T>> = vec![self];
        loop {
            let first = level[0];
            let expected = first.len();
            if expected == 0 {
                return Err(Error::ShapeMismatch {level: sizes.len(), mismatch: Mismatch::Empty});
            }
            for node in &level {
                if node.is_leaves() != first.is_leaves() {
                    return Err(Error::ShapeMismatch {level: sizes.len(), mismatch: Mismatch::Kind});
                }
                if node.len() != expected {
                    return Err(Error::ShapeMismatch {
                        level: sizes.len(),
                        mismatch: Mismatch::Length {expected, found: node.len()},
                    });
                }
            }
            sizes.push(expected);
            if first.is_leaves() { break; }
            let mut next = Vec::with_capacity(level.len() * expected);
            for node in level {
                if let Node::Branches(kids) = node { next.extend(kids.iter()); }
            }
            level = next;
        }
        Shape::new(sizes)
    }

    /// Follows `address` down from `self` to a leaf slot.
    ///
    /// At each array of arrays, the index taken is `address % len` and the
    /// remainder carried to the next level is `address / len`. At the leaf
    /// array, the slot taken is `address % len`. `visit` is called with the
    /// index chosen at each level, outermost first.
    pub(crate) fn descend(&self, address: usize, mut visit: impl FnMut(usize)) -> Result<&Option<T>> {
        let mut node = self;
        let mut address = address;
        let mut level = 0;
        loop {
            match node {
                Node::Branches(kids) => {
                    let (q, r) = split(address, kids.len(), level)?;
                    visit(r);
                    address = q;
                    node = &kids[r];
                    level += 1;
                },
                Node::Leaves(slots) => {
                    let (_, r) = split(address, slots.len(), level)?;
                    visit(r);
                    return Ok(&slots[r]);
                },
            }
        }
    }

    /// Like [`Self::descend()`] but returns the slot mutably.
    pub(crate) fn descend_mut(&mut self, address: usize) -> Result<&mut Option<T>> {
        let mut node = self;
        let mut address = address;
        let mut level = 0;
        loop {
            node = match node {
                Node::Branches(kids) => {
                    let (q, r) = split(address, kids.len(), level)?;
                    address = q;
                    level += 1;
                    &mut kids[r]
                },
                Node::Leaves(slots) => {
                    let (_, r) = split(address, slots.len(), level)?;
                    return Ok(&mut slots[r]);
                },
            };
        }
    }

    /// Empties every leaf slot below `self`.
    pub(crate) fn clear(&mut self) {
        match self {
            Node::Leaves(slots) => { for slot in slots.iter_mut() { *slot = None; } },
            Node::Branches(kids) => { for kid in kids.iter_mut() { kid.clear(); } },
        }
    }
}

fn split(address: usize, len: usize, level: usize) -> Result<(usize, usize)> {
    super::index::div_mod(address, len).ok_or(Error::ShapeMismatch {level, mismatch: Mismatch::Empty})
}

// ----------------------------------------------------------------------------
