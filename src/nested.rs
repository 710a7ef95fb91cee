use super::{Node, Result, Shape};

/// An irregular nested array of `T`s, whose leaf slots may be empty.
///
/// The shape is fixed at construction. Leaf slots start empty and are filled
/// in place, either by path with [`Self::get_mut()`] or by flat address with
/// [`Self::write_at()`].
///
/// ```
/// use jagged::{Nested, Marker};
/// let mut n: Nested<Marker> = Nested::build([3, 2, 3, 3]).unwrap();
/// assert_eq!(n.shape().len(), 54);
/// assert_eq!(n.count_populated(), 0);
/// n.write_at(53).unwrap();
/// assert_eq!(n.get(&[2, 1, 2, 2]), Some(&Marker {id: 53}));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nested<T> {
    shape: Shape,
    root: Node<T>,
}

impl<T> Nested<T> {
    /// Allocates a structure of shape `shape` with every leaf slot empty.
    pub fn new(shape: Shape) -> Self {
        let root = Node::new(shape.sizes());
        Self {shape, root}
    }

    /// Validates `sizes` and allocates a structure with every leaf slot empty.
    ///
    /// Fails with [`Error::InvalidShape`] if there are no levels or any size
    /// is zero. No partial structure is built.
    ///
    /// [`Error::InvalidShape`]: super::Error::InvalidShape
    pub fn build(sizes: impl Into<Box<[usize]>>) -> Result<Self> {
        Ok(Self::new(Shape::new(sizes)?))
    }

    /// Wraps a tree built by hand, inferring its [`Shape`].
    ///
    /// Fails with [`Error::ShapeMismatch`] if siblings disagree in length or
    /// kind, or if any array is empty. See [`Node::shape()`].
    ///
    /// [`Error::ShapeMismatch`]: super::Error::ShapeMismatch
    pub fn from_node(root: Node<T>) -> Result<Self> {
        let shape = root.shape()?;
        Ok(Self {shape, root})
    }

    pub fn shape(&self) -> &Shape { &self.shape }

    pub fn root(&self) -> &Node<T> { &self.root }

    pub fn into_root(self) -> Node<T> { self.root }

    /// Walks `path` from the root, returning `None` if it leaves the tree.
    fn slot(&self, path: &[usize]) -> Option<&Option<T>> {
        let (&last, inner) = path.split_last()?;
        let mut node = &self.root;
        for &i in inner {
            match node {
                Node::Branches(kids) => { node = kids.get(i)?; },
                Node::Leaves(_) => return None,
            }
        }
        match node {
            Node::Leaves(slots) => slots.get(last),
            Node::Branches(_) => None,
        }
    }

    fn slot_mut(&mut self, path: &[usize]) -> Option<&mut Option<T>> {
        let (&last, inner) = path.split_last()?;
        let mut node = &mut self.root;
        for &i in inner {
            node = match node {
                Node::Branches(kids) => kids.get_mut(i)?,
                Node::Leaves(_) => return None,
            };
        }
        match node {
            Node::Leaves(slots) => slots.get_mut(last),
            Node::Branches(_) => None,
        }
    }

    fn check(&self, path: &[usize]) {
        assert!(self.shape.contains(path), "Path {:?} is out of bounds for shape {:?}", path, self.shape.sizes());
    }

    /// Returns the value at `path`, or `None` if the slot is empty.
    ///
    /// # Panics
    ///
    /// Panics if `path` does not have one in-bounds index per level.
    pub fn get(&self, path: &[usize]) -> Option<&T> {
        self.check(path);
        self.slot(path).and_then(Option::as_ref)
    }

    /// Returns the slot at `path` for in-place modification.
    ///
    /// # Panics
    ///
    /// Panics if `path` does not have one in-bounds index per level.
    pub fn get_mut(&mut self, path: &[usize]) -> &mut Option<T> {
        self.check(path);
        match self.slot_mut(path) {
            Some(slot) => slot,
            None => unreachable!("Tree does not match its shape"),
        }
    }

    /// Empties the slot at `path`, returning what it held.
    ///
    /// # Panics
    ///
    /// Panics if `path` does not have one in-bounds index per level.
    pub fn take(&mut self, path: &[usize]) -> Option<T> { self.get_mut(path).take() }

    /// Empties every leaf slot. The shape is unchanged.
    pub fn clear(&mut self) { self.root.clear(); }

    pub(crate) fn root_mut(&mut self) -> &mut Node<T> { &mut self.root }
}

impl<T> TryFrom<Node<T>> for Nested<T> {
    type Error = super::Error;
    fn try_from(root: Node<T>) -> Result<Self> { Self::from_node(root) }
}

// ----------------------------------------------------------------------------
