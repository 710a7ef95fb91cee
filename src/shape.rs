use super::{Error, Result};

/// The declared size of each nesting level, outermost first.
///
/// All sibling arrays at a given level share that level's size. Different
/// levels may have different sizes, which is what makes the structure ragged.
///
/// ```
/// use jagged::Shape;
/// let shape = Shape::new([3, 2, 3, 3]).unwrap();
/// assert_eq!(shape.rank(), 4);
/// assert_eq!(shape.len(), 54);
/// assert!(Shape::new(Vec::<usize>::new()).is_err());
/// assert!(Shape::new([3, 0, 3]).is_err());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct Shape {
    sizes: Box<[usize]>,
    len: usize,
}

impl Shape {
    /// Validates `sizes` and computes the leaf count.
    pub fn new(sizes: impl Into<Box<[usize]>>) -> Result<Self> {
        let sizes = sizes.into();
        if sizes.is_empty() || sizes.contains(&0) {
            return Err(Error::InvalidShape(sizes.into_vec()));
        }
        match sizes.iter().try_fold(1usize, |len, &size| len.checked_mul(size)) {
            Some(len) => Ok(Self {sizes, len}),
            None => Err(Error::InvalidShape(sizes.into_vec())),
        }
    }

    /// The number of nesting levels, `D`.
    pub fn rank(&self) -> usize { self.sizes.len() }

    /// The size of every level, outermost first.
    pub fn sizes(&self) -> &[usize] { &self.sizes }

    /// The total number of leaf slots, `T`.
    ///
    /// Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.len }
}

/// A single leaf.
impl Default for Shape {
    fn default() -> Self { Self {sizes: Box::new([1]), len: 1} }
}

impl std::convert::AsRef<[usize]> for Shape {
    fn as_ref(&self) -> &[usize] { &self.sizes }
}

impl TryFrom<Vec<usize>> for Shape {
    type Error = Error;
    fn try_from(sizes: Vec<usize>) -> Result<Self> { Self::new(sizes) }
}

impl From<Shape> for Vec<usize> {
    fn from(shape: Shape) -> Self { shape.sizes.into_vec() }
}

// ----------------------------------------------------------------------------
