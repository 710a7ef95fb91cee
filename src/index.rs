//! Conversions between flat addresses and coordinate paths.
//!
//! A flat address is a mixed-radix number whose least significant digit is
//! the index into the root array, and whose most significant digit is the
//! index into a leaf array. This is the order in which [`Nested::write_at()`]
//! consumes digits while descending from the root.
//!
//! [`Nested::write_at()`]: super::Nested::write_at

use super::{Shape};

/// A coordinate path: one index per level, outermost first.
pub type Path = Vec<usize>;

/// Returns `(index / radix, index % radix)`, or `None` if `radix` is zero.
#[inline(always)]
pub(crate) fn div_mod(index: usize, radix: usize) -> Option<(usize, usize)> {
    if radix == 0 { return None; }
    Some((index / radix, index % radix))
}

impl Shape {
    /// Returns `true` if `path` has one in-bounds index per level.
    pub fn contains(&self, path: &[usize]) -> bool {
        path.len() == self.rank() && path.iter().zip(self.sizes()).all(|(&i, &size)| i < size)
    }

    /// Returns the index (in `0..self.len()`) of `path`.
    ///
    /// # Panics
    ///
    /// Panics if `path` does not have one in-bounds index per level.
    ///
    /// ```
    /// use jagged::Shape;
    /// let shape = Shape::new([3, 2]).unwrap();
    /// assert_eq!(shape.to_usize(&[0, 0]), 0);
    /// assert_eq!(shape.to_usize(&[1, 0]), 1);
    /// assert_eq!(shape.to_usize(&[0, 1]), 3);
    /// assert_eq!(shape.to_usize(&[2, 1]), 5);
    /// ```
    pub fn to_usize(&self, path: &[usize]) -> usize {
        assert_eq!(path.len(), self.rank(), "Path {:?} does not match shape {:?}", path, self.sizes());
        let mut index = 0;
        for (&i, &size) in path.iter().zip(self.sizes()).rev() {
            assert!(i < size, "Index {:?} is out of bounds for size {:?}", i, size);
            index = index * size + i;
        }
        index
    }

    /// Returns `index / self.len()` and the path for which `to_usize()`
    /// returns `index % self.len()`.
    pub fn from_usize(&self, index: usize) -> (usize, Path) {
        let mut path = Path::with_capacity(self.rank());
        let mut index = index;
        for &size in self.sizes() {
            // Sizes are never zero.
            let (q, r) = (index / size, index % size);
            path.push(r);
            index = q;
        }
        (index, path)
    }

    /// Equivalent to, but more efficient than,
    /// ```text
    /// for i in 0..self.len() { f(&self.from_usize(i).1); }
    /// ```
    pub fn each(&self, mut f: impl FnMut(&[usize])) {
        let mut path = vec![0; self.rank()];
        for _ in 0..self.len() {
            f(&path);
            // Increment with carry, root digit first.
            for (digit, &size) in path.iter_mut().zip(self.sizes()) {
                *digit += 1;
                if *digit < size { break; }
                *digit = 0;
            }
        }
    }
}

// ----------------------------------------------------------------------------
