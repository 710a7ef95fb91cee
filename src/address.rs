//! Writing and reading leaf slots by flat address.
//!
//! A raw index is first reduced modulo a total (normally the leaf count of
//! the structure) to give an address. The address is then consumed one digit
//! at a time while descending from the root: at each array, the digit is the
//! remainder modulo the array's length and the rest is carried to the next
//! level. Whether to keep descending is decided by the variant of each
//! [`Node`] reached, so the walk works for any number of levels, including
//! one.

use std::num::{NonZeroUsize};

use super::{Nested, Path, Result};

/// The value that [`Nested::write_at()`] stores in a leaf slot.
///
/// `id` is the effective address that last wrote the slot.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Marker {
    pub id: usize,
}

impl<T> Nested<T> {
    /// Returns `raw % self.shape().len()`.
    pub fn address(&self, raw: usize) -> usize { raw % self.shape().len() }

    /// Returns the coordinate path of the slot that `write_with(raw, _)` would
    /// fill.
    ///
    /// ```
    /// use jagged::{Nested, Marker};
    /// let n: Nested<Marker> = Nested::build([3, 2, 3, 3]).unwrap();
    /// assert_eq!(n.locate(0).unwrap(), [0, 0, 0, 0]);
    /// assert_eq!(n.locate(7).unwrap(), [1, 0, 1, 0]);
    /// assert_eq!(n.locate(53).unwrap(), [2, 1, 2, 2]);
    /// assert_eq!(n.locate(54).unwrap(), n.locate(0).unwrap());
    /// ```
    pub fn locate(&self, raw: usize) -> Result<Path> {
        let mut path = Path::with_capacity(self.shape().rank());
        self.root().descend(self.address(raw), |i| path.push(i))?;
        Ok(path)
    }

    /// Returns the value in the slot that `write_with(raw, _)` would fill, or
    /// `None` if the slot is empty.
    pub fn read_at(&self, raw: usize) -> Result<Option<&T>> {
        Ok(self.root().descend(self.address(raw), |_| {})?.as_ref())
    }

    /// Fills exactly one leaf slot, chosen by `raw % self.shape().len()`, with
    /// `value(address)`. Returns the value it replaced.
    ///
    /// Fails with [`Error::ShapeMismatch`] only if the descent meets an empty
    /// array, which cannot happen for a `Nested` built by this crate.
    ///
    /// [`Error::ShapeMismatch`]: super::Error::ShapeMismatch
    pub fn write_with(&mut self, raw: usize, value: impl FnOnce(usize) -> T) -> Result<Option<T>> {
        let address = self.address(raw);
        self.write_address(address, value)
    }

    /// Like [`Self::write_with()`], but reduces `raw` modulo `modulus` instead
    /// of modulo the leaf count.
    ///
    /// If `modulus` exceeds the leaf count, the descent still reduces at
    /// every level, so it wraps instead of going out of bounds.
    pub fn write_wrapped_with(
        &mut self,
        raw: usize,
        modulus: NonZeroUsize,
        value: impl FnOnce(usize) -> T,
    ) -> Result<Option<T>> {
        self.write_address(raw % modulus, value)
    }

    fn write_address(&mut self, address: usize, value: impl FnOnce(usize) -> T) -> Result<Option<T>> {
        let slot = self.root_mut().descend_mut(address)?;
        Ok(slot.replace(value(address)))
    }
}

impl Nested<Marker> {
    /// Marks the slot chosen by `raw % self.shape().len()` with a [`Marker`]
    /// carrying that address. Returns the marker it replaced.
    ///
    /// ```
    /// use jagged::{Nested, Marker};
    /// let mut n: Nested<Marker> = Nested::build([5, 2]).unwrap();
    /// assert_eq!(n.write_at(3).unwrap(), None);
    /// assert_eq!(n.write_at(13).unwrap(), Some(Marker {id: 3}));
    /// assert_eq!(n.read_at(3).unwrap(), Some(&Marker {id: 3}));
    /// assert_eq!(n.count_populated(), 1);
    /// ```
    pub fn write_at(&mut self, raw: usize) -> Result<Option<Marker>> {
        self.write_with(raw, |id| Marker {id})
    }

    /// Like [`Self::write_at()`], but reduces `raw` modulo `modulus` instead of
    /// modulo the leaf count.
    pub fn write_wrapped(&mut self, raw: usize, modulus: NonZeroUsize) -> Result<Option<Marker>> {
        self.write_wrapped_with(raw, modulus, |id| Marker {id})
    }
}

// ----------------------------------------------------------------------------
