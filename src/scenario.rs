//! Repeatable write-then-count runs over a [`Nested`] structure.
//!
//! A [`Scenario`] writes [`Marker`]s at raw indices `start, start + step, ...`
//! below `end`, then counts the populated leaves. Raw indices wrap around the
//! address space, so later writes overwrite earlier ones and the count is
//! usually less than the number of writes.

use std::num::{NonZeroUsize};

use super::{Error, Marker, Nested, Result, Shape};

/// How a [`Scenario`] reduces raw indices before addressing a leaf.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, Copy, Clone, Hash, PartialEq, Eq)]
pub enum Modulus {
    /// Modulo the leaf count of the shape.
    #[default]
    LeafCount,
    /// Modulo a fixed total, which need not equal the leaf count.
    Fixed(NonZeroUsize),
}

/// A shape and a sequence of raw indices to write into it.
///
/// ```
/// use jagged::Scenario;
/// let scenario = Scenario::reference(4, 3).unwrap();
/// assert_eq!(scenario.shape.sizes(), [3, 2, 3, 3]);
/// assert_eq!(scenario.indices().count(), 1429);
/// assert_eq!(scenario.run().unwrap(), 54);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub shape: Shape,
    /// The first raw index written.
    pub start: usize,
    /// Raw indices are strictly less than this.
    pub end: usize,
    pub step: NonZeroUsize,
    pub modulus: Modulus,
}

/// The largest rank for which [`Scenario::reference()`] defines a shape.
pub const REFERENCE_RANKS: usize = 5;

impl Scenario {
    pub const DEFAULT_END: usize = 10_000;
    pub const DEFAULT_STEP: NonZeroUsize = match NonZeroUsize::new(7) {
        Some(step) => step,
        None => unreachable!(),
    };

    /// Writes at `0, 7, 14, ...` below `10000`, reduced modulo the leaf count.
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            start: 0,
            end: Self::DEFAULT_END,
            step: Self::DEFAULT_STEP,
            modulus: Modulus::LeafCount,
        }
    }

    /// The reference shape of rank `rank` (`1..=5`) built from `size`:
    ///
    /// | rank | sizes |
    /// |------|-------|
    /// | 1 | `[size]` |
    /// | 2 | `[size, size]` |
    /// | 3 | `[size, 5, size]` |
    /// | 4 | `[size, 2, size, 3]` |
    /// | 5 | `[size, size, 3, 4, size]` |
    ///
    /// Fails with [`Error::InvalidShape`] for any other rank or for
    /// `size == 0`.
    pub fn reference_shape(rank: usize, size: usize) -> Result<Shape> {
        let sizes = match rank {
            1 => vec![size],
            2 => vec![size, size],
            3 => vec![size, 5, size],
            4 => vec![size, 2, size, 3],
            5 => vec![size, size, 3, 4, size],
            _ => return Err(Error::InvalidShape(vec![size; rank])),
        };
        Shape::new(sizes)
    }

    /// [`Self::new()`] applied to [`Self::reference_shape()`].
    pub fn reference(rank: usize, size: usize) -> Result<Self> {
        Ok(Self::new(Self::reference_shape(rank, size)?))
    }

    /// Like [`Self::reference()`], but reduces raw indices modulo
    /// `size.pow(rank)` rather than the leaf count. Shapes whose middle
    /// levels are not `size` then cover only part of the address space, or
    /// wrap at the leaf level.
    pub fn reference_wrapped(rank: usize, size: usize) -> Result<Self> {
        let shape = Self::reference_shape(rank, size)?;
        let total = u32::try_from(rank).ok()
            .and_then(|rank| size.checked_pow(rank))
            .and_then(NonZeroUsize::new)
            .ok_or_else(|| Error::InvalidShape(shape.sizes().to_vec()))?;
        Ok(Self {modulus: Modulus::Fixed(total), ..Self::new(shape)})
    }

    /// The raw indices this scenario writes, in order.
    pub fn indices(&self) -> impl Iterator<Item=usize> {
        (self.start..self.end).step_by(self.step.get())
    }

    /// Builds an empty structure, writes every index, and returns the
    /// structure.
    pub fn fill(&self) -> Result<Nested<Marker>> {
        let mut nested = Nested::new(self.shape.clone());
        for raw in self.indices() {
            match self.modulus {
                Modulus::LeafCount => nested.write_at(raw)?,
                Modulus::Fixed(total) => nested.write_wrapped(raw, total)?,
            };
        }
        Ok(nested)
    }

    /// Runs [`Self::fill()`] and returns the number of populated leaves.
    pub fn run(&self) -> Result<usize> {
        Ok(self.fill()?.count_populated())
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new(Shape::default())
    }
}

/// Sums [`Scenario::reference_wrapped()`] runs for sizes 3 and 5 at `rank`.
///
/// This is the figure the classic jagged-array micro-benchmark reports for each
/// rank.
///
/// ```
/// assert_eq!(jagged::benchmark(1).unwrap(), 8);
/// assert_eq!(jagged::benchmark(5).unwrap(), 243 + 1304);
/// ```
pub fn benchmark(rank: usize) -> Result<usize> {
    let mut total = 0;
    for size in [3, 5] {
        total += Scenario::reference_wrapped(rank, size)?.run()?;
    }
    Ok(total)
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const LEAF_COUNT_GOLDEN: [(usize, [usize; 2]); REFERENCE_RANKS] = [
        (1, [3, 5]),
        (2, [9, 25]),
        (3, [45, 125]),
        (4, [54, 150]),
        (5, [324, 1429]),
    ];

    const WRAPPED_GOLDEN: [(usize, [usize; 2]); REFERENCE_RANKS] = [
        (1, [3, 5]),
        (2, [9, 25]),
        (3, [27, 125]),
        (4, [54, 150]),
        (5, [243, 1304]),
    ];

    #[test]
    fn reference_leaf_count() {
        for (rank, expected) in LEAF_COUNT_GOLDEN {
            for (size, expected) in [3, 5].into_iter().zip(expected) {
                assert_eq!(Scenario::reference(rank, size).unwrap().run(), Ok(expected), "rank {} size {}", rank, size);
            }
        }
    }

    #[test]
    fn reference_wrapped() {
        for (rank, expected) in WRAPPED_GOLDEN {
            for (size, expected) in [3, 5].into_iter().zip(expected) {
                assert_eq!(Scenario::reference_wrapped(rank, size).unwrap().run(), Ok(expected), "rank {} size {}", rank, size);
            }
        }
    }

    #[test]
    fn benchmark_totals() {
        let totals: Vec<usize> = (1..=REFERENCE_RANKS).map(|rank| benchmark(rank).unwrap()).collect();
        assert_eq!(totals, [8, 34, 152, 204, 1547]);
    }

    #[test]
    fn reference_shapes() {
        assert_eq!(Scenario::reference_shape(3, 5).unwrap().sizes(), [5, 5, 5]);
        assert_eq!(Scenario::reference_shape(5, 3).unwrap().len(), 324);
        assert_eq!(Scenario::reference_shape(0, 3), Err(Error::InvalidShape(vec![])));
        assert_eq!(Scenario::reference_shape(6, 3), Err(Error::InvalidShape(vec![3; 6])));
        assert_eq!(Scenario::reference_shape(2, 0), Err(Error::InvalidShape(vec![0, 0])));
    }

    #[test]
    fn indices() {
        let scenario = Scenario::reference(1, 3).unwrap();
        let indices: Vec<usize> = scenario.indices().collect();
        assert_eq!(indices.len(), 1429);
        assert_eq!(indices[..3], [0, 7, 14]);
        assert_eq!(indices.last(), Some(&9996));
    }

    #[test]
    fn fewer_writes_than_leaves() {
        let scenario = Scenario {
            end: 20,
            step: NonZeroUsize::new(3).unwrap(),
            ..Scenario::reference(2, 5).unwrap()
        };
        // 0, 3, ..., 18: seven distinct addresses below 25.
        assert_eq!(scenario.run(), Ok(7));
        let nested = scenario.fill().unwrap();
        assert_eq!(nested.read_at(18).unwrap(), Some(&Marker {id: 18}));
        assert_eq!(nested.read_at(19).unwrap(), None);
    }

    #[test]
    fn empty_range() {
        let scenario = Scenario {start: 10, end: 10, ..Scenario::reference(3, 3).unwrap()};
        assert_eq!(scenario.run(), Ok(0));
    }

    #[test]
    fn default() {
        let scenario = Scenario::default();
        assert_eq!(scenario.shape.sizes(), [1]);
        assert_eq!(scenario.step.get(), 7);
        assert_eq!(scenario.modulus, Modulus::LeafCount);
        assert_eq!(scenario.run(), Ok(1));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde() {
        let scenario: Scenario = serde_json::from_str(r#"{"shape": [3, 2, 3, 3], "end": 100}"#).unwrap();
        assert_eq!(scenario.shape.sizes(), [3, 2, 3, 3]);
        assert_eq!(scenario.start, 0);
        assert_eq!(scenario.end, 100);
        assert_eq!(scenario.step.get(), 7);
        let json = serde_json::to_string(&Scenario::reference_wrapped(3, 3).unwrap()).unwrap();
        let back: Scenario = serde_json::from_str(&json).unwrap();
        assert_eq!(back.modulus, Modulus::Fixed(NonZeroUsize::new(27).unwrap()));
        assert!(serde_json::from_str::<Scenario>(r#"{"shape": [3, 0]}"#).is_err());
        assert!(serde_json::from_str::<Scenario>(r#"{"shape": [3], "step": 0}"#).is_err());
    }
}
