//! A pure-Rust library for addressing the leaves of irregular nested arrays
//! with a single flat index.
//!
//! [`Nested<T>`] is a tree of fixed depth whose levels are arrays. Every array
//! at a given level has the same length, but different levels may have
//! different lengths; the list of lengths is a [`Shape`]. The innermost
//! arrays hold leaf slots, each of which is empty or holds a `T`.
//!
//! The leaves can be addressed by a coordinate path (one index per level) or
//! by a flat address in `0..shape.len()`. The two are related by a
//! mixed-radix decomposition in which the index into the root array is the
//! least significant digit; see [`Shape::from_usize()`]. [`Nested::write_at()`]
//! performs the decomposition on the fly: it reduces a raw index modulo the
//! leaf count and then descends from the root, taking the remainder modulo
//! the length of each array it visits. It never needs to know the depth in
//! advance, because each [`Node`] says whether it holds leaves or further
//! arrays. Any raw index is valid; large ones simply wrap around and overwrite
//! earlier writes.
//!
//! [`Nested::count_populated()`] walks the whole tree and counts the
//! non-empty leaves. [`Scenario`] packages the usual experiment: write at
//! every seventh raw index below 10000, then count.
//!
//! ```
//! use jagged::{Nested, Marker, Scenario};
//!
//! let mut n: Nested<Marker> = Nested::build([3, 2, 3, 3]).unwrap();
//! for raw in (0..10000).step_by(7) { n.write_at(raw).unwrap(); }
//! assert_eq!(n.count_populated(), 54);
//!
//! assert_eq!(Scenario::reference(4, 3).unwrap().run().unwrap(), 54);
//! ```

mod error;
pub use error::{Error, Mismatch, Result};

mod shape;
pub use shape::{Shape};

mod index;
pub use index::{Path};

mod node;
pub use node::{Node};

mod nested;
pub use nested::{Nested};

mod address;
pub use address::{Marker};

mod traverse;
pub use traverse::{Leaves};

pub mod scenario;
pub use scenario::{Scenario, Modulus, benchmark};

#[cfg(test)]
mod proptests;
