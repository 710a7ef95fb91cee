use std::slice::{Iter};

use super::{Nested, Node};

impl<T> Nested<T> {
    /// Iterates over every leaf slot, depth first.
    ///
    /// The order is lexicographic in the coordinate path, outermost index
    /// first. This is not flat-address order, which varies the outermost
    /// index fastest, but both orders start with the all-zeros path and end
    /// with the all-maximum path.
    pub fn leaves(&self) -> Leaves<'_, T> { Leaves::new(self.root()) }

    /// Returns the number of leaf slots that are not empty.
    ///
    /// The result is in `0..=self.shape().len()`.
    ///
    /// ```
    /// use jagged::{Nested, Marker};
    /// let mut n: Nested<Marker> = Nested::build([3, 5, 3]).unwrap();
    /// for raw in (0..10000).step_by(7) { n.write_at(raw).unwrap(); }
    /// assert_eq!(n.count_populated(), 45);
    /// ```
    pub fn count_populated(&self) -> usize {
        self.leaves().filter(|slot| slot.is_some()).count()
    }

    /// Calls `f` with the coordinate path and value of every non-empty slot,
    /// depth first.
    pub fn for_each_populated(&self, mut f: impl FnMut(&[usize], &T)) {
        fn walk<T>(node: &Node<T>, path: &mut Vec<usize>, f: &mut impl FnMut(&[usize], &T)) {
            match node {
                Node::Leaves(slots) => {
                    for (i, slot) in slots.iter().enumerate() {
                        if let Some(t) = slot {
                            path.push(i);
                            f(&path[..], t);
                            path.pop();
                        }
                    }
                },
                Node::Branches(kids) => {
                    for (i, kid) in kids.iter().enumerate() {
                        path.push(i);
                        walk(kid, path, f);
                        path.pop();
                    }
                },
            }
        }
        let mut path = Vec::with_capacity(self.shape().rank());
        walk(self.root(), &mut path, &mut f);
    }
}

// ----------------------------------------------------------------------------

/// The return type of [`Nested::leaves()`].
#[derive(Debug, Clone)]
pub struct Leaves<'a, T> {
    /// Unvisited siblings at each level above the current leaf array.
    branches: Vec<Iter<'a, Node<T>>>,
    /// Unvisited slots of the current leaf array.
    slots: Iter<'a, Option<T>>,
}

impl<'a, T> Leaves<'a, T> {
    fn new(root: &'a Node<T>) -> Self {
        match root {
            Node::Leaves(slots) => Self {branches: Vec::new(), slots: slots.iter()},
            Node::Branches(kids) => Self {branches: vec![kids.iter()], slots: <&[Option<T>]>::default().iter()},
        }
    }
}

impl<'a, T> Iterator for Leaves<'a, T> {
    type Item = &'a Option<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(slot) = self.slots.next() { return Some(slot); }
            let siblings = self.branches.last_mut()?;
            match siblings.next() {
                Some(Node::Leaves(slots)) => { self.slots = slots.iter(); },
                Some(Node::Branches(kids)) => { self.branches.push(kids.iter()); },
                None => { self.branches.pop(); },
            }
        }
    }
}

// ----------------------------------------------------------------------------
