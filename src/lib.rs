// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Double-ended priority queues backed by implicit binary trees.
//!
//! Two independent structures are provided, both able to hand out the smallest and the
//! greatest item of a multiset:
//!
//! * [`Deap`] keeps a min-heap and a max-heap side by side under an unstored root, with
//!   corresponding nodes of the two heaps kept in order.
//! * [`MinMaxHeap`] keeps a single tree whose levels alternate between min levels and max
//!   levels.
//!
//! Both store their items packed in a `Vec` and derive the tree shape from index arithmetic
//! alone. Insertion and popping either end are `O(log n)`, building from a vector is `O(n)`
//! and peeking at either end is `O(1)`.
//!
//! Like [`BinaryHeap`][bh], both heaps order their items naturally by default and accept
//! custom comparators from the [`compare`] crate.
//!
//! ```
//! use double_ended_heaps::{Deap, EmptyError, MinMaxHeap};
//!
//! let mut deap = Deap::from(vec![4, 8, 1, 6]);
//! assert_eq!(deap.pop_min(), Ok(1));
//! assert_eq!(deap.pop_max(), Ok(8));
//!
//! let mut heap: MinMaxHeap<u32> = MinMaxHeap::new();
//! assert_eq!(heap.pop_max(), Err(EmptyError));
//! ```
//!
//! [bh]: https://doc.rust-lang.org/stable/std/collections/struct.BinaryHeap.html

use std::error::Error;
use std::fmt;
use std::slice;
use std::vec;

use compare::Compare;

pub use deap::Deap;
pub use min_max::MinMaxHeap;

#[macro_use]
mod macros;

pub mod deap;
pub mod min_max;

/// The error returned when popping from a heap that holds no items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmptyError;

impl fmt::Display for EmptyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("heap is empty")
    }
}

impl Error for EmptyError {}

/// The ordering relation a sift works with.
///
/// A `Min` node must not be greater than the nodes below it, a `Max` node must not be less.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Polarity {
    Min,
    Max,
}

impl Polarity {
    /// Returns `true` if `a` belongs strictly above `b` under this relation.
    #[inline]
    pub(crate) fn precedes<T, C: Compare<T>>(self, cmp: &C, a: &T, b: &T) -> bool {
        match self {
            Polarity::Min => cmp.compares_lt(a, b),
            Polarity::Max => cmp.compares_gt(a, b),
        }
    }
}

/// An iterator over the items of a heap in arbitrary order.
///
/// Acquire through [`Deap::iter`] or [`MinMaxHeap::iter`].
pub struct Iter<'a, T: 'a>(slice::Iter<'a, T>);

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> { Iter(self.0.clone()) }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    #[inline] fn next(&mut self) -> Option<&'a T> { self.0.next() }
    #[inline] fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> { self.0.next_back() }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

/// A consuming iterator over the items of a heap in arbitrary order.
pub struct IntoIter<T>(vec::IntoIter<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

/// An iterator that drains a heap in arbitrary order.
///
/// Acquire through [`Deap::drain`] or [`MinMaxHeap::drain`].
pub struct Drain<'a, T: 'a>(vec::Drain<'a, T>);

impl<'a, T: 'a> Iterator for Drain<'a, T> {
    type Item = T;
    fn next(&mut self) -> Option<T> { self.0.next() }
    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a, T: 'a> DoubleEndedIterator for Drain<'a, T> {
    fn next_back(&mut self) -> Option<T> { self.0.next_back() }
}

impl<'a, T: 'a> ExactSizeIterator for Drain<'a, T> {}
