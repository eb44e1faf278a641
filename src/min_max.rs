// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A double-ended priority queue implemented with a min-max heap.

use std::cmp::Ordering;

use compare::{Compare, Natural, natural};

use super::{EmptyError, Polarity};

// A min-max heap is a complete binary tree whose levels alternate between
// min levels and max levels, starting with a min level at the root:
//
// (1) A node on a min level is less than or equal to every node below it.
// (2) A node on a max level is greater than or equal to every node below it.
//
// So the min item is the root and the max item is one of its children.
// The nodes are stored in the usual binary heap order:
//
//              (0)              min
//            /     \
//         (1)       (2)         max
//        /   \     /   \
//      (3)   (4) (5)   (6)      min

fn parent(x: usize) -> usize { if x == 0 { 0 } else { (x - 1) / 2 } }

fn left_child(x: usize) -> usize { x * 2 + 1 }

fn right_child(x: usize) -> usize { x * 2 + 2 }

/// Returns `true` if the node lies on a min level.
fn is_min_level(x: usize) -> bool {
    // Nodes `2^k - 1 .. 2^(k+1) - 1` form level `k`.
    let id = x + 1;
    let mut highest_one = 1;
    let mut min = true;
    while id - highest_one >= highest_one {
        highest_one <<= 1;
        min = !min;
    }
    min
}

fn polarity(x: usize) -> Polarity {
    if is_min_level(x) { Polarity::Min } else { Polarity::Max }
}

/// Restores the order of the subtree rooted at `root`, given that the
/// subtrees of its children are valid.
fn push_down<T, C: Compare<T>>(v: &mut [T], mut root: usize, cmp: &C) {
    let pol = polarity(root);
    while root < v.len() {
        let (l, r) = (left_child(root), right_child(root));

        // Grandchildren beat everything below them, so two levels are enough.
        let mut m = root;
        for x in [l, r, left_child(l), right_child(l), left_child(r), right_child(r)] {
            if x < v.len() && pol.precedes(cmp, &v[x], &v[m]) { m = x; }
        }
        if m == root { return; }

        v.swap(root, m);
        let p = parent(m);
        if p == root { return; } // a child has no descendants to disturb

        // The item that came down into the grandchild may not belong under
        // the grandchild's parent, which has the opposite relation.
        if pol.precedes(cmp, &v[p], &v[m]) { v.swap(p, m); }
        root = m;
    }
}

/// The first `v.len() - 1` items are considered a valid min-max heap
/// and the last item is to be inserted.
fn min_max_push<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    debug_assert!(!v.is_empty());
    let mut x = v.len() - 1;
    let p = parent(x);

    match cmp.compare(&v[x], &v[p]) {
        // Nothing above can be beaten by an item equal to its parent.
        Ordering::Equal => {}
        // Smaller than every max node on the path: bubble through the min nodes.
        Ordering::Less => {
            let mut above = if is_min_level(x) { parent(p) } else { p };
            while x != 0 && cmp.compares_lt(&v[x], &v[above]) {
                v.swap(x, above);
                x = above;
                above = parent(parent(above));
            }
        }
        // Greater than every min node on the path: bubble through the max nodes.
        Ordering::Greater => {
            let mut above = if is_min_level(x) { p } else { parent(p) };
            while x > 2 && cmp.compares_gt(&v[x], &v[above]) {
                v.swap(x, above);
                x = above;
                above = parent(parent(above));
            }
        }
    }
}

/// A double-ended priority queue implemented with a min-max heap.
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by the heap's
/// comparator, changes while it is in the heap. This is normally only
/// possible through `Cell`, `RefCell`, global state, I/O, or unsafe code.
#[derive(Clone)]
pub struct MinMaxHeap<T, C: Compare<T> = Natural<T>> {
    data: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T> + Default> Default for MinMaxHeap<T, C> {
    #[inline]
    fn default() -> MinMaxHeap<T, C> {
        Self::with_comparator(C::default())
    }
}

impl<T: Ord> MinMaxHeap<T> {
    /// Returns an empty heap ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use double_ended_heaps::MinMaxHeap;
    ///
    /// let heap = MinMaxHeap::<u32>::new();
    /// assert!(heap.is_empty());
    /// ```
    pub fn new() -> MinMaxHeap<T> { Self::with_comparator(natural()) }

    /// Returns an empty heap with the given capacity and ordered according to the
    /// natural order of its items.
    pub fn with_capacity(capacity: usize) -> MinMaxHeap<T> {
        Self::with_capacity_and_comparator(capacity, natural())
    }
}

impl<T: Ord> From<Vec<T>> for MinMaxHeap<T> {
    /// Returns a heap containing all the items of the given vector and ordered
    /// according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use double_ended_heaps::MinMaxHeap;
    ///
    /// let heap = MinMaxHeap::from(vec![9, 1, 6, 3, 3, 8]);
    /// assert_eq!(heap.len(), 6);
    /// assert_eq!(heap.min_max(), Some((&1, &9)));
    /// ```
    fn from(vec: Vec<T>) -> MinMaxHeap<T> {
        Self::from_vec_and_comparator(vec, natural())
    }
}

impl<T, C: Compare<T>> MinMaxHeap<T, C> {
    /// Returns an empty heap ordered according to the given comparator.
    pub fn with_comparator(cmp: C) -> MinMaxHeap<T, C> {
        MinMaxHeap { data: vec![], cmp }
    }

    /// Returns an empty heap with the given capacity and ordered according to the given
    /// comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> MinMaxHeap<T, C> {
        MinMaxHeap { data: Vec::with_capacity(capacity), cmp }
    }

    /// Returns a heap containing all the items of the given vector and ordered
    /// according to the given comparator.
    ///
    /// This takes `O(n)` time.
    pub fn from_vec_and_comparator(mut vec: Vec<T>, cmp: C) -> MinMaxHeap<T, C> {
        if !vec.is_empty() {
            for x in (0..=parent(vec.len() - 1)).rev() {
                push_down(&mut vec, x, &cmp);
            }
        }
        let heap = MinMaxHeap { data: vec, cmp };
        debug_assert!(heap.is_valid());
        heap
    }

    /// Index of the greatest item, if any.
    fn max_index(&self) -> Option<usize> {
        match self.data.len() {
            0 => None,
            1 => Some(0),
            2 => Some(1),
            _ if self.cmp.compares_gt(&self.data[1], &self.data[2]) => Some(1),
            _ => Some(2),
        }
    }

    /// Returns a reference to the smallest item in the heap.
    ///
    /// Returns `None` if the heap is empty.
    pub fn min(&self) -> Option<&T> {
        debug_assert!(self.is_valid());
        self.data.first()
    }

    /// Returns a reference to the greatest item in the heap.
    ///
    /// Returns `None` if the heap is empty.
    pub fn max(&self) -> Option<&T> {
        debug_assert!(self.is_valid());
        self.max_index().map(|x| &self.data[x])
    }

    /// Returns references to the smallest and greatest items in the heap.
    ///
    /// Returns `None` if the heap is empty.
    pub fn min_max(&self) -> Option<(&T, &T)> {
        debug_assert!(self.is_valid());
        self.max_index().map(|x| (&self.data[0], &self.data[x]))
    }

    ///
    /// # Errors
    ///
    /// Returns `EmptyError` if the heap was empty.
    pub fn pop_min(&mut self) -> Result<T, EmptyError> {
        debug_assert!(self.is_valid());
        if self.data.is_empty() { return Err(EmptyError); }
        let min = self.data.swap_remove(0);
        push_down(&mut self.data, 0, &self.cmp);
        debug_assert!(self.is_valid());
        Ok(min)
    }

    /// Removes the greatest item from the heap and returns it.
    ///
    /// # Errors
    ///
    /// Returns `EmptyError` if the heap was empty.
    pub fn pop_max(&mut self) -> Result<T, EmptyError> {
        debug_assert!(self.is_valid());
        let max = match self.max_index() {
            None => return Err(EmptyError),
            Some(x) => {
                let max = self.data.swap_remove(x);
                push_down(&mut self.data, x, &self.cmp);
                max
            }
        };
        debug_assert!(self.is_valid());
        Ok(max)
    }

    /// Pushes an item onto the heap.
    pub fn push(&mut self, item: T) {
        debug_assert!(self.is_valid());
        self.data.push(item);
        min_max_push(&mut self.data, &self.cmp);
        debug_assert!(self.is_valid());
    }

    ///
    /// The heap is valid if every node respects the relation of its parent's
    /// level and of its grandparent's level. By transitivity this makes every
    /// min node less than or equal to, and every max node greater than or
    /// equal to, its whole subtree.
    ///
    /// This does not modify the heap. It runs in `O(n)` time and is meant for tests.
    pub fn is_valid(&self) -> bool {
        let v = &self.data;
        // `x` must not beat its ancestor `a` under the relation of `a`'s level.
        let ordered = |a: usize, x: usize| !polarity(a).precedes(&self.cmp, &v[x], &v[a]);

        (1..v.len()).all(|x| {
            let p = parent(x);
            ordered(p, x) && (p == 0 || ordered(parent(p), x))
        })
    }
}

impl_vec_backed_heap!(MinMaxHeap);
