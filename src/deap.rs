// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A double-ended priority queue implemented with a deap.

use compare::{Compare, Natural, natural};

use super::{EmptyError, Polarity};

// A deap is a binary tree whose root holds no item. The left subtree of
// the root is a min-heap, the right subtree is a max-heap, and
//
// (1) every node of the min-heap is less than or equal to its
//     corresponding node of the max-heap, i.e. the node reached by the
//     same path from the max-heap root.
//
// When the corresponding node does not exist (the max-heap may be one
// level shallower than the min-heap) its parent takes its place.
//
// Since both heaps are monotonic along any root-to-leaf path, it is enough
// to check (1) at the leaves.
//
// The empty root is not stored. Here's the layout of a deap with 12 items
// where the numbers are the offsets in the array:
//
//              ( -- )
//            /        \
//        (0)            (1)
//       /   \          /   \
//    (2)     (3)    (4)     (5)
//    / \     / \    / \
//  (6) (7) (8) (9)(10)(11)
//
// Shifting an offset by 2 gives the index of the node in the heap-ordered
// numbering of the full tree (root 1, children 2 and 3, ...). In that
// numbering, the bit below the highest set bit tells the min-heap half
// of a level from the max-heap half, and toggling it moves a node to its
// corresponding node.

/// Returns the index of the parent node. The two heap roots are their own parents.
fn parent(x: usize) -> usize { if x < 2 { x } else { (x - 2) / 2 } }

fn left_child(x: usize) -> usize { x * 2 + 2 }

fn right_child(x: usize) -> usize { x * 2 + 3 }

fn highest_one(x: usize) -> usize {
    debug_assert!(x != 0);
    1 << (usize::BITS - 1 - x.leading_zeros())
}

/// Returns `true` if the node lives in the min-heap.
fn in_min_heap(x: usize) -> bool {
    let id = x + 2;
    id & (highest_one(id) >> 1) == 0
}

/// Returns the node at the mirrored position in the other heap. It may be out of bounds.
fn correspond(x: usize) -> usize {
    let id = x + 2;
    (id ^ (highest_one(id) >> 1)) - 2
}

fn polarity(x: usize) -> Polarity {
    if in_min_heap(x) { Polarity::Min } else { Polarity::Max }
}

fn is_leaf(len: usize, x: usize) -> bool { x < len && left_child(x) >= len }

/// The corresponding node if it exists, otherwise its parent.
fn safe_correspond(len: usize, x: usize) -> usize {
    debug_assert!(x < len);
    let corr = correspond(x);
    if corr < len { corr } else { parent(corr) }
}

/// Orders two nodes of opposite heaps as `(min-heap node, max-heap node)`.
fn min_max_pair(a: usize, b: usize) -> (usize, usize) {
    if in_min_heap(a) { (a, b) } else { (b, a) }
}

/// Moves the item at `x` towards its heap's root for as long as it beats its parent.
fn pull_up<T, C: Compare<T>>(v: &mut [T], mut x: usize, cmp: &C) {
    let pol = polarity(x);
    loop {
        let p = parent(x);
        if p == x || !pol.precedes(cmp, &v[x], &v[p]) { return; }
        v.swap(x, p);
        x = p;
    }
}

/// Moves the item at `x` towards the leaves of its heap until both children
/// respect the heap order.
fn push_down<T, C: Compare<T>>(v: &mut [T], mut x: usize, cmp: &C) {
    let pol = polarity(x);
    loop {
        let mut top = x;
        for ch in [left_child(x), right_child(x)] {
            if ch < v.len() && pol.precedes(cmp, &v[ch], &v[top]) { top = ch; }
        }
        if top == x { return; }
        v.swap(x, top);
        x = top;
    }
}

/// Carries the item at the root `x` down to a leaf, promoting the better
/// child at every level (the left one on ties). Returns the leaf reached.
fn sink_to_leaf<T, C: Compare<T>>(v: &mut [T], mut x: usize, cmp: &C) -> usize {
    let pol = polarity(x);
    while !is_leaf(v.len(), x) {
        let (l, r) = (left_child(x), right_child(x));
        let ch = if r < v.len() && pol.precedes(cmp, &v[r], &v[l]) { r } else { l };
        v.swap(x, ch);
        x = ch;
    }
    x
}

/// Turns an arbitrary vector into a deap.
fn build_deap<T, C: Compare<T>>(v: &mut [T], cmp: &C) {
    let len = v.len();
    if len < 2 { return; }

    // Heapify both subtrees on their own...
    for x in (0..=parent(len - 1)).rev() {
        push_down(v, x, cmp);
    }

    // ...then repair (1) one leaf pair at a time. Swapping a crossed pair
    // and pulling both items up sorts the two root-to-leaf paths.
    for x in (0..len).rev().take_while(|&x| is_leaf(len, x)) {
        let (lo, hi) = min_max_pair(x, safe_correspond(len, x));
        while cmp.compares_gt(&v[lo], &v[hi]) {
            v.swap(lo, hi);
            pull_up(v, lo, cmp);
            pull_up(v, hi, cmp);
        }
    }
}

/// The item at leaf `x` has just been placed into an otherwise valid deap.
/// This function restores the deap properties.
fn deap_insert<T, C: Compare<T>>(v: &mut [T], x: usize, cmp: &C) {
    let len = v.len();
    debug_assert!(is_leaf(len, x));
    if x == 0 { return; }

    let (mut min_n, max_n) = min_max_pair(x, safe_correspond(len, x));

    // `x` is in the max-heap and mirrors a node with a single child. That
    // child is the leaf to compare against.
    if !is_leaf(len, min_n) && right_child(min_n) >= len {
        min_n = left_child(min_n);
    }

    if is_leaf(len, min_n) {
        if cmp.compares_le(&v[min_n], &v[max_n]) {
            pull_up(v, x, cmp);
        } else {
            v.swap(min_n, max_n);
            pull_up(v, if x == min_n { max_n } else { min_n }, cmp);
        }
    } else {
        // Both children of `min_n` mirror `x`. This happens while popping
        // the max, once the max-heap has lost a level on this path.
        debug_assert_eq!(max_n, x);
        let (l, r) = (left_child(min_n), right_child(min_n));
        if cmp.compares_le(&v[l], &v[x]) && cmp.compares_le(&v[r], &v[x]) {
            pull_up(v, x, cmp);
        } else {
            let ch = if cmp.compares_ge(&v[l], &v[r]) { l } else { r };
            v.swap(ch, x);
            pull_up(v, ch, cmp);
        }
    }
}

/// A double-ended priority queue implemented with a deap.
///
/// It is a logic error for an item to be modified in such a way that the
/// item's ordering relative to any other item, as determined by the heap's
/// comparator, changes while it is in the heap. This is normally only
/// possible through `Cell`, `RefCell`, global state, I/O, or unsafe code.
#[derive(Clone)]
pub struct Deap<T, C: Compare<T> = Natural<T>> {
    data: Vec<T>,
    cmp: C,
}

impl<T, C: Compare<T> + Default> Default for Deap<T, C> {
    #[inline]
    fn default() -> Deap<T, C> {
        Self::with_comparator(C::default())
    }
}

impl<T: Ord> Deap<T> {
    /// Returns an empty deap ordered according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use double_ended_heaps::Deap;
    ///
    /// let deap = Deap::<u32>::new();
    /// assert!(deap.is_empty());
    /// ```
    pub fn new() -> Deap<T> { Self::with_comparator(natural()) }

    /// Returns an empty deap with the given capacity and ordered according to the
    /// natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use double_ended_heaps::Deap;
    ///
    /// let deap = Deap::<u32>::with_capacity(5);
    /// assert!(deap.is_empty());
    /// assert!(deap.capacity() >= 5);
    /// ```
    pub fn with_capacity(capacity: usize) -> Deap<T> {
        Self::with_capacity_and_comparator(capacity, natural())
    }
}

impl<T: Ord> From<Vec<T>> for Deap<T> {
    /// Returns a deap containing all the items of the given vector and ordered
    /// according to the natural order of its items.
    ///
    /// # Examples
    ///
    /// ```
    /// use double_ended_heaps::Deap;
    ///
    /// let deap = Deap::from(vec![5, 1, 6, 4]);
    /// assert_eq!(deap.len(), 4);
    /// assert_eq!(deap.min_max(), Some((&1, &6)));
    /// ```
    fn from(vec: Vec<T>) -> Deap<T> {
        Self::from_vec_and_comparator(vec, natural())
    }
}

impl<T, C: Compare<T>> Deap<T, C> {
    /// Returns an empty deap ordered according to the given comparator.
    pub fn with_comparator(cmp: C) -> Deap<T, C> {
        Deap { data: vec![], cmp }
    }

    /// Returns an empty deap with the given capacity and ordered according to the given
    /// comparator.
    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Deap<T, C> {
        Deap { data: Vec::with_capacity(capacity), cmp }
    }

    /// Returns a deap containing all the items of the given vector and ordered
    /// according to the given comparator.
    ///
    /// This takes `O(n)` time.
    pub fn from_vec_and_comparator(mut vec: Vec<T>, cmp: C) -> Deap<T, C> {
        build_deap(&mut vec, &cmp);
        let deap = Deap { data: vec, cmp };
        debug_assert!(deap.is_valid());
        deap
    }

    /// Returns a reference to the smallest item in the deap.
    ///
    /// Returns `None` if the deap is empty.
    pub fn min(&self) -> Option<&T> {
        debug_assert!(self.is_valid());
        self.data.first()
    }

    /// Returns a reference to the greatest item in the deap.
    ///
    /// Returns `None` if the deap is empty.
    pub fn max(&self) -> Option<&T> {
        debug_assert!(self.is_valid());
        match self.data.len() {
            0 => None,
            1 => Some(&self.data[0]),
            _ => Some(&self.data[1]),
        }
    }

    /// Returns references to the smallest and greatest items in the deap.
    ///
    /// Returns `None` if the deap is empty.
    pub fn min_max(&self) -> Option<(&T, &T)> {
        debug_assert!(self.is_valid());
        match self.data.len() {
            0 => None,
            1 => Some((&self.data[0], &self.data[0])),
            _ => Some((&self.data[0], &self.data[1])),
        }
    }

    /// Removes the smallest item from the deap and returns it.
    ///
    /// # Errors
    ///
    /// Returns `EmptyError` if the deap was empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use double_ended_heaps::{Deap, EmptyError};
    ///
    /// let mut deap = Deap::from(vec![3, 1, 2]);
    /// assert_eq!(deap.pop_min(), Ok(1));
    /// assert_eq!(deap.pop_min(), Ok(2));
    /// assert_eq!(deap.pop_min(), Ok(3));
    /// assert_eq!(deap.pop_min(), Err(EmptyError));
    /// ```
    pub fn pop_min(&mut self) -> Result<T, EmptyError> {
        debug_assert!(self.is_valid());
        if self.data.is_empty() { return Err(EmptyError); }

        // The popped item sinks to a leaf while the smaller child is promoted
        // at every level. The last item then fills the leaf, unless the leaf
        // is the last item itself: its corresponding node stays the same, so
        // nothing can break in that case.
        let leaf = sink_to_leaf(&mut self.data, 0, &self.cmp);
        let min = self.data.swap_remove(leaf);
        if leaf < self.data.len() {
            deap_insert(&mut self.data, leaf, &self.cmp);
        }
        debug_assert!(self.is_valid());
        Ok(min)
    }

    /// Removes the greatest item from the deap and returns it.
    ///
    /// # Errors
    ///
    /// Returns `EmptyError` if the deap was empty.
    pub fn pop_max(&mut self) -> Result<T, EmptyError> {
        debug_assert!(self.is_valid());
        let max = match self.data.len() {
            0 => return Err(EmptyError),
            1 => self.data.swap_remove(0),
            _ => {
                let leaf = sink_to_leaf(&mut self.data, 1, &self.cmp);
                let max = self.data.swap_remove(leaf);
                let len = self.data.len();
                if leaf < len {
                    deap_insert(&mut self.data, leaf, &self.cmp);
                } else if is_leaf(len, parent(leaf)) {
                    // The parent took the last item and is now a leaf mirroring
                    // two min-heap nodes where it used to mirror one.
                    deap_insert(&mut self.data, parent(leaf), &self.cmp);
                }
                max
            }
        };
        debug_assert!(self.is_valid());
        Ok(max)
    }

    /// Pushes an item onto the deap.
    pub fn push(&mut self, item: T) {
        debug_assert!(self.is_valid());
        self.data.push(item);
        let last = self.data.len() - 1;
        deap_insert(&mut self.data, last, &self.cmp);
        debug_assert!(self.is_valid());
    }

    /// Checks if the deap is valid.
    ///
    /// The deap is valid if:
    ///
    /// 1. It has fewer than two items, OR
    /// 2a. Each min-heap node is less than or equal to its children, AND
    /// 2b. Each max-heap node is greater than or equal to its children, AND
    /// 2c. Each min-heap node is less than or equal to its corresponding node
    ///     (or that node's parent, if it does not exist), and vice versa.
    ///
    /// This does not modify the deap. It runs in `O(n)` time and is meant for tests.
    pub fn is_valid(&self) -> bool {
        let v = &self.data;
        let len = v.len();
        // `a` must not be beaten by `b` under the relation of `a`'s heap.
        let ordered = |a: usize, b: usize| !polarity(a).precedes(&self.cmp, &v[b], &v[a]);

        len < 2 || (0..len).all(|x| {
            [left_child(x), right_child(x)].iter().all(|&ch| ch >= len || ordered(x, ch)) && // 2a, 2b
            ordered(x, safe_correspond(len, x))                                                // 2c
        })
    }
}

impl_vec_backed_heap!(Deap);

#[cfg(test)]
mod test {
    use compare::{Compare, natural};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::{Deap, correspond, in_min_heap, left_child, parent, right_child};
    use crate::EmptyError;

    const SEEDS: [u64; 4] = [1429, 19085, 0xdeab, 7];

    fn random_deap(rng: &mut StdRng, size: usize) -> Deap<i32> {
        let mut deap = Deap::new();
        for _ in 0..size {
            deap.push(rng.gen_range(0..10));
            assert!(deap.is_valid());
        }
        deap
    }

    #[test]
    fn test_parent() {
        assert_eq!(parent(0), 0);
        assert_eq!(parent(1), 1);
        assert_eq!(parent(2), 0);
        assert_eq!(parent(3), 0);
        assert_eq!(parent(4), 1);
        assert_eq!(parent(5), 1);
        assert_eq!(parent(6), 2);
        assert_eq!(parent(7), 2);
        assert_eq!(parent(12), 5);
        assert_eq!(parent(13), 5);
    }

    #[test]
    fn test_children() {
        let expected = [(0, 2, 3), (1, 4, 5), (2, 6, 7), (3, 8, 9), (4, 10, 11), (5, 12, 13)];
        for &(x, l, r) in &expected {
            assert_eq!(left_child(x), l);
            assert_eq!(right_child(x), r);
            assert_eq!(parent(l), x);
            assert_eq!(parent(r), x);
        }
    }

    #[test]
    fn test_in_min_heap() {
        fn check(x: usize, expected: bool) {
            if x > 100_000 { return; }
            assert_eq!(in_min_heap(x), expected, "node {}", x);
            check(left_child(x), expected);
            check(right_child(x), expected);
        }
        check(0, true);
        check(1, false);
    }

    #[test]
    fn test_correspond() {
        // Walking the same path down from both roots must land on mirrored nodes.
        fn check(l: usize, r: usize) {
            if r > 100_000 { return; }
            assert_eq!(correspond(l), r);
            assert_eq!(correspond(r), l);
            check(left_child(l), left_child(r));
            check(right_child(l), right_child(r));
        }
        check(0, 1);
    }

    /// Wraps `data` as-is, without building.
    fn from_raw(data: Vec<i32>) -> Deap<i32> {
        Deap { data, cmp: natural() }
    }

    #[test]
    fn test_is_valid() {
        let new = from_raw;
        assert!(new(vec![]).is_valid());
        assert!(new(vec![1]).is_valid());
        assert!(new(vec![1, 1]).is_valid());
        assert!(new(vec![1, 5]).is_valid());
        assert!(new(vec![1, 5, 2]).is_valid());
        assert!(new(vec![1, 5, 2, 3]).is_valid());
        assert!(new(vec![1, 5, 2, 3, 4]).is_valid());
        assert!(new(vec![1, 5, 2, 3, 4, 5]).is_valid());

        assert!(!new(vec![2, 1]).is_valid());          // crossed roots
        assert!(!new(vec![1, 5, 0]).is_valid());       // min-heap order
        assert!(!new(vec![3, 5, 2, 4]).is_valid());    // min-heap order
        assert!(!new(vec![1, 5, 2, 3, 6]).is_valid()); // max-heap order
        assert!(!new(vec![1, 5, 2, 6]).is_valid());    // leaf above the max-heap root
        assert!(!new(vec![1, 5, 4, 3, 2]).is_valid()); // crossed leaves
    }

    #[test]
    fn test_build_empty() {
        let deap = Deap::<i32>::from(vec![]);
        assert!(deap.is_valid());
        assert_eq!(deap.min_max(), None);
    }

    #[test]
    fn test_from_vec() {
        let deap = Deap::from(vec![2]);
        assert_eq!(deap.min_max(), Some((&2, &2)));

        let deap = Deap::from(vec![2, 1]);
        assert_eq!(deap.min_max(), Some((&1, &2)));

        let deap = Deap::from(vec![2, 1, 3]);
        assert_eq!(deap.min_max(), Some((&1, &3)));

        let deap = Deap::from(vec![9, 1, 6, 3, 3, 8, 0, 7]);
        assert_eq!(deap.min_max(), Some((&0, &9)));
    }

    #[test]
    fn fuzz_build() {
        for &seed in &SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut values = Vec::with_capacity(100);
            for _ in 0..100 {
                values.push(rng.gen_range(0..10));
                let deap = Deap::from(values.clone());
                assert!(deap.is_valid(), "seed {} built from {:?} into {:?}", seed, values, deap);
                assert_eq!(deap.len(), values.len());
            }
        }
    }

    #[test]
    fn fuzz_build_then_pop() {
        for &seed in &SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let values: Vec<i32> = (0..100).map(|_| rng.gen_range(0..10)).collect();
            let mut deap = Deap::from(values);
            assert!(deap.is_valid());
            while !deap.is_empty() {
                if rng.gen() { deap.pop_min().unwrap(); } else { deap.pop_max().unwrap(); }
                assert!(deap.is_valid(), "seed {}: {:?}", seed, deap);
            }
        }
    }

    #[test]
    fn fuzz_push() {
        for &seed in &SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let deap = random_deap(&mut rng, 100);
            assert_eq!(deap.len(), 100);
        }
    }

    #[test]
    fn fuzz_pop_min() {
        for &seed in &SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut deap = random_deap(&mut rng, 100);
            let mut last = i32::MIN;
            while let Ok(x) = deap.pop_min() {
                assert!(x >= last);
                assert!(deap.is_valid(), "seed {}: {:?}", seed, deap);
                last = x;
            }
        }
    }

    #[test]
    fn fuzz_pop_max() {
        for &seed in &SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut deap = random_deap(&mut rng, 100);
            let mut last = i32::MAX;
            while let Ok(x) = deap.pop_max() {
                assert!(x <= last);
                assert!(deap.is_valid(), "seed {}: {:?}", seed, deap);
                last = x;
            }
        }
    }

    #[test]
    fn fuzz_pop_interleaved() {
        for &seed in &SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut deap = random_deap(&mut rng, 100);
            let (mut min, mut max) = (i32::MIN, i32::MAX);
            while !deap.is_empty() {
                if rng.gen() {
                    let x = deap.pop_min().unwrap();
                    assert!(min <= x && x <= max);
                    min = x;
                } else {
                    let x = deap.pop_max().unwrap();
                    assert!(min <= x && x <= max);
                    max = x;
                }
                assert!(deap.is_valid(), "seed {}: {:?}", seed, deap);
            }
        }
    }

    #[test]
    fn test_insert_descends_to_single_child() {
        // The max root's partner 0 has a single child, which is the leaf to
        // compare against.
        let mut deap = from_raw(vec![4, 9, 7, 6]);
        assert!(deap.is_valid());
        assert_eq!(deap.pop_max(), Ok(9));
        assert_eq!(deap.data, [4, 7, 6]);
        assert!(deap.is_valid());

        let mut deap = from_raw(vec![0, 3, 1, 1]);
        assert!(deap.is_valid());
        assert_eq!(deap.pop_max(), Ok(3));
        assert_eq!(deap.data, [0, 1, 1]);
        assert!(deap.is_valid());
    }

    #[test]
    fn test_insert_against_two_mirrored_leaves() {
        // The hole at 4 mirrors both children of 2, and the larger one moves up.
        let mut deap = from_raw(vec![1, 8, 3, 3, 6, 4, 5, 3, 4]);
        assert!(deap.is_valid());
        assert_eq!(deap.pop_max(), Ok(8));
        assert_eq!(deap.data, [1, 6, 3, 3, 5, 4, 4, 3]);
        assert!(deap.is_valid());

        // The max root mirrors both 2 and 3 and already dominates them.
        let mut deap = from_raw(vec![0, 5, 1, 1, 3]);
        assert!(deap.is_valid());
        assert_eq!(deap.pop_max(), Ok(5));
        assert_eq!(deap.data, [0, 3, 1, 1]);
        assert!(deap.is_valid());
    }

    #[test]
    fn test_pop_max_reinserts_parent() {
        // Sinking the max into the last slot leaves node 1 a leaf smaller than node 3.
        assert!(!from_raw(vec![1, 1, 1, 2]).is_valid());

        let mut deap = from_raw(vec![1, 8, 1, 2, 1]);
        assert!(deap.is_valid());
        assert_eq!(deap.pop_max(), Ok(8));
        assert_eq!(deap.data, [1, 2, 1, 1]);
        assert!(deap.is_valid());
    }

    #[test]
    fn test_pop_empty() {
        let mut deap = Deap::<i32>::new();
        assert_eq!(deap.pop_min(), Err(EmptyError));
        assert_eq!(deap.pop_max(), Err(EmptyError));
        assert!(deap.is_valid());
    }

    #[test]
    fn test_single_item() {
        let mut deap = Deap::from(vec![7]);
        assert_eq!(deap.pop_max(), Ok(7));
        assert_eq!(deap.pop_min(), Err(EmptyError));

        let mut deap = Deap::from(vec![7]);
        assert_eq!(deap.pop_min(), Ok(7));
        assert_eq!(deap.pop_max(), Err(EmptyError));
    }

    #[test]
    fn test_two_items() {
        let mut deap = Deap::from(vec![4, 2]);
        assert_eq!(deap.pop_min(), Ok(2));
        assert_eq!(deap.pop_max(), Ok(4));
        assert!(deap.is_empty());

        let mut deap = Deap::from(vec![2, 4]);
        assert_eq!(deap.pop_max(), Ok(4));
        assert_eq!(deap.pop_min(), Ok(2));
        assert!(deap.is_empty());
    }

    #[test]
    fn test_into_sorted_vec() {
        let deap: Deap<i32> = vec![5, 3, 9, 1, 1, 7, 0, 4].into_iter().collect();
        assert_eq!(deap.into_sorted_vec(), vec![0, 1, 1, 3, 4, 5, 7, 9]);
    }

    #[test]
    fn test_extend() {
        let mut deap = Deap::from(vec![5]);
        deap.extend(&[3, 8]);
        deap.extend(vec![1, 9]);
        assert_eq!(deap.len(), 5);
        assert_eq!(deap.min_max(), Some((&1, &9)));
    }

    #[test]
    fn test_drain_and_clear() {
        let mut deap = Deap::from(vec![4, 1, 3]);
        let mut drained: Vec<_> = deap.drain().collect();
        drained.sort();
        assert_eq!(drained, vec![1, 3, 4]);
        assert!(deap.is_empty());

        deap.push(2);
        deap.clear();
        assert_eq!(deap.min(), None);
        assert_eq!(deap.max(), None);
    }

    #[test]
    fn test_reversed_comparator() {
        let mut deap = Deap::with_comparator(natural::<i32>().rev());
        for x in [3, 1, 4, 1, 5, 9, 2, 6] {
            deap.push(x);
        }
        assert_eq!(deap.pop_min(), Ok(9));
        assert_eq!(deap.pop_max(), Ok(1));
        assert_eq!(deap.pop_max(), Ok(1));
        assert_eq!(deap.pop_min(), Ok(6));
    }

    #[test]
    fn test_closure_comparator() {
        let by_abs = |a: &i32, b: &i32| a.abs().cmp(&b.abs());
        assert!(by_abs.compares_lt(&1, &-2));
        let mut deap = Deap::from_vec_and_comparator(vec![-3, 1, -4, 2], by_abs);
        assert_eq!(deap.pop_max(), Ok(-4));
        assert_eq!(deap.pop_min(), Ok(1));
        assert_eq!(deap.pop_max(), Ok(-3));
        assert_eq!(deap.pop_min(), Ok(2));
    }

    #[test]
    fn test_debug() {
        let deap = Deap::from(vec![2, 1]);
        assert_eq!(format!("{:?}", deap), "[1, 2]");
    }
}
