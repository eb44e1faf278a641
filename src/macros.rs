// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Generates the parts of a heap's API that only touch its `data` vector.
///
/// The heap type must be a struct `$heap<T, C: Compare<T>> { data: Vec<T>, cmp: C }`
/// with inherent `pop_min` and `is_valid` methods.
macro_rules! impl_vec_backed_heap {
    ($heap:ident) => {
        impl<T, C: ::compare::Compare<T>> $heap<T, C> {
            /// Returns an iterator visiting all items in the heap in arbitrary order.
            pub fn iter(&self) -> $crate::Iter<'_, T> {
                debug_assert!(self.is_valid());
                $crate::Iter(self.data.iter())
            }

            /// Returns the number of items the heap can hold without reallocation.
            pub fn capacity(&self) -> usize {
                self.data.capacity()
            }

            /// Reserves the minimum capacity for exactly `additional` more items to be inserted
            /// into the heap.
            ///
            /// Does nothing if the capacity is already sufficient.
            pub fn reserve_exact(&mut self, additional: usize) {
                self.data.reserve_exact(additional);
            }

            /// Reserves capacity for at least `additional` more items to be inserted into the heap.
            pub fn reserve(&mut self, additional: usize) {
                self.data.reserve(additional);
            }

            /// Discards as much additional capacity from the heap as possible.
            pub fn shrink_to_fit(&mut self) {
                self.data.shrink_to_fit()
            }

            /// Consumes the heap and returns its items as a vector in arbitrary order.
            pub fn into_vec(self) -> Vec<T> { self.data }

            /// Consumes the heap and returns its items as a vector in sorted (ascending) order.
            pub fn into_sorted_vec(mut self) -> Vec<T> {
                let mut sorted = Vec::with_capacity(self.data.len());
                while let Ok(item) = self.pop_min() {
                    sorted.push(item);
                }
                sorted
            }

            /// Returns the number of items in the heap.
            pub fn len(&self) -> usize {
                self.data.len()
            }

            /// Returns `true` if the heap contains no items.
            pub fn is_empty(&self) -> bool {
                self.data.is_empty()
            }

            /// Removes all items from the heap.
            pub fn clear(&mut self) {
                self.data.clear();
            }

            /// Clears the heap, returning an iterator over the removed items in arbitrary order.
            pub fn drain(&mut self) -> $crate::Drain<'_, T> {
                $crate::Drain(self.data.drain(..))
            }
        }

        impl<T: ::std::fmt::Debug, C: ::compare::Compare<T>> ::std::fmt::Debug for $heap<T, C> {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_list().entries(self).finish()
            }
        }

        impl<T, C: ::compare::Compare<T> + Default> ::std::iter::FromIterator<T> for $heap<T, C> {
            fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> $heap<T, C> {
                $heap::from_vec_and_comparator(iter.into_iter().collect(), C::default())
            }
        }

        impl<T, C: ::compare::Compare<T>> Extend<T> for $heap<T, C> {
            fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
                let iter = iter.into_iter();
                let (lower, _) = iter.size_hint();
                self.reserve(lower);
                for elem in iter {
                    self.push(elem);
                }
            }
        }

        impl<'a, T: 'a + Copy, C: ::compare::Compare<T>> Extend<&'a T> for $heap<T, C> {
            fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
                self.extend(iter.into_iter().copied());
            }
        }

        impl<T, C: ::compare::Compare<T>> IntoIterator for $heap<T, C> {
            type Item = T;
            type IntoIter = $crate::IntoIter<T>;
            fn into_iter(self) -> $crate::IntoIter<T> { $crate::IntoIter(self.data.into_iter()) }
        }

        impl<'a, T, C: ::compare::Compare<T>> IntoIterator for &'a $heap<T, C> {
            type Item = &'a T;
            type IntoIter = $crate::Iter<'a, T>;
            fn into_iter(self) -> $crate::Iter<'a, T> { self.iter() }
        }
    };
}
