#![cfg_attr(not(any(feature = "std", test)), no_std)]
// documentation controls
#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]

//! A priority queue that sorts according to a specified comparator rather than
//! the [`Ord`] trait.
//!
//! The standard library's [`BinaryHeap`][std] orders its elements with their
//! [`Ord`] implementation, which is fixed at the definition of the element
//! type.  Frequently one instead wants to choose the order at the call site:
//! sorting the same records by different keys, reversing an order, or
//! composing an order from configuration.  The usual workaround is a newtype
//! wrapper per ordering, which becomes unwieldy fast.
//!
//! This crate's [`BinaryHeap`] instead stores a [`TotalOrder`] value alongside
//! its elements, supplied at construction time, and performs every comparison
//! through it.  The heap is a **min**-heap: [`Ordering::Less`] means "sorts
//! earlier", so [`pop`] returns the least element under the supplied order.
//!
//! [std]: https://doc.rust-lang.org/std/collections/struct.BinaryHeap.html
//! [`pop`]: BinaryHeap::pop
//! [`Ordering::Less`]: core::cmp::Ordering::Less
//!
//! # Examples
//!
//! ```
//! use sift::{total_order_fn, BinaryHeap};
//!
//! // A min-heap under the natural order of its elements.
//! let mut heap: BinaryHeap<i32> = BinaryHeap::default();
//! heap.push(5);
//! heap.push(3);
//! heap.push(8);
//! heap.push(1);
//!
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.pop(), Ok(5));
//! assert_eq!(heap.pop(), Ok(8));
//! assert!(heap.pop().is_err());
//!
//! // The same elements under a caller-supplied comparator.
//! let mut heap = BinaryHeap::new(total_order_fn(|a: &i32, b: &i32| b.cmp(a)));
//! heap.extend([5, 3, 8, 1]);
//! assert_eq!(heap.into_sorted_vec(), [8, 5, 3, 1]);
//! ```

extern crate alloc;

pub mod binary_heap;
pub mod default;

pub use binary_heap::{BinaryHeap, EmptyQueue};
pub use default::OrdTotalOrder;

use core::cmp::Ordering;
use core::marker::PhantomData;

/// A total order over values of the [`OrderedType`], injected into a
/// collection at construction time and fixed for the collection's lifetime.
///
/// [`cmp`] must implement a trichotomous total order: for any `a` and `b`
/// exactly one of `a < b`, `a == b` or `a > b` holds, and the order must be
/// transitive.  [`Ordering::Less`] means that the first operand sorts strictly
/// earlier than (has strictly higher priority than) the second.
///
/// It is a logic error for an order to be inconsistent with itself across
/// calls while any collection parameterized with it contains elements.
///
/// [`OrderedType`]: Self::OrderedType
/// [`cmp`]: Self::cmp
pub trait TotalOrder {
    /// The type over which this total order is defined.
    type OrderedType: ?Sized;

    /// Compares two values, returning [`Ordering::Less`] when `this` sorts
    /// strictly earlier than `that`, [`Ordering::Greater`] when it sorts
    /// strictly later, and [`Ordering::Equal`] otherwise.
    fn cmp(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> Ordering;

    /// Tests whether `this` and `that` are equal under this total order.
    fn eq(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_eq()
    }
    /// Tests whether `this` and `that` are unequal under this total order.
    fn ne(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_ne()
    }

    /// Tests whether `this` sorts no earlier than `that` under this total order.
    fn ge(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_ge()
    }
    /// Tests whether `this` sorts strictly later than `that` under this total order.
    fn gt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_gt()
    }
    /// Tests whether `this` sorts no later than `that` under this total order.
    fn le(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_le()
    }
    /// Tests whether `this` sorts strictly earlier than `that` under this total order.
    fn lt(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> bool {
        self.cmp(this, that).is_lt()
    }
}

/// A [`TotalOrder`] that inverts another.
///
/// Wrapping the order rather than the elements (contrast with
/// [`core::cmp::Reverse`]) leaves the element type untouched, so the same
/// heap element type can be queued under either direction.
///
/// # Examples
///
/// ```
/// use sift::{BinaryHeap, OrdTotalOrder, Reversed};
///
/// let mut heap = BinaryHeap::new(Reversed(OrdTotalOrder::default()));
/// heap.extend([1, 5, 2]);
/// assert_eq!(heap.pop(), Ok(5));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Reversed<O: ?Sized>(pub O);

impl<O: TotalOrder> TotalOrder for Reversed<O> {
    type OrderedType = O::OrderedType;

    fn cmp(&self, this: &Self::OrderedType, that: &Self::OrderedType) -> Ordering {
        self.0.cmp(that, this)
    }
}

/// A [`TotalOrder`] defined by a comparator function.
///
/// Construct with [`total_order_fn`].
pub struct FnTotalOrder<T: ?Sized, F>(F, PhantomData<fn(&T)>);

impl<T: ?Sized, F: Clone> Clone for FnTotalOrder<T, F> {
    fn clone(&self) -> Self {
        Self(self.0.clone(), PhantomData)
    }
}

impl<T: ?Sized, F: Copy> Copy for FnTotalOrder<T, F> {}

impl<T: ?Sized, F> TotalOrder for FnTotalOrder<T, F>
where
    F: Fn(&T, &T) -> Ordering,
{
    type OrderedType = T;

    fn cmp(&self, this: &T, that: &T) -> Ordering {
        (self.0)(this, that)
    }
}

/// Adapts a comparator function into a [`TotalOrder`].
///
/// The function must implement a trichotomous total order, returning
/// [`Ordering::Less`] when its first argument sorts strictly earlier than its
/// second.
///
/// # Examples
///
/// ```
/// use sift::{total_order_fn, BinaryHeap};
///
/// // Order words by length, falling back to the lexicographic order.
/// let by_len = total_order_fn(|a: &&str, b: &&str| a.len().cmp(&b.len()).then(a.cmp(b)));
///
/// let mut heap = BinaryHeap::new(by_len);
/// heap.extend(["beech", "oak", "sycamore", "elm"]);
/// assert_eq!(heap.into_sorted_vec(), ["elm", "oak", "beech", "sycamore"]);
/// ```
pub fn total_order_fn<T, F>(f: F) -> FnTotalOrder<T, F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    FnTotalOrder(f, PhantomData)
}

#[cfg(test)]
pub(crate) mod test_helpers {
    /// Copied from `std::test_helpers::test_rng`, since these tests rely on the
    /// seed not being the same for every RNG invocation too.
    pub(crate) fn test_rng() -> rand_xorshift::XorShiftRng {
        use std::hash::{BuildHasher, Hash, Hasher};
        let mut hasher = std::collections::hash_map::RandomState::new().build_hasher();
        std::panic::Location::caller().hash(&mut hasher);
        let hc64 = hasher.finish();
        let seed_vec =
            hc64.to_le_bytes().into_iter().chain(0u8..8).collect::<alloc::vec::Vec<u8>>();
        let seed: [u8; 16] = seed_vec.as_slice().try_into().unwrap();
        rand::SeedableRng::from_seed(seed)
    }
}
