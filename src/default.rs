//! Defaults that enable this crate's heap to behave as a plain min-heap over
//! its element type, namely using the [`Ord`] trait for comparisons rather
//! than any user-supplied [`TotalOrder`].

use crate::TotalOrder;
use core::{cmp::Ordering, marker::PhantomData};

/// A zero-sized total order that delegates to the [`Ord`] implementation
/// of its type parameter `T`.
pub struct OrdTotalOrder<T: ?Sized>(PhantomData<fn(&T)>);

impl<T: ?Sized> Default for OrdTotalOrder<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Clone for OrdTotalOrder<T> {
    fn clone(&self) -> Self {
        Self(PhantomData)
    }
}

impl<T: ?Sized> Copy for OrdTotalOrder<T> {}

impl<T: ?Sized + Ord> TotalOrder for OrdTotalOrder<T> {
    type OrderedType = T;

    // Delegate to `T`'s implementation of [`Ord`].
    fn cmp(&self, this: &T, that: &T) -> Ordering {
        this.cmp(that)
    }

    // The default implementations of the following methods are overridden so
    // that they delegate to `T`'s implementations of [`PartialEq`] and
    // [`PartialOrd`] rather than merely using its implementation of [`Ord`].
    //
    // If, as required by those traits, `T`'s implementations are consistent
    // with one another, then these overrides have no effect.

    fn eq(&self, this: &T, that: &T) -> bool {
        this == that
    }
    fn ne(&self, this: &T, that: &T) -> bool {
        this != that
    }

    fn ge(&self, this: &T, that: &T) -> bool {
        this >= that
    }
    fn gt(&self, this: &T, that: &T) -> bool {
        this > that
    }
    fn le(&self, this: &T, that: &T) -> bool {
        this <= that
    }
    fn lt(&self, this: &T, that: &T) -> bool {
        this < that
    }
}
