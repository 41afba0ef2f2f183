//! A priority queue implemented with a binary min-heap.
//!
//! Insertion and popping the least element have *O*(log(*n*)) time complexity.
//! Checking the least element is *O*(1).  Converting a vector to a binary heap
//! can be done in-place, and has *O*(*n*) complexity.  A binary heap can also
//! be converted to a sorted vector in-place, allowing it to be used for an
//! *O*(*n* \* log(*n*)) in-place heapsort.
//!
//! Unlike the standard library's [`BinaryHeap`][std], the heap in this module
//! does not require its elements to implement [`Ord`]: it performs every
//! comparison through a [`TotalOrder`] supplied at construction time.
//!
//! [std]: https://doc.rust-lang.org/std/collections/struct.BinaryHeap.html
//!
//! # Examples
//!
//! ```
//! use sift::{BinaryHeap, EmptyQueue};
//!
//! let mut heap: BinaryHeap<i32> = BinaryHeap::default();
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//!
//! assert_eq!(heap.peek(), Ok(&1));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.pop(), Ok(2));
//! assert_eq!(heap.pop(), Ok(3));
//! assert_eq!(heap.pop(), Err(EmptyQueue));
//! ```

use core::fmt;
use core::iter::{FromIterator, FusedIterator};
use core::mem::{swap, ManuallyDrop};
use core::ptr;

use alloc::slice;
use alloc::vec::{self, Vec};
use cfg_if::cfg_if;

use crate::default::OrdTotalOrder;
use crate::TotalOrder;

#[cfg(test)]
mod tests;

/// The error returned by [`BinaryHeap::peek`] and [`BinaryHeap::pop`] when
/// the heap contains no elements.
///
/// Calling either operation on an empty heap is a usage error on the caller's
/// part, not a transient condition: the failed call leaves the heap untouched
/// and the caller decides whether to treat the error as fatal or to check
/// [`BinaryHeap::is_empty`] first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyQueue;

impl fmt::Display for EmptyQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("priority queue is empty")
    }
}

cfg_if! {
    if #[cfg(feature = "std")] {
        impl std::error::Error for EmptyQueue {}
    }
}

/// A priority queue implemented with a binary heap.
///
/// This will be a min-heap with respect to the [`TotalOrder`] supplied at
/// construction: [`pop`] removes the element that sorts earliest under that
/// order.  Elements that compare equal are returned in no particular order.
///
/// It is a logic error for an element to be modified in such a way that its
/// ordering relative to any other element, as determined by the supplied
/// order, changes while it is in the heap.  This is normally only possible
/// through interior mutability, global state, I/O, or unsafe code.  The
/// behavior resulting from such a logic error is not specified, but will be
/// encapsulated to the `BinaryHeap` that observed the logic error and not
/// result in undefined behavior.  This could include panics, incorrect
/// results, aborts, memory leaks, and non-termination.
///
/// # Examples
///
/// ```
/// use sift::BinaryHeap;
///
/// // The order parameter defaults to `OrdTotalOrder`, making this a
/// // plain min-heap (`BinaryHeap<i32, OrdTotalOrder<i32>>` in this example).
/// let mut heap: BinaryHeap<i32> = BinaryHeap::default();
///
/// // We can use peek to look at the next item in the heap.  In this case,
/// // there's no items in there yet so we get an error.
/// assert!(heap.peek().is_err());
///
/// // Let's add some scores...
/// heap.push(1);
/// heap.push(5);
/// heap.push(2);
///
/// // Now peek shows the most important item in the heap.
/// assert_eq!(heap.peek(), Ok(&1));
///
/// // We can check the length of a heap.
/// assert_eq!(heap.len(), 3);
///
/// // We can iterate over the items in the heap, although they are returned in
/// // an unspecified order.
/// for x in &heap {
///     println!("{x}");
/// }
///
/// // If we instead pop these scores, they should come back in order.
/// assert_eq!(heap.pop(), Ok(1));
/// assert_eq!(heap.pop(), Ok(2));
/// assert_eq!(heap.pop(), Ok(5));
/// assert!(heap.pop().is_err());
///
/// // We can clear the heap of any remaining items.
/// heap.clear();
///
/// // The heap should now be empty.
/// assert!(heap.is_empty())
/// ```
///
/// A `BinaryHeap` with a known list of items can be initialized from an array:
///
/// ```
/// use sift::BinaryHeap;
///
/// let heap: BinaryHeap<i32> = BinaryHeap::from([1, 5, 2]);
/// assert_eq!(heap.peek(), Ok(&1));
/// ```
///
/// ## Max-heap
///
/// Wrap the order in [`Reversed`] to make `BinaryHeap` a max-heap.  This makes
/// `heap.pop()` return the greatest value instead of the least one.
///
/// ```
/// use sift::{BinaryHeap, OrdTotalOrder, Reversed};
///
/// let mut heap = BinaryHeap::new(Reversed(OrdTotalOrder::default()));
///
/// heap.push(1);
/// heap.push(5);
/// heap.push(2);
///
/// // If we pop these scores now, they should come back in the reverse order.
/// assert_eq!(heap.pop(), Ok(5));
/// assert_eq!(heap.pop(), Ok(2));
/// assert_eq!(heap.pop(), Ok(1));
/// assert!(heap.pop().is_err());
/// ```
///
/// # Time complexity
///
/// | [push]  | [pop]         | [peek]  |
/// |---------|---------------|---------|
/// | *O*(1)~ | *O*(log(*n*)) | *O*(1)  |
///
/// The value for `push` is an expected cost; the method documentation gives a
/// more detailed analysis.
///
/// [`pop`]: BinaryHeap::pop
/// [`Reversed`]: crate::Reversed
/// [push]: BinaryHeap::push
/// [pop]: BinaryHeap::pop
/// [peek]: BinaryHeap::peek
pub struct BinaryHeap<T, O = OrdTotalOrder<T>> {
    data: Vec<T>,
    order: O,
}

impl<T: Clone, O: Clone> Clone for BinaryHeap<T, O> {
    fn clone(&self) -> Self {
        BinaryHeap { data: self.data.clone(), order: self.order.clone() }
    }

    fn clone_from(&mut self, source: &Self) {
        self.data.clone_from(&source.data);
        self.order.clone_from(&source.order);
    }
}

impl<T, O: TotalOrder<OrderedType = T> + Default> Default for BinaryHeap<T, O> {
    /// Creates an empty `BinaryHeap<T>`.
    #[inline]
    fn default() -> BinaryHeap<T, O> {
        BinaryHeap::new(O::default())
    }
}

impl<T: fmt::Debug, O> fmt::Debug for BinaryHeap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, O: TotalOrder<OrderedType = T>> BinaryHeap<T, O> {
    /// Creates an empty `BinaryHeap` that orders its elements with the
    /// supplied total order.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use sift::{BinaryHeap, OrdTotalOrder};
    /// let mut heap = BinaryHeap::new(OrdTotalOrder::default());
    /// heap.push(4);
    /// ```
    #[must_use]
    pub fn new(order: O) -> BinaryHeap<T, O> {
        BinaryHeap { data: Vec::new(), order }
    }

    /// Creates an empty `BinaryHeap` with at least the specified capacity.
    ///
    /// The binary heap will be able to hold at least `capacity` elements
    /// without reallocating.  This method is allowed to allocate for more
    /// elements than `capacity`.  If `capacity` is 0, the binary heap will not
    /// allocate.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use sift::BinaryHeap;
    /// let mut heap: BinaryHeap<i32> = BinaryHeap::with_capacity(Default::default(), 10);
    /// heap.push(4);
    /// ```
    #[must_use]
    pub fn with_capacity(order: O, capacity: usize) -> BinaryHeap<T, O> {
        BinaryHeap { data: Vec::with_capacity(capacity), order }
    }

    /// Builds a heap from an existing vector of elements, in-place and in
    /// *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use sift::{BinaryHeap, OrdTotalOrder};
    ///
    /// let heap = BinaryHeap::from_vec(OrdTotalOrder::default(), vec![4, 1, 3]);
    /// assert_eq!(heap.peek(), Ok(&1));
    /// ```
    #[must_use]
    pub fn from_vec(order: O, data: Vec<T>) -> BinaryHeap<T, O> {
        let mut heap = BinaryHeap { data, order };
        heap.rebuild();
        heap
    }

    /// Removes the least item from the binary heap and returns it, or
    /// [`EmptyQueue`] if it is empty.
    ///
    /// A failed call does not alter the heap.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use sift::BinaryHeap;
    /// let mut heap: BinaryHeap<i32> = BinaryHeap::from([1, 3]);
    ///
    /// assert_eq!(heap.pop(), Ok(1));
    /// assert_eq!(heap.pop(), Ok(3));
    /// assert!(heap.pop().is_err());
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `pop` on a heap containing *n* elements is
    /// *O*(log(*n*)).
    pub fn pop(&mut self) -> Result<T, EmptyQueue> {
        let mut item = self.data.pop().ok_or(EmptyQueue)?;
        if !self.is_empty() {
            swap(&mut item, &mut self.data[0]);
            // SAFETY: !self.is_empty() means that self.len() > 0
            unsafe { self.sift_down(0) };
        }
        Ok(item)
    }

    /// Pushes an item onto the binary heap.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use sift::BinaryHeap;
    /// let mut heap: BinaryHeap<i32> = BinaryHeap::default();
    /// heap.push(3);
    /// heap.push(5);
    /// heap.push(1);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek(), Ok(&1));
    /// ```
    ///
    /// # Time complexity
    ///
    /// The expected cost of `push`, averaged over every possible ordering of
    /// the elements being pushed, and over a sufficiently large number of
    /// pushes, is *O*(1).  This is the most meaningful cost metric when
    /// pushing elements that are *not* already in any sorted pattern.
    ///
    /// The time complexity degrades if elements are pushed in predominantly
    /// descending order.  In the worst case, elements are pushed in descending
    /// sorted order and the amortized cost per push is *O*(log(*n*)) against a
    /// heap containing *n* elements.
    ///
    /// The worst case cost of a *single* call to `push` is *O*(*n*).  The
    /// worst case occurs when capacity is exhausted and needs a resize.  The
    /// resize cost has been amortized in the previous figures.
    pub fn push(&mut self, item: T) {
        let old_len = self.len();
        self.data.push(item);
        // SAFETY: Since we pushed a new item it means that
        //  old_len = self.len() - 1 < self.len()
        unsafe { self.sift_up(0, old_len) };
    }

    /// Consumes the `BinaryHeap` and returns a vector sorted ascending under
    /// the heap's order.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use sift::BinaryHeap;
    ///
    /// let mut heap: BinaryHeap<i32> = BinaryHeap::from([1, 2, 4, 5, 7]);
    /// heap.push(6);
    /// heap.push(3);
    ///
    /// let vec = heap.into_sorted_vec();
    /// assert_eq!(vec, [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut end = self.len();
        while end > 1 {
            end -= 1;
            // SAFETY: `end` goes from `self.len() - 1` to 1 (both included),
            //  so it's always a valid index to access.
            //  It is safe to access index 0 (i.e. `ptr`), because
            //  1 <= end < self.len(), which means self.len() >= 2.
            unsafe {
                let ptr = self.data.as_mut_ptr();
                ptr::swap(ptr, ptr.add(end));
            }
            // SAFETY: `end` goes from `self.len() - 1` to 1 (both included) so:
            //  0 < 1 <= end <= self.len() - 1 < self.len()
            //  Which means 0 < end and end < self.len().
            unsafe { self.sift_down_range(0, end) };
        }
        // Selection from a min-heap leaves the vector sorted descending (the
        // least element ends up at the back); flip it to ascending.
        let mut vec = self.into_vec();
        vec.reverse();
        vec
    }

    /// Returns an iterator which retrieves elements in ascending order under
    /// the heap's order.  This method consumes the original heap.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use sift::BinaryHeap;
    /// let heap: BinaryHeap<i32> = BinaryHeap::from([1, 2, 3, 4, 5]);
    ///
    /// assert_eq!(heap.into_iter_sorted().take(2).collect::<Vec<_>>(), [1, 2]);
    /// ```
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, O> {
        IntoIterSorted { inner: self }
    }

    // The implementations of sift_up and sift_down use unsafe blocks in
    // order to move an element out of the vector (leaving behind a
    // hole), shift along the others and move the removed element back into the
    // vector at the final location of the hole.
    // The `Hole` type is used to represent this, and make sure
    // the hole is filled back at the end of its scope, even on panic.
    // Using a hole reduces the constant factor compared to using swaps,
    // which involves twice as many moves.

    /// Take an element at `pos` and move it up the heap while it sorts
    /// strictly earlier than its parent.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_up(&mut self, start: usize, pos: usize) {
        // Take out the value at `pos` and create a hole.
        // SAFETY: The caller guarantees that pos < self.len()
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };

        while hole.pos() > start {
            let parent = (hole.pos() - 1) / 2;

            // SAFETY: hole.pos() > start >= 0, which means hole.pos() > 0
            //  and so hole.pos() - 1 can't underflow.
            //  This guarantees that parent < hole.pos() so
            //  it's a valid index and also != hole.pos().
            if self.order.ge(hole.element(), unsafe { hole.get(parent) }) {
                break;
            }

            // SAFETY: Same as above
            unsafe { hole.move_to(parent) };
        }
    }

    /// Take an element at `pos` and move it down the heap while it sorts
    /// strictly later than either of its children.
    ///
    /// # Safety
    ///
    /// The caller must guarantee that `pos < end <= self.len()`.
    unsafe fn sift_down_range(&mut self, pos: usize, end: usize) {
        // SAFETY: The caller guarantees that pos < end <= self.len().
        let mut hole = unsafe { Hole::new(&mut self.data, pos) };
        let mut child = 2 * hole.pos() + 1;

        // Loop invariant: child == 2 * hole.pos() + 1.
        while child <= end.saturating_sub(2) {
            // compare with the lesser of the two children: the right child is
            // only preferred if it sorts strictly earlier than the left one
            // SAFETY: child < end - 1 < self.len() and
            //  child + 1 < end <= self.len(), so they're valid indexes.
            //  child == 2 * hole.pos() + 1 != hole.pos() and
            //  child + 1 == 2 * hole.pos() + 2 != hole.pos().
            child += unsafe { self.order.lt(hole.get(child + 1), hole.get(child)) } as usize;

            // if we are already in order, stop.
            // SAFETY: child is now either the old child or the old child+1
            //  We already proven that both are < self.len() and != hole.pos()
            if self.order.le(hole.element(), unsafe { hole.get(child) }) {
                return;
            }

            // SAFETY: same as above.
            unsafe { hole.move_to(child) };
            child = 2 * hole.pos() + 1;
        }

        // SAFETY: && short circuit, which means that in the
        //  second condition it's already true that child == end - 1 < self.len().
        if child == end - 1 && self.order.lt(unsafe { hole.get(child) }, hole.element()) {
            // SAFETY: child is already proven to be a valid index and
            //  child == 2 * hole.pos() + 1 != hole.pos().
            unsafe { hole.move_to(child) };
        }
    }

    /// # Safety
    ///
    /// The caller must guarantee that `pos < self.len()`.
    unsafe fn sift_down(&mut self, pos: usize) {
        let len = self.len();
        // SAFETY: pos < len is guaranteed by the caller and
        //  obviously len = self.len() <= self.len().
        unsafe { self.sift_down_range(pos, len) };
    }

    /// Establishes the heap invariant over the whole of `self.data` in
    /// *O*(*n*), sifting down every internal node from the last parent to the
    /// root.
    fn rebuild(&mut self) {
        let mut n = self.len() / 2;
        while n > 0 {
            n -= 1;
            // SAFETY: n starts from self.len() / 2 and goes down to 0.
            //  The only case when !(n < self.len()) is if
            //  self.len() == 0, but it's ruled out by the loop condition.
            unsafe { self.sift_down(n) };
        }
    }

    fn extend_desugared<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();

        self.reserve(lower);

        iterator.for_each(move |elem| self.push(elem));
    }
}

impl<T, O> BinaryHeap<T, O> {
    /// Returns an iterator visiting all values in the underlying vector, in
    /// unspecified order.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use sift::BinaryHeap;
    /// let heap: BinaryHeap<i32> = BinaryHeap::from([1, 2, 3, 4]);
    ///
    /// // Print 1, 2, 3, 4 in unspecified order
    /// for x in heap.iter() {
    ///     println!("{x}");
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { iter: self.data.iter() }
    }

    /// Returns the least item in the binary heap, or [`EmptyQueue`] if it is
    /// empty.
    ///
    /// Peeking never mutates the heap: repeated calls without intervening
    /// mutation return the same value.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use sift::BinaryHeap;
    /// let mut heap: BinaryHeap<i32> = BinaryHeap::default();
    /// assert!(heap.peek().is_err());
    ///
    /// heap.push(1);
    /// heap.push(5);
    /// heap.push(2);
    /// assert_eq!(heap.peek(), Ok(&1));
    /// ```
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    pub fn peek(&self) -> Result<&T, EmptyQueue> {
        self.data.first().ok_or(EmptyQueue)
    }

    /// Borrows the total order supplied when this heap was constructed.
    ///
    /// Only a shared borrow is ever handed out: mutating the order while the
    /// heap contains elements could violate the heap invariant.
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns the number of elements the binary heap can hold without
    /// reallocating.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use sift::BinaryHeap;
    /// let mut heap: BinaryHeap<i32> = BinaryHeap::with_capacity(Default::default(), 100);
    /// assert!(heap.capacity() >= 100);
    /// heap.push(4);
    /// ```
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves the minimum capacity for at least `additional` elements more
    /// than the current length.  Unlike [`reserve`], this will not
    /// deliberately over-allocate to speculatively avoid frequent allocations.
    ///
    /// [`reserve`]: BinaryHeap::reserve
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows [`usize`].
    pub fn reserve_exact(&mut self, additional: usize) {
        self.data.reserve_exact(additional);
    }

    /// Reserves capacity for at least `additional` elements more than the
    /// current length.  The allocator may reserve more space to speculatively
    /// avoid frequent allocations.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows [`usize`].
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Discards as much additional capacity as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Discards capacity with a lower bound.
    ///
    /// The capacity will remain at least as large as both the length
    /// and the supplied value.
    #[inline]
    pub fn shrink_to(&mut self, min_capacity: usize) {
        self.data.shrink_to(min_capacity)
    }

    /// Returns a slice of all values in the underlying vector, in unspecified
    /// order.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use sift::BinaryHeap;
    ///
    /// let heap: BinaryHeap<i32> = BinaryHeap::from([3, 1, 2]);
    /// let mut values = heap.as_slice().to_vec();
    /// values.sort();
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Consumes the `BinaryHeap` and returns the underlying vector in
    /// unspecified order.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use sift::BinaryHeap;
    /// let heap: BinaryHeap<i32> = BinaryHeap::from([1, 2, 3, 4, 5, 6, 7]);
    /// let vec = heap.into_vec();
    ///
    /// // Will print in some order
    /// for x in vec {
    ///     println!("{x}");
    /// }
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.into()
    }

    /// Returns the length of the binary heap.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use sift::BinaryHeap;
    /// let heap: BinaryHeap<i32> = BinaryHeap::from([1, 3]);
    ///
    /// assert_eq!(heap.len(), 2);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the binary heap is empty.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use sift::BinaryHeap;
    /// let mut heap: BinaryHeap<i32> = BinaryHeap::default();
    ///
    /// assert!(heap.is_empty());
    ///
    /// heap.push(3);
    ///
    /// assert!(!heap.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the binary heap, returning an iterator over the removed
    /// elements in unspecified order.  If the iterator is dropped before
    /// being fully consumed, it drops the remaining elements in unspecified
    /// order.
    ///
    /// The returned iterator keeps a mutable borrow on the heap to optimize
    /// its implementation.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use sift::BinaryHeap;
    /// let mut heap: BinaryHeap<i32> = BinaryHeap::from([1, 3]);
    ///
    /// assert!(!heap.is_empty());
    ///
    /// for x in heap.drain() {
    ///     println!("{x}");
    /// }
    ///
    /// assert!(heap.is_empty());
    /// ```
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain { iter: self.data.drain(..) }
    }

    /// Drops all items from the binary heap.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use sift::BinaryHeap;
    /// let mut heap: BinaryHeap<i32> = BinaryHeap::from([1, 3]);
    ///
    /// assert!(!heap.is_empty());
    ///
    /// heap.clear();
    ///
    /// assert!(heap.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.drain();
    }
}

/// Hole represents a hole in a slice i.e., an index without valid value
/// (because it was moved from or duplicated).
/// In drop, `Hole` will restore the slice by filling the hole
/// position with the value that was originally removed.
struct Hole<'a, T: 'a> {
    data: &'a mut [T],
    elt: ManuallyDrop<T>,
    pos: usize,
}

impl<'a, T> Hole<'a, T> {
    /// Create a new `Hole` at index `pos`.
    ///
    /// Unsafe because pos must be within the data slice.
    #[inline]
    unsafe fn new(data: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos < data.len());
        // SAFE: pos should be inside the slice
        let elt = unsafe { ptr::read(data.get_unchecked(pos)) };
        Hole { data, elt: ManuallyDrop::new(elt), pos }
    }

    #[inline]
    fn pos(&self) -> usize {
        self.pos
    }

    /// Returns a reference to the element removed.
    #[inline]
    fn element(&self) -> &T {
        &self.elt
    }

    /// Returns a reference to the element at `index`.
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn get(&self, index: usize) -> &T {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe { self.data.get_unchecked(index) }
    }

    /// Move hole to new location
    ///
    /// Unsafe because index must be within the data slice and not equal to pos.
    #[inline]
    unsafe fn move_to(&mut self, index: usize) {
        debug_assert!(index != self.pos);
        debug_assert!(index < self.data.len());
        unsafe {
            let ptr = self.data.as_mut_ptr();
            let index_ptr: *const _ = ptr.add(index);
            let hole_ptr = ptr.add(self.pos);
            ptr::copy_nonoverlapping(index_ptr, hole_ptr, 1);
        }
        self.pos = index;
    }
}

impl<T> Drop for Hole<'_, T> {
    #[inline]
    fn drop(&mut self) {
        // fill the hole again
        unsafe {
            let pos = self.pos;
            ptr::copy_nonoverlapping(&*self.elt, self.data.get_unchecked_mut(pos), 1);
        }
    }
}

/// An iterator over the elements of a `BinaryHeap`.
///
/// This `struct` is created by [`BinaryHeap::iter()`]. See its
/// documentation for more.
///
/// [`iter`]: BinaryHeap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, T>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { iter: self.iter.clone() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    #[inline]
    fn last(self) -> Option<&'a T> {
        self.iter.last()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// An owning iterator over the elements of a `BinaryHeap`.
///
/// This `struct` is created by [`BinaryHeap::into_iter()`]
/// (provided by the [`IntoIterator`] trait). See its documentation for more.
///
/// [`into_iter`]: BinaryHeap::into_iter
/// [`IntoIterator`]: core::iter::IntoIterator
#[derive(Clone)]
pub struct IntoIter<T> {
    iter: vec::IntoIter<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// A consuming iterator that retrieves elements of a `BinaryHeap` in
/// ascending order under the heap's order.
///
/// This `struct` is created by [`BinaryHeap::into_iter_sorted()`]. See its
/// documentation for more.
///
/// [`into_iter_sorted`]: BinaryHeap::into_iter_sorted
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct IntoIterSorted<T, O = OrdTotalOrder<T>> {
    inner: BinaryHeap<T, O>,
}

impl<T, O: TotalOrder<OrderedType = T>> Iterator for IntoIterSorted<T, O> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T, O: TotalOrder<OrderedType = T>> ExactSizeIterator for IntoIterSorted<T, O> {}

impl<T, O: TotalOrder<OrderedType = T>> FusedIterator for IntoIterSorted<T, O> {}

/// A draining iterator over the elements of a `BinaryHeap`.
///
/// This `struct` is created by [`BinaryHeap::drain()`]. See its
/// documentation for more.
///
/// [`drain`]: BinaryHeap::drain
#[derive(Debug)]
pub struct Drain<'a, T: 'a> {
    iter: vec::Drain<'a, T>,
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> FusedIterator for Drain<'_, T> {}

impl<T, O: TotalOrder<OrderedType = T> + Default> From<Vec<T>> for BinaryHeap<T, O> {
    /// Converts a `Vec<T>` into a `BinaryHeap<T>` ordered by the default
    /// value of its total order.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<T>) -> BinaryHeap<T, O> {
        BinaryHeap::from_vec(O::default(), vec)
    }
}

impl<T, O: TotalOrder<OrderedType = T> + Default, const N: usize> From<[T; N]>
    for BinaryHeap<T, O>
{
    /// ```
    /// use sift::BinaryHeap;
    ///
    /// let mut h1: BinaryHeap<i32> = BinaryHeap::from([1, 4, 2, 3]);
    /// let mut h2: BinaryHeap<_> = [1, 4, 2, 3].into();
    /// while let (Ok(a), Ok(b)) = (h1.pop(), h2.pop()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T, O> From<BinaryHeap<T, O>> for Vec<T> {
    /// Converts a `BinaryHeap<T>` into a `Vec<T>`.
    ///
    /// This conversion requires no data movement or allocation, and has
    /// constant time complexity.
    fn from(heap: BinaryHeap<T, O>) -> Vec<T> {
        heap.data
    }
}

impl<T, O: TotalOrder<OrderedType = T> + Default> FromIterator<T> for BinaryHeap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> BinaryHeap<T, O> {
        BinaryHeap::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, O> IntoIterator for BinaryHeap<T, O> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator, that is, one that moves each value out
    /// of the binary heap in unspecified order.  The binary heap cannot be
    /// used after calling this.
    ///
    /// # Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use sift::BinaryHeap;
    /// let heap: BinaryHeap<i32> = BinaryHeap::from([1, 2, 3, 4]);
    ///
    /// // Print 1, 2, 3, 4 in unspecified order
    /// for x in heap.into_iter() {
    ///     // x has type i32, not &i32
    ///     println!("{x}");
    /// }
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { iter: self.data.into_iter() }
    }
}

impl<'a, T, O> IntoIterator for &'a BinaryHeap<T, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, O: TotalOrder<OrderedType = T>> Extend<T> for BinaryHeap<T, O> {
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.extend_desugared(iter);
    }
}

impl<'a, T: 'a + Copy, O: TotalOrder<OrderedType = T>> Extend<&'a T> for BinaryHeap<T, O> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
