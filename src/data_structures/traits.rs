//! The minimum priority queue contract
//!
//! Every backing implementation in this crate satisfies [`MinPQ`], so callers
//! can swap the baseline [`UnsortedArrayMinPQ`](super::UnsortedArrayMinPQ) for the
//! [`IndexedBinaryHeapMinPQ`](super::IndexedBinaryHeapMinPQ) without other changes.
//!
//! Elements are unique identity keys. Adding an element that is already present
//! is an error; priority updates go through [`MinPQ::change_priority`].

use crate::{Error, Result};

/// Trait for priority queues that return the element with the minimum priority
/// and allow the priority of a present element to be changed
///
/// Priorities are `f64` values compared in total order. NaN priorities are
/// rejected with [`Error::InvalidPriority`] before any mutation happens.
///
/// # Example
///
/// ```rust
/// use minpq::{IndexedBinaryHeapMinPQ, MinPQ};
///
/// let mut pq = IndexedBinaryHeapMinPQ::new();
/// pq.add("a", 5.0).unwrap();
/// pq.add("b", 1.0).unwrap();
/// pq.change_priority(&"a", 0.0).unwrap();
/// assert_eq!(pq.peek_min(), Ok("a"));
/// ```
pub trait MinPQ<E> {
    /// Adds an element with the given priority
    ///
    /// # Errors
    /// [`Error::DuplicateElement`] if the element is already present, in which
    /// case the stored priority is left untouched.
    fn add(&mut self, element: E, priority: f64) -> Result<()>;

    /// Returns true if the element is present
    fn contains(&self, element: &E) -> bool;

    /// Returns the current priority of a present element
    fn get_priority(&self, element: &E) -> Result<f64>;

    /// Returns an element with minimum priority without removing it
    ///
    /// Ties among equal minimum priorities are resolved deterministically by
    /// each implementation, but callers should not rely on a particular order.
    fn peek_min(&self) -> Result<E>;

    /// Removes and returns an element with minimum priority
    fn remove_min(&mut self) -> Result<E>;

    /// Updates the priority of a present element
    fn change_priority(&mut self, element: &E, priority: f64) -> Result<()>;

    /// Removes a present element, returning its last priority
    fn remove(&mut self, element: &E) -> Result<f64>;

    /// Removes every element
    fn clear(&mut self);

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue holds no elements
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds the element if absent, otherwise changes its priority
    fn add_or_change_priority(&mut self, element: E, priority: f64) -> Result<()> {
        if self.contains(&element) {
            self.change_priority(&element, priority)
        } else {
            self.add(element, priority)
        }
    }

    /// Removes up to `count` minimum elements, in non-decreasing priority order
    fn remove_min_n(&mut self, count: usize) -> Result<Vec<E>> {
        if count > 0 && self.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let mut removed = Vec::with_capacity(count.min(self.len()));
        while removed.len() < count && !self.is_empty() {
            removed.push(self.remove_min()?);
        }
        Ok(removed)
    }

    /// Adds every pair, stopping at the first failure
    fn add_all<I>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (E, f64)>,
        Self: Sized,
    {
        for (element, priority) in pairs {
            self.add(element, priority)?;
        }
        Ok(())
    }
}
