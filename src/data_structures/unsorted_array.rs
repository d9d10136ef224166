use std::fmt::Debug;

use crate::data_structures::priority_element::{describe, validate_priority, PriorityElement};
use crate::data_structures::MinPQ;
use crate::{Error, Result};

/// Baseline priority queue over an unordered vector
///
/// `add` is O(1); every other lookup is a linear scan. Ties on the minimum
/// priority go to the element that comes first in storage order, which is
/// insertion order minus removals. Mostly useful as a correctness oracle for
/// [`IndexedBinaryHeapMinPQ`](super::IndexedBinaryHeapMinPQ).
#[derive(Debug, Clone)]
pub struct UnsortedArrayMinPQ<E> {
    /// Element-priority pairs in no particular priority order
    elements: Vec<PriorityElement<E>>,
}

impl<E> UnsortedArrayMinPQ<E>
where
    E: PartialEq + Clone + Debug,
{
    /// Creates an empty queue
    pub fn new() -> Self {
        UnsortedArrayMinPQ {
            elements: Vec::new(),
        }
    }

    /// Creates an empty queue with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        UnsortedArrayMinPQ {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Creates a queue holding every given element and priority
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (E, f64)>,
    {
        let mut pq = Self::new();
        pq.add_all(pairs)?;
        Ok(pq)
    }

    fn position(&self, element: &E) -> Option<usize> {
        self.elements.iter().position(|pair| pair.element() == element)
    }

    /// Storage position of the first minimum, strict `<` keeps the earliest tie
    fn min_position(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, pair) in self.elements.iter().enumerate() {
            match best {
                Some(b) if self.elements[b].key() <= pair.key() => {}
                _ => best = Some(i),
            }
        }
        best
    }
}

impl<E> MinPQ<E> for UnsortedArrayMinPQ<E>
where
    E: PartialEq + Clone + Debug,
{
    fn add(&mut self, element: E, priority: f64) -> Result<()> {
        validate_priority(priority)?;
        if self.contains(&element) {
            log::debug!("Rejecting duplicate element {:?}", element);
            return Err(Error::DuplicateElement(describe(&element)));
        }
        self.elements.push(PriorityElement::new(element, priority));
        Ok(())
    }

    fn contains(&self, element: &E) -> bool {
        self.position(element).is_some()
    }

    fn get_priority(&self, element: &E) -> Result<f64> {
        self.position(element)
            .map(|i| self.elements[i].priority())
            .ok_or_else(|| Error::NotFound(describe(element)))
    }

    fn peek_min(&self) -> Result<E> {
        self.min_position()
            .map(|i| self.elements[i].element().clone())
            .ok_or(Error::EmptyQueue)
    }

    fn remove_min(&mut self) -> Result<E> {
        let index = self.min_position().ok_or(Error::EmptyQueue)?;
        // Vec::remove keeps the remaining storage order stable for tie-breaks
        let (element, _) = self.elements.remove(index).into_parts();
        Ok(element)
    }

    fn change_priority(&mut self, element: &E, priority: f64) -> Result<()> {
        validate_priority(priority)?;
        let index = self
            .position(element)
            .ok_or_else(|| Error::NotFound(describe(element)))?;
        self.elements[index].set_priority(priority);
        Ok(())
    }

    fn remove(&mut self, element: &E) -> Result<f64> {
        let index = self
            .position(element)
            .ok_or_else(|| Error::NotFound(describe(element)))?;
        let (_, priority) = self.elements.remove(index).into_parts();
        Ok(priority)
    }

    fn clear(&mut self) {
        self.elements.clear();
    }

    fn len(&self) -> usize {
        self.elements.len()
    }
}

impl<E> Default for UnsortedArrayMinPQ<E>
where
    E: PartialEq + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
