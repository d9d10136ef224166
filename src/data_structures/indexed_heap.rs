//! Indexed binary min-heap
//!
//! A complete binary tree stored in slot order, augmented with a reverse index
//! from each element to the slot it currently occupies. The reverse index is
//! what makes [`MinPQ::change_priority`], [`MinPQ::contains`] and
//! [`MinPQ::get_priority`] independent of the queue size.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `add`             | O(log n)   |
//! | `peek_min`        | O(1)       |
//! | `remove_min`      | O(log n)   |
//! | `change_priority` | O(log n)   |
//! | `remove`          | O(log n)   |
//! | `contains`        | O(1)       |
//!
//! Slots are numbered from 1: the root is slot 1, the children of slot `i` are
//! `2i` and `2i + 1`, and its parent is `i / 2`. Slot `i` is stored at vector
//! index `i - 1`.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::data_structures::priority_element::{describe, validate_priority, PriorityElement};
use crate::data_structures::MinPQ;
use crate::{Error, Result};

const ROOT: usize = 1;

/// Binary min-heap with a reverse element-to-slot index
///
/// Invariants, restored before every public operation returns:
/// - heap order: for every non-root slot `i`, `priority(i / 2) <= priority(i)`
/// - index consistency: `slots[e]` is the slot currently holding `e`, for every
///   stored element `e`, and the map holds nothing else
#[derive(Debug, Clone)]
pub struct IndexedBinaryHeapMinPQ<E>
where
    E: Eq + Hash + Clone,
{
    /// Heap storage, slot `i` at index `i - 1`
    heap: Vec<PriorityElement<E>>,

    /// Element -> current slot
    slots: HashMap<E, usize>,
}

impl<E> IndexedBinaryHeapMinPQ<E>
where
    E: Eq + Hash + Clone + Debug,
{
    /// Creates an empty heap
    pub fn new() -> Self {
        IndexedBinaryHeapMinPQ {
            heap: Vec::new(),
            slots: HashMap::new(),
        }
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        IndexedBinaryHeapMinPQ {
            heap: Vec::with_capacity(capacity),
            slots: HashMap::with_capacity(capacity),
        }
    }

    /// Creates a heap holding every given element and priority
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (E, f64)>,
    {
        let pairs = pairs.into_iter();
        let mut pq = Self::with_capacity(pairs.size_hint().0);
        pq.add_all(pairs)?;
        Ok(pq)
    }

    /// Verifies heap order and reverse index consistency
    ///
    /// Returns the first violation found. Every public operation leaves the
    /// heap in a state where this succeeds.
    pub fn check_invariants(&self) -> Result<()> {
        if self.slots.len() != self.heap.len() {
            return Err(Error::InvariantViolation(format!(
                "index holds {} entries but heap holds {}",
                self.slots.len(),
                self.heap.len()
            )));
        }
        for slot in ROOT..=self.heap.len() {
            let pair = self.at(slot);
            match self.slots.get(pair.element()) {
                Some(&indexed) if indexed == slot => {}
                Some(&indexed) => {
                    return Err(Error::InvariantViolation(format!(
                        "{:?} sits in slot {} but is indexed at slot {}",
                        pair.element(),
                        slot,
                        indexed
                    )))
                }
                None => {
                    return Err(Error::InvariantViolation(format!(
                        "{:?} in slot {} is missing from the index",
                        pair.element(),
                        slot
                    )))
                }
            }
            if slot > ROOT && self.at(parent(slot)).key() > pair.key() {
                return Err(Error::InvariantViolation(format!(
                    "slot {} has priority {} below its parent's {}",
                    slot,
                    pair.priority(),
                    self.at(parent(slot)).priority()
                )));
            }
        }
        Ok(())
    }

    fn at(&self, slot: usize) -> &PriorityElement<E> {
        &self.heap[slot - 1]
    }

    fn less(&self, a: usize, b: usize) -> bool {
        self.at(a).key() < self.at(b).key()
    }

    /// Exchanges two slots and re-points both index entries
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a - 1, b - 1);
        for slot in [a, b] {
            if let Some(indexed) = self.slots.get_mut(self.heap[slot - 1].element()) {
                *indexed = slot;
            }
        }
        log::trace!("Swapped heap slots {} and {}", a, b);
    }

    /// Moves the element at `slot` toward the root while it beats its parent
    fn swim(&mut self, mut slot: usize) {
        while slot > ROOT && self.less(slot, parent(slot)) {
            self.swap(slot, parent(slot));
            slot = parent(slot);
        }
    }

    /// Moves the element at `slot` toward the leaves while a child beats it
    fn sink(&mut self, mut slot: usize) {
        let size = self.heap.len();
        loop {
            let left = left_child(slot);
            if left > size {
                break;
            }
            let right = left + 1;
            // Left wins ties between children
            let smaller = if right <= size && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(smaller, slot) {
                break;
            }
            self.swap(slot, smaller);
            slot = smaller;
        }
    }

    /// Detaches the element at `slot`, refilling the hole from the last slot
    fn take(&mut self, slot: usize) -> PriorityElement<E> {
        let last = self.heap.len();
        self.swap(slot, last);
        // `last >= slot >= 1`, so the vector is non-empty here
        let removed = self.heap.swap_remove(last - 1);
        self.slots.remove(removed.element());
        if slot <= self.heap.len() {
            self.sink(slot);
            self.swim(slot);
        }
        removed
    }

    fn slot_of(&self, element: &E) -> Result<usize> {
        self.slots
            .get(element)
            .copied()
            .ok_or_else(|| Error::NotFound(describe(element)))
    }
}

fn parent(slot: usize) -> usize {
    slot / 2
}

fn left_child(slot: usize) -> usize {
    2 * slot
}

impl<E> MinPQ<E> for IndexedBinaryHeapMinPQ<E>
where
    E: Eq + Hash + Clone + Debug,
{
    fn add(&mut self, element: E, priority: f64) -> Result<()> {
        validate_priority(priority)?;
        if self.slots.contains_key(&element) {
            log::debug!("Rejecting duplicate element {:?}", element);
            return Err(Error::DuplicateElement(describe(&element)));
        }
        let slot = self.heap.len() + 1;
        self.slots.insert(element.clone(), slot);
        self.heap.push(PriorityElement::new(element, priority));
        self.swim(slot);
        Ok(())
    }

    fn contains(&self, element: &E) -> bool {
        self.slots.contains_key(element)
    }

    fn get_priority(&self, element: &E) -> Result<f64> {
        let slot = self.slot_of(element)?;
        Ok(self.at(slot).priority())
    }

    fn peek_min(&self) -> Result<E> {
        self.heap
            .first()
            .map(|pair| pair.element().clone())
            .ok_or(Error::EmptyQueue)
    }

    fn remove_min(&mut self) -> Result<E> {
        if self.heap.is_empty() {
            return Err(Error::EmptyQueue);
        }
        let (element, _) = self.take(ROOT).into_parts();
        Ok(element)
    }

    fn change_priority(&mut self, element: &E, priority: f64) -> Result<()> {
        validate_priority(priority)?;
        let slot = self.slot_of(element)?;
        self.heap[slot - 1].set_priority(priority);
        // Only one of the two moves does any work
        self.sink(slot);
        self.swim(slot);
        Ok(())
    }

    fn remove(&mut self, element: &E) -> Result<f64> {
        let slot = self.slot_of(element)?;
        let (_, priority) = self.take(slot).into_parts();
        Ok(priority)
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.slots.clear();
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<E> Default for IndexedBinaryHeapMinPQ<E>
where
    E: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
