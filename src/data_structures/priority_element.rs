use ordered_float::OrderedFloat;
use std::fmt::Debug;

/// An element paired with its current priority, as stored inside a queue
///
/// The element is the identity key and never changes while the pair is stored;
/// only the priority is mutated, and only by the owning queue.
#[derive(Debug, Clone)]
pub(crate) struct PriorityElement<E> {
    /// Identity key
    element: E,

    /// Current priority, totally ordered
    priority: OrderedFloat<f64>,
}

impl<E> PriorityElement<E> {
    /// Creates a new pair
    pub(crate) fn new(element: E, priority: f64) -> Self {
        PriorityElement {
            element,
            priority: OrderedFloat(priority),
        }
    }

    pub(crate) fn element(&self) -> &E {
        &self.element
    }

    pub(crate) fn priority(&self) -> f64 {
        self.priority.into_inner()
    }

    /// Priority as an ordered key, for comparisons
    pub(crate) fn key(&self) -> OrderedFloat<f64> {
        self.priority
    }

    pub(crate) fn set_priority(&mut self, priority: f64) {
        self.priority = OrderedFloat(priority);
    }

    /// Consumes the pair, returning the element and its last priority
    pub(crate) fn into_parts(self) -> (E, f64) {
        (self.element, self.priority.into_inner())
    }
}

/// Rejects priorities that have no place in a total order
pub(crate) fn validate_priority(priority: f64) -> crate::Result<()> {
    if priority.is_nan() {
        log::debug!("Rejecting NaN priority");
        return Err(crate::Error::InvalidPriority(priority));
    }
    Ok(())
}

/// Renders an element for error messages
pub(crate) fn describe<E: Debug>(element: &E) -> String {
    format!("{:?}", element)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_mutation_keeps_identity() {
        let mut pair = PriorityElement::new("x", 1.0);
        pair.set_priority(-2.5);
        assert_eq!(pair.element(), &"x");
        assert_eq!(pair.priority(), -2.5);
        assert_eq!(pair.into_parts(), ("x", -2.5));
    }

    #[test]
    fn test_nan_rejected() {
        assert!(validate_priority(f64::NAN).is_err());
        assert!(validate_priority(f64::INFINITY).is_ok());
        assert!(validate_priority(f64::NEG_INFINITY).is_ok());
    }
}
