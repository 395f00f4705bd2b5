//! Element count bookkeeping shared by every container.

/// Current element count and fixed capacity of a container.
///
/// Maintains `0 <= len <= capacity`. The tracker holds no reference to
/// storage; it only answers occupancy queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SizeTracker {
    len: usize,
    capacity: usize,
}

impl SizeTracker {
    /// Creates an empty tracker for `capacity` slots.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { len: 0, capacity }
    }

    /// Number of elements currently held.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Maximum number of elements.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if no elements are held.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if `len() == capacity()`.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Number of free slots.
    #[must_use]
    pub const fn available(&self) -> usize {
        self.capacity - self.len
    }

    pub(crate) fn grow(&mut self) {
        debug_assert!(self.len < self.capacity);
        self.len += 1;
    }

    pub(crate) fn shrink(&mut self) {
        debug_assert!(self.len > 0);
        self.len -= 1;
    }

    pub(crate) fn reset(&mut self) {
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let tracker = SizeTracker::new(4);
        assert!(tracker.is_empty());
        assert!(!tracker.is_full());
        assert_eq!(tracker.len(), 0);
        assert_eq!(tracker.capacity(), 4);
        assert_eq!(tracker.available(), 4);
    }

    #[test]
    fn full_exactly_at_capacity() {
        let mut tracker = SizeTracker::new(3);
        for expected in 1..=3 {
            assert!(!tracker.is_full());
            tracker.grow();
            assert_eq!(tracker.len(), expected);
        }
        assert!(tracker.is_full());
        assert_eq!(tracker.available(), 0);
    }

    #[test]
    fn shrink_and_reset() {
        let mut tracker = SizeTracker::new(2);
        tracker.grow();
        tracker.grow();
        tracker.shrink();
        assert_eq!(tracker.len(), 1);
        tracker.reset();
        assert!(tracker.is_empty());
        assert_eq!(tracker.available(), 2);
    }
}
