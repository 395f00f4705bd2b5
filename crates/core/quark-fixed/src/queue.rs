//! FIFO mechanics over storage the queue does not own.
//!
//! This module provides [`QueueView`], a circular buffer that operates in a
//! First-In-First-Out manner over a borrowed slice of slots. Elements are
//! written at the write cursor and read at the read cursor; both cursors
//! advance modulo the capacity.
//!
//! # Capacity
//!
//! Unlike a head/tail ring buffer that sacrifices one slot, the element count
//! is tracked separately, so every slot is usable. `read == write` alone says
//! nothing; the count disambiguates empty from full.
//!
//! # Performance
//!
//! - Push: O(1)
//! - Pop: O(1)
//! - Front/back access: O(1)
//!
//! # Examples
//!
//! ```
//! use quark_fixed::{QueueState, QueueView, RaiseSignal};
//!
//! let mut slots = [0u8; 3];
//! let mut state = QueueState::new(slots.len());
//! let mut queue = QueueView::new(&mut slots, &mut state, &RaiseSignal);
//!
//! queue.push(1).unwrap();
//! queue.push(2).unwrap();
//! queue.push(3).unwrap();
//! assert!(queue.is_full());
//!
//! queue.pop().unwrap();
//! queue.push(4).unwrap();
//! assert_eq!(queue.front(), Some(&2));
//! assert_eq!(queue.back(), Some(&4));
//! ```

use core::fmt;

use crate::error::{ContainerError, ErrorKind};
use crate::signal::{DefaultSignal, ErrorSignal};
use crate::tracker::SizeTracker;

/// Element count and read/write cursors of a queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueState {
    tracker: SizeTracker,
    read: usize,
    write: usize,
}

impl QueueState {
    /// Creates the state of an empty queue with `capacity` slots.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            tracker: SizeTracker::new(capacity),
            read: 0,
            write: 0,
        }
    }

    /// Occupancy of the queue.
    #[must_use]
    pub const fn tracker(&self) -> &SizeTracker {
        &self.tracker
    }

    /// Index of the oldest element, if any.
    #[must_use]
    pub const fn front_index(&self) -> Option<usize> {
        if self.tracker.is_empty() {
            None
        } else {
            Some(self.read)
        }
    }

    /// Index of the newest element, if any.
    #[must_use]
    pub const fn back_index(&self) -> Option<usize> {
        if self.tracker.is_empty() {
            None
        } else if self.write == 0 {
            Some(self.tracker.capacity() - 1)
        } else {
            Some(self.write - 1)
        }
    }

    /// Index of the `offset`-th element counted from the front.
    const fn slot(&self, offset: usize) -> usize {
        (self.read + offset) % self.tracker.capacity()
    }

    /// Indices of the live elements, oldest first.
    pub(crate) fn live_slots(&self) -> impl Iterator<Item = usize> {
        (0..self.tracker.len()).map(move |offset| self.slot(offset))
    }

    fn advance_write(&mut self) -> usize {
        let index = self.write;
        self.write = (self.write + 1) % self.tracker.capacity();
        self.tracker.grow();
        index
    }

    fn advance_read(&mut self) {
        self.read = (self.read + 1) % self.tracker.capacity();
        self.tracker.shrink();
    }

    pub(crate) fn reset(&mut self) {
        self.tracker.reset();
        self.read = 0;
        self.write = 0;
    }
}

/// A FIFO queue over borrowed storage.
///
/// # Concurrency
///
/// A view is single-threaded. Concurrent producers and consumers need
/// external synchronisation.
pub struct QueueView<'a, T, S = DefaultSignal> {
    storage: &'a mut [T],
    state: &'a mut QueueState,
    signal: &'a S,
}

impl<'a, T, S: ErrorSignal> QueueView<'a, T, S> {
    /// Binds a view to `storage` and `state`.
    ///
    /// # Panics
    ///
    /// Panics if the storage is empty or its length differs from the
    /// capacity recorded in `state`.
    pub fn new(storage: &'a mut [T], state: &'a mut QueueState, signal: &'a S) -> Self {
        assert!(!storage.is_empty(), "queue storage must not be empty");
        assert_eq!(
            storage.len(),
            state.tracker.capacity(),
            "queue storage length must equal its capacity"
        );
        Self::from_parts(storage, state, signal)
    }

    pub(crate) fn from_parts(
        storage: &'a mut [T],
        state: &'a mut QueueState,
        signal: &'a S,
    ) -> Self {
        Self {
            storage,
            state,
            signal,
        }
    }

    /// Number of queued elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.tracker.len()
    }

    /// Maximum number of elements.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.state.tracker.capacity()
    }

    /// Returns true if the queue holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.tracker.is_empty()
    }

    /// Returns true if the queue holds `capacity()` elements.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.state.tracker.is_full()
    }

    /// Number of free slots.
    #[must_use]
    pub fn available(&self) -> usize {
        self.state.tracker.available()
    }

    /// Enqueues `value` at the back.
    ///
    /// A full queue is never written to: the value is dropped and
    /// [`ErrorKind::QueueFull`] goes to the signal.
    ///
    /// # Errors
    ///
    /// Returns the signalled error if the strategy raises it.
    #[track_caller]
    pub fn push(&mut self, value: T) -> Result<(), ContainerError> {
        if self.is_full() {
            let error = ContainerError::new(ErrorKind::QueueFull, self.capacity());
            return self.signal.report(error);
        }
        let index = self.state.advance_write();
        self.storage[index] = value;
        Ok(())
    }

    /// Dequeues the front element.
    ///
    /// The slot keeps its value until the write cursor comes round again.
    ///
    /// # Errors
    ///
    /// On an empty queue, [`ErrorKind::QueueEmpty`] goes to the signal and
    /// is returned if the strategy raises it.
    #[track_caller]
    pub fn pop(&mut self) -> Result<(), ContainerError> {
        if self.is_empty() {
            let error = ContainerError::new(ErrorKind::QueueEmpty, self.capacity());
            return self.signal.report(error);
        }
        self.state.advance_read();
        Ok(())
    }

    /// Returns the oldest element.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        let index = self.state.front_index()?;
        Some(&self.storage[index])
    }

    /// Returns the oldest element mutably.
    #[must_use]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        let index = self.state.front_index()?;
        Some(&mut self.storage[index])
    }

    /// Returns the newest element.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        let index = self.state.back_index()?;
        Some(&self.storage[index])
    }

    /// Returns the newest element mutably.
    #[must_use]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        let index = self.state.back_index()?;
        Some(&mut self.storage[index])
    }

    /// Forgets every element and rewinds both cursors.
    pub fn clear(&mut self) {
        crate::qtrace!("queue: clearing {} elements", self.len());
        self.state.reset();
    }
}

impl<T: fmt::Debug, S> fmt::Debug for QueueView<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.state.live_slots().map(|index| &self.storage[index]))
            .finish()
    }
}
