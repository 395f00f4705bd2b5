//! LIFO mechanics over storage the stack does not own.
//!
//! This module provides [`StackView`], the capacity-erased half of a fixed
//! stack. A view borrows three things for its lifetime:
//!
//! - a flat slice of slots (`&mut [T]`), whose length is the capacity
//! - the cursor state ([`StackState`]): element count and top index
//! - the [`ErrorSignal`] strategy that receives capacity violations
//!
//! [`FixedStack`](crate::FixedStack) owns all three and hands out a view on
//! demand, but a view can equally be built over caller-supplied storage.
//!
//! # Storage model
//!
//! Every slot always holds a valid `T`. Popping only moves the cursor; the
//! old value stays in its slot until a later push overwrites it.
//!
//! # Examples
//!
//! ```
//! use quark_fixed::{RaiseSignal, StackState, StackView};
//!
//! let mut slots = [0u32; 4];
//! let mut state = StackState::new(slots.len());
//! let mut stack = StackView::new(&mut slots, &mut state, &RaiseSignal);
//!
//! stack.push(1).unwrap();
//! stack.push(2).unwrap();
//! assert_eq!(stack.top(), Some(&2));
//!
//! stack.pop().unwrap();
//! assert_eq!(stack.top(), Some(&1));
//! ```

use core::fmt;

use crate::error::{ContainerError, ErrorKind};
use crate::signal::{DefaultSignal, ErrorSignal};
use crate::tracker::SizeTracker;

/// Element count and top cursor of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StackState {
    tracker: SizeTracker,
    top: usize,
}

impl StackState {
    /// Creates the state of an empty stack with `capacity` slots.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self {
            tracker: SizeTracker::new(capacity),
            top: 0,
        }
    }

    /// Occupancy of the stack.
    #[must_use]
    pub const fn tracker(&self) -> &SizeTracker {
        &self.tracker
    }

    /// Index of the most recently pushed element, if any.
    #[must_use]
    pub const fn top_index(&self) -> Option<usize> {
        if self.tracker.is_empty() {
            None
        } else {
            Some(self.top)
        }
    }

    fn advance(&mut self) -> usize {
        self.top = self.tracker.len();
        self.tracker.grow();
        self.top
    }

    fn retreat(&mut self) {
        self.tracker.shrink();
        self.top = self.tracker.len().saturating_sub(1);
    }

    pub(crate) fn reset(&mut self) {
        self.tracker.reset();
        self.top = 0;
    }
}

/// A LIFO stack over borrowed storage.
///
/// # Concurrency
///
/// A view is single-threaded; the borrow checker already rules out two
/// views over the same storage.
pub struct StackView<'a, T, S = DefaultSignal> {
    storage: &'a mut [T],
    state: &'a mut StackState,
    signal: &'a S,
}

impl<'a, T, S: ErrorSignal> StackView<'a, T, S> {
    /// Binds a view to `storage` and `state`.
    ///
    /// # Panics
    ///
    /// Panics if the storage is empty or its length differs from the
    /// capacity recorded in `state`.
    pub fn new(storage: &'a mut [T], state: &'a mut StackState, signal: &'a S) -> Self {
        assert!(!storage.is_empty(), "stack storage must not be empty");
        assert_eq!(
            storage.len(),
            state.tracker.capacity(),
            "stack storage length must equal its capacity"
        );
        Self::from_parts(storage, state, signal)
    }

    pub(crate) fn from_parts(
        storage: &'a mut [T],
        state: &'a mut StackState,
        signal: &'a S,
    ) -> Self {
        Self {
            storage,
            state,
            signal,
        }
    }

    /// Number of elements on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.tracker.len()
    }

    /// Maximum number of elements.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.state.tracker.capacity()
    }

    /// Returns true if the stack holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.tracker.is_empty()
    }

    /// Returns true if the stack holds `capacity()` elements.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.state.tracker.is_full()
    }

    /// Number of free slots.
    #[must_use]
    pub fn available(&self) -> usize {
        self.state.tracker.available()
    }

    /// Pushes `value` on top of the stack.
    ///
    /// A full stack is never written to: the value is dropped and
    /// [`ErrorKind::StackFull`] goes to the signal.
    ///
    /// # Errors
    ///
    /// Returns the signalled error if the strategy raises it.
    #[track_caller]
    pub fn push(&mut self, value: T) -> Result<(), ContainerError> {
        if self.is_full() {
            return self.overflow();
        }
        let index = self.state.advance();
        self.storage[index] = value;
        Ok(())
    }

    /// Reserves the next slot and returns it for in-place assignment.
    ///
    /// The slot still holds whatever value was last stored there; the
    /// caller is expected to overwrite it.
    ///
    /// When the stack is full, [`ErrorKind::StackFull`] goes to the signal.
    /// A strategy that does not raise gets back the *current* top element,
    /// not a fresh slot. Check [`is_full`](Self::is_full) first if the
    /// strategy may be [`HandlerSignal`](crate::HandlerSignal).
    ///
    /// # Errors
    ///
    /// Returns the signalled error if the strategy raises it.
    #[track_caller]
    pub fn push_slot(&mut self) -> Result<&mut T, ContainerError> {
        reserve_slot(self.storage, self.state, self.signal)
    }

    /// Removes the top element.
    ///
    /// The slot keeps its value until a later push overwrites it.
    ///
    /// # Errors
    ///
    /// On an empty stack, [`ErrorKind::StackEmpty`] goes to the signal and
    /// is returned if the strategy raises it.
    #[track_caller]
    pub fn pop(&mut self) -> Result<(), ContainerError> {
        if self.is_empty() {
            let error = ContainerError::new(ErrorKind::StackEmpty, self.capacity());
            return self.signal.report(error);
        }
        self.state.retreat();
        Ok(())
    }

    /// Returns the most recently pushed element.
    #[must_use]
    pub fn top(&self) -> Option<&T> {
        self.state.top_index().map(|index| &self.storage[index])
    }

    /// Returns the most recently pushed element mutably.
    #[must_use]
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.state.top_index().map(|index| &mut self.storage[index])
    }

    /// Forgets every element without touching the slots.
    pub fn clear(&mut self) {
        crate::qtrace!("stack: clearing {} elements", self.len());
        self.state.reset();
    }

    #[track_caller]
    fn overflow(&self) -> Result<(), ContainerError> {
        let error = ContainerError::new(ErrorKind::StackFull, self.capacity());
        self.signal.report(error)
    }
}

/// Advances the stack by one slot and returns it; on overflow, returns the
/// current top if the signal does not raise.
#[track_caller]
pub(crate) fn reserve_slot<'s, T, S: ErrorSignal>(
    storage: &'s mut [T],
    state: &mut StackState,
    signal: &S,
) -> Result<&'s mut T, ContainerError> {
    let index = if state.tracker.is_full() {
        let error = ContainerError::new(ErrorKind::StackFull, state.tracker.capacity());
        signal.report(error)?;
        state.top
    } else {
        state.advance()
    };
    Ok(&mut storage[index])
}

impl<T: fmt::Debug, S> fmt::Debug for StackView<'_, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(&self.storage[..self.state.tracker.len()])
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{HandlerSignal, RaiseSignal};
    use crate::testing::Recorder;
    use std::format;

    #[test]
    fn lifo_order() {
        let mut slots = [0i32; 4];
        let mut state = StackState::new(4);
        let mut stack = StackView::new(&mut slots, &mut state, &RaiseSignal);

        for v in 1..=4 {
            stack.push(v).unwrap();
        }
        assert!(stack.is_full());
        for expected in (1..=4).rev() {
            assert_eq!(stack.top(), Some(&expected));
            stack.pop().unwrap();
        }
        assert!(stack.is_empty());
        assert_eq!(stack.top(), None);
    }

    #[test]
    fn push_on_full_raises_and_keeps_state() {
        let mut slots = [0i32; 2];
        let mut state = StackState::new(2);
        let mut stack = StackView::new(&mut slots, &mut state, &RaiseSignal);
        stack.push(1).unwrap();
        stack.push(2).unwrap();

        let err = stack.push(3).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StackFull);
        assert_eq!(err.capacity(), 2);
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top(), Some(&2));
        drop(stack);
        assert_eq!(slots, [1, 2]);
    }

    #[test]
    fn overflow_reports_exactly_once() {
        let recorder = Recorder::swallowing();
        let mut slots = [0i32; 1];
        let mut state = StackState::new(1);
        let mut stack = StackView::new(&mut slots, &mut state, &recorder);
        stack.push(7).unwrap();

        assert_eq!(stack.push(8), Ok(()));
        assert_eq!(recorder.calls(), 1);
        assert_eq!(recorder.last(), Some(ErrorKind::StackFull));
        assert_eq!(stack.top(), Some(&7));
    }

    #[test]
    fn pop_on_empty_is_signalled() {
        let mut slots = [0u8; 3];
        let mut state = StackState::new(3);
        let mut stack = StackView::new(&mut slots, &mut state, &RaiseSignal);

        let err = stack.pop().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StackEmpty);
        assert!(stack.is_empty());
    }

    #[test]
    fn push_slot_assigns_in_place() {
        let mut slots = [0u64; 3];
        let mut state = StackState::new(3);
        let mut stack = StackView::new(&mut slots, &mut state, &RaiseSignal);

        *stack.push_slot().unwrap() = 11;
        *stack.push_slot().unwrap() = 22;
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top(), Some(&22));
    }

    #[test]
    fn push_slot_on_full_raises() {
        let mut slots = [0u8; 1];
        let mut state = StackState::new(1);
        let mut stack = StackView::new(&mut slots, &mut state, &RaiseSignal);
        stack.push(5).unwrap();

        let err = stack.push_slot().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StackFull);
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn push_slot_on_full_without_raise_returns_current_top() {
        let recorder = Recorder::swallowing();
        let mut slots = [0u8; 2];
        let mut state = StackState::new(2);
        let mut stack = StackView::new(&mut slots, &mut state, &recorder);
        stack.push(1).unwrap();
        stack.push(2).unwrap();

        let slot = stack.push_slot().unwrap();
        assert_eq!(*slot, 2);
        assert_eq!(recorder.calls(), 1);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn handler_signal_makes_overflow_a_no_op() {
        let _guard = crate::log::tests::capture_logs();
        crate::signal::reset_error_handler();

        let mut slots = [0i32; 1];
        let mut state = StackState::new(1);
        let mut stack = StackView::new(&mut slots, &mut state, &HandlerSignal);
        stack.push(1).unwrap();
        assert_eq!(stack.push(2), Ok(()));
        assert_eq!(stack.top(), Some(&1));
        crate::log::clear_log_fn();

        let logs = crate::log::tests::captured();
        assert_eq!(logs.len(), 1);
        assert!(logs[0].1.starts_with("stack full"));
    }

    #[test]
    fn popped_slot_is_overwritten_lazily() {
        let mut slots = [0i32; 2];
        let mut state = StackState::new(2);
        let mut stack = StackView::new(&mut slots, &mut state, &RaiseSignal);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.pop().unwrap();
        drop(stack);
        assert_eq!(slots, [1, 2]);

        let mut stack = StackView::new(&mut slots, &mut state, &RaiseSignal);
        stack.push(3).unwrap();
        drop(stack);
        assert_eq!(slots, [1, 3]);
    }

    #[test]
    fn clear_resets_cursor() {
        let mut slots = [0i32; 3];
        let mut state = StackState::new(3);
        let mut stack = StackView::new(&mut slots, &mut state, &RaiseSignal);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.available(), 3);
        stack.push(9).unwrap();
        assert_eq!(stack.top(), Some(&9));
    }

    #[test]
    fn top_mut_edits_in_place() {
        let mut slots = [0i32; 2];
        let mut state = StackState::new(2);
        let mut stack = StackView::new(&mut slots, &mut state, &RaiseSignal);
        stack.push(4).unwrap();
        *stack.top_mut().unwrap() += 1;
        assert_eq!(stack.top(), Some(&5));
    }

    #[test]
    fn debug_lists_live_elements() {
        let mut slots = [0i32; 3];
        let mut state = StackState::new(3);
        let mut stack = StackView::new(&mut slots, &mut state, &RaiseSignal);
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        assert_eq!(format!("{stack:?}"), "[1, 2]");
    }

    #[test]
    #[should_panic(expected = "stack storage length must equal its capacity")]
    fn mismatched_storage_panics() {
        let mut slots = [0i32; 3];
        let mut state = StackState::new(2);
        let _ = StackView::new(&mut slots, &mut state, &RaiseSignal);
    }
}
