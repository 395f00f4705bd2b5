//! Fixed-capacity stack that owns its storage inline.

use core::fmt;

use crate::error::ContainerError;
use crate::signal::{DefaultSignal, ErrorSignal};
use crate::stack::{StackState, StackView, reserve_slot};

/// A LIFO stack of at most `N` elements stored inline.
///
/// All mechanics live in [`StackView`]; `FixedStack` owns the `N` slots,
/// the cursor state and the signal strategy, and borrows a view for each
/// mutating call. Use [`view`](Self::view) to hand the stack to code that
/// should not care about `N`.
///
/// # Type Parameters
///
/// - `T`: The element type. Every slot always holds a valid `T`.
/// - `N`: The capacity; must be non-zero.
/// - `S`: The [`ErrorSignal`] strategy, [`DefaultSignal`] unless named.
///
/// # Examples
///
/// ```
/// use quark_fixed::{ErrorKind, FixedStack, RaiseSignal};
///
/// let mut stack = FixedStack::<i32, 2, RaiseSignal>::with_signal(RaiseSignal);
/// stack.push(1).unwrap();
/// stack.push(2).unwrap();
/// assert!(stack.is_full());
///
/// let err = stack.push(3).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::StackFull);
/// assert_eq!(stack.top(), Some(&2));
/// ```
#[derive(Clone)]
pub struct FixedStack<T, const N: usize, S = DefaultSignal> {
    buf: [T; N],
    state: StackState,
    signal: S,
}

impl<T: Default, const N: usize> FixedStack<T, N, DefaultSignal> {
    /// Creates an empty stack using the program-wide signal strategy.
    ///
    /// Every slot is filled with `T::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_signal(DefaultSignal::default())
    }
}

impl<T: Default, const N: usize, S: ErrorSignal> FixedStack<T, N, S> {
    /// Creates an empty stack that reports through `signal`.
    #[must_use]
    pub fn with_signal(signal: S) -> Self {
        Self::from_fn_with_signal(|_| T::default(), signal)
    }
}

impl<T, const N: usize, S: ErrorSignal + Default> FixedStack<T, N, S> {
    /// Creates an empty stack whose slot `i` initially holds `f(i)`.
    ///
    /// Useful for element types without a `Default`.
    #[must_use]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self::from_fn_with_signal(f, S::default())
    }
}

impl<T, const N: usize, S: ErrorSignal> FixedStack<T, N, S> {
    /// Creates an empty stack from a slot initialiser and a signal.
    #[must_use]
    pub fn from_fn_with_signal(f: impl FnMut(usize) -> T, signal: S) -> Self {
        const { assert!(N > 0, "FixedStack capacity must be non-zero") };
        Self {
            buf: core::array::from_fn(f),
            state: StackState::new(N),
            signal,
        }
    }

    /// The capacity `N`.
    pub const CAPACITY: usize = N;

    /// Borrows the capacity-erased view over this stack.
    pub fn view(&mut self) -> StackView<'_, T, S> {
        StackView::from_parts(&mut self.buf, &mut self.state, &self.signal)
    }

    /// The signal strategy of this stack.
    #[must_use]
    pub fn signal(&self) -> &S {
        &self.signal
    }

    /// Number of elements on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.tracker().len()
    }

    /// Maximum number of elements, always `N`.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns true if the stack holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.tracker().is_empty()
    }

    /// Returns true if the stack holds `N` elements.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.state.tracker().is_full()
    }

    /// Number of free slots.
    #[must_use]
    pub fn available(&self) -> usize {
        self.state.tracker().available()
    }

    /// Pushes `value` on top. See [`StackView::push`].
    ///
    /// # Errors
    ///
    /// Returns the signalled [`ErrorKind::StackFull`](crate::ErrorKind::StackFull)
    /// if the strategy raises it.
    #[track_caller]
    pub fn push(&mut self, value: T) -> Result<(), ContainerError> {
        self.view().push(value)
    }

    /// Reserves the next slot for in-place assignment. See
    /// [`StackView::push_slot`] for the behaviour on a full stack.
    ///
    /// # Errors
    ///
    /// Returns the signalled [`ErrorKind::StackFull`](crate::ErrorKind::StackFull)
    /// if the strategy raises it.
    #[track_caller]
    pub fn push_slot(&mut self) -> Result<&mut T, ContainerError> {
        reserve_slot(&mut self.buf, &mut self.state, &self.signal)
    }

    /// Removes the top element. See [`StackView::pop`].
    ///
    /// # Errors
    ///
    /// Returns the signalled [`ErrorKind::StackEmpty`](crate::ErrorKind::StackEmpty)
    /// if the strategy raises it.
    #[track_caller]
    pub fn pop(&mut self) -> Result<(), ContainerError> {
        self.view().pop()
    }

    /// Returns the most recently pushed element.
    #[must_use]
    pub fn top(&self) -> Option<&T> {
        self.state.top_index().map(|index| &self.buf[index])
    }

    /// Returns the most recently pushed element mutably.
    #[must_use]
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.state.top_index().map(|index| &mut self.buf[index])
    }

    /// Forgets every element without touching the slots.
    pub fn clear(&mut self) {
        self.view().clear();
    }

    /// Exchanges slots, cursor and count with `other` in O(N).
    ///
    /// Each stack keeps its own signal strategy.
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap_with_slice(&mut other.buf);
        core::mem::swap(&mut self.state, &mut other.state);
    }
}

/// Exchanges the contents of two stacks of the same capacity.
pub fn swap_stacks<T, const N: usize, S: ErrorSignal>(
    first: &mut FixedStack<T, N, S>,
    second: &mut FixedStack<T, N, S>,
) {
    first.swap(second);
}

impl<T: Default, const N: usize, S: ErrorSignal + Default> Default for FixedStack<T, N, S> {
    fn default() -> Self {
        Self::with_signal(S::default())
    }
}

impl<T: fmt::Debug, const N: usize, S> fmt::Debug for FixedStack<T, N, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedStack")
            .field("capacity", &N)
            .field("elements", &&self.buf[..self.state.tracker().len()])
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::signal::RaiseSignal;
    use crate::testing::Recorder;
    use std::format;

    #[test]
    fn two_slot_scenario() {
        let mut stack = FixedStack::<i32, 2, Recorder>::with_signal(Recorder::swallowing());

        stack.push(1).unwrap();
        assert_eq!(stack.top(), Some(&1));
        stack.push(2).unwrap();
        assert_eq!(stack.top(), Some(&2));
        assert!(stack.is_full());

        assert_eq!(stack.push(3), Ok(()));
        assert_eq!(stack.signal().calls(), 1);
        assert_eq!(stack.signal().last(), Some(ErrorKind::StackFull));
        assert_eq!(stack.top(), Some(&2));

        stack.pop().unwrap();
        assert_eq!(stack.top(), Some(&1));
    }

    #[test]
    fn error_points_at_caller() {
        let mut stack = FixedStack::<u8, 1, RaiseSignal>::with_signal(RaiseSignal);
        stack.push(1).unwrap();
        let line = line!() + 1;
        let err = stack.push(2).unwrap_err();
        assert_eq!(err.location().line(), line);
        assert!(err.location().file().ends_with("fixed_stack.rs"));
    }

    #[test]
    fn swap_exchanges_contents() {
        let mut a = FixedStack::<i32, 3>::new();
        let mut b = FixedStack::<i32, 3>::new();
        a.push(1).unwrap();
        a.push(2).unwrap();
        b.push(9).unwrap();

        swap_stacks(&mut a, &mut b);
        assert_eq!(a.len(), 1);
        assert_eq!(a.top(), Some(&9));
        assert_eq!(b.len(), 2);
        assert_eq!(b.top(), Some(&2));
        b.pop().unwrap();
        assert_eq!(b.top(), Some(&1));
    }

    #[test]
    fn view_erases_capacity() {
        fn fill<S: ErrorSignal>(mut stack: StackView<'_, u32, S>) -> usize {
            let mut pushed = 0;
            while !stack.is_full() {
                stack.push(7).unwrap();
                pushed += 1;
            }
            pushed
        }

        let mut small = FixedStack::<u32, 2>::new();
        let mut large = FixedStack::<u32, 5>::new();
        assert_eq!(fill(small.view()), 2);
        assert_eq!(fill(large.view()), 5);
        assert!(large.is_full());
    }

    #[test]
    fn from_fn_for_types_without_default() {
        #[derive(Debug, PartialEq)]
        struct Token(u16);

        let token = |i: usize| Token(u16::try_from(i).unwrap());
        let mut stack = FixedStack::<Token, 2, RaiseSignal>::from_fn(token);
        assert!(stack.is_empty());
        *stack.push_slot().unwrap() = Token(40);
        assert_eq!(stack.top(), Some(&Token(40)));
    }

    #[test]
    fn push_slot_writes_in_place() {
        let mut stack = FixedStack::<[u8; 4], 2>::new();
        stack.push_slot().unwrap().copy_from_slice(b"abcd");
        assert_eq!(stack.top(), Some(b"abcd"));
    }

    #[test]
    fn clear_and_reuse() {
        let mut stack = FixedStack::<i32, 2>::default();
        stack.push(1).unwrap();
        stack.push(2).unwrap();
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.available(), 2);
        stack.push(3).unwrap();
        assert_eq!(stack.top(), Some(&3));
    }

    #[test]
    fn debug_shows_live_elements() {
        let mut stack = FixedStack::<i32, 3>::new();
        stack.push(4).unwrap();
        assert_eq!(
            format!("{stack:?}"),
            "FixedStack { capacity: 3, elements: [4] }"
        );
    }

    #[test]
    fn capacity_constant() {
        assert_eq!(FixedStack::<u8, 16>::CAPACITY, 16);
        assert_eq!(FixedStack::<u8, 16>::new().capacity(), 16);
    }
}
