//! Fixed-capacity queue that owns its storage inline.

use core::fmt;

use crate::error::ContainerError;
use crate::queue::{QueueState, QueueView};
use crate::signal::{DefaultSignal, ErrorSignal};

/// A FIFO queue of at most `N` elements stored inline as a circular buffer.
///
/// Mirrors [`FixedStack`](crate::FixedStack): the mechanics live in
/// [`QueueView`] and the owner borrows one for each mutating call. All `N`
/// slots are usable.
///
/// # Examples
///
/// ```
/// use quark_fixed::FixedQueue;
///
/// let mut queue = FixedQueue::<i32, 3>::new();
/// queue.push(1).unwrap();
/// queue.push(2).unwrap();
/// queue.push(3).unwrap();
/// assert!(queue.is_full());
///
/// queue.pop().unwrap();
/// assert_eq!(queue.front(), Some(&2));
///
/// queue.push(4).unwrap();
/// assert_eq!(queue.back(), Some(&4));
/// assert_eq!(queue.len(), 3);
/// ```
#[derive(Clone)]
pub struct FixedQueue<T, const N: usize, S = DefaultSignal> {
    buf: [T; N],
    state: QueueState,
    signal: S,
}

impl<T: Default, const N: usize> FixedQueue<T, N, DefaultSignal> {
    /// Creates an empty queue using the program-wide signal strategy.
    ///
    /// Every slot is filled with `T::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_signal(DefaultSignal::default())
    }
}

impl<T: Default, const N: usize, S: ErrorSignal> FixedQueue<T, N, S> {
    /// Creates an empty queue that reports through `signal`.
    #[must_use]
    pub fn with_signal(signal: S) -> Self {
        Self::from_fn_with_signal(|_| T::default(), signal)
    }
}

impl<T, const N: usize, S: ErrorSignal + Default> FixedQueue<T, N, S> {
    /// Creates an empty queue whose slot `i` initially holds `f(i)`.
    #[must_use]
    pub fn from_fn(f: impl FnMut(usize) -> T) -> Self {
        Self::from_fn_with_signal(f, S::default())
    }
}

impl<T, const N: usize, S: ErrorSignal> FixedQueue<T, N, S> {
    /// The capacity `N`.
    pub const CAPACITY: usize = N;

    /// Creates an empty queue from a slot initialiser and a signal.
    #[must_use]
    pub fn from_fn_with_signal(f: impl FnMut(usize) -> T, signal: S) -> Self {
        const { assert!(N > 0, "FixedQueue capacity must be non-zero") };
        Self {
            buf: core::array::from_fn(f),
            state: QueueState::new(N),
            signal,
        }
    }

    /// Borrows the capacity-erased view over this queue.
    pub fn view(&mut self) -> QueueView<'_, T, S> {
        QueueView::from_parts(&mut self.buf, &mut self.state, &self.signal)
    }

    /// The signal strategy of this queue.
    #[must_use]
    pub fn signal(&self) -> &S {
        &self.signal
    }

    /// Number of queued elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.tracker().len()
    }

    /// Maximum number of elements, always `N`.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns true if the queue holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.tracker().is_empty()
    }

    /// Returns true if the queue holds `N` elements.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.state.tracker().is_full()
    }

    /// Number of free slots.
    #[must_use]
    pub fn available(&self) -> usize {
        self.state.tracker().available()
    }

    /// Enqueues `value` at the back. See [`QueueView::push`].
    ///
    /// # Errors
    ///
    /// Returns the signalled [`ErrorKind::QueueFull`](crate::ErrorKind::QueueFull)
    /// if the strategy raises it.
    #[track_caller]
    pub fn push(&mut self, value: T) -> Result<(), ContainerError> {
        self.view().push(value)
    }

    /// Dequeues the front element. See [`QueueView::pop`].
    ///
    /// # Errors
    ///
    /// Returns the signalled [`ErrorKind::QueueEmpty`](crate::ErrorKind::QueueEmpty)
    /// if the strategy raises it.
    #[track_caller]
    pub fn pop(&mut self) -> Result<(), ContainerError> {
        self.view().pop()
    }

    /// Returns the oldest element.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.state.front_index().map(|index| &self.buf[index])
    }

    /// Returns the oldest element mutably.
    #[must_use]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.state.front_index().map(|index| &mut self.buf[index])
    }

    /// Returns the newest element.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        self.state.back_index().map(|index| &self.buf[index])
    }

    /// Returns the newest element mutably.
    #[must_use]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.state.back_index().map(|index| &mut self.buf[index])
    }

    /// Forgets every element and rewinds both cursors.
    pub fn clear(&mut self) {
        self.view().clear();
    }

    /// Exchanges slots, cursors and count with `other` in O(N).
    ///
    /// Each queue keeps its own signal strategy.
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap_with_slice(&mut other.buf);
        core::mem::swap(&mut self.state, &mut other.state);
    }
}

/// Exchanges the contents of two queues of the same capacity.
pub fn swap_queues<T, const N: usize, S: ErrorSignal>(
    first: &mut FixedQueue<T, N, S>,
    second: &mut FixedQueue<T, N, S>,
) {
    first.swap(second);
}

impl<T: Default, const N: usize, S: ErrorSignal + Default> Default for FixedQueue<T, N, S> {
    fn default() -> Self {
        Self::with_signal(S::default())
    }
}

impl<T: fmt::Debug, const N: usize, S> fmt::Debug for FixedQueue<T, N, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elements = DebugRing {
            buf: &self.buf,
            state: &self.state,
        };
        f.debug_struct("FixedQueue")
            .field("capacity", &N)
            .field("elements", &elements)
            .finish()
    }
}

struct DebugRing<'a, T> {
    buf: &'a [T],
    state: &'a QueueState,
}

impl<T: fmt::Debug> fmt::Debug for DebugRing<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.state.live_slots().map(|index| &self.buf[index]))
            .finish()
    }
}
