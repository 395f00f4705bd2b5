//! Fixed-capacity stack and queue containers that never allocate.
//!
//! This crate provides LIFO and FIFO containers whose capacity is fixed at
//! compile time and whose storage is a flat inline array. They are meant for
//! environments where heap allocation is unavailable or undesirable
//! (embedded systems, kernels, interrupt handlers, real-time loops).
//!
//! # Overview
//!
//! - [`SizeTracker`] - element count and capacity bookkeeping
//! - [`StackView`] / [`QueueView`] - LIFO / FIFO mechanics over storage the
//!   view does not own
//! - [`FixedStack`] / [`FixedQueue`] - own `N` slots inline and borrow a view
//!   for every mutating call
//! - [`ErrorSignal`] - the strategy that receives capacity violations
//!
//! # Error signalling
//!
//! A push on a full container or a pop on an empty one never touches the
//! slots. The violation is reported to the container's [`ErrorSignal`]:
//!
//! - [`RaiseSignal`] returns the [`ContainerError`] to the caller.
//! - [`HandlerSignal`] calls the handler registered with
//!   [`set_error_handler`] and lets the operation complete as a no-op.
//!
//! [`DefaultSignal`] is [`RaiseSignal`] unless the crate is compiled with
//! `RUSTFLAGS="--cfg quark_signal_handler"`. Any container can name its own
//! strategy instead.
//!
//! # Concurrency
//!
//! Nothing here is synchronised. Using one container from several threads
//! at once requires external locking.
//!
//! # Examples
//!
//! ```
//! use quark_fixed::{ErrorKind, FixedQueue, FixedStack, RaiseSignal};
//!
//! let mut stack = FixedStack::<i32, 2, RaiseSignal>::with_signal(RaiseSignal);
//! stack.push(1).unwrap();
//! stack.push(2).unwrap();
//! assert_eq!(stack.push(3).unwrap_err().kind(), ErrorKind::StackFull);
//!
//! let mut queue = FixedQueue::<i32, 2>::new();
//! queue.push(1).unwrap();
//! queue.push(2).unwrap();
//! queue.pop().unwrap();
//! assert_eq!(queue.front(), Some(&2));
//! ```
//!
//! # Performance Characteristics
//!
//! Push, pop and element access are O(1). `swap` is O(N).

#![cfg_attr(not(test), no_std)]

pub mod log;

mod error;
mod fixed_queue;
mod fixed_stack;
mod queue;
mod signal;
mod stack;
mod tracker;

#[cfg(test)]
mod testing;

pub use error::{ContainerError, ErrorKind};
pub use fixed_queue::{FixedQueue, swap_queues};
pub use fixed_stack::{FixedStack, swap_stacks};
pub use queue::{QueueState, QueueView};
pub use signal::{
    DefaultSignal, ErrorHandlerFn, ErrorSignal, HandlerSignal, RaiseSignal, error_handler,
    reset_error_handler, set_error_handler,
};
pub use stack::{StackState, StackView};
pub use tracker::SizeTracker;
