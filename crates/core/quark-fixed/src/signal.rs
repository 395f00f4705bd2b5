//! Error signalling strategies.
//!
//! Every capacity violation is routed through an [`ErrorSignal`]. The
//! strategy decides what the caller observes:
//!
//! | Strategy | `report` returns | Caller observes |
//! |----------|------------------|-----------------|
//! | [`RaiseSignal`] | `Err(error)` | the operation fails with the typed error |
//! | [`HandlerSignal`] | `Ok(())` after calling the global handler | the operation is a no-op |
//!
//! In both cases the container state is left unchanged.
//!
//! [`DefaultSignal`] is the program-wide choice. It is [`RaiseSignal`] unless
//! the crate is compiled with `--cfg quark_signal_handler`.

use core::sync::atomic::{AtomicPtr, Ordering};

use crate::error::ContainerError;

/// Receives container errors and decides whether they unwind the operation.
pub trait ErrorSignal {
    /// Reports `error`.
    ///
    /// # Errors
    ///
    /// Returning `Err` makes the container operation fail with that error.
    /// Returning `Ok(())` turns the operation into a no-op.
    fn report(&self, error: ContainerError) -> Result<(), ContainerError>;
}

impl<S: ErrorSignal + ?Sized> ErrorSignal for &S {
    fn report(&self, error: ContainerError) -> Result<(), ContainerError> {
        (**self).report(error)
    }
}

/// Hands every error back to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RaiseSignal;

impl ErrorSignal for RaiseSignal {
    fn report(&self, error: ContainerError) -> Result<(), ContainerError> {
        crate::qdebug!("raising {}", error);
        Err(error)
    }
}

/// Invokes the global error handler and lets the operation continue as a
/// no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandlerSignal;

impl ErrorSignal for HandlerSignal {
    fn report(&self, error: ContainerError) -> Result<(), ContainerError> {
        error_handler()(&error);
        Ok(())
    }
}

/// The strategy used by containers that do not name one explicitly.
#[cfg(not(quark_signal_handler))]
pub type DefaultSignal = RaiseSignal;

/// The strategy used by containers that do not name one explicitly.
#[cfg(quark_signal_handler)]
pub type DefaultSignal = HandlerSignal;

// ---------------------------------------------------------------------------
// Global handler used by `HandlerSignal`
// ---------------------------------------------------------------------------

/// The signature of the global error handler.
pub type ErrorHandlerFn = fn(&ContainerError);

fn log_error(error: &ContainerError) {
    crate::qerr!("{}", error);
}

static ERROR_HANDLER: AtomicPtr<()> = AtomicPtr::new(log_error as *mut ());

/// Registers the handler invoked by [`HandlerSignal`].
///
/// The handler may log, halt or record the error. If it returns, the
/// rejected operation completes as a no-op.
pub fn set_error_handler(f: ErrorHandlerFn) {
    ERROR_HANDLER.store(f as *mut (), Ordering::Release);
}

/// Restores the default handler, which logs at [`LogLevel::Error`].
///
/// [`LogLevel::Error`]: crate::log::LogLevel::Error
pub fn reset_error_handler() {
    set_error_handler(log_error);
}

/// Returns the currently registered handler.
#[must_use]
pub fn error_handler() -> ErrorHandlerFn {
    let ptr = ERROR_HANDLER.load(Ordering::Acquire);
    // SAFETY: only valid `ErrorHandlerFn` pointers are ever stored into
    // ERROR_HANDLER, see `set_error_handler`.
    unsafe { core::mem::transmute::<*mut (), ErrorHandlerFn>(ptr) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::log::tests::{capture_logs, captured};
    use crate::log::{LogLevel, clear_log_fn};
    use core::sync::atomic::AtomicUsize;

    static HANDLED: AtomicUsize = AtomicUsize::new(0);

    fn count(_error: &ContainerError) {
        HANDLED.fetch_add(1, Ordering::SeqCst);
    }

    #[test]
    fn raise_returns_error() {
        let err = ContainerError::new(ErrorKind::StackFull, 4);
        assert_eq!(RaiseSignal.report(err), Err(err));
    }

    #[test]
    fn handler_invokes_registered_fn_and_succeeds() {
        let _guard = capture_logs();
        HANDLED.store(0, Ordering::SeqCst);
        set_error_handler(count);

        let err = ContainerError::new(ErrorKind::QueueEmpty, 1);
        assert_eq!(HandlerSignal.report(err), Ok(()));
        assert_eq!(HANDLED.load(Ordering::SeqCst), 1);

        reset_error_handler();
        clear_log_fn();
    }

    #[test]
    fn default_handler_logs_error() {
        let _guard = capture_logs();
        reset_error_handler();

        let err = ContainerError::new(ErrorKind::QueueFull, 3);
        assert_eq!(HandlerSignal.report(err), Ok(()));
        clear_log_fn();

        let logs = captured();
        assert_eq!(logs.len(), 1);
        assert_eq!(logs[0].0, LogLevel::Error);
        assert!(logs[0].1.starts_with("queue full (capacity 3)"));
    }

    #[cfg(not(quark_signal_handler))]
    #[test]
    fn default_signal_raises() {
        let mut stack = crate::FixedStack::<i32, 1>::new();
        stack.push(1).unwrap();
        let err = stack.push(2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StackFull);
    }

    #[cfg(quark_signal_handler)]
    #[test]
    fn default_signal_calls_handler() {
        let _guard = capture_logs();
        reset_error_handler();

        let mut queue = crate::FixedQueue::<i32, 1>::new();
        assert_eq!(queue.pop(), Ok(()));
        queue.push(1).unwrap();
        assert_eq!(queue.push(2), Ok(()));
        assert_eq!(queue.front(), Some(&1));
        clear_log_fn();

        let logs = captured();
        assert_eq!(logs.len(), 2);
        assert!(logs[0].1.starts_with("queue empty (capacity 1)"));
        assert!(logs[1].1.starts_with("queue full (capacity 1)"));
    }

    #[test]
    fn references_forward_to_the_strategy() {
        let signal = RaiseSignal;
        let by_ref = &signal;
        let err = ContainerError::new(ErrorKind::StackEmpty, 2);
        assert!(by_ref.report(err).is_err());
    }
}
