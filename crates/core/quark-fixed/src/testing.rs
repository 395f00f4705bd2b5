//! Signal strategies used by the unit tests.

use core::cell::Cell;

use crate::error::{ContainerError, ErrorKind};
use crate::signal::ErrorSignal;

/// Counts reports and remembers the last kind.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    raise: bool,
    calls: Cell<usize>,
    last: Cell<Option<ErrorKind>>,
}

impl Recorder {
    /// Records and then lets the operation continue as a no-op.
    pub(crate) fn swallowing() -> Self {
        Self::default()
    }

    /// Records and then raises.
    pub(crate) fn raising() -> Self {
        Self {
            raise: true,
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }

    pub(crate) fn last(&self) -> Option<ErrorKind> {
        self.last.get()
    }
}

impl ErrorSignal for Recorder {
    fn report(&self, error: ContainerError) -> Result<(), ContainerError> {
        self.calls.set(self.calls.get() + 1);
        self.last.set(Some(error.kind()));
        if self.raise { Err(error) } else { Ok(()) }
    }
}
