//! Error values reported by the fixed-capacity containers.

use core::fmt;
use core::panic::Location;

/// The four ways a container operation can violate its capacity contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Push onto a stack that already holds `capacity` elements.
    StackFull,
    /// Push onto a queue that already holds `capacity` elements.
    QueueFull,
    /// Pop from a stack with no elements.
    StackEmpty,
    /// Pop from a queue with no elements.
    QueueEmpty,
}

impl ErrorKind {
    /// Returns a short lowercase description.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StackFull => "stack full",
            Self::QueueFull => "queue full",
            Self::StackEmpty => "stack empty",
            Self::QueueEmpty => "queue empty",
        }
    }

    /// Returns true for the push-side (overflow) kinds.
    #[must_use]
    pub const fn is_overflow(self) -> bool {
        matches!(self, Self::StackFull | Self::QueueFull)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejected container operation.
///
/// Carries the [`ErrorKind`] together with the context it happened in: the
/// capacity of the container and the source location of the offending call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerError {
    kind: ErrorKind,
    capacity: usize,
    location: &'static Location<'static>,
}

impl ContainerError {
    /// Creates an error attributed to the caller's location.
    #[must_use]
    #[track_caller]
    pub fn new(kind: ErrorKind, capacity: usize) -> Self {
        Self {
            kind,
            capacity,
            location: Location::caller(),
        }
    }

    /// The kind of violation.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Capacity of the container that rejected the operation.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Source location of the rejected call.
    #[must_use]
    pub const fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl fmt::Display for ContainerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (capacity {}) at {}",
            self.kind, self.capacity, self.location
        )
    }
}

impl core::error::Error for ContainerError {}
