use std::fmt;

use crate::request::Action;
use crate::resource::ResourceIdentity;

/// Errors that can occur in the admin gateway crate.
#[derive(Debug)]
pub enum Error {
    /// Authorization was denied; the request pipeline must halt
    Denied(Denial),
    /// A resource lock was already held by a concurrent operation
    LockFailed(LockFailed),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Denied(d) => write!(f, "Authorization denied: {}", d),
            Error::LockFailed(l) => write!(f, "Lock failed: {}", l),
        }
    }
}

impl std::error::Error for Error {}

impl From<Denial> for Error {
    fn from(d: Denial) -> Self {
        Error::Denied(d)
    }
}

impl From<LockFailed> for Error {
    fn from(l: LockFailed) -> Self {
        Error::LockFailed(l)
    }
}

/// An authorization denial with details about what failed.
///
/// Denials halt the request pipeline and are never retried. The concrete
/// user-facing response (redirect, 403 page) belongs to the pipeline
/// collaborator, not this crate.
#[derive(Debug)]
pub struct Denial {
    /// The kind of denial that occurred
    pub kind: DenialKind,
    /// Human-readable message explaining the denial
    pub message: String,
}

impl Denial {
    /// Creates a new denial.
    pub fn new(kind: DenialKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for Denial {}

/// The kind of authorization denial.
#[derive(Debug, PartialEq, Eq)]
pub enum DenialKind {
    /// No authenticated principal was present
    Unauthenticated,
    /// The principal lacks the capability for an action on a resource
    Unauthorized {
        /// The action that was not authorized (`admin` for the general check)
        action: Action,
        /// Label of the resource reference the check ran against
        resource: String,
    },
}

impl fmt::Display for DenialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DenialKind::Unauthenticated => write!(f, "Unauthenticated"),
            DenialKind::Unauthorized { action, resource } => {
                write!(f, "Unauthorized for '{}' on '{}'", action, resource)
            }
        }
    }
}

/// A resource lock was already held by a concurrent operation.
///
/// This is an expected, recoverable condition (contention), not a defect.
/// Callers convert it into a user-visible message plus a redirect to a safe
/// view of the resource via [`LockRecovery`](crate::LockRecovery); it is
/// never retried automatically and never escalated to a fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockFailed {
    /// Identity of the resource instance whose lock was contended
    pub identity: ResourceIdentity,
}

impl fmt::Display for LockFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "resource '{}' is locked by another operation", self.identity)
    }
}

impl std::error::Error for LockFailed {}
