//! The access-credential seam.
//!
//! Some back-office actions call into the platform's API and need the
//! acting user to hold an API credential. Issuance itself is an external
//! operation (token generation is out of scope); the gateway only ensures
//! one exists before the handler runs, at most once per principal.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::request::Principal;

/// External collaborator that issues access credentials for principals.
///
/// `issue_credential` must be idempotent: issuing for a principal that
/// already holds a credential is a no-op from the caller's perspective.
/// The gateway guards the call with `has_credential` so issuance happens
/// at most once per principal per need.
pub trait CredentialIssuer {
    /// Returns whether the principal already holds a credential.
    fn has_credential(&self, principal: &Principal) -> bool;

    /// Issues a credential for the principal.
    fn issue_credential(&self, principal: &Principal);
}

/// In-memory credential store for tests and demonstration.
///
/// Records how many times issuance ran per principal so tests can assert
/// the at-most-once guarantee.
///
/// # Example
///
/// ```
/// use admin_gate::{CredentialIssuer, MemoryCredentials, Principal};
///
/// let issuer = MemoryCredentials::new();
/// let alice = Principal { id: "user-1".to_string(), name: "Alice".to_string() };
///
/// assert!(!issuer.has_credential(&alice));
/// issuer.issue_credential(&alice);
/// assert!(issuer.has_credential(&alice));
/// assert_eq!(issuer.issue_count("user-1"), 1);
/// ```
#[derive(Debug, Default)]
pub struct MemoryCredentials {
    issued: Mutex<HashMap<String, usize>>,
}

impl MemoryCredentials {
    /// Creates an empty credential store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many times a credential was issued for `principal_id`.
    pub fn issue_count(&self, principal_id: &str) -> usize {
        self.issued
            .lock()
            .map(|m| m.get(principal_id).copied().unwrap_or(0))
            .unwrap_or(0)
    }
}

impl CredentialIssuer for MemoryCredentials {
    fn has_credential(&self, principal: &Principal) -> bool {
        self.issued
            .lock()
            .map(|m| m.contains_key(&principal.id))
            .unwrap_or(false)
    }

    fn issue_credential(&self, principal: &Principal) {
        if let Ok(mut m) = self.issued.lock() {
            *m.entry(principal.id.clone()).or_insert(0) += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bob() -> Principal {
        Principal {
            id: "user-2".to_string(),
            name: "Bob".to_string(),
        }
    }

    #[test]
    fn starts_without_credentials() {
        let issuer = MemoryCredentials::new();
        assert!(!issuer.has_credential(&bob()));
        assert_eq!(issuer.issue_count("user-2"), 0);
    }

    #[test]
    fn issuance_is_recorded_per_principal() {
        let issuer = MemoryCredentials::new();
        issuer.issue_credential(&bob());
        assert!(issuer.has_credential(&bob()));
        assert_eq!(issuer.issue_count("user-2"), 1);
        assert_eq!(issuer.issue_count("user-1"), 0);
    }
}
