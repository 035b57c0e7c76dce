//! Session user model.

use serde::{Deserialize, Serialize};

/// The user attached to the current session.
///
/// Only the identifier is known here; profile data lives elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Opaque user ID (JWT `sub` claim)
    pub id: String,
}

impl SessionUser {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}
