//! # Domain Model: Members and Identity
//!
//! This module defines the core data structures for rosterly: [`Member`] and
//! [`MemberId`].
//!
//! ## Identity
//!
//! The upstream source assigns each member an opaque string identifier. That
//! id is the *only* notion of identity in the system: selection membership,
//! edit targeting, and deletion all key on [`MemberId`], never on object
//! identity. Re-deriving a view (which clones members) must never change what
//! counts as "the same row".
//!
//! ## Mutability
//!
//! `id` is immutable for the life of a member; `name`, `email`, and `role`
//! are freely mutable through an edit commit. No validation is applied to
//! the mutable fields — any string, including empty, is accepted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier for a member, as assigned by the data source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MemberId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for MemberId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl Member {
    pub fn new(
        id: impl Into<MemberId>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }

    /// Case-insensitive substring match against every field, the id included.
    ///
    /// `term_lower` must already be lowercased; callers lowercase once per
    /// search rather than once per member.
    pub fn matches(&self, term_lower: &str) -> bool {
        [
            self.id.as_str(),
            self.name.as_str(),
            self.email.as_str(),
            self.role.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(term_lower))
    }
}
