//! # Command Layer
//!
//! This module contains the core business logic of rosterly. Each operation
//! family lives in its own submodule and implements plain functions over the
//! [`Session`](crate::session::Session) aggregate.
//!
//! ## Role and Responsibilities
//!
//! Commands are where the real work happens:
//! - Implement the actual logic for each user action
//! - Operate on `Member`, `MemberId`, and the session state
//! - Return a structured [`CmdResult`] with affected members and messages
//! - Are completely UI-agnostic: no stdout, no rendering, no terminal
//!
//! ## Totality
//!
//! Every mutation here is total: a stale id (the UI racing a re-render)
//! degrades to a silent no-op, never an error. Commands therefore return
//! `CmdResult` directly rather than `Result` — there is nothing to fail.
//! Fallibility lives exclusively in the data source adapter.
//!
//! ## Testing Strategy
//!
//! This is where the lion's share of testing lives. Command tests build a
//! small session, drive the command, and assert on both the session state
//! and the returned `CmdResult`.
//!
//! ## Command Modules
//!
//! - [`search`]: Set the search term (resets the page)
//! - [`paging`]: Move between pages
//! - [`selection`]: Toggle rows and page-wide selection for bulk delete
//! - [`edit`]: Begin, update, commit, and cancel the inline edit session
//! - [`delete`]: Remove single rows or the whole selection

use serde::Serialize;

use crate::model::Member;

pub mod delete;
pub mod edit;
pub mod paging;
pub mod search;
pub mod selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command, for the UI layer to render as it sees
/// fit.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Members the operation modified or removed, in collection order.
    pub affected_members: Vec<Member>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_members(mut self, members: Vec<Member>) -> Self {
        self.affected_members = members;
        self
    }
}
