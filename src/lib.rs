//! # Rosterly Architecture
//!
//! Rosterly is a **UI-agnostic admin-table library**: the state and
//! derivation core of a member management screen (load, search, paginate,
//! select, inline-edit, delete), with rendering left entirely to the
//! embedder. It is not a web app that happens to have some library code —
//! it's a library a web view, a TUI, or a test harness can drive equally.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - RosterApi: the full user-action + read surface           │
//! │  - Thin dispatch, returns structured results                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic per operation family                      │
//! │  - Total operations: stale ids degrade to no-ops            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session State (session.rs) + View Derivation (view.rs)     │
//! │  - One aggregate owns all mutable state                     │
//! │  - Views are recomputed, never stored                       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Data Source (source.rs)                                    │
//! │  - MemberSource trait; HttpSource for production            │
//! │  - One-shot load, failure → empty table + logged error      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Derive, Don't Store
//!
//! Only the session aggregate is mutable. The filtered set, page count, and
//! visible slice are a pure function of `(members, search term, page)` and
//! are recomputed on every [`api::RosterApi::view`] call. There is no cache
//! to invalidate and no way for the visible rows to drift from the data.
//!
//! ## Key Principle: Identity by Id
//!
//! Selection and edit targeting key on the source-assigned member id, never
//! on object identity, so re-derived views keep recognizing the same logical
//! rows. A member removed from the collection leaves the selection set and
//! the edit session in the same operation — no dangling references, ever.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade — entry point for all operations
//! - [`commands`]: Business logic for each user action
//! - [`session`]: The mutable session aggregate and edit state machine
//! - [`view`]: Pure derivation of the visible table state
//! - [`source`]: Data source trait and HTTP implementation
//! - [`model`]: Core data types (`Member`, `MemberId`)
//! - [`config`]: Source URL and page size
//! - [`logging`]: Optional stderr logging bootstrap
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod session;
pub mod source;
pub mod view;
