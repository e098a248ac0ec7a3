//! # API Facade
//!
//! [`RosterApi`] is the single entry point for everything a rendering layer
//! needs: the full user-action surface plus read access for drawing the
//! table. It is a thin facade — each method dispatches to a command (or to
//! view derivation) and returns structured types; no business logic lives
//! here and nothing here touches stdout or the network besides the
//! injected [`MemberSource`].
//!
//! ## Lifecycle
//!
//! One `RosterApi` is one operator session. Call [`RosterApi::load`] once at
//! startup; every user action afterwards is a plain synchronous method. All
//! mutations are in-memory only and vanish with the value.
//!
//! ## Concurrency
//!
//! The whole session is single-writer by construction: every mutating method
//! takes `&mut self`, and `load` is the only suspension point. Dropping the
//! `load` future before it resolves (view torn down mid-fetch) leaves the
//! session untouched, since state is only written after the fetch completes.

use log::{error, info};

use crate::commands::{self, CmdMessage, CmdResult};
use crate::config::RosterConfig;
use crate::model::{Member, MemberId};
use crate::session::{EditField, EditSession, Session};
use crate::source::MemberSource;
use crate::view::{self, ViewState};

/// The main facade for an admin-table session.
pub struct RosterApi {
    session: Session,
}

impl Default for RosterApi {
    fn default() -> Self {
        Self::new()
    }
}

impl RosterApi {
    pub fn new() -> Self {
        Self::with_config(&RosterConfig::default())
    }

    pub fn with_config(config: &RosterConfig) -> Self {
        Self {
            session: Session::new(config.page_size()),
        }
    }

    /// One-shot population of the member collection.
    ///
    /// On success the collection is replaced wholesale and all interaction
    /// state resets. On failure the collection stays empty, the error is
    /// logged and recorded (see [`RosterApi::load_error`]), and the returned
    /// result carries an error-level message — loading never returns `Err`
    /// to the caller, because an empty table is the mandated recovery.
    pub async fn load<S: MemberSource>(&mut self, source: &S) -> CmdResult {
        let mut result = CmdResult::default();
        match source.fetch().await {
            Ok(members) => {
                info!("loaded {} members", members.len());
                self.session.replace_members(members);
                result.add_message(CmdMessage::info(format!(
                    "Loaded {} members",
                    self.session.members().len()
                )));
            }
            Err(err) => {
                error!("failed to load members: {err}");
                let message = err.to_string();
                self.session.record_load_failure(message.clone());
                result.add_message(CmdMessage::error(message));
            }
        }
        result
    }

    // --- User actions ---

    pub fn search(&mut self, term: &str) -> CmdResult {
        commands::search::run(&mut self.session, term)
    }

    pub fn go_to_page(&mut self, page: usize) -> CmdResult {
        commands::paging::run(&mut self.session, page)
    }

    pub fn toggle_row_selection(&mut self, id: &MemberId) -> CmdResult {
        commands::selection::toggle(&mut self.session, id)
    }

    pub fn toggle_select_all_on_page(&mut self) -> CmdResult {
        commands::selection::toggle_all_on_page(&mut self.session)
    }

    pub fn begin_edit(&mut self, id: &MemberId) -> CmdResult {
        commands::edit::begin(&mut self.session, id)
    }

    pub fn edit_field(&mut self, field: EditField, value: &str) -> CmdResult {
        commands::edit::update_field(&mut self.session, field, value)
    }

    pub fn save_edit(&mut self) -> CmdResult {
        commands::edit::commit(&mut self.session)
    }

    pub fn cancel_edit(&mut self) -> CmdResult {
        commands::edit::cancel(&mut self.session)
    }

    pub fn delete_row(&mut self, id: &MemberId) -> CmdResult {
        commands::delete::delete_one(&mut self.session, id)
    }

    pub fn delete_selected_rows(&mut self) -> CmdResult {
        commands::delete::delete_selected(&mut self.session)
    }

    // --- Read surface for rendering ---

    /// Recompute the visible table state from the current session.
    pub fn view(&self) -> ViewState {
        view::derive(
            self.session.members(),
            self.session.search_term(),
            self.session.page(),
            self.session.page_size(),
        )
    }

    pub fn members(&self) -> &[Member] {
        self.session.members()
    }

    pub fn search_term(&self) -> &str {
        self.session.search_term()
    }

    pub fn edit_session(&self) -> &EditSession {
        self.session.edit()
    }

    pub fn is_selected(&self, id: &MemberId) -> bool {
        self.session.is_selected(id)
    }

    pub fn selection_count(&self) -> usize {
        self.session.selection_count()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.session.load_error()
    }
}
