//! # Session State
//!
//! One aggregate owns everything the table mutates: the member collection,
//! the search term, the requested page, the selection set, the edit session,
//! and the last load error. The reference implementation scattered these
//! across independent variables and kept them consistent by hand; here every
//! cross-field invariant is re-established inside the session's own mutation
//! helpers before control returns:
//!
//! - a member leaving the collection leaves the selection set in the same
//!   call ([`Session::remove_members`]);
//! - deleting the member under edit forces the edit session back to idle;
//! - changing the search term resets the page to 1;
//! - member ids stay pairwise distinct.
//!
//! Commands (`commands/*`) hold the operation logic and drive the session
//! through this narrow surface; read access for rendering goes through the
//! public accessors.

use std::collections::HashSet;

use crate::model::{Member, MemberId};

/// In-progress values for the member being inline-edited.
///
/// Drafts live outside the committed member until saved; abandoning them
/// (switching targets, cancel, delete of the target) costs nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub target: MemberId,
    pub name: String,
    pub email: String,
    pub role: String,
}

impl EditDraft {
    /// Seed a draft from a member's current values.
    pub fn from_member(member: &Member) -> Self {
        Self {
            target: member.id.clone(),
            name: member.name.clone(),
            email: member.email.clone(),
            role: member.role.clone(),
        }
    }
}

/// The inline-edit state machine: at most one member under edit at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(EditDraft),
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing(_))
    }

    /// The id of the member under edit, if any.
    pub fn target(&self) -> Option<&MemberId> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing(draft) => Some(&draft.target),
        }
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        match self {
            EditSession::Idle => None,
            EditSession::Editing(draft) => Some(draft),
        }
    }
}

/// One of the three editable member fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Email,
    Role,
}

#[derive(Debug)]
pub struct Session {
    pub(crate) members: Vec<Member>,
    pub(crate) search_term: String,
    pub(crate) page: usize,
    pub(crate) selection: HashSet<MemberId>,
    pub(crate) edit: EditSession,
    pub(crate) load_error: Option<String>,
    pub(crate) page_size: usize,
}

impl Session {
    pub fn new(page_size: usize) -> Self {
        Self {
            members: Vec::new(),
            search_term: String::new(),
            page: 1,
            selection: HashSet::new(),
            edit: EditSession::Idle,
            load_error: None,
            page_size: page_size.max(1),
        }
    }

    // --- Read surface ---

    /// The full collection, in load order.
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The requested (pre-clamp) 1-based page.
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn edit(&self) -> &EditSession {
        &self.edit
    }

    pub fn is_selected(&self, id: &MemberId) -> bool {
        self.selection.contains(id)
    }

    pub fn selection_count(&self) -> usize {
        self.selection.len()
    }

    /// Error from the one-shot load, if it failed.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn member(&self, id: &MemberId) -> Option<&Member> {
        self.members.iter().find(|m| &m.id == id)
    }

    pub(crate) fn member_mut(&mut self, id: &MemberId) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| &m.id == id)
    }

    // --- Mutation surface ---

    /// Replace the collection wholesale after a successful load.
    ///
    /// Resets every piece of derived and interaction state: a fresh load is
    /// a fresh session. Duplicate ids in the payload keep their first
    /// occurrence so the distinct-id invariant holds from the start.
    pub(crate) fn replace_members(&mut self, members: Vec<Member>) {
        let mut seen = HashSet::new();
        self.members = members
            .into_iter()
            .filter(|m| seen.insert(m.id.clone()))
            .collect();
        self.search_term.clear();
        self.page = 1;
        self.selection.clear();
        self.edit = EditSession::Idle;
        self.load_error = None;
    }

    /// Record a failed load: collection stays empty, error becomes observable.
    pub(crate) fn record_load_failure(&mut self, message: String) {
        self.load_error = Some(message);
    }

    pub(crate) fn set_search_term(&mut self, term: &str) {
        self.search_term = term.to_string();
        // A new search invalidates the old page position.
        self.page = 1;
    }

    pub(crate) fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub(crate) fn set_edit(&mut self, edit: EditSession) {
        self.edit = edit;
    }

    pub(crate) fn toggle_selected(&mut self, id: MemberId) {
        if !self.selection.remove(&id) {
            self.selection.insert(id);
        }
    }

    pub(crate) fn select(&mut self, id: MemberId) {
        self.selection.insert(id);
    }

    pub(crate) fn deselect(&mut self, id: &MemberId) {
        self.selection.remove(id);
    }

    /// Remove every member whose id is in `ids`, returning the removed
    /// members in collection order.
    ///
    /// This is the single removal path. It scrubs the selection set and
    /// idles the edit session when its target dies, so no caller can leave
    /// a dangling reference behind.
    pub(crate) fn remove_members(&mut self, ids: &HashSet<MemberId>) -> Vec<Member> {
        if ids.is_empty() {
            return Vec::new();
        }

        let mut removed = Vec::new();
        self.members.retain(|m| {
            if ids.contains(&m.id) {
                removed.push(m.clone());
                false
            } else {
                true
            }
        });

        for member in &removed {
            self.selection.remove(&member.id);
        }

        if let Some(target) = self.edit.target() {
            if ids.contains(target) {
                self.edit = EditSession::Idle;
            }
        }

        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str) -> Member {
        Member::new(id, format!("Name {id}"), format!("{id}@x.com"), "member")
    }

    #[test]
    fn replace_members_resets_interaction_state() {
        let mut session = Session::new(10);
        session.set_search_term("old");
        session.set_page(4);
        session.select(MemberId::from("1"));
        session.record_load_failure("boom".into());

        session.replace_members(vec![member("1"), member("2")]);

        assert_eq!(session.members().len(), 2);
        assert_eq!(session.search_term(), "");
        assert_eq!(session.page(), 1);
        assert_eq!(session.selection_count(), 0);
        assert_eq!(session.edit(), &EditSession::Idle);
        assert!(session.load_error().is_none());
    }

    #[test]
    fn replace_members_drops_duplicate_ids() {
        let mut session = Session::new(10);
        let mut dupe = member("1");
        dupe.name = "Impostor".to_string();
        session.replace_members(vec![member("1"), dupe, member("2")]);

        assert_eq!(session.members().len(), 2);
        assert_eq!(session.members()[0].name, "Name 1");
    }

    #[test]
    fn remove_members_scrubs_selection_and_edit() {
        let mut session = Session::new(10);
        session.replace_members(vec![member("1"), member("2"), member("3")]);
        session.select(MemberId::from("2"));
        session.select(MemberId::from("3"));
        session.set_edit(EditSession::Editing(EditDraft::from_member(
            session.member(&MemberId::from("2")).unwrap(),
        )));

        let removed = session.remove_members(&HashSet::from([MemberId::from("2")]));

        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].id, MemberId::from("2"));
        assert!(!session.is_selected(&MemberId::from("2")));
        assert!(session.is_selected(&MemberId::from("3")));
        assert_eq!(session.edit(), &EditSession::Idle);
    }

    #[test]
    fn remove_members_keeps_unrelated_edit() {
        let mut session = Session::new(10);
        session.replace_members(vec![member("1"), member("2")]);
        session.set_edit(EditSession::Editing(EditDraft::from_member(
            session.member(&MemberId::from("1")).unwrap(),
        )));

        session.remove_members(&HashSet::from([MemberId::from("2")]));

        assert!(session.edit().is_editing());
    }

    #[test]
    fn remove_members_returns_collection_order() {
        let mut session = Session::new(10);
        session.replace_members(vec![member("3"), member("1"), member("2")]);

        let removed =
            session.remove_members(&HashSet::from([MemberId::from("1"), MemberId::from("3")]));
        let ids: Vec<&str> = removed.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn toggle_selected_flips_membership() {
        let mut session = Session::new(10);
        session.toggle_selected(MemberId::from("1"));
        assert!(session.is_selected(&MemberId::from("1")));
        session.toggle_selected(MemberId::from("1"));
        assert!(!session.is_selected(&MemberId::from("1")));
    }
}
