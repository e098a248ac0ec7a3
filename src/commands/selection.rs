use crate::commands::CmdResult;
use crate::model::MemberId;
use crate::session::Session;
use crate::view;

/// Toggle one row in or out of the bulk-delete selection.
///
/// Membership is tracked by id, so selection survives re-derivation of the
/// view. Toggling an id that no longer names a member is a no-op.
pub fn toggle(session: &mut Session, id: &MemberId) -> CmdResult {
    if session.member(id).is_some() {
        session.toggle_selected(id.clone());
    }
    CmdResult::default()
}

/// Toggle selection for every row on the currently visible page.
///
/// If every row on the page is already selected, the page's rows are
/// deselected; otherwise all of them become selected. Selections on other
/// pages are never touched either way. The "all selected" check compares
/// against the page's actual row count, so a short final page toggles
/// correctly.
pub fn toggle_all_on_page(session: &mut Session) -> CmdResult {
    let state = view::derive(
        session.members(),
        session.search_term(),
        session.page(),
        session.page_size(),
    );

    if state.page_slice.is_empty() {
        return CmdResult::default();
    }

    let all_selected = state.page_slice.iter().all(|m| session.is_selected(&m.id));
    for member in &state.page_slice {
        if all_selected {
            session.deselect(&member.id);
        } else {
            session.select(member.id.clone());
        }
    }

    CmdResult::default()
}

/// Empty the selection set.
pub fn clear(session: &mut Session) -> CmdResult {
    session.selection.clear();
    CmdResult::default()
}
