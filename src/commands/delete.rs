use std::collections::HashSet;

use crate::commands::{CmdMessage, CmdResult};
use crate::model::MemberId;
use crate::session::Session;

/// Permanently remove one member. There is no soft delete and no undo.
///
/// The session's removal path scrubs the selection set and idles the edit
/// session if this member was its target, all within this call. A stale id
/// is a silent no-op.
pub fn delete_one(session: &mut Session, id: &MemberId) -> CmdResult {
    let removed = session.remove_members(&HashSet::from([id.clone()]));
    let mut result = CmdResult::default();
    for member in &removed {
        result.add_message(CmdMessage::success(format!(
            "Member deleted: {}",
            member.name
        )));
    }
    result.with_affected_members(removed)
}

/// Permanently remove every member in the selection set, then clear it.
pub fn delete_selected(session: &mut Session) -> CmdResult {
    let ids: HashSet<MemberId> = session.selection.iter().cloned().collect();
    let removed = session.remove_members(&ids);
    // remove_members already scrubbed the removed ids; anything left in the
    // selection would be a dangling reference, which the invariants forbid.
    session.selection.clear();

    let mut result = CmdResult::default();
    if !removed.is_empty() {
        result.add_message(CmdMessage::success(format!(
            "{} member(s) deleted",
            removed.len()
        )));
    }
    result.with_affected_members(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{edit, selection};
    use crate::model::Member;

    fn roster(count: usize) -> Vec<Member> {
        (1..=count)
            .map(|i| {
                Member::new(
                    i.to_string().as_str(),
                    format!("User {i}"),
                    format!("user{i}@x.com"),
                    "member",
                )
            })
            .collect()
    }

    fn session(count: usize) -> Session {
        let mut session = Session::new(10);
        session.replace_members(roster(count));
        session
    }

    #[test]
    fn delete_one_removes_exactly_that_member() {
        let mut session = session(5);
        let result = delete_one(&mut session, &MemberId::from("3"));

        assert_eq!(session.members().len(), 4);
        assert!(session.member(&MemberId::from("3")).is_none());
        assert_eq!(result.affected_members.len(), 1);
        assert_eq!(result.affected_members[0].name, "User 3");
    }

    #[test]
    fn delete_one_with_stale_id_is_silent() {
        let mut session = session(5);
        let result = delete_one(&mut session, &MemberId::from("99"));

        assert_eq!(session.members().len(), 5);
        assert!(result.affected_members.is_empty());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn delete_one_scrubs_selection() {
        let mut session = session(5);
        selection::toggle(&mut session, &MemberId::from("2"));
        selection::toggle(&mut session, &MemberId::from("3"));

        delete_one(&mut session, &MemberId::from("2"));

        assert!(!session.is_selected(&MemberId::from("2")));
        assert!(session.is_selected(&MemberId::from("3")));
    }

    #[test]
    fn delete_one_idles_edit_session_for_its_target() {
        let mut session = session(5);
        edit::begin(&mut session, &MemberId::from("4"));

        delete_one(&mut session, &MemberId::from("4"));

        assert!(!session.edit().is_editing());
    }

    #[test]
    fn delete_selected_removes_the_selection_and_empties_it() {
        let mut session = session(10);
        for id in ["2", "4", "6", "8"] {
            selection::toggle(&mut session, &MemberId::from(id));
        }

        let result = delete_selected(&mut session);

        assert_eq!(session.members().len(), 6);
        assert_eq!(result.affected_members.len(), 4);
        assert_eq!(session.selection_count(), 0);
        assert!(session.member(&MemberId::from("4")).is_none());
        assert!(session.member(&MemberId::from("5")).is_some());
    }

    #[test]
    fn delete_selected_with_nothing_selected_is_silent() {
        let mut session = session(5);
        let result = delete_selected(&mut session);

        assert_eq!(session.members().len(), 5);
        assert!(result.affected_members.is_empty());
        assert!(result.messages.is_empty());
    }

    #[test]
    fn delete_selected_idles_edit_session_when_target_is_among_them() {
        let mut session = session(5);
        selection::toggle(&mut session, &MemberId::from("1"));
        selection::toggle(&mut session, &MemberId::from("2"));
        edit::begin(&mut session, &MemberId::from("2"));

        delete_selected(&mut session);

        assert!(!session.edit().is_editing());
    }

    #[test]
    fn delete_selected_keeps_unrelated_edit_session() {
        let mut session = session(5);
        selection::toggle(&mut session, &MemberId::from("1"));
        edit::begin(&mut session, &MemberId::from("3"));

        delete_selected(&mut session);

        assert!(session.edit().is_editing());
    }

    #[test]
    fn ids_stay_pairwise_distinct_after_deletes() {
        let mut session = session(10);
        delete_one(&mut session, &MemberId::from("5"));
        selection::toggle(&mut session, &MemberId::from("6"));
        delete_selected(&mut session);

        let mut seen = HashSet::new();
        for member in session.members() {
            assert!(seen.insert(member.id.clone()));
        }
    }
}
