use crate::commands::{CmdMessage, CmdResult};
use crate::model::MemberId;
use crate::session::{EditDraft, EditField, EditSession, Session};

/// Enter edit mode on a member, seeding the draft from its current values.
///
/// Legal from idle or while already editing: switching targets silently
/// discards the prior draft (last writer wins at the session level). A
/// stale id is a no-op.
pub fn begin(session: &mut Session, id: &MemberId) -> CmdResult {
    if let Some(member) = session.member(id) {
        session.set_edit(EditSession::Editing(EditDraft::from_member(member)));
    }
    CmdResult::default()
}

/// Overwrite one draft field. Only meaningful while editing; no validation
/// is applied, any string including empty is accepted.
pub fn update_field(session: &mut Session, field: EditField, value: &str) -> CmdResult {
    if let EditSession::Editing(draft) = &mut session.edit {
        match field {
            EditField::Name => draft.name = value.to_string(),
            EditField::Email => draft.email = value.to_string(),
            EditField::Role => draft.role = value.to_string(),
        }
    }
    CmdResult::default()
}

/// Write the draft onto the target member and return to idle.
///
/// The id never changes. If the target vanished while under edit the commit
/// degrades to a no-op; either way the session ends up idle.
pub fn commit(session: &mut Session) -> CmdResult {
    let draft = match std::mem::take(&mut session.edit) {
        EditSession::Idle => return CmdResult::default(),
        EditSession::Editing(draft) => draft,
    };

    let mut result = CmdResult::default();
    if let Some(member) = session.member_mut(&draft.target) {
        member.name = draft.name;
        member.email = draft.email;
        member.role = draft.role;
        let member = member.clone();
        result.add_message(CmdMessage::success(format!(
            "Member updated: {}",
            member.name
        )));
        result.affected_members.push(member);
    }
    result
}

/// Drop the draft without touching the member.
pub fn cancel(session: &mut Session) -> CmdResult {
    session.set_edit(EditSession::Idle);
    CmdResult::default()
}
