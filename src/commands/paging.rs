use crate::commands::CmdResult;
use crate::session::Session;

/// Request a 1-based page. The value is stored as asked; derivation clamps
/// it against the current filtered set, so a page that later shrinks away
/// (deletes, a narrower search) degrades to the nearest valid one instead
/// of sticking out of range.
pub fn run(session: &mut Session, page: usize) -> CmdResult {
    session.set_page(page);
    CmdResult::default()
}
