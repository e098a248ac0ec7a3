use crate::commands::CmdResult;
use crate::session::Session;

/// Set the search term. Always snaps the table back to page 1: the old page
/// position is meaningless over a different filtered set.
pub fn run(session: &mut Session, term: &str) -> CmdResult {
    session.set_search_term(term);
    CmdResult::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Member;

    fn session() -> Session {
        let mut session = Session::new(10);
        session.replace_members(vec![
            Member::new("1", "Aaron", "aaron@x.com", "member"),
            Member::new("2", "Bella", "bella@x.com", "Admin"),
        ]);
        session
    }

    #[test]
    fn stores_term_and_resets_page() {
        let mut session = session();
        session.set_page(3);

        run(&mut session, "admin");

        assert_eq!(session.search_term(), "admin");
        assert_eq!(session.page(), 1);
    }

    #[test]
    fn clearing_term_also_resets_page() {
        let mut session = session();
        run(&mut session, "admin");
        session.set_page(2);

        run(&mut session, "");

        assert_eq!(session.search_term(), "");
        assert_eq!(session.page(), 1);
    }
}
