//! # View Derivation
//!
//! The table never stores a filtered or paginated copy of the collection.
//! [`derive`] recomputes the visible state from scratch on every call:
//!
//! 1. Filter: keep members where any field contains the search term,
//!    case-insensitively. An empty term keeps everything, order untouched.
//! 2. `total_pages = ceil(filtered_len / page_size)`.
//! 3. Clamp the requested page into `[1, max(total_pages, 1)]`.
//! 4. Slice the clamped page's window out of the filtered sequence.
//!
//! An empty filtered set yields `total_pages == 0` and an empty slice; the
//! UI renders no page buttons in that state ([`ViewState::has_pages`]).

use crate::model::Member;

/// Snapshot of what the table should show right now.
///
/// Derived data only — holding one of these across a mutation and rendering
/// from it afterwards shows stale rows.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Members matching the current search term, in load order.
    pub filtered: Vec<Member>,
    /// Page count over `filtered`; zero when nothing matches.
    pub total_pages: usize,
    /// The page actually shown, after clamping the requested one.
    pub page: usize,
    /// The members on the visible page, at most `page_size` of them.
    pub page_slice: Vec<Member>,
}

impl ViewState {
    /// Whether pagination controls have anything to offer.
    pub fn has_pages(&self) -> bool {
        self.total_pages > 0
    }
}

/// Pure derivation of the visible table state.
///
/// `page` is 1-based and may be out of range; it is clamped, never rejected.
pub fn derive(members: &[Member], search_term: &str, page: usize, page_size: usize) -> ViewState {
    let filtered: Vec<Member> = if search_term.is_empty() {
        members.to_vec()
    } else {
        let term_lower = search_term.to_lowercase();
        members
            .iter()
            .filter(|m| m.matches(&term_lower))
            .cloned()
            .collect()
    };

    let total_pages = filtered.len().div_ceil(page_size);
    let clamped = page.clamp(1, total_pages.max(1));
    let start = (clamped - 1) * page_size;
    let page_slice: Vec<Member> = filtered.iter().skip(start).take(page_size).cloned().collect();

    ViewState {
        filtered,
        total_pages,
        page: clamped,
        page_slice,
    }
}
