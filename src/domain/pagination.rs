//! Server-supplied paging cursor and the controls derived from it.

use serde::{Deserialize, Serialize};

/// Paging metadata attached to every customers response.
///
/// The API guarantees that `next_page` is `None` exactly on the last page and
/// `prev_page` is `None` exactly on the first one.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaginationInfo {
    pub current_page: u32,
    pub next_page: Option<u32>,
    pub prev_page: Option<u32>,
    pub total_pages: u32,
    pub total_count: u64,
}

impl PaginationInfo {
    pub fn has_previous(&self) -> bool {
        self.prev_page.is_some()
    }

    pub fn has_next(&self) -> bool {
        self.next_page.is_some()
    }

    /// Page loaded by the "Previous" control.
    pub fn previous_target(&self) -> u32 {
        self.prev_page.unwrap_or(1)
    }

    /// Page loaded by the "Next" control.
    pub fn next_target(&self) -> u32 {
        self.next_page.unwrap_or(self.total_pages)
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }

    /// Checks that the nullable page pointers agree with the position.
    pub fn is_consistent(&self) -> bool {
        let on_last = self.current_page == self.total_pages;
        let on_first = self.current_page == 1;
        self.next_page.is_none() == on_last && self.prev_page.is_none() == on_first
    }
}
