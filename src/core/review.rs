//! Review primitives shared by the CLI and the dashboard.

use crate::storage::config::DEFAULT_PAGE_SIZE;

/// Offset/limit window over the staged-invoice list.
///
/// Pages are 1-based. There is no known upper bound: the server does not
/// report a total, so only the lower boundary is enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    page: u32,
    page_size: u32,
}

impl PageCursor {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Cursor positioned at `page` (clamped to 1).
    pub fn at(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn offset(&self) -> u32 {
        (self.page - 1).saturating_mul(self.page_size)
    }

    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    pub fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..*self
        }
    }

    /// The previous page, or `None` on page 1.
    pub fn previous(&self) -> Option<Self> {
        if self.is_first() {
            None
        } else {
            Some(Self {
                page: self.page - 1,
                ..*self
            })
        }
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// What a reviewer decided about a staged invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    /// Trailing path segment of the mutation endpoint.
    pub fn path_segment(self) -> &'static str {
        match self {
            ReviewDecision::Approve => "approve",
            ReviewDecision::Reject => "reject",
        }
    }

    pub fn past_tense(self) -> &'static str {
        match self {
            ReviewDecision::Approve => "approved",
            ReviewDecision::Reject => "rejected",
        }
    }

    pub fn verb(self) -> &'static str {
        match self {
            ReviewDecision::Approve => "Approve",
            ReviewDecision::Reject => "Reject",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_starts_on_first_page() {
        let cursor = PageCursor::new(25);
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.offset(), 0);
        assert!(cursor.is_first());
    }

    #[test]
    fn test_cursor_offsets() {
        let cursor = PageCursor::new(25).next().next();
        assert_eq!(cursor.page(), 3);
        assert_eq!(cursor.offset(), 50);
        assert_eq!(PageCursor::at(4, 10).offset(), 30);
    }

    #[test]
    fn test_previous_on_first_page_is_none() {
        assert!(PageCursor::new(25).previous().is_none());

        let back = PageCursor::at(2, 25).previous().expect("page 2 has a previous page");
        assert_eq!(back.page(), 1);
        assert_eq!(back.offset(), 0);
    }

    #[test]
    fn test_zero_values_are_clamped() {
        let cursor = PageCursor::at(0, 0);
        assert_eq!(cursor.page(), 1);
        assert_eq!(cursor.page_size(), 1);
    }

    #[test]
    fn test_decision_labels() {
        assert_eq!(ReviewDecision::Approve.path_segment(), "approve");
        assert_eq!(ReviewDecision::Reject.path_segment(), "reject");
        assert_eq!(ReviewDecision::Approve.past_tense(), "approved");
        assert_eq!(ReviewDecision::Reject.verb(), "Reject");
    }
}
