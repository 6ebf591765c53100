//! Page arithmetic shared by every post listing.

use serde::Serialize;

/// Number of posts rendered per listing page.
pub const POSTS_PER_PAGE: usize = 4;

/// Offset/limit window requested from a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub fn new(page: usize, per_page: usize) -> Self {
        Self {
            page: page.max(1),
            per_page,
        }
    }

    /// Rows to skip. Saturates instead of overflowing on absurd page numbers.
    pub fn offset(&self) -> usize {
        (self.page.max(1) - 1).saturating_mul(self.per_page)
    }
}

/// Which way the visitor asked to move from the page they were on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// A listing request as submitted by the pager form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRequest {
    /// Page the visitor was looking at.
    pub page: usize,
    pub direction: Option<Direction>,
}

impl PageRequest {
    pub fn first() -> Self {
        Self::default()
    }

    /// Page to load: one step from the current page, or the first page when
    /// no direction was given. Never below 1.
    pub fn effective_page(&self) -> usize {
        match self.direction {
            Some(Direction::Next) => self.page.max(1).saturating_add(1),
            Some(Direction::Previous) => self.page.saturating_sub(1).max(1),
            None => 1,
        }
    }
}

/// One page of items plus the numbers the pager needs.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: usize, per_page: usize, total: usize) -> Self {
        if total == 0 {
            return Self::empty(page);
        }
        Self {
            items,
            page,
            total,
            has_next: page.saturating_mul(per_page) < total,
            has_prev: page > 1,
        }
    }

    pub fn empty(page: usize) -> Self {
        Self {
            items: Vec::new(),
            page,
            total: 0,
            has_next: false,
            has_prev: false,
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            total: self.total,
            has_next: self.has_next,
            has_prev: self.has_prev,
        }
    }
}
