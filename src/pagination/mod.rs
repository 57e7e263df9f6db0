//! Pagination for list endpoints: the page window shown by pagination
//! controls, the display range, navigation guards and the list envelope.

mod state;
mod window;

#[cfg(test)]
mod tests;

pub use state::{PageAction, PageChange, PageChangeListener, PaginationState};
pub use window::{display_range, page_window, total_pages, DisplayRange, PageItem, WINDOW_SIZE};

use serde::{Deserialize, Serialize};

use crate::config::PaginationConfig;

/// Query-string pagination params (page is 1-based).
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    pub page: u32,
    pub per_page: u32,
}

impl PageParams {
    pub fn from_query(q: PageQuery, cfg: &PaginationConfig) -> Self {
        Self {
            page: q.page.unwrap_or(1).max(1),
            per_page: q.per_page.unwrap_or(cfg.default_per_page).clamp(1, cfg.max_per_page),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ListResponse<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
    pub total_pages: u32,
    pub has_more: bool,
    pub pages: Vec<PageItem>,
    pub range: Option<DisplayRange>,
}

impl<T> ListResponse<T> {
    /// Slices one page out of an already filtered and ordered list.
    ///
    /// A page past the end is clamped to the last page.
    pub fn paginate<I>(all: I, params: PageParams) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let all = all.into_iter();
        let state = PaginationState::new(params.page, all.len() as u64, params.per_page);
        let offset = (state.current_page as usize - 1) * state.items_per_page as usize;
        let items: Vec<T> = all.skip(offset).take(state.items_per_page as usize).collect();
        let has_more = (offset + items.len()) < state.total_items as usize;

        Self {
            items,
            page: state.current_page,
            per_page: state.items_per_page,
            total: state.total_items,
            total_pages: state.total_pages,
            has_more,
            pages: state.window(),
            range: state.range(),
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> ListResponse<U> {
        ListResponse {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
            total_pages: self.total_pages,
            has_more: self.has_more,
            pages: self.pages,
            range: self.range,
        }
    }
}
