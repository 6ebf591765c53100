use serde::Deserialize;

use crate::pagination::{Direction, PageRequest};

/// Hidden pager fields posted by the "Older"/"Newer" buttons.
#[derive(Debug, Default, Deserialize)]
pub struct PagerForm {
    pub page: Option<String>,
    #[serde(rename = "nextPage")]
    pub next_page: Option<String>,
    #[serde(rename = "prevPage")]
    pub prev_page: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search: String,
    pub page: Option<String>,
    #[serde(rename = "nextPage")]
    pub next_page: Option<String>,
    #[serde(rename = "prevPage")]
    pub prev_page: Option<String>,
}

fn page_request(page: Option<&str>, next: Option<&str>, prev: Option<&str>) -> PageRequest {
    // Anything that does not fit a u32 is as good as garbage.
    let page = page
        .and_then(|p| p.trim().parse::<u32>().ok())
        .map_or(1, |p| p as usize);
    let direction = if next == Some("next") {
        Some(Direction::Next)
    } else if prev == Some("previous") {
        Some(Direction::Previous)
    } else {
        None
    };
    PageRequest { page, direction }
}

impl From<&PagerForm> for PageRequest {
    fn from(form: &PagerForm) -> Self {
        page_request(
            form.page.as_deref(),
            form.next_page.as_deref(),
            form.prev_page.as_deref(),
        )
    }
}

impl From<&SearchForm> for PageRequest {
    fn from(form: &SearchForm) -> Self {
        page_request(
            form.page.as_deref(),
            form.next_page.as_deref(),
            form.prev_page.as_deref(),
        )
    }
}
