use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::content::Pagination;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaginationDto {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_posts: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl From<Pagination> for PaginationDto {
    fn from(value: Pagination) -> Self {
        Self {
            current_page: value.current_page,
            total_pages: value.total_pages,
            total_posts: value.total_posts,
            has_next_page: value.has_next_page,
            has_prev_page: value.has_prev_page,
        }
    }
}
