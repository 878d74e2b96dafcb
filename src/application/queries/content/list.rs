use super::ContentQueryService;
use crate::application::{dto::ContentPageDto, error::ApplicationResult};
use crate::domain::content::{ContentQueryParams, query};

pub struct ListContentQuery {
    pub params: ContentQueryParams,
}

impl ContentQueryService {
    pub fn list_content(&self, request: ListContentQuery) -> ApplicationResult<ContentPageDto> {
        let page = query(&self.corpus, &request.params, self.catalog.as_ref());
        tracing::debug!(
            total = page.pagination.total_posts,
            page = page.pagination.current_page,
            "content listing computed"
        );
        Ok(page.into())
    }
}
