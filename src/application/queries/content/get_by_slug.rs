use super::ContentQueryService;
use crate::application::{dto::ContentDetailDto, error::ApplicationResult};

pub struct GetContentBySlugQuery {
    pub slug: String,
}

impl ContentQueryService {
    pub fn get_content_by_slug(
        &self,
        query: GetContentBySlugQuery,
    ) -> ApplicationResult<ContentDetailDto> {
        let item = self.find_item(&query.slug)?;
        Ok(item.into())
    }
}
