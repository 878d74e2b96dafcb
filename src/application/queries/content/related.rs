use super::ContentQueryService;
use crate::application::{dto::ContentSummaryDto, error::ApplicationResult};
use crate::domain::content::related_to;

pub const DEFAULT_RELATED_LIMIT: usize = 3;
pub const MAX_RELATED_LIMIT: usize = 20;

pub struct RelatedContentQuery {
    pub slug: String,
    pub limit: Option<usize>,
}

impl ContentQueryService {
    pub fn related_content(
        &self,
        query: RelatedContentQuery,
    ) -> ApplicationResult<Vec<ContentSummaryDto>> {
        let item = self.find_item(&query.slug)?;
        let limit = match query.limit {
            Some(0) | None => DEFAULT_RELATED_LIMIT,
            Some(limit) => limit.min(MAX_RELATED_LIMIT),
        };

        Ok(related_to(item, &self.corpus, limit)
            .into_iter()
            .map(Into::into)
            .collect())
    }
}
