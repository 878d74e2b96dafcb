use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::content::{ContentCorpus, ContentItem};
use crate::domain::service::ServiceCatalog;

pub struct ContentQueryService {
    pub(super) corpus: Arc<ContentCorpus>,
    pub(super) catalog: Arc<dyn ServiceCatalog>,
}

impl ContentQueryService {
    pub fn new(corpus: Arc<ContentCorpus>, catalog: Arc<dyn ServiceCatalog>) -> Self {
        Self { corpus, catalog }
    }

    pub(super) fn find_item(&self, slug: &str) -> ApplicationResult<&ContentItem> {
        let slug = slug.trim();
        if slug.is_empty() {
            return Err(ApplicationError::validation("content slug cannot be empty"));
        }
        self.corpus
            .find_by_slug(slug)
            .ok_or_else(|| ApplicationError::not_found(format!("content `{slug}` not found")))
    }
}
