// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        queries::{content::ContentQueryService, services::ServiceQueryService},
    },
    domain::{
        content::{ContentCorpus, ContentRepository},
        service::ServiceCatalog,
    },
};

/// Per-process container for the query services. Built once at startup and
/// shared read-only between requests.
pub struct ApplicationServices {
    pub content_queries: Arc<ContentQueryService>,
    pub service_queries: Arc<ServiceQueryService>,
    corpus: Arc<ContentCorpus>,
}

impl ApplicationServices {
    pub fn new(corpus: Arc<ContentCorpus>, catalog: Arc<dyn ServiceCatalog>) -> Self {
        let content_queries = Arc::new(ContentQueryService::new(
            Arc::clone(&corpus),
            Arc::clone(&catalog),
        ));
        let service_queries = Arc::new(ServiceQueryService::new(
            Arc::clone(&corpus),
            Arc::clone(&catalog),
        ));

        Self {
            content_queries,
            service_queries,
            corpus,
        }
    }

    /// Load the corpus from `content_repo` once and wire the services around it.
    pub async fn load(
        content_repo: &dyn ContentRepository,
        catalog: Arc<dyn ServiceCatalog>,
    ) -> ApplicationResult<Self> {
        let items = content_repo.load_all().await?;
        let corpus = ContentCorpus::new(items)?;
        tracing::info!(items = corpus.len(), "content corpus loaded");
        Ok(Self::new(Arc::new(corpus), catalog))
    }

    pub fn corpus(&self) -> Arc<ContentCorpus> {
        Arc::clone(&self.corpus)
    }
}
