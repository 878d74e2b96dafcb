use crate::domain::content::entity::ContentItem;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Source of published content. Invoked once at startup; the result is
/// frozen into a [`ContentCorpus`](super::ContentCorpus).
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn load_all(&self) -> DomainResult<Vec<ContentItem>>;
}
