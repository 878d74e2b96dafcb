use std::sync::Arc;

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::content::ContentCorpus;
use crate::domain::service::{DEFAULT_LOCALE, ServiceCatalog, ServiceId};

pub struct ServiceQueryService {
    pub(super) corpus: Arc<ContentCorpus>,
    pub(super) catalog: Arc<dyn ServiceCatalog>,
}

impl ServiceQueryService {
    pub fn new(corpus: Arc<ContentCorpus>, catalog: Arc<dyn ServiceCatalog>) -> Self {
        Self { corpus, catalog }
    }
}

/// A blank id can never name a service, so it is reported as not found.
pub(super) fn parse_id(raw: &str) -> ApplicationResult<ServiceId> {
    ServiceId::new(raw).map_err(|_| ApplicationError::not_found("service not found"))
}

pub(super) fn locale_or_default(locale: Option<&str>) -> &str {
    locale
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_LOCALE)
}
