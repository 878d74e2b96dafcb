use super::{ServiceQueryService, service::locale_or_default};
use crate::application::{dto::ServiceCategoryDto, error::ApplicationResult};

#[derive(Debug, Default)]
pub struct ListServiceCategoriesQuery {
    pub locale: Option<String>,
}

impl ServiceQueryService {
    pub fn list_categories(
        &self,
        query: ListServiceCategoriesQuery,
    ) -> ApplicationResult<Vec<ServiceCategoryDto>> {
        let locale = locale_or_default(query.locale.as_deref());
        Ok(self
            .catalog
            .get_service_categories()
            .iter()
            .map(|category| ServiceCategoryDto::localized(category, locale))
            .collect())
    }
}
