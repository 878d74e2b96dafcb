use super::{
    ServiceQueryService,
    service::{locale_or_default, parse_id},
};
use crate::application::{
    dto::ServiceDto,
    error::{ApplicationError, ApplicationResult},
};

pub struct GetServiceQuery {
    pub id: String,
    pub locale: Option<String>,
}

impl ServiceQueryService {
    pub fn get_service(&self, query: GetServiceQuery) -> ApplicationResult<ServiceDto> {
        let id = parse_id(&query.id)?;
        let service = self
            .catalog
            .get_service_by_id(&id)
            .ok_or_else(|| ApplicationError::not_found(format!("service `{id}` not found")))?;
        Ok(ServiceDto::localized(
            &service,
            locale_or_default(query.locale.as_deref()),
        ))
    }
}
