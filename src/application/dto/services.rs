use crate::domain::content::ServiceRef;
use crate::domain::service::{Service, ServiceCategory, StrategyAnalysis};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ServiceRefDto {
    pub id: String,
    pub name: String,
}

impl From<ServiceRef> for ServiceRefDto {
    fn from(value: ServiceRef) -> Self {
        Self {
            id: value.id.into(),
            name: value.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PriceRangeDto {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDto {
    pub id: String,
    pub name: String,
    pub short_description: String,
    pub price_range: PriceRangeDto,
}

impl ServiceDto {
    /// Render a service with its strings resolved for `locale`.
    pub fn localized(service: &Service, locale: &str) -> Self {
        Self {
            id: service.id.to_string(),
            name: service.name.resolve(locale).to_string(),
            short_description: service.short_description.resolve(locale).to_string(),
            price_range: PriceRangeDto {
                min: service.price_range.min(),
                max: service.price_range.max(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ServiceCategoryDto {
    pub category: String,
    pub services: Vec<ServiceDto>,
}

impl ServiceCategoryDto {
    pub fn localized(category: &ServiceCategory, locale: &str) -> Self {
        Self {
            category: category.category.clone(),
            services: category
                .services
                .iter()
                .map(|service| ServiceDto::localized(service, locale))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StrategyAnalysisDto {
    pub service_id: String,
    pub recommended_topics: Vec<String>,
    pub content_gaps: Vec<String>,
    pub matched_content: usize,
}

impl From<StrategyAnalysis> for StrategyAnalysisDto {
    fn from(value: StrategyAnalysis) -> Self {
        Self {
            service_id: value.service_id.into(),
            recommended_topics: value.recommended_topics,
            content_gaps: value.content_gaps,
            matched_content: value.matched_content,
        }
    }
}
