use crate::domain::content::{ContentItem, ContentPage, Facets};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{PaginationDto, ServiceRefDto};

/// Listing view of a content item; omits the body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentSummaryDto {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: Vec<String>,
    pub content_type: String,
    pub difficulty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_service: Option<String>,
    pub targeted_services: Vec<String>,
    pub published_at: DateTime<Utc>,
    pub featured: bool,
    pub word_count: usize,
    pub reading_time_minutes: usize,
}

impl From<&ContentItem> for ContentSummaryDto {
    fn from(item: &ContentItem) -> Self {
        Self {
            slug: item.slug.to_string(),
            title: item.title.clone(),
            description: item.description.clone(),
            category: item.category.clone(),
            tags: item.tags.iter().cloned().collect(),
            content_type: item.content_type.as_str().to_string(),
            difficulty: item.difficulty.as_str().to_string(),
            primary_service: item.primary_service.as_ref().map(ToString::to_string),
            targeted_services: item
                .targeted_services
                .iter()
                .map(ToString::to_string)
                .collect(),
            published_at: item.published_at,
            featured: item.featured,
            word_count: item.word_count(),
            reading_time_minutes: item.estimated_reading_minutes(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentDetailDto {
    #[serde(flatten)]
    pub summary: ContentSummaryDto,
    pub body: String,
}

impl From<&ContentItem> for ContentDetailDto {
    fn from(item: &ContentItem) -> Self {
        Self {
            summary: item.into(),
            body: item.body.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FacetsDto {
    pub categories: Vec<String>,
    pub services: Vec<ServiceRefDto>,
    pub content_types: Vec<String>,
    pub difficulties: Vec<String>,
}

impl From<Facets> for FacetsDto {
    fn from(value: Facets) -> Self {
        Self {
            categories: value.categories,
            services: value.services.into_iter().map(Into::into).collect(),
            content_types: value
                .content_types
                .iter()
                .map(|kind| kind.as_str().to_string())
                .collect(),
            difficulties: value
                .difficulties
                .iter()
                .map(|level| level.as_str().to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentPageDto {
    pub items: Vec<ContentSummaryDto>,
    pub pagination: PaginationDto,
    pub facets: FacetsDto,
}

impl From<ContentPage<'_>> for ContentPageDto {
    fn from(page: ContentPage<'_>) -> Self {
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            pagination: page.pagination.into(),
            facets: page.facets.into(),
        }
    }
}
