// src/presentation/http/controllers/content.rs
use crate::application::{
    dto::{ContentDetailDto, ContentPageDto, ContentSummaryDto},
    queries::content::{GetContentBySlugQuery, ListContentQuery, RelatedContentQuery},
};
use crate::domain::content::ContentQueryParams;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

/// Flat listing parameters. Numeric and boolean values are accepted as raw
/// strings; anything unparsable falls back to the default.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ContentListParams {
    /// Free-text search over title, description, tags and service names.
    pub search: Option<String>,
    pub service_id: Option<String>,
    pub category: Option<String>,
    /// One of blog, news, tutorial, case-study, opinion.
    #[serde(alias = "type")]
    pub content_type: Option<String>,
    /// One of Beginner, Intermediate, Advanced.
    pub difficulty: Option<String>,
    /// `true` or `1` to keep featured items only.
    #[serde(alias = "featured")]
    pub featured_only: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub locale: Option<String>,
}

fn lenient_number(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse().ok())
}

fn is_truthy(raw: &str) -> bool {
    let raw = raw.trim();
    raw == "1" || raw.eq_ignore_ascii_case("true")
}

impl From<ContentListParams> for ContentQueryParams {
    fn from(params: ContentListParams) -> Self {
        Self {
            featured_only: params.featured_only.as_deref().is_some_and(is_truthy),
            page: lenient_number(params.page.as_deref()),
            page_size: lenient_number(params.page_size.as_deref()),
            search: params.search,
            service_id: params.service_id,
            category: params.category,
            content_type: params.content_type,
            difficulty: params.difficulty,
            locale: params.locale,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RelatedParams {
    /// Maximum number of items, default 3, capped at 20.
    pub limit: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/content",
    params(ContentListParams),
    responses(
        (status = 200, description = "Filtered and paginated content with facets.", body = ContentPageDto)
    ),
    tag = "Content"
)]
pub async fn list_content(
    Extension(state): Extension<HttpState>,
    Query(params): Query<ContentListParams>,
) -> HttpResult<Json<ContentPageDto>> {
    state
        .services
        .content_queries
        .list_content(ListContentQuery {
            params: params.into(),
        })
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/content/{slug}",
    params(("slug" = String, Path, description = "Content slug")),
    responses(
        (status = 200, description = "Content item with body.", body = ContentDetailDto),
        (status = 400, description = "Blank slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn get_content_by_slug(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<ContentDetailDto>> {
    state
        .services
        .content_queries
        .get_content_by_slug(GetContentBySlugQuery { slug })
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/content/{slug}/related",
    params(("slug" = String, Path, description = "Content slug"), RelatedParams),
    responses(
        (status = 200, description = "Most related items, best match first.", body = [ContentSummaryDto]),
        (status = 400, description = "Blank slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn related_content(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Query(params): Query<RelatedParams>,
) -> HttpResult<Json<Vec<ContentSummaryDto>>> {
    let limit = lenient_number(params.limit.as_deref())
        .and_then(|limit| usize::try_from(limit).ok());

    state
        .services
        .content_queries
        .related_content(RelatedContentQuery { slug, limit })
        .into_http()
        .map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_numbers_fall_back_to_none() {
        let params = ContentListParams {
            page: Some("two".into()),
            page_size: Some(" 5 ".into()),
            featured_only: Some("TRUE".into()),
            ..Default::default()
        };
        let query: ContentQueryParams = params.into();
        assert_eq!(query.page, None);
        assert_eq!(query.page_size, Some(5));
        assert!(query.featured_only);
    }

    #[test]
    fn featured_defaults_to_false() {
        let query: ContentQueryParams = ContentListParams {
            featured_only: Some("no".into()),
            ..Default::default()
        }
        .into();
        assert!(!query.featured_only);
    }
}
