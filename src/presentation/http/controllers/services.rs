use crate::application::{
    dto::{ServiceCategoryDto, ServiceDto, StrategyAnalysisDto},
    queries::services::{AnalyzeStrategyQuery, GetServiceQuery, ListServiceCategoriesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LocaleParams {
    /// Locale for service names, defaults to `en`.
    pub locale: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/v1/services",
    params(LocaleParams),
    responses(
        (status = 200, description = "Service catalog grouped by category.", body = [ServiceCategoryDto])
    ),
    tag = "Services"
)]
pub async fn list_service_categories(
    Extension(state): Extension<HttpState>,
    Query(params): Query<LocaleParams>,
) -> HttpResult<Json<Vec<ServiceCategoryDto>>> {
    state
        .services
        .service_queries
        .list_categories(ListServiceCategoriesQuery {
            locale: params.locale,
        })
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/services/{id}",
    params(("id" = String, Path, description = "Service id"), LocaleParams),
    responses(
        (status = 200, description = "Service details.", body = ServiceDto),
        (status = 404, description = "Unknown service.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Services"
)]
pub async fn get_service(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    Query(params): Query<LocaleParams>,
) -> HttpResult<Json<ServiceDto>> {
    state
        .services
        .service_queries
        .get_service(GetServiceQuery {
            id,
            locale: params.locale,
        })
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/services/{id}/strategy",
    params(("id" = String, Path, description = "Service id")),
    responses(
        (status = 200, description = "Recommended topics and content gaps.", body = StrategyAnalysisDto),
        (status = 404, description = "No strategy registered for the service.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Services"
)]
pub async fn analyze_strategy(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<StrategyAnalysisDto>> {
    state
        .services
        .service_queries
        .analyze_strategy(AnalyzeStrategyQuery { service_id: id })
        .into_http()
        .map(Json)
}
