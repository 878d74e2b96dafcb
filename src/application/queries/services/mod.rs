mod categories;
mod get_by_id;
mod service;
mod strategy;

pub use categories::ListServiceCategoriesQuery;
pub use get_by_id::GetServiceQuery;
pub use service::ServiceQueryService;
pub use strategy::AnalyzeStrategyQuery;
