mod get_by_slug;
mod list;
mod related;
mod service;

pub use get_by_slug::GetContentBySlugQuery;
pub use list::ListContentQuery;
pub use related::{DEFAULT_RELATED_LIMIT, MAX_RELATED_LIMIT, RelatedContentQuery};
pub use service::ContentQueryService;
