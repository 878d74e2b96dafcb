pub mod corpus;
pub mod entity;
pub mod query;
pub mod relatedness;
pub mod repository;
pub mod value_objects;

#[cfg(test)]
pub(crate) mod testing;

pub use corpus::ContentCorpus;
pub use entity::ContentItem;
pub use query::{ContentPage, ContentQueryParams, Facets, Pagination, ServiceRef, query};
pub use relatedness::{WEIGHTS, related_to, score};
pub use repository::ContentRepository;
pub use value_objects::{ContentSlug, ContentType, Difficulty};
