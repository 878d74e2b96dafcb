pub mod catalog;
pub mod entity;
pub mod strategy;
pub mod value_objects;

pub use catalog::{CatalogData, InMemoryServiceCatalog, ServiceCatalog};
pub use entity::{Service, ServiceCategory, ServiceContentStrategy};
pub use strategy::{StrategyAnalysis, analyze};
pub use value_objects::{DEFAULT_LOCALE, LocalizedText, PriceRange, ServiceId};
