use crate::domain::service::value_objects::{LocalizedText, PriceRange, ServiceId};

#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: ServiceId,
    pub name: LocalizedText,
    pub short_description: LocalizedText,
    pub price_range: PriceRange,
}

impl Service {
    /// Case-insensitive match of `needle` against the id and the localized
    /// name/description. `needle` must already be lowercased.
    pub fn matches_text(&self, needle: &str, locale: &str) -> bool {
        self.id.as_str().to_lowercase().contains(needle)
            || self.name.resolve(locale).to_lowercase().contains(needle)
            || self
                .short_description
                .resolve(locale)
                .to_lowercase()
                .contains(needle)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCategory {
    pub category: String,
    pub services: Vec<Service>,
}

/// Content plan for one service. `content_types` keeps the raw strings from
/// the catalog: values outside the content type enumeration are allowed and
/// simply never match published content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceContentStrategy {
    pub service_id: ServiceId,
    pub keywords: Vec<String>,
    pub content_types: Vec<String>,
}
