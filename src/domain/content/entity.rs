// src/domain/content/entity.rs
use crate::domain::content::value_objects::{ContentSlug, ContentType, Difficulty};
use crate::domain::service::ServiceId;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

pub const WORDS_PER_MINUTE: usize = 200;

/// A published piece of content. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentItem {
    pub slug: ContentSlug,
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: BTreeSet<String>,
    pub content_type: ContentType,
    pub difficulty: Difficulty,
    pub primary_service: Option<ServiceId>,
    pub targeted_services: BTreeSet<ServiceId>,
    pub published_at: DateTime<Utc>,
    pub featured: bool,
    pub body: String,
}

impl ContentItem {
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }

    pub fn estimated_reading_minutes(&self) -> usize {
        self.word_count().div_ceil(WORDS_PER_MINUTE)
    }

    /// Targeted services plus the primary service, without duplicates.
    pub fn referenced_services(&self) -> BTreeSet<&ServiceId> {
        self.targeted_services
            .iter()
            .chain(self.primary_service.iter())
            .collect()
    }

    pub fn is_matched_to(&self, service_id: &ServiceId) -> bool {
        self.primary_service.as_ref() == Some(service_id)
            || self.targeted_services.contains(service_id)
    }

    /// Case-insensitive substring match over title, description and tags.
    pub fn mentions(&self, text: &str) -> bool {
        let needle = text.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}
