use chrono::{TimeZone, Utc};

use crate::domain::content::{ContentItem, ContentSlug, ContentType, Difficulty};
use crate::domain::service::ServiceId;

/// Minimal item published on 2024-01-01 plus `day` days.
pub(crate) fn item(slug: &str, day: u32) -> ContentItem {
    ContentItem {
        slug: ContentSlug::new(slug).unwrap(),
        title: format!("Title {slug}"),
        description: String::new(),
        category: "General".into(),
        tags: Default::default(),
        content_type: ContentType::Blog,
        difficulty: Difficulty::Beginner,
        primary_service: None,
        targeted_services: Default::default(),
        published_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
            + chrono::Duration::days(i64::from(day)),
        featured: false,
        body: String::new(),
    }
}

pub(crate) fn tags(values: &[&str]) -> std::collections::BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

pub(crate) fn services(values: &[&str]) -> std::collections::BTreeSet<ServiceId> {
    values.iter().map(|v| ServiceId::new(*v).unwrap()).collect()
}
