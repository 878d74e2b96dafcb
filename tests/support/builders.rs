// tests/support/builders.rs
use chrono::{DateTime, Duration, TimeZone, Utc};

use folio_core::domain::content::{ContentItem, ContentSlug, ContentType, Difficulty};
use folio_core::domain::service::ServiceId;

pub struct ContentItemBuilder {
    slug: String,
    title: String,
    description: String,
    category: String,
    tags: Vec<String>,
    content_type: ContentType,
    difficulty: Difficulty,
    primary_service: Option<String>,
    targeted_services: Vec<String>,
    published_at: DateTime<Utc>,
    featured: bool,
    body: String,
}

impl ContentItemBuilder {
    pub fn new(slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            title: format!("Title of {slug}"),
            description: String::new(),
            slug,
            category: "General".into(),
            tags: Vec::new(),
            content_type: ContentType::Blog,
            difficulty: Difficulty::Beginner,
            primary_service: None,
            targeted_services: Vec::new(),
            published_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            featured: false,
            body: "Some body text".into(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|tag| tag.to_string()).collect();
        self
    }

    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    pub fn primary_service(mut self, id: impl Into<String>) -> Self {
        self.primary_service = Some(id.into());
        self
    }

    pub fn targeting(mut self, ids: &[&str]) -> Self {
        self.targeted_services = ids.iter().map(|id| id.to_string()).collect();
        self
    }

    /// Publication date as days after 2024-01-01.
    pub fn day(mut self, day: i64) -> Self {
        self.published_at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(day);
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn build(self) -> ContentItem {
        ContentItem {
            slug: ContentSlug::new(self.slug).unwrap(),
            title: self.title,
            description: self.description,
            category: self.category,
            tags: self.tags.into_iter().collect(),
            content_type: self.content_type,
            difficulty: self.difficulty,
            primary_service: self.primary_service.map(|id| ServiceId::new(id).unwrap()),
            targeted_services: self
                .targeted_services
                .into_iter()
                .map(|id| ServiceId::new(id).unwrap())
                .collect(),
            published_at: self.published_at,
            featured: self.featured,
            body: self.body,
        }
    }
}
