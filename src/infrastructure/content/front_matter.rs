use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::collections::BTreeSet;

use crate::domain::content::{ContentItem, ContentSlug, ContentType, Difficulty};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::service::ServiceId;

pub const DEFAULT_CATEGORY: &str = "General";

/// YAML header of a content file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontMatter {
    #[serde(default)]
    pub slug: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, alias = "type")]
    pub content_type: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub primary_service: Option<String>,
    #[serde(default)]
    pub targeted_services: Vec<String>,
    #[serde(alias = "date")]
    pub published_at: String,
    #[serde(default)]
    pub featured: bool,
}

/// Split `---` delimited front matter from the body. Returns `None` when the
/// document has no header block.
pub fn split_front_matter(raw: &str) -> Option<(&str, &str)> {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    let rest = raw.strip_prefix("---")?;
    let rest = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            let header = &rest[..offset];
            let body = &rest[offset + line.len()..];
            return Some((header, body));
        }
        offset += line.len();
    }
    None
}

pub fn parse_published_at(value: &str) -> DomainResult<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DomainError::Validation(format!("invalid publication date `{value}`")))
}

impl FrontMatter {
    /// Build a content item. `fallback_slug` is used when the header does not
    /// set one.
    pub fn into_item(self, fallback_slug: &str, body: &str) -> DomainResult<ContentItem> {
        let slug = match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => ContentSlug::new(slug)?,
            _ => ContentSlug::new(fallback_slug)?,
        };

        if self.title.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }

        let content_type = match self.content_type.as_deref() {
            Some(raw) => raw.parse()?,
            None => ContentType::Blog,
        };
        let difficulty = match self.difficulty.as_deref() {
            Some(raw) => raw.parse()?,
            None => Difficulty::Beginner,
        };

        let primary_service = self
            .primary_service
            .filter(|id| !id.trim().is_empty())
            .map(ServiceId::new)
            .transpose()?;
        let targeted_services = self
            .targeted_services
            .into_iter()
            .map(ServiceId::new)
            .collect::<DomainResult<BTreeSet<_>>>()?;

        let category = self
            .category
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        Ok(ContentItem {
            slug,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            category,
            tags: self
                .tags
                .into_iter()
                .map(|tag| tag.trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect(),
            content_type,
            difficulty,
            primary_service,
            targeted_services,
            published_at: parse_published_at(&self.published_at)?,
            featured: self.featured,
            body: body.trim().to_string(),
        })
    }
}
