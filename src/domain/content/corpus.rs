use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domain::content::entity::ContentItem;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::service::ServiceId;

/// The loaded content set, frozen for the lifetime of the process.
///
/// Items are kept newest first with ties broken by slug, which is the
/// default listing order; engines that need a different order sort a copy.
#[derive(Debug, Clone, Default)]
pub struct ContentCorpus {
    items: Vec<ContentItem>,
}

impl ContentCorpus {
    pub fn new(mut items: Vec<ContentItem>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.slug.as_str()) {
                return Err(DomainError::Configuration(format!(
                    "duplicate content slug `{}`",
                    item.slug
                )));
            }
        }
        items.sort_by(newest_first);
        Ok(Self { items })
    }

    pub fn items(&self) -> &[ContentItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find_by_slug(&self, slug: &str) -> Option<&ContentItem> {
        self.items.iter().find(|item| item.slug.as_str() == slug)
    }

    pub fn matched_to<'a>(
        &'a self,
        service_id: &'a ServiceId,
    ) -> impl Iterator<Item = &'a ContentItem> + 'a {
        self.items
            .iter()
            .filter(move |item| item.is_matched_to(service_id))
    }
}

pub fn newest_first(a: &ContentItem, b: &ContentItem) -> Ordering {
    b.published_at
        .cmp(&a.published_at)
        .then_with(|| a.slug.cmp(&b.slug))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::content::testing::{item, services};

    #[test]
    fn items_are_ordered_newest_first_then_by_slug() {
        let corpus = ContentCorpus::new(vec![
            item("older", 1),
            item("b-same-day", 5),
            item("a-same-day", 5),
            item("newest", 9),
        ])
        .unwrap();

        let slugs: Vec<&str> = corpus.items().iter().map(|i| i.slug.as_str()).collect();
        assert_eq!(slugs, vec!["newest", "a-same-day", "b-same-day", "older"]);
    }

    #[test]
    fn duplicate_slugs_are_rejected() {
        let err = ContentCorpus::new(vec![item("dup", 1), item("dup", 2)]).unwrap_err();
        assert!(matches!(err, DomainError::Configuration(_)));
    }

    #[test]
    fn find_and_match_helpers() {
        let mut audited = item("audited", 1);
        audited.targeted_services = services(&["audit"]);
        let corpus = ContentCorpus::new(vec![audited, item("plain", 2)]).unwrap();

        assert!(corpus.find_by_slug("plain").is_some());
        assert!(corpus.find_by_slug("missing").is_none());

        let audit = ServiceId::new("audit").unwrap();
        let matched: Vec<&str> = corpus.matched_to(&audit).map(|i| i.slug.as_str()).collect();
        assert_eq!(matched, vec!["audited"]);
        assert!(ContentCorpus::default().is_empty());
    }
}
