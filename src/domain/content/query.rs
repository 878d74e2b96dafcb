// src/domain/content/query.rs
use std::collections::{BTreeSet, HashSet};

use crate::domain::content::corpus::ContentCorpus;
use crate::domain::content::entity::ContentItem;
use crate::domain::content::value_objects::{ContentType, Difficulty};
use crate::domain::service::{DEFAULT_LOCALE, ServiceCatalog, ServiceId};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Listing parameters. Every field is optional; see [`query`] for how they
/// combine.
#[derive(Debug, Clone, Default)]
pub struct ContentQueryParams {
    pub search: Option<String>,
    pub service_id: Option<String>,
    pub category: Option<String>,
    pub content_type: Option<String>,
    pub difficulty: Option<String>,
    pub featured_only: bool,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub locale: Option<String>,
}

impl ContentQueryParams {
    /// Requested page, clamped to the default when absent or non-positive.
    pub fn page(&self) -> usize {
        positive_or(self.page, DEFAULT_PAGE)
    }

    pub fn page_size(&self) -> usize {
        positive_or(self.page_size, DEFAULT_PAGE_SIZE)
    }

    pub fn locale(&self) -> &str {
        non_blank(&self.locale).unwrap_or(DEFAULT_LOCALE)
    }

    fn filter_mode(&self) -> FilterMode<'_> {
        if let Some(text) = non_blank(&self.search) {
            FilterMode::Search(text)
        } else if let Some(id) = non_blank(&self.service_id) {
            FilterMode::Service(id)
        } else if let Some(category) = non_blank(&self.category) {
            FilterMode::Category(category)
        } else if let Some(kind) = non_blank(&self.content_type) {
            FilterMode::ContentType(kind)
        } else if let Some(level) = non_blank(&self.difficulty) {
            FilterMode::Difficulty(level)
        } else {
            FilterMode::All
        }
    }
}

fn positive_or(value: Option<i64>, default: usize) -> usize {
    match value {
        Some(v) if v > 0 => usize::try_from(v).unwrap_or(default),
        _ => default,
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Only one primary filter is ever active; earlier variants win.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FilterMode<'a> {
    Search(&'a str),
    Service(&'a str),
    Category(&'a str),
    ContentType(&'a str),
    Difficulty(&'a str),
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_posts: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Pagination {
    pub fn new(current_page: usize, page_size: usize, total_posts: usize) -> Self {
        let total_pages = total_posts.div_ceil(page_size.max(1));
        Self {
            current_page,
            total_pages,
            total_posts,
            has_next_page: current_page < total_pages,
            has_prev_page: current_page > 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRef {
    pub id: ServiceId,
    pub name: String,
}

/// Filter values available across the whole corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Facets {
    pub categories: Vec<String>,
    pub services: Vec<ServiceRef>,
    pub content_types: Vec<ContentType>,
    pub difficulties: Vec<Difficulty>,
}

#[derive(Debug, Clone)]
pub struct ContentPage<'a> {
    pub items: Vec<&'a ContentItem>,
    pub pagination: Pagination,
    pub facets: Facets,
}

/// Filter, order and paginate the corpus.
///
/// The first non-blank of `search`, `service_id`, `category`, `content_type`
/// and `difficulty` selects the filter; the rest are ignored. `featured_only`
/// then narrows the result. Facets always describe the unfiltered corpus.
pub fn query<'a>(
    corpus: &'a ContentCorpus,
    params: &ContentQueryParams,
    catalog: &dyn ServiceCatalog,
) -> ContentPage<'a> {
    let locale = params.locale();
    let matcher = Matcher::new(params.filter_mode(), catalog, locale);

    let matched: Vec<&ContentItem> = corpus
        .items()
        .iter()
        .filter(|item| matcher.matches(item))
        .filter(|item| !params.featured_only || item.featured)
        .collect();

    let page = params.page();
    let page_size = params.page_size();
    let pagination = Pagination::new(page, page_size, matched.len());
    let offset = (page - 1).saturating_mul(page_size);
    let items = matched.into_iter().skip(offset).take(page_size).collect();

    ContentPage {
        items,
        pagination,
        facets: facets(corpus, catalog, locale),
    }
}

struct Matcher<'p> {
    mode: FilterMode<'p>,
    search_services: HashSet<ServiceId>,
}

impl<'p> Matcher<'p> {
    fn new(mode: FilterMode<'p>, catalog: &dyn ServiceCatalog, locale: &str) -> Self {
        let search_services = match mode {
            FilterMode::Search(text) => catalog
                .search_services(text, locale)
                .into_iter()
                .map(|service| service.id)
                .collect(),
            _ => HashSet::new(),
        };
        Self {
            mode,
            search_services,
        }
    }

    fn matches(&self, item: &ContentItem) -> bool {
        match self.mode {
            FilterMode::Search(text) => {
                item.mentions(text)
                    || item
                        .referenced_services()
                        .into_iter()
                        .any(|id| self.search_services.contains(id))
            }
            FilterMode::Service(id) => {
                item.primary_service
                    .as_ref()
                    .is_some_and(|primary| primary.as_str() == id)
                    || item.targeted_services.iter().any(|s| s.as_str() == id)
            }
            FilterMode::Category(category) => item.category == category,
            FilterMode::ContentType(kind) => item.content_type.as_str() == kind,
            FilterMode::Difficulty(level) => item.difficulty.as_str() == level,
            FilterMode::All => true,
        }
    }
}

fn facets(corpus: &ContentCorpus, catalog: &dyn ServiceCatalog, locale: &str) -> Facets {
    let categories: BTreeSet<&str> = corpus
        .items()
        .iter()
        .map(|item| item.category.as_str())
        .collect();

    let referenced: BTreeSet<&ServiceId> = corpus
        .items()
        .iter()
        .flat_map(|item| item.referenced_services())
        .collect();

    let services = referenced
        .into_iter()
        .filter_map(|id| match catalog.get_service_by_id(id) {
            Some(service) => Some(ServiceRef {
                id: service.id.clone(),
                name: service.name.resolve(locale).to_string(),
            }),
            None => {
                tracing::debug!(service_id = %id, "content references unknown service");
                None
            }
        })
        .collect();

    Facets {
        categories: categories.into_iter().map(str::to_string).collect(),
        services,
        content_types: ContentType::ALL.to_vec(),
        difficulties: Difficulty::ALL.to_vec(),
    }
}
