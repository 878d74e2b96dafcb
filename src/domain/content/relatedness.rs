use crate::domain::content::corpus::ContentCorpus;
use crate::domain::content::entity::ContentItem;

/// Additive weights for each attribute two items can share.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelatednessWeights {
    pub category: u32,
    /// Per shared tag.
    pub tag: u32,
    /// Per shared service reference.
    pub service: u32,
    pub content_type: u32,
    pub difficulty: u32,
}

pub const WEIGHTS: RelatednessWeights = RelatednessWeights {
    category: 10,
    tag: 5,
    service: 8,
    content_type: 3,
    difficulty: 2,
};

/// `count` shared attributes at `weight` each, saturating at `u32::MAX`.
fn weighted(count: usize, weight: u32) -> u32 {
    u32::try_from(count)
        .unwrap_or(u32::MAX)
        .saturating_mul(weight)
}

pub fn score(item: &ContentItem, candidate: &ContentItem) -> u32 {
    let mut total: u32 = 0;
    if candidate.category == item.category {
        total = total.saturating_add(WEIGHTS.category);
    }

    let shared_tags = candidate.tags.intersection(&item.tags).count();
    total = total.saturating_add(weighted(shared_tags, WEIGHTS.tag));

    let own_services = item.referenced_services();
    let shared_services = candidate
        .referenced_services()
        .intersection(&own_services)
        .count();
    total = total.saturating_add(weighted(shared_services, WEIGHTS.service));

    if candidate.content_type == item.content_type {
        total = total.saturating_add(WEIGHTS.content_type);
    }
    if candidate.difficulty == item.difficulty {
        total = total.saturating_add(WEIGHTS.difficulty);
    }
    total
}

/// Up to `limit` other items ranked by [`score`], highest first.
///
/// Equal scores keep corpus order (newest first). Zero scores still fill the
/// list; only the item itself is excluded.
pub fn related_to<'a>(
    item: &ContentItem,
    corpus: &'a ContentCorpus,
    limit: usize,
) -> Vec<&'a ContentItem> {
    let mut ranked: Vec<(&ContentItem, u32)> = corpus
        .items()
        .iter()
        .filter(|candidate| candidate.slug != item.slug)
        .map(|candidate| (candidate, score(item, candidate)))
        .collect();

    // sort_by is stable
    ranked.sort_by(|(_, a), (_, b)| b.cmp(a));
    ranked
        .into_iter()
        .take(limit)
        .map(|(candidate, _)| candidate)
        .collect()
}
