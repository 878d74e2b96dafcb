// src/domain/service/strategy.rs
use crate::domain::content::{ContentCorpus, ContentItem, Difficulty};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::service::catalog::ServiceCatalog;
use crate::domain::service::entity::ServiceContentStrategy;
use crate::domain::service::value_objects::ServiceId;

pub const MAX_RECOMMENDED_TOPICS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyAnalysis {
    pub service_id: ServiceId,
    pub recommended_topics: Vec<String>,
    pub content_gaps: Vec<String>,
    /// Number of items referencing the service.
    pub matched_content: usize,
}

/// Look up the strategy registered for `service_id` and analyze it against
/// the corpus.
pub fn analyze(
    service_id: &ServiceId,
    corpus: &ContentCorpus,
    catalog: &dyn ServiceCatalog,
) -> DomainResult<StrategyAnalysis> {
    let strategy = catalog.get_strategy(service_id).ok_or_else(|| {
        DomainError::NotFound(format!("no content strategy for service `{service_id}`"))
    })?;
    Ok(analyze_strategy(&strategy, corpus))
}

pub fn analyze_strategy(
    strategy: &ServiceContentStrategy,
    corpus: &ContentCorpus,
) -> StrategyAnalysis {
    let matched: Vec<&ContentItem> = corpus.matched_to(&strategy.service_id).collect();
    StrategyAnalysis {
        service_id: strategy.service_id.clone(),
        recommended_topics: recommended_topics(strategy),
        content_gaps: content_gaps(strategy, &matched),
        matched_content: matched.len(),
    }
}

fn base_topics(keyword: &str) -> [String; 5] {
    [
        format!("Advanced {keyword} Techniques"),
        format!("{keyword} Best Practices"),
        format!("Common {keyword} Mistakes to Avoid"),
        format!("{keyword} Case Study"),
        format!("How to Get Started with {keyword}"),
    ]
}

fn type_topic(content_type: &str, keyword: &str) -> Option<String> {
    match content_type {
        "tutorial" => Some(format!("Step-by-step {keyword} Tutorial")),
        "case-study" => Some(format!("Real-world {keyword} Implementation")),
        "opinion" => Some(format!("The Future of {keyword}")),
        "news" => Some(format!("Latest {keyword} Developments")),
        _ => None,
    }
}

fn recommended_topics(strategy: &ServiceContentStrategy) -> Vec<String> {
    let base = strategy
        .keywords
        .iter()
        .flat_map(|keyword| base_topics(keyword));
    let typed = strategy.content_types.iter().flat_map(|content_type| {
        strategy
            .keywords
            .iter()
            .filter_map(move |keyword| type_topic(content_type, keyword))
    });
    base.chain(typed).take(MAX_RECOMMENDED_TOPICS).collect()
}

fn content_gaps(strategy: &ServiceContentStrategy, matched: &[&ContentItem]) -> Vec<String> {
    let type_gaps = strategy
        .content_types
        .iter()
        .filter(|wanted| {
            !matched
                .iter()
                .any(|item| item.content_type.as_str() == wanted.as_str())
        })
        .map(|wanted| format!("Missing {wanted} content"));

    let keyword_gaps = strategy
        .keywords
        .iter()
        .filter(|keyword| !matched.iter().any(|item| item.mentions(keyword)))
        .map(|keyword| format!("No content covering \"{keyword}\""));

    let difficulty_gaps = Difficulty::ALL
        .into_iter()
        .filter(|level| !matched.iter().any(|item| item.difficulty == *level))
        .map(|level| format!("Missing {level} level content"));

    type_gaps.chain(keyword_gaps).chain(difficulty_gaps).collect()
}
