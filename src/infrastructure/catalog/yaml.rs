// src/infrastructure/catalog/yaml.rs
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::service::{
    CatalogData, InMemoryServiceCatalog, LocalizedText, PriceRange, Service, ServiceCategory,
    ServiceContentStrategy, ServiceId,
};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    categories: Vec<CategoryRecord>,
    #[serde(default)]
    strategies: Vec<StrategyRecord>,
}

#[derive(Debug, Deserialize)]
struct CategoryRecord {
    category: String,
    #[serde(default)]
    services: Vec<ServiceRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ServiceRecord {
    id: String,
    name: TextRecord,
    #[serde(default)]
    short_description: Option<TextRecord>,
    price_range: PriceRecord,
}

/// Either a plain string or a map of locale to string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextRecord {
    Plain(String),
    Localized(BTreeMap<String, String>),
}

impl From<TextRecord> for LocalizedText {
    fn from(value: TextRecord) -> Self {
        match value {
            TextRecord::Plain(text) => LocalizedText::single(text),
            TextRecord::Localized(entries) => LocalizedText::new(entries),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PriceRecord {
    min: f64,
    max: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StrategyRecord {
    service_id: String,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    content_types: Vec<String>,
}

impl TryFrom<ServiceRecord> for Service {
    type Error = DomainError;

    fn try_from(record: ServiceRecord) -> DomainResult<Self> {
        let name: LocalizedText = record.name.into();
        if name.is_empty() {
            return Err(DomainError::Validation(format!(
                "service `{}` has no name",
                record.id
            )));
        }
        Ok(Self {
            id: ServiceId::new(record.id)?,
            name,
            short_description: record
                .short_description
                .map(Into::into)
                .unwrap_or_default(),
            price_range: PriceRange::new(record.price_range.min, record.price_range.max)?,
        })
    }
}

impl TryFrom<CatalogFile> for CatalogData {
    type Error = DomainError;

    fn try_from(file: CatalogFile) -> DomainResult<Self> {
        let categories = file
            .categories
            .into_iter()
            .map(|record| -> DomainResult<ServiceCategory> {
                Ok(ServiceCategory {
                    category: record.category,
                    services: record
                        .services
                        .into_iter()
                        .map(Service::try_from)
                        .collect::<DomainResult<Vec<_>>>()?,
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        let strategies = file
            .strategies
            .into_iter()
            .map(|record| -> DomainResult<ServiceContentStrategy> {
                Ok(ServiceContentStrategy {
                    service_id: ServiceId::new(record.service_id)?,
                    keywords: record.keywords,
                    content_types: record
                        .content_types
                        .into_iter()
                        .map(|kind| kind.trim().to_lowercase())
                        .collect(),
                })
            })
            .collect::<DomainResult<Vec<_>>>()?;

        Ok(Self {
            categories,
            strategies,
        })
    }
}

/// Parse and validate a YAML catalog document.
pub fn parse_catalog(source: &str) -> DomainResult<InMemoryServiceCatalog> {
    let file: CatalogFile = serde_yaml::from_str(source)
        .map_err(|err| DomainError::Configuration(format!("invalid service catalog: {err}")))?;
    CatalogData::try_from(file)?.validate()
}

pub async fn load_catalog(path: &Path) -> DomainResult<InMemoryServiceCatalog> {
    let source = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| DomainError::Io(format!("{}: {err}", path.display())))?;
    let catalog = parse_catalog(&source)?;
    tracing::info!(
        path = %path.display(),
        services = catalog.service_count(),
        strategies = catalog.strategy_count(),
        "service catalog loaded"
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::service::ServiceCatalog;

    const SAMPLE: &str = r#"
categories:
  - category: Security
    services:
      - id: audit
        name:
          en: Smart Contract Audit
          fr: Audit de contrats
        shortDescription: Line-by-line review
        priceRange: { min: 5000, max: 20000 }
  - category: Education
    services:
      - id: bitcoin-course
        name: Bitcoin Course
        priceRange: { min: 200, max: 400 }
strategies:
  - serviceId: audit
    keywords: [reentrancy, fuzzing]
    contentTypes: [Tutorial, case-study]
"#;

    #[test]
    fn parses_localized_and_plain_names() {
        let catalog = parse_catalog(SAMPLE).unwrap();
        let audit = catalog
            .get_service_by_id(&ServiceId::new("audit").unwrap())
            .unwrap();
        assert_eq!(audit.name.resolve("fr"), "Audit de contrats");
        assert_eq!(audit.short_description.resolve("fr"), "Line-by-line review");
        assert_eq!(audit.price_range.max(), 20000.0);

        let course = catalog
            .get_service_by_id(&ServiceId::new("bitcoin-course").unwrap())
            .unwrap();
        assert_eq!(course.name.resolve("en"), "Bitcoin Course");
        assert_eq!(catalog.get_service_categories().len(), 2);
    }

    #[test]
    fn strategy_content_types_are_normalized() {
        let catalog = parse_catalog(SAMPLE).unwrap();
        let strategy = catalog
            .get_strategy(&ServiceId::new("audit").unwrap())
            .unwrap();
        assert_eq!(strategy.content_types, vec!["tutorial", "case-study"]);
        assert_eq!(strategy.keywords, vec!["reentrancy", "fuzzing"]);
    }

    #[test]
    fn dangling_strategy_fails_to_load() {
        let source = format!("{SAMPLE}  - serviceId: ghost\n    keywords: [x]\n");
        assert!(matches!(
            parse_catalog(&source),
            Err(DomainError::Configuration(_))
        ));
    }

    #[test]
    fn inverted_price_range_is_rejected() {
        let source = r#"
categories:
  - category: X
    services:
      - id: broken
        name: Broken
        priceRange: { min: 10, max: 1 }
"#;
        assert!(matches!(
            parse_catalog(source),
            Err(DomainError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn load_catalog_reads_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("services.yaml");
        std::fs::write(&path, SAMPLE).unwrap();

        let catalog = load_catalog(&path).await.unwrap();
        assert_eq!(catalog.service_count(), 2);

        let missing = load_catalog(&dir.path().join("nope.yaml")).await;
        assert!(matches!(missing, Err(DomainError::Io(_))));
    }
}
