use std::collections::{BTreeMap, HashMap};

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::service::entity::{Service, ServiceCategory, ServiceContentStrategy};
use crate::domain::service::value_objects::ServiceId;

/// Read access to the service catalog. Implementations hold the catalog in
/// memory; lookups never touch I/O.
pub trait ServiceCatalog: Send + Sync {
    fn get_service_by_id(&self, id: &ServiceId) -> Option<Service>;
    fn search_services(&self, text: &str, locale: &str) -> Vec<Service>;
    fn get_service_categories(&self) -> Vec<ServiceCategory>;
    fn get_strategy(&self, id: &ServiceId) -> Option<ServiceContentStrategy>;
}

/// Raw catalog contents as produced by a loader, before integrity checks.
#[derive(Debug, Clone, Default)]
pub struct CatalogData {
    pub categories: Vec<ServiceCategory>,
    pub strategies: Vec<ServiceContentStrategy>,
}

impl CatalogData {
    /// Check catalog integrity and build the in-memory catalog.
    ///
    /// Duplicate service ids, duplicate strategies and strategies pointing at
    /// unknown services are configuration errors.
    pub fn validate(self) -> DomainResult<InMemoryServiceCatalog> {
        let mut services = BTreeMap::new();
        for category in &self.categories {
            for service in &category.services {
                if services
                    .insert(service.id.clone(), service.clone())
                    .is_some()
                {
                    return Err(DomainError::Configuration(format!(
                        "service `{}` is declared more than once",
                        service.id
                    )));
                }
            }
        }

        let mut strategies = HashMap::new();
        for strategy in self.strategies {
            if !services.contains_key(&strategy.service_id) {
                return Err(DomainError::Configuration(format!(
                    "strategy references unknown service `{}`",
                    strategy.service_id
                )));
            }
            let id = strategy.service_id.clone();
            if strategies.insert(id.clone(), strategy).is_some() {
                return Err(DomainError::Configuration(format!(
                    "service `{id}` has more than one content strategy"
                )));
            }
        }

        Ok(InMemoryServiceCatalog {
            services,
            categories: self.categories,
            strategies,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryServiceCatalog {
    services: BTreeMap<ServiceId, Service>,
    categories: Vec<ServiceCategory>,
    strategies: HashMap<ServiceId, ServiceContentStrategy>,
}

impl InMemoryServiceCatalog {
    pub fn service_count(&self) -> usize {
        self.services.len()
    }

    pub fn strategy_count(&self) -> usize {
        self.strategies.len()
    }
}

impl ServiceCatalog for InMemoryServiceCatalog {
    fn get_service_by_id(&self, id: &ServiceId) -> Option<Service> {
        self.services.get(id).cloned()
    }

    fn search_services(&self, text: &str, locale: &str) -> Vec<Service> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.services
            .values()
            .filter(|service| service.matches_text(&needle, locale))
            .cloned()
            .collect()
    }

    fn get_service_categories(&self) -> Vec<ServiceCategory> {
        self.categories.clone()
    }

    fn get_strategy(&self, id: &ServiceId) -> Option<ServiceContentStrategy> {
        self.strategies.get(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::service::value_objects::{LocalizedText, PriceRange};

    fn service(id: &str, name: &str) -> Service {
        Service {
            id: ServiceId::new(id).unwrap(),
            name: LocalizedText::single(name),
            short_description: LocalizedText::single(format!("{name} for teams")),
            price_range: PriceRange::new(100.0, 500.0).unwrap(),
        }
    }

    fn strategy(id: &str) -> ServiceContentStrategy {
        ServiceContentStrategy {
            service_id: ServiceId::new(id).unwrap(),
            keywords: vec!["solidity".into()],
            content_types: vec!["tutorial".into()],
        }
    }

    fn data() -> CatalogData {
        CatalogData {
            categories: vec![ServiceCategory {
                category: "Blockchain".into(),
                services: vec![
                    service("audit", "Smart Contract Audit"),
                    service("bitcoin-course", "Bitcoin Course"),
                ],
            }],
            strategies: vec![strategy("audit")],
        }
    }

    #[test]
    fn validate_builds_lookup_tables() {
        let catalog = data().validate().unwrap();
        assert_eq!(catalog.service_count(), 2);
        assert_eq!(catalog.strategy_count(), 1);

        let audit = ServiceId::new("audit").unwrap();
        assert!(catalog.get_service_by_id(&audit).is_some());
        assert!(catalog.get_strategy(&audit).is_some());
        let missing = ServiceId::new("missing").unwrap();
        assert!(catalog.get_service_by_id(&missing).is_none());
    }

    #[test]
    fn dangling_strategy_is_a_configuration_error() {
        let mut data = data();
        data.strategies.push(strategy("ghost"));
        let err = data.validate().unwrap_err();
        assert!(matches!(err, DomainError::Configuration(msg) if msg.contains("ghost")));
    }

    #[test]
    fn duplicate_service_and_strategy_are_rejected() {
        let mut dup_service = data();
        dup_service.categories.push(ServiceCategory {
            category: "Other".into(),
            services: vec![service("audit", "Audit again")],
        });
        assert!(matches!(
            dup_service.validate(),
            Err(DomainError::Configuration(_))
        ));

        let mut dup_strategy = data();
        dup_strategy.strategies.push(strategy("audit"));
        assert!(matches!(
            dup_strategy.validate(),
            Err(DomainError::Configuration(_))
        ));
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_id() {
        let catalog = data().validate().unwrap();
        let hits = catalog.search_services("BITCOIN", "en");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "bitcoin-course");

        assert_eq!(catalog.search_services("audit", "fr").len(), 1);
        assert!(catalog.search_services("  ", "en").is_empty());
    }
}
