use crate::domain::errors::{DomainError, DomainResult};
use std::collections::BTreeMap;
use std::fmt;

pub const DEFAULT_LOCALE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ServiceId(String);

impl ServiceId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("service id cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ServiceId> for String {
    fn from(value: ServiceId) -> Self {
        value.0
    }
}

/// Display string keyed by locale.
///
/// Lookups fall back to [`DEFAULT_LOCALE`] and then to the first entry, so a
/// catalog that only ships one language still renders everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedText(BTreeMap<String, String>);

impl LocalizedText {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self(entries)
    }

    pub fn single(value: impl Into<String>) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(DEFAULT_LOCALE.to_string(), value.into());
        Self(entries)
    }

    pub fn resolve(&self, locale: &str) -> &str {
        self.0
            .get(locale)
            .or_else(|| self.0.get(DEFAULT_LOCALE))
            .or_else(|| self.0.values().next())
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(|value| value.trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceRange {
    min: f64,
    max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> DomainResult<Self> {
        if !min.is_finite() || !max.is_finite() || min < 0.0 {
            return Err(DomainError::Validation(
                "price bounds must be finite and non-negative".into(),
            ));
        }
        if min > max {
            return Err(DomainError::Validation(format!(
                "price range min {min} exceeds max {max}"
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }
}
