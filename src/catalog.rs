use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Read-only source of cafe names grouped by city.
#[cfg_attr(test, mockall::automock)]
pub trait CafeCatalog: Send + Sync {
    /// Cafes of `city` in catalog order, or `None` when the city is unknown.
    fn cafes(&self, city: &str) -> Option<Vec<String>>;
    fn city_count(&self) -> usize;
}

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    cities: HashMap<String, Vec<String>>,
}

impl Catalog {
    pub fn new(cities: HashMap<String, Vec<String>>) -> Self {
        Self { cities }
    }

    /// The catalog deployed when no `CATALOG_PATH` is configured.
    pub fn builtin() -> Self {
        let cities = [
            (
                "moscow",
                &[
                    "Мир кофе",
                    "Сладкоежка",
                    "Кофе и завтраки",
                    "Сытый студент",
                    "Вилка и ложка",
                ][..],
            ),
            ("tula", &["Кофе с собой", "Чайная", "Громкий кофе"][..]),
        ]
        .into_iter()
        .map(|(city, cafes)| {
            (
                city.to_string(),
                cafes.iter().map(|cafe| cafe.to_string()).collect(),
            )
        })
        .collect();

        Self::new(cities)
    }

    /// Parses `{"city": ["cafe", ...], ...}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cities: HashMap<String, Vec<String>> = serde_json::from_str(json)
            .context("catalog must map city names to lists of cafe names")?;
        Ok(Self::new(cities))
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("invalid catalog file {}", path.display()))
    }
}

impl CafeCatalog for Catalog {
    fn cafes(&self, city: &str) -> Option<Vec<String>> {
        self.cities.get(city).cloned()
    }

    fn city_count(&self) -> usize {
        self.cities.len()
    }
}
