use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One competitor page tracked under an owned brand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorEntry {
    pub name: String,
    pub page_id: String,
    pub country: String,
}

/// One owned brand and the competitive space it plays in.
///
/// `themes` is the ordered set of message themes this brand's competitors
/// advertise around; every synthesized ad for this brand draws its theme
/// from this list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandEntry {
    pub key: String,
    pub label: String,
    pub vertical: String,
    pub themes: Vec<String>,
    pub competitors: Vec<CompetitorEntry>,
}

/// The full brand/competitor catalog, loaded once at startup and never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub brands: Vec<BrandEntry>,
}

impl Catalog {
    /// Look up a brand by its key.
    #[must_use]
    pub fn brand(&self, key: &str) -> Option<&BrandEntry> {
        self.brands.iter().find(|b| b.key == key)
    }

    #[must_use]
    pub fn brand_keys(&self) -> Vec<&str> {
        self.brands.iter().map(|b| b.key.as_str()).collect()
    }

    #[must_use]
    pub fn competitor_names(&self) -> Vec<&str> {
        self.brands
            .iter()
            .flat_map(|b| b.competitors.iter().map(|c| c.name.as_str()))
            .collect()
    }

    /// Total number of competitors across all brands.
    #[must_use]
    pub fn competitor_count(&self) -> usize {
        self.brands.iter().map(|b| b.competitors.len()).sum()
    }
}

/// Load and validate the catalog from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation. A malformed catalog is fatal: generating from a partial
/// catalog would silently bias every downstream aggregate.
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CatalogIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_catalog(&content)
}

/// Parse and validate catalog YAML from an in-memory string.
///
/// # Errors
///
/// Returns `ConfigError` on parse or validation failure.
pub fn parse_catalog(content: &str) -> Result<Catalog, ConfigError> {
    let catalog: Catalog = serde_yaml::from_str(content).map_err(ConfigError::CatalogParse)?;
    validate_catalog(&catalog)?;
    Ok(catalog)
}

fn validate_catalog(catalog: &Catalog) -> Result<(), ConfigError> {
    if catalog.brands.is_empty() {
        return Err(ConfigError::Validation(
            "catalog must define at least one brand".to_string(),
        ));
    }

    let mut seen_keys = HashSet::new();
    let mut seen_competitors = HashSet::new();

    for brand in &catalog.brands {
        if brand.key.trim().is_empty() {
            return Err(ConfigError::Validation(
                "brand key must be non-empty".to_string(),
            ));
        }
        if brand.label.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "brand '{}' has an empty label",
                brand.key
            )));
        }
        if !seen_keys.insert(brand.key.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate brand key: '{}'",
                brand.key
            )));
        }
        if brand.themes.is_empty() {
            return Err(ConfigError::Validation(format!(
                "brand '{}' has no themes configured",
                brand.key
            )));
        }
        if brand.themes.iter().any(|t| t.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "brand '{}' has an empty theme entry",
                brand.key
            )));
        }
        if brand.competitors.is_empty() {
            return Err(ConfigError::Validation(format!(
                "brand '{}' has no competitors configured",
                brand.key
            )));
        }

        for competitor in &brand.competitors {
            if competitor.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "brand '{}' has a competitor with an empty name",
                    brand.key
                )));
            }
            if competitor.page_id.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "competitor '{}' has an empty page_id",
                    competitor.name
                )));
            }
            if !seen_competitors.insert(competitor.name.to_lowercase()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate competitor name: '{}'",
                    competitor.name
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_yaml() -> &'static str {
        r"
brands:
  - key: bebodywise
    label: Bebodywise
    vertical: women_wellness
    themes: [weight, immunity]
    competitors:
      - name: OZiva
        page_id: '101234567890001'
        country: IN
"
    }

    #[test]
    fn parse_catalog_accepts_minimal_catalog() {
        let catalog = parse_catalog(minimal_yaml()).expect("minimal catalog should parse");
        assert_eq!(catalog.brands.len(), 1);
        assert_eq!(catalog.competitor_count(), 1);
        assert_eq!(catalog.brand_keys(), vec!["bebodywise"]);
        assert_eq!(catalog.competitor_names(), vec!["OZiva"]);
    }

    #[test]
    fn brand_lookup_by_key() {
        let catalog = parse_catalog(minimal_yaml()).unwrap();
        let brand = catalog.brand("bebodywise").expect("brand exists");
        assert_eq!(brand.label, "Bebodywise");
        assert_eq!(brand.themes, vec!["weight", "immunity"]);
        assert!(catalog.brand("man_matters").is_none());
    }

    #[test]
    fn rejects_empty_brand_list() {
        let err = parse_catalog("brands: []").unwrap_err();
        assert!(err.to_string().contains("at least one brand"));
    }

    #[test]
    fn rejects_brand_without_themes() {
        let yaml = r"
brands:
  - key: bebodywise
    label: Bebodywise
    vertical: women_wellness
    themes: []
    competitors:
      - name: OZiva
        page_id: '1'
        country: IN
";
        let err = parse_catalog(yaml).unwrap_err();
        assert!(err.to_string().contains("no themes"));
    }

    #[test]
    fn rejects_brand_without_competitors() {
        let yaml = r"
brands:
  - key: bebodywise
    label: Bebodywise
    vertical: women_wellness
    themes: [weight]
    competitors: []
";
        let err = parse_catalog(yaml).unwrap_err();
        assert!(err.to_string().contains("no competitors"));
    }

    #[test]
    fn rejects_duplicate_brand_keys() {
        let yaml = r"
brands:
  - key: bebodywise
    label: Bebodywise
    vertical: women_wellness
    themes: [weight]
    competitors:
      - name: OZiva
        page_id: '1'
        country: IN
  - key: Bebodywise
    label: Bebodywise Again
    vertical: women_wellness
    themes: [energy]
    competitors:
      - name: WOW Life Science
        page_id: '2'
        country: IN
";
        let err = parse_catalog(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate brand key"));
    }

    #[test]
    fn rejects_duplicate_competitor_names_across_brands() {
        let yaml = r"
brands:
  - key: bebodywise
    label: Bebodywise
    vertical: women_wellness
    themes: [weight]
    competitors:
      - name: OZiva
        page_id: '1'
        country: IN
  - key: man_matters
    label: Man Matters
    vertical: mens_wellness
    themes: [hair_loss]
    competitors:
      - name: oziva
        page_id: '2'
        country: IN
";
        let err = parse_catalog(yaml).unwrap_err();
        assert!(err.to_string().contains("duplicate competitor name"));
    }

    #[test]
    fn rejects_empty_page_id() {
        let yaml = r"
brands:
  - key: bebodywise
    label: Bebodywise
    vertical: women_wellness
    themes: [weight]
    competitors:
      - name: OZiva
        page_id: ''
        country: IN
";
        let err = parse_catalog(yaml).unwrap_err();
        assert!(err.to_string().contains("empty page_id"));
    }

    #[test]
    fn load_catalog_from_real_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("..")
            .join("config")
            .join("catalog.yaml");
        assert!(
            path.exists(),
            "catalog.yaml missing at {path:?} — required for this test"
        );
        let catalog = load_catalog(&path).expect("failed to load catalog.yaml");
        assert_eq!(catalog.brands.len(), 3, "expected 3 owned brands");
        assert_eq!(catalog.competitor_count(), 15, "expected 15 competitors");
        for brand in &catalog.brands {
            assert_eq!(brand.competitors.len(), 5);
            assert_eq!(brand.themes.len(), 4);
        }
    }
}
