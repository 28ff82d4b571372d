//! Static item catalog shipped with the application.
//!
//! The dataset is embedded at compile time; there is no item API.

use anyhow::Context;
use once_cell::sync::Lazy;

use super::aggregate::Item;

const CATALOG_JSON: &str = include_str!("catalog.json");

static BUILTIN: Lazy<Result<Vec<Item>, String>> =
    Lazy::new(|| parse_catalog(CATALOG_JSON).map_err(|e| format!("{:#}", e)));

/// Parse a JSON array of items.
pub fn parse_catalog(json: &str) -> anyhow::Result<Vec<Item>> {
    let items: Vec<Item> =
        serde_json::from_str(json).context("Failed to parse item catalog")?;

    let mut seen = std::collections::HashSet::new();
    for item in &items {
        if !seen.insert(item.id.as_str()) {
            anyhow::bail!("Duplicate item id in catalog: {}", item.id);
        }
    }

    Ok(items)
}

/// The embedded catalog, parsed once.
pub fn builtin_catalog() -> anyhow::Result<&'static [Item]> {
    match &*BUILTIN {
        Ok(items) => Ok(items.as_slice()),
        Err(e) => Err(anyhow::anyhow!("{}", e)),
    }
}

/// Owned copy of the embedded catalog.
pub fn load_catalog() -> anyhow::Result<Vec<Item>> {
    builtin_catalog().map(<[Item]>::to_vec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_catalog_item::partition_items;

    #[test]
    fn test_builtin_catalog_loads() {
        let items = load_catalog().unwrap();
        assert!(!items.is_empty());

        let parts = partition_items(&items);
        assert!(!parts.categories.is_empty());
        assert!(!parts.uncategorized.is_empty());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"[{"id":"1","name":"a"},{"id":"1","name":"b"}]"#;
        let err = parse_catalog(json).unwrap_err();
        assert!(err.to_string().contains("Duplicate item id"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = parse_catalog("{not json").unwrap_err();
        assert!(err.to_string().contains("Failed to parse item catalog"));
    }
}
