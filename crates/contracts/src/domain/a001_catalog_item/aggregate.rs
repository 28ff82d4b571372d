use serde::{Deserialize, Serialize};

// ============================================================================
// Category reference
// ============================================================================

/// Ссылка на категорию товара (в каталоге хранится только имя)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
}

// ============================================================================
// Catalog item
// ============================================================================

/// Позиция каталога, к которой может применяться налог
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryRef>,
}

impl Item {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(CategoryRef {
            name: category.into(),
        });
        self
    }

    /// Category name, if the item has a present, non-blank one.
    pub fn category_name(&self) -> Option<&str> {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|name| !name.trim().is_empty())
    }

    /// Case-insensitive substring match on the item name.
    pub fn matches_name(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_name_ignores_blank() {
        assert_eq!(Item::new("1", "Jasinthe").category_name(), None);
        assert_eq!(
            Item::new("1", "Jasinthe").with_category("  ").category_name(),
            None
        );
        assert_eq!(
            Item::new("1", "Jasinthe").with_category("Bracelets").category_name(),
            Some("Bracelets")
        );
    }

    #[test]
    fn test_matches_name() {
        let item = Item::new("1", "Zero Nose Ring");
        assert!(item.matches_name("nose"));
        assert!(item.matches_name("ZERO"));
        assert!(item.matches_name("   "));
        assert!(!item.matches_name("bracelet"));
    }

    #[test]
    fn test_deserialize_without_category() {
        let item: Item = serde_json::from_str(r#"{"id":"7","name":"Inspiration"}"#).unwrap();
        assert_eq!(item, Item::new("7", "Inspiration"));

        let item: Item =
            serde_json::from_str(r#"{"id":"8","name":"Inspiration","category":null}"#).unwrap();
        assert!(item.category.is_none());
    }
}
