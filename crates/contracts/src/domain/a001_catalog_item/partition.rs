//! Разбиение каталога на группы по категориям
//!
//! Порядок групп совпадает с порядком первого появления категории в каталоге,
//! порядок позиций внутри группы сохраняется.

use super::aggregate::Item;

/// Items sharing one category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub name: String,
    pub items: Vec<Item>,
}

impl CategoryGroup {
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.id.as_str())
    }
}

/// Where an item lives after partitioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOwner<'a> {
    Category(&'a str),
    Uncategorized,
}

/// Каталог, разложенный по категориям + позиции без категории
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionedItems {
    pub categories: Vec<CategoryGroup>,
    pub uncategorized: Vec<Item>,
}

/// Split a flat item list into category groups and a residual uncategorized list.
pub fn partition_items(items: &[Item]) -> PartitionedItems {
    let mut result = PartitionedItems::default();

    for item in items {
        match item.category_name() {
            Some(category) => match result.categories.iter_mut().find(|g| g.name == category) {
                Some(group) => group.items.push(item.clone()),
                None => result.categories.push(CategoryGroup {
                    name: category.to_string(),
                    items: vec![item.clone()],
                }),
            },
            None => result.uncategorized.push(item.clone()),
        }
    }

    result
}

impl PartitionedItems {
    pub fn len(&self) -> usize {
        self.categories.iter().map(|g| g.items.len()).sum::<usize>() + self.uncategorized.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every item in display order: categories first, then uncategorized.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.categories
            .iter()
            .flat_map(|g| g.items.iter())
            .chain(self.uncategorized.iter())
    }

    pub fn all_ids(&self) -> Vec<String> {
        self.items().map(|item| item.id.clone()).collect()
    }

    pub fn category(&self, name: &str) -> Option<&CategoryGroup> {
        self.categories.iter().find(|g| g.name == name)
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|g| g.name.as_str())
    }

    /// Ids of a category, empty for an unknown name.
    pub fn category_ids(&self, name: &str) -> Vec<String> {
        self.category(name)
            .map(|g| g.ids().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn uncategorized_ids(&self) -> Vec<String> {
        self.uncategorized.iter().map(|item| item.id.clone()).collect()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.items().any(|item| item.id == id)
    }

    pub fn owner_of(&self, id: &str) -> Option<ItemOwner<'_>> {
        if let Some(group) = self
            .categories
            .iter()
            .find(|g| g.items.iter().any(|item| item.id == id))
        {
            return Some(ItemOwner::Category(group.name.as_str()));
        }
        self.uncategorized
            .iter()
            .any(|item| item.id == id)
            .then_some(ItemOwner::Uncategorized)
    }

    /// Оставляет только позиции, в названии которых встречается `query`.
    /// Пустые группы отбрасываются; пустой запрос возвращает всё.
    pub fn filter_by_name(&self, query: &str) -> PartitionedItems {
        let categories = self
            .categories
            .iter()
            .filter_map(|group| {
                let items: Vec<Item> = group
                    .items
                    .iter()
                    .filter(|item| item.matches_name(query))
                    .cloned()
                    .collect();
                (!items.is_empty()).then(|| CategoryGroup {
                    name: group.name.clone(),
                    items,
                })
            })
            .collect();

        let uncategorized = self
            .uncategorized
            .iter()
            .filter(|item| item.matches_name(query))
            .cloned()
            .collect();

        PartitionedItems {
            categories,
            uncategorized,
        }
    }
}
