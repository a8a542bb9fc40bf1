use chrono::Utc;

use crate::domain::model::{MenuItem, MenuItemId, NewMenuItem};
use crate::utils::error::Result;
use crate::utils::validation::{parse_price, Validate};

/// Owns the ordered menu list. Created empty at application start,
/// mutated only through `add` and `remove`; insertion order is the
/// display order.
#[derive(Debug, Default)]
pub struct MenuStore {
    items: Vec<MenuItem>,
    next_id: u64,
}

impl MenuStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the draft, assigns a fresh id and appends the item.
    /// Nothing is stored when validation fails.
    pub fn add(&mut self, draft: NewMenuItem) -> Result<MenuItem> {
        draft.validate()?;
        let price = parse_price("price", &draft.price)?;

        self.next_id += 1;
        let item = MenuItem {
            id: MenuItemId::new(self.next_id),
            name: draft.name.trim().to_string(),
            description: draft.description.trim().to_string(),
            course: draft.course,
            price,
            created_at: Utc::now(),
        };

        tracing::debug!("Adding menu item '{}' ({})", item.name, item.course);
        self.items.push(item.clone());
        Ok(item)
    }

    /// Removes the item with the given id. A missing id is a no-op.
    pub fn remove(&mut self, id: MenuItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() < before;

        if removed {
            tracing::debug!("Removed menu item {}", id);
        } else {
            tracing::debug!("Remove ignored, no item with id {}", id);
        }
        removed
    }

    /// Current items in insertion order.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn get(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Course;

    fn draft(name: &str, course: Course, price: &str) -> NewMenuItem {
        NewMenuItem {
            name: name.to_string(),
            description: format!("{} description", name),
            course,
            price: price.to_string(),
        }
    }

    #[test]
    fn test_add_parses_price_and_appends() {
        let mut store = MenuStore::new();
        let item = store.add(draft("Soup", Course::Starters, "25.5")).unwrap();

        assert_eq!(item.price, 25.5);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(item.id).unwrap().name, "Soup");
    }

    #[test]
    fn test_failed_add_mutates_nothing() {
        let mut store = MenuStore::new();
        assert!(store.add(draft("", Course::Mains, "10")).is_err());
        assert!(store.add(draft("Steak", Course::Mains, "ten")).is_err());
        assert!(store.add(draft("Steak", Course::Mains, "-10")).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = MenuStore::new();
        let item = store.add(draft("Cake", Course::Dessert, "45")).unwrap();

        assert!(store.remove(item.id));
        assert!(!store.remove(item.id));
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_not_reused_after_removal() {
        let mut store = MenuStore::new();
        let first = store.add(draft("Soup", Course::Starters, "20")).unwrap();
        store.remove(first.id);
        let second = store.add(draft("Salad", Course::Starters, "30")).unwrap();

        assert_ne!(first.id, second.id);
    }
}
