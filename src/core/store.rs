use crate::core::{MenuEvent, MenuItem, MenuItemId, MenuSubscriber, NewMenuItem, Result};
use crate::domain::model::{sample_menu, template_items};
use crate::utils::validation::{validate_dish_name, validate_price};
use chrono::Utc;
use std::fmt;

/// Sole owner of the mutable menu. All mutation and read access goes through it;
/// screens hold a reference and re-read after each change notification.
///
/// Items are kept newest-first: `add` prepends, seeding preserves seed order.
pub struct MenuStore {
    items: Vec<MenuItem>,
    next_id: u64,
    subscribers: Vec<Box<dyn MenuSubscriber>>,
}

impl MenuStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            subscribers: Vec::new(),
        }
    }

    /// Store pre-loaded with the fixed sample set.
    pub fn seeded() -> Self {
        // The sample menu is static, known-valid data; failure here is a bug.
        Self::from_seed(sample_menu()).expect("built-in sample menu must pass validation")
    }

    /// Builds a store from arbitrary seed items, validating every one of them.
    /// Seed order is preserved as the display order.
    pub fn from_seed(seed: Vec<NewMenuItem>) -> Result<Self> {
        let mut store = Self::new();
        for fields in seed {
            let item = store.build_item(fields)?;
            store.items.push(item);
        }
        tracing::debug!("Seeded menu store with {} items", store.items.len());
        Ok(store)
    }

    /// Adds a dish to the menu and returns the created item.
    ///
    /// The name must be non-empty after trimming and the price finite and
    /// non-negative; on rejection the store is unchanged and no event fires.
    pub fn add(&mut self, fields: NewMenuItem) -> Result<MenuItem> {
        let item = self.build_item(fields)?;
        self.items.insert(0, item.clone());
        tracing::debug!("Added menu item {} '{}'", item.id, item.name);
        self.notify(&MenuEvent::Added(item.clone()));
        Ok(item)
    }

    /// Deletes the item with the given id. Removing an absent id is a silent
    /// no-op, so the operation is idempotent.
    pub fn remove(&mut self, id: MenuItemId) {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        if self.items.len() < before {
            tracing::debug!("Removed menu item {}", id);
            self.notify(&MenuEvent::Removed(id));
        }
    }

    /// Point-in-time view of the current menu.
    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Registers a change observer; closures over `&MenuEvent` work directly.
    pub fn subscribe(&mut self, subscriber: impl MenuSubscriber + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Inserts the three editable template dishes (one per course, price 0).
    pub fn add_templates(&mut self) -> Result<Vec<MenuItem>> {
        template_items()
            .into_iter()
            .map(|fields| self.add(fields))
            .collect()
    }

    fn build_item(&mut self, fields: NewMenuItem) -> Result<MenuItem> {
        validate_dish_name("name", &fields.name)?;
        validate_price("price", fields.price)?;

        let id = MenuItemId(self.next_id);
        self.next_id += 1;

        Ok(MenuItem {
            id,
            name: fields.name.trim().to_string(),
            description: fields.description.trim().to_string(),
            course: fields.course,
            price: fields.price,
            created_at: Utc::now(),
        })
    }

    fn notify(&self, event: &MenuEvent) {
        for subscriber in &self.subscribers {
            subscriber.on_menu_event(event);
        }
    }
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MenuStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuStore")
            .field("items", &self.items)
            .field("next_id", &self.next_id)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
