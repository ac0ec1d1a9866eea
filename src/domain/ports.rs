use crate::domain::model::{MenuEvent, NewMenuItem};
use crate::utils::error::Result;

/// Observer notified after every successful store mutation. Screens register one
/// of these to know when to re-read the menu.
pub trait MenuSubscriber {
    fn on_menu_event(&self, event: &MenuEvent);
}

impl<F: Fn(&MenuEvent)> MenuSubscriber for F {
    fn on_menu_event(&self, event: &MenuEvent) {
        self(event)
    }
}

/// Anything that can supply the initial dishes for a store (sample data, seed file).
pub trait SeedSource {
    fn seed_items(&self) -> Result<Vec<NewMenuItem>>;
}
