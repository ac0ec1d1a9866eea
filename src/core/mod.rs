pub mod store;
pub mod views;

pub use crate::domain::model::{Course, MenuEvent, MenuItem, MenuItemId, NewMenuItem};
pub use crate::domain::ports::{MenuSubscriber, SeedSource};
pub use crate::utils::error::Result;
