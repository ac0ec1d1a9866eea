pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::MenuFile;

pub use crate::core::store::MenuStore;
pub use crate::core::views::{average_by_course, filter_by_course, CourseAverages, CourseFilter};
pub use crate::domain::model::{Course, MenuEvent, MenuItem, MenuItemId, NewMenuItem};
pub use crate::utils::error::{MenuError, Result};
