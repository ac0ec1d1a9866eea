use crate::utils::error::MenuError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque identity token for a menu item. Assigned by the store at insert time,
/// unique for the lifetime of one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuItemId(pub u64);

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three courses a dish can belong to. Closed set, no open strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Course {
    Starter,
    Main,
    Dessert,
}

impl Course {
    pub const ALL: [Course; 3] = [Course::Starter, Course::Main, Course::Dessert];

    pub fn as_str(&self) -> &'static str {
        match self {
            Course::Starter => "Starter",
            Course::Main => "Main",
            Course::Dessert => "Dessert",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Course {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accepts the plural spellings the menu screens historically used
        match s.trim().to_ascii_lowercase().as_str() {
            "starter" | "starters" => Ok(Course::Starter),
            "main" | "mains" => Ok(Course::Main),
            "dessert" | "desserts" => Ok(Course::Dessert),
            other => Err(MenuError::ValidationError {
                field: "course".to_string(),
                reason: format!("Unknown course '{}'. Valid courses: starter, main, dessert", other),
            }),
        }
    }
}

/// A single dish on the menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

/// Fields submitted when adding a dish; the store assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub course: Course,
    pub price: f64,
}

/// Change notification delivered to store subscribers after a successful mutation.
#[derive(Debug, Clone)]
pub enum MenuEvent {
    Added(MenuItem),
    Removed(MenuItemId),
}

/// The fixed sample set the store can be pre-seeded with at session start.
pub fn sample_menu() -> Vec<NewMenuItem> {
    vec![
        NewMenuItem {
            name: "Bruschetta".to_string(),
            description: "Toasted bread with tomatoes and basil".to_string(),
            course: Course::Starter,
            price: 50.0,
        },
        NewMenuItem {
            name: "Grilled Chicken".to_string(),
            description: "Succulent grilled chicken breast".to_string(),
            course: Course::Main,
            price: 120.0,
        },
        NewMenuItem {
            name: "Tiramisu".to_string(),
            description: "Classic Italian dessert".to_string(),
            course: Course::Dessert,
            price: 60.0,
        },
    ]
}

/// Three minimal placeholder dishes, one per course, for the chef to edit later.
pub fn template_items() -> Vec<NewMenuItem> {
    Course::ALL
        .iter()
        .enumerate()
        .map(|(i, course)| NewMenuItem {
            name: format!("New Dish {}", i + 1),
            description: String::new(),
            course: *course,
            price: 0.0,
        })
        .collect()
}
