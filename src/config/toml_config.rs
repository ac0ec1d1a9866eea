use crate::domain::model::NewMenuItem;
use crate::domain::ports::SeedSource;
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::{validate_dish_name, validate_price, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Menu seed loaded from a TOML file, e.g.
///
/// ```toml
/// [[items]]
/// name = "Bruschetta"
/// description = "Toasted bread with tomatoes and basil"
/// course = "starter"
/// price = 50.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuFile {
    #[serde(default)]
    pub items: Vec<NewMenuItem>,
}

impl MenuFile {
    /// 從 TOML 檔案載入菜單種子
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MenuError::IoError)?;
        toml::from_str(&content).map_err(|e| MenuError::SeedFileError {
            path: path.as_ref().display().to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 從 TOML 字串解析菜單種子
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| MenuError::SeedFileError {
            path: "<inline>".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl Validate for MenuFile {
    fn validate(&self) -> Result<()> {
        for (index, item) in self.items.iter().enumerate() {
            validate_dish_name(&format!("items[{}].name", index), &item.name)?;
            validate_price(&format!("items[{}].price", index), item.price)?;
        }
        Ok(())
    }
}

impl SeedSource for MenuFile {
    fn seed_items(&self) -> Result<Vec<NewMenuItem>> {
        self.validate()?;
        Ok(self.items.clone())
    }
}
