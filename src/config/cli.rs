use crate::core::views::CourseFilter;
use crate::domain::model::Course;
use crate::utils::error::{MenuError, Result};
use crate::utils::validation::{validate_seed_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "chefs-menu")]
#[command(about = "Chef-facing menu manager: add, list, filter and average dishes by course")]
pub struct CliConfig {
    /// TOML seed file with [[items]] entries; defaults to the built-in sample menu
    #[arg(long)]
    pub seed_file: Option<String>,

    /// Start from an empty menu instead of the sample seed
    #[arg(long)]
    pub no_seed: bool,

    /// Course filter for the listing: all, starter, main or dessert
    #[arg(long, default_value = "all")]
    pub course: String,

    /// Name of a dish to add before listing
    #[arg(long)]
    pub add_name: Option<String>,

    #[arg(long, default_value = "")]
    pub add_description: String,

    #[arg(long, default_value = "starter")]
    pub add_course: String,

    /// Price as typed by the chef, e.g. "150" or "49.99"
    #[arg(long)]
    pub add_price: Option<String>,

    /// Remove the item with this id before listing
    #[arg(long)]
    pub remove_id: Option<u64>,

    /// Add the three editable template dishes (one per course, price 0)
    #[arg(long)]
    pub templates: bool,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    pub format: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.seed_file {
            validate_seed_path("seed_file", path)?;
            if self.no_seed {
                return Err(MenuError::InvalidConfigValueError {
                    field: "no_seed".to_string(),
                    value: "true".to_string(),
                    reason: "--no-seed conflicts with --seed-file".to_string(),
                });
            }
        }

        self.course.parse::<CourseFilter>()?;
        self.add_course.parse::<Course>()?;

        if self.add_name.is_some() && self.add_price.is_none() {
            return Err(MenuError::MissingConfigError {
                field: "add_price".to_string(),
            });
        }
        if self.add_price.is_some() && self.add_name.is_none() {
            return Err(MenuError::MissingConfigError {
                field: "add_name".to_string(),
            });
        }

        let valid_formats = ["text", "json"];
        if !valid_formats.contains(&self.format.as_str()) {
            return Err(MenuError::InvalidConfigValueError {
                field: "format".to_string(),
                value: self.format.clone(),
                reason: format!(
                    "Unsupported format. Valid formats: {}",
                    valid_formats.join(", ")
                ),
            });
        }

        Ok(())
    }
}
