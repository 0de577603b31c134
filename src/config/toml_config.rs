use crate::adapters::cart_store::DEFAULT_CART_KEY;
use crate::core::ConfigProvider;
use crate::domain::catalog::Catalog;
use crate::domain::model::{Item, ItemId};
use crate::utils::error::{Result, ShopError};
use crate::utils::format::PriceFormat;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_STORAGE_DIR: &str = "./.car-shop";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopConfig {
    #[serde(default)]
    pub shop: ShopSection,
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub catalog: CatalogSection,
    #[serde(default)]
    pub display: PriceFormat,
    /// Replaces the built-in showroom when non-empty.
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopSection {
    pub name: String,
}

impl Default for ShopSection {
    fn default() -> Self {
        Self {
            name: "Cars Shop".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageSection {
    pub directory: Option<String>,
    pub cart_key: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSection {
    /// Defaults to true: cart and view intents need a catalog id.
    pub strict: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemConfig {
    pub id: u32,
    pub name: String,
    pub price: u64,
    pub color: String,
    pub image: String,
}

impl From<ItemConfig> for Item {
    fn from(config: ItemConfig) -> Self {
        Item {
            id: ItemId(config.id),
            name: config.name,
            price: config.price,
            color: config.color,
            image: config.image,
        }
    }
}

impl ShopConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ShopError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ShopError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left
    /// as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ShopError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("shop.name", &self.shop.name)?;

        if let Some(directory) = &self.storage.directory {
            validation::validate_path("storage.directory", directory)?;
        }
        if let Some(key) = &self.storage.cart_key {
            validation::validate_storage_key("storage.cart_key", key)?;
        }

        if self.display.thousands_separator.is_ascii_digit() {
            return Err(ShopError::InvalidConfigValueError {
                field: "display.thousands_separator".to_string(),
                value: self.display.thousands_separator.to_string(),
                reason: "Separator cannot be a digit".to_string(),
            });
        }

        self.catalog()?.validate()
    }

    /// The configured items, or the built-in showroom when none are listed.
    pub fn catalog(&self) -> Result<Catalog> {
        if self.items.is_empty() {
            return Ok(Catalog::showroom());
        }
        let items = self.items.iter().cloned().map(Item::from).collect();
        Catalog::try_new(items)
    }

    pub fn price_format(&self) -> &PriceFormat {
        &self.display
    }
}

impl ConfigProvider for ShopConfig {
    fn storage_dir(&self) -> &str {
        self.storage.directory.as_deref().unwrap_or(DEFAULT_STORAGE_DIR)
    }

    fn cart_key(&self) -> &str {
        self.storage.cart_key.as_deref().unwrap_or(DEFAULT_CART_KEY)
    }

    fn strict_catalog(&self) -> bool {
        self.catalog.strict.unwrap_or(true)
    }
}

impl Validate for ShopConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
