pub mod toml_config;

use crate::adapters::cart_store::DEFAULT_CART_KEY;
use crate::core::ConfigProvider;
use crate::domain::catalog::Catalog;
use crate::utils::error::Result;
use crate::utils::format::PriceFormat;
use crate::utils::validation::{self, Validate};
use self::toml_config::{ShopConfig, DEFAULT_STORAGE_DIR};

#[cfg(feature = "cli")]
use crate::utils::logger::LogFormat;
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "car-shop")]
#[command(about = "Browse the car catalog, like, comment and fill a cart from the terminal")]
pub struct CliConfig {
    /// Path to a TOML shop configuration
    #[arg(short, long)]
    pub config: Option<String>,

    /// Directory holding the persisted cart (overrides the config file)
    #[arg(long)]
    pub storage_dir: Option<String>,

    /// Storage key for the cart (overrides the config file)
    #[arg(long)]
    pub cart_key: Option<String>,

    /// Allow cart intents for ids that are not in the catalog
    #[arg(long)]
    pub lenient_catalog: bool,

    /// Read intents from this file instead of stdin
    #[arg(long)]
    pub script: Option<String>,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Merges command-line overrides over the optional TOML file.
    pub fn resolve(&self) -> Result<ShopSettings> {
        let file_config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                ShopConfig::from_file(path)?
            }
            None => ShopConfig::default(),
        };
        file_config.validate()?;

        let mut settings = ShopSettings::from_config(&file_config)?;
        if let Some(dir) = &self.storage_dir {
            settings.storage_dir = dir.clone();
        }
        if let Some(key) = &self.cart_key {
            settings.cart_key = key.clone();
        }
        if self.lenient_catalog {
            settings.strict_catalog = false;
        }
        Ok(settings)
    }
}

/// Fully resolved runtime settings.
#[derive(Debug, Clone)]
pub struct ShopSettings {
    pub shop_name: String,
    pub storage_dir: String,
    pub cart_key: String,
    pub strict_catalog: bool,
    pub catalog: Catalog,
    pub price_format: PriceFormat,
}

impl Default for ShopSettings {
    fn default() -> Self {
        Self {
            shop_name: "Cars Shop".to_string(),
            storage_dir: DEFAULT_STORAGE_DIR.to_string(),
            cart_key: DEFAULT_CART_KEY.to_string(),
            strict_catalog: true,
            catalog: Catalog::showroom(),
            price_format: PriceFormat::default(),
        }
    }
}

impl ShopSettings {
    pub fn from_config(config: &ShopConfig) -> Result<Self> {
        Ok(Self {
            shop_name: config.shop.name.clone(),
            storage_dir: config.storage_dir().to_string(),
            cart_key: config.cart_key().to_string(),
            strict_catalog: config.strict_catalog(),
            catalog: config.catalog()?,
            price_format: config.price_format().clone(),
        })
    }
}

impl ConfigProvider for ShopSettings {
    fn storage_dir(&self) -> &str {
        &self.storage_dir
    }

    fn cart_key(&self) -> &str {
        &self.cart_key
    }

    fn strict_catalog(&self) -> bool {
        self.strict_catalog
    }
}

impl Validate for ShopSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("shop.name", &self.shop_name)?;
        validation::validate_path("storage.directory", &self.storage_dir)?;
        validation::validate_storage_key("storage.cart_key", &self.cart_key)?;
        self.catalog.validate()
    }
}
