//! Engine configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `GINGHAM_TAX_RATE` - tax rate applied to the subtotal (default: 0.05)
//! - `GINGHAM_PAGE_FREE_SHIPPING_THRESHOLD` - full cart page threshold (default: 100)
//! - `GINGHAM_PAGE_SHIPPING_FEE` - full cart page flat fee (default: 10)
//! - `GINGHAM_PANEL_FREE_SHIPPING_THRESHOLD` - slide-in panel threshold (default: 50)
//! - `GINGHAM_PANEL_SHIPPING_FEE` - slide-in panel flat fee (default: 5)
//! - `GINGHAM_DATA_DIR` - directory for persisted collections; when unset,
//!   collections live in memory for the session only
//!
//! The page and panel shipping values are intentionally separate: the two
//! surfaces carry distinct policies and the engine does not reconcile
//! them.

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::ConfigError;
use crate::pricing::{PricingPolicy, ShippingPolicy};

const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 2);
const DEFAULT_PAGE_THRESHOLD: Decimal = Decimal::from_parts(100, 0, 0, false, 0);
const DEFAULT_PAGE_FEE: Decimal = Decimal::from_parts(10, 0, 0, false, 0);
const DEFAULT_PANEL_THRESHOLD: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
const DEFAULT_PANEL_FEE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Tax rate applied to every cart subtotal.
    pub tax_rate: Decimal,
    /// Shipping policy quoted on the full cart page.
    pub page_shipping: ShippingPolicy,
    /// Shipping policy quoted in the slide-in panel.
    pub panel_shipping: ShippingPolicy,
    /// Directory for persisted collections; `None` keeps them in memory.
    pub data_dir: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            page_shipping: ShippingPolicy {
                free_threshold: DEFAULT_PAGE_THRESHOLD,
                flat_fee: DEFAULT_PAGE_FEE,
            },
            panel_shipping: ShippingPolicy {
                free_threshold: DEFAULT_PANEL_THRESHOLD,
                flat_fee: DEFAULT_PANEL_FEE,
            },
            data_dir: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    /// Unset variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();
        Ok(Self {
            tax_rate: get_decimal_or("GINGHAM_TAX_RATE", defaults.tax_rate)?,
            page_shipping: ShippingPolicy {
                free_threshold: get_decimal_or(
                    "GINGHAM_PAGE_FREE_SHIPPING_THRESHOLD",
                    defaults.page_shipping.free_threshold,
                )?,
                flat_fee: get_decimal_or("GINGHAM_PAGE_SHIPPING_FEE", defaults.page_shipping.flat_fee)?,
            },
            panel_shipping: ShippingPolicy {
                free_threshold: get_decimal_or(
                    "GINGHAM_PANEL_FREE_SHIPPING_THRESHOLD",
                    defaults.panel_shipping.free_threshold,
                )?,
                flat_fee: get_decimal_or(
                    "GINGHAM_PANEL_SHIPPING_FEE",
                    defaults.panel_shipping.flat_fee,
                )?,
            },
            data_dir: std::env::var("GINGHAM_DATA_DIR").ok().map(PathBuf::from),
        })
    }

    /// The pricing policy for the full cart page.
    #[must_use]
    pub const fn page_policy(&self) -> PricingPolicy {
        PricingPolicy {
            tax_rate: self.tax_rate,
            shipping: self.page_shipping,
        }
    }

    /// The pricing policy for the slide-in panel.
    #[must_use]
    pub const fn panel_policy(&self) -> PricingPolicy {
        PricingPolicy {
            tax_rate: self.tax_rate,
            shipping: self.panel_shipping,
        }
    }
}

/// Parse a decimal environment variable, falling back to `default` when
/// unset.
fn get_decimal_or(key: &str, default: Decimal) -> Result<Decimal, ConfigError> {
    match std::env::var(key) {
        Ok(value) => Decimal::from_str(value.trim())
            .map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string())),
        Err(_) => Ok(default),
    }
}
