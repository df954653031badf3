//! Consolidated constants for the PayPal Unified crates

// =============================================================================
// Error Messages
// =============================================================================

/// Prefix of every message shown to a customer after a failed API call
pub const ERROR_MESSAGE_PREFIX: &str = "An error occurred: ";
/// Name used when a structured PayPal error carries no `name`
pub const DEFAULT_ERROR_NAME: &str = "error";
/// Separator between an error message and its field level details
pub const ERROR_DETAILS_SEPARATOR: &str = ": ";

// =============================================================================
// Log Field Names
// =============================================================================

/// Log context field for the raw failure message
pub const LOG_MESSAGE: &str = "message";
/// Log context field for the raw response body
pub const LOG_PAYLOAD: &str = "payload";

// =============================================================================
// PayPal Request Constants
// =============================================================================

/// Payment method sent in the payer block of every payment
pub const PAYMENT_METHOD_PAYPAL: &str = "paypal";
/// Funding instrument that routes a payment to PayPal installments
pub const FUNDING_INSTRUMENT_CREDIT: &str = "CREDIT";
/// Number of decimal places the shop rounds prices to
pub const PRICE_PRECISION: u32 = 2;

/// Constant variable for name
pub const NAME: &str = "PPU";

// =============================================================================
// Environment and Configuration
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Env {
    Development,
    Release,
}

impl Env {
    pub const fn current_env() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Release
        }
    }

    pub const fn config_path(self) -> &'static str {
        match self {
            Self::Development => "development.toml",
            Self::Release => "production.toml",
        }
    }
}

impl std::fmt::Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Release => write!(f, "release"),
        }
    }
}
