use common_enums::{LogLevel, PaymentIntent};
use error_stack::report;
use hyperswitch_masking::Secret;

use crate::{errors::ConnectorError, utils::ForeignTryFrom};

#[derive(Clone, serde::Deserialize, Debug)]
pub struct Connectors {
    pub paypal: ConnectorParams,
}

#[derive(Clone, serde::Deserialize, Debug)]
pub struct ConnectorParams {
    /// base url
    pub base_url: String,
    /// base url used while the shop runs in sandbox mode
    pub sandbox_base_url: String,
}

impl ConnectorParams {
    pub fn for_mode(&self, sandbox: bool) -> &str {
        if sandbox {
            &self.sandbox_base_url
        } else {
            &self.base_url
        }
    }
}

/// General PayPal settings of a shop.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    pub active: bool,
    pub client_id: Secret<String>,
    pub client_secret: Secret<String>,
    pub sandbox: bool,
    pub show_sidebar_logo: bool,
    pub brand_name: Option<String>,
    pub send_order_number: bool,
    pub order_number_prefix: Option<String>,
    pub use_in_context: bool,
    pub log_level: LogLevel,
    pub display_errors: bool,
    pub advertise_returns: bool,
    /// Numeric intent as stored by the settings backend: 0 sale, 1 authorize, 2 order.
    pub intent: i64,
    pub submit_cart: bool,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            active: true,
            client_id: Secret::new(String::new()),
            client_secret: Secret::new(String::new()),
            sandbox: false,
            show_sidebar_logo: false,
            brand_name: None,
            send_order_number: false,
            order_number_prefix: None,
            use_in_context: false,
            log_level: LogLevel::Normal,
            display_errors: false,
            advertise_returns: false,
            intent: 0,
            submit_cart: true,
        }
    }
}

impl ForeignTryFrom<&GeneralSettings> for PaymentIntent {
    type Error = ConnectorError;

    fn foreign_try_from(settings: &GeneralSettings) -> Result<Self, error_stack::Report<Self::Error>> {
        Self::from_setting(settings.intent).ok_or_else(|| {
            report!(ConnectorError::InvalidConnectorConfig {
                config: "settings.general.intent",
            })
            .attach_printable(format!("unknown intent {}", settings.intent))
        })
    }
}

/// Settings of the PayPal Plus payment wall.
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct PlusSettings {
    pub active: bool,
    pub restyle: bool,
    pub integrate_third_party_methods: bool,
}

#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct InstallmentsSettings {
    pub active: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_from_settings() {
        let settings = GeneralSettings {
            intent: 1,
            ..Default::default()
        };
        assert_eq!(
            PaymentIntent::foreign_try_from(&settings).unwrap(),
            PaymentIntent::Authorize
        );

        let broken = GeneralSettings {
            intent: 7,
            ..Default::default()
        };
        assert_eq!(
            PaymentIntent::foreign_try_from(&broken)
                .unwrap_err()
                .current_context(),
            &ConnectorError::InvalidConnectorConfig {
                config: "settings.general.intent"
            }
        );
    }

    #[test]
    fn test_base_url_for_mode() {
        let params = ConnectorParams {
            base_url: "https://api.paypal.com/".to_string(),
            sandbox_base_url: "https://api.sandbox.paypal.com/".to_string(),
        };
        assert_eq!(params.for_mode(true), "https://api.sandbox.paypal.com/");
        assert_eq!(params.for_mode(false), "https://api.paypal.com/");
    }
}
