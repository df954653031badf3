use serde::{Deserialize, Serialize};

/// Currencies accepted by the PayPal REST payments API.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum Currency {
    AUD,
    BRL,
    CAD,
    CHF,
    CZK,
    DKK,
    EUR,
    GBP,
    HKD,
    HUF,
    ILS,
    JPY,
    MXN,
    NOK,
    NZD,
    PHP,
    PLN,
    RUB,
    SEK,
    SGD,
    THB,
    TWD,
    USD,
}

impl Currency {
    /// PayPal does not accept decimal amounts for these currencies.
    pub fn is_zero_decimal_currency(self) -> bool {
        matches!(self, Self::HUF | Self::JPY | Self::TWD)
    }

    pub fn number_of_digits_after_decimal_point(self) -> u32 {
        if self.is_zero_decimal_currency() {
            0
        } else {
            2
        }
    }
}

/// Checkout flow a payment originates from. The string form doubles as the
/// flow's key in the basket-id whitelist.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
pub enum PaymentType {
    #[default]
    PayPalClassic,
    PayPalPlus,
    PayPalInstallments,
    PayPalExpress,
    PayPalSmartPaymentButtons,
}

impl PaymentType {
    /// Express checkout and smart payment buttons are always captured directly.
    pub fn forces_sale_intent(self) -> bool {
        matches!(self, Self::PayPalExpress | Self::PayPalSmartPaymentButtons)
    }
}

#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentIntent {
    #[default]
    Sale,
    Authorize,
    Order,
}

impl PaymentIntent {
    /// Maps the numeric intent stored in the shop settings.
    pub fn from_setting(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Sale),
            1 => Some(Self::Authorize),
            2 => Some(Self::Order),
            _ => None,
        }
    }
}

/// Plugin log level. Deserializes from its name or from the numeric code the
/// settings backend stores (`0` normal, `1` extended).
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "snake_case", try_from = "LogLevelSetting")]
#[strum(serialize_all = "snake_case")]
pub enum LogLevel {
    /// Only warnings and errors are written.
    #[default]
    Normal,
    /// Notifications are written as well.
    Extended,
}

impl LogLevel {
    pub fn from_setting(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Normal),
            1 => Some(Self::Extended),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LogLevelSetting {
    Code(i64),
    Name(String),
}

impl TryFrom<LogLevelSetting> for LogLevel {
    type Error = String;

    fn try_from(setting: LogLevelSetting) -> Result<Self, Self::Error> {
        match setting {
            LogLevelSetting::Code(code) => {
                Self::from_setting(code).ok_or_else(|| format!("unknown log level {code}"))
            }
            LogLevelSetting::Name(name) => match name.trim().to_ascii_lowercase().as_str() {
                "normal" | "0" => Ok(Self::Normal),
                "extended" | "1" => Ok(Self::Extended),
                _ => Err(format!("unknown log level {name:?}")),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_payment_type_round_trips_through_its_name() {
        assert_eq!(PaymentType::PayPalPlus.to_string(), "PayPalPlus");
        assert_eq!(
            PaymentType::from_str("PayPalInstallments").ok(),
            Some(PaymentType::PayPalInstallments)
        );
        assert!(PaymentType::from_str("Unknown").is_err());
    }

    #[test]
    fn test_intent_from_setting() {
        assert_eq!(PaymentIntent::from_setting(0), Some(PaymentIntent::Sale));
        assert_eq!(PaymentIntent::from_setting(2), Some(PaymentIntent::Order));
        assert_eq!(PaymentIntent::from_setting(7), None);
        assert_eq!(
            serde_json::to_string(&PaymentIntent::Authorize).ok().as_deref(),
            Some("\"authorize\"")
        );
    }

    #[test]
    fn test_log_level_from_name_or_code() {
        for (value, expected) in [
            (serde_json::json!("normal"), LogLevel::Normal),
            (serde_json::json!("extended"), LogLevel::Extended),
            (serde_json::json!(0), LogLevel::Normal),
            (serde_json::json!(1), LogLevel::Extended),
            (serde_json::json!("1"), LogLevel::Extended),
        ] {
            let level: Result<LogLevel, _> = serde_json::from_value(value.clone());
            assert_eq!(level.ok(), Some(expected), "{value}");
        }

        assert!(serde_json::from_value::<LogLevel>(serde_json::json!(2)).is_err());
        assert!(serde_json::from_value::<LogLevel>(serde_json::json!("verbose")).is_err());
        assert_eq!(
            serde_json::to_string(&LogLevel::Extended).ok().as_deref(),
            Some("\"extended\"")
        );
    }

    #[test]
    fn test_currency_precision() {
        assert_eq!(Currency::EUR.number_of_digits_after_decimal_point(), 2);
        assert_eq!(Currency::JPY.number_of_digits_after_decimal_point(), 0);
        assert_eq!(Currency::from_str("eur").ok(), Some(Currency::EUR));
    }
}
