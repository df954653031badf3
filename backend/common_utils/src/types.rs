//! Types that can be used in other crates

use std::{fmt::Display, str::FromStr};

use common_enums::enums;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{consts, errors::ParsingError, CustomResult};

/// A number taken from shop data. The shop hands amounts over either as JSON
/// numbers or as strings formatted for the shop locale (`"59,99"`, `"1.234,56"`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct LocaleNumber(Decimal);

impl LocaleNumber {
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    pub fn get_decimal(self) -> Decimal {
        self.0
    }

    /// Parses a locale formatted number.
    ///
    /// When both `,` and `.` occur, the one occurring last is the decimal
    /// separator and the other one groups thousands. A single separator kind
    /// is a decimal separator if it occurs once and a grouping separator if it
    /// repeats, so `"50,41"` and `"50.41"` are both fifty point four one.
    pub fn parse(input: &str) -> CustomResult<Self, ParsingError> {
        let compact: String = input
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '\'')
            .collect();

        let last_comma = compact.rfind(',');
        let last_dot = compact.rfind('.');
        let normalised = match (last_comma, last_dot) {
            (Some(comma), Some(dot)) if comma > dot => compact.replace('.', "").replace(',', "."),
            (Some(_), Some(_)) => compact.replace(',', ""),
            (Some(_), None) if compact.matches(',').count() == 1 => compact.replace(',', "."),
            (Some(_), None) => compact.replace(',', ""),
            (None, Some(_)) if compact.matches('.').count() > 1 => compact.replace('.', ""),
            _ => compact,
        };

        Decimal::from_str(&normalised)
            .or_else(|_| Decimal::from_scientific(&normalised))
            .map(Self)
            .map_err(|_| {
                error_stack::report!(ParsingError::StringToDecimalConversionFailure {
                    value: input.to_string(),
                })
            })
    }

    fn from_json_number(number: &serde_json::Number) -> CustomResult<Self, ParsingError> {
        // serde_json renders floats in their shortest round-trip form, which keeps
        // values such as 114.99000000000001 exact for the later rounding step.
        let rendered = number.to_string();
        Decimal::from_str(&rendered)
            .or_else(|_| Decimal::from_scientific(&rendered))
            .map(Self)
            .map_err(|_| error_stack::report!(ParsingError::FloatToDecimalConversionFailure))
    }

    /// Rounds half away from zero to `decimal_places`, like the shop does.
    pub fn round_to(self, decimal_places: u32) -> Decimal {
        self.0
            .round_dp_with_strategy(decimal_places, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl From<Decimal> for LocaleNumber {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl Display for LocaleNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for LocaleNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let parsed = match &value {
            Value::Number(number) => Self::from_json_number(number),
            Value::String(text) => Self::parse(text),
            _ => {
                return Err(serde::de::Error::custom(format!(
                    "expected a number or a numeric string, found {value}"
                )))
            }
        };
        parsed.map_err(|report| serde::de::Error::custom(report.current_context()))
    }
}

/// Amount in the currency's major unit, rendered the way PayPal expects it
/// (`"59.99"`, `"1500"` for zero decimal currencies).
#[derive(Default, Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct StringMajorUnit(String);

impl StringMajorUnit {
    /// Rounds to the shop's price precision, then renders with the number of
    /// digits the currency allows.
    pub fn from_locale_number(amount: LocaleNumber, currency: enums::Currency) -> Self {
        let digits = currency.number_of_digits_after_decimal_point();
        let rounded = amount
            .round_to(consts::PRICE_PRECISION)
            .round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
        let width = usize::try_from(digits).unwrap_or_default();
        Self(format!("{rounded:.width$}"))
    }

    pub fn zero(currency: enums::Currency) -> Self {
        Self::from_locale_number(LocaleNumber::default(), currency)
    }

    pub fn get_amount_as_string(&self) -> String {
        self.0.clone()
    }

    pub fn to_decimal(&self) -> CustomResult<Decimal, ParsingError> {
        Decimal::from_str(&self.0).map_err(|_| {
            error_stack::report!(ParsingError::StringToDecimalConversionFailure {
                value: self.0.clone(),
            })
        })
    }
}

impl Display for StringMajorUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
