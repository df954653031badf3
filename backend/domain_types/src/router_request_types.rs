use common_enums::{Currency, PaymentType};
use common_utils::{ext_traits::ValueExt, loose, CustomResult, LocaleNumber};
use error_stack::{report, ResultExt};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    errors::ConnectorError,
    payment_address::{Address, PaymentAddress},
};

/// Basket keys a payment cannot be built without.
const REQUIRED_BASKET_KEYS: [&str; 6] = [
    "Amount",
    "AmountNet",
    "AmountNumeric",
    "AmountNetNumeric",
    "sShippingcostsWithTax",
    "sShippingcostsNet",
];

/// Input of every payment builder, validated once at construction.
#[derive(Clone, Debug)]
pub struct PaymentBuilderParameters {
    basket_data: BasketData,
    web_profile_id: String,
    user_data: UserData,
    basket_unique_id: Option<String>,
    payment_type: PaymentType,
}

impl PaymentBuilderParameters {
    /// Validates the shop's basket and user arrays.
    ///
    /// Missing keys are reported as [`ConnectorError::MissingRequiredField`], values of the
    /// wrong shape as [`ConnectorError::InvalidDataFormat`].
    pub fn try_new(
        basket_data: Value,
        web_profile_id: impl Into<String>,
        user_data: Value,
    ) -> CustomResult<Self, ConnectorError> {
        if let Some(missing) = REQUIRED_BASKET_KEYS
            .into_iter()
            .find(|key| basket_data.get(*key).is_none())
        {
            return Err(report!(ConnectorError::MissingRequiredField {
                field_name: missing
            }));
        }
        if user_data.get("additional").is_none() {
            return Err(report!(ConnectorError::MissingRequiredField {
                field_name: "additional"
            }));
        }

        let basket_data = basket_data
            .parse_value::<BasketData>("BasketData")
            .change_context(ConnectorError::InvalidDataFormat {
                field_name: "basket_data",
            })?;
        let user_data = user_data
            .parse_value::<UserData>("UserData")
            .change_context(ConnectorError::InvalidDataFormat {
                field_name: "user_data",
            })?;

        Ok(Self {
            basket_data,
            web_profile_id: web_profile_id.into(),
            user_data,
            basket_unique_id: None,
            payment_type: PaymentType::default(),
        })
    }

    pub fn with_basket_unique_id(mut self, basket_unique_id: impl Into<String>) -> Self {
        self.basket_unique_id = Some(basket_unique_id.into());
        self
    }

    pub fn with_payment_type(mut self, payment_type: PaymentType) -> Self {
        self.payment_type = payment_type;
        self
    }

    pub fn basket_data(&self) -> &BasketData {
        &self.basket_data
    }

    pub fn web_profile_id(&self) -> &str {
        &self.web_profile_id
    }

    pub fn user_data(&self) -> &UserData {
        &self.user_data
    }

    pub fn basket_unique_id(&self) -> Option<&str> {
        self.basket_unique_id.as_deref()
    }

    pub fn payment_type(&self) -> PaymentType {
        self.payment_type
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct BasketData {
    /// Gross subtotal, locale formatted.
    #[serde(rename = "Amount")]
    pub amount: LocaleNumber,
    /// Net subtotal, locale formatted.
    #[serde(rename = "AmountNet")]
    pub amount_net: LocaleNumber,
    #[serde(rename = "AmountNumeric")]
    pub amount_numeric: LocaleNumber,
    #[serde(rename = "AmountNetNumeric")]
    pub amount_net_numeric: LocaleNumber,
    #[serde(rename = "AmountWithTaxNumeric", default)]
    pub amount_with_tax_numeric: Option<LocaleNumber>,
    #[serde(rename = "sShippingcostsWithTax")]
    pub shipping_costs_with_tax: LocaleNumber,
    #[serde(rename = "sShippingcostsNet")]
    pub shipping_costs_net: LocaleNumber,
    #[serde(rename = "sAmountTax", default)]
    pub amount_tax: Option<LocaleNumber>,
    #[serde(rename = "sCurrencyName", default)]
    pub currency: Option<Currency>,
    #[serde(default)]
    pub content: Vec<LineItem>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct LineItem {
    #[serde(default, deserialize_with = "loose::optional_string_from_any")]
    pub ordernumber: Option<String>,
    #[serde(default)]
    pub articlename: String,
    #[serde(deserialize_with = "loose::u32_from_any")]
    pub quantity: u32,
    /// Gross unit price.
    pub price: LocaleNumber,
    /// Net unit price.
    pub netprice: LocaleNumber,
    #[serde(default)]
    pub additional_details: Option<Value>,
}

impl LineItem {
    /// Value of a product attribute column, `None` when unset.
    pub fn attribute(&self, column: &str) -> Option<&Value> {
        self.additional_details
            .as_ref()
            .and_then(|details| details.get(column))
            .filter(|value| !value.is_null())
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UserData {
    pub additional: AdditionalUserData,
    #[serde(rename = "shippingaddress", default)]
    pub shipping_address: Option<Address>,
    #[serde(rename = "billingaddress", default)]
    pub billing_address: Option<Address>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct AdditionalUserData {
    /// Set when the customer group sees gross prices.
    #[serde(default, deserialize_with = "loose::bool_from_any")]
    pub show_net: bool,
    #[serde(default, deserialize_with = "loose::bool_from_any")]
    pub charge_vat: bool,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(rename = "countryShipping", default)]
    pub country_shipping: Option<Country>,
    #[serde(rename = "stateShipping", default)]
    pub state_shipping: Option<State>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Country {
    #[serde(default, deserialize_with = "loose::optional_string_from_any")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "loose::bool_from_any")]
    pub taxfree: bool,
    #[serde(default, deserialize_with = "loose::bool_from_any")]
    pub taxfree_ustid: bool,
    #[serde(default, deserialize_with = "loose::optional_string_from_any")]
    pub countryiso: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct State {
    #[serde(default, deserialize_with = "loose::optional_string_from_any")]
    pub shortcode: Option<String>,
}

impl UserData {
    /// Gross prices are shown to the customer.
    pub fn shows_gross_prices(&self) -> bool {
        self.additional.show_net
    }

    pub fn addresses(&self) -> PaymentAddress {
        PaymentAddress::new(self.shipping_address.clone(), self.billing_address.clone())
    }

    /// Whether the order is calculated without tax.
    ///
    /// A tax free shipping country always qualifies. A country that is tax free
    /// only for companies qualifies when the billing address alone carries a
    /// VAT id, or when the shipping address carries one and billing and
    /// shipping country match.
    pub fn use_net_price_calculation(&self) -> bool {
        let Some(shipping_country) = self.additional.country_shipping.as_ref() else {
            return false;
        };
        if shipping_country.taxfree {
            return true;
        }
        if !shipping_country.taxfree_ustid {
            return false;
        }

        let addresses = self.addresses();
        match (addresses.get_billing_vat_id(), addresses.get_shipping_vat_id()) {
            (Some(_), None) => self
                .additional
                .country
                .as_ref()
                .is_some_and(|country| country.taxfree_ustid),
            (_, Some(_)) => self
                .additional
                .country
                .as_ref()
                .and_then(|country| country.id.as_ref())
                .is_some_and(|id| shipping_country.id.as_ref() == Some(id)),
            (None, None) => false,
        }
    }

    pub fn shipping_country_code(&self) -> Option<&str> {
        self.additional
            .country_shipping
            .as_ref()
            .and_then(|country| country.countryiso.as_deref())
    }

    pub fn shipping_state_code(&self) -> Option<&str> {
        self.additional
            .state_shipping
            .as_ref()
            .and_then(|state| state.shortcode.as_deref())
    }
}
