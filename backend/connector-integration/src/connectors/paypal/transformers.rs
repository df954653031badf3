use common_enums::{Currency, PaymentIntent};
use common_utils::{
    consts,
    ext_traits::{StringExt, ValueExt},
    CustomResult, LocaleNumber, StringMajorUnit,
};
use domain_types::{
    errors::ConnectorError,
    router_data::ErrorResponse,
    router_request_types::{LineItem, PaymentBuilderParameters},
    router_response_types::FinancingInformation,
};
use error_stack::ResultExt;
use hyperswitch_masking::Secret;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::utils::{PaymentBuilderParametersData, UserDataExt};

/// Input of the request transformers: validated parameters plus the
/// shop state they are rendered against.
pub struct PaypalRouterData<'a> {
    pub params: &'a PaymentBuilderParameters,
    pub currency: Currency,
    pub submit_cart: bool,
}

// --- PAYMENT REQUEST ---

#[derive(Debug, Clone, Serialize)]
pub struct PaypalPayment {
    pub intent: PaymentIntent,
    pub experience_profile_id: String,
    pub payer: PaypalPayer,
    #[serde(serialize_with = "serialize_single_transaction")]
    pub transactions: PaypalTransactions,
    pub redirect_urls: PaypalRedirectUrls,
}

/// The payments API takes a list of transactions; the shop always sends one.
fn serialize_single_transaction<S>(
    transactions: &PaypalTransactions,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(std::iter::once(transactions))
}

#[derive(Debug, Clone, Serialize)]
pub struct PaypalPayer {
    pub payment_method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_selected_funding_instrument_type: Option<String>,
}

impl Default for PaypalPayer {
    fn default() -> Self {
        Self {
            payment_method: consts::PAYMENT_METHOD_PAYPAL.to_string(),
            external_selected_funding_instrument_type: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PaypalRedirectUrls {
    pub return_url: String,
    pub cancel_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaypalTransactions {
    pub amount: PaypalAmount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_list: Option<PaypalItemList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipment_details: Option<PaypalShipmentDetails>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaypalAmount {
    pub currency: Currency,
    pub total: StringMajorUnit,
    pub details: PaypalAmountDetails,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaypalAmountDetails {
    pub shipping: StringMajorUnit,
    pub subtotal: StringMajorUnit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<StringMajorUnit>,
}

impl TryFrom<&PaypalRouterData<'_>> for PaypalAmount {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(item: &PaypalRouterData<'_>) -> Result<Self, Self::Error> {
        let basket = item.params.basket_data();
        let user = item.params.user_data();
        let convert =
            |amount: LocaleNumber| StringMajorUnit::from_locale_number(amount, item.currency);

        let (total, details) = if user.use_net_price_calculation() {
            (
                basket.amount_net_numeric,
                PaypalAmountDetails {
                    shipping: convert(basket.shipping_costs_net),
                    subtotal: convert(basket.amount_net),
                    tax: None,
                },
            )
        } else if user.shows_gross_prices() {
            (
                basket.amount_numeric,
                PaypalAmountDetails {
                    shipping: convert(basket.shipping_costs_with_tax),
                    subtotal: convert(basket.amount),
                    tax: Some(StringMajorUnit::zero(item.currency)),
                },
            )
        } else {
            (
                item.params.get_amount_with_tax_numeric()?,
                PaypalAmountDetails {
                    shipping: convert(basket.shipping_costs_net),
                    subtotal: convert(basket.amount_net),
                    tax: Some(convert(item.params.get_amount_tax()?)),
                },
            )
        };

        Ok(Self {
            currency: item.currency,
            total: convert(total),
            details,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PaypalItemList {
    pub items: Vec<PaypalItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_address: Option<PaypalShippingAddress>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaypalItem {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub price: StringMajorUnit,
    pub currency: Currency,
    pub quantity: u32,
}

impl PaypalItem {
    fn from_line_item(line_item: &LineItem, gross: bool, currency: Currency) -> Self {
        let price = if gross {
            line_item.price
        } else {
            line_item.netprice
        };
        Self {
            name: line_item.articlename.clone(),
            sku: line_item.ordernumber.clone(),
            price: StringMajorUnit::from_locale_number(price, currency),
            currency,
            quantity: line_item.quantity,
        }
    }
}

impl From<&PaypalRouterData<'_>> for PaypalItemList {
    fn from(item: &PaypalRouterData<'_>) -> Self {
        let user = item.params.user_data();
        let gross = user.shows_gross_prices() && !user.use_net_price_calculation();
        let items = if item.submit_cart {
            item.params
                .basket_data()
                .content
                .iter()
                .map(|line_item| PaypalItem::from_line_item(line_item, gross, item.currency))
                .collect()
        } else {
            Vec::new()
        };

        Self {
            items,
            shipping_address: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PaypalShippingAddress {
    pub recipient_name: Secret<String>,
    pub line1: Secret<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<Secret<String>>,
    pub city: String,
    pub country_code: String,
    pub postal_code: Secret<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Secret<String>>,
}

impl TryFrom<&PaymentBuilderParameters> for PaypalShippingAddress {
    type Error = error_stack::Report<ConnectorError>;

    fn try_from(params: &PaymentBuilderParameters) -> Result<Self, Self::Error> {
        let user = params.user_data();
        let addresses = user.addresses();
        let shipping = addresses.get_required_shipping()?;

        Ok(Self {
            recipient_name: shipping.get_recipient_name()?,
            line1: shipping.get_line1()?,
            line2: shipping.get_optional_line2(),
            city: shipping.get_city()?,
            country_code: user.get_shipping_country_code()?,
            postal_code: shipping.get_zip()?,
            state: user.shipping_state_code().map(str::to_string),
            phone: shipping.get_optional_phone(),
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PaypalShipmentDetails {
    /// `YYYY-MM-DD`
    pub estimated_delivery_date: String,
}

// --- PAYMENT RESPONSE ---

#[derive(Debug, Clone, Deserialize)]
pub struct PaypalPaymentResponse {
    pub id: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub credit_financing_offered: Option<Credit>,
}

/// Financing offer PayPal attaches to an installment payment.
#[derive(Debug, Clone, Deserialize)]
pub struct Credit {
    pub total_cost: CreditPrice,
    pub term: u32,
    pub monthly_payment: CreditPrice,
    pub total_interest: CreditPrice,
    #[serde(default)]
    pub payer_acceptance: bool,
    #[serde(default)]
    pub cart_amount_immutable: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreditPrice {
    pub value: LocaleNumber,
    pub currency: Currency,
}

impl FinancingInformationExt for FinancingInformation {
    fn from_credit(credit: &Credit, payment_id: &str) -> Self {
        Self {
            payment_id: payment_id.to_string(),
            fee_amount: credit.total_interest.value.round_to(consts::PRICE_PRECISION),
            total_cost: credit.total_cost.value.round_to(consts::PRICE_PRECISION),
            term: credit.term,
            monthly_payment: credit.monthly_payment.value.round_to(consts::PRICE_PRECISION),
        }
    }
}

pub trait FinancingInformationExt {
    /// Flattens a financing offer for storage next to the order.
    fn from_credit(credit: &Credit, payment_id: &str) -> Self;
}

// --- ERROR RESPONSE ---

/// Error bodies returned by PayPal, matched in declaration order.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PaypalErrorResponse {
    /// Shape used by the OAuth endpoints.
    Generic(PaypalGenericErrorResponse),
    /// Shape used by the REST resources.
    Structured(PaypalStructuredErrorResponse),
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaypalGenericErrorResponse {
    pub error: String,
    pub error_description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaypalStructuredErrorResponse {
    #[serde(default)]
    pub name: Option<String>,
    pub message: String,
    #[serde(default)]
    pub information_link: Option<String>,
    #[serde(default)]
    pub debug_id: Option<String>,
    #[serde(default)]
    pub details: Option<Value>,
}

impl PaypalStructuredErrorResponse {
    /// `field, issue` per detail, joined by `, `. `None` without details.
    fn details_text(&self) -> Option<String> {
        let details = self.details.as_ref()?.as_array()?;
        let text = details
            .iter()
            .map(|detail| {
                let field = detail.get("field").map(value_text).unwrap_or_default();
                let issue = detail.get("issue").map(value_text).unwrap_or_default();
                format!("{field}, {issue}")
            })
            .collect::<Vec<_>>()
            .join(", ");
        (!details.is_empty()).then_some(text)
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl From<PaypalErrorResponse> for ErrorResponse {
    fn from(response: PaypalErrorResponse) -> Self {
        match response {
            PaypalErrorResponse::Generic(error) => Self::new(error.error, &error.error_description),
            PaypalErrorResponse::Structured(error) => {
                let description = match error.details_text() {
                    Some(details) => format!(
                        "{}{}{details}",
                        error.message,
                        consts::ERROR_DETAILS_SEPARATOR
                    ),
                    None => error.message.clone(),
                };
                Self::new(
                    error
                        .name
                        .unwrap_or_else(|| consts::DEFAULT_ERROR_NAME.to_string()),
                    &description,
                )
            }
        }
    }
}

/// Parses an error body. Only JSON objects are considered.
pub fn parse_error_body(body: &str) -> CustomResult<Option<PaypalErrorResponse>, ConnectorError> {
    let value: Value = body
        .parse_struct("PaypalErrorBody")
        .change_context(ConnectorError::ResponseDeserializationFailed)?;
    if !value.is_object() {
        return Ok(None);
    }
    Ok(value
        .parse_value::<PaypalErrorResponse>("PaypalErrorResponse")
        .ok())
}
