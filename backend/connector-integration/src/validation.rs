//! Checks run before a payment is created and after the customer returns.

use common_enums::PaymentType;
use common_utils::consts;
use domain_types::router_request_types::{BasketData, UserData};
use strum::IntoEnumIterator;

use crate::connectors::paypal::transformers::PaypalPayment;

/// Basket ids that identify a checkout flow instead of a stored basket.
pub struct BasketIdWhitelist;

impl BasketIdWhitelist {
    /// Token appended as `basketId` to the return URL of `payment_type`.
    pub fn get(payment_type: PaymentType) -> &'static str {
        payment_type.into()
    }

    pub fn is_whitelisted(basket_id: &str) -> bool {
        PaymentType::iter().any(|payment_type| Self::get(payment_type) == basket_id)
    }
}

pub struct BasketValidator;

impl BasketValidator {
    /// Whether the payment total still matches the basket the customer sees.
    pub fn validate(basket: &BasketData, user: &UserData, payment: &PaypalPayment) -> bool {
        let expected = if user.use_net_price_calculation() {
            basket.amount_net_numeric
        } else if user.shows_gross_prices() {
            basket.amount_numeric
        } else {
            basket
                .amount_with_tax_numeric
                .unwrap_or(basket.amount_numeric)
        };

        match payment.transactions.amount.total.to_decimal() {
            Ok(total) => expected.round_to(consts::PRICE_PRECISION) == total,
            Err(report) => {
                tracing::warn!(error = ?report, "payment total is not a number");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitelist_tokens() {
        assert_eq!(BasketIdWhitelist::get(PaymentType::PayPalPlus), "PayPalPlus");
        assert_eq!(
            BasketIdWhitelist::get(PaymentType::PayPalInstallments),
            "PayPalInstallments"
        );
        assert!(BasketIdWhitelist::is_whitelisted("PayPalExpress"));
        assert!(!BasketIdWhitelist::is_whitelisted("42"));
    }
}
