use common_enums::{PaymentIntent, PaymentType};
use common_utils::{consts, CustomResult};
use domain_types::{errors::ConnectorError, router_request_types::PaymentBuilderParameters};
use error_stack::report;
use interfaces::api::PaymentBuilder;

use super::PaymentBuilderService;
use crate::{
    connectors::paypal::transformers::{PaypalItemList, PaypalPayment, PaypalShippingAddress},
    validation::BasketIdWhitelist,
};

const CONTROLLER: &str = "PaypalUnifiedInstallments";

/// Builds installment payments, which are always captured directly and are
/// funded by PayPal credit.
#[derive(Clone)]
pub struct InstallmentsPaymentBuilderService {
    base: PaymentBuilderService,
}

impl InstallmentsPaymentBuilderService {
    pub fn new(base: PaymentBuilderService) -> Self {
        Self { base }
    }
}

impl PaymentBuilder for InstallmentsPaymentBuilderService {
    type Payment = PaypalPayment;

    fn get_payment(
        &self,
        params: &PaymentBuilderParameters,
    ) -> CustomResult<PaypalPayment, ConnectorError> {
        if !self
            .base
            .settings
            .installments()
            .is_some_and(|installments| installments.active)
        {
            return Err(report!(ConnectorError::InvalidConnectorConfig {
                config: "settings.installments.active",
            })
            .attach_printable("PayPal installments are not active for this shop"));
        }

        let mut payment = self.base.build_payment(params, PaymentIntent::Sale)?;

        payment.payer.external_selected_funding_instrument_type =
            Some(consts::FUNDING_INSTRUMENT_CREDIT.to_string());
        payment.redirect_urls = self.base.get_redirect_urls(
            CONTROLLER,
            Some(BasketIdWhitelist::get(PaymentType::PayPalInstallments)),
        )?;

        // financing is only offered with a known shipping address
        let shipping_address = PaypalShippingAddress::try_from(params)?;
        payment
            .transactions
            .item_list
            .get_or_insert_with(|| PaypalItemList {
                items: Vec::new(),
                shipping_address: None,
            })
            .shipping_address = Some(shipping_address);

        Ok(payment)
    }
}
