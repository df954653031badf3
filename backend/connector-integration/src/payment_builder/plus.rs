use std::sync::Arc;

use common_enums::PaymentType;
use common_utils::{date_time, loose, CustomResult};
use domain_types::{
    errors::ConnectorError,
    router_request_types::{BasketData, PaymentBuilderParameters},
};
use error_stack::{report, ResultExt};
use interfaces::{api::PaymentBuilder, services::AttributeService};

use super::{PaymentBuilderService, CONTROLLER};
use crate::{
    connectors::paypal::transformers::{PaypalPayment, PaypalShipmentDetails},
    validation::BasketIdWhitelist,
};

/// Builds payments for the PayPal Plus payment wall.
///
/// On top of a classic payment the return URL carries the Plus basket id and,
/// when products define an estimated delivery time, the transaction carries
/// the estimated delivery date.
#[derive(Clone)]
pub struct PlusPaymentBuilderService {
    base: PaymentBuilderService,
    attributes: Arc<dyn AttributeService>,
}

impl PlusPaymentBuilderService {
    pub const EDD_ATTRIBUTE_COLUMN_NAME: &'static str = "swag_paypal_estimated_delivery_date_days";
    pub const EDD_ATTRIBUTE_TABLE: &'static str = "s_articles_attributes";

    pub fn new(base: PaymentBuilderService, attributes: Arc<dyn AttributeService>) -> Self {
        Self { base, attributes }
    }

    /// Highest delivery time in days among the basket's products.
    fn get_estimated_delivery_days(&self, basket: &BasketData) -> Option<i64> {
        if !self
            .attributes
            .column_exists(Self::EDD_ATTRIBUTE_TABLE, Self::EDD_ATTRIBUTE_COLUMN_NAME)
        {
            return None;
        }

        basket
            .content
            .iter()
            .filter_map(|item| item.attribute(Self::EDD_ATTRIBUTE_COLUMN_NAME))
            .filter_map(loose::integer_from_any)
            .filter(|days| *days >= 0)
            .max()
    }

    fn get_shipment_details(
        &self,
        basket: &BasketData,
    ) -> CustomResult<Option<PaypalShipmentDetails>, ConnectorError> {
        let Some(days) = self.get_estimated_delivery_days(basket) else {
            return Ok(None);
        };

        let invalid_days = || ConnectorError::InvalidDataFormat {
            field_name: Self::EDD_ATTRIBUTE_COLUMN_NAME,
        };
        let date = date_time::add_days(self.base.shop.today(), days).ok_or_else(|| {
            report!(invalid_days()).attach_printable(format!("{days} days are out of range"))
        })?;
        let estimated_delivery_date =
            date_time::format_iso_date(date).change_context_lazy(invalid_days)?;

        Ok(Some(PaypalShipmentDetails {
            estimated_delivery_date,
        }))
    }
}

impl PaymentBuilder for PlusPaymentBuilderService {
    type Payment = PaypalPayment;

    fn get_payment(
        &self,
        params: &PaymentBuilderParameters,
    ) -> CustomResult<PaypalPayment, ConnectorError> {
        if !self.base.settings.plus().is_some_and(|plus| plus.active) {
            return Err(report!(ConnectorError::InvalidConnectorConfig {
                config: "settings.plus.active",
            })
            .attach_printable("PayPal Plus is not active for this shop"));
        }

        let mut payment = self.base.get_payment(params)?;

        payment.redirect_urls.return_url = self.base.assemble_return_url(
            CONTROLLER,
            Some(BasketIdWhitelist::get(PaymentType::PayPalPlus)),
        )?;
        payment.transactions.shipment_details = self.get_shipment_details(params.basket_data())?;

        Ok(payment)
    }
}
