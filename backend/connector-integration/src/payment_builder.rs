//! Builders for the payment document sent to the PayPal payments API.

pub mod installments;
pub mod plus;

use std::sync::Arc;

use common_enums::{Currency, PaymentIntent, PaymentType};
use common_utils::CustomResult;
use domain_types::{
    errors::ConnectorError, router_request_types::PaymentBuilderParameters,
    utils::ForeignTryFrom,
};
use interfaces::{
    api::PaymentBuilder,
    routing::{RouteParameters, Router},
    services::{SettingsService, ShopContext},
};

pub use self::{installments::InstallmentsPaymentBuilderService, plus::PlusPaymentBuilderService};
use crate::{
    connectors::paypal::transformers::{
        PaypalAmount, PaypalItemList, PaypalPayer, PaypalPayment, PaypalRedirectUrls,
        PaypalRouterData, PaypalTransactions,
    },
    utils::PaymentBuilderParametersData,
};

const CONTROLLER: &str = "PaypalUnified";
const ACTION_RETURN: &str = "return";
const ACTION_CANCEL: &str = "cancel";

/// Builds classic checkout payments.
#[derive(Clone)]
pub struct PaymentBuilderService {
    router: Arc<dyn Router>,
    settings: Arc<dyn SettingsService>,
    shop: Arc<dyn ShopContext>,
}

impl PaymentBuilderService {
    pub fn new(
        router: Arc<dyn Router>,
        settings: Arc<dyn SettingsService>,
        shop: Arc<dyn ShopContext>,
    ) -> Self {
        Self {
            router,
            settings,
            shop,
        }
    }

    fn get_intent(&self, payment_type: PaymentType) -> CustomResult<PaymentIntent, ConnectorError> {
        if payment_type.forces_sale_intent() {
            return Ok(PaymentIntent::Sale);
        }
        PaymentIntent::foreign_try_from(self.settings.general())
    }

    fn get_currency(&self, params: &PaymentBuilderParameters) -> Currency {
        params
            .basket_data()
            .currency
            .unwrap_or_else(|| self.shop.currency())
    }

    pub(crate) fn assemble_return_url(
        &self,
        controller: &str,
        basket_id: Option<&str>,
    ) -> CustomResult<String, ConnectorError> {
        let route = RouteParameters::new(controller, ACTION_RETURN);
        let route = match basket_id {
            Some(basket_id) => route.with_basket_id(basket_id),
            None => route,
        };
        self.router.assemble(&route)
    }

    pub(crate) fn get_redirect_urls(
        &self,
        controller: &str,
        basket_id: Option<&str>,
    ) -> CustomResult<PaypalRedirectUrls, ConnectorError> {
        Ok(PaypalRedirectUrls {
            return_url: self.assemble_return_url(controller, basket_id)?,
            cancel_url: self
                .router
                .assemble(&RouteParameters::new(controller, ACTION_CANCEL))?,
        })
    }

    /// Builds the payment with the given intent.
    pub(crate) fn build_payment(
        &self,
        params: &PaymentBuilderParameters,
        intent: PaymentIntent,
    ) -> CustomResult<PaypalPayment, ConnectorError> {
        let router_data = PaypalRouterData {
            params,
            currency: self.get_currency(params),
            submit_cart: self.settings.general().submit_cart,
        };

        let amount = PaypalAmount::try_from(&router_data)?;
        let item_list = router_data
            .submit_cart
            .then(|| PaypalItemList::from(&router_data));

        tracing::debug!(
            payment_type = %params.payment_type(),
            currency = %router_data.currency,
            locale = self.shop.locale_code(),
            "building payment"
        );

        Ok(PaypalPayment {
            intent,
            experience_profile_id: params.get_web_profile_id()?,
            payer: PaypalPayer::default(),
            transactions: PaypalTransactions {
                amount,
                item_list,
                shipment_details: None,
            },
            redirect_urls: self.get_redirect_urls(CONTROLLER, params.basket_unique_id())?,
        })
    }
}

impl PaymentBuilder for PaymentBuilderService {
    type Payment = PaypalPayment;

    fn get_payment(
        &self,
        params: &PaymentBuilderParameters,
    ) -> CustomResult<PaypalPayment, ConnectorError> {
        let intent = self.get_intent(params.payment_type())?;
        self.build_payment(params, intent)
    }
}
