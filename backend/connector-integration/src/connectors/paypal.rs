pub mod transformers;

#[cfg(test)]
mod test;

use std::sync::Arc;

use base64::{engine::general_purpose::STANDARD, Engine};
use common_utils::{ext_traits::StringExt, CustomResult};
use domain_types::{
    errors,
    router_data::{CommunicationFailure, ConnectorAuthType, ErrorResponse},
    router_request_types::PaymentBuilderParameters,
    router_response_types::{FinancingInformation, Response},
    types::Connectors,
    utils::Encode,
};
use error_stack::ResultExt;
use hyperswitch_masking::{Mask, Maskable, PeekInterface};
use interfaces::{
    api::{ConnectorCommon, PaymentBuilder},
    services::{LoggerService, SettingsService},
};

use self::transformers::{FinancingInformationExt, PaypalPaymentResponse};
use crate::exception_handler::ExceptionHandlerService;

pub(crate) mod headers {
    pub(crate) const CONTENT_TYPE: &str = "Content-Type";
    pub(crate) const AUTHORIZATION: &str = "Authorization";
}

const PAYMENT_RESOURCE: &str = "v1/payments/payment";

#[derive(Clone)]
pub struct PaypalUnified {
    settings: Arc<dyn SettingsService>,
    exception_handler: ExceptionHandlerService,
}

impl PaypalUnified {
    pub fn new(settings: Arc<dyn SettingsService>, logger: Arc<dyn LoggerService>) -> Self {
        Self {
            settings,
            exception_handler: ExceptionHandlerService::new(logger),
        }
    }

    pub fn get_headers(&self) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        let mut header = vec![(
            headers::CONTENT_TYPE.to_string(),
            self.common_get_content_type().to_string().into(),
        )];
        let auth_type = ConnectorAuthType::from(self.settings.general());
        let mut auth_header = self.get_auth_header(&auth_type)?;
        header.append(&mut auth_header);
        Ok(header)
    }

    /// URL of the payment resource for the configured mode.
    pub fn get_url(&self, connectors: &Connectors) -> CustomResult<String, errors::ConnectorError> {
        Ok(format!("{}{}", self.base_url(connectors), PAYMENT_RESOURCE))
    }

    /// Builds the payment with `builder` and encodes it as the request body.
    pub fn get_request_body<B: PaymentBuilder>(
        &self,
        builder: &B,
        params: &PaymentBuilderParameters,
    ) -> CustomResult<String, errors::ConnectorError> {
        let payment = builder.get_payment(params)?;
        payment
            .encode_to_string_of_json()
            .change_context(errors::ConnectorError::RequestEncodingFailed)
    }

    /// Reads the financing offer from a created installment payment.
    pub fn get_financing_information(
        &self,
        res: &Response,
    ) -> CustomResult<Option<FinancingInformation>, errors::ConnectorError> {
        let body = String::from_utf8_lossy(&res.response);
        let response: PaypalPaymentResponse = body
            .parse_struct("PaypalPaymentResponse")
            .change_context(errors::ConnectorError::ResponseDeserializationFailed)?;

        Ok(response
            .credit_financing_offered
            .as_ref()
            .map(|credit| FinancingInformation::from_credit(credit, &response.id)))
    }

    /// Normalizes a failure that happened before any response arrived.
    pub fn handle_failure(&self, failure: &CommunicationFailure, action: &str) -> ErrorResponse {
        self.exception_handler.handle(failure, action)
    }
}

impl ConnectorCommon for PaypalUnified {
    fn id(&self) -> &'static str {
        "paypal_unified"
    }

    fn get_auth_header(
        &self,
        auth_type: &ConnectorAuthType,
    ) -> CustomResult<Vec<(String, Maskable<String>)>, errors::ConnectorError> {
        match auth_type {
            ConnectorAuthType::ClientCredentials {
                client_id,
                client_secret,
            } => {
                if client_id.peek().is_empty() || client_secret.peek().is_empty() {
                    return Err(errors::ConnectorError::InvalidConnectorConfig {
                        config: "settings.general.client_id",
                    }
                    .into());
                }
                let credentials =
                    STANDARD.encode(format!("{}:{}", client_id.peek(), client_secret.peek()));
                Ok(vec![(
                    headers::AUTHORIZATION.to_string(),
                    format!("Basic {credentials}").into_masked(),
                )])
            }
        }
    }

    fn base_url<'a>(&self, connectors: &'a Connectors) -> &'a str {
        connectors.paypal.for_mode(self.settings.is_sandbox())
    }

    fn build_error_response(
        &self,
        res: Response,
        action: &str,
    ) -> CustomResult<ErrorResponse, errors::ConnectorError> {
        let failure = CommunicationFailure::from_response(&res);
        Ok(self.exception_handler.handle(&failure, action))
    }
}
