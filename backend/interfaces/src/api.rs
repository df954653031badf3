use common_utils::CustomResult;
use domain_types::{
    errors::ConnectorError,
    router_data::{ConnectorAuthType, ErrorResponse},
    router_request_types::PaymentBuilderParameters,
    router_response_types::Response,
    types::Connectors,
};

pub trait ConnectorCommon {
    /// Name of the connector (in lowercase).
    fn id(&self) -> &'static str;

    /// HTTP header used for authorization.
    fn get_auth_header(
        &self,
        _auth_type: &ConnectorAuthType,
    ) -> CustomResult<Vec<(String, hyperswitch_masking::Maskable<String>)>, ConnectorError> {
        Ok(Vec::new())
    }

    /// HTTP `Content-Type` to be used for POST requests.
    /// Defaults to `application/json`.
    fn common_get_content_type(&self) -> &'static str {
        "application/json"
    }

    /// The base URL for interacting with the connector's API.
    fn base_url<'a>(&self, connectors: &'a Connectors) -> &'a str;

    /// Normalizes a failed response of the call described by `action`.
    fn build_error_response(
        &self,
        res: Response,
        _action: &str,
    ) -> CustomResult<ErrorResponse, ConnectorError> {
        Ok(ErrorResponse::new(
            res.status_code.to_string(),
            &format!("Server responded with status code {}", res.status_code),
        ))
    }
}

/// Assembles the payment document sent to create a payment.
pub trait PaymentBuilder: Send + Sync {
    type Payment: serde::Serialize + std::fmt::Debug;

    fn get_payment(
        &self,
        params: &PaymentBuilderParameters,
    ) -> CustomResult<Self::Payment, ConnectorError>;
}
