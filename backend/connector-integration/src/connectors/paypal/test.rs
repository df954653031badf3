#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{Arc, Mutex};

    use domain_types::{
        router_data::ErrorResponse,
        router_response_types::Response,
        types::{ConnectorParams, Connectors, GeneralSettings, InstallmentsSettings, PlusSettings},
    };
    use hyperswitch_masking::{Maskable, Secret};
    use interfaces::{
        api::ConnectorCommon,
        services::{LoggerService, SettingsService, Severity},
    };
    use rust_decimal::Decimal;
    use serde_json::{Map, Value};

    use crate::connectors::PaypalUnified;

    struct Settings(GeneralSettings);

    impl SettingsService for Settings {
        fn general(&self) -> &GeneralSettings {
            &self.0
        }

        fn plus(&self) -> Option<&PlusSettings> {
            None
        }

        fn installments(&self) -> Option<&InstallmentsSettings> {
            None
        }
    }

    #[derive(Default)]
    struct Logger(Mutex<Vec<(Severity, String)>>);

    impl LoggerService for Logger {
        fn log(&self, severity: Severity, key: &str, _context: &Map<String, Value>) {
            self.0.lock().unwrap().push((severity, key.to_string()));
        }
    }

    fn connectors() -> Connectors {
        Connectors {
            paypal: ConnectorParams {
                base_url: "https://api.paypal.com/".to_string(),
                sandbox_base_url: "https://api.sandbox.paypal.com/".to_string(),
            },
        }
    }

    fn connector(sandbox: bool, logger: Arc<Logger>) -> PaypalUnified {
        PaypalUnified::new(
            Arc::new(Settings(GeneralSettings {
                sandbox,
                client_id: Secret::new("client".to_string()),
                client_secret: Secret::new("secret".to_string()),
                ..Default::default()
            })),
            logger,
        )
    }

    fn response(status_code: u16, body: &'static str) -> Response {
        Response {
            headers: None,
            response: bytes::Bytes::from_static(body.as_bytes()),
            status_code,
        }
    }

    #[test]
    fn test_url_follows_sandbox_mode() {
        let connectors = connectors();

        assert_eq!(
            connector(true, Arc::default()).get_url(&connectors).unwrap(),
            "https://api.sandbox.paypal.com/v1/payments/payment"
        );
        assert_eq!(
            connector(false, Arc::default()).get_url(&connectors).unwrap(),
            "https://api.paypal.com/v1/payments/payment"
        );
    }

    #[test]
    fn test_headers_carry_basic_credentials() {
        let headers = connector(true, Arc::default()).get_headers().unwrap();

        assert_eq!(headers.len(), 2);
        let (name, value) = &headers[1];
        assert_eq!(name, "Authorization");
        assert!(matches!(value, Maskable::Masked(_)));
        assert_eq!(value.clone().into_inner(), "Basic Y2xpZW50OnNlY3JldA==");
    }

    #[test]
    fn test_missing_credentials_are_rejected() {
        let connector = PaypalUnified::new(
            Arc::new(Settings(GeneralSettings::default())),
            Arc::new(Logger::default()),
        );
        assert!(connector.get_headers().is_err());
    }

    #[test]
    fn test_build_error_response_normalizes_body() {
        let logger = Arc::new(Logger::default());
        let error = connector(true, logger.clone())
            .build_error_response(
                response(
                    400,
                    r#"{"name":"VALIDATION_ERROR","message":"Invalid request","details":[{"field":"transactions.amount","issue":"Amount cannot be zero"}]}"#,
                ),
                "create payment",
            )
            .unwrap();

        assert_eq!(
            error,
            ErrorResponse {
                name: "VALIDATION_ERROR".to_string(),
                message: "An error occurred: Invalid request: transactions.amount, Amount cannot be zero"
                    .to_string(),
            }
        );
        assert_eq!(
            *logger.0.lock().unwrap(),
            vec![(
                Severity::Error,
                "Could not create payment due to a communication failure".to_string()
            )]
        );
    }

    #[test]
    fn test_financing_information_from_payment_response() {
        let financing = connector(true, Arc::default())
            .get_financing_information(&response(
                201,
                r#"{
                    "id": "PAY-TEST",
                    "state": "created",
                    "credit_financing_offered": {
                        "total_cost": { "value": "381.05", "currency": "EUR" },
                        "term": 12,
                        "monthly_payment": { "value": "21.99", "currency": "EUR" },
                        "total_interest": { "value": "19.91", "currency": "EUR" },
                        "payer_acceptance": true,
                        "cart_amount_immutable": true
                    }
                }"#,
            ))
            .unwrap()
            .unwrap();

        assert_eq!(financing.payment_id, "PAY-TEST");
        assert_eq!(financing.fee_amount, Decimal::new(1991, 2));
        assert_eq!(financing.total_cost, Decimal::new(38105, 2));
        assert_eq!(financing.monthly_payment, Decimal::new(2199, 2));
        assert_eq!(financing.term, 12);
    }

    #[test]
    fn test_payment_without_financing() {
        let financing = connector(true, Arc::default())
            .get_financing_information(&response(201, r#"{"id":"PAY-TEST"}"#))
            .unwrap();
        assert!(financing.is_none());
    }
}
