//! Normalizes failed PayPal calls into errors that can be shown to a customer.

use std::sync::Arc;

use domain_types::router_data::{CommunicationFailure, ErrorResponse, LogEntry};
use interfaces::services::LoggerService;

use crate::connectors::paypal::transformers;

#[derive(Clone)]
pub struct ExceptionHandlerService {
    logger: Arc<dyn LoggerService>,
}

impl ExceptionHandlerService {
    pub fn new(logger: Arc<dyn LoggerService>) -> Self {
        Self { logger }
    }

    /// Writes exactly one error entry for `failure` and returns the error to
    /// present for it. `action` describes the failed call, e.g. `"create payment"`.
    pub fn handle(&self, failure: &CommunicationFailure, action: &str) -> ErrorResponse {
        let entry = LogEntry::communication_failure(action, failure);
        self.logger.error(&entry.key, &entry.context);

        let fallback = || ErrorResponse::new(failure.code().to_string(), failure.message());
        let Some(body) = failure.body() else {
            return fallback();
        };

        match transformers::parse_error_body(body) {
            Ok(Some(response)) => response.into(),
            Ok(None) => fallback(),
            Err(report) => {
                tracing::debug!(error = ?report, "error body is not json");
                fallback()
            }
        }
    }
}
