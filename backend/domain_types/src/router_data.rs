use std::fmt;

use common_utils::consts;
use hyperswitch_masking::Secret;
use serde_json::{Map, Value};

use crate::{router_response_types::Response, types::GeneralSettings};

#[derive(Clone, Debug)]
pub enum ConnectorAuthType {
    /// OAuth client credentials of the REST app.
    ClientCredentials {
        client_id: Secret<String>,
        client_secret: Secret<String>,
    },
}

impl From<&GeneralSettings> for ConnectorAuthType {
    fn from(settings: &GeneralSettings) -> Self {
        Self::ClientCredentials {
            client_id: settings.client_id.clone(),
            client_secret: settings.client_secret.clone(),
        }
    }
}

/// Error presented to the customer after a failed PayPal call.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    /// Builds an error whose message carries the customer facing prefix.
    pub fn new(name: impl Into<String>, description: &str) -> Self {
        Self {
            name: name.into(),
            message: format!("{}{description}", consts::ERROR_MESSAGE_PREFIX),
        }
    }
}

/// Code of the raw failure, numeric for HTTP and client errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureCode {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for FailureCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(code) => write!(f, "{code}"),
            Self::Text(code) => f.write_str(code),
        }
    }
}

impl From<i64> for FailureCode {
    fn from(code: i64) -> Self {
        Self::Numeric(code)
    }
}

impl From<i32> for FailureCode {
    fn from(code: i32) -> Self {
        Self::Numeric(i64::from(code))
    }
}

impl From<u16> for FailureCode {
    fn from(code: u16) -> Self {
        Self::Numeric(i64::from(code))
    }
}

impl From<&str> for FailureCode {
    fn from(code: &str) -> Self {
        Self::Text(code.to_string())
    }
}

impl From<String> for FailureCode {
    fn from(code: String) -> Self {
        Self::Text(code)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureKind {
    /// Raised before or without any response, e.g. while preparing the call.
    Plain,
    /// Raised by the HTTP layer, possibly with the response body PayPal sent.
    Request { body: Option<String> },
}

/// A failure raised while calling the PayPal API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommunicationFailure {
    code: FailureCode,
    message: String,
    kind: FailureKind,
}

impl CommunicationFailure {
    pub fn plain(code: impl Into<FailureCode>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            kind: FailureKind::Plain,
        }
    }

    pub fn request(
        code: impl Into<FailureCode>,
        message: impl Into<String>,
        body: Option<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            kind: FailureKind::Request { body },
        }
    }

    /// Wraps a non-success HTTP response. An empty body counts as no body.
    pub fn from_response(res: &Response) -> Self {
        let body = (!res.response.is_empty())
            .then(|| String::from_utf8_lossy(&res.response).into_owned());
        Self::request(
            res.status_code,
            format!("Server responded with status code {}", res.status_code),
            body,
        )
    }

    pub fn code(&self) -> &FailureCode {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> &FailureKind {
        &self.kind
    }

    pub fn body(&self) -> Option<&str> {
        match &self.kind {
            FailureKind::Plain => None,
            FailureKind::Request { body } => body.as_deref(),
        }
    }
}

/// One diagnostic entry describing a failed call.
#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub key: String,
    pub context: Map<String, Value>,
}

impl LogEntry {
    /// `payload` is present exactly when the failure carried a body.
    pub fn communication_failure(action: &str, failure: &CommunicationFailure) -> Self {
        let mut context = Map::new();
        context.insert(
            consts::LOG_MESSAGE.to_string(),
            Value::String(failure.message().to_string()),
        );
        if let Some(body) = failure.body() {
            context.insert(
                consts::LOG_PAYLOAD.to_string(),
                Value::String(body.to_string()),
            );
        }

        Self {
            key: format!("Could not {action} due to a communication failure"),
            context,
        }
    }
}
