#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectorError {
    #[error("Missing required field: {field_name}")]
    MissingRequiredField { field_name: &'static str },
    #[error("Invalid data format for field: {field_name}")]
    InvalidDataFormat { field_name: &'static str },
    #[error("Invalid connector configuration: {config}")]
    InvalidConnectorConfig { config: &'static str },
    #[error("Failed to build the {url_name} url")]
    UrlBuildFailed { url_name: &'static str },
    #[error("Failed to convert amount to required type")]
    AmountConversionFailed,
    #[error("Failed to encode connector request")]
    RequestEncodingFailed,
    #[error("Failed to deserialize connector response")]
    ResponseDeserializationFailed,
}
