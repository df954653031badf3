use common_enums::LogLevel;
use interfaces::services::{LoggerService, Severity};
use serde_json::{Map, Value};

/// Writes plugin log entries as tracing events.
///
/// Notifications are only written with [`LogLevel::Extended`].
#[derive(Clone, Debug, Default)]
pub struct TracingLoggerService {
    log_level: LogLevel,
}

impl TracingLoggerService {
    pub fn new(log_level: LogLevel) -> Self {
        Self { log_level }
    }
}

impl LoggerService for TracingLoggerService {
    fn log(&self, severity: Severity, key: &str, context: &Map<String, Value>) {
        let context = Value::Object(context.clone());
        match severity {
            Severity::Error => tracing::error!(%context, "{key}"),
            Severity::Warning => tracing::warn!(%context, "{key}"),
            Severity::Notify if self.log_level == LogLevel::Extended => {
                tracing::info!(%context, "{key}")
            }
            Severity::Notify => {}
        }
    }
}
