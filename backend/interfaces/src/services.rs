//! Collaborators the shop provides to the connector.

use common_enums::Currency;
use common_utils::date_time;
use domain_types::types::{GeneralSettings, InstallmentsSettings, PlusSettings};
use serde_json::{Map, Value};
use time::Date;

/// Access to the PayPal settings of the current shop.
pub trait SettingsService: Send + Sync {
    fn general(&self) -> &GeneralSettings;

    /// `None` when the shop has no Plus settings stored.
    fn plus(&self) -> Option<&PlusSettings>;

    fn installments(&self) -> Option<&InstallmentsSettings>;

    fn is_sandbox(&self) -> bool {
        self.general().sandbox
    }
}

/// Lookup of attribute columns defined in the shop database.
pub trait AttributeService: Send + Sync {
    fn column_exists(&self, table: &str, column: &str) -> bool;
}

/// Locale and currency of the shop the customer is browsing.
pub trait ShopContext: Send + Sync {
    fn locale_code(&self) -> &str;

    fn currency(&self) -> Currency;

    /// Calendar date in the shop's time zone.
    fn today(&self) -> Date {
        date_time::today()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Severity {
    Notify,
    Warning,
    Error,
}

/// Sink for the plugin's diagnostic log.
///
/// Implementations must accept concurrent writes. Each call writes one entry.
pub trait LoggerService: Send + Sync {
    fn log(&self, severity: Severity, key: &str, context: &Map<String, Value>);

    fn notify(&self, key: &str, context: &Map<String, Value>) {
        self.log(Severity::Notify, key, context)
    }

    fn warning(&self, key: &str, context: &Map<String, Value>) {
        self.log(Severity::Warning, key, context)
    }

    fn error(&self, key: &str, context: &Map<String, Value>) {
        self.log(Severity::Error, key, context)
    }
}
