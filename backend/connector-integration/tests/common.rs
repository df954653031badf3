#![allow(dead_code, clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use common_enums::Currency;
use connector_integration::payment_builder::PaymentBuilderService;
use domain_types::types::{GeneralSettings, InstallmentsSettings, PlusSettings};
use interfaces::{
    routing::ShopRouter,
    services::{AttributeService, LoggerService, SettingsService, Severity, ShopContext},
};
use serde_json::{json, Map, Value};
use time::Date;

pub const SHOP_URL: &str = "https://shop.example/";
pub const WEB_PROFILE_ID: &str = "XP-TEST-PROFILE";

#[derive(Debug, Clone, PartialEq)]
pub struct LoggedEntry {
    pub severity: Severity,
    pub key: String,
    pub context: Map<String, Value>,
}

/// Records every entry instead of writing it.
#[derive(Default)]
pub struct LoggerMock {
    entries: Mutex<Vec<LoggedEntry>>,
}

impl LoggerMock {
    pub fn entries(&self) -> Vec<LoggedEntry> {
        self.entries.lock().unwrap().clone()
    }

    pub fn single_entry(&self) -> LoggedEntry {
        let entries = self.entries();
        assert_eq!(entries.len(), 1, "expected exactly one log entry");
        entries.into_iter().next().unwrap()
    }
}

impl LoggerService for LoggerMock {
    fn log(&self, severity: Severity, key: &str, context: &Map<String, Value>) {
        self.entries.lock().unwrap().push(LoggedEntry {
            severity,
            key: key.to_string(),
            context: context.clone(),
        });
    }
}

pub struct SettingsServicePaymentBuilderServiceMock {
    general: GeneralSettings,
    plus: Option<PlusSettings>,
    installments: Option<InstallmentsSettings>,
}

impl SettingsServicePaymentBuilderServiceMock {
    pub fn new(sandbox: bool, intent: i64) -> Self {
        Self {
            general: GeneralSettings {
                sandbox,
                intent,
                ..Default::default()
            },
            plus: Some(PlusSettings {
                active: true,
                ..Default::default()
            }),
            installments: Some(InstallmentsSettings { active: true }),
        }
    }

    pub fn with_submit_cart(mut self, submit_cart: bool) -> Self {
        self.general.submit_cart = submit_cart;
        self
    }

    pub fn with_plus(mut self, plus: Option<PlusSettings>) -> Self {
        self.plus = plus;
        self
    }

    pub fn with_installments(mut self, installments: Option<InstallmentsSettings>) -> Self {
        self.installments = installments;
        self
    }
}

impl SettingsService for SettingsServicePaymentBuilderServiceMock {
    fn general(&self) -> &GeneralSettings {
        &self.general
    }

    fn plus(&self) -> Option<&PlusSettings> {
        self.plus.as_ref()
    }

    fn installments(&self) -> Option<&InstallmentsSettings> {
        self.installments.as_ref()
    }
}

pub struct AttributeServiceMock {
    pub column_exists: bool,
}

impl AttributeService for AttributeServiceMock {
    fn column_exists(&self, _table: &str, _column: &str) -> bool {
        self.column_exists
    }
}

/// German shop in EUR. `today` pins the shop's calendar date.
#[derive(Default)]
pub struct ShopContextMock {
    pub today: Option<Date>,
}

impl ShopContext for ShopContextMock {
    fn locale_code(&self) -> &str {
        "de_DE"
    }

    fn currency(&self) -> Currency {
        Currency::EUR
    }

    fn today(&self) -> Date {
        self.today.unwrap_or_else(common_utils::date_time::today)
    }
}

pub fn payment_builder(settings: SettingsServicePaymentBuilderServiceMock) -> PaymentBuilderService {
    payment_builder_with_shop(settings, ShopContextMock::default())
}

pub fn payment_builder_with_shop(
    settings: SettingsServicePaymentBuilderServiceMock,
    shop: ShopContextMock,
) -> PaymentBuilderService {
    PaymentBuilderService::new(
        Arc::new(ShopRouter::new(SHOP_URL).unwrap()),
        Arc::new(settings),
        Arc::new(shop),
    )
}

pub fn basket_data() -> Value {
    json!({
        "Amount": "59,99",
        "AmountNet": "50,41",
        "Quantity": 1,
        "AmountNumeric": 114.99000000000001,
        "AmountNetNumeric": 96.629999999999995,
        "AmountWithTax": "136,8381",
        "AmountWithTaxNumeric": 136.8381,
        "sShippingcostsWithTax": 55.0,
        "sShippingcostsNet": 46.219999999999999,
        "sAmountTax": 18.359999999999999,
        "sAmountWithTax": 136.8381,
        "content": [
            {
                "ordernumber": "SW10137",
                "articlename": "Fahrerbrille Chronos",
                "quantity": "1",
                "price": "59,99",
                "netprice": "50.411764705882",
            }
        ],
    })
}

pub fn user_data(show_net: bool) -> Value {
    json!({
        "additional": {
            "show_net": show_net,
            "countryShipping": {
                "taxfree": "0",
            },
        },
    })
}

pub fn user_data_with_address() -> Value {
    json!({
        "additional": {
            "show_net": true,
            "country": { "id": 2, "countryiso": "DE" },
            "countryShipping": { "id": 2, "taxfree": "0", "countryiso": "DE" },
            "stateShipping": { "shortcode": "NW" },
        },
        "shippingaddress": {
            "firstname": "Max",
            "lastname": "Mustermann",
            "street": "Ebbinghoff 10",
            "additional_address_line1": "",
            "zipcode": "48624",
            "city": "Schöppingen",
            "phone": "",
        },
        "billingaddress": {
            "firstname": "Max",
            "lastname": "Mustermann",
            "street": "Ebbinghoff 10",
            "zipcode": "48624",
            "city": "Schöppingen",
        },
    })
}
