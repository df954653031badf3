use common_utils::LocaleNumber;
use domain_types::{
    errors,
    router_request_types::{PaymentBuilderParameters, UserData},
    utils::missing_field_err,
};
use error_stack::report;

type Error = error_stack::Report<errors::ConnectorError>;

pub trait PaymentBuilderParametersData {
    /// The web profile id, which the payment cannot be created without.
    fn get_web_profile_id(&self) -> Result<String, Error>;
    fn get_amount_with_tax_numeric(&self) -> Result<LocaleNumber, Error>;
    fn get_amount_tax(&self) -> Result<LocaleNumber, Error>;
}

impl PaymentBuilderParametersData for PaymentBuilderParameters {
    fn get_web_profile_id(&self) -> Result<String, Error> {
        let web_profile_id = self.web_profile_id().trim();
        if web_profile_id.is_empty() {
            return Err(report!(errors::ConnectorError::InvalidConnectorConfig {
                config: "web_profile_id",
            }));
        }
        Ok(web_profile_id.to_string())
    }

    fn get_amount_with_tax_numeric(&self) -> Result<LocaleNumber, Error> {
        self.basket_data()
            .amount_with_tax_numeric
            .ok_or_else(missing_field_err("AmountWithTaxNumeric"))
    }

    fn get_amount_tax(&self) -> Result<LocaleNumber, Error> {
        self.basket_data()
            .amount_tax
            .ok_or_else(missing_field_err("sAmountTax"))
    }
}

pub trait UserDataExt {
    fn get_shipping_country_code(&self) -> Result<String, Error>;
}

impl UserDataExt for UserData {
    fn get_shipping_country_code(&self) -> Result<String, Error> {
        self.shipping_country_code()
            .map(str::to_string)
            .ok_or_else(missing_field_err("additional.countryShipping.countryiso"))
    }
}
