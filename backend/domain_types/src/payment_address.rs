use common_utils::loose;
use hyperswitch_masking::{PeekInterface, Secret};

use crate::utils::{missing_field_err, Error};

#[derive(Clone, Default, Debug)]
pub struct PaymentAddress {
    shipping: Option<Address>,
    billing: Option<Address>,
}

impl PaymentAddress {
    pub fn new(shipping: Option<Address>, billing: Option<Address>) -> Self {
        Self { shipping, billing }
    }

    pub fn get_shipping(&self) -> Option<&Address> {
        self.shipping.as_ref()
    }

    pub fn get_payment_billing(&self) -> Option<&Address> {
        self.billing.as_ref()
    }

    pub fn get_required_shipping(&self) -> Result<&Address, Error> {
        self.get_shipping()
            .ok_or_else(missing_field_err("user_data.shippingaddress"))
    }

    /// VAT id of the shipping address, `None` when absent or empty.
    pub fn get_shipping_vat_id(&self) -> Option<&str> {
        self.get_shipping().and_then(Address::get_optional_vat_id)
    }

    pub fn get_billing_vat_id(&self) -> Option<&str> {
        self.get_payment_billing()
            .and_then(Address::get_optional_vat_id)
    }
}

/// A customer address as the shop stores it.
#[derive(Default, Clone, Debug, serde::Deserialize)]
pub struct Address {
    #[serde(default)]
    pub firstname: Option<Secret<String>>,
    #[serde(default)]
    pub lastname: Option<Secret<String>>,
    #[serde(default)]
    pub street: Option<Secret<String>>,
    #[serde(default)]
    pub additional_address_line1: Option<Secret<String>>,
    #[serde(default)]
    pub zipcode: Option<Secret<String>>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub phone: Option<Secret<String>>,
    #[serde(default, deserialize_with = "loose::optional_string_from_any")]
    pub ustid: Option<String>,
}

fn non_empty(value: &Option<Secret<String>>) -> Option<Secret<String>> {
    value
        .as_ref()
        .filter(|secret| !secret.peek().trim().is_empty())
        .cloned()
}

impl Address {
    /// First and last name joined by a space.
    pub fn get_recipient_name(&self) -> Result<Secret<String>, Error> {
        let first_name = non_empty(&self.firstname)
            .ok_or_else(missing_field_err("shippingaddress.firstname"))?;
        Ok(match non_empty(&self.lastname) {
            Some(last_name) => Secret::new(format!("{} {}", first_name.peek(), last_name.peek())),
            None => first_name,
        })
    }

    pub fn get_line1(&self) -> Result<Secret<String>, Error> {
        non_empty(&self.street).ok_or_else(missing_field_err("shippingaddress.street"))
    }

    pub fn get_optional_line2(&self) -> Option<Secret<String>> {
        non_empty(&self.additional_address_line1)
    }

    pub fn get_zip(&self) -> Result<Secret<String>, Error> {
        non_empty(&self.zipcode).ok_or_else(missing_field_err("shippingaddress.zipcode"))
    }

    pub fn get_city(&self) -> Result<String, Error> {
        self.city
            .clone()
            .filter(|city| !city.trim().is_empty())
            .ok_or_else(missing_field_err("shippingaddress.city"))
    }

    pub fn get_optional_phone(&self) -> Option<Secret<String>> {
        non_empty(&self.phone)
    }

    pub fn get_optional_vat_id(&self) -> Option<&str> {
        self.ustid.as_deref().filter(|vat_id| !vat_id.trim().is_empty())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::errors::ConnectorError;

    #[test]
    fn test_recipient_name_joins_first_and_last_name() {
        let address: Address = serde_json::from_value(json!({
            "firstname": "Max",
            "lastname": "Mustermann",
            "street": "Ebbinghoff 10",
            "additional_address_line1": "",
        }))
        .unwrap();

        assert_eq!(address.get_recipient_name().unwrap().peek(), "Max Mustermann");
        assert!(address.get_optional_line2().is_none());
    }

    #[test]
    fn test_missing_city_is_reported() {
        let address = Address::default();
        assert_eq!(
            address.get_city().unwrap_err().current_context(),
            &ConnectorError::MissingRequiredField {
                field_name: "shippingaddress.city"
            }
        );
    }
}
