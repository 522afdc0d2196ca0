//! Client records
//!
//! A client is referenced by zero or more quotes. Deletion while
//! references exist is blocked by the CRUD layer, not here; the export
//! pipeline tolerates a quote whose client lookup failed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A billable client (company)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    /// Legal company name (required)
    pub company_name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub province: Option<String>,
    /// Defaults to "Italia"
    #[serde(default = "default_country")]
    pub country: String,
    pub vat_number: Option<String>,
    pub fiscal_code: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub contact_person: Option<String>,
    pub notes: Option<String>,
}

fn default_country() -> String {
    "Italia".to_string()
}

impl Client {
    /// Create a new client with the given company name
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            company_name: company_name.into(),
            address: None,
            city: None,
            postal_code: None,
            province: None,
            country: default_country(),
            vat_number: None,
            fiscal_code: None,
            email: None,
            phone: None,
            contact_person: None,
            notes: None,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn with_postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = Some(postal_code.into());
        self
    }

    pub fn with_province(mut self, province: impl Into<String>) -> Self {
        self.province = Some(province.into());
        self
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn with_vat_number(mut self, vat_number: impl Into<String>) -> Self {
        self.vat_number = Some(vat_number.into());
        self
    }

    pub fn with_fiscal_code(mut self, fiscal_code: impl Into<String>) -> Self {
        self.fiscal_code = Some(fiscal_code.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_contact_person(mut self, contact_person: impl Into<String>) -> Self {
        self.contact_person = Some(contact_person.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_client_defaults() {
        let client = Client::new("Acme Srl");
        assert_eq!(client.company_name, "Acme Srl");
        assert_eq!(client.country, "Italia");
        assert!(client.address.is_none());
        assert!(client.vat_number.is_none());
    }

    #[test]
    fn test_builder_fields() {
        let client = Client::new("Acme Srl")
            .with_address("Via Roma 1")
            .with_city("Milano")
            .with_postal_code("20100")
            .with_province("MI")
            .with_vat_number("IT01234567890");
        assert_eq!(client.address.as_deref(), Some("Via Roma 1"));
        assert_eq!(client.city.as_deref(), Some("Milano"));
        assert_eq!(client.province.as_deref(), Some("MI"));
    }

    #[test]
    fn test_country_default_on_deserialize() {
        let json = r#"{"id":"00000000-0000-0000-0000-000000000001","company_name":"Acme"}"#;
        let client: Client = serde_json::from_str(json).unwrap();
        assert_eq!(client.country, "Italia");
    }
}
