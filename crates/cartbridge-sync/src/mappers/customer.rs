//! Customer to profile mapping.

use cartbridge_entities::commerce::{Address, Customer};
use cartbridge_entities::marketing::{
    ProfileAttributes, ProfileData, ProfileLocation, ProfileRequest,
};

/// Maps commerce customers to marketing profile bodies.
pub struct CustomerMapper;

impl CustomerMapper {
    pub fn new() -> Self {
        Self
    }

    /// Build a profile body for a customer. The marketing-platform id is
    /// never known here; updates are resolved by external id downstream.
    pub fn profile(&self, customer: &Customer) -> ProfileRequest {
        let address = customer.addresses.first();

        ProfileRequest {
            data: ProfileData {
                kind: "profile".to_string(),
                id: None,
                attributes: ProfileAttributes {
                    email: customer.email.clone(),
                    external_id: customer.id.clone(),
                    first_name: customer.first_name.clone(),
                    last_name: customer.last_name.clone(),
                    title: customer.title.clone(),
                    organization: customer.company_name.clone(),
                    phone_number: customer
                        .addresses
                        .iter()
                        .find_map(|a| a.phone_number())
                        .map(str::to_string),
                    location: address.map(profile_location),
                },
            },
        }
    }
}

impl Default for CustomerMapper {
    fn default() -> Self {
        Self::new()
    }
}

fn profile_location(address: &Address) -> ProfileLocation {
    let address1 = match (&address.street_name, &address.street_number) {
        (Some(name), Some(number)) => Some(format!("{} {}", name, number)),
        (Some(name), None) => Some(name.clone()),
        (None, Some(number)) => Some(number.clone()),
        (None, None) => None,
    };

    ProfileLocation {
        address1,
        address2: address.additional_street_info.clone(),
        city: address.city.clone(),
        country: address.country.clone(),
        region: address.region.clone(),
        zip: address.postal_code.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> Customer {
        serde_json::from_value(serde_json::json!({
            "id": "customer-1",
            "email": "jan@example.com",
            "firstName": "Jan",
            "lastName": "Kowalski",
            "companyName": "Example GmbH",
            "addresses": [{
                "streetName": "Hauptstrasse",
                "streetNumber": "12",
                "city": "Berlin",
                "postalCode": "10115",
                "country": "DE",
                "mobile": "+49 151 0000000"
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_profile_maps_identity_fields() {
        let request = CustomerMapper::new().profile(&customer());
        let attributes = &request.data.attributes;

        assert_eq!(attributes.email, "jan@example.com");
        assert_eq!(attributes.external_id, "customer-1");
        assert_eq!(attributes.first_name.as_deref(), Some("Jan"));
        assert_eq!(attributes.organization.as_deref(), Some("Example GmbH"));
        assert_eq!(attributes.phone_number.as_deref(), Some("+49 151 0000000"));
        assert!(request.data.id.is_none());
    }

    #[test]
    fn test_profile_location_joins_street_parts() {
        let request = CustomerMapper::new().profile(&customer());
        let location = request.data.attributes.location.unwrap();

        assert_eq!(location.address1.as_deref(), Some("Hauptstrasse 12"));
        assert_eq!(location.city.as_deref(), Some("Berlin"));
        assert_eq!(location.zip.as_deref(), Some("10115"));
    }

    #[test]
    fn test_customer_without_address_has_no_location() {
        let bare: Customer = serde_json::from_value(serde_json::json!({
            "id": "customer-2",
            "email": "kim@example.com"
        }))
        .unwrap();

        let request = CustomerMapper::new().profile(&bare);
        assert!(request.data.attributes.location.is_none());
        assert!(request.data.attributes.phone_number.is_none());
    }
}
