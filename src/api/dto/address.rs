//! DTOs for the shipping address endpoints.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::Address;

/// Request saving the user's shipping address.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveAddressRequest {
    #[validate(nested)]
    pub address: AddressDto,
}

/// Validated address shape.
///
/// The reference behavior stored whatever blob the client sent; this
/// boundary requires the fields a shipment actually needs.
#[derive(Debug, Deserialize, Validate)]
pub struct AddressDto {
    #[validate(length(min = 1, max = 200))]
    pub street: String,

    #[validate(length(min = 1, max = 100))]
    pub city: String,

    #[validate(length(max = 100))]
    pub region: Option<String>,

    #[serde(rename = "postalCode")]
    #[validate(length(min = 1, max = 20))]
    pub postal_code: String,

    #[validate(length(min = 2, max = 56))]
    pub country: String,

    #[validate(length(max = 32))]
    pub phone: Option<String>,
}

impl From<AddressDto> for Address {
    fn from(dto: AddressDto) -> Self {
        Address {
            street: dto.street,
            city: dto.city,
            region: dto.region,
            postal_code: dto.postal_code,
            country: dto.country,
            phone: dto.phone,
        }
    }
}
