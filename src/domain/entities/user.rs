//! User entity and the structured shipping address.

use serde::{Deserialize, Serialize};

/// A registered storefront customer.
///
/// Users are created by the external registration flow; this service only
/// mutates the display name, the address, and the wishlist.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub address: Option<Address>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i64, email: String, name: String, address: Option<Address>) -> Self {
        Self {
            id,
            email,
            name,
            address,
        }
    }
}

/// Structured shipping address, stored as JSONB on the user row.
///
/// The reference behavior accepted an arbitrary blob here; the boundary now
/// requires an explicit shape and rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub postal_code: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
