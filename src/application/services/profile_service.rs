//! User profile and address updates.

use std::sync::Arc;

use crate::application::identity::resolve_user;
use crate::domain::entities::{Address, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service for profile mutations: shipping address and display name.
pub struct ProfileService {
    users: Arc<dyn UserRepository>,
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Overwrites the stored shipping address.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the principal has no user record.
    pub async fn save_address(&self, email: &str, address: Address) -> Result<(), AppError> {
        let user = resolve_user(self.users.as_ref(), email).await?;
        self.users.update_address(user.id, &address).await
    }

    /// Returns the stored address, or `None` if never set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the principal has no user record.
    pub async fn get_address(&self, email: &str) -> Result<Option<Address>, AppError> {
        let user = resolve_user(self.users.as_ref(), email).await?;
        Ok(user.address)
    }

    /// Overwrites the display name and returns the updated user document.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the principal has no user record.
    pub async fn update_details(&self, email: &str, name: &str) -> Result<User, AppError> {
        let user = resolve_user(self.users.as_ref(), email).await?;
        self.users.update_name(user.id, name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;

    fn test_address() -> Address {
        Address {
            street: "42 Market St".to_string(),
            city: "Pune".to_string(),
            region: None,
            postal_code: "411001".to_string(),
            country: "IN".to_string(),
            phone: None,
        }
    }

    fn user_with_address(address: Option<Address>) -> User {
        User::new(
            1,
            "buyer@example.com".to_string(),
            "Buyer".to_string(),
            address,
        )
    }

    #[tokio::test]
    async fn test_save_address_overwrites() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|_| Ok(Some(user_with_address(None))));
        users
            .expect_update_address()
            .withf(|user_id, address| *user_id == 1 && address.city == "Pune")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = ProfileService::new(Arc::new(users));

        service
            .save_address("buyer@example.com", test_address())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_get_address_when_never_set() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|_| Ok(Some(user_with_address(None))));

        let service = ProfileService::new(Arc::new(users));

        let address = service.get_address("buyer@example.com").await.unwrap();

        assert!(address.is_none());
    }

    #[tokio::test]
    async fn test_update_details_returns_updated_user() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|_| Ok(Some(user_with_address(None))));
        users
            .expect_update_name()
            .withf(|user_id, name| *user_id == 1 && name == "New Name")
            .times(1)
            .returning(|_, name| {
                Ok(User::new(
                    1,
                    "buyer@example.com".to_string(),
                    name.to_string(),
                    None,
                ))
            });

        let service = ProfileService::new(Arc::new(users));

        let user = service
            .update_details("buyer@example.com", "New Name")
            .await
            .unwrap();

        assert_eq!(user.name, "New Name");
    }
}
