//! Resolution of authenticated principals to user records.

use serde_json::json;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Maps an authenticated principal (email) to its user record.
///
/// Every storefront operation starts here: the auth middleware proves who
/// the caller is, this lookup decides whether they exist as a customer.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] when no user record carries the email.
/// Returns [`AppError::Internal`] on database errors.
pub async fn resolve_user(users: &dyn UserRepository, email: &str) -> Result<User, AppError> {
    users
        .find_by_email(email)
        .await?
        .ok_or_else(|| AppError::not_found("User not found", json!({ "email": email })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUserRepository;

    #[tokio::test]
    async fn test_resolve_existing_user() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .withf(|email| email == "buyer@example.com")
            .times(1)
            .returning(|_| {
                Ok(Some(User::new(
                    7,
                    "buyer@example.com".to_string(),
                    "Buyer".to_string(),
                    None,
                )))
            });

        let user = resolve_user(&users, "buyer@example.com").await.unwrap();

        assert_eq!(user.id, 7);
    }

    #[tokio::test]
    async fn test_resolve_unknown_principal() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));

        let result = resolve_user(&users, "ghost@example.com").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
