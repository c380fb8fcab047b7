//! # Session Commands
//!
//! Login, signup, logout and profile edits. Signing in also preselects the
//! default recommendation genres and refreshes the checkout prefill.

use haven_core::{Checkout, User};

use crate::error::AppResult;
use crate::state::AuthStatus;
use crate::storefront::Storefront;

pub fn get_session(storefront: &Storefront) -> AuthStatus {
    storefront.auth.status().clone()
}

/// Signs in with the demo credentials.
///
/// ## Errors
/// `INVALID_CREDENTIALS` for any other pair. An error toast is raised too.
pub async fn login(storefront: &mut Storefront, email: &str, password: &str) -> AppResult<User> {
    let user = storefront.auth.login(email, password).await?;
    signed_in(storefront, &user);
    Ok(user)
}

pub async fn signup(storefront: &mut Storefront, name: &str, email: &str, password: &str) -> User {
    let user = storefront.auth.signup(name, email, password).await;
    signed_in(storefront, &user);
    user
}

pub async fn logout(storefront: &mut Storefront) -> AuthStatus {
    storefront.auth.logout().await;
    storefront.checkout = Checkout::new(None);
    storefront.auth.status().clone()
}

/// Edits the signed-in user's name and email.
pub async fn update_profile(storefront: &mut Storefront, name: &str, email: &str) -> AppResult<User> {
    Ok(storefront.auth.update_profile(name, email).await?)
}

fn signed_in(storefront: &mut Storefront, user: &User) {
    storefront.recommendations.apply_default_preferences();
    if !storefront.checkout.is_processing() {
        storefront.checkout = Checkout::new(Some(user));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::notify::Toast;
    use crate::state::StorefrontConfig;
    use haven_core::{CheckoutStep, SESSION_STORAGE_KEY};

    #[tokio::test]
    async fn test_login_demo_user() {
        let (mut storefront, mut toasts) = Storefront::bootstrap(StorefrontConfig::for_tests())
            .await
            .unwrap();

        let user = login(&mut storefront, "demo@example.com", "password")
            .await
            .unwrap();

        assert_eq!(user.name, "Demo User");
        assert_eq!(get_session(&storefront), AuthStatus::Authenticated(user));
        assert_eq!(storefront.recommendations.preferences(), ["Fiction", "Thriller"]);
        assert_eq!(storefront.checkout.form().full_name, "Demo User");
        assert_eq!(toasts.try_recv().unwrap(), Toast::success("Successfully signed in"));
    }

    #[tokio::test]
    async fn test_login_rejected() {
        let (mut storefront, mut toasts) = Storefront::bootstrap(StorefrontConfig::for_tests())
            .await
            .unwrap();

        let err = login(&mut storefront, "demo@example.com", "wrong")
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidCredentials);
        assert_eq!(get_session(&storefront), AuthStatus::Anonymous);
        assert!(storefront.recommendations.preferences().is_empty());
        assert_eq!(toasts.try_recv().unwrap(), Toast::error("Invalid email or password"));
    }

    #[tokio::test]
    async fn test_failed_login_while_signed_in_changes_nothing() {
        let (mut storefront, _toasts) = Storefront::bootstrap(StorefrontConfig::for_tests())
            .await
            .unwrap();
        let user = login(&mut storefront, "demo@example.com", "password")
            .await
            .unwrap();
        storefront.recommendations.toggle_genre("Memoir");
        let form = storefront.checkout.form().clone();

        let err = login(&mut storefront, "demo@example.com", "wrong")
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidCredentials);
        assert_eq!(get_session(&storefront), AuthStatus::Authenticated(user));
        assert_eq!(
            storefront.recommendations.preferences(),
            ["Fiction", "Thriller", "Memoir"]
        );
        assert_eq!(storefront.checkout.form(), &form);
    }

    #[tokio::test]
    async fn test_signup_then_logout() {
        let (mut storefront, _toasts) = Storefront::bootstrap(StorefrontConfig::for_tests())
            .await
            .unwrap();

        let user = signup(&mut storefront, "Ada", "ada@example.com", "anything").await;
        assert_eq!(storefront.auth.user(), Some(&user));

        let status = logout(&mut storefront).await;

        assert_eq!(status, AuthStatus::Anonymous);
        assert_eq!(storefront.checkout.step(), CheckoutStep::Shipping);
        assert!(storefront.checkout.form().email.is_empty());
        assert_eq!(
            storefront.db.local_storage().get_item(SESSION_STORAGE_KEY).await.unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn test_update_profile_requires_session() {
        let (mut storefront, _toasts) = Storefront::bootstrap(StorefrontConfig::for_tests())
            .await
            .unwrap();

        let err = update_profile(&mut storefront, "Ada", "ada@example.com")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);

        login(&mut storefront, "demo@example.com", "password").await.unwrap();
        let err = update_profile(&mut storefront, "Ada", "not-an-email")
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let user = update_profile(&mut storefront, "Ada", "ada@example.com")
            .await
            .unwrap();
        assert_eq!(user.id, "1");
        assert_eq!(storefront.auth.user().unwrap().name, "Ada");
    }
}
