//! Identity and session endpoints.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::User;

/// Fetch the current identity. A 401 means "no session", not a transport fault.
pub async fn get_me(client: &ApiClient) -> Result<User, ApiError> {
    client.get_json("/users/me").await
}

/// Ask the backend to invalidate the session cookie.
///
/// The backend exposes this as a GET, mirroring the OAuth redirect flow.
pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
    client.get_unit("/auth/logout").await
}

/// URL the browser should navigate to for the Google OAuth flow.
pub fn google_login_url(client: &ApiClient) -> String {
    format!("{}/auth/google", client.base_url())
}
