//! Authentication endpoints.

use tracing::{debug, instrument};

use portfolify_core::models::{ProfilePatch, User};
use portfolify_core::{AccessToken, Credentials, Result};

use crate::http::HttpClient;

/// Endpoint for account creation.
const SIGNUP: &str = "/auth/signup";

/// Endpoint for email/password login.
const LOGIN: &str = "/auth/login";

/// Endpoint for Google ID token login.
const GOOGLE_LOGIN: &str = "/auth/google";

/// Endpoint for the current user.
const ME: &str = "/auth/me";

/// Request body for signup.
#[derive(serde::Serialize)]
struct SignupRequest<'a> {
    email: &'a str,
    full_name: &'a str,
    password: &'a str,
}

/// Request body for login.
#[derive(serde::Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Request body for Google login.
#[derive(serde::Serialize)]
struct GoogleLoginRequest<'a> {
    token: &'a str,
}

/// Response from the token-issuing endpoints.
#[derive(serde::Deserialize)]
struct TokenResponse {
    access_token: String,
    user: User,
}

impl TokenResponse {
    fn into_grant(self) -> AuthGrant {
        AuthGrant {
            token: AccessToken::new(self.access_token),
            user: self.user,
        }
    }
}

/// A successful authentication: the issued token and the signed-in user.
#[derive(Debug, Clone)]
pub struct AuthGrant {
    /// The bearer token to persist.
    pub token: AccessToken,
    /// The authenticated user.
    pub user: User,
}

/// Authentication and account operations.
#[derive(Debug, Clone)]
pub struct AuthApi {
    http: HttpClient,
}

impl AuthApi {
    pub(crate) fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Create an account and sign in.
    #[instrument(skip(self, password))]
    pub async fn signup(&self, email: &str, full_name: &str, password: &str) -> Result<AuthGrant> {
        debug!(email, "Signing up");

        let request = SignupRequest {
            email,
            full_name,
            password,
        };

        let response: TokenResponse = self.http.post(SIGNUP, &request).await?;
        Ok(response.into_grant())
    }

    /// Sign in with email and password.
    #[instrument(skip(self, credentials))]
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthGrant> {
        debug!(email = credentials.email(), "Logging in");

        let request = LoginRequest {
            email: credentials.email(),
            password: credentials.password(),
        };

        let response: TokenResponse = self.http.post(LOGIN, &request).await?;
        Ok(response.into_grant())
    }

    /// Sign in with a Google ID token.
    #[instrument(skip(self, id_token))]
    pub async fn login_with_google(&self, id_token: &str) -> Result<AuthGrant> {
        debug!("Logging in with Google");

        let request = GoogleLoginRequest { token: id_token };

        let response: TokenResponse = self.http.post(GOOGLE_LOGIN, &request).await?;
        Ok(response.into_grant())
    }

    /// Fetch the user the stored token belongs to.
    #[instrument(skip(self))]
    pub async fn me(&self) -> Result<User> {
        self.http.get(ME).await
    }

    /// Update the signed-in user's profile.
    #[instrument(skip(self, patch))]
    pub async fn update_profile(&self, patch: &ProfilePatch) -> Result<User> {
        debug!("Updating profile");
        self.http.patch(ME, patch).await
    }
}
