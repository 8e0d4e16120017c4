//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and cloned into each handler through
//! Axum's state extraction. It holds:
//! - Database connection pool
//! - HTTP client for calls to the OAuth provider
//! - OAuth2 client for the login flow
//! - OAuth provider settings used after the code exchange
//! - Image store and mailer

use oauth2::basic::{BasicErrorResponseType, BasicTokenType};
use oauth2::{
    Client, EmptyExtraTokenFields, EndpointNotSet, EndpointSet, RevocationErrorResponseType,
    StandardErrorResponse, StandardRevocableToken, StandardTokenIntrospectionResponse,
    StandardTokenResponse,
};
use sea_orm::DatabaseConnection;

use crate::server::{mail::smtp::SmtpMailer, storage::bucket::S3ImageStore};

/// OAuth2 client with the authorization and token endpoints configured.
pub(crate) type OAuth2Client = Client<
    StandardErrorResponse<BasicErrorResponseType>,
    StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardTokenIntrospectionResponse<EmptyExtraTokenFields, BasicTokenType>,
    StandardRevocableToken,
    StandardErrorResponse<RevocationErrorResponseType>,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

/// Provider specific settings of the OAuth login.
#[derive(Clone, Debug)]
pub struct OAuthProvider {
    /// Name stored with linked accounts, such as `github`.
    pub name: String,
    /// Endpoint returning the profile of the token's owner.
    pub userinfo_url: String,
    pub scopes: Vec<String>,
}

/// Shared resources of the server.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and
/// `reqwest::Client` wraps an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// HTTP client for the OAuth provider. Redirects are disabled.
    pub http_client: reqwest::Client,

    pub oauth_client: OAuth2Client,

    pub oauth_provider: OAuthProvider,

    /// Frontend URL the OAuth callback redirects to after login.
    pub app_url: String,

    pub image_store: S3ImageStore,

    pub mailer: SmtpMailer,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        oauth_client: OAuth2Client,
        oauth_provider: OAuthProvider,
        app_url: String,
        image_store: S3ImageStore,
        mailer: SmtpMailer,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            oauth_provider,
            app_url,
            image_store,
            mailer,
        }
    }
}
