use dioxus_logger::tracing;
use oauth2::{AuthorizationCode, CsrfToken, Scope, TokenResponse};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use url::Url;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::{CreateUserParams, OAuthIdentity, UpdateUserParams, User},
    state::{OAuth2Client, OAuthProvider},
    util::validate::normalize_email,
};

/// Sent with every provider request, some providers reject anonymous clients.
const USER_AGENT: &str = "taskboard";

/// Account data read from the provider's user info endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderProfile {
    pub subject: String,
    pub email: String,
    pub username: String,
    pub avatar_url: Option<String>,
}

/// OAuth2 authorization code login.
pub struct OAuthService<'a> {
    db: &'a DatabaseConnection,
    http_client: &'a reqwest::Client,
    oauth_client: &'a OAuth2Client,
    provider: &'a OAuthProvider,
}

impl<'a> OAuthService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        http_client: &'a reqwest::Client,
        oauth_client: &'a OAuth2Client,
        provider: &'a OAuthProvider,
    ) -> Self {
        Self {
            db,
            http_client,
            oauth_client,
            provider,
        }
    }

    /// Builds the provider's authorization URL with a fresh CSRF state.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let mut request = self.oauth_client.authorize_url(CsrfToken::new_random);
        for scope in &self.provider.scopes {
            request = request.add_scope(Scope::new(scope.clone()));
        }

        request.url()
    }

    /// Exchanges the authorization code and logs the matching account in.
    ///
    /// Accounts are matched by email. An existing account gets the provider identity
    /// linked, otherwise a new account without password is created.
    ///
    /// # Returns
    /// - `Ok(User)` - Account to log in
    /// - `Err(AuthError::OAuthExchange)` - Code exchange failed
    /// - `Err(AuthError::OAuthMissingEmail)` - Provider shared no email
    /// - `Err(AppError::ReqwestErr)` - User info request failed
    pub async fn callback(&self, authorization_code: String) -> Result<User, AppError> {
        let token = self
            .oauth_client
            .exchange_code(AuthorizationCode::new(authorization_code))
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::OAuthExchange(e.to_string()))?;

        let user_info = self
            .http_client
            .get(&self.provider.userinfo_url)
            .bearer_auth(token.access_token().secret())
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        let profile = parse_profile(&user_info)?;
        let identity = OAuthIdentity {
            provider: self.provider.name.clone(),
            subject: profile.subject.clone(),
        };

        let user_repo = UserRepository::new(self.db);

        if let Some(existing) = user_repo.find_by_email(&profile.email).await? {
            let already_linked = existing.oauth_provider.as_deref() == Some(&identity.provider)
                && existing.oauth_subject.as_deref() == Some(&identity.subject);
            if already_linked {
                return Ok(existing);
            }

            tracing::info!(
                "Linking {} account {} to user {}",
                identity.provider,
                identity.subject,
                existing.id
            );
            return Ok(user_repo.link_oauth(existing.id, identity).await?);
        }

        let user = user_repo
            .create(CreateUserParams {
                username: profile.username,
                email: profile.email,
                credentials: None,
                oauth: Some(identity),
            })
            .await?;
        tracing::info!("Created user {} from {} login", user.id, self.provider.name);

        let Some(avatar_url) = profile.avatar_url else {
            return Ok(user);
        };

        let user_id = user.id;
        let updated = user_repo
            .update(UpdateUserParams {
                id: user_id,
                avatar_url: Some(avatar_url),
                ..Default::default()
            })
            .await?;

        Ok(updated.unwrap_or(user))
    }
}

/// Reads the account fields out of a user info response.
///
/// `id` may be a number (GitHub) or a string (`sub` in OpenID Connect). The username falls
/// back from `login` to `name` to the local part of the email.
pub fn parse_profile(user_info: &Value) -> Result<ProviderProfile, AppError> {
    let subject = match user_info.get("id").or_else(|| user_info.get("sub")) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => return Err(InternalError::MissingUserInfoField("id").into()),
    };

    let email = match user_info.get("email").and_then(Value::as_str) {
        Some(email) => normalize_email(email.to_string())
            .map_err(|_| AuthError::OAuthMissingEmail)?,
        None => return Err(AuthError::OAuthMissingEmail.into()),
    };

    let username = ["login", "name"]
        .iter()
        .filter_map(|key| user_info.get(*key).and_then(Value::as_str))
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());

    let avatar_url = ["avatar_url", "picture"]
        .iter()
        .filter_map(|key| user_info.get(*key).and_then(Value::as_str))
        .find(|value| !value.is_empty())
        .map(str::to_string);

    Ok(ProviderProfile {
        subject,
        email,
        username,
        avatar_url,
    })
}
