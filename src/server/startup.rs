use axum::http::{header, HeaderValue, Method};
use lettre::{
    message::Mailbox, transport::smtp::authentication::Credentials as SmtpCredentials,
    AsyncSmtpTransport, Tokio1Executor,
};
use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use s3::{creds::Credentials as S3Credentials, region::Region};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_http::cors::CorsLayer;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    mail::smtp::SmtpMailer,
    state::{OAuth2Client, OAuthProvider},
    storage::bucket::S3ImageStore,
};

/// Days of inactivity after which a session expires.
const SESSION_INACTIVITY_DAYS: i64 = 7;

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session store on the application database and the session layer using it.
///
/// The store's table is created when missing. Sessions expire after seven days without
/// a request.
///
/// # Returns
/// - `Ok((layer, store))` - Session layer for the router, store for the cleanup job
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<(SessionManagerLayer<SqliteStore>, SqliteStore), AppError> {
    let pool = db.get_sqlite_connection_pool().clone();

    let store = SqliteStore::new(pool);
    store.migrate().await?;

    let layer = SessionManagerLayer::new(store.clone())
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(SESSION_INACTIVITY_DAYS)));

    Ok((layer, store))
}

/// HTTP client for the OAuth provider.
///
/// Redirects are disabled so a token request cannot be forwarded to another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the OAuth2 client from the configured credentials and endpoints.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Client with authorization, token and redirect URLs set
/// - `Err(ConfigError::InvalidValue)` - One of the URLs does not parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.oauth_auth_url.clone())
        .map_err(|e| invalid_value("OAUTH_AUTH_URL", e))?;
    let token_url = TokenUrl::new(config.oauth_token_url.clone())
        .map_err(|e| invalid_value("OAUTH_TOKEN_URL", e))?;
    let redirect_url = RedirectUrl::new(config.oauth_redirect_url.clone())
        .map_err(|e| invalid_value("OAUTH_REDIRECT_URL", e))?;

    let client = BasicClient::new(ClientId::new(config.oauth_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.oauth_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}

pub fn oauth_provider(config: &Config) -> OAuthProvider {
    OAuthProvider {
        name: config.oauth_provider.clone(),
        userinfo_url: config.oauth_userinfo_url.clone(),
        scopes: config.oauth_scopes.clone(),
    }
}

/// Image store on the configured S3 endpoint.
///
/// Nothing is contacted here. Buckets are checked and created on first upload.
pub fn setup_image_store(config: &Config) -> Result<S3ImageStore, AppError> {
    let region = Region::Custom {
        region: config.s3_region.clone(),
        endpoint: config.s3_endpoint.clone(),
    };
    let credentials = S3Credentials::new(
        Some(&config.s3_access_key),
        Some(&config.s3_secret_key),
        None,
        None,
        None,
    )
    .map_err(|e| invalid_value("S3_ACCESS_KEY", e))?;

    Ok(S3ImageStore::new(
        region,
        credentials,
        &config.s3_public_url,
        config.s3_avatar_bucket.clone(),
        config.s3_favicon_bucket.clone(),
    ))
}

/// SMTP mailer sending as `MAIL_FROM`.
///
/// The connection upgrades with STARTTLS unless `SMTP_STARTTLS=false`. Credentials are
/// only sent when both username and password are set.
pub fn setup_mailer(config: &Config) -> Result<SmtpMailer, AppError> {
    let from: Mailbox = config
        .mail_from
        .parse()
        .map_err(|e| invalid_value("MAIL_FROM", e))?;

    let builder = if config.smtp_starttls {
        AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)
            .map_err(|e| invalid_value("SMTP_HOST", e))?
    } else {
        AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
    };
    let mut builder = builder.port(config.smtp_port);

    if let (Some(username), Some(password)) = (&config.smtp_username, &config.smtp_password) {
        builder = builder.credentials(SmtpCredentials::new(username.clone(), password.clone()));
    }

    Ok(SmtpMailer::new(builder.build(), from))
}

/// Allows the frontend at `APP_URL` to call the API with its session cookie.
pub fn setup_cors(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = HeaderValue::from_str(config.app_url.trim_end_matches('/'))
        .map_err(|e| invalid_value("APP_URL", e))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE]))
}

fn invalid_value(name: &str, err: impl std::fmt::Display) -> ConfigError {
    ConfigError::InvalidValue {
        name: name.to_string(),
        reason: err.to_string(),
    }
}
