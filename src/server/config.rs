use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_AUTH_URL: &str = "https://github.com/login/oauth/authorize";
const DEFAULT_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
const DEFAULT_USERINFO_URL: &str = "https://api.github.com/user";
const DEFAULT_OAUTH_PROVIDER: &str = "github";
const DEFAULT_OAUTH_SCOPES: &str = "read:user user:email";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_MAINTENANCE_CRON: &str = "0 */5 * * * *";
const DEFAULT_S3_REGION: &str = "us-east-1";
const DEFAULT_AVATAR_BUCKET: &str = "user-profile-photo";
const DEFAULT_FAVICON_BUCKET: &str = "workspaces-photo";
const DEFAULT_SMTP_PORT: &str = "587";

pub struct Config {
    pub database_url: String,

    pub oauth_client_id: String,
    pub oauth_client_secret: String,
    pub oauth_redirect_url: String,

    pub oauth_provider: String,
    pub oauth_auth_url: String,
    pub oauth_token_url: String,
    pub oauth_userinfo_url: String,
    /// Space separated scopes requested at the provider.
    pub oauth_scopes: Vec<String>,

    /// Frontend origin, allowed by CORS and used as the post-login redirect.
    pub app_url: String,
    pub bind_address: String,
    /// Cron schedule, with seconds, of the session and reset code purge.
    pub maintenance_cron: String,

    /// S3 compatible endpoint, such as a MinIO server.
    pub s3_endpoint: String,
    pub s3_region: String,
    pub s3_access_key: String,
    pub s3_secret_key: String,
    /// Base URL clients fetch images from. Defaults to the endpoint.
    pub s3_public_url: String,
    pub s3_avatar_bucket: String,
    pub s3_favicon_bucket: String,

    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    /// Upgrades the connection with STARTTLS. Disable only for a local relay.
    pub smtp_starttls: bool,
    /// Sender of outgoing mail, such as `Taskboard <noreply@example.com>`.
    pub mail_from: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let s3_endpoint = required("S3_ENDPOINT")?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            oauth_client_id: required("OAUTH_CLIENT_ID")?,
            oauth_client_secret: required("OAUTH_CLIENT_SECRET")?,
            oauth_redirect_url: required("OAUTH_REDIRECT_URL")?,
            oauth_provider: optional("OAUTH_PROVIDER", DEFAULT_OAUTH_PROVIDER),
            oauth_auth_url: optional("OAUTH_AUTH_URL", DEFAULT_AUTH_URL),
            oauth_token_url: optional("OAUTH_TOKEN_URL", DEFAULT_TOKEN_URL),
            oauth_userinfo_url: optional("OAUTH_USERINFO_URL", DEFAULT_USERINFO_URL),
            oauth_scopes: optional("OAUTH_SCOPES", DEFAULT_OAUTH_SCOPES)
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            app_url: required("APP_URL")?,
            bind_address: optional("BIND_ADDRESS", DEFAULT_BIND_ADDRESS),
            maintenance_cron: optional("MAINTENANCE_CRON", DEFAULT_MAINTENANCE_CRON),
            s3_public_url: optional("S3_PUBLIC_URL", &s3_endpoint),
            s3_endpoint,
            s3_region: optional("S3_REGION", DEFAULT_S3_REGION),
            s3_access_key: required("S3_ACCESS_KEY")?,
            s3_secret_key: required("S3_SECRET_KEY")?,
            s3_avatar_bucket: optional("S3_AVATAR_BUCKET", DEFAULT_AVATAR_BUCKET),
            s3_favicon_bucket: optional("S3_FAVICON_BUCKET", DEFAULT_FAVICON_BUCKET),
            smtp_host: required("SMTP_HOST")?,
            smtp_port: parse_port(&optional("SMTP_PORT", DEFAULT_SMTP_PORT))?,
            smtp_username: std::env::var("SMTP_USERNAME").ok(),
            smtp_password: std::env::var("SMTP_PASSWORD").ok(),
            smtp_starttls: optional("SMTP_STARTTLS", "true") != "false",
            mail_from: required("MAIL_FROM")?,
        })
    }
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value.parse().map_err(|e: std::num::ParseIntError| ConfigError::InvalidValue {
        name: "SMTP_PORT".to_string(),
        reason: e.to_string(),
    })
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}
