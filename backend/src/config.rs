use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

use dotenvy::dotenv;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct WebConfig {
    pub addr: String,
    pub port: u16,
    /// `*` allows any origin.
    pub cors_origin: String,
    /// Directory holding the built SPA; `index.html` answers unknown paths.
    pub static_dir: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0".to_string(),
            port: 5000,
            cors_origin: "*".to_string(),
            static_dir: "frontend/dist".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://portfolio.db".to_string(),
            max_connections: 5,
        }
    }
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_token_minutes")]
    pub expires_minutes: i64,
}

fn default_token_minutes() -> i64 {
    60
}

// Keeps the secret out of logs.
impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expires_minutes", &self.expires_minutes)
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AuthConfig {
    /// When false, `POST /api/auth/register` answers 403.
    pub allow_registration: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            allow_registration: true,
        }
    }
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct ChatConfig {
    pub api_key: Option<String>,
    /// OpenAI-compatible API root; `/chat/completions` is appended.
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    /// Whose portfolio the assistant speaks for.
    pub owner_name: String,
    pub site_title: String,
    pub referer: String,
    pub timeout_secs: u64,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://openrouter.ai/api/v1".to_string(),
            model: "openai/gpt-3.5-turbo".to_string(),
            max_tokens: 500,
            owner_name: "Omkar Patil".to_string(),
            site_title: "Omkar Portfolio".to_string(),
            referer: "http://localhost:5000".to_string(),
            timeout_secs: 30,
        }
    }
}

impl std::fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("owner_name", &self.owner_name)
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct MailConfig {
    pub smtp_host: String,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Where contact messages go; defaults to `username`.
    pub owner_inbox: Option<String>,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: "smtp.gmail.com".to_string(),
            username: None,
            password: None,
            owner_inbox: None,
        }
    }
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("owner_inbox", &self.owner_inbox)
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct RateLimitConfig {
    /// Seconds between replenished requests per client IP.
    pub per_second: u64,
    pub burst_size: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub rate_limit: Option<RateLimitConfig>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, figment::Error> {
        dotenv().ok();

        let config: Self = Self::figment().extract()?;

        let config = config.normalized();
        tracing::info!(
            web = ?config.web,
            chat = ?config.chat,
            mail = ?config.mail,
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Every configuration source, lowest precedence first.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Toml::file("Config.toml")) // For non-sensitive defaults
            .merge(legacy_env())
            .merge(Env::prefixed("APP_").split("__")) // e.g., APP_JWT__SECRET
    }

    /// Trims credentials and treats blank ones as unset.
    pub fn normalized(mut self) -> Self {
        self.chat.api_key = non_blank(self.chat.api_key);
        self.mail.username = non_blank(self.mail.username);
        self.mail.password = non_blank(self.mail.password);
        self.mail.owner_inbox = non_blank(self.mail.owner_inbox).or_else(|| self.mail.username.clone());
        self
    }
}

/// Unprefixed variables used by existing deployments of the site.
fn legacy_env() -> Env {
    Env::raw()
        .only(&[
            "PORT",
            "JWT_SECRET",
            "OPENROUTER_API_KEY",
            "EMAIL_USER",
            "EMAIL_PASS",
        ])
        // Keys arrive in the case they were set in.
        .map(|key| match key.as_str().to_ascii_lowercase().as_str() {
            "port" => "web.port".into(),
            "jwt_secret" => "jwt.secret".into(),
            "openrouter_api_key" => "chat.api_key".into(),
            "email_user" => "mail.username".into(),
            "email_pass" => "mail.password".into(),
            _ => key.into(),
        })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::providers::Serialized;

    #[test]
    fn defaults_fill_everything_but_the_secret() {
        let config: AppConfig = Figment::new()
            .merge(Serialized::default("jwt.secret", "s3cret"))
            .extract()
            .unwrap();

        assert_eq!(config.web.port, 5000);
        assert_eq!(config.jwt.expires_minutes, 60);
        assert!(config.auth.allow_registration);
        assert_eq!(config.chat.model, "openai/gpt-3.5-turbo");
        assert_eq!(config.chat.max_tokens, 500);
        assert!(config.rate_limit.is_none());
    }

    #[test]
    fn missing_secret_is_an_error() {
        let result: Result<AppConfig, _> = Figment::new().extract();
        assert!(result.is_err());
    }

    #[test]
    fn normalization_trims_credentials_and_defaults_the_inbox() {
        let mut config: AppConfig = Figment::new()
            .merge(Serialized::default("jwt.secret", "s3cret"))
            .extract()
            .unwrap();
        config.chat.api_key = Some("   ".to_string());
        config.mail.username = Some(" owner@example.com \n".to_string());

        let config = config.normalized();
        assert!(config.chat.api_key.is_none());
        assert_eq!(config.mail.username.as_deref(), Some("owner@example.com"));
        assert_eq!(config.mail.owner_inbox.as_deref(), Some("owner@example.com"));
    }

    #[test]
    fn unprefixed_variables_fill_their_sections() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("JWT_SECRET", "from-env");
            jail.set_env("PORT", "8080");
            jail.set_env("OPENROUTER_API_KEY", " or-key ");
            jail.set_env("EMAIL_USER", "owner@example.com");
            jail.set_env("EMAIL_PASS", "app-password");

            let config: AppConfig = AppConfig::figment().extract()?;
            let config = config.normalized();

            assert_eq!(config.jwt.secret, "from-env");
            assert_eq!(config.web.port, 8080);
            assert_eq!(config.chat.api_key.as_deref(), Some("or-key"));
            assert_eq!(config.mail.username.as_deref(), Some("owner@example.com"));
            assert_eq!(config.mail.password.as_deref(), Some("app-password"));
            assert_eq!(config.mail.owner_inbox.as_deref(), Some("owner@example.com"));
            Ok(())
        });
    }

    #[test]
    fn prefixed_variables_override_unprefixed_and_toml() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "Config.toml",
                r#"
                [jwt]
                secret = "from-toml"
                expires_minutes = 15

                [chat]
                model = "toml-model"
                "#,
            )?;
            jail.set_env("JWT_SECRET", "from-legacy");
            jail.set_env("APP_JWT__SECRET", "from-app");
            jail.set_env("APP_CHAT__MODEL", "app-model");

            let config: AppConfig = AppConfig::figment().extract()?;

            assert_eq!(config.jwt.secret, "from-app");
            assert_eq!(config.jwt.expires_minutes, 15);
            assert_eq!(config.chat.model, "app-model");
            Ok(())
        });
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let config = JwtConfig {
            secret: "hunter2".to_string(),
            expires_minutes: 5,
        };
        assert!(!format!("{config:?}").contains("hunter2"));
    }
}
