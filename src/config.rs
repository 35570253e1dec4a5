//! Environment-driven configuration.

use std::path::PathBuf;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Which transports to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelMode {
    /// CLI always; Telegram when a token is configured.
    Auto,
    /// CLI only, even if a token is present.
    Cli,
    /// Telegram only; fails without a token.
    Telegram,
}

/// Bot configuration, read from the environment.
#[derive(Debug)]
pub struct BotConfig {
    pub channel_mode: ChannelMode,
    pub telegram_token: Option<SecretString>,
    /// Telegram usernames or numeric ids; `*` allows everyone.
    pub allowed_users: Vec<String>,
    /// Audit database path; `None` disables the on-disk audit store.
    pub audit_db_path: Option<PathBuf>,
    /// Directory for the rotating file log, if any.
    pub log_dir: Option<PathBuf>,
}

impl BotConfig {
    /// Read configuration from the environment.
    ///
    /// `TELEGRAM_BOT_TOKEN`, `TELEGRAM_ALLOWED_USERS` (comma separated,
    /// default `*`), `FORMULATOR_CHANNEL` (`auto`/`cli`/`telegram`),
    /// `FORMULATOR_AUDIT_DB` (path, or `off`), `FORMULATOR_LOG_DIR`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let telegram_token = match std::env::var("TELEGRAM_BOT_TOKEN") {
            Ok(token) if token.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    key: "TELEGRAM_BOT_TOKEN".into(),
                    message: "token is empty".into(),
                });
            }
            Ok(token) => Some(SecretString::from(token)),
            Err(_) => None,
        };

        let channel_mode = match std::env::var("FORMULATOR_CHANNEL").as_deref() {
            Ok("cli") => ChannelMode::Cli,
            Ok("telegram") => ChannelMode::Telegram,
            Ok("auto") | Err(_) => ChannelMode::Auto,
            Ok(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "FORMULATOR_CHANNEL".into(),
                    message: format!("expected auto, cli or telegram, got {other}"),
                });
            }
        };

        if channel_mode == ChannelMode::Telegram && telegram_token.is_none() {
            return Err(ConfigError::MissingEnvVar("TELEGRAM_BOT_TOKEN".into()));
        }

        let allowed_users = parse_allowed_users(
            &std::env::var("TELEGRAM_ALLOWED_USERS").unwrap_or_else(|_| "*".to_string()),
        );

        let audit_db_path = match std::env::var("FORMULATOR_AUDIT_DB") {
            Ok(v) if v == "off" => None,
            Ok(v) => Some(PathBuf::from(v)),
            Err(_) => Some(PathBuf::from("./data/audit.db")),
        };

        let log_dir = std::env::var("FORMULATOR_LOG_DIR").ok().map(PathBuf::from);

        Ok(Self {
            channel_mode,
            telegram_token,
            allowed_users,
            audit_db_path,
            log_dir,
        })
    }
}

fn parse_allowed_users(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
