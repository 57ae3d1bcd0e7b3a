//! Configuration-related types.
//!
//! The configuration can be represented in and deserialized from JSON,
//! here is an example:
//!
//! ```json
//! {
//!   "botToken": "8888888888:XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX",
//!   "listenAddress": "0.0.0.0",
//!   "port": 8000,
//!   "webhookURL": "https://bot.example.com/telegram/"
//! }
//! ```
//!
//! Every field can also be supplied through the environment, which takes
//! precedence over the file:
//!
//! | JSON key        | Environment variable  |
//! |-----------------|-----------------------|
//! | `botToken`      | `TELEGRAM_BOT_TOKEN`  |
//! | `listenAddress` | `LISTEN_ADDRESS`      |
//! | `port`          | `PORT`                |
//! | `webhookURL`    | `WEBHOOK_URL`         |
//! | `webhookPath`   | `WEBHOOK_PATH`        |
//! | `webhookSecret` | `WEBHOOK_SECRET`      |
//! | `longPolling`   | `LONG_POLLING`        |
//!
//! See [`Config`] for more detailed descriptions.

use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Error};
use paste::paste;
use serde::Deserialize;
use url::Url;

/// A thread-safe reference-counting object that represents
/// a [`Config`] instance.
#[derive(Debug, Clone)]
pub struct SharedConfig {
    config: Arc<Config>,
}

impl SharedConfig {
    /// Constructs a new `SharedConfig`.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl Deref for SharedConfig {
    type Target = Config;

    fn deref(&self) -> &Self::Target {
        self.config.as_ref()
    }
}

/// Top-level config type for the bot.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// The token of your Telegram bot. Required.
    /// JSON key: `botToken`
    #[serde(default, rename = "botToken")]
    pub telegram_bot_token: String,

    /// The address the webhook server binds to.
    /// Value is default to `0.0.0.0`.
    /// JSON key: `listenAddress`
    #[serde(default = "default_listen_address", rename = "listenAddress")]
    pub listen_address: IpAddr,

    /// The port the webhook server listens on.
    /// Value is default to `8000`.
    /// JSON key: `port`
    #[serde(default = "default_port")]
    pub port: u16,

    /// The publicly reachable base URL that Telegram delivers updates to.
    /// Required unless [`Config::long_polling`] is set.
    /// JSON key: `webhookURL`
    #[serde(default, rename = "webhookURL")]
    pub webhook_url: Option<String>,

    /// The path segment appended to [`Config::webhook_url`]. A random
    /// segment is generated on every start when absent.
    /// JSON key: `webhookPath`
    #[serde(default, rename = "webhookPath")]
    pub webhook_path: Option<String>,

    /// The secret Telegram sends back in the `X-Telegram-Bot-Api-Secret-Token`
    /// header. A random secret is generated on every start when absent.
    /// JSON key: `webhookSecret`
    #[serde(default, rename = "webhookSecret")]
    pub webhook_secret: Option<String>,

    /// Receive updates by long polling instead of a webhook. Nothing
    /// listens on [`Config::port`] in this mode. Value is default to `false`.
    /// JSON key: `longPolling`
    #[serde(default, rename = "longPolling")]
    pub long_polling: bool,
}

macro_rules! define_defaults {
    ($($name:ident: $ty:ty = $default:expr,)*) => {
        paste! {
            $(
                fn [<default_ $name>]() -> $ty {
                    $default
                }
            )*
        }
    };
}

define_defaults! {
    listen_address: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED),
    port: u16 = 8000,
}

impl Config {
    /// Builds a validated config from an optional JSON document and an
    /// environment lookup function. Environment values win over the JSON
    /// document, and empty values are treated as absent.
    pub fn from_sources<F>(json: Option<&str>, env: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Config =
            serde_json::from_str(json.unwrap_or("{}")).context("Malformed config file")?;
        let lookup = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        if let Some(token) = lookup("TELEGRAM_BOT_TOKEN") {
            config.telegram_bot_token = token;
        }
        if let Some(addr) = lookup("LISTEN_ADDRESS") {
            config.listen_address = addr
                .trim()
                .parse()
                .with_context(|| format!("Invalid LISTEN_ADDRESS: {}", addr))?;
        }
        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT: {}", port))?;
        }
        if let Some(url) = lookup("WEBHOOK_URL") {
            config.webhook_url = Some(url);
        }
        if let Some(path) = lookup("WEBHOOK_PATH") {
            config.webhook_path = Some(path);
        }
        if let Some(secret) = lookup("WEBHOOK_SECRET") {
            config.webhook_secret = Some(secret);
        }
        if let Some(value) = lookup("LONG_POLLING") {
            config.long_polling = match value.trim().to_ascii_lowercase().as_str() {
                "yes" | "on" | "true" | "1" => true,
                "no" | "off" | "false" | "0" => false,
                _ => bail!(
                    "Invalid LONG_POLLING: {}, possible values are \"yes\", \"no\"",
                    value
                ),
            };
        }

        config.validate()?;
        Ok(config)
    }

    /// Loads the config file at `path` (if any) and overlays the process
    /// environment on top of it.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let contents = match path {
            Some(path) => Some(
                fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?,
            ),
            None => None,
        };
        Self::from_sources(contents.as_deref(), |key| std::env::var(key).ok())
    }

    /// The socket address the webhook server binds to.
    pub fn listen_socket(&self) -> SocketAddr {
        SocketAddr::new(self.listen_address, self.port)
    }

    /// The parsed public base URL, if webhook mode is configured.
    pub fn webhook_base_url(&self) -> Option<Url> {
        self.webhook_url
            .as_deref()
            .and_then(|url| Url::parse(url.trim()).ok())
    }

    fn validate(&mut self) -> Result<(), Error> {
        self.telegram_bot_token = self.telegram_bot_token.trim().to_owned();
        if self.telegram_bot_token.is_empty() {
            bail!("No TELEGRAM_BOT_TOKEN found in environment variables or config file");
        }

        match &self.webhook_url {
            None if !self.long_polling => {
                bail!(
                    "No WEBHOOK_URL found in environment variables or config file, \
                     set LONG_POLLING to receive updates by polling instead"
                );
            }
            None => {}
            Some(url) => {
                let parsed =
                    Url::parse(url.trim()).with_context(|| format!("Invalid webhook URL: {}", url))?;
                if !matches!(parsed.scheme(), "http" | "https") || parsed.cannot_be_a_base() {
                    bail!("Webhook URL must be an absolute http(s) URL: {}", url);
                }
            }
        }

        if let Some(path) = self.webhook_path.take() {
            let segment = path.trim().trim_matches('/').to_owned();
            if matches!(segment.as_str(), "" | "." | "..")
                || segment.contains(&['/', '?', '#'][..])
            {
                bail!("Invalid webhook path segment: {:?}", path);
            }
            self.webhook_path = Some(segment);
        }

        if let Some(secret) = &self.webhook_secret {
            if !is_valid_secret_token(secret) {
                bail!("Webhook secret must be 1-256 characters of A-Z, a-z, 0-9, _ and -");
            }
        }

        Ok(())
    }
}

/// Telegram only accepts `A-Z`, `a-z`, `0-9`, `_` and `-` in secret tokens.
pub(crate) fn is_valid_secret_token(secret: &str) -> bool {
    (1..=256).contains(&secret.len())
        && secret
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_token() {
        let err = Config::from_sources(None, env_of(&[])).unwrap_err();
        assert!(err.to_string().contains("TELEGRAM_BOT_TOKEN"));

        let blank = Config::from_sources(None, env_of(&[("TELEGRAM_BOT_TOKEN", "  ")]));
        assert!(blank.is_err());

        let blank_in_file = Config::from_sources(Some(r#"{"botToken": ""}"#), env_of(&[]));
        assert!(blank_in_file.is_err());
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_sources(
            None,
            env_of(&[
                ("TELEGRAM_BOT_TOKEN", "123:abc"),
                ("WEBHOOK_URL", "https://bot.example.com/"),
            ]),
        )
        .unwrap();
        assert_eq!(config.telegram_bot_token, "123:abc");
        assert_eq!(config.port, 8000);
        assert_eq!(config.listen_socket(), "0.0.0.0:8000".parse().unwrap());
        assert!(config.webhook_path.is_none());
        assert!(config.webhook_secret.is_none());
        assert!(!config.long_polling);
    }

    #[test]
    fn test_missing_webhook_url() {
        let err = Config::from_sources(Some(r#"{"botToken": "t"}"#), env_of(&[])).unwrap_err();
        assert!(err.to_string().contains("WEBHOOK_URL"));

        let err = Config::from_sources(
            None,
            env_of(&[("TELEGRAM_BOT_TOKEN", "t"), ("LONG_POLLING", "no")]),
        );
        assert!(err.is_err());

        let config = Config::from_sources(
            None,
            env_of(&[("TELEGRAM_BOT_TOKEN", "t"), ("LONG_POLLING", "true")]),
        )
        .unwrap();
        assert!(config.long_polling);
        assert!(config.webhook_url.is_none());

        let config =
            Config::from_sources(Some(r#"{"botToken": "t", "longPolling": true}"#), env_of(&[]))
                .unwrap();
        assert!(config.long_polling);

        let invalid = Config::from_sources(
            None,
            env_of(&[("TELEGRAM_BOT_TOKEN", "t"), ("LONG_POLLING", "maybe")]),
        );
        assert!(invalid.is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let json = r#"{
            "botToken": "from-file",
            "port": 9000,
            "listenAddress": "127.0.0.1",
            "webhookURL": "https://file.example.com/"
        }"#;

        let config = Config::from_sources(Some(json), env_of(&[])).unwrap();
        assert_eq!(config.telegram_bot_token, "from-file");
        assert_eq!(config.listen_socket(), "127.0.0.1:9000".parse().unwrap());

        let config = Config::from_sources(
            Some(json),
            env_of(&[
                ("TELEGRAM_BOT_TOKEN", "from-env"),
                ("PORT", "8443"),
                ("WEBHOOK_URL", "https://env.example.com/hook"),
            ]),
        )
        .unwrap();
        assert_eq!(config.telegram_bot_token, "from-env");
        assert_eq!(config.port, 8443);
        assert_eq!(
            config.webhook_base_url().unwrap().as_str(),
            "https://env.example.com/hook"
        );
    }

    #[test]
    fn test_invalid_values() {
        let fails = |pairs: &[(&str, &str)]| {
            let mut all = vec![("TELEGRAM_BOT_TOKEN", "t"), ("LONG_POLLING", "1")];
            all.extend_from_slice(pairs);
            Config::from_sources(None, env_of(&all)).is_err()
        };
        assert!(fails(&[("PORT", "http")]));
        assert!(fails(&[("PORT", "70000")]));
        assert!(fails(&[("LISTEN_ADDRESS", "x")]));
        assert!(fails(&[("WEBHOOK_URL", "not a url")]));
        assert!(fails(&[("WEBHOOK_URL", "ftp://a.b/")]));
        assert!(fails(&[("WEBHOOK_PATH", "/a/b/")]));
        assert!(fails(&[("WEBHOOK_PATH", "///")]));
        assert!(fails(&[("WEBHOOK_PATH", "..")]));
        assert!(fails(&[("WEBHOOK_PATH", "/./")]));
        assert!(fails(&[("WEBHOOK_SECRET", "no spaces")]));
        assert!(!fails(&[]));

        let malformed = Config::from_sources(Some("{not json"), env_of(&[("LONG_POLLING", "1")]));
        assert!(malformed.is_err());
    }

    #[test]
    fn test_webhook_path_is_trimmed() {
        let config = Config::from_sources(
            None,
            env_of(&[
                ("TELEGRAM_BOT_TOKEN", "t"),
                ("WEBHOOK_URL", "https://bot.example.com/"),
                ("WEBHOOK_PATH", "/updates/"),
            ]),
        )
        .unwrap();
        assert_eq!(config.webhook_path.as_deref(), Some("updates"));

        let config = Config::from_sources(
            None,
            env_of(&[
                ("TELEGRAM_BOT_TOKEN", "t"),
                ("WEBHOOK_URL", "https://bot.example.com/"),
                ("WEBHOOK_PATH", "..updates"),
            ]),
        )
        .unwrap();
        assert_eq!(config.webhook_path.as_deref(), Some("..updates"));
    }

    #[test]
    fn test_secret_token_charset() {
        assert!(is_valid_secret_token("abc_DEF-123"));
        assert!(!is_valid_secret_token(""));
        assert!(!is_valid_secret_token("a.b"));
        assert!(!is_valid_secret_token(&"a".repeat(257)));
    }
}
