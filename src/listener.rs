//! Update listeners: an axum webhook, or long polling when explicitly
//! enabled.

use std::net::SocketAddr;

use anyhow::{Context, Error};
use rand::distributions::Alphanumeric;
use rand::Rng;
use teloxide::prelude::*;
use teloxide::update_listeners::webhooks;
use url::Url;

use crate::{config::Config, types::TeloxideDispatcher};

const RANDOM_TOKEN_LEN: usize = 32;

/// Everything the webhook listener needs, resolved from [`Config`].
#[derive(Debug, Clone)]
pub(crate) struct WebhookSettings {
    pub address: SocketAddr,
    pub url: Url,
    pub secret_token: String,
}

impl WebhookSettings {
    /// Returns `None` when long polling is enabled. Missing path segment
    /// and secret are replaced with random ones.
    pub(crate) fn from_config(config: &Config) -> Result<Option<Self>, Error> {
        if config.long_polling {
            return Ok(None);
        }
        let base = match (&config.webhook_url, config.webhook_base_url()) {
            (None, _) => bail!("No webhook URL is configured"),
            (Some(_), Some(base)) => base,
            (Some(url), None) => bail!("Invalid webhook URL: {}", url),
        };

        let segment = config
            .webhook_path
            .clone()
            .unwrap_or_else(|| random_token(RANDOM_TOKEN_LEN));
        let secret_token = config
            .webhook_secret
            .clone()
            .unwrap_or_else(|| random_token(RANDOM_TOKEN_LEN));

        Ok(Some(Self {
            address: config.listen_socket(),
            url: webhook_endpoint(&base, &segment)?,
            secret_token,
        }))
    }
}

/// Appends `segment` to the path of `base`, keeping whatever path the base
/// already has.
pub(crate) fn webhook_endpoint(base: &Url, segment: &str) -> Result<Url, Error> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base.set_query(None);
    base.set_fragment(None);
    base.join(segment)
        .with_context(|| format!("Cannot append {:?} to {}", segment, base))
}

pub(crate) fn random_token(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Feeds updates into `dispatcher` until the process is asked to stop.
pub(crate) async fn serve(
    bot: Bot,
    mut dispatcher: TeloxideDispatcher,
    config: &Config,
) -> Result<(), Error> {
    let settings = match WebhookSettings::from_config(config)? {
        Some(settings) => settings,
        None => {
            info!("Receiving updates by long polling");
            dispatcher.dispatch().await;
            return Ok(());
        }
    };

    info!(
        "Listening for webhook updates on {} (path {})",
        settings.address,
        settings.url.path()
    );
    let options = webhooks::Options::new(settings.address, settings.url)
        .secret_token(settings.secret_token);
    let listener = webhooks::axum(bot, options)
        .await
        .context("Failed to set up the webhook")?;

    dispatcher
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;
    Ok(())
}
