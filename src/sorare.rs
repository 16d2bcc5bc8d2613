use pinboard::Pinboard;
use reqwest::header::HeaderValue;
use serde::Deserialize;
use std::env;
use std::sync::LazyLock;

pub(crate) mod graphql;

pub use graphql::cards::user_cards;

const API_KEY_VARIABLE: &str = "SORARE_API_KEY";
const CONFIG_FILE: &str = "config.json";

pub(crate) struct Authorization {
    pub(crate) bearer_token: HeaderValue,
}

pub(crate) static SORARE_AUTHORIZATION: LazyLock<Pinboard<Authorization>> =
    LazyLock::new(Pinboard::new_empty);

#[derive(Deserialize)]
struct Config {
    api_key: String,
}

/// Resolves the api key and publishes the derived authorization header
/// for the rest of the run. The environment variable takes precedence
/// over the json configuration file.
pub async fn update_bearer_token() -> Result<(), String> {
    let api_key = match env::var(API_KEY_VARIABLE) {
        Ok(it) if !it.trim().is_empty() => it,
        _ => {
            let text = tokio::fs::read_to_string(CONFIG_FILE).await.map_err(|_| {
                format!("{API_KEY_VARIABLE} not set and failed to read {CONFIG_FILE}")
            })?;
            serde_json::from_str::<Config>(&text)
                .map_err(|_| format!("failed to parse {CONFIG_FILE}"))?
                .api_key
        }
    };
    let bearer_token = HeaderValue::try_from(format!("Bearer {api_key}"))
        .map_err(|_| "invalid api key".to_string())?;
    SORARE_AUTHORIZATION.set(Authorization { bearer_token });
    Ok(())
}

#[derive(Deserialize)]
pub struct Card {
    #[serde(rename = "assetId")]
    pub asset_id: String,
    pub slug: String,
    pub name: Option<String>,
    pub position: Option<String>,
    #[serde(rename = "priceEUR")]
    pub price_eur: Option<f64>,
    #[serde(rename = "onSale")]
    pub on_sale: bool,
}
