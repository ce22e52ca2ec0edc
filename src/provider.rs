use std::time::Duration;

use log::{debug, info};
use reqwest::Client;
use url::Url;

use crate::errors::EmbedError;
use crate::types::{EmbedContentBody, Exchange, Model};

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub struct GeminiProvider {
    pub url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl GeminiProvider {
    pub fn new(url: Option<String>, api_key: String, timeout: Duration) -> Self {
        let final_url = match url {
            Some(url) => url,
            None => GEMINI_BASE_URL.to_string(),
        };
        GeminiProvider {
            url: final_url,
            api_key,
            timeout,
        }
    }

    // {base}/models/{model}:embedContent?key={api_key}
    fn embed_url(&self, model: &Model) -> Result<Url, EmbedError> {
        let mut embed_url = Url::parse(&format!(
            "{}/{}:embedContent",
            self.url.trim_end_matches('/'),
            model.resource_name()
        ))?;
        embed_url
            .query_pairs_mut()
            .append_pair("key", &self.api_key);
        Ok(embed_url)
    }

    /// Send one embedContent request and report the raw outcome.
    ///
    /// A completed exchange is `Ok` whatever the status code; only transport
    /// failures (dns, connect, timeout, tls, malformed url) are `Err`.
    pub async fn request_embedding(
        &self,
        model: &Model,
        text: &str,
    ) -> Result<Exchange, EmbedError> {
        let client = Client::new();

        let payload = EmbedContentBody::new(model, text);
        let payload_val = serde_json::to_value(payload)?;
        let embed_url = self.embed_url(model)?;

        // key travels as a query parameter, keep it out of the logs
        debug!("POST {}/{}:embedContent", self.url, model.resource_name());
        let response = client
            .post(embed_url)
            .timeout(self.timeout)
            .header("Content-Type", "application/json")
            .json(&payload_val)
            .send()
            .await?;

        let status_code = response.status().as_u16();
        let body = response.text().await?;
        info!("embedContent exchange completed with status {status_code}");
        Ok(Exchange { status_code, body })
    }
}
