//! Client for the upstream workflow gateway.
//!
//! One method per webhook operation. Callers that need the degrade-to-empty
//! policy apply it themselves; this client reports failures honestly so the
//! conversion sites can log them.

use std::time::Duration;

use reqwest::multipart;
use serde_json::Value;

use crate::config::Config;
use crate::error::{Error, Result};

const CHAT_PATH: &str = "/webhook/chat";
const PRACTITIONER_PATH: &str = "/webhook/practitioner";
const REPORT_PATH: &str = "/webhook/report";
const HEALTH_PATH: &str = "/webhook-test/health";
const ASTRO_PATH: &str = "/webhook-test/astro";
const REPORT_FILE_PATH: &str = "/webhook-test/report";

#[derive(Clone)]
pub struct Gateway {
    client: reqwest::Client,
    base_url: String,
}

impl Gateway {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.gateway_base_url.clone(), config.gateway_timeout)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Chat reply. Returns the upstream body verbatim; unlike the dashboard
    /// operations, failure here is surfaced so the UI can show a distinct
    /// error message.
    pub async fn chat(&self, body: &Value) -> Result<String> {
        let response = self.client.post(self.url(CHAT_PATH)).json(body).send().await?;
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(text)
    }

    /// Health probe.
    pub async fn health(&self) -> Result<Value> {
        self.get_json(HEALTH_PATH).await
    }

    /// Practitioner directory.
    pub async fn practitioner(&self) -> Result<Value> {
        self.get_json(PRACTITIONER_PATH).await
    }

    /// Report analysis over a JSON context (identity plus current document).
    pub async fn report(&self, body: &Value) -> Result<Value> {
        self.post_json(REPORT_PATH, body).await
    }

    /// Astrology summary consumed by the session bootstrap.
    pub async fn astro_summary(&self) -> Result<Value> {
        self.get_json(ASTRO_PATH).await
    }

    /// Astrology onboarding submission.
    pub async fn astro_onboarding(&self, payload: &Value) -> Result<Value> {
        self.post_json(ASTRO_PATH, payload).await
    }

    /// Report-file analysis: multipart upload straight to the gateway.
    pub async fn upload_report(&self, file_name: &str, bytes: Vec<u8>) -> Result<Value> {
        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part("report_file", part);

        let response = self
            .client
            .post(self.url(REPORT_FILE_PATH))
            .multipart(form)
            .send()
            .await?;
        Self::json_body(response).await
    }

    async fn get_json(&self, path: &str) -> Result<Value> {
        let response = self
            .client
            .get(self.url(path))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        Self::json_body(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value> {
        let response = self
            .client
            .post(self.url(path))
            .header(reqwest::header::ACCEPT, "application/json")
            .json(body)
            .send()
            .await?;
        Self::json_body(response).await
    }

    async fn json_body(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(serde_json::from_str(&text)?)
    }
}
