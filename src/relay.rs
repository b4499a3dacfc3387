use http::StatusCode;
use serde::Serialize;
use std::sync::LazyLock;
use thiserror::Error;

use crate::contact::ContactFields;

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

static RELAY: LazyLock<Result<EmailRelay, RelayError>> =
    LazyLock::new(|| RelayConfig::from_env().map(EmailRelay::new));

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("missing relay setting {0}")]
    MissingConfig(&'static str),
    #[error("relay is not configured: {0}")]
    Unconfigured(String),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("relay rejected message with status {status}: {body}")]
    Rejected { status: StatusCode, body: String },
}

/// Opaque identifiers for the hosted email template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, RelayError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, RelayError> {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(RelayError::MissingConfig(key))
        };
        Ok(Self {
            endpoint: lookup("EMAILJS_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            service_id: required("EMAILJS_SERVICE_ID")?,
            template_id: required("EMAILJS_TEMPLATE_ID")?,
            public_key: required("EMAILJS_PUBLIC_KEY")?,
        })
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactFields,
}

#[derive(Debug, Clone)]
pub struct EmailRelay {
    config: RelayConfig,
    client: reqwest::Client,
}

impl EmailRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// One request, no retry.
    pub async fn send(&self, fields: &ContactFields) -> Result<(), RelayError> {
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: fields,
        };
        tracing::debug!(endpoint = %self.config.endpoint, "relaying contact message");
        let resp = self
            .client
            .post(&self.config.endpoint)
            .json(&body)
            .send()
            .await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!(error = %e, "couldn't read relay response body");
                String::new()
            }
        };
        tracing::warn!(%status, %body, "relay rejected contact message");
        Err(RelayError::Rejected { status, body })
    }
}

/// Whether the process-wide relay picked up its settings.
pub fn is_configured() -> bool {
    RELAY.is_ok()
}

pub async fn relay_message(fields: &ContactFields) -> Result<(), RelayError> {
    match &*RELAY {
        Ok(relay) => relay.send(fields).await,
        Err(e) => Err(RelayError::Unconfigured(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(endpoint: String) -> RelayConfig {
        RelayConfig {
            endpoint,
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            public_key: "public_test".to_string(),
        }
    }

    fn fields() -> ContactFields {
        ContactFields {
            from_name: "Ada".to_string(),
            reply_to: "ada@example.com".to_string(),
            subject: "Hi".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_posts_template_params() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1.0/email/send"))
            .and(body_json(serde_json::json!({
                "service_id": "service_test",
                "template_id": "template_test",
                "user_id": "public_test",
                "template_params": {
                    "from_name": "Ada",
                    "reply_to": "ada@example.com",
                    "subject": "Hi",
                    "message": "Hello",
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let relay = EmailRelay::new(config(format!(
            "{}/api/v1.0/email/send",
            mock_server.uri()
        )));
        let res = relay.send(&fields()).await;
        assert!(res.is_ok(), "{res:?}");
    }

    #[tokio::test]
    async fn test_rejected_status_is_an_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("The user_id is invalid"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let relay = EmailRelay::new(config(mock_server.uri()));
        match relay.send(&fields()).await {
            Err(RelayError::Rejected { status, body }) => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(body, "The user_id is invalid");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_rejection_without_body_keeps_status() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&mock_server)
            .await;

        let relay = EmailRelay::new(config(mock_server.uri()));
        match relay.send(&fields()).await {
            Err(RelayError::Rejected { status, body }) => {
                assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(body, "");
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_network_error() {
        let relay = EmailRelay::new(config("http://127.0.0.1:1/send".to_string()));
        let res = relay.send(&fields()).await;
        assert!(matches!(res, Err(RelayError::Network(_))));
    }

    #[test]
    fn test_config_requires_identifiers() {
        let env = HashMap::from([
            ("EMAILJS_SERVICE_ID", "svc"),
            ("EMAILJS_TEMPLATE_ID", "tpl"),
        ]);
        let res = RelayConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()));
        assert!(matches!(
            res,
            Err(RelayError::MissingConfig("EMAILJS_PUBLIC_KEY"))
        ));

        let env = HashMap::from([
            ("EMAILJS_SERVICE_ID", "svc"),
            ("EMAILJS_TEMPLATE_ID", "tpl"),
            ("EMAILJS_PUBLIC_KEY", "key"),
        ]);
        let cfg = RelayConfig::from_lookup(|k| env.get(k).map(|v| v.to_string()))
            .expect("all settings present");
        assert_eq!(cfg.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(cfg.public_key, "key");
    }
}
