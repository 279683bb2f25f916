use serde::Serialize;

use crate::contact::{ContactForm, EmailRelay, RelayConfig, RelayError};

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Body of an EmailJS REST `send` call.
#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a ContactForm,
}

#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    config: RelayConfig,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self { config }
    }

    pub fn from_build_env() -> Result<Self, RelayError> {
        RelayConfig::from_build_env().map(Self::new)
    }

    pub fn request<'a>(&'a self, form: &'a ContactForm) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: form,
        }
    }
}

impl EmailRelay for EmailJsRelay {
    #[cfg(feature = "hydrate")]
    async fn send(&self, form: &ContactForm) -> Result<(), RelayError> {
        use gloo_net::http::Request;

        let resp = Request::post(EMAILJS_SEND_URL)
            .json(&self.request(form))
            .map_err(|e| RelayError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;
        if resp.ok() {
            return Ok(());
        }
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        Err(RelayError::Rejected { status, body })
    }

    #[cfg(not(feature = "hydrate"))]
    async fn send(&self, _form: &ContactForm) -> Result<(), RelayError> {
        Err(RelayError::Transport(
            "relay is only available in the browser".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn relay() -> EmailJsRelay {
        EmailJsRelay::new(RelayConfig {
            service_id: "service_abc".to_string(),
            template_id: "template_def".to_string(),
            public_key: "pk_123".to_string(),
        })
    }

    #[test]
    fn test_request_body_shape() {
        let form = ContactForm {
            name: "Grace".to_string(),
            email: "grace@example.com".to_string(),
            subject: "COBOL".to_string(),
            message: "Found a moth.".to_string(),
        };
        let relay = relay();
        let body = serde_json::to_value(relay.request(&form)).expect("request serializes");
        assert_eq!(
            body,
            json!({
                "service_id": "service_abc",
                "template_id": "template_def",
                "user_id": "pk_123",
                "template_params": {
                    "name": "Grace",
                    "email": "grace@example.com",
                    "subject": "COBOL",
                    "message": "Found a moth.",
                }
            })
        );
    }

    #[cfg(not(feature = "hydrate"))]
    #[tokio::test]
    async fn test_server_side_relay_refuses() {
        let res = relay().send(&ContactForm::default()).await;
        assert!(matches!(res, Err(RelayError::Transport(_))));
    }
}
