// SPDX-License-Identifier: MPL-2.0
//! Fire-and-forget delivery of contact requests.
//!
//! [`ExternalNotifier`] posts `{ chat_id, text }` to a fixed endpoint. The
//! returned [`Delivery`] future never fails: transport errors and non-success
//! statuses are logged and dropped, and nobody waits on the outcome before
//! closing the submitting overlay.

use super::message::ContactMessage;
use crate::config::NotifierConfig;
use crate::error::NotifyError;
use futures_util::future::{BoxFuture, FutureExt};
use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;

/// Detached delivery of one outbound message.
pub type Delivery = BoxFuture<'static, ()>;

/// Anything able to carry a contact request out of the process.
pub trait ContactChannel {
    /// Starts delivering `message`. The caller may drop or detach the future;
    /// it resolves once the attempt is over, whatever the outcome.
    fn dispatch(&self, message: ContactMessage) -> Delivery;
}

/// Request body accepted by the messaging endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
struct OutboundPayload {
    chat_id: String,
    text: String,
}

/// HTTP client for the external messaging endpoint.
#[derive(Debug, Clone)]
pub struct ExternalNotifier {
    client: Client,
    endpoint: Url,
    chat_id: String,
}

impl ExternalNotifier {
    /// # Errors
    ///
    /// [`NotifyError::InvalidEndpoint`] if `endpoint` is not an absolute URL.
    pub fn new(endpoint: &str, chat_id: impl Into<String>) -> Result<Self, NotifyError> {
        let endpoint =
            Url::parse(endpoint).map_err(|_| NotifyError::InvalidEndpoint(endpoint.to_string()))?;
        Ok(Self {
            client: Client::new(),
            endpoint,
            chat_id: chat_id.into(),
        })
    }

    /// # Errors
    ///
    /// See [`ExternalNotifier::new`].
    pub fn from_config(config: &NotifierConfig) -> Result<Self, NotifyError> {
        Self::new(&config.endpoint, config.chat_id.clone())
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ContactChannel for ExternalNotifier {
    fn dispatch(&self, message: ContactMessage) -> Delivery {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();
        let payload = OutboundPayload {
            chat_id: self.chat_id.clone(),
            text: message.text(),
        };
        async move { deliver(&client, endpoint, &payload).await }.boxed()
    }
}

/// Outcome of a single POST.
enum Attempt {
    Delivered,
    Rejected(reqwest::StatusCode),
    Failed(reqwest::Error),
}

fn outbound_request(client: &Client, endpoint: Url, payload: &OutboundPayload) -> RequestBuilder {
    client.post(endpoint).json(payload)
}

async fn post_once(client: &Client, endpoint: Url, payload: &OutboundPayload) -> Attempt {
    match outbound_request(client, endpoint, payload).send().await {
        Ok(response) if response.status().is_success() => Attempt::Delivered,
        Ok(response) => Attempt::Rejected(response.status()),
        Err(err) => Attempt::Failed(err),
    }
}

fn log_attempt(attempt: &Attempt, number: u32) {
    match attempt {
        Attempt::Delivered => tracing::info!(attempt = number, "contact request delivered"),
        Attempt::Rejected(status) => {
            tracing::warn!(attempt = number, %status, "contact request rejected by endpoint");
        }
        Attempt::Failed(err) => {
            tracing::warn!(attempt = number, error = %err, "contact request delivery failed");
        }
    }
}

#[cfg(not(feature = "delivery-retry"))]
async fn deliver(client: &Client, endpoint: Url, payload: &OutboundPayload) {
    let attempt = post_once(client, endpoint, payload).await;
    log_attempt(&attempt, 1);
}

#[cfg(feature = "delivery-retry")]
async fn deliver(client: &Client, endpoint: Url, payload: &OutboundPayload) {
    use crate::config::DELIVERY_MAX_ATTEMPTS;
    use std::time::Duration;

    for number in 1..=DELIVERY_MAX_ATTEMPTS {
        let attempt = post_once(client, endpoint.clone(), payload).await;
        log_attempt(&attempt, number);
        if matches!(attempt, Attempt::Delivered) {
            return;
        }
        if number < DELIVERY_MAX_ATTEMPTS {
            tokio::time::sleep(Duration::from_millis(500 * u64::from(number))).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn message() -> ContactMessage {
        let stamp = NaiveDate::from_ymd_opt(2024, 1, 2)
            .and_then(|date| date.and_hms_opt(3, 4, 5))
            .expect("valid timestamp");
        ContactMessage::new("+79000000000", None, stamp).expect("valid phone")
    }

    #[test]
    fn relative_endpoint_is_rejected() {
        let result = ExternalNotifier::new("sendMessage", "1");
        assert!(matches!(result, Err(NotifyError::InvalidEndpoint(_))));
    }

    #[test]
    fn default_config_builds_a_notifier() {
        let notifier =
            ExternalNotifier::from_config(&NotifierConfig::default()).expect("default endpoint parses");
        assert_eq!(notifier.endpoint().scheme(), "https");
    }

    #[test]
    fn request_posts_json_body_with_wire_field_names() {
        let payload = OutboundPayload {
            chat_id: "42".to_string(),
            text: "hello".to_string(),
        };
        let endpoint = Url::parse("https://example.org/sendMessage").expect("valid url");
        let request = outbound_request(&Client::new(), endpoint, &payload)
            .build()
            .expect("request builds");

        assert_eq!(request.method(), reqwest::Method::POST);
        assert_eq!(
            request.headers().get(reqwest::header::CONTENT_TYPE).map(|v| v.as_bytes()),
            Some(b"application/json".as_slice())
        );
        let body = request.body().and_then(reqwest::Body::as_bytes);
        assert_eq!(body, Some(br#"{"chat_id":"42","text":"hello"}"#.as_slice()));
    }

    #[tokio::test]
    async fn unreachable_endpoint_failure_is_swallowed() {
        let notifier =
            ExternalNotifier::new("http://127.0.0.1:9/sendMessage", "1").expect("valid url");
        // Resolves without panicking or surfacing the connection error.
        notifier.dispatch(message()).await;
    }
}
