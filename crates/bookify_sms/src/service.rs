// --- File: crates/bookify_sms/src/service.rs ---
use bookify_common::services::{BoxFuture, NotificationResult, NotificationService};
use bookify_config::AppConfig;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info};

/// SMS-specific error types.
#[derive(Error, Debug)]
pub enum SmsError {
    /// Error occurred during the provider API request
    #[error("SMS API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the provider API
    #[error("SMS API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Missing or incomplete SMS configuration
    #[error("SMS configuration missing or incomplete")]
    ConfigError,

    /// SMS sending disabled via runtime config
    #[error("SMS sending is disabled")]
    Disabled,
}

/// SMS notification service over a Twilio-style Messages API.
///
/// Delivery is best-effort with a bounded timeout and no retry; the
/// booking workflow discards the result after logging it.
pub struct SmsNotificationService {
    config: Arc<AppConfig>,
    client: Client,
}

const SEND_TIMEOUT: Duration = Duration::from_secs(10);

impl SmsNotificationService {
    /// Create a new SMS notification service.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let client = Client::builder()
            .timeout(SEND_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { config, client }
    }
}

impl NotificationService for SmsNotificationService {
    type Error = SmsError;

    fn send_sms(&self, to: &str, body: &str) -> BoxFuture<'_, NotificationResult, Self::Error> {
        let to = to.to_string();
        let body = body.to_string();

        Box::pin(async move {
            if !self.config.use_sms {
                return Err(SmsError::Disabled);
            }
            let sms_config = self.config.sms.as_ref().ok_or(SmsError::ConfigError)?;

            // Callers hand over the stored phone number as-is; the
            // dispatcher owns normalisation.
            let to = crate::phone::normalize_phone(&to);

            let url = format!(
                "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
                sms_config.account_sid
            );

            let params = [
                ("To", to.as_str()),
                ("From", sms_config.from_number.as_str()),
                ("Body", body.as_str()),
            ];
            info!("Sending SMS to {}", to);
            let resp = self
                .client
                .post(&url)
                .basic_auth(&sms_config.account_sid, Some(&sms_config.auth_token))
                .form(&params)
                .send()
                .await?;

            let status = resp.status();
            let resp_body = resp.text().await.unwrap_or_default();

            if !status.is_success() {
                // Keep the provider JSON error for debugging
                error!("SMS provider returned {}: {}", status, resp_body);
                return Err(SmsError::ApiError {
                    status_code: status.as_u16(),
                    message: resp_body,
                });
            }

            let sid = serde_json::from_str::<serde_json::Value>(&resp_body)
                .ok()
                .and_then(|v| v.get("sid").and_then(|s| s.as_str()).map(str::to_string))
                .unwrap_or_default();

            info!("SMS sent to {}", to);
            Ok(NotificationResult {
                id: sid,
                status: "sent".to_string(),
            })
        })
    }
}
