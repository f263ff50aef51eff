// --- File: crates/services/bookify_backend/src/service_factory.rs ---
//! Service factory implementation.
//!
//! Wires concrete external services into the trait objects the booking
//! handlers consume, based on runtime configuration.

use bookify_common::is_feature_enabled;
use bookify_common::services::{
    BoxFuture, BoxedError, NotificationResult, NotificationService, ServiceFactory,
};
use bookify_config::AppConfig;
use bookify_sms::SmsNotificationService;
use std::sync::Arc;
use tracing::info;

/// Service factory for the backend binary.
///
/// The SMS service is wired only when `use_sms` is set AND the `sms`
/// credentials section is present; otherwise bookings proceed without
/// confirmations (offline/dev mode).
pub struct BookifyServiceFactory {
    /// Kept for future integrations that need configuration access.
    #[allow(dead_code)]
    config: Arc<AppConfig>,
    notification_service: Option<Arc<dyn NotificationService<Error = BoxedError>>>,
}

impl BookifyServiceFactory {
    /// Create a new service factory.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let mut factory = Self {
            config: config.clone(),
            notification_service: None,
        };

        if is_feature_enabled(config.use_sms, config.sms.as_ref()) {
            info!("Initializing SMS notification service...");

            // Wrapper that converts SmsError to BoxedError
            struct BoxedNotificationService {
                inner: SmsNotificationService,
            }

            impl NotificationService for BoxedNotificationService {
                type Error = BoxedError;

                fn send_sms(
                    &self,
                    to: &str,
                    body: &str,
                ) -> BoxFuture<'_, NotificationResult, Self::Error> {
                    let to = to.to_string();
                    let body = body.to_string();
                    let inner = &self.inner;

                    Box::pin(async move {
                        inner
                            .send_sms(&to, &body)
                            .await
                            .map_err(|e| BoxedError(Box::new(e)))
                    })
                }
            }

            let service = SmsNotificationService::new(config.clone());
            factory.notification_service = Some(Arc::new(BoxedNotificationService {
                inner: service,
            }));
            info!("SMS notification service initialized.");
        } else {
            info!("SMS disabled via runtime config; confirmations will not be sent.");
        }

        factory
    }
}

impl ServiceFactory for BookifyServiceFactory {
    fn notification_service(&self) -> Option<Arc<dyn NotificationService<Error = BoxedError>>> {
        self.notification_service.clone()
    }
}
