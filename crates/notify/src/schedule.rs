use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use orgdesk_onboarding::OrganizationRequest;

use crate::config::AutoReplyConfig;
use crate::template::render;
use crate::transport::OutboundEmail;

/// A confirmation notification, computed but not yet dispatched.
///
/// The host composes this with whatever timed-dispatch facility it has (a job
/// queue, a scheduled task); this crate only says *what* to send and *when*.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledNotification {
    /// Recipient, the request's contact email.
    pub to: String,
    pub subject: String,
    pub body: String,
    /// When the notification should be dispatched.
    pub fire_at: DateTime<Utc>,
}

impl ScheduledNotification {
    /// The outbound email this notification dispatches as.
    pub fn email(&self) -> OutboundEmail {
        OutboundEmail {
            to: self.to.clone(),
            subject: self.subject.clone(),
            body: self.body.clone(),
        }
    }
}

/// Compute the auto-reply for a submitted request, if any.
///
/// Pure function of its three inputs. Returns `None` when auto-reply is
/// disabled; otherwise the rendered message addressed to the request's
/// contact, firing `delay_minutes` after `now`.
pub fn schedule(
    request: &OrganizationRequest,
    config: &AutoReplyConfig,
    now: DateTime<Utc>,
) -> Option<ScheduledNotification> {
    if !config.enabled {
        return None;
    }

    let rendered = render(&config.template, request);

    Some(ScheduledNotification {
        to: request.contact_email().to_string(),
        subject: rendered.subject,
        body: rendered.body,
        fire_at: now + Duration::minutes(config.delay_minutes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use orgdesk_core::{Aggregate, AggregateId};
    use orgdesk_onboarding::{RequestCommand, RequestId, SubmitRequest};

    fn submission_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
    }

    fn acme_request() -> OrganizationRequest {
        let request_id = RequestId::new(AggregateId::new());
        let mut request = OrganizationRequest::empty(request_id);
        let events = request
            .handle(&RequestCommand::SubmitRequest(SubmitRequest {
                request_id,
                organization_name: "Acme".to_string(),
                contact_email: "a@acme.com".to_string(),
                contact_name: "Ada Lovelace".to_string(),
                business_type: "Tech".to_string(),
                country: "NL".to_string(),
                message: None,
                occurred_at: submission_time(),
            }))
            .unwrap();
        request.apply(&events[0]);
        request
    }

    #[test]
    fn disabled_config_schedules_nothing() {
        let config = AutoReplyConfig {
            enabled: false,
            ..AutoReplyConfig::default()
        };
        assert_eq!(schedule(&acme_request(), &config, Utc::now()), None);
    }

    #[test]
    fn default_config_fires_ten_minutes_after_submission() {
        let now = submission_time();
        let notification = schedule(&acme_request(), &AutoReplyConfig::default(), now).unwrap();

        assert_eq!(notification.to, "a@acme.com");
        assert_eq!(notification.fire_at, now + Duration::minutes(10));
        assert!(notification.body.contains("Acme"));
        assert!(notification.body.contains("a@acme.com"));
        assert!(notification.body.contains("2024-01-01"));
    }

    #[test]
    fn delay_follows_the_configured_minutes() {
        let config = AutoReplyConfig {
            delay_minutes: 45,
            ..AutoReplyConfig::default()
        };
        let now = Utc::now();
        let notification = schedule(&acme_request(), &config, now).unwrap();
        assert_eq!(notification.fire_at, now + Duration::minutes(45));
    }

    #[test]
    fn schedule_is_deterministic() {
        let request = acme_request();
        let config = AutoReplyConfig::default();
        let now = submission_time();
        assert_eq!(
            schedule(&request, &config, now),
            schedule(&request, &config, now)
        );
    }

    #[test]
    fn notification_converts_to_an_outbound_email() {
        let notification =
            schedule(&acme_request(), &AutoReplyConfig::default(), submission_time()).unwrap();
        let email = notification.email();
        assert_eq!(email.to, notification.to);
        assert_eq!(email.subject, notification.subject);
        assert_eq!(email.body, notification.body);
    }
}
