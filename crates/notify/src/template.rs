use serde::{Deserialize, Serialize};

use orgdesk_core::ValueObject;
use orgdesk_onboarding::OrganizationRequest;

/// Confirmation message template with substitution tokens.
///
/// Recognized tokens: `{{organizationName}}`, `{{contactEmail}}`,
/// `{{businessType}}`, `{{submissionDate}}`. Anything else in `{{..}}` is
/// carried verbatim: templates are edited by administrators, and a typo in a
/// token must degrade to odd-looking mail, never to a failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageTemplate {
    pub subject: String,
    pub body: String,
}

impl MessageTemplate {
    pub fn new(subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            body: body.into(),
        }
    }
}

impl ValueObject for MessageTemplate {}

/// A rendered confirmation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedMessage {
    pub subject: String,
    pub body: String,
}

impl ValueObject for RenderedMessage {}

/// Render a template against a submitted request.
///
/// Pure function of its inputs: literal substring substitution of the four
/// recognized tokens, no parsing, no failure path. A template without tokens
/// is returned unchanged.
pub fn render(template: &MessageTemplate, request: &OrganizationRequest) -> RenderedMessage {
    RenderedMessage {
        subject: substitute(&template.subject, request),
        body: substitute(&template.body, request),
    }
}

fn substitute(text: &str, request: &OrganizationRequest) -> String {
    text.replace("{{organizationName}}", request.organization_name())
        .replace("{{contactEmail}}", request.contact_email())
        .replace("{{businessType}}", request.business_type())
        .replace(
            "{{submissionDate}}",
            &request.submitted_at().format("%Y-%m-%d").to_string(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use orgdesk_core::{Aggregate, AggregateId};
    use orgdesk_onboarding::{RequestCommand, RequestId, SubmitRequest};

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
                occurred_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            }))
            .unwrap();
        request.apply(&events[0]);
        request
    }

    #[test]
    fn all_four_tokens_are_replaced() {
        let template = MessageTemplate::new(
            "Request from {{organizationName}}",
            "{{organizationName}} ({{businessType}}) via {{contactEmail}} on {{submissionDate}}",
        );

        let rendered = render(&template, &acme_request());
        assert_eq!(rendered.subject, "Request from Acme");
        assert_eq!(rendered.body, "Acme (Tech) via a@acme.com on 2024-01-01");
    }

    #[test]
    fn token_free_template_is_returned_unchanged() {
        let template = MessageTemplate::new("Thanks", "We will be in touch.");
        let rendered = render(&template, &acme_request());
        assert_eq!(rendered.subject, "Thanks");
        assert_eq!(rendered.body, "We will be in touch.");
    }

    #[test]
    fn unrecognized_tokens_are_carried_verbatim() {
        let template = MessageTemplate::new("Hi {{contactName}}", "Ref {{ticketNumber}}");
        let rendered = render(&template, &acme_request());
        assert_eq!(rendered.subject, "Hi {{contactName}}");
        assert_eq!(rendered.body, "Ref {{ticketNumber}}");
    }

    #[test]
    fn render_is_deterministic() {
        let template = MessageTemplate::new("{{organizationName}}", "{{submissionDate}}");
        let request = acme_request();
        assert_eq!(render(&template, &request), render(&template, &request));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: rendering is total and deterministic for any template text.
            #[test]
            fn render_never_panics(subject in ".{0,60}", body in ".{0,200}") {
                let template = MessageTemplate::new(subject, body);
                let request = acme_request();
                prop_assert_eq!(render(&template, &request), render(&template, &request));
            }

            /// Property: recognized tokens never survive rendering.
            #[test]
            fn recognized_tokens_never_survive(prefix in "[a-z ]{0,20}", suffix in "[a-z ]{0,20}") {
                for token in [
                    "{{organizationName}}",
                    "{{contactEmail}}",
                    "{{businessType}}",
                    "{{submissionDate}}",
                ] {
                    let template =
                        MessageTemplate::new("s", format!("{prefix}{token}{suffix}"));
                    let rendered = render(&template, &acme_request());
                    prop_assert!(!rendered.body.contains(token));
                }
            }
        }
    }
}
