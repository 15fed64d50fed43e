use serde::{Deserialize, Serialize};

/// An email ready for dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundEmail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Mail delivery seam.
///
/// Delivery, retries and failure handling live behind this trait in the
/// hosting process; the domain only hands over a finished message.
pub trait MailTransport: Send + Sync + 'static {
    fn send(&self, email: &OutboundEmail);
}

/// Transport stub that logs instead of delivering.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMailTransport;

impl MailTransport for LoggingMailTransport {
    fn send(&self, email: &OutboundEmail) {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            "outbound email (logging transport)"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTransport {
        sent: Mutex<Vec<OutboundEmail>>,
    }

    impl MailTransport for RecordingTransport {
        fn send(&self, email: &OutboundEmail) {
            self.sent.lock().unwrap().push(email.clone());
        }
    }

    fn email() -> OutboundEmail {
        OutboundEmail {
            to: "a@acme.com".to_string(),
            subject: "Welcome".to_string(),
            body: "Hello".to_string(),
        }
    }

    #[test]
    fn transports_receive_the_message_verbatim() {
        let transport = RecordingTransport::default();
        transport.send(&email());

        let sent = transport.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0], email());
    }

    #[test]
    fn logging_transport_accepts_any_message() {
        LoggingMailTransport.send(&email());
    }
}
