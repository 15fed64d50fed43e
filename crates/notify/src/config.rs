use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::template::MessageTemplate;

/// Auto-reply configuration, owned by the hosting process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoReplyConfig {
    /// Master switch: when off, no notification is ever computed.
    pub enabled: bool,

    /// Delay between submission and the confirmation firing.
    pub delay_minutes: i64,

    /// Confirmation message template.
    pub template: MessageTemplate,
}

impl Default for AutoReplyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delay_minutes: 10,
            template: MessageTemplate::new(
                "We received your request, {{organizationName}}",
                "Hello,\n\n\
                 Thank you for requesting an organization workspace for \
                 {{organizationName}}.\n\n\
                 We received your {{businessType}} submission on {{submissionDate}} \
                 and will review it shortly. A decision will be sent to \
                 {{contactEmail}}.\n\n\
                 The OrgDesk team",
            ),
        }
    }
}

/// Shared handle to the auto-reply configuration.
///
/// Administrative updates are rare and whole-value: `update` replaces the
/// config (last write wins), `snapshot` hands callers an owned copy so
/// rendering never holds the lock.
#[derive(Debug, Clone, Default)]
pub struct AutoReplyConfigHandle {
    inner: Arc<RwLock<AutoReplyConfig>>,
}

impl AutoReplyConfigHandle {
    pub fn new(config: AutoReplyConfig) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
        }
    }

    /// Owned copy of the current configuration.
    pub fn snapshot(&self) -> AutoReplyConfig {
        self.inner.read().unwrap().clone()
    }

    /// Replace the configuration.
    pub fn update(&self, config: AutoReplyConfig) {
        tracing::debug!(
            enabled = config.enabled,
            delay_minutes = config.delay_minutes,
            "auto-reply config updated"
        );
        *self.inner.write().unwrap() = config;
    }
}
