//! Auto-reply notifications for organization requests.
//!
//! The core here only *computes*: given a submitted request and the current
//! auto-reply configuration, it renders the confirmation message and says when
//! it should fire. Timers, durable queues and actual delivery belong to the
//! hosting process, behind the [`MailTransport`] seam.

pub mod config;
pub mod schedule;
pub mod template;
pub mod transport;

pub use config::{AutoReplyConfig, AutoReplyConfigHandle};
pub use schedule::{schedule, ScheduledNotification};
pub use template::{render, MessageTemplate, RenderedMessage};
pub use transport::{LoggingMailTransport, MailTransport, OutboundEmail};
