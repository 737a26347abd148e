//! MS Teams notification layer.
//!
//! This module provides:
//! - Ordered name/value facts ([`Fields`])
//! - The per-call status message ([`NotificationEvent`], [`Outcome`])
//! - The fixed `MessageCard` wire payload ([`Card`])
//! - Webhook delivery that never fails the caller ([`NotificationSender`])
//! - An injectable channel for delivery diagnostics ([`DiagnosticSink`])

mod card;
mod error;
mod event;
mod fields;
mod sender;
mod sink;


pub use card::{
    CODE_FENCE, Card, ELLIPSIS, FAILURE_COLOR, FAILURE_EMOJI, Fact, MAX_DETAILS_CHARS,
    SUCCESS_COLOR, SUCCESS_EMOJI, Section, render_details, render_title,
};
pub use error::{ConfigurationError, field};
pub use event::{NotificationEvent, Outcome};
pub use fields::Fields;
pub use sender::{NotificationSender, SenderOptions};
pub use sink::{Diagnostic, DiagnosticSink, TracingSink};
