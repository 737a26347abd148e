//! Diagnostic channel for delivery problems.
//!
//! The sender never returns delivery errors; it reports them here and
//! answers `false`. Production code logs through `tracing`; tests inject a
//! recording sink.

use std::fmt;
use std::sync::Arc;

/// A delivery problem reported by the sender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// `log` was called without the required inputs. No request was sent.
    InvalidInvocation {
        /// What was missing
        reason: &'static str,
    },

    /// The webhook answered with a non-2xx status.
    Rejected {
        /// HTTP status returned by the webhook
        status: http::StatusCode,
        /// Response body as text
        body: String,
    },

    /// No response was obtained.
    Transport {
        /// Rendered transport error
        message: String,
    },

    /// The card could not be serialized.
    Encode {
        /// Rendered serializer error
        message: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInvocation { reason } => {
                write!(f, "Invalid Teams notifier log() invocation: {reason}")
            }
            Self::Rejected { status, body } => write!(
                f,
                "MS Teams returned an error (HTTP-{}): {body}",
                status.as_u16()
            ),
            Self::Transport { message } => write!(f, "MS Teams delivery failed: {message}"),
            Self::Encode { message } => write!(f, "Failed to encode Teams card: {message}"),
        }
    }
}

/// Receiver of sender diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Records one diagnostic.
    fn report(&self, diagnostic: &Diagnostic);
}

/// Default sink that emits diagnostics as `tracing` error events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        tracing::error!("{diagnostic}");
    }
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for Arc<T> {
    fn report(&self, diagnostic: &Diagnostic) {
        (**self).report(diagnostic);
    }
}
