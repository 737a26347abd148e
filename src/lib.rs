//! teams-relay: MS Teams status cards and classified JSON API calls.
//!
//! Two independent components built on a shared transport seam:
//! - [`notify`]: posts themed `MessageCard`s to an inbound webhook and
//!   reports delivery as a boolean
//! - [`connector`]: single-shot JSON API calls with auth/soft/transport
//!   error classification

pub mod config;
pub mod connector;
pub mod notify;
pub mod transport;
