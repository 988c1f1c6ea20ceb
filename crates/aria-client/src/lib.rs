//! Client for a locally-hosted music-generation API proxy.
//!
//! The proxy wraps a third-party generation service behind a small JSON
//! API: submit a batch of clips, then poll `/api/get` until every clip
//! reaches a terminal state. This crate provides the typed client and the
//! poll-until-complete loop.

pub mod client;
pub mod error;
pub mod poller;

pub use client::{AriaClient, AriaClientConfig};
pub use error::{AriaError, AriaResult};
pub use poller::{ClipSource, PollConfig, PollOutcome, PollReport, StatusPoller};
