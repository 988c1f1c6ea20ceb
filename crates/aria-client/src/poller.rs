//! Poll-until-complete loop for clip batches.
//!
//! After a submission returns in-progress clips, the poller repeatedly
//! fetches the whole batch until every clip reaches a terminal state or a
//! wall-clock budget runs out. The batch is only ever read; clip state
//! lives upstream.

use std::future::Future;
use std::time::Duration;

use tokio::time::Instant;
use tracing::{info, warn};

use aria_models::{Clip, ClipStatus};

use crate::error::AriaResult;

/// Anything that can produce the current records for a set of clip ids.
///
/// Implemented by [`AriaClient`](crate::AriaClient); tests substitute
/// scripted sources.
pub trait ClipSource {
    fn fetch_clips(
        &self,
        ids: &[String],
    ) -> impl Future<Output = AriaResult<Vec<Clip>>> + Send;
}

impl<S: ClipSource + Sync> ClipSource for &S {
    fn fetch_clips(
        &self,
        ids: &[String],
    ) -> impl Future<Output = AriaResult<Vec<Clip>>> + Send {
        (**self).fetch_clips(ids)
    }
}

/// Polling budget.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Maximum total wait before giving up and returning the last snapshot
    pub max_wait: Duration,
    /// Fixed delay between consecutive status fetches
    pub poll_interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_wait: Duration::from_secs(300),
            poll_interval: Duration::from_secs(5),
        }
    }
}

/// How the poll loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// Every clip reached `complete`
    AllComplete,
    /// Every clip reached `error`
    AllFailed,
    /// The wait budget elapsed with clips still in progress
    TimedOut,
}

/// Final snapshot of a polled batch.
///
/// The clips are the full last-fetched records, passed through untouched.
/// Per-clip `error` statuses are reported here rather than escalated to a
/// client-level failure.
#[derive(Debug, Clone)]
pub struct PollReport {
    pub clips: Vec<Clip>,
    pub outcome: PollOutcome,
}

/// Repeatedly queries clip status until the batch is terminal or the
/// budget elapses.
pub struct StatusPoller<S> {
    source: S,
    config: PollConfig,
}

impl<S: ClipSource> StatusPoller<S> {
    /// Create a poller with the default budget (300s total, 5s interval).
    pub fn new(source: S) -> Self {
        Self::with_config(source, PollConfig::default())
    }

    pub fn with_config(source: S, config: PollConfig) -> Self {
        Self { source, config }
    }

    /// Poll until every clip is `complete`, every clip is `error`, or
    /// `max_wait` elapses.
    ///
    /// The elapsed budget is checked before each fetch, so with a 10s
    /// budget and a 5s interval exactly two fetches happen. A transport
    /// error or non-2xx response on one attempt is logged and retried on
    /// the next tick without updating the snapshot; a body that fails to
    /// decode is returned as an error. On timeout the last fetched
    /// snapshot is returned as-is, whatever its statuses.
    ///
    /// A batch holding a mix of `complete` and `error` clips satisfies
    /// neither terminal condition and keeps polling until timeout.
    pub async fn poll_until_complete(&self, ids: &[String]) -> AriaResult<PollReport> {
        let started = Instant::now();
        let mut snapshot: Vec<Clip> = Vec::new();

        while started.elapsed() < self.config.max_wait {
            match self.source.fetch_clips(ids).await {
                Ok(clips) => {
                    snapshot = clips;

                    if snapshot
                        .iter()
                        .all(|clip| clip.status == ClipStatus::Complete)
                    {
                        info!(
                            clips = snapshot.len(),
                            elapsed = ?started.elapsed(),
                            "all clips complete"
                        );
                        return Ok(PollReport {
                            clips: snapshot,
                            outcome: PollOutcome::AllComplete,
                        });
                    }

                    if snapshot.iter().all(|clip| clip.status == ClipStatus::Error) {
                        info!(
                            clips = snapshot.len(),
                            elapsed = ?started.elapsed(),
                            "all clips failed"
                        );
                        return Ok(PollReport {
                            clips: snapshot,
                            outcome: PollOutcome::AllFailed,
                        });
                    }
                }
                Err(e) if e.is_retryable() => {
                    warn!(
                        "status fetch failed, retrying in {:?}: {}",
                        self.config.poll_interval, e
                    );
                }
                Err(e) => return Err(e),
            }

            tokio::time::sleep(self.config.poll_interval).await;
        }

        info!(
            max_wait = ?self.config.max_wait,
            "poll budget elapsed, returning last snapshot"
        );
        Ok(PollReport {
            clips: snapshot,
            outcome: PollOutcome::TimedOut,
        })
    }
}
