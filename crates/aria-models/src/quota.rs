//! Account quota reported by the proxy.

use serde::{Deserialize, Serialize};

/// Remaining generation credits for the upstream account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuotaInfo {
    pub credits_left: i64,
    #[serde(default)]
    pub period: Option<String>,
    pub monthly_limit: i64,
    pub monthly_usage: i64,
}
