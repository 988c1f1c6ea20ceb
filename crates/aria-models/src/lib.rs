//! Shared wire models for the Aria music-generation client.
//!
//! This crate provides Serde-serializable types for:
//! - Clips and their generation statuses
//! - Generation request payloads
//! - Account quota information

pub mod clip;
pub mod generate;
pub mod quota;

// Re-export common types
pub use clip::{Clip, ClipStatus};
pub use generate::{CustomGenerateRequest, GenerateRequest};
pub use quota::QuotaInfo;
