//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod booking;
pub mod eligibility;
pub mod profile;
pub mod session;
pub mod subscription;

pub use booking::*;
pub use eligibility::*;
pub use profile::*;
pub use session::*;
pub use subscription::*;

/// A stored tag that does not map to any known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} tag: {value}")]
pub struct UnknownTag {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownTag {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}
