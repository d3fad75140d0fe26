//! Error types for rig activation and collision queries

use thiserror::Error;

use crate::host::EntityId;

/// Errors that prevent a rig from activating.
///
/// These are reported once, at activation; a rig that fails to activate
/// never enters its update loop. Per-tick degradation (a failed occlusion
/// cast, a target that momentarily has no transform) is handled inside the
/// loop and is not an error.
#[derive(Debug, Error)]
pub enum RigError {
    #[error("follow target has no position in the scene")]
    MissingTarget,
    #[error("target {0:?} has no appearance to capture")]
    MissingAppearance(EntityId),
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Failure reported by a collision host when a segment cast cannot be
/// evaluated. Treated as "no hit information available", never as fatal.
#[derive(Debug, Clone, Error)]
#[error("segment cast failed: {0}")]
pub struct CastError(pub String);

impl CastError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
