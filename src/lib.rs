//! Follow Camera - a third-person orbit camera rig
//!
//! Positions a virtual camera on a sphere around a followed target, driven
//! by analog look/zoom input, and keeps the view usable in cluttered scenes:
//! - Obstacle avoidance: a segment cast between target and camera pulls the
//!   camera in front of the first occluder (plus a small skin offset)
//! - Exponential position smoothing for cinematic follow motion
//! - Distance-based target fade: the target swaps to a translucent
//!   appearance when the camera gets too close, and back when it retreats
//!
//! The rig owns no engine systems. Input, collision queries, appearances,
//! and the scene graph are capability traits (see [`host`]) injected at
//! activation, so the whole per-tick algorithm runs deterministically
//! against fakes in tests and against a real engine in production.

pub mod config;
pub mod error;
pub mod host;
pub mod rig;

pub use config::FollowCameraConfig;
pub use error::{CastError, RigError};
pub use host::{
    AppearanceHandle, AppearanceStore, CollisionWorld, EntityId, InputSource, ObstacleMask,
    SceneTransforms, SegmentHit,
};
pub use rig::{Appearance, OrbitCameraController};
