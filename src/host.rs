//! Capability traits the host supplies to the rig
//!
//! The rig never talks to an input device, physics engine, renderer, or
//! scene graph directly. It is handed one implementation of each of the
//! traits below at activation, which keeps the per-tick algorithm
//! deterministic and testable with scripted fakes.

use glam::{Quat, Vec2, Vec3};

use crate::error::CastError;

/// Opaque identifier for an entity owned by the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId(pub u32);

/// Opaque reference to a renderable material/appearance state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppearanceHandle(pub u32);

/// Bitmask selecting which obstacle classifications a segment cast may hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObstacleMask(pub u32);

impl ObstacleMask {
    /// Matches every classification.
    pub const ALL: Self = Self(u32::MAX);
    /// Matches nothing; casts restricted to this mask never hit.
    pub const NONE: Self = Self(0);

    /// Whether any classification bit is shared with `other`.
    pub fn intersects(&self, other: ObstacleMask) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for ObstacleMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// First obstacle intersection along a cast segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentHit {
    /// Hit point in world space.
    pub point: Vec3,
    /// Surface normal at the hit point.
    pub normal: Vec3,
}

/// Per-tick analog input deltas.
///
/// `look_delta` is consumed by the render tick, `zoom_delta` by the
/// fixed-cadence simulation tick; each call returns the delta accumulated
/// since the previous call on that axis.
pub trait InputSource {
    /// Horizontal (x) and vertical (y) rotation deltas for this tick.
    fn look_delta(&mut self) -> Vec2;

    /// Zoom delta for this tick. Positive values move the camera closer.
    fn zoom_delta(&mut self) -> f32;
}

/// Occlusion oracle: first obstacle hit along a finite segment.
pub trait CollisionWorld {
    /// Cast from `from` to `to`, considering only colliders matching `mask`.
    ///
    /// Returns `Ok(None)` when the segment is clear. An `Err` means the
    /// query itself could not be evaluated; callers treat it the same as a
    /// clear segment.
    fn cast_segment(
        &self,
        from: Vec3,
        to: Vec3,
        mask: ObstacleMask,
    ) -> Result<Option<SegmentHit>, CastError>;
}

/// Read/write access to entity appearances.
pub trait AppearanceStore {
    /// Current appearance of `entity`, if it has one.
    fn appearance(&self, entity: EntityId) -> Option<AppearanceHandle>;

    /// Replace the appearance of `entity`.
    fn set_appearance(&mut self, entity: EntityId, handle: AppearanceHandle);
}

/// Access to the host scene graph: entity positions and the camera transform.
pub trait SceneTransforms {
    /// World position of `entity`, if it currently has a transform.
    fn position(&self, entity: EntityId) -> Option<Vec3>;

    /// Move the camera.
    fn set_camera_position(&mut self, position: Vec3);

    /// Orient the camera.
    fn set_camera_rotation(&mut self, rotation: Quat);
}
