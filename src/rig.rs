//! Third-person orbit camera rig
//!
//! One controller owns the whole per-frame placement algorithm:
//! input-driven orbit angles, distance clamping, occlusion correction via a
//! segment cast, exponential position smoothing, and a distance-based fade
//! of the followed target. Zoom runs on the host's fixed-cadence simulation
//! tick; everything else on the variable-cadence render tick.

use glam::{Mat4, Quat, Vec3};

use crate::config::FollowCameraConfig;
use crate::error::RigError;
use crate::host::{
    AppearanceHandle, AppearanceStore, CollisionWorld, EntityId, InputSource, SceneTransforms,
};

/// Offset along the hit normal applied when the camera is pulled in front of
/// an obstacle, to keep it from clipping into the surface.
const SKIN_OFFSET: f32 = 0.1;

/// Visual state of the followed target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    /// The target shows its own material.
    Normal,
    /// The target shows the configured translucent material because the
    /// camera is closer than the fade distance.
    Translucent,
}

/// Follow-camera controller.
///
/// Built over four host-supplied capabilities (input, collision, appearance,
/// scene). All mutable rig state lives here; the host only sees the camera
/// transform writes and the appearance swaps.
#[derive(Debug)]
pub struct OrbitCameraController<I, C, A, S> {
    config: FollowCameraConfig,
    target: EntityId,
    translucent: AppearanceHandle,
    original: AppearanceHandle,
    appearance: Appearance,

    /// Horizontal orbit angle in degrees, unbounded.
    yaw: f32,
    /// Vertical orbit angle in degrees, clamped to the configured range.
    pitch: f32,
    /// Camera-to-target distance, clamped to the configured range.
    distance: f32,
    /// Smoothed camera position. Snaps only at activation.
    position: Vec3,
    rotation: Quat,
    target_lost: bool,

    input: I,
    collision: C,
    appearances: A,
    scene: S,
}

impl<I, C, A, S> OrbitCameraController<I, C, A, S>
where
    I: InputSource,
    C: CollisionWorld,
    A: AppearanceStore,
    S: SceneTransforms,
{
    /// Activate a rig following `target`.
    ///
    /// Validates the configuration, captures the target's current appearance
    /// (restored whenever the camera backs away past the fade distance, and
    /// on [`deactivate`](Self::deactivate)), seeds the orbit state from the
    /// configured initial values, and snaps the camera to its starting
    /// placement. Fails if the target has no position or no appearance.
    pub fn activate(
        config: FollowCameraConfig,
        target: EntityId,
        translucent: AppearanceHandle,
        input: I,
        collision: C,
        appearances: A,
        mut scene: S,
    ) -> Result<Self, RigError> {
        config.validate()?;

        let target_pos = scene.position(target).ok_or(RigError::MissingTarget)?;
        let original = appearances
            .appearance(target)
            .ok_or(RigError::MissingAppearance(target))?;

        let yaw = config.initial_yaw;
        let pitch = config.initial_pitch.clamp(config.min_pitch, config.max_pitch);
        let distance = config
            .initial_distance
            .clamp(config.min_distance, config.max_distance);

        let mut rig = Self {
            config,
            target,
            translucent,
            original,
            appearance: Appearance::Normal,
            yaw,
            pitch,
            distance,
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            target_lost: false,
            input,
            collision,
            appearances,
            scene,
        };

        // The one permitted snap: start directly at the resolved orbit
        // position instead of lerping in from somewhere arbitrary.
        let desired = rig.orbit_position(target_pos);
        rig.position = rig.resolve_occlusion(target_pos, desired);
        if let Some(rotation) = look_at(rig.position, target_pos) {
            rig.rotation = rotation;
        }
        rig.scene.set_camera_position(rig.position);
        rig.scene.set_camera_rotation(rig.rotation);

        log::debug!(
            "follow camera active: target {:?}, distance {:.2}, yaw {:.1}, pitch {:.1}",
            rig.target,
            rig.distance,
            rig.yaw,
            rig.pitch
        );
        Ok(rig)
    }

    /// Render tick. `dt` is the wall time since the previous render tick.
    ///
    /// Runs the orbit, occlusion, smoothing, and fade phases in order and
    /// writes the resulting camera transform to the scene. A target with no
    /// position this tick makes the whole tick a no-op.
    pub fn update(&mut self, dt: f32) {
        let Some(target_pos) = self.scene.position(self.target) else {
            if !self.target_lost {
                log::warn!("follow target {:?} has no position, skipping", self.target);
                self.target_lost = true;
            }
            return;
        };
        self.target_lost = false;

        let look = self.input.look_delta();
        self.yaw += look.x * self.config.rotate_speed;
        self.pitch = (self.pitch - look.y * self.config.rotate_speed)
            .clamp(self.config.min_pitch, self.config.max_pitch);

        let desired = self.orbit_position(target_pos);
        let desired = self.resolve_occlusion(target_pos, desired);

        let t = (self.config.move_speed * dt).clamp(0.0, 1.0);
        self.position = self.position.lerp(desired, t);
        if let Some(rotation) = look_at(self.position, target_pos) {
            self.rotation = rotation;
        }
        self.scene.set_camera_position(self.position);
        self.scene.set_camera_rotation(self.rotation);

        self.update_appearance(target_pos);
    }

    /// Simulation tick: apply zoom input to the orbit distance.
    ///
    /// Runs on the host's fixed-cadence clock so zoom feel does not depend
    /// on render frame rate; the delta is per tick, not time-scaled.
    pub fn zoom_update(&mut self) {
        let zoom = self.input.zoom_delta() * self.config.zoom_speed;
        self.distance =
            (self.distance - zoom).clamp(self.config.min_distance, self.config.max_distance);
    }

    /// Deactivate the rig, restoring the target's captured appearance if it
    /// is still faded out.
    pub fn deactivate(&mut self) {
        if self.appearance == Appearance::Translucent {
            self.appearances.set_appearance(self.target, self.original);
            self.appearance = Appearance::Normal;
        }
        log::debug!("follow camera deactivated: target {:?}", self.target);
    }

    /// Camera position on the orbit sphere for the current angles/distance.
    fn orbit_position(&self, target_pos: Vec3) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        let offset = Vec3::new(
            self.distance * pitch.cos() * yaw.sin(),
            self.distance * pitch.sin(),
            self.distance * pitch.cos() * yaw.cos(),
        );
        target_pos + offset
    }

    /// Pull `candidate` in front of the first obstacle between the target
    /// and the camera, if any. Oracle failure and degenerate segments leave
    /// the candidate untouched.
    fn resolve_occlusion(&self, target_pos: Vec3, candidate: Vec3) -> Vec3 {
        if (candidate - target_pos).length_squared() <= f32::EPSILON {
            return candidate;
        }
        match self
            .collision
            .cast_segment(target_pos, candidate, self.config.obstacle_mask)
        {
            Ok(Some(hit)) => hit.point + hit.normal * SKIN_OFFSET,
            Ok(None) => candidate,
            Err(err) => {
                log::warn!("occlusion cast failed, keeping candidate: {err}");
                candidate
            }
        }
    }

    /// Fade state machine. Writes an appearance only on a transition, so a
    /// camera parked on one side of the threshold causes no redundant swaps.
    fn update_appearance(&mut self, target_pos: Vec3) {
        let d = self.position.distance(target_pos);
        if d < self.config.fade_distance {
            if self.appearance == Appearance::Normal {
                self.appearances.set_appearance(self.target, self.translucent);
                self.appearance = Appearance::Translucent;
            }
        } else if self.appearance == Appearance::Translucent {
            self.appearances.set_appearance(self.target, self.original);
            self.appearance = Appearance::Normal;
        }
    }

    /// Current horizontal orbit angle in degrees.
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current vertical orbit angle in degrees.
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current orbit distance.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Smoothed camera position as of the last render tick.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Camera orientation as of the last render tick.
    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Current fade state of the target.
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }
}

/// Rotation that points the camera at `target` with Y up, or `None` when the
/// two positions coincide.
fn look_at(position: Vec3, target: Vec3) -> Option<Quat> {
    if (target - position).length_squared() < 1e-8 {
        return None;
    }
    let view = Mat4::look_at_rh(position, target, Vec3::Y);
    Some(Quat::from_mat4(&view.inverse()))
}
