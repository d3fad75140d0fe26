//! Rig configuration

use crate::error::RigError;
use crate::host::ObstacleMask;

/// Tuning parameters for the follow camera, fixed for the lifetime of a rig.
///
/// Angles are in degrees, distances in world units, speeds in units (or
/// degrees) per second except `zoom_speed`, which scales the per-tick zoom
/// delta directly.
#[derive(Debug, Clone)]
pub struct FollowCameraConfig {
    /// Maximum distance between camera and target.
    pub max_distance: f32,
    /// Minimum distance between camera and target.
    pub min_distance: f32,
    /// Positional smoothing rate (higher = snappier follow).
    pub move_speed: f32,
    /// Degrees of orbit per unit of look input.
    pub rotate_speed: f32,
    /// Distance change per unit of zoom input.
    pub zoom_speed: f32,
    /// Maximum pitch above the target, in degrees.
    pub max_pitch: f32,
    /// Minimum pitch below the target, in degrees (typically negative).
    pub min_pitch: f32,
    /// Camera-to-target distance below which the target is faded out.
    ///
    /// A single threshold is used in both directions, so a camera hovering
    /// exactly around it can flicker between appearances.
    pub fade_distance: f32,
    /// Which obstacle classification the occlusion cast is restricted to.
    pub obstacle_mask: ObstacleMask,
    /// Yaw the rig starts at, in degrees.
    pub initial_yaw: f32,
    /// Pitch the rig starts at, in degrees (clamped into the pitch range).
    pub initial_pitch: f32,
    /// Distance the rig starts at (clamped into the distance range).
    pub initial_distance: f32,
}

impl Default for FollowCameraConfig {
    fn default() -> Self {
        Self {
            max_distance: 10.0,
            min_distance: 2.0,
            move_speed: 10.0,
            rotate_speed: 5.0,
            zoom_speed: 7.0,
            max_pitch: 80.0,
            min_pitch: -20.0,
            fade_distance: 1.0,
            obstacle_mask: ObstacleMask::ALL,
            initial_yaw: 45.0,
            initial_pitch: 5.0,
            initial_distance: 10.0,
        }
    }
}

impl FollowCameraConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the allowed distance range.
    pub fn with_distance_range(mut self, min: f32, max: f32) -> Self {
        self.min_distance = min;
        self.max_distance = max;
        self
    }

    /// Set the allowed pitch range (degrees).
    pub fn with_pitch_range(mut self, min: f32, max: f32) -> Self {
        self.min_pitch = min;
        self.max_pitch = max;
        self
    }

    /// Set the positional smoothing rate.
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Set the rotation speed (degrees per input unit).
    pub fn with_rotate_speed(mut self, speed: f32) -> Self {
        self.rotate_speed = speed;
        self
    }

    /// Set the zoom speed (distance per input unit).
    pub fn with_zoom_speed(mut self, speed: f32) -> Self {
        self.zoom_speed = speed;
        self
    }

    /// Set the fade threshold distance.
    pub fn with_fade_distance(mut self, distance: f32) -> Self {
        self.fade_distance = distance;
        self
    }

    /// Restrict the occlusion cast to an obstacle classification.
    pub fn with_obstacle_mask(mut self, mask: ObstacleMask) -> Self {
        self.obstacle_mask = mask;
        self
    }

    /// Set the initial yaw/pitch (degrees).
    pub fn with_initial_angles(mut self, yaw: f32, pitch: f32) -> Self {
        self.initial_yaw = yaw;
        self.initial_pitch = pitch;
        self
    }

    /// Set the initial distance.
    pub fn with_initial_distance(mut self, distance: f32) -> Self {
        self.initial_distance = distance;
        self
    }

    /// Check the configuration for inverted ranges and unusable speeds.
    pub fn validate(&self) -> Result<(), RigError> {
        if self.min_distance > self.max_distance {
            return Err(RigError::InvalidConfig("min_distance exceeds max_distance"));
        }
        if self.min_pitch > self.max_pitch {
            return Err(RigError::InvalidConfig("min_pitch exceeds max_pitch"));
        }
        if self.min_distance < 0.0 {
            return Err(RigError::InvalidConfig("min_distance is negative"));
        }
        if self.move_speed <= 0.0 {
            return Err(RigError::InvalidConfig("move_speed must be positive"));
        }
        Ok(())
    }
}
