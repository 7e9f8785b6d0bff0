//! Platform-agnostic XR input
//!
//! Holds the per-frame state of up to two tracked input sources. The host's XR
//! adapter fills it from its session events before calling
//! [`Viewer::frame`](crate::Viewer::frame); the viewer clears the one-shot
//! trigger flags at the end of the frame.

use glam::{Quat, Vec3};
use smallvec::SmallVec;

use crate::ui::Ray;

/// Maximum number of tracked controllers considered for picking.
pub const MAX_CONTROLLERS: usize = 2;

/// Pose of one tracked input source in world space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllerPose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl ControllerPose {
    #[must_use]
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// A pose at `position` whose forward axis points at `target`.
    #[must_use]
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        let forward = (target - position).normalize_or(Vec3::NEG_Z);
        Self::new(position, Quat::from_rotation_arc(Vec3::NEG_Z, forward))
    }

    #[must_use]
    pub fn ray(&self) -> Ray {
        Ray::from_pose(self.position, self.orientation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ControllerState {
    pose: Option<ControllerPose>,
    select_pressed: bool,
}

/// Controller state for the current frame, in enumeration order.
#[derive(Debug, Clone, Default)]
pub struct XrInput {
    controllers: SmallVec<[ControllerState; MAX_CONTROLLERS]>,
}

impl XrInput {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&mut self, controller: usize) -> Option<&mut ControllerState> {
        if controller >= MAX_CONTROLLERS {
            log::debug!("Ignoring input from controller {controller}");
            return None;
        }
        while self.controllers.len() <= controller {
            self.controllers.push(ControllerState {
                pose: None,
                select_pressed: false,
            });
        }
        self.controllers.get_mut(controller)
    }

    /// Updates (or, with `None`, drops tracking of) a controller pose.
    pub fn set_pose(&mut self, controller: usize, pose: Option<ControllerPose>) {
        if let Some(slot) = self.slot(controller) {
            slot.pose = pose;
        }
    }

    /// Records a select (trigger) event for this frame.
    pub fn handle_select(&mut self, controller: usize) {
        if let Some(slot) = self.slot(controller) {
            slot.select_pressed = true;
        }
    }

    /// Rays of every tracked controller, controller 0 first.
    #[must_use]
    pub fn rays(&self) -> SmallVec<[Ray; MAX_CONTROLLERS]> {
        self.controllers
            .iter()
            .filter_map(|c| c.pose.map(|p| p.ray()))
            .collect()
    }

    /// Whether any controller fired select this frame.
    #[must_use]
    pub fn select_pressed(&self) -> bool {
        self.controllers.iter().any(|c| c.select_pressed)
    }

    /// Clears one-shot state. Poses persist until updated.
    pub fn end_frame(&mut self) {
        for controller in &mut self.controllers {
            controller.select_pressed = false;
        }
    }
}
