use glam::Vec3;

use crate::assets::BoundingBox;

/// Camera placement derived from the model bounds once the asset has loaded.
///
/// The model is moved so its bounding box is centered on the origin and rests
/// on the ground plane; the camera looks at the middle of the model from a
/// raised diagonal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Framing {
    /// Translation to apply to the model root.
    pub model_offset: Vec3,
    pub camera_position: Vec3,
    pub camera_far: f32,
    /// Orbit target.
    pub target: Vec3,
}

impl Framing {
    /// Distance from the model, as a multiple of its largest dimension.
    pub const DISTANCE_FACTOR: f32 = 2.0;
    /// Camera height, as a fraction of the distance.
    pub const ELEVATION_FACTOR: f32 = 0.6;
    /// Far plane, as a multiple of the largest dimension.
    pub const FAR_FACTOR: f32 = 20.0;

    #[must_use]
    pub fn fit(bounds: &BoundingBox) -> Self {
        let size = bounds.size();
        let center = bounds.center();

        let model_offset = Vec3::new(-center.x, -center.y + size.y * 0.5, -center.z);

        let max_dim = bounds.max_dimension();
        let distance = max_dim * Self::DISTANCE_FACTOR;

        Self {
            model_offset,
            camera_position: Vec3::new(distance, distance * Self::ELEVATION_FACTOR, distance),
            camera_far: max_dim * Self::FAR_FACTOR,
            target: Vec3::new(0.0, size.y * 0.5, 0.0),
        }
    }

    /// Where `bounds` end up after the model offset is applied.
    #[must_use]
    pub fn framed_bounds(&self, bounds: &BoundingBox) -> BoundingBox {
        bounds.translated(self.model_offset)
    }

    /// Orbit radius matching the camera placement.
    #[must_use]
    pub fn orbit_radius(&self) -> f32 {
        self.camera_position.distance(self.target)
    }
}
