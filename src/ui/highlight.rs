use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Visual state of one clip button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HighlightState {
    #[default]
    Normal,
    Hovered,
    Active,
}

impl HighlightState {
    /// Active wins over hovered, hovered over normal.
    #[inline]
    #[must_use]
    pub fn resolve(active: bool, hovered: bool) -> Self {
        match (active, hovered) {
            (true, _) => HighlightState::Active,
            (false, true) => HighlightState::Hovered,
            (false, false) => HighlightState::Normal,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_active(self) -> bool {
        self == HighlightState::Active
    }
}

/// Linear RGB button colors for the VR panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightPalette {
    pub normal: Vec3,
    pub hovered: Vec3,
    pub active: Vec3,
}

impl Default for HighlightPalette {
    fn default() -> Self {
        Self {
            normal: Vec3::new(0.20, 0.20, 0.33),
            hovered: Vec3::new(0.27, 0.40, 0.67),
            active: Vec3::new(0.13, 0.67, 0.40),
        }
    }
}

impl HighlightPalette {
    #[must_use]
    pub fn color(&self, state: HighlightState) -> Vec3 {
        match state {
            HighlightState::Normal => self.normal,
            HighlightState::Hovered => self.hovered,
            HighlightState::Active => self.active,
        }
    }
}
