//! UI front-ends
//!
//! Two independent front-ends share one [`PlaybackState`](crate::playback::PlaybackState):
//!
//! - [`DesktopPanel`]: a flat list of clip buttons, driven by clicks
//! - [`VrPanel`]: a world-anchored 2-column grid, driven by controller rays
//!   and trigger presses
//!
//! Both implement [`SelectionObserver`](crate::playback::SelectionObserver) and
//! derive their highlight through [`HighlightState::resolve`].

pub mod desktop;
pub mod highlight;
pub mod raycast;
pub mod vr_panel;

pub use desktop::{DesktopButton, DesktopPanel, NO_ANIMATIONS_LABEL};
pub use highlight::{HighlightPalette, HighlightState};
pub use raycast::{Quad, Ray, RayHit};
pub use vr_panel::{PanelLayout, VrButton, VrPanel};
