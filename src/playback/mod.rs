//! Playback Controller
//!
//! Binds the [`ClipCatalog`](crate::catalog::ClipCatalog) to a loaded track and
//! keeps exactly one clip playing at a time.
//!
//! Selections come from two front-ends (desktop buttons and the VR panel) and
//! all funnel into [`PlaybackController::select`]. After each transition the
//! front-ends are notified through [`SelectionObserver`] and recompute their
//! highlights from [`PlaybackState`].

mod controller;
mod state;

pub use controller::PlaybackController;
pub use state::{PlaybackState, SelectionChange, SelectionObserver};
