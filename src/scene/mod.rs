//! Scene-side helpers
//!
//! The host engine owns the actual scene graph. This module covers the few
//! decisions the viewer makes about it:
//! - [`Framing`]: model recentering and camera placement from bounds
//! - [`Environment`] / [`PresentationMode`]: background and grid per mode

pub mod environment;
pub mod framing;

pub use environment::{Environment, PresentationMode};
pub use framing::Framing;
