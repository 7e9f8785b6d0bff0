//! Assets
//!
//! The viewer never parses model files itself. The host loader hands over a
//! [`LoadedAsset`] (mesh bounds, materials, baked animation tracks) through a
//! [`LoadChannel`]; this module holds those types plus texture remapping.

pub mod bounds;
pub mod loader;
pub mod textures;

pub use bounds::BoundingBox;
pub use loader::{LoadChannel, LoadEvent, LoadProgress, LoadReporter, LoadedAsset};
pub use textures::{ColorSpace, MaterialSlot, TextureRef, TextureRemap};
