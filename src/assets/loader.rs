//! One-shot asset load, seen from the frame thread.
//!
//! The host loader (any thread, any format) reports through a [`LoadReporter`]:
//! zero or more progress updates, then exactly one success or failure. The
//! viewer drains the matching [`LoadChannel`] once per frame. There is no
//! cancellation and no retry.

use crate::animation::AnimationClip;
use crate::assets::bounds::BoundingBox;
use crate::assets::textures::MaterialSlot;
use crate::errors::AssetLoadError;

/// What the host loader produced on success.
#[derive(Debug, Clone, Default)]
pub struct LoadedAsset {
    pub name: String,
    /// World-space bounds of every mesh under the asset root.
    pub mesh_bounds: Vec<BoundingBox>,
    pub materials: Vec<MaterialSlot>,
    /// Baked animation tracks; the viewer cuts its clips from the first one.
    pub animations: Vec<AnimationClip>,
}

impl LoadedAsset {
    /// Union of all mesh bounds, or `None` for an asset without meshes.
    #[must_use]
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.mesh_bounds
            .iter()
            .copied()
            .reduce(|acc, b| acc.union(&b))
    }
}

/// Bytes received so far. `total` is zero when the size is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadProgress {
    pub loaded: u64,
    pub total: u64,
}

impl LoadProgress {
    /// Completion in percent, when the total size is known.
    #[must_use]
    pub fn percent(&self) -> Option<f32> {
        (self.total > 0).then(|| self.loaded as f32 / self.total as f32 * 100.0)
    }
}

#[derive(Debug, Clone)]
pub enum LoadEvent {
    Progress(LoadProgress),
    Loaded(Box<LoadedAsset>),
    Failed(AssetLoadError),
}

/// Sending half, handed to the host loader.
///
/// `finish` and `fail` consume the reporter, so a load resolves at most once.
#[derive(Debug)]
pub struct LoadReporter {
    path: String,
    sender: flume::Sender<LoadEvent>,
}

impl LoadReporter {
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn progress(&self, loaded: u64, total: u64) {
        self.send(LoadEvent::Progress(LoadProgress { loaded, total }));
    }

    pub fn finish(self, asset: LoadedAsset) {
        self.send(LoadEvent::Loaded(Box::new(asset)));
    }

    pub fn fail(self, error: AssetLoadError) {
        self.send(LoadEvent::Failed(error));
    }

    fn send(&self, event: LoadEvent) {
        if self.sender.send(event).is_err() {
            log::debug!("Load channel for '{}' closed; dropping event", self.path);
        }
    }
}

/// Receiving half, drained by the viewer on the frame thread.
#[derive(Debug)]
pub struct LoadChannel {
    path: String,
    receiver: flume::Receiver<LoadEvent>,
}

impl LoadChannel {
    /// Opens a channel for loading `path`.
    #[must_use]
    pub fn open(path: impl Into<String>) -> (LoadReporter, LoadChannel) {
        let path = path.into();
        let (sender, receiver) = flume::unbounded();
        (
            LoadReporter {
                path: path.clone(),
                sender,
            },
            LoadChannel { path, receiver },
        )
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Events received since the last call, without blocking.
    pub fn drain(&self) -> impl Iterator<Item = LoadEvent> + '_ {
        self.receiver.try_iter()
    }

    /// Whether the reporter is gone and every event has been drained.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.receiver.is_disconnected() && self.receiver.is_empty()
    }
}
