use std::sync::Arc;

use crate::animation::{ActionId, AnimationAction, AnimationClip, AnimationMixer, PoseTarget};
use crate::catalog::ClipCatalog;
use crate::errors::{ClipExtractionError, Result, ViewerError};
use crate::playback::state::{PlaybackState, SelectionChange, SelectionObserver};

/// One catalog slot after extraction.
#[derive(Debug, Clone)]
struct ClipSlot {
    name: String,
    action: Option<ActionId>,
}

/// Enforces single-active-clip playback over the clips cut from one source track.
///
/// # State machine
///
/// - Idle (`current_index() == None`) until the first successful `select`
/// - `select(j)` while playing `i != j` stops every clip, then plays `j` from zero
/// - `select(i)` while playing `i` is a no-op and keeps the clock
/// - There is no way back to Idle
#[derive(Debug)]
pub struct PlaybackController {
    mixer: AnimationMixer,
    slots: Vec<ClipSlot>,
    state: PlaybackState,
}

impl PlaybackController {
    /// Cuts one playable clip per catalog entry out of `track`.
    ///
    /// Fails if the catalog is empty or the track has zero duration. An entry
    /// that cannot be extracted is logged and left as a gap; later entries keep
    /// their catalog index.
    pub fn initialize(track: &AnimationClip, catalog: &ClipCatalog) -> Result<Self> {
        if catalog.is_empty() {
            return Err(ClipExtractionError::EmptyCatalog.into());
        }
        if track.duration <= 0.0 {
            return Err(ClipExtractionError::ZeroDurationTrack(track.name.clone()).into());
        }

        let fps = catalog.fps();
        log::info!(
            "Full clip: \"{}\" ({:.2}s, {} tracks)",
            track.name,
            track.duration,
            track.tracks.len()
        );

        let mut mixer = AnimationMixer::new();
        let mut slots = Vec::with_capacity(catalog.len());

        for (i, def) in catalog.iter().enumerate() {
            let action = match track.subclip(&def.name, def.start_frame, def.end_frame, fps) {
                Ok(clip) => {
                    log::info!(
                        "  [{i}] \"{}\" {:.2}s to {:.2}s",
                        def.name,
                        def.start_seconds(fps),
                        def.end_seconds(fps)
                    );
                    let mut action = AnimationAction::new(Arc::new(clip));
                    action.clamp_when_finished = true;
                    Some(mixer.add_action(action))
                }
                Err(err) => {
                    log::warn!("  [{i}] \"{}\" skipped: {err}", def.name);
                    None
                }
            };

            slots.push(ClipSlot {
                name: def.name.clone(),
                action,
            });
        }

        Ok(Self {
            mixer,
            slots,
            state: PlaybackState::new(),
        })
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Selects `index`, reporting why a request was rejected.
    ///
    /// Returns `Ok(None)` when `index` is already current.
    pub fn try_select(&mut self, index: usize) -> Result<Option<SelectionChange>> {
        let slot = self.slots.get(index).ok_or(ViewerError::IndexOutOfRange {
            index,
            len: self.slots.len(),
        })?;
        let id = slot.action.ok_or(ViewerError::ClipUnavailable { index })?;

        if self.state.is_active(index) {
            return Ok(None);
        }

        let previous = self.state.current_index();

        self.mixer.stop_all();
        if let Some(action) = self.mixer.action_mut(id) {
            action.reset().play();
        }
        self.state.set_current(index);

        log::debug!("Playback {previous:?} -> {index} (\"{}\")", slot.name);

        Ok(Some(SelectionChange {
            previous,
            current: index,
        }))
    }

    /// Selects `index`. Rejected requests are logged and leave the state untouched.
    pub fn select(&mut self, index: usize) -> Option<SelectionChange> {
        match self.try_select(index) {
            Ok(change) => change,
            Err(err) => {
                log::warn!("Ignoring clip selection: {err}");
                None
            }
        }
    }

    /// Selects `index` and, if the selection changed, lets every observer re-render.
    pub fn select_and_notify(
        &mut self,
        index: usize,
        observers: &mut [&mut dyn SelectionObserver],
    ) -> Option<SelectionChange> {
        match self.try_select_and_notify(index, observers) {
            Ok(change) => change,
            Err(err) => {
                log::warn!("Ignoring clip selection: {err}");
                None
            }
        }
    }

    /// Like [`select_and_notify`](Self::select_and_notify), reporting rejections.
    pub fn try_select_and_notify(
        &mut self,
        index: usize,
        observers: &mut [&mut dyn SelectionObserver],
    ) -> Result<Option<SelectionChange>> {
        let Some(change) = self.try_select(index)? else {
            return Ok(None);
        };
        for observer in observers.iter_mut() {
            observer.on_selection_changed(&self.state, change);
        }
        Ok(Some(change))
    }

    // ========================================================================
    // Per-frame
    // ========================================================================

    /// Advances the current clip. A clip that reaches its end holds the final pose.
    pub fn tick(&mut self, dt: f32) {
        if !dt.is_finite() || dt < 0.0 {
            log::warn!("Ignoring invalid frame delta {dt}");
            return;
        }
        self.mixer.update(dt);
    }

    /// Writes the current clip's pose into `target`.
    pub fn apply<T: PoseTarget + ?Sized>(&self, target: &mut T) {
        self.mixer.apply(target);
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[inline]
    #[must_use]
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index()
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.state.is_active(index)
    }

    /// Number of catalog slots, including skipped entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(|s| s.name.as_str())
    }

    /// Whether the catalog entry at `index` produced a playable clip.
    #[must_use]
    pub fn is_available(&self, index: usize) -> bool {
        self.slots.get(index).is_some_and(|s| s.action.is_some())
    }

    #[must_use]
    pub fn action(&self, index: usize) -> Option<&AnimationAction> {
        let id = self.slots.get(index)?.action?;
        self.mixer.action(id)
    }

    #[must_use]
    pub fn clip(&self, index: usize) -> Option<&Arc<AnimationClip>> {
        self.action(index).map(AnimationAction::clip)
    }

    /// Local clock of the clip at `index`, in seconds.
    #[must_use]
    pub fn clip_time(&self, index: usize) -> Option<f32> {
        self.action(index).map(|a| a.time)
    }

    #[must_use]
    pub fn is_playing(&self, index: usize) -> bool {
        self.action(index).is_some_and(AnimationAction::is_running)
    }

    #[must_use]
    pub fn playing_count(&self) -> usize {
        self.mixer.running_count()
    }
}
