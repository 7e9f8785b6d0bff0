/// The one piece of shared mutable state: which clip, if any, is selected.
///
/// Only [`PlaybackController`](super::PlaybackController) writes it. Front-ends
/// read it to derive highlight state and never keep their own copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaybackState {
    current: Option<usize>,
}

impl PlaybackState {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { current: None }
    }

    #[inline]
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// `-1` while idle, the selected index otherwise.
    #[must_use]
    pub fn current_index_or_negative(&self) -> i64 {
        self.current.map_or(-1, |i| i as i64)
    }

    #[inline]
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.current.is_none()
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.current == Some(index)
    }

    pub(crate) fn set_current(&mut self, index: usize) {
        self.current = Some(index);
    }
}

/// Emitted by a successful `select`; never emitted for no-op selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    pub previous: Option<usize>,
    pub current: usize,
}

/// A UI front-end that renders active/hover state per catalog index.
///
/// Implemented by both the desktop button list and the VR panel so the
/// controller's notify step is dispatched polymorphically.
pub trait SelectionObserver {
    fn on_selection_changed(&mut self, state: &PlaybackState, change: SelectionChange);
}
