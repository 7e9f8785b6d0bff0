use crate::catalog::ClipCatalog;
use crate::playback::{PlaybackState, SelectionChange, SelectionObserver};
use crate::ui::highlight::HighlightState;

/// Shown instead of buttons when the asset carried no animation.
pub const NO_ANIMATIONS_LABEL: &str = "No animations found";

/// One clip button in the flat-screen list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopButton {
    /// Catalog position this button triggers.
    pub index: usize,
    pub label: String,
    /// Last rendered state; recomputed from [`PlaybackState`] on every notification.
    pub rendered: HighlightState,
}

/// The flat-screen button list.
#[derive(Debug, Clone, Default)]
pub struct DesktopPanel {
    buttons: Vec<DesktopButton>,
    placeholder: Option<&'static str>,
}

impl DesktopPanel {
    /// A panel with no buttons, before the asset has loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One button per catalog entry, labeled with the clip name.
    #[must_use]
    pub fn from_catalog(catalog: &ClipCatalog) -> Self {
        let buttons = catalog
            .iter()
            .enumerate()
            .map(|(index, def)| DesktopButton {
                index,
                label: def.name.clone(),
                rendered: HighlightState::Normal,
            })
            .collect();

        Self {
            buttons,
            placeholder: None,
        }
    }

    /// The "no animations" state.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            buttons: Vec::new(),
            placeholder: Some(NO_ANIMATIONS_LABEL),
        }
    }

    #[must_use]
    pub fn buttons(&self) -> &[DesktopButton] {
        &self.buttons
    }

    #[must_use]
    pub fn placeholder(&self) -> Option<&'static str> {
        self.placeholder
    }

    /// Resolves a click on the button for `index` to the index to select.
    #[must_use]
    pub fn click(&self, index: usize) -> Option<usize> {
        self.buttons.iter().find(|b| b.index == index).map(|b| b.index)
    }

    /// Indices of buttons currently drawn as active.
    pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.buttons
            .iter()
            .filter(|b| b.rendered.is_active())
            .map(|b| b.index)
    }

    pub fn refresh(&mut self, state: &PlaybackState) {
        for button in &mut self.buttons {
            button.rendered = HighlightState::resolve(state.is_active(button.index), false);
        }
    }
}

impl SelectionObserver for DesktopPanel {
    fn on_selection_changed(&mut self, state: &PlaybackState, _change: SelectionChange) {
        self.refresh(state);
    }
}
