//! Viewer Core
//!
//! [`Viewer`] owns everything the host render loop talks to: the load state,
//! the [`PlaybackController`] (once an animated asset is in), both UI
//! front-ends and the presentation mode.
//!
//! # Lifecycle
//!
//! 1. Create with [`Viewer::new`]
//! 2. Hand the [`LoadReporter`](crate::assets::LoadReporter) of a
//!    [`LoadChannel`] to the host loader, then [`Viewer::poll`] it every frame
//! 3. Route desktop button clicks to [`Viewer::click`]
//! 4. Call [`Viewer::frame`] once per rendered frame
//!
//! # Frame ordering
//!
//! Within [`Viewer::frame`]: VR hover → trigger → `select` → `tick` → pose
//! apply. The per-frame entry points return no errors; rejected requests are
//! logged. [`Viewer::try_click`] reports why a click was rejected.
//!
//! ```rust,ignore
//! let (reporter, channel) = LoadChannel::open("60kw Generator Ver 1.fbx");
//! host_loader.spawn(reporter);
//!
//! let mut viewer = Viewer::new(ClipCatalog::builtin(), ViewerSettings::default());
//! loop {
//!     viewer.poll(&channel);
//!     viewer.frame(timer.dt_seconds(), &mut xr_input, &mut scene);
//! }
//! ```

use smallvec::SmallVec;

use crate::animation::PoseTarget;
use crate::assets::{LoadChannel, LoadEvent, LoadProgress, LoadedAsset, MaterialSlot};
use crate::catalog::ClipCatalog;
use crate::errors::{AssetLoadError, Result, ViewerError};
use crate::input::XrInput;
use crate::playback::{PlaybackController, PlaybackState, SelectionChange, SelectionObserver};
use crate::scene::{Environment, Framing, PresentationMode};
use crate::settings::ViewerSettings;
use crate::ui::{DesktopPanel, VrPanel};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Pending,
    Ready,
    Failed(AssetLoadError),
}

pub struct Viewer {
    settings: ViewerSettings,
    catalog: ClipCatalog,

    load_state: LoadState,
    progress: Option<LoadProgress>,
    asset_name: Option<String>,
    materials: Vec<MaterialSlot>,
    framing: Option<Framing>,

    controller: Option<PlaybackController>,
    desktop: DesktopPanel,
    vr_panel: Option<VrPanel>,

    mode: PresentationMode,
    environment: Environment,
}

impl Viewer {
    #[must_use]
    pub fn new(catalog: ClipCatalog, settings: ViewerSettings) -> Self {
        let environment = Environment::new(settings.background_color);
        Self {
            settings,
            catalog,
            load_state: LoadState::Pending,
            progress: None,
            asset_name: None,
            materials: Vec::new(),
            framing: None,
            controller: None,
            desktop: DesktopPanel::new(),
            vr_panel: None,
            mode: PresentationMode::Desktop,
            environment,
        }
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Drains pending load events. Returns how many were handled.
    ///
    /// A reporter dropped without a result fails the load.
    pub fn poll(&mut self, channel: &LoadChannel) -> usize {
        let mut handled = 0;
        for event in channel.drain() {
            self.handle_load_event(event);
            handled += 1;
        }

        if self.load_state == LoadState::Pending && channel.is_closed() {
            self.handle_load_event(LoadEvent::Failed(AssetLoadError::Abandoned {
                path: channel.path().to_string(),
            }));
        }
        handled
    }

    pub fn handle_load_event(&mut self, event: LoadEvent) {
        if self.load_state != LoadState::Pending {
            log::debug!("Load already resolved; ignoring {event:?}");
            return;
        }

        match event {
            LoadEvent::Progress(progress) => {
                if let Some(percent) = progress.percent() {
                    log::info!("Loading: {percent:.0}%");
                }
                self.progress = Some(progress);
            }
            LoadEvent::Loaded(asset) => self.on_loaded(*asset),
            LoadEvent::Failed(err) => {
                log::error!("Error loading model: {err}");
                self.load_state = LoadState::Failed(err);
            }
        }
    }

    fn on_loaded(&mut self, asset: LoadedAsset) {
        let bounds = asset.bounds();
        let LoadedAsset {
            name,
            mut materials,
            animations,
            ..
        } = asset;

        let retextured = self.settings.textures.apply(&mut materials);
        log::info!(
            "Loaded '{name}': {} material(s), {retextured} retextured, {} animation track(s)",
            materials.len(),
            animations.len()
        );

        self.framing = bounds.map(|b| Framing::fit(&b));
        let panel_bounds = match (bounds, self.framing) {
            (Some(b), Some(framing)) => framing.framed_bounds(&b),
            _ => Default::default(),
        };

        match animations.first() {
            Some(track) => match PlaybackController::initialize(track, &self.catalog) {
                Ok(controller) => {
                    self.desktop = DesktopPanel::from_catalog(&self.catalog);
                    self.vr_panel = Some(VrPanel::layout(
                        &panel_bounds,
                        &self.catalog,
                        &self.settings.panel,
                        self.settings.palette,
                    ));
                    self.controller = Some(controller);
                }
                Err(err) => {
                    log::error!("Clip catalog could not be built: {err}");
                    self.desktop = DesktopPanel::empty();
                }
            },
            None => {
                log::warn!("'{name}' has no animations");
                self.desktop = DesktopPanel::empty();
            }
        }

        self.asset_name = Some(name);
        self.materials = materials;
        self.load_state = LoadState::Ready;
    }

    // ========================================================================
    // Interaction
    // ========================================================================

    /// Desktop button click. Returns whether the selection changed.
    pub fn click(&mut self, index: usize) -> bool {
        match self.try_click(index) {
            Ok(change) => change.is_some(),
            Err(err) => {
                log::warn!("Ignoring click: {err}");
                false
            }
        }
    }

    /// Desktop button click, reporting why a rejected click did nothing.
    pub fn try_click(&mut self, index: usize) -> Result<Option<SelectionChange>> {
        match self.desktop.click(index) {
            Some(index) => self.try_select(index),
            None if self.controller.is_none() => Err(Self::missing_controller(&self.load_state)),
            None => Err(ViewerError::IndexOutOfRange {
                index,
                len: self.desktop.buttons().len(),
            }),
        }
    }

    /// Single entry point shared by both front-ends.
    fn try_select(&mut self, index: usize) -> Result<Option<SelectionChange>> {
        let Some(controller) = self.controller.as_mut() else {
            return Err(Self::missing_controller(&self.load_state));
        };

        let mut observers: SmallVec<[&mut dyn SelectionObserver; 2]> = SmallVec::new();
        observers.push(&mut self.desktop);
        if let Some(panel) = self.vr_panel.as_mut() {
            observers.push(panel);
        }

        controller.try_select_and_notify(index, &mut observers)
    }

    /// Rejection reason while there is no controller.
    fn missing_controller(load_state: &LoadState) -> ViewerError {
        match load_state {
            LoadState::Ready => ViewerError::NoClips,
            LoadState::Pending | LoadState::Failed(_) => ViewerError::NotLoaded,
        }
    }

    /// Runs one frame: VR picking, then playback, then pose output.
    pub fn frame<T: PoseTarget + ?Sized>(&mut self, dt: f32, input: &mut XrInput, target: &mut T) {
        if self.mode == PresentationMode::Immersive {
            self.update_vr(input);
        }

        if let Some(controller) = self.controller.as_mut() {
            controller.tick(dt);
            controller.apply(target);
        }

        input.end_frame();
    }

    fn update_vr(&mut self, input: &XrInput) {
        let state = self.playback_state();
        let Some(panel) = self.vr_panel.as_mut() else {
            if input.select_pressed() {
                log::warn!("Ignoring trigger: {}", Self::missing_controller(&self.load_state));
            }
            return;
        };

        panel.update_hover(&input.rays(), &state);

        if input.select_pressed()
            && let Some(index) = panel.trigger()
            && let Err(err) = self.try_select(index)
        {
            log::warn!("Ignoring trigger: {err}");
        }
    }

    // ========================================================================
    // Presentation
    // ========================================================================

    pub fn session_started(&mut self) {
        self.set_mode(PresentationMode::Immersive);
    }

    pub fn session_ended(&mut self) {
        let state = self.playback_state();
        if let Some(panel) = self.vr_panel.as_mut() {
            panel.clear_hover(&state);
        }
        self.set_mode(PresentationMode::Desktop);
    }

    fn set_mode(&mut self, mode: PresentationMode) {
        if self.mode != mode {
            log::info!("Presentation mode: {:?} -> {mode:?}", self.mode);
        }
        self.mode = mode;
        self.environment.apply_mode(mode);
    }

    // ========================================================================
    // Queries
    // ========================================================================

    #[must_use]
    pub fn load_state(&self) -> &LoadState {
        &self.load_state
    }

    #[must_use]
    pub fn progress(&self) -> Option<LoadProgress> {
        self.progress
    }

    #[must_use]
    pub fn asset_name(&self) -> Option<&str> {
        self.asset_name.as_deref()
    }

    /// Copy of the playback state; idle until an animated asset is loaded.
    #[must_use]
    pub fn playback_state(&self) -> PlaybackState {
        self.controller
            .as_ref()
            .map(|c| *c.state())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn controller(&self) -> Option<&PlaybackController> {
        self.controller.as_ref()
    }

    #[must_use]
    pub fn desktop(&self) -> &DesktopPanel {
        &self.desktop
    }

    #[must_use]
    pub fn vr_panel(&self) -> Option<&VrPanel> {
        self.vr_panel.as_ref()
    }

    #[must_use]
    pub fn mode(&self) -> PresentationMode {
        self.mode
    }

    #[must_use]
    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    #[must_use]
    pub fn framing(&self) -> Option<&Framing> {
        self.framing.as_ref()
    }

    #[must_use]
    pub fn materials(&self) -> &[MaterialSlot] {
        &self.materials
    }

    #[must_use]
    pub fn catalog(&self) -> &ClipCatalog {
        &self.catalog
    }

    #[must_use]
    pub fn settings(&self) -> &ViewerSettings {
        &self.settings
    }
}
