use crate::animation::action::AnimationAction;
use crate::animation::binding::PoseTarget;

/// Index of an action registered with an [`AnimationMixer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(usize);

/// Owns a set of actions, advances their clocks and writes the poses of the
/// contributing ones into a [`PoseTarget`].
#[derive(Debug, Default)]
pub struct AnimationMixer {
    actions: Vec<AnimationAction>,
}

impl AnimationMixer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    pub fn add_action(&mut self, action: AnimationAction) -> ActionId {
        self.actions.push(action);
        ActionId(self.actions.len() - 1)
    }

    #[must_use]
    pub fn action(&self, id: ActionId) -> Option<&AnimationAction> {
        self.actions.get(id.0)
    }

    pub fn action_mut(&mut self, id: ActionId) -> Option<&mut AnimationAction> {
        self.actions.get_mut(id.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn stop_all(&mut self) {
        for action in &mut self.actions {
            action.stop();
        }
    }

    /// Number of actions currently scheduled.
    #[must_use]
    pub fn running_count(&self) -> usize {
        self.actions.iter().filter(|a| a.is_running()).count()
    }

    pub fn update(&mut self, dt: f32) {
        for action in &mut self.actions {
            action.update(dt);
        }
    }

    /// Samples every contributing action and pushes the values into `target`.
    pub fn apply<T: PoseTarget + ?Sized>(&self, target: &mut T) {
        for action in self.actions.iter().filter(|a| a.contributes()) {
            for (track_index, track) in action.clip().tracks.iter().enumerate() {
                if let Some(value) = action.sample_track(track_index) {
                    target.apply(&track.meta.node_name, track.meta.target, value);
                }
            }
        }
    }
}
