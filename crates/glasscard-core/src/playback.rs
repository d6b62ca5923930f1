//! Playback State Machine
//!
//! Two states, `Idle` and `Playing`, with no guards and no terminal state.
//! The controller is the only place a [`PlaybackState`] changes.
//!
//! ## Ordering
//!
//! `toggle()` commits the new status *before* calling the listener, so a
//! listener that panics or re-reads the controller always observes the
//! committed state.

use std::fmt;

use serde::Serialize;

use crate::a11y::{Activation, ActivationTarget};

/// Lowest progress value
pub const PROGRESS_MIN: u8 = 0;
/// Highest progress value
pub const PROGRESS_MAX: u8 = 100;

/// Whether the player is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PlaybackStatus {
    #[default]
    Idle,
    Playing,
}

impl PlaybackStatus {
    pub fn is_playing(&self) -> bool {
        matches!(self, PlaybackStatus::Playing)
    }

    /// The other state
    pub fn toggled(&self) -> Self {
        match self {
            PlaybackStatus::Idle => PlaybackStatus::Playing,
            PlaybackStatus::Playing => PlaybackStatus::Idle,
        }
    }
}

impl fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackStatus::Idle => write!(f, "idle"),
            PlaybackStatus::Playing => write!(f, "playing"),
        }
    }
}

/// Status and progress of one player card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    status: PlaybackStatus,
    progress_percent: u8,
}

impl PlaybackState {
    /// Idle state with `progress` clamped into 0..=100
    pub fn new(progress: i32) -> Self {
        Self {
            status: PlaybackStatus::Idle,
            progress_percent: clamp_progress(progress),
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn progress_percent(&self) -> u8 {
        self.progress_percent
    }
}

fn clamp_progress(value: i32) -> u8 {
    value.clamp(PROGRESS_MIN as i32, PROGRESS_MAX as i32) as u8
}

type StatusListener = Box<dyn FnMut(PlaybackStatus)>;

/// Owns a [`PlaybackState`] and notifies a listener on every toggle
pub struct PlaybackController {
    state: PlaybackState,
    listener: Option<StatusListener>,
}

impl PlaybackController {
    /// Idle controller starting at `initial_progress` (clamped)
    pub fn new(initial_progress: i32) -> Self {
        Self {
            state: PlaybackState::new(initial_progress),
            listener: None,
        }
    }

    /// Start in `Playing` instead of `Idle`. Does not notify.
    pub fn initially_playing(mut self, playing: bool) -> Self {
        self.state.status = if playing {
            PlaybackStatus::Playing
        } else {
            PlaybackStatus::Idle
        };
        self
    }

    /// Attach the status-change listener
    pub fn with_listener<F>(mut self, listener: F) -> Self
    where
        F: FnMut(PlaybackStatus) + 'static,
    {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn status(&self) -> PlaybackStatus {
        self.state.status
    }

    pub fn progress_percent(&self) -> u8 {
        self.state.progress_percent
    }

    /// Flip the status, then notify the listener with the new status.
    ///
    /// Always legal. Returns the new status.
    pub fn toggle(&mut self) -> PlaybackStatus {
        let next = self.state.status.toggled();
        self.state.status = next;
        tracing::debug!(status = %next, "playback toggled");

        if let Some(listener) = self.listener.as_mut() {
            listener(next);
        }
        next
    }

    /// Set progress, clamped into 0..=100. Leaves status alone and does not
    /// notify. Returns the stored value.
    pub fn set_progress(&mut self, value: i32) -> u8 {
        let clamped = clamp_progress(value);
        if clamped as i32 != value {
            tracing::debug!(requested = value, clamped, "progress clamped");
        }
        self.state.progress_percent = clamped;
        clamped
    }
}

impl ActivationTarget for PlaybackController {
    fn activate(&mut self, activation: Activation) {
        tracing::trace!(?activation, "player activated");
        self.toggle();
    }
}

impl fmt::Debug for PlaybackController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PlaybackController")
            .field("state", &self.state)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::panic::{catch_unwind, AssertUnwindSafe};
    use std::rc::Rc;

    fn recorded() -> (Rc<RefCell<Vec<PlaybackStatus>>>, impl FnMut(PlaybackStatus) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |status| sink.borrow_mut().push(status))
    }

    #[test]
    fn starts_idle_with_initial_progress() {
        let controller = PlaybackController::new(60);
        assert_eq!(controller.status(), PlaybackStatus::Idle);
        assert_eq!(controller.progress_percent(), 60);
    }

    #[test]
    fn can_start_playing() {
        let controller = PlaybackController::new(0).initially_playing(true);
        assert_eq!(controller.status(), PlaybackStatus::Playing);
    }

    #[test]
    fn progress_clamps() {
        let mut controller = PlaybackController::new(50);
        assert_eq!(controller.set_progress(-5), 0);
        assert_eq!(controller.progress_percent(), 0);
        assert_eq!(controller.set_progress(150), 100);
        assert_eq!(controller.progress_percent(), 100);
        assert_eq!(controller.set_progress(42), 42);
        assert_eq!(controller.progress_percent(), 42);
    }

    #[test]
    fn initial_progress_clamps() {
        assert_eq!(PlaybackController::new(-20).progress_percent(), 0);
        assert_eq!(PlaybackController::new(400).progress_percent(), 100);
    }

    #[test]
    fn toggle_pair_returns_to_idle_and_notifies_twice() {
        let (log, listener) = recorded();
        let mut controller = PlaybackController::new(60).with_listener(listener);

        assert_eq!(controller.toggle(), PlaybackStatus::Playing);
        assert_eq!(controller.toggle(), PlaybackStatus::Idle);

        assert_eq!(controller.status(), PlaybackStatus::Idle);
        assert_eq!(*log.borrow(), vec![PlaybackStatus::Playing, PlaybackStatus::Idle]);
    }

    #[test]
    fn set_progress_leaves_status_and_does_not_notify() {
        let (log, listener) = recorded();
        let mut controller = PlaybackController::new(60).with_listener(listener);
        controller.toggle();

        controller.set_progress(30);

        assert_eq!(controller.status(), PlaybackStatus::Playing);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn panicking_listener_cannot_corrupt_state() {
        let mut controller =
            PlaybackController::new(10).with_listener(|_| panic!("listener failure"));

        let result = catch_unwind(AssertUnwindSafe(|| controller.toggle()));

        assert!(result.is_err());
        assert_eq!(controller.status(), PlaybackStatus::Playing);
        assert_eq!(controller.progress_percent(), 10);
    }

    #[test]
    fn toggle_without_listener() {
        let mut controller = PlaybackController::new(0);
        assert_eq!(controller.toggle(), PlaybackStatus::Playing);
    }

    #[test]
    fn debug_hides_listener() {
        let controller = PlaybackController::new(5).with_listener(|_| {});
        let debug = format!("{:?}", controller);
        assert!(debug.contains("listener: true"));
    }
}
