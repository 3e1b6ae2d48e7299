//=========================================================================
// Game Flow Controller
//=========================================================================
//
// Top-level state machine sequencing the scenes.
//
//   Room ──door──> Outdoor ──companion──> Victory ──restart──> Room
//
// Every transition unmounts the current scene first, waits the
// transition delay with nothing mounted (loading screen), then mounts
// the next scene with a fresh set of trigger zones. Only one scene, and
// therefore one input tracker and one set of pending exits, exists at
// any time.
//
// The controller also tracks which movement keys are physically down,
// including during the loading screen, and presses them into each newly
// mounted scene. A key held through a door keeps walking on the other
// side.
//
// Scene exits arrive over a channel tagged with the epoch of the scene
// that sent them. Signals from a scene that is no longer mounted are
// dropped.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::deferred_queue::DeferredQueue;
use crate::core::input::{InputEvent, InputTracker, KeyResponse};
use crate::core::snapshot::RenderSnapshot;
use super::controller::{SceneConfig, SceneController};
use super::SceneKind;

//=== GameState ===========================================================

/// Which screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Room,
    Outdoor,
    Victory,
}

impl GameState {
    /// Scene mounted for this state, if any.
    pub fn scene_kind(self) -> Option<SceneKind> {
        match self {
            Self::Room => Some(SceneKind::Room),
            Self::Outdoor => Some(SceneKind::Outdoor),
            Self::Victory => None,
        }
    }
}

impl SceneKind {
    /// State entered when this scene's exit trigger completes.
    pub fn exit_state(self) -> GameState {
        match self {
            Self::Room => GameState::Outdoor,
            Self::Outdoor => GameState::Victory,
        }
    }
}

//=== FlowConfig ==========================================================

/// Tunables for the game flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowConfig {
    /// Width of the visible area; centres the outdoor camera.
    pub viewport_width: f32,

    /// Loading-screen time between unmounting one scene and mounting the next.
    ///
    /// Counted in ticks from the tick that starts the transition, which
    /// already counts one tick towards it: 500 ms at 16 ms/tick mounts on
    /// the 32nd tick, after 31 loading-screen snapshots.
    pub transition_delay: Duration,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            viewport_width: 800.0,
            transition_delay: Duration::from_millis(500),
        }
    }
}

//=== SceneExit ===========================================================

/// Sent by a scene's exit callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SceneExit {
    from: SceneKind,
    epoch: u64,
}

//=== GameFlowController ==================================================

/// Owns the game state and the single mounted scene.
pub struct GameFlowController {
    config: FlowConfig,
    state: GameState,
    scene: Option<SceneController>,
    epoch: u64,

    /// Movement keys physically held, independent of the mounted scene.
    physical_keys: InputTracker,

    exit_sender: Sender<SceneExit>,
    exit_receiver: Receiver<SceneExit>,

    transition: DeferredQueue<GameState>,
    transitioning: bool,
}

impl GameFlowController {
    //--- Construction -----------------------------------------------------

    /// Creates the controller and mounts the room.
    pub fn new(config: FlowConfig) -> Self {
        let (exit_sender, exit_receiver) = unbounded();

        let mut controller = Self {
            config,
            state: GameState::Room,
            scene: None,
            epoch: 0,
            physical_keys: InputTracker::new(),
            exit_sender,
            exit_receiver,
            transition: DeferredQueue::new(),
            transitioning: false,
        };
        controller.mount_current();
        controller
    }

    //--- Input ------------------------------------------------------------

    /// Routes an input event to the mounted scene or the victory screen.
    ///
    /// Returns `Consumed` when the key had a gameplay effect and the host
    /// should suppress its default handling.
    pub fn handle_input(&mut self, event: &InputEvent) -> KeyResponse {
        match *event {
            InputEvent::KeyDown(key) => {
                self.physical_keys.on_key_down(key);
            }
            InputEvent::KeyUp(key) => {
                self.physical_keys.on_key_up(key);
            }
            InputEvent::FocusLost => self.physical_keys.clear(),
        }

        if let Some(scene) = self.scene.as_mut() {
            return match *event {
                InputEvent::KeyDown(key) => scene.on_key_down(key),
                InputEvent::KeyUp(key) => scene.on_key_up(key),
                InputEvent::FocusLost => {
                    scene.release_all();
                    KeyResponse::Ignored
                }
            };
        }

        // No scene mounted: loading screen or victory screen
        match *event {
            InputEvent::KeyDown(key)
                if key.is_confirm() && self.state == GameState::Victory && self.restart() =>
            {
                KeyResponse::Consumed
            }
            _ => KeyResponse::Ignored,
        }
    }

    /// Starts the transition back to the room. Only valid on the victory
    /// screen; returns `false` if ignored.
    pub fn restart(&mut self) -> bool {
        if self.state != GameState::Victory {
            debug!("Restart ignored in state {:?}", self.state);
            return false;
        }
        self.begin_transition(GameState::Room)
    }

    //--- Update Loop ------------------------------------------------------

    /// Advances the game by one tick.
    ///
    /// 1. Ticks the mounted scene (may fire its exit callback)
    /// 2. Handles exit signals
    /// 3. Advances a pending transition
    pub fn tick(&mut self, dt: Duration) {
        if let Some(scene) = self.scene.as_mut() {
            scene.tick(dt);
        }

        self.process_exits();

        if self.transitioning {
            for target in self.transition.advance(dt) {
                self.complete_transition(target);
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// The mounted scene, `None` while transitioning or on victory.
    pub fn scene(&self) -> Option<&SceneController> {
        self.scene.as_ref()
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            state: self.state,
            transitioning: self.transitioning,
            scene: self.scene.as_ref().map(SceneController::snapshot),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_exits(&mut self) {
        while let Ok(exit) = self.exit_receiver.try_recv() {
            let current = self.scene.as_ref().map(SceneController::kind);

            if exit.epoch != self.epoch || current != Some(exit.from) {
                warn!(
                    "Dropping stale exit from {:?} (epoch {}, current {})",
                    exit.from, exit.epoch, self.epoch
                );
                continue;
            }

            self.begin_transition(exit.from.exit_state());
        }
    }

    fn begin_transition(&mut self, target: GameState) -> bool {
        if self.transitioning {
            debug!("Transition to {:?} ignored; already transitioning", target);
            return false;
        }

        info!("Transition {:?} -> {:?}", self.state, target);
        self.unmount();
        self.transitioning = true;
        self.transition.schedule(self.config.transition_delay, target);
        true
    }

    fn complete_transition(&mut self, target: GameState) {
        self.state = target;
        self.transitioning = false;
        info!("Entered {:?}", target);
        self.mount_current();
    }

    fn mount_current(&mut self) {
        let Some(kind) = self.state.scene_kind() else {
            return;
        };

        self.epoch += 1;
        let epoch = self.epoch;
        let sender = self.exit_sender.clone();

        let on_exit = Box::new(move || {
            if sender.send(SceneExit { from: kind, epoch }).is_err() {
                warn!("Exit from {:?} dropped; flow controller is gone", kind);
            }
        });

        let config = match kind {
            SceneKind::Room => SceneConfig::room(),
            SceneKind::Outdoor => SceneConfig::outdoor(self.config.viewport_width),
        };

        let mut scene = SceneController::new(config, on_exit);
        scene.start();
        for key in self.physical_keys.keys() {
            scene.on_key_down(key);
        }
        debug!(
            "Mounted {:?} (epoch {}, {} key(s) held)",
            kind,
            epoch,
            self.physical_keys.keys().count()
        );
        self.scene = Some(scene);
    }

    fn unmount(&mut self) {
        if let Some(mut scene) = self.scene.take() {
            scene.stop();
            debug!("Unmounted {:?} (epoch {})", scene.kind(), self.epoch);
        }
    }

    #[cfg(test)]
    fn scene_mut(&mut self) -> Option<&mut SceneController> {
        self.scene.as_mut()
    }
}

impl Default for GameFlowController {
    fn default() -> Self {
        Self::new(FlowConfig::default())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
