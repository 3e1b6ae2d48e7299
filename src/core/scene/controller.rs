//=========================================================================
// Scene Controller
//=========================================================================
//
// Runs one scene's movement / trigger / camera loop.
//
// Per tick, in order:
//   held keys → MovementResolver → TriggerZone::evaluate() → camera
//   → walk cycle → due exit callbacks
//
// Room and outdoor are the same controller with a different
// `SceneConfig`. A controller only reacts to input and ticks between
// `start()` and `stop()`; `stop()` also cancels every pending exit, so a
// torn-down scene can never call back into the game flow.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, info};

//=== Internal Dependencies ===============================================

use crate::core::deferred_queue::DeferredQueue;
use crate::core::geometry::{BoundaryRect, Position};
use crate::core::input::{Direction, DirectionSet, InputTracker, KeyCode, KeyResponse};
use crate::core::movement::MovementResolver;
use crate::core::snapshot::SceneSnapshot;
use crate::core::trigger::TriggerZone;
use super::walk_cycle::WalkCycle;
use super::SceneKind;

//=== CameraConfig ========================================================

/// Horizontal follow camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub viewport_width: f32,
    pub max_offset: f32,
}

impl CameraConfig {
    /// Scroll that keeps the player centred, clamped to `[0, max_offset]`.
    pub fn offset_for(&self, x: f32) -> f32 {
        (x - self.viewport_width / 2.0).clamp(0.0, self.max_offset.max(0.0))
    }
}

//=== SceneConfig =========================================================

/// Everything that distinguishes one scene from another.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    pub kind: SceneKind,
    pub start: Position,
    pub facing: Direction,
    pub bounds: BoundaryRect,
    pub speed: f32,
    pub triggers: Vec<TriggerZone>,
    pub camera: Option<CameraConfig>,

    /// Stop player movement once any trigger has fired.
    pub freeze_on_trigger: bool,
}

//=== SceneController =====================================================

/// Callback invoked when a scene's trigger delay elapses.
pub type ExitCallback = Box<dyn FnMut() + Send>;

/// Owns one scene's player state and its input tracker.
pub struct SceneController {
    kind: SceneKind,
    bounds: BoundaryRect,
    resolver: MovementResolver,
    triggers: Vec<TriggerZone>,
    camera: Option<CameraConfig>,
    freeze_on_trigger: bool,

    input: InputTracker,
    position: Position,
    direction: Direction,
    moving: bool,
    camera_offset: f32,
    walk: WalkCycle,
    triggered: bool,

    pending_exits: DeferredQueue<&'static str>,
    on_exit: ExitCallback,
    active: bool,
}

impl SceneController {
    //--- Construction -----------------------------------------------------

    /// Builds a stopped scene from `config`.
    ///
    /// # Panics
    ///
    /// Panics if the start position lies outside the bounds.
    pub fn new(config: SceneConfig, on_exit: ExitCallback) -> Self {
        assert!(
            config.bounds.contains(config.start),
            "Start position {:?} is outside scene bounds {:?}",
            config.start,
            config.bounds
        );

        let camera_offset = config
            .camera
            .map_or(0.0, |camera| camera.offset_for(config.start.x));

        Self {
            kind: config.kind,
            bounds: config.bounds,
            resolver: MovementResolver::new(config.speed),
            triggers: config.triggers,
            camera: config.camera,
            freeze_on_trigger: config.freeze_on_trigger,
            input: InputTracker::new(),
            position: config.start,
            direction: config.facing,
            moving: false,
            camera_offset,
            walk: WalkCycle::new(),
            triggered: false,
            pending_exits: DeferredQueue::new(),
            on_exit,
            active: false,
        }
    }

    //--- Lifecycle --------------------------------------------------------

    /// Begins accepting input and ticks.
    pub fn start(&mut self) {
        if self.active {
            return;
        }
        self.active = true;
        info!("Scene {:?} started at ({}, {})", self.kind, self.position.x, self.position.y);
    }

    /// Stops the scene: releases held keys and cancels pending exits.
    pub fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        self.moving = false;
        self.input.clear();

        if !self.pending_exits.is_empty() {
            debug!(
                "Scene {:?} stopped with {} pending exit(s); cancelled",
                self.kind,
                self.pending_exits.len()
            );
        }
        self.pending_exits.cancel_all();
        info!("Scene {:?} stopped", self.kind);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    //--- Input ------------------------------------------------------------

    pub fn on_key_down(&mut self, key: KeyCode) -> KeyResponse {
        if !self.active {
            return KeyResponse::Ignored;
        }
        self.input.on_key_down(key)
    }

    pub fn on_key_up(&mut self, key: KeyCode) -> KeyResponse {
        if !self.active {
            return KeyResponse::Ignored;
        }
        self.input.on_key_up(key)
    }

    /// Releases all held keys (focus loss).
    pub fn release_all(&mut self) {
        self.input.clear();
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one tick of the scene.
    pub fn tick(&mut self, dt: Duration) {
        if !self.active {
            return;
        }

        // 1. Sample input
        let held = if self.freeze_on_trigger && self.triggered {
            DirectionSet::EMPTY
        } else {
            self.input.held()
        };

        // 2. Movement
        let step = self
            .resolver
            .step(held, self.position, self.direction, &self.bounds);
        self.position = step.position;
        self.direction = step.direction;
        self.moving = step.moving;

        // 3. Triggers
        for zone in &mut self.triggers {
            if zone.evaluate(step.position) {
                self.triggered = true;
                self.pending_exits.schedule(zone.delay(), zone.name());
            }
        }

        // 4. Camera
        if let Some(camera) = self.camera {
            self.camera_offset = camera.offset_for(self.position.x);
        }

        // 5. Animation
        self.walk.advance(self.moving, dt);

        // 6. Delayed exits
        for name in self.pending_exits.advance(dt) {
            debug!("Scene {:?} exiting via '{}'", self.kind, name);
            (self.on_exit)();
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn kind(&self) -> SceneKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn camera_offset(&self) -> f32 {
        self.camera_offset
    }

    pub fn triggers(&self) -> &[TriggerZone] {
        &self.triggers
    }

    /// Number of exits waiting on their presentation delay.
    pub fn pending_exits(&self) -> usize {
        self.pending_exits.len()
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            kind: self.kind,
            position: self.position,
            direction: self.direction,
            moving: self.moving,
            camera_offset: self.camera_offset,
            walk_frame: self.walk.frame(),
            triggered: self.triggered,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_position(&mut self, position: Position) {
        self.position = self.bounds.clamp(position);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
