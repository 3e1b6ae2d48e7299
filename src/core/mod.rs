//=========================================================================
// Core Systems Orchestrator
//
// Central coordinator for the game running on the logic (non-platform)
// thread.
//
// Responsibilities:
// - Own the GameFlowController and everything it mounts
// - Receive platform input via the channel once per tick
// - Maintain deterministic pacing using a fixed tick rate (TPS)
// - Publish a RenderSnapshot after every tick
//
// Notes:
// The orchestrator runs independently from the platform layer. Game
// state never leaves the logic thread; the platform only sees input
// going in and snapshots coming out. The simulation always advances by
// the nominal tick length, so timings are measured in ticks regardless
// of how long a tick actually took.
//
//=========================================================================

//=== Standard Library Imports ============================================
use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================
use crossbeam_channel::{Receiver, Sender, TrySendError};
use log::{info, trace, warn};

//=== Public Modules ======================================================
pub mod deferred_queue;
pub mod geometry;
pub mod input;
pub mod movement;
pub mod scene;
pub mod snapshot;
pub mod trigger;

pub(crate) mod platform_bridge;

//=== Internal Modules ====================================================
use input::InputEvent;
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use scene::{FlowConfig, GameFlowController};
use snapshot::RenderSnapshot;

//=== CoreSystemsOrchestrator =============================================
//
// Owns the game flow and drives it at a fixed rate.
//
pub(crate) struct CoreSystemsOrchestrator {
    flow: GameFlowController,
}

impl CoreSystemsOrchestrator {
    //--- Construction -----------------------------------------------------
    //
    // Builds the game flow (mounting the first scene) but does not yet
    // start the logic thread.
    //
    pub fn new(config: FlowConfig) -> Self {
        Self {
            flow: GameFlowController::new(config),
        }
    }

    //--- spawn_core_thread() ---------------------------------------------
    //
    // Spawns the logic thread ticking the game at `tps`.
    //
    // Each tick:
    //  1. Collects input events from the platform
    //  2. Routes input and advances the game flow by one tick
    //  3. Publishes a snapshot for the renderer
    //  4. Sleeps to maintain fixed pacing
    //  5. Exits cleanly when the window closes or the channel drops
    //
    pub fn spawn_core_thread(
        self,
        receiver: Receiver<PlatformEvent>,
        snapshots: Sender<RenderSnapshot>,
        tps: f64,
    ) -> thread::JoinHandle<()> {
        let tick_duration = Duration::from_secs_f64(1.0 / tps);

        thread::spawn(move || {
            let mut flow = self.flow;
            let mut collector = EventCollector::new(receiver);
            let mut renderer_connected = true;

            loop {
                let tick_start = Instant::now();

                //--- Step 1: Gather platform events ------------------------
                if collector.collect_frame() == TickControl::Exit {
                    info!("Core thread exiting.");
                    break;
                }

                //--- Step 2: Update game flow ------------------------------
                let snapshot = Self::run_tick(&mut flow, collector.events(), tick_duration);

                //--- Step 3: Publish snapshot ------------------------------
                match snapshots.try_send(snapshot) {
                    Ok(()) => {}
                    Err(TrySendError::Full(_)) => {
                        trace!("Renderer behind; snapshot dropped");
                    }
                    Err(TrySendError::Disconnected(_)) => {
                        if renderer_connected {
                            warn!("Snapshot channel disconnected; renderer will not update");
                            renderer_connected = false;
                        }
                    }
                }

                //--- Step 4: Maintain deterministic pacing ----------------
                let elapsed = tick_start.elapsed();
                if elapsed < tick_duration {
                    thread::sleep(tick_duration - elapsed);
                }
            }
        })
    }

    //--- run_tick() -------------------------------------------------------
    //
    // One logical tick: input first, then the simulation step.
    //
    fn run_tick(flow: &mut GameFlowController, events: &[InputEvent], dt: Duration) -> RenderSnapshot {
        for event in events {
            let response = flow.handle_input(event);
            trace!("Input {:?} -> {:?}", event, response);
        }

        flow.tick(dt);
        flow.snapshot()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
