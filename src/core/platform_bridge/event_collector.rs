//=========================================================================
// Event Collector
//=========================================================================
//
// Platform event collector with bounded polling and shutdown detection.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → events → TickControl
//
// Bounded polling prevents a flood of input from starving the tick.
// Pacing is left to the orchestrator; the collector never sleeps.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::event::InputEvent;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Collects platform events into one ordered list per tick.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    events: Vec<InputEvent>,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            events: Vec::with_capacity(16),
        }
    }

    /// Collects pending platform events (bounded to prevent starvation).
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        const MAX_MESSAGES_PER_FRAME: usize = 100;

        self.events.clear();
        let mut drained = 0;

        while drained < MAX_MESSAGES_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(PlatformEvent::Inputs(batch)) => {
                    self.events.extend(batch);
                    drained += 1;
                }
                Ok(PlatformEvent::WindowClosed) => {
                    info!("Window closed; stopping logic thread");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Disconnected) => {
                    info!("Platform channel disconnected; stopping logic thread");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= MAX_MESSAGES_PER_FRAME {
            warn!("Event queue backlog: drained {} messages this frame", drained);
        }

        TickControl::Continue
    }

    /// Input events collected by the last `collect_frame()`.
    pub(crate) fn events(&self) -> &[InputEvent] {
        &self.events
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
