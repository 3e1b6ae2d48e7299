//=========================================================================
// Platform Subsystem
//
// Bridges Winit (OS-level events) with the logic thread via channels.
//
// Architecture:
// ```text
//  Main Thread:                     Logic Thread:
//  ┌──────────────────────────┐    ┌──────────────────────┐
//  │  Winit Event Loop        │    │  EventCollector      │
//  │   ↓                      │    │   ↓                  │
//  │  InputProcessor          │    │  GameFlowController  │
//  │   └─ Winit → KeyCode     │    │   ├─ SceneController │
//  │   ↓                      │    │   └─ transitions     │
//  │  InputBuffer             │    │   ↓                  │
//  │   ↓                      │    │  RenderSnapshot      │
//  │  RedrawRequested         │    └──────────────────────┘
//  │   ├─ flush ──────────────┼──────────→ PlatformEvent
//  │   └─ present ←───────────┼────────── RenderSnapshot
//  └──────────────────────────┘
// ```
//
// Frame Boundary: RedrawRequested
//   → All buffered input sent in one message
//   → Latest snapshot (if any) presented, older ones skipped
//   → Empty buffers are not sent
//
// Notes:
// Losing focus is forwarded as `InputEvent::FocusLost` so the logic
// thread can release held keys; the OS will not deliver the key-ups.
// Escape closes the window the same way the close button does.
// If the logic thread is gone the platform logs and keeps running so
// the window can still be closed.
//
//=========================================================================

//=== Submodules ==========================================================

mod input_buffer;
mod input_processor;
mod presenter;

//=== External Crates =====================================================

use crossbeam_channel::{Receiver, Sender};
use log::*;
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes},
};

//=== Internal Imports ====================================================

use crate::core::input::InputEvent;
use crate::core::platform_bridge::{PlatformError, PlatformEvent};
use crate::core::snapshot::RenderSnapshot;
use input_buffer::InputBuffer;
use input_processor::InputProcessor;
use presenter::TitlePresenter;

//=== WindowSettings ======================================================

/// Initial window title and logical size.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

//=== Platform ============================================================

/// Window manager, input aggregator and snapshot presenter.
///
/// Runs on the main thread (Winit requirement on macOS/iOS). Not Send;
/// all communication with the logic thread goes through the channels.
pub(crate) struct Platform {
    /// OS window handle (None until `resumed()` called).
    window: Option<Window>,

    settings: WindowSettings,

    /// Buffers key events until the frame boundary.
    buffer: InputBuffer,

    event_sender: Sender<PlatformEvent>,
    snapshot_receiver: Receiver<RenderSnapshot>,

    input_processor: InputProcessor,
    presenter: TitlePresenter,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// Creates the platform. The window is created lazily in `resumed()`.
    pub fn new(
        settings: WindowSettings,
        event_sender: Sender<PlatformEvent>,
        snapshot_receiver: Receiver<RenderSnapshot>,
    ) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        let presenter = TitlePresenter::new(settings.title.clone());
        Self {
            window: None,
            settings,
            buffer: InputBuffer::new(),
            event_sender,
            snapshot_receiver,
            input_processor: InputProcessor::new(),
            presenter,
        }
    }

    //--- Execution --------------------------------------------------------

    /// Runs the Winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError`] if the event loop cannot be created or
    /// fails while running.
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread on platforms that require it.
    pub fn run(mut self) -> Result<(), PlatformError> {
        debug!(target: "platform", "Starting Winit event loop");

        let event_loop = EventLoop::new().map_err(PlatformError::EventLoopCreation)?;

        event_loop
            .run_app(&mut self)
            .map_err(PlatformError::EventLoopExecution)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Sends buffered key events to the logic thread.
    ///
    /// A disconnected channel drops the events with a warning.
    fn flush_input_buffer(&mut self) {
        if let Some(events) = self.buffer.drain() {
            let count = events.len();
            trace!(target: "platform::input", "Flushing {} input events", count);

            if self.event_sender.send(PlatformEvent::Inputs(events)).is_err() {
                warn!(
                    target: "platform::input",
                    "Channel disconnected, dropping {} events",
                    count
                );
            }
        }
    }

    /// Drains the snapshot channel, keeping only the newest.
    fn latest_snapshot(&self) -> Option<RenderSnapshot> {
        self.snapshot_receiver.try_iter().last()
    }

    fn present_latest(&mut self) {
        let Some(snapshot) = self.latest_snapshot() else {
            return;
        };
        if let Some(window) = &self.window {
            self.presenter.present(window, &snapshot);
        }
    }

    fn send_window_closed(&self) {
        if self.event_sender.send(PlatformEvent::WindowClosed).is_err() {
            debug!(target: "platform", "Core thread already gone at shutdown");
        }
    }

    //--- Test Accessors ---------------------------------------------------

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Creates the window on startup (or mobile resume if it is missing).
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            debug!(target: "platform", "Window already exists (mobile resume?)");
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.settings.title.clone())
            .with_inner_size(LogicalSize::new(self.settings.width, self.settings.height))
            .with_resizable(false);

        match event_loop.create_window(attrs) {
            Ok(window) => {
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    window.inner_size().width,
                    window.inner_size().height,
                    window.scale_factor()
                );
                window.request_redraw();
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.send_window_closed();
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match &event {
            WindowEvent::CloseRequested => {
                info!(target: "platform", "Window close requested");
                self.send_window_closed();
                event_loop.exit();
            }

            WindowEvent::Focused(false) => {
                debug!(target: "platform::input", "Focus lost, releasing held keys");
                self.buffer.push(InputEvent::FocusLost);
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                if let Some(event) = self.input_processor.process_key_event(key_event) {
                    if event.is_quit_request() {
                        info!(target: "platform", "Escape pressed, closing window");
                        self.flush_input_buffer();
                        self.send_window_closed();
                        event_loop.exit();
                        return;
                    }
                    self.buffer.push(event);
                } else {
                    trace!(target: "platform::input", "Unmapped or repeated key ignored");
                }
            }

            WindowEvent::RedrawRequested => {
                self.flush_input_buffer();
                self.present_latest();

                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;
    use crate::core::scene::GameState;
    use crossbeam_channel::{bounded, unbounded};

    fn settings() -> WindowSettings {
        WindowSettings { title: "Test".into(), width: 800, height: 600 }
    }

    fn platform() -> (Platform, Receiver<PlatformEvent>, Sender<RenderSnapshot>) {
        let (event_tx, event_rx) = unbounded();
        let (snapshot_tx, snapshot_rx) = bounded(8);
        (Platform::new(settings(), event_tx, snapshot_rx), event_rx, snapshot_tx)
    }

    #[test]
    fn platform_creation() {
        let (platform, _rx, _tx) = platform();
        assert!(platform.window().is_none(), "Window should be created lazily");
    }

    #[test]
    fn flush_empty_buffer_is_noop() {
        let (mut platform, rx, _tx) = platform();
        platform.flush_input_buffer();
        assert!(rx.try_recv().is_err(), "No events should be sent for empty buffer");
    }

    #[test]
    fn flush_sends_buffered_events_in_order() {
        let (mut platform, rx, _tx) = platform();
        platform.buffer.push(InputEvent::KeyDown(KeyCode::KeyD));
        platform.buffer.push(InputEvent::FocusLost);

        platform.flush_input_buffer();

        match rx.try_recv() {
            Ok(PlatformEvent::Inputs(events)) => {
                assert_eq!(events, vec![InputEvent::KeyDown(KeyCode::KeyD), InputEvent::FocusLost]);
            }
            other => panic!("Expected Inputs event, got {:?}", other),
        }
    }

    #[test]
    fn flush_handles_disconnected_channel() {
        let (mut platform, rx, _tx) = platform();
        platform.buffer.push(InputEvent::KeyDown(KeyCode::Space));
        drop(rx);

        // Should not panic, just log warning
        platform.flush_input_buffer();
        assert!(platform.buffer.is_empty());
    }

    #[test]
    fn multiple_flushes_clear_buffer() {
        let (mut platform, rx, _tx) = platform();
        platform.buffer.push(InputEvent::KeyDown(KeyCode::KeyA));

        platform.flush_input_buffer();
        platform.flush_input_buffer();

        assert!(rx.try_recv().is_ok(), "First flush should send");
        assert!(rx.try_recv().is_err(), "Second flush should not send");
    }

    #[test]
    fn latest_snapshot_skips_stale_frames() {
        let (platform, _rx, tx) = platform();
        let old = RenderSnapshot { state: GameState::Room, transitioning: true, scene: None };
        let new = RenderSnapshot { state: GameState::Victory, transitioning: false, scene: None };
        tx.send(old).unwrap();
        tx.send(new).unwrap();

        assert_eq!(platform.latest_snapshot(), Some(new));
        assert_eq!(platform.latest_snapshot(), None);
    }

    #[test]
    fn window_closed_survives_disconnect() {
        let (platform, rx, _tx) = platform();
        drop(rx);
        platform.send_window_closed();
    }
}
