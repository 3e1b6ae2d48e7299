//=========================================================================
// Pixel Quest Engine
//
// Main entry point: wires the logic thread to the platform.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [Runtime]
//         │                          │
//         ├─ with_tps()              └─ spawns logic thread
//         ├─ with_channel_capacity()    runs platform
//         ├─ with_viewport()            blocks until exit
//         └─ with_title()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{bounded, Receiver, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::PlatformEvent;
use crate::core::scene::FlowConfig;
use crate::core::snapshot::RenderSnapshot;
use crate::core::CoreSystemsOrchestrator;
use crate::platform::{Platform, WindowSettings};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 62.5 (a 16 ms logic tick)
/// - **Channel capacity**: 128 messages per direction
/// - **Viewport**: 800×600
/// - **Title**: "Pixel Quest"
///
/// # Examples
///
/// ```no_run
/// use pixel_quest::EngineBuilder;
///
/// EngineBuilder::new()
///     .with_viewport(1024, 600)
///     .with_title("Pixel Quest (debug)")
///     .build()
///     .run();
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
    viewport: (u32, u32),
    title: String,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 62.5,
            channel_capacity: 128,
            viewport: (800, 600),
            title: "Pixel Quest".to_string(),
        }
    }

    /// Sets the logic tick rate.
    ///
    /// Every tick advances the simulation by `1 / tps` seconds, so
    /// movement speed is per tick and delays are counted in ticks.
    ///
    /// # Panics
    ///
    /// Panics if `tps` is not a positive finite number.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0 && tps.is_finite(), "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the capacity of both the input and the snapshot channel.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Sets the window size. The width also centres the outdoor camera.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "Viewport must be non-empty, got {}x{}", width, height);
        self.viewport = (width, height);
        self
    }

    /// Sets the window title prefix.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builds the engine. The room scene is mounted immediately.
    pub fn build(self) -> Engine {
        info!(
            "Building engine (TPS: {}, channel: {}, viewport: {}x{})",
            self.tps, self.channel_capacity, self.viewport.0, self.viewport.1
        );

        let flow_config = FlowConfig {
            viewport_width: self.viewport.0 as f32,
            ..FlowConfig::default()
        };

        Engine {
            orchestrator: CoreSystemsOrchestrator::new(flow_config),
            tps: self.tps,
            channel_capacity: self.channel_capacity,
            window: WindowSettings {
                title: self.title,
                width: self.viewport.0,
                height: self.viewport.1,
            },
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Game runtime. Create via [`EngineBuilder`].
///
/// ```text
/// Engine (Main Thread)
///   ├─► CoreSystemsOrchestrator (Logic Thread @ TPS)
///   │     └─► GameFlowController → SceneController
///   │
///   └─► Platform (Event Loop)
///         └─► Window, Input, Title presenter
///
/// Channels: PlatformEvent (in), RenderSnapshot (out)
/// ```
pub struct Engine {
    orchestrator: CoreSystemsOrchestrator,
    tps: f64,
    channel_capacity: usize,
    window: WindowSettings,
}

impl Engine {
    /// Starts the runtime and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Creates the input and snapshot channels
    /// 2. Spawns the logic thread at the configured TPS
    /// 3. Runs the platform event loop (blocks here)
    /// 4. On window close: logic thread receives `WindowClosed` and exits
    ///
    /// Platform errors and a panicked logic thread are logged, not
    /// propagated.
    pub fn run(self) {
        info!("Starting engine runtime (TPS: {})", self.tps);

        //--- 1. Create communication channels ----------------------------
        let (event_tx, event_rx): (Sender<PlatformEvent>, Receiver<PlatformEvent>) =
            bounded(self.channel_capacity);
        let (snapshot_tx, snapshot_rx): (Sender<RenderSnapshot>, Receiver<RenderSnapshot>) =
            bounded(self.channel_capacity);

        info!("Channels created (capacity: {})", self.channel_capacity);

        //--- 2. Spawn the core logic thread -------------------------------
        let core_handle = self.orchestrator.spawn_core_thread(event_rx, snapshot_tx, self.tps);
        info!("Core logic thread spawned");

        //--- 3. Launch the platform subsystem -----------------------------
        let platform = Platform::new(self.window, event_tx, snapshot_rx);
        info!("Platform initialized, entering event loop");

        if let Err(e) = platform.run() {
            error!("Platform error: {}", e);
        }

        info!("Platform event loop exited");

        //--- 4. Cleanup: Wait for logic thread to terminate --------------
        match core_handle.join() {
            Ok(()) => info!("Core thread terminated cleanly"),
            Err(e) => error!("Core thread panicked: {:?}", e),
        }

        info!("Engine shutdown complete");
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // EngineBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = EngineBuilder::new();
        assert_eq!(builder.tps, 62.5);
        assert_eq!(builder.channel_capacity, 128);
        assert_eq!(builder.viewport, (800, 600));
        assert_eq!(builder.title, "Pixel Quest");
    }

    #[test]
    fn default_tps_is_a_sixteen_ms_tick() {
        let builder = EngineBuilder::default();
        assert_eq!(1000.0 / builder.tps, 16.0);
    }

    #[test]
    fn builder_with_tps() {
        let builder = EngineBuilder::new().with_tps(120.0);
        assert_eq!(builder.tps, 120.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        EngineBuilder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_negative() {
        EngineBuilder::new().with_tps(-60.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_infinite() {
        EngineBuilder::new().with_tps(f64::INFINITY);
    }

    #[test]
    fn builder_with_channel_capacity() {
        let builder = EngineBuilder::new().with_channel_capacity(256);
        assert_eq!(builder.channel_capacity, 256);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        EngineBuilder::new().with_channel_capacity(0);
    }

    #[test]
    fn builder_with_viewport_and_title() {
        let builder = EngineBuilder::new().with_viewport(1024, 576).with_title("Quest");
        assert_eq!(builder.viewport, (1024, 576));
        assert_eq!(builder.title, "Quest");
    }

    #[test]
    #[should_panic(expected = "Viewport must be non-empty")]
    fn builder_with_viewport_panics_on_zero_width() {
        EngineBuilder::new().with_viewport(0, 600);
    }

    #[test]
    fn build_carries_window_settings() {
        let engine = EngineBuilder::new()
            .with_viewport(640, 480)
            .with_title("Quest")
            .with_tps(30.0)
            .build();

        assert_eq!(engine.tps, 30.0);
        assert_eq!(
            engine.window,
            WindowSettings { title: "Quest".into(), width: 640, height: 480 }
        );
    }
}
