//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit) with the logic thread.
//
// This module defines the contract between the platform implementation
// and the game core, so the window backend can change without touching
// gameplay code.
//
// Components:
// - `interface`: Event types and error definitions (the contract)
// - `event_collector`: Core-side event collection per tick
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
pub(crate) use interface::{PlatformError, PlatformEvent};
