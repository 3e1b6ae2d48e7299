//=========================================================================
// Pixel Quest: Library Root
//
// Public API surface of the game.
//
// Responsibilities:
// - Expose the runtime entry point (`EngineBuilder` / `Engine`)
// - Expose the deterministic game core (`core`) for embedding and tests
// - Keep the winit platform layer private
//
// Typical usage:
// ```no_run
// use pixel_quest::EngineBuilder;
//
// fn main() {
//     EngineBuilder::new().build().run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the movement, trigger and scene-flow logic. None of it
// depends on a window, so it can be driven tick by tick from tests.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` owns the window and the winit event loop.
// `engine` wires the platform to the logic thread.
//
mod platform;
mod engine;

//--- Public Exports ------------------------------------------------------
pub use engine::{Engine, EngineBuilder};
