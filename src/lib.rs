//=========================================================================
// Prism Engine — Library Root
//
// This crate defines the public API surface of the Prism engine, a small
// 2D game framework.
//
// Responsibilities:
// - Expose the engine facade (`Engine`, `EngineBuilder`)
// - Expose scenes, input, drawing and utility types under `core`
// - Keep the winit/softbuffer integration (`platform`) behind the
//   `Surface` contract
//
// Typical usage:
// ```no_run
// use prism_engine::prelude::*;
//
// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
// enum GameScene { Main }
// impl SceneKey for GameScene {}
//
// fn main() -> Result<(), StartupError> {
//     EngineBuilder::<GameScene>::new().build()?.run();
//     Ok(())
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the platform-independent engine systems. Application
// code mostly goes through the prelude.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the winit window, event pump and softbuffer
// presenter. Only `WinitSurface` and `IconError` are re-exported.
//
// `engine` defines the builder and the game loop.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder, LoopState, DEFAULT_FRAME_DELAY};
pub use platform::{IconError, WinitSurface};
