//=========================================================================
// Core Systems
//
// Platform-independent building blocks of the engine.
//
// Responsibilities:
// - Scene registry, lazy scene slots and transition requests (`scene`)
// - Keyboard sampling with edge detection (`input`)
// - Drawing contract, software canvas, colors and textures (`graphics`)
// - Vector math (`math`)
// - Startup configuration (`config`)
// - Signal and surface contract with the platform layer (`platform_bridge`)
// - Resource directory lookup and text file I/O (`resources`, `io`)
//
// Notes:
// Nothing here talks to the OS window directly; the platform layer
// implements `Surface` and feeds `SystemSignal`s through a channel.
//
//=========================================================================

pub mod config;
pub mod graphics;
pub mod input;
pub mod io;
pub mod math;
pub mod platform_bridge;
pub mod resources;
pub mod scene;
