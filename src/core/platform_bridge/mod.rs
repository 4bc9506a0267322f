//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the platform layer (winit + softbuffer) with the game loop.
//
// This module defines the contract between platform implementations and
// core logic, so the loop runs unchanged against the winit surface or a
// scripted test surface.
//
// Components:
// - `interface`: Signals, the `Surface` contract and startup errors
// - `signal_collector`: Loop-side signal draining
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod interface;
pub(crate) mod signal_collector;

//=== Public API ==========================================================

pub use interface::{StartupError, Surface, SystemSignal};
pub use signal_collector::{SignalCollector, TickControl};
