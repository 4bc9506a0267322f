//=========================================================================
// Input System
//=========================================================================
//
// Keyboard polling for scenes.
//
// Architecture:
//   platform (winit KeyCode) → Scancode → SystemSignal
//     → SignalCollector → Keyboard (current / previous snapshot)
//
// Scenes read the `Keyboard` through their update context; they never
// see platform key types.
//
//=========================================================================

//=== Module Declarations =================================================

mod keyboard;
mod scancode;

//=== Public API ==========================================================

pub use keyboard::Keyboard;
pub use scancode::Scancode;
