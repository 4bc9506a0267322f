//=========================================================================
// Input Processor
//=========================================================================
//
// Converts winit keyboard events into engine key signals.
//
// Architecture:
//   Winit KeyEvent → key_signal() → SystemSignal::KeyDown/KeyUp → channel
//
// Keys are identified by physical position (USB HID scancodes), so the
// layout does not change which scancode a key reports. Keys outside the
// scancode table (F13-F24, media keys) are filtered (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::input::Scancode;
use crate::core::platform_bridge::SystemSignal;

//=== Event Processing ====================================================

/// Converts a winit key event to a key signal (filters unmapped keys).
pub(crate) fn process_key_event(key_event: &KeyEvent) -> Option<SystemSignal> {
    key_signal(key_event.physical_key, key_event.state)
}

/// Converts a physical key transition to a key signal.
///
/// OS key repeat arrives as another `Pressed` and is forwarded as
/// `KeyDown`; the keyboard's edge detection ignores it.
pub(crate) fn key_signal(physical_key: PhysicalKey, state: ElementState) -> Option<SystemSignal> {
    let code = match physical_key {
        PhysicalKey::Code(code) => scancode_from_winit(code)?,
        PhysicalKey::Unidentified(_) => return None,
    };

    Some(match state {
        ElementState::Pressed => SystemSignal::KeyDown(code),
        ElementState::Released => SystemSignal::KeyUp(code),
    })
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Maps winit physical key codes to USB HID scancodes.
///
/// Maps letters, digits, function keys F1-F12, navigation, arrows,
/// modifiers and common special keys. Everything else returns `None`.
pub(crate) fn scancode_from_winit(code: WinitKeyCode) -> Option<Scancode> {
    use WinitKeyCode::*;
    let scancode = match code {
        //--- Letters ------------------------------------------------------

        KeyA => Scancode::A,
        KeyB => Scancode::B,
        KeyC => Scancode::C,
        KeyD => Scancode::D,
        KeyE => Scancode::E,
        KeyF => Scancode::F,
        KeyG => Scancode::G,
        KeyH => Scancode::H,
        KeyI => Scancode::I,
        KeyJ => Scancode::J,
        KeyK => Scancode::K,
        KeyL => Scancode::L,
        KeyM => Scancode::M,
        KeyN => Scancode::N,
        KeyO => Scancode::O,
        KeyP => Scancode::P,
        KeyQ => Scancode::Q,
        KeyR => Scancode::R,
        KeyS => Scancode::S,
        KeyT => Scancode::T,
        KeyU => Scancode::U,
        KeyV => Scancode::V,
        KeyW => Scancode::W,
        KeyX => Scancode::X,
        KeyY => Scancode::Y,
        KeyZ => Scancode::Z,

        //--- Digits -------------------------------------------------------

        Digit1 => Scancode::DIGIT_1,
        Digit2 => Scancode::DIGIT_2,
        Digit3 => Scancode::DIGIT_3,
        Digit4 => Scancode::DIGIT_4,
        Digit5 => Scancode::DIGIT_5,
        Digit6 => Scancode::DIGIT_6,
        Digit7 => Scancode::DIGIT_7,
        Digit8 => Scancode::DIGIT_8,
        Digit9 => Scancode::DIGIT_9,
        Digit0 => Scancode::DIGIT_0,

        //--- Special ------------------------------------------------------

        Enter => Scancode::RETURN,
        Escape => Scancode::ESCAPE,
        Backspace => Scancode::BACKSPACE,
        Tab => Scancode::TAB,
        Space => Scancode::SPACE,
        Minus => Scancode::MINUS,
        Equal => Scancode::EQUALS,

        //--- Function Keys ------------------------------------------------

        F1 => Scancode::F1,
        F2 => Scancode::F2,
        F3 => Scancode::F3,
        F4 => Scancode::F4,
        F5 => Scancode::F5,
        F6 => Scancode::F6,
        F7 => Scancode::F7,
        F8 => Scancode::F8,
        F9 => Scancode::F9,
        F10 => Scancode::F10,
        F11 => Scancode::F11,
        F12 => Scancode::F12,

        //--- Navigation ---------------------------------------------------

        Insert => Scancode::INSERT,
        Home => Scancode::HOME,
        PageUp => Scancode::PAGE_UP,
        Delete => Scancode::DELETE,
        End => Scancode::END,
        PageDown => Scancode::PAGE_DOWN,

        //--- Arrows -------------------------------------------------------

        ArrowRight => Scancode::RIGHT,
        ArrowLeft => Scancode::LEFT,
        ArrowDown => Scancode::DOWN,
        ArrowUp => Scancode::UP,

        //--- Modifiers ----------------------------------------------------

        ControlLeft => Scancode::LCTRL,
        ShiftLeft => Scancode::LSHIFT,
        AltLeft => Scancode::LALT,
        SuperLeft => Scancode::LGUI,
        ControlRight => Scancode::RCTRL,
        ShiftRight => Scancode::RSHIFT,
        AltRight => Scancode::RALT,
        SuperRight => Scancode::RGUI,

        //--- Unmapped -----------------------------------------------------

        _ => return None,
    };
    Some(scancode)
}

//=========================================================================
// Tests
//=========================================================================
