//=========================================================================
// Scancodes
//=========================================================================
//
// Layout-independent physical key identifiers.
//
// Numbering follows the USB HID keyboard usage page (the same numbering
// SDL uses), so `Scancode::A` is 4 regardless of QWERTY/AZERTY. The
// space holds `Scancode::COUNT` codes; the keyboard sampler keeps one
// boolean per code.
//
//=========================================================================

//=== Scancode ============================================================

/// Physical key identifier in a fixed `0..Scancode::COUNT` space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Scancode(u16);

impl Scancode {
    /// Size of the scancode space.
    pub const COUNT: usize = 512;

    pub const UNKNOWN: Scancode = Scancode(0);

    //--- Letters ----------------------------------------------------------
    pub const A: Scancode = Scancode(4);
    pub const B: Scancode = Scancode(5);
    pub const C: Scancode = Scancode(6);
    pub const D: Scancode = Scancode(7);
    pub const E: Scancode = Scancode(8);
    pub const F: Scancode = Scancode(9);
    pub const G: Scancode = Scancode(10);
    pub const H: Scancode = Scancode(11);
    pub const I: Scancode = Scancode(12);
    pub const J: Scancode = Scancode(13);
    pub const K: Scancode = Scancode(14);
    pub const L: Scancode = Scancode(15);
    pub const M: Scancode = Scancode(16);
    pub const N: Scancode = Scancode(17);
    pub const O: Scancode = Scancode(18);
    pub const P: Scancode = Scancode(19);
    pub const Q: Scancode = Scancode(20);
    pub const R: Scancode = Scancode(21);
    pub const S: Scancode = Scancode(22);
    pub const T: Scancode = Scancode(23);
    pub const U: Scancode = Scancode(24);
    pub const V: Scancode = Scancode(25);
    pub const W: Scancode = Scancode(26);
    pub const X: Scancode = Scancode(27);
    pub const Y: Scancode = Scancode(28);
    pub const Z: Scancode = Scancode(29);

    //--- Number Row -------------------------------------------------------
    pub const DIGIT_1: Scancode = Scancode(30);
    pub const DIGIT_2: Scancode = Scancode(31);
    pub const DIGIT_3: Scancode = Scancode(32);
    pub const DIGIT_4: Scancode = Scancode(33);
    pub const DIGIT_5: Scancode = Scancode(34);
    pub const DIGIT_6: Scancode = Scancode(35);
    pub const DIGIT_7: Scancode = Scancode(36);
    pub const DIGIT_8: Scancode = Scancode(37);
    pub const DIGIT_9: Scancode = Scancode(38);
    pub const DIGIT_0: Scancode = Scancode(39);

    //--- Control Keys -----------------------------------------------------
    pub const RETURN: Scancode = Scancode(40);
    pub const ESCAPE: Scancode = Scancode(41);
    pub const BACKSPACE: Scancode = Scancode(42);
    pub const TAB: Scancode = Scancode(43);
    pub const SPACE: Scancode = Scancode(44);
    pub const MINUS: Scancode = Scancode(45);
    pub const EQUALS: Scancode = Scancode(46);

    //--- Function Keys ----------------------------------------------------
    pub const F1: Scancode = Scancode(58);
    pub const F2: Scancode = Scancode(59);
    pub const F3: Scancode = Scancode(60);
    pub const F4: Scancode = Scancode(61);
    pub const F5: Scancode = Scancode(62);
    pub const F6: Scancode = Scancode(63);
    pub const F7: Scancode = Scancode(64);
    pub const F8: Scancode = Scancode(65);
    pub const F9: Scancode = Scancode(66);
    pub const F10: Scancode = Scancode(67);
    pub const F11: Scancode = Scancode(68);
    pub const F12: Scancode = Scancode(69);

    //--- Navigation -------------------------------------------------------
    pub const INSERT: Scancode = Scancode(73);
    pub const HOME: Scancode = Scancode(74);
    pub const PAGE_UP: Scancode = Scancode(75);
    pub const DELETE: Scancode = Scancode(76);
    pub const END: Scancode = Scancode(77);
    pub const PAGE_DOWN: Scancode = Scancode(78);
    pub const RIGHT: Scancode = Scancode(79);
    pub const LEFT: Scancode = Scancode(80);
    pub const DOWN: Scancode = Scancode(81);
    pub const UP: Scancode = Scancode(82);

    //--- Modifiers --------------------------------------------------------
    pub const LCTRL: Scancode = Scancode(224);
    pub const LSHIFT: Scancode = Scancode(225);
    pub const LALT: Scancode = Scancode(226);
    pub const LGUI: Scancode = Scancode(227);
    pub const RCTRL: Scancode = Scancode(228);
    pub const RSHIFT: Scancode = Scancode(229);
    pub const RALT: Scancode = Scancode(230);
    pub const RGUI: Scancode = Scancode(231);

    /// Creates a scancode from its raw value; `None` outside the space.
    pub const fn from_raw(code: u16) -> Option<Self> {
        if (code as usize) < Self::COUNT {
            Some(Self(code))
        } else {
            None
        }
    }

    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Index into per-key state arrays.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hid_numbering() {
        assert_eq!(Scancode::A.raw(), 4);
        assert_eq!(Scancode::ESCAPE.raw(), 41);
        assert_eq!(Scancode::UP.raw(), 82);
    }

    #[test]
    fn from_raw_rejects_out_of_range() {
        assert_eq!(Scancode::from_raw(41), Some(Scancode::ESCAPE));
        assert_eq!(Scancode::from_raw(Scancode::COUNT as u16), None);
    }

    #[test]
    fn every_named_code_fits_state_arrays() {
        assert!(Scancode::RGUI.index() < Scancode::COUNT);
    }
}
