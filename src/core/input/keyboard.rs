//=========================================================================
// Keyboard
//=========================================================================
//
// Per-frame keyboard sampler with previous-frame snapshot.
//
// Architecture:
//   SystemSignal::KeyDown/KeyUp → press()/release() → current[]
//   update()                    → previous[] = current[]
//   is_just_pressed(k)          = current[k] && !previous[k]
//
// Frame lifecycle: update() → press()/release() → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use super::Scancode;

//=== Keyboard ============================================================

/// Tracks which keys are held now and which were held last frame.
pub struct Keyboard {
    current: [bool; Scancode::COUNT],
    previous: [bool; Scancode::COUNT],
}

impl Keyboard {
    /// Creates a keyboard with every key released.
    pub fn new() -> Self {
        Self {
            current: [false; Scancode::COUNT],
            previous: [false; Scancode::COUNT],
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Copies the current state into the previous-frame snapshot.
    ///
    /// Called once per frame, before this frame's key signals are applied.
    pub fn update(&mut self) {
        self.previous = self.current;
    }

    /// Marks `code` as held.
    pub fn press(&mut self, code: Scancode) {
        self.current[code.index()] = true;
    }

    /// Marks `code` as released.
    pub fn release(&mut self, code: Scancode) {
        self.current[code.index()] = false;
    }

    /// Releases every key (e.g. when the window loses focus).
    pub fn release_all(&mut self) {
        self.current = [false; Scancode::COUNT];
    }

    //=====================================================================
    // Query API
    //=====================================================================

    /// Live per-key state indexed by [`Scancode::index`].
    pub fn current_state(&self) -> &[bool] {
        &self.current
    }

    /// Returns `true` while `code` is held.
    pub fn is_pressed(&self, code: Scancode) -> bool {
        self.current[code.index()]
    }

    /// Returns `true` only on the frame `code` went from released to held.
    pub fn is_just_pressed(&self, code: Scancode) -> bool {
        self.current[code.index()] && !self.previous[code.index()]
    }

    /// Returns `true` only on the frame `code` went from held to released.
    pub fn is_just_released(&self, code: Scancode) -> bool {
        !self.current[code.index()] && self.previous[code.index()]
    }

    /// Iterates over every key currently held.
    pub fn pressed_keys(&self) -> impl Iterator<Item = Scancode> + '_ {
        self.current
            .iter()
            .enumerate()
            .filter(|&(_, &down)| down)
            .filter_map(|(index, _)| Scancode::from_raw(index as u16))
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Keyboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pressed: Vec<u16> = self.pressed_keys().map(Scancode::raw).collect();
        f.debug_struct("Keyboard").field("pressed", &pressed).finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    /// Runs one frame: snapshot, then apply the key changes.
    fn frame(keyboard: &mut Keyboard, down: &[Scancode], up: &[Scancode]) {
        keyboard.update();
        for &code in down {
            keyboard.press(code);
        }
        for &code in up {
            keyboard.release(code);
        }
    }

    //=====================================================================
    // Edge Tests
    //=====================================================================

    #[test]
    fn just_pressed_only_on_transition_frame() {
        let mut keyboard = Keyboard::new();

        // Frame 1: released
        frame(&mut keyboard, &[], &[]);
        assert!(!keyboard.is_just_pressed(Scancode::SPACE));

        // Frame 2: pressed
        frame(&mut keyboard, &[Scancode::SPACE], &[]);
        assert!(keyboard.is_just_pressed(Scancode::SPACE));
        assert!(keyboard.is_pressed(Scancode::SPACE));

        // Frame 3: still held
        frame(&mut keyboard, &[], &[]);
        assert!(!keyboard.is_just_pressed(Scancode::SPACE));
        assert!(keyboard.is_pressed(Scancode::SPACE));
    }

    #[test]
    fn repeated_key_down_does_not_retrigger() {
        let mut keyboard = Keyboard::new();

        frame(&mut keyboard, &[Scancode::A], &[]);
        assert!(keyboard.is_just_pressed(Scancode::A));

        // OS key repeat delivers KeyDown again while held
        frame(&mut keyboard, &[Scancode::A], &[]);
        assert!(!keyboard.is_just_pressed(Scancode::A));
    }

    #[test]
    fn just_released_on_release_frame() {
        let mut keyboard = Keyboard::new();

        frame(&mut keyboard, &[Scancode::UP], &[]);
        frame(&mut keyboard, &[], &[Scancode::UP]);

        assert!(keyboard.is_just_released(Scancode::UP));
        assert!(!keyboard.is_pressed(Scancode::UP));

        frame(&mut keyboard, &[], &[]);
        assert!(!keyboard.is_just_released(Scancode::UP));
    }

    #[test]
    fn press_and_release_within_one_frame_is_not_held() {
        let mut keyboard = Keyboard::new();

        frame(&mut keyboard, &[Scancode::B], &[Scancode::B]);

        assert!(!keyboard.is_pressed(Scancode::B));
        assert!(!keyboard.is_just_pressed(Scancode::B));
    }

    //=====================================================================
    // State Tests
    //=====================================================================

    #[test]
    fn keys_tracked_independently() {
        let mut keyboard = Keyboard::new();

        frame(&mut keyboard, &[Scancode::W, Scancode::D], &[]);
        frame(&mut keyboard, &[], &[Scancode::W]);

        assert!(!keyboard.is_pressed(Scancode::W));
        assert!(keyboard.is_pressed(Scancode::D));
        assert!(!keyboard.is_pressed(Scancode::S));
    }

    #[test]
    fn current_state_spans_scancode_space() {
        let mut keyboard = Keyboard::new();
        keyboard.press(Scancode::ESCAPE);

        let state = keyboard.current_state();
        assert_eq!(state.len(), Scancode::COUNT);
        assert!(state[Scancode::ESCAPE.index()]);
    }

    #[test]
    fn release_all_clears_current_state() {
        let mut keyboard = Keyboard::new();
        frame(&mut keyboard, &[Scancode::A, Scancode::LSHIFT], &[]);

        keyboard.release_all();

        assert_eq!(keyboard.pressed_keys().count(), 0);
    }

    #[test]
    fn pressed_keys_iterator() {
        let mut keyboard = Keyboard::new();
        frame(&mut keyboard, &[Scancode::A, Scancode::Z], &[]);

        let pressed: Vec<_> = keyboard.pressed_keys().collect();
        assert_eq!(pressed, vec![Scancode::A, Scancode::Z]);
    }
}
