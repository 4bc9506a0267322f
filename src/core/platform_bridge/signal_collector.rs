//=========================================================================
// Signal Collector
//=========================================================================
//
// Loop-side consumer of platform signals.
//
// Architecture:
//   Receiver<SystemSignal> → collect_frame() → Keyboard + TickControl
//
// Key signals are applied to the keyboard before the escape edge is
// checked, so `is_just_pressed(ESCAPE)` sees this frame's transition.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::SystemSignal;
use crate::core::input::{Keyboard, Scancode};

//=== TickControl =========================================================

/// Loop control signal produced by signal processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== SignalCollector =====================================================

/// Drains platform signals once per frame.
pub struct SignalCollector {
    receiver: Receiver<SystemSignal>,
}

impl SignalCollector {
    pub fn new(receiver: Receiver<SystemSignal>) -> Self {
        Self { receiver }
    }

    /// Drains every pending signal, updating `keyboard` along the way.
    ///
    /// Returns [`TickControl::Exit`] if a quit signal or an escape
    /// just-pressed edge was seen, or if the platform side disconnected.
    /// The queue is always drained completely.
    pub fn collect_frame(&mut self, keyboard: &mut Keyboard) -> TickControl {
        let mut control = TickControl::Continue;

        loop {
            match self.receiver.try_recv() {
                Ok(signal) => {
                    if Self::handle_signal(signal, keyboard) == TickControl::Exit {
                        control = TickControl::Exit;
                    }
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!(target: "engine", "Platform signal channel disconnected");
                    return TickControl::Exit;
                }
            }
        }

        control
    }

    fn handle_signal(signal: SystemSignal, keyboard: &mut Keyboard) -> TickControl {
        match signal {
            SystemSignal::Quit => {
                info!(target: "engine", "Quit requested");
                TickControl::Exit
            }
            SystemSignal::KeyDown(code) => {
                keyboard.press(code);
                if code == Scancode::ESCAPE && keyboard.is_just_pressed(Scancode::ESCAPE) {
                    info!(target: "engine", "Escape pressed, quitting");
                    TickControl::Exit
                } else {
                    TickControl::Continue
                }
            }
            SystemSignal::KeyUp(code) => {
                keyboard.release(code);
                TickControl::Continue
            }
            SystemSignal::FocusLost => {
                debug!(target: "engine", "Focus lost, releasing held keys");
                keyboard.release_all();
                TickControl::Continue
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn collect_handles_empty_queue() {
        let (_tx, rx) = unbounded::<SystemSignal>();
        let mut collector = SignalCollector::new(rx);
        let mut keyboard = Keyboard::new();

        assert_eq!(collector.collect_frame(&mut keyboard), TickControl::Continue);
    }

    #[test]
    fn collect_returns_exit_on_quit() {
        let (tx, rx) = unbounded();
        let mut collector = SignalCollector::new(rx);
        let mut keyboard = Keyboard::new();

        tx.send(SystemSignal::Quit).unwrap();

        assert_eq!(collector.collect_frame(&mut keyboard), TickControl::Exit);
    }

    #[test]
    fn collect_drains_signals_after_quit() {
        let (tx, rx) = unbounded();
        let mut collector = SignalCollector::new(rx);
        let mut keyboard = Keyboard::new();

        tx.send(SystemSignal::Quit).unwrap();
        tx.send(SystemSignal::KeyDown(Scancode::A)).unwrap();

        assert_eq!(collector.collect_frame(&mut keyboard), TickControl::Exit);
        assert!(keyboard.is_pressed(Scancode::A));
        assert!(tx.is_empty());
    }

    #[test]
    fn escape_edge_exits() {
        let (tx, rx) = unbounded();
        let mut collector = SignalCollector::new(rx);
        let mut keyboard = Keyboard::new();

        keyboard.update();
        tx.send(SystemSignal::KeyDown(Scancode::ESCAPE)).unwrap();

        assert_eq!(collector.collect_frame(&mut keyboard), TickControl::Exit);
    }

    #[test]
    fn held_escape_repeat_does_not_exit_again() {
        let (tx, rx) = unbounded();
        let mut collector = SignalCollector::new(rx);
        let mut keyboard = Keyboard::new();

        // Escape already held last frame; OS key repeat sends KeyDown
        keyboard.press(Scancode::ESCAPE);
        keyboard.update();
        tx.send(SystemSignal::KeyDown(Scancode::ESCAPE)).unwrap();

        assert_eq!(collector.collect_frame(&mut keyboard), TickControl::Continue);
    }

    #[test]
    fn key_signals_update_keyboard() {
        let (tx, rx) = unbounded();
        let mut collector = SignalCollector::new(rx);
        let mut keyboard = Keyboard::new();

        tx.send(SystemSignal::KeyDown(Scancode::W)).unwrap();
        tx.send(SystemSignal::KeyDown(Scancode::D)).unwrap();
        tx.send(SystemSignal::KeyUp(Scancode::W)).unwrap();
        collector.collect_frame(&mut keyboard);

        assert!(!keyboard.is_pressed(Scancode::W));
        assert!(keyboard.is_pressed(Scancode::D));
    }

    #[test]
    fn focus_lost_releases_keys() {
        let (tx, rx) = unbounded();
        let mut collector = SignalCollector::new(rx);
        let mut keyboard = Keyboard::new();

        tx.send(SystemSignal::KeyDown(Scancode::SPACE)).unwrap();
        tx.send(SystemSignal::FocusLost).unwrap();
        collector.collect_frame(&mut keyboard);

        assert!(!keyboard.is_pressed(Scancode::SPACE));
    }

    #[test]
    fn collect_returns_exit_on_disconnect() {
        let (tx, rx) = unbounded::<SystemSignal>();
        let mut collector = SignalCollector::new(rx);
        let mut keyboard = Keyboard::new();

        drop(tx);

        assert_eq!(collector.collect_frame(&mut keyboard), TickControl::Exit);
    }
}
