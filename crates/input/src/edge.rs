//! Edge-triggered key filter for terminal environments.
//!
//! The core expects each movement/rotation request once per discrete press, never once
//! per frame or per auto-repeat. Terminals report held keys as a stream of presses, and
//! many never send a release, so the filter reads the stream's timing instead:
//!
//! - a second press inside `tap_window_ms` is a new tap (auto-repeat never starts that soon)
//! - a press after that, but within `repeat_delay_ms`, is the first auto-repeat
//! - once repeating, presses closer than `repeat_gap_ms` are more repeats
//!
//! A key quiet for longer than its current window counts as released. Explicit
//! release events end a hold immediately.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::map::action_for_code;
use crate::types::GameAction;

/// Timing windows used to tell taps from auto-repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatTiming {
    /// Presses closer than this are separate taps
    pub tap_window_ms: u32,
    /// Longest wait for the first auto-repeat after a press
    pub repeat_delay_ms: u32,
    /// Longest gap between auto-repeats of a held key
    pub repeat_gap_ms: u32,
}

impl Default for RepeatTiming {
    fn default() -> Self {
        // Typical OS repeat delays run 250-660 ms, repeat rates 25-50 ms.
        Self {
            tap_window_ms: 200,
            repeat_delay_ms: 700,
            repeat_gap_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct HeldKey {
    action: GameAction,
    last_seen: Instant,
    repeating: bool,
}

/// Tracks which actions are held so only press edges produce commands.
#[derive(Debug, Clone)]
pub struct EdgeTrigger {
    held: ArrayVec<HeldKey, 8>,
    timing: RepeatTiming,
}

impl EdgeTrigger {
    pub fn new() -> Self {
        Self {
            held: ArrayVec::new(),
            timing: RepeatTiming::default(),
        }
    }

    pub fn with_timing(mut self, timing: RepeatTiming) -> Self {
        self.timing = timing;
        self
    }

    pub fn timing(&self) -> RepeatTiming {
        self.timing
    }

    /// Handle a press (or auto-repeat) of `code` at `now`.
    ///
    /// Returns the mapped action only on the press edge.
    pub fn handle_key_press(&mut self, code: KeyCode, now: Instant) -> Option<GameAction> {
        let action = action_for_code(code)?;
        self.expire(now);

        let tap_window = ms(self.timing.tap_window_ms);
        if let Some(held) = self.held.iter_mut().find(|h| h.action == action) {
            let quiet = now.saturating_duration_since(held.last_seen);
            held.last_seen = now;
            if !held.repeating && quiet < tap_window {
                return Some(action);
            }
            held.repeating = true;
            return None;
        }

        if self.held.is_full() {
            self.held.remove(0);
        }
        self.held.push(HeldKey {
            action,
            last_seen: now,
            repeating: false,
        });
        Some(action)
    }

    /// Handle an explicit release of `code`.
    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(action) = action_for_code(code) {
            self.held.retain(|h| h.action != action);
        }
    }

    /// Forget keys that have gone quiet for longer than their window.
    pub fn expire(&mut self, now: Instant) {
        let timing = self.timing;
        self.held.retain(|h| {
            let window = if h.repeating {
                timing.repeat_gap_ms
            } else {
                timing.repeat_delay_ms
            };
            now.saturating_duration_since(h.last_seen) <= ms(window)
        });
    }

    pub fn is_held(&self, action: GameAction) -> bool {
        self.held.iter().any(|h| h.action == action)
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl Default for EdgeTrigger {
    fn default() -> Self {
        Self::new()
    }
}

fn ms(value: u32) -> Duration {
    Duration::from_millis(u64::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(t0: Instant, offset_ms: u64) -> Instant {
        t0 + Duration::from_millis(offset_ms)
    }

    #[test]
    fn test_first_press_fires() {
        let mut edge = EdgeTrigger::new();
        let t0 = Instant::now();
        assert_eq!(
            edge.handle_key_press(KeyCode::Left, t0),
            Some(GameAction::MoveLeft)
        );
        assert!(edge.is_held(GameAction::MoveLeft));
    }

    #[test]
    fn test_held_key_fires_once_through_auto_repeat() {
        let mut edge = EdgeTrigger::new();
        let t0 = Instant::now();
        let mut fired = usize::from(edge.handle_key_press(KeyCode::Left, t0).is_some());

        // First auto-repeat after 500 ms, then one every 33 ms for two seconds.
        let mut t = 500;
        while t < 2500 {
            fired += usize::from(edge.handle_key_press(KeyCode::Left, at(t0, t)).is_some());
            t += 33;
        }
        assert_eq!(fired, 1);
        assert!(edge.is_held(GameAction::MoveLeft));
    }

    #[test]
    fn test_quick_taps_each_fire() {
        let mut edge = EdgeTrigger::new();
        let t0 = Instant::now();
        assert_eq!(
            edge.handle_key_press(KeyCode::Left, t0),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            edge.handle_key_press(KeyCode::Left, at(t0, 120)),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            edge.handle_key_press(KeyCode::Left, at(t0, 240)),
            Some(GameAction::MoveLeft)
        );
    }

    #[test]
    fn test_press_after_repeat_stream_stops_fires() {
        let mut edge = EdgeTrigger::new();
        let t0 = Instant::now();
        edge.handle_key_press(KeyCode::Down, t0);
        assert_eq!(edge.handle_key_press(KeyCode::Down, at(t0, 400)), None);
        assert_eq!(edge.handle_key_press(KeyCode::Down, at(t0, 430)), None);

        // The stream went quiet, so the key was let go.
        assert_eq!(
            edge.handle_key_press(KeyCode::Down, at(t0, 600)),
            Some(GameAction::SoftDrop)
        );
    }

    #[test]
    fn test_release_allows_next_press() {
        let mut edge = EdgeTrigger::new();
        let t0 = Instant::now();
        edge.handle_key_press(KeyCode::Up, t0);
        edge.handle_key_press(KeyCode::Up, at(t0, 300));
        edge.handle_key_release(KeyCode::Up);
        assert_eq!(
            edge.handle_key_press(KeyCode::Up, at(t0, 310)),
            Some(GameAction::Rotate)
        );
    }

    #[test]
    fn test_single_press_times_out_after_repeat_delay() {
        let timing = RepeatTiming {
            tap_window_ms: 50,
            repeat_delay_ms: 100,
            repeat_gap_ms: 20,
        };
        let mut edge = EdgeTrigger::new().with_timing(timing);
        let t0 = Instant::now();
        edge.handle_key_press(KeyCode::Down, t0);
        edge.expire(at(t0, 101));
        assert!(!edge.is_held(GameAction::SoftDrop));
        assert_eq!(
            edge.handle_key_press(KeyCode::Down, at(t0, 101)),
            Some(GameAction::SoftDrop)
        );
    }

    #[test]
    fn test_aliases_share_one_action() {
        let mut edge = EdgeTrigger::new();
        let t0 = Instant::now();
        assert!(edge.handle_key_press(KeyCode::Right, t0).is_some());
        assert!(edge.handle_key_press(KeyCode::Char('d'), at(t0, 300)).is_none());
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let mut edge = EdgeTrigger::new();
        assert_eq!(edge.handle_key_press(KeyCode::Char('x'), Instant::now()), None);
    }
}
