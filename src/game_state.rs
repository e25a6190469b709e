//! Player record shown on the HQ screen.
//!
//! Lives in RAM only; a power cycle starts a fresh game.

use crate::config::{GAME_LOG_CAPACITY, GAME_LOG_ENTRY_LEN};
use heapless::{Deque, String};

/// One line of the mission log, truncated to fit.
pub type LogEntry = String<GAME_LOG_ENTRY_LEN>;

#[derive(Clone, Debug)]
pub struct GameState {
    pub health: u16,
    pub max_health: u16,
    pub creds: u32,
    pub data: u32,
    pub game_mode: u8,
    /// Most recent entries, oldest first.
    log: Deque<LogEntry, GAME_LOG_CAPACITY>,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            health: 100,
            max_health: 100,
            creds: 50,
            data: 0,
            game_mode: 0,
            log: Deque::new(),
        }
    }

    /// Append to the log, evicting the oldest entry when full.
    pub fn add_log_entry(&mut self, entry: &str) {
        let mut line = LogEntry::new();
        for c in entry.chars() {
            if line.push(c).is_err() {
                break;
            }
        }

        if self.log.is_full() {
            self.log.pop_front();
        }
        let _ = self.log.push_back(line);
    }

    pub fn log_len(&self) -> usize {
        self.log.len()
    }

    pub fn last_log_entry(&self) -> Option<&str> {
        self.log.back().map(|entry| entry.as_str())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_game_defaults() {
        let state = GameState::new();
        assert_eq!(state.health, 100);
        assert_eq!(state.max_health, 100);
        assert_eq!(state.creds, 50);
        assert_eq!(state.data, 0);
        assert_eq!(state.game_mode, 0);
        assert_eq!(state.log_len(), 0);
        assert_eq!(state.last_log_entry(), None);
    }

    #[test]
    fn log_keeps_the_most_recent_entries() {
        let mut state = GameState::new();
        for i in 0..25 {
            let mut line: String<8> = String::new();
            core::fmt::Write::write_fmt(&mut line, format_args!("e{}", i)).unwrap();
            state.add_log_entry(&line);
        }
        assert_eq!(state.log_len(), GAME_LOG_CAPACITY);
        assert_eq!(state.log.front().map(|e| e.as_str()), Some("e5"));
        assert_eq!(state.last_log_entry(), Some("e24"));
    }

    #[test]
    fn long_entries_are_truncated() {
        let mut state = GameState::new();
        state.add_log_entry("a mission log line that is far too long");
        let entry = state.last_log_entry().unwrap();
        assert_eq!(entry.len(), GAME_LOG_ENTRY_LEN);
        assert!(entry.starts_with("a mission log"));
    }
}
