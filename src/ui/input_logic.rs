use crate::config::LONG_PRESS_MS;

/// Move selection cursor one item up, wrapping to the last item.
pub fn select_prev(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    (selected + item_count - 1) % item_count
}

/// Move selection cursor one item down, wrapping to the first item.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    (selected + 1) % item_count
}

/// How a completed (or ongoing) press on a button was classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressKind {
    Short,
    Long,
}

/// Turns sampled button levels into short / long presses.
///
/// `Long` is reported while the button is still down, as soon as the hold
/// exceeds the threshold, so the UI reacts without waiting for release.
/// `Short` is reported on release.
#[derive(Clone, Copy, Debug)]
pub struct PressTracker {
    long_press_ms: u64,
    pressed_at: Option<u64>,
    long_reported: bool,
}

impl PressTracker {
    pub const fn new() -> Self {
        Self::with_threshold(LONG_PRESS_MS)
    }

    pub const fn with_threshold(long_press_ms: u64) -> Self {
        Self {
            long_press_ms,
            pressed_at: None,
            long_reported: false,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed_at.is_some()
    }

    /// Feed one sample: `down` is the debounced level, `now_ms` a monotonic
    /// timestamp.
    pub fn update(&mut self, down: bool, now_ms: u64) -> Option<PressKind> {
        match (self.pressed_at, down) {
            (None, true) => {
                self.pressed_at = Some(now_ms);
                self.long_reported = false;
                None
            }
            (Some(start), true) => {
                if !self.long_reported && now_ms.saturating_sub(start) > self.long_press_ms {
                    self.long_reported = true;
                    Some(PressKind::Long)
                } else {
                    None
                }
            }
            (Some(_), false) => {
                self.pressed_at = None;
                if self.long_reported {
                    None
                } else {
                    Some(PressKind::Short)
                }
            }
            (None, false) => None,
        }
    }
}

impl Default for PressTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_wraps_both_ways() {
        assert_eq!(select_next(0, 5), 1);
        assert_eq!(select_next(4, 5), 0);
        assert_eq!(select_prev(0, 5), 4);
        assert_eq!(select_prev(3, 5), 2);
        assert_eq!(select_next(0, 1), 0);
        assert_eq!(select_prev(0, 1), 0);
    }

    #[test]
    fn selection_on_empty_list_stays_at_zero() {
        assert_eq!(select_next(0, 0), 0);
        assert_eq!(select_prev(0, 0), 0);
    }

    #[test]
    fn quick_tap_is_short() {
        let mut t = PressTracker::new();
        assert_eq!(t.update(true, 1000), None);
        assert!(t.is_pressed());
        assert_eq!(t.update(true, 1100), None);
        assert_eq!(t.update(false, 1150), Some(PressKind::Short));
        assert!(!t.is_pressed());
    }

    #[test]
    fn threshold_must_be_exceeded() {
        let mut t = PressTracker::new();
        t.update(true, 0);
        assert_eq!(t.update(true, LONG_PRESS_MS), None);
        assert_eq!(t.update(false, LONG_PRESS_MS), Some(PressKind::Short));
    }

    #[test]
    fn hold_reports_long_once_before_release() {
        let mut t = PressTracker::new();
        t.update(true, 0);
        assert_eq!(t.update(true, 401), Some(PressKind::Long));
        assert_eq!(t.update(true, 500), None);
        assert_eq!(t.update(true, 2000), None);
        // Releasing after a long press reports nothing.
        assert_eq!(t.update(false, 2010), None);
    }

    #[test]
    fn tracker_rearms_after_release() {
        let mut t = PressTracker::with_threshold(100);
        t.update(true, 0);
        assert_eq!(t.update(true, 150), Some(PressKind::Long));
        t.update(false, 160);
        t.update(true, 200);
        assert_eq!(t.update(false, 220), Some(PressKind::Short));
    }

    #[test]
    fn idle_samples_are_ignored() {
        let mut t = PressTracker::new();
        assert_eq!(t.update(false, 0), None);
        assert_eq!(t.update(false, 10_000), None);
    }

    #[test]
    fn clock_going_backwards_does_not_fire_long() {
        let mut t = PressTracker::new();
        t.update(true, 1000);
        assert_eq!(t.update(true, 10), None);
    }
}
