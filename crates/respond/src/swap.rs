//! Keypress-count triggers.
//!
//! A trigger fires after a random number of recorded keypresses, drawn from
//! an inclusive range, then re-arms with a fresh draw. The session uses these
//! to rotate themes and backgrounds mid-run.

use crate::rng::RandomSource;

/// Counts keypresses toward a randomly drawn threshold.
#[derive(Debug, Clone)]
pub enum KeypressTrigger {
    /// Never fires.
    Disabled,
    /// Fires once `count` reaches `threshold`, then re-arms.
    Enabled {
        /// Inclusive bounds for the threshold draw.
        min: u32,
        /// Upper bound; clamped up to `min` when the range is inverted.
        max: u32,
        /// Keypresses recorded since the last fire.
        count: u32,
        /// Keypresses required for the next fire.
        threshold: u32,
    },
}

impl KeypressTrigger {
    /// A trigger that never fires.
    pub fn disabled() -> Self {
        Self::Disabled
    }

    /// An armed trigger with a threshold drawn from `[min, max]`.
    pub fn enabled(min: u32, max: u32, rng: &mut RandomSource) -> Self {
        let min = min.max(1);
        let threshold = rng.range_inclusive(min, max);
        Self::Enabled {
            min,
            max,
            count: 0,
            threshold,
        }
    }

    /// Record one keypress. Returns true when the trigger fires; the trigger
    /// re-arms itself with a fresh threshold afterwards.
    pub fn record(&mut self, rng: &mut RandomSource) -> bool {
        match self {
            Self::Disabled => false,
            Self::Enabled {
                min,
                max,
                count,
                threshold,
            } => {
                *count += 1;
                if *count >= *threshold {
                    *count = 0;
                    *threshold = rng.range_inclusive(*min, *max);
                    true
                } else {
                    false
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_never_fires() {
        let mut rng = RandomSource::new(Some(3));
        let mut trigger = KeypressTrigger::disabled();
        for _ in 0..1000 {
            assert!(!trigger.record(&mut rng));
        }
    }

    #[test]
    fn fires_within_its_range_and_rearms() {
        let mut rng = RandomSource::new(Some(9));
        let mut trigger = KeypressTrigger::enabled(5, 10, &mut rng);
        let mut fires = Vec::new();
        let mut since_last = 0u32;
        for _ in 0..200 {
            since_last += 1;
            if trigger.record(&mut rng) {
                fires.push(since_last);
                since_last = 0;
            }
        }
        assert!(fires.len() >= 2);
        for gap in fires {
            assert!((5..=10).contains(&gap), "gap {gap} outside [5, 10]");
        }
    }

    #[test]
    fn degenerate_range_fires_every_n_presses() {
        let mut rng = RandomSource::new(Some(0));
        let mut trigger = KeypressTrigger::enabled(3, 3, &mut rng);
        let pattern: Vec<bool> = (0..9).map(|_| trigger.record(&mut rng)).collect();
        assert_eq!(
            pattern,
            vec![false, false, true, false, false, true, false, false, true]
        );
    }

    #[test]
    fn zero_minimum_is_clamped_to_one() {
        let mut rng = RandomSource::new(Some(4));
        let mut trigger = KeypressTrigger::enabled(0, 1, &mut rng);
        // Threshold is at least 1, so the first press may fire but never panics.
        let _ = trigger.record(&mut rng);
    }
}
