// Easing curves for camera flights.
// EaseInOut is the navigation default; its cubic profile must stay exact,
// frame-for-frame, or recorded motion stops matching the live site.

use serde::{Deserialize, Serialize};

/// Easing curve applied to flight progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Fast start, smooth deceleration.
    EaseOut,
    /// Slow start, fast middle, slow end.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress in [0,1] to eased progress in [0,1].
    /// Monotonic, with `apply(0) == 0` and `apply(1) == 1`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL: [Easing; 3] = [Easing::Linear, Easing::EaseOut, Easing::EaseInOut];

    #[test]
    fn endpoints_are_fixed() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?} at t=0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?} at t=1");
        }
    }

    #[test]
    fn ease_in_out_midpoint_is_half() {
        assert!((Easing::EaseInOut.apply(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn ease_in_out_matches_cubic_form() {
        // t < 0.5 follows 4t^3; the upper half mirrors it.
        assert!((Easing::EaseInOut.apply(0.25) - 4.0 * 0.25f32.powi(3)).abs() < 1e-6);
        assert!((Easing::EaseInOut.apply(0.75) - (1.0 - (-2.0 * 0.75f32 + 2.0).powi(3) / 2.0)).abs() < 1e-6);
    }

    #[test]
    fn out_of_range_input_is_clamped() {
        for easing in ALL {
            assert_eq!(easing.apply(-0.3), 0.0);
            assert_eq!(easing.apply(1.7), 1.0);
        }
    }

    proptest! {
        /// Every curve is monotonically non-decreasing on [0,1].
        #[test]
        fn curves_are_monotonic(a in 0.0f32..=1.0, b in 0.0f32..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            for easing in ALL {
                prop_assert!(
                    easing.apply(lo) <= easing.apply(hi) + 1e-6,
                    "{:?} decreased between {} and {}",
                    easing, lo, hi
                );
            }
        }

        /// Output always stays inside [0,1].
        #[test]
        fn output_stays_in_unit_range(t in -1.0f32..=2.0) {
            for easing in ALL {
                let v = easing.apply(t);
                prop_assert!((0.0..=1.0).contains(&v), "{:?}({}) = {}", easing, t, v);
            }
        }
    }
}
